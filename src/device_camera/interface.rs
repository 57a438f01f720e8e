use image::DynamicImage;
use std::path::PathBuf;
use std::sync::mpsc::Receiver;

#[derive(Debug, Clone)]
pub enum DeviceCameraEvent {
    Disconnected,
    Connected,
}

pub trait DeviceCamera: Send + Sync {
    fn start(&self) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;
    #[allow(dead_code)]
    fn stop(&self) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;
    /// Continuous preview stream. Implementations deliver at most one
    /// frame at a time: frames produced while the receiver is busy are
    /// dropped, not queued.
    fn frames(&self) -> Receiver<DynamicImage>;
    /// High-resolution photo request. Blocking; run it from an effect
    /// thread. Returns the path the photo was written to.
    fn take_photo(&self) -> Result<PathBuf, Box<dyn std::error::Error + Send + Sync>>;
    fn set_torch(&self, on: bool) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;
    fn events(&self) -> Receiver<DeviceCameraEvent>;
}
