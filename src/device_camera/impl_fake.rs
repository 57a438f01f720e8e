use crate::device_camera::interface::{DeviceCamera, DeviceCameraEvent};
use crate::library::logger::interface::Logger;
use image::{DynamicImage, ImageBuffer, Rgb};
use rand::distr::{Distribution, Uniform};
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::mpsc::Receiver;
use std::sync::Arc;
use std::time::Duration;

pub struct DeviceCameraFake {
    logger: Arc<dyn Logger + Send + Sync>,
    frame_interval: Duration,
    torch_on: Arc<AtomicBool>,
    fail_photos: Arc<AtomicBool>,
    photo_counter: AtomicU64,
}

impl DeviceCameraFake {
    pub fn new(logger: Arc<dyn Logger + Send + Sync>) -> Self {
        Self {
            logger: logger.with_namespace("camera").with_namespace("fake"),
            frame_interval: Duration::from_millis(33),
            torch_on: Arc::new(AtomicBool::new(false)),
            fail_photos: Arc::new(AtomicBool::new(false)),
            photo_counter: AtomicU64::new(0),
        }
    }

    pub fn with_frame_interval(mut self, frame_interval: Duration) -> Self {
        self.frame_interval = frame_interval;
        self
    }

    /// Makes every subsequent photo request fail.
    pub fn set_photo_failure(&self, fail: bool) {
        self.fail_photos.store(fail, Ordering::Release);
    }

    pub fn is_torch_on(&self) -> bool {
        self.torch_on.load(Ordering::Acquire)
    }

    fn generate_frame() -> Result<DynamicImage, Box<dyn std::error::Error + Send + Sync>> {
        let mut rng = rand::rng();
        let tint_dist = Uniform::new(0u16, 256)?;
        let tint = tint_dist.sample(&mut rng) as u8;
        let buffer = ImageBuffer::from_pixel(64, 48, Rgb([tint, 96, 64]));
        Ok(DynamicImage::ImageRgb8(buffer))
    }
}

impl DeviceCamera for DeviceCameraFake {
    fn start(&self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        self.logger.info("Starting camera...")?;
        Ok(())
    }

    fn stop(&self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        self.logger.info("Stopping camera...")?;
        Ok(())
    }

    fn frames(&self) -> Receiver<DynamicImage> {
        // Rendezvous channel plus try_send gives drop-not-queue
        // delivery: a frame hands over only if the worker is already
        // waiting for one; anything produced while it is busy is
        // discarded, never buffered.
        let (tx, rx) = std::sync::mpsc::sync_channel(0);
        let frame_interval = self.frame_interval;
        std::thread::spawn(move || loop {
            std::thread::sleep(frame_interval);
            let frame = match Self::generate_frame() {
                Ok(frame) => frame,
                Err(_) => continue,
            };
            if let Err(std::sync::mpsc::TrySendError::Disconnected(_)) = tx.try_send(frame) {
                break;
            }
        });
        rx
    }

    fn take_photo(&self) -> Result<PathBuf, Box<dyn std::error::Error + Send + Sync>> {
        self.logger.info("Taking photo...")?;
        std::thread::sleep(Duration::from_millis(50));
        if self.fail_photos.load(Ordering::Acquire) {
            self.logger.info("Photo request failed")?;
            return Err("photo capture failed".into());
        }
        let n = self.photo_counter.fetch_add(1, Ordering::Relaxed);
        let path = std::env::temp_dir().join(format!("fungeye-photo-{}.jpg", n));
        self.logger.info(&format!("Photo saved to {}", path.display()))?;
        Ok(path)
    }

    fn set_torch(&self, on: bool) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        self.torch_on.store(on, Ordering::Release);
        self.logger
            .info(if on { "Torch on" } else { "Torch off" })?;
        Ok(())
    }

    fn events(&self) -> Receiver<DeviceCameraEvent> {
        let (tx, rx) = std::sync::mpsc::channel();
        std::thread::spawn(move || {
            let _ = tx.send(DeviceCameraEvent::Connected);
        });
        rx
    }
}
