use std::time::Duration;

/// Flash behavior requested for a capture. Auto and On both turn the
/// torch on for the duration of the capture cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlashMode {
    Auto,
    On,
    Off,
}

impl FlashMode {
    pub fn needs_light(&self) -> bool {
        matches!(self, FlashMode::On | FlashMode::Auto)
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    /// Side length of the square model input.
    pub input_size: u32,
    /// Results below this confidence are flagged as uncertain, not suppressed.
    pub confidence_threshold: f32,
    /// Fraction of width/height cropped away on each side before resizing.
    pub crop_margin: f32,
    pub flash_mode: FlashMode,
    /// Wait after turning the torch on; torches take non-zero time to
    /// reach full brightness and an immediate photo would be under-lit.
    pub torch_settle: Duration,
    /// Gap between opening the gate and requesting the photo, so the
    /// frame worker can consume the gate on a torch-lit preview frame.
    pub pre_capture_gap: Duration,
    /// Preview frame pacing for the fake camera.
    pub frame_interval: Duration,
    pub logger_timezone: chrono::FixedOffset,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input_size: 512,
            confidence_threshold: 0.1,
            crop_margin: 0.15,
            flash_mode: FlashMode::Auto,
            torch_settle: Duration::from_millis(250),
            pre_capture_gap: Duration::from_millis(100),
            frame_interval: Duration::from_millis(33),
            logger_timezone: utc(),
        }
    }
}

fn utc() -> chrono::FixedOffset {
    chrono::FixedOffset::east_opt(0).unwrap()
}
