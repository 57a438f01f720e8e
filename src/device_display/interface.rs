use std::error::Error;

/// Small status display the capture flow renders into. Line 0 carries
/// the headline, further lines carry detail.
pub trait DeviceDisplay: Send + Sync {
    fn clear(&mut self) -> Result<(), Box<dyn Error + Send + Sync>>;
    fn write_line(&mut self, line: u8, text: &str) -> Result<(), Box<dyn Error + Send + Sync>>;
}
