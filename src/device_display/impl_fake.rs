use crate::device_display::interface::DeviceDisplay;
use std::error::Error;

/// Records everything written to it, for assertions in tests.
pub struct DeviceDisplayFake {
    pub written: Vec<(u8, String)>,
}

impl DeviceDisplayFake {
    pub fn new() -> Self {
        Self { written: vec![] }
    }

    #[allow(dead_code)]
    pub fn line(&self, line: u8) -> Option<&str> {
        self.written
            .iter()
            .rev()
            .find(|(n, _)| *n == line)
            .map(|(_, text)| text.as_str())
    }
}

impl DeviceDisplay for DeviceDisplayFake {
    fn clear(&mut self) -> Result<(), Box<dyn Error + Send + Sync>> {
        Ok(())
    }

    fn write_line(&mut self, line: u8, text: &str) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.written.push((line, text.to_string()));
        Ok(())
    }
}
