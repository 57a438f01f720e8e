use crate::device_display::interface::DeviceDisplay;
use std::error::Error;

pub struct DeviceDisplayConsole {
    lines: Vec<String>,
}

impl DeviceDisplayConsole {
    pub fn new() -> Self {
        Self {
            lines: vec![String::new(); 4],
        }
    }

    fn render(&self) {
        println!("┌──────────────────────────────────────┐");
        for line in &self.lines {
            println!("│ {:<36} │", truncated(line, 36));
        }
        println!("└──────────────────────────────────────┘");
    }
}

fn truncated(text: &str, max: usize) -> String {
    text.chars().take(max).collect()
}

impl DeviceDisplay for DeviceDisplayConsole {
    fn clear(&mut self) -> Result<(), Box<dyn Error + Send + Sync>> {
        for line in &mut self.lines {
            line.clear();
        }
        Ok(())
    }

    fn write_line(&mut self, line: u8, text: &str) -> Result<(), Box<dyn Error + Send + Sync>> {
        let index = line as usize;
        if index >= self.lines.len() {
            return Err("invalid line number".into());
        }
        self.lines[index] = text.to_string();
        self.render();
        Ok(())
    }
}
