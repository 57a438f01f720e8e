use crate::capture::core::{CaptureSession, State};
use crate::config::Config;
use crate::device_display::interface::DeviceDisplay;
use crate::image_classifier::interface::{ImageClassifier, ModelState};
use crate::species;
use std::sync::{Arc, Mutex};

/// Device availability as last reported to the presentation loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Availability {
    pub camera_connected: bool,
}

#[derive(Clone)]
pub struct Render {
    device_display: Arc<Mutex<dyn DeviceDisplay + Send + Sync>>,
    classifier: Arc<dyn ImageClassifier + Send + Sync>,
    config: Config,
}

impl Render {
    pub fn new(
        device_display: Arc<Mutex<dyn DeviceDisplay + Send + Sync>>,
        classifier: Arc<dyn ImageClassifier + Send + Sync>,
        config: Config,
    ) -> Self {
        Self {
            device_display,
            classifier,
            config,
        }
    }

    pub fn render(
        &self,
        state: &State,
        availability: &Availability,
    ) -> Result<(), Arc<dyn std::error::Error + Send + Sync>> {
        let mut device_display = self.device_display.lock().unwrap();

        device_display.clear()?;

        match state {
            State::Idle => {
                self.render_idle(&mut *device_display, availability)?;
            }
            State::FlashSettling { .. } => {
                device_display.write_line(0, "Torch settling...")?;
            }
            State::GateOpen { .. } => {
                device_display.write_line(0, "Scanning frame...")?;
            }
            State::PhotoPending { .. } => {
                device_display.write_line(0, "Capturing photo...")?;
            }
            State::FlashOff { .. } => {
                device_display.write_line(0, "Restoring torch...")?;
            }
            State::Navigated { session } => {
                self.render_results(&mut *device_display, session)?;
            }
        }

        Ok(())
    }

    /// Unavailable resources render as status lines, not errors; the
    /// screen stays idle until they come back.
    fn render_idle(
        &self,
        device_display: &mut (dyn DeviceDisplay + Send + Sync),
        availability: &Availability,
    ) -> Result<(), Arc<dyn std::error::Error + Send + Sync>> {
        if !availability.camera_connected {
            device_display.write_line(0, "No camera device found")?;
            return Ok(());
        }

        match self.classifier.state() {
            ModelState::Loading => {
                device_display.write_line(0, "Initializing neural network...")?;
            }
            ModelState::Error => {
                device_display.write_line(0, "Model failed to load")?;
            }
            ModelState::Loaded => {
                device_display.write_line(0, "Ready to capture")?;
                device_display.write_line(1, "Tap shutter to identify")?;
            }
        }

        Ok(())
    }

    /// The results view handles "no result yet" and "no image" as valid
    /// display states.
    fn render_results(
        &self,
        device_display: &mut (dyn DeviceDisplay + Send + Sync),
        session: &CaptureSession,
    ) -> Result<(), Arc<dyn std::error::Error + Send + Sync>> {
        match &session.result {
            Some(result) => {
                let label = species::label_for(result.label_index);
                let match_percent = (result.confidence * 100.0).round() as u32;
                if result.confidence < self.config.confidence_threshold {
                    device_display
                        .write_line(0, &format!("Uncertain: {} ({}%)", label, match_percent))?;
                } else {
                    device_display.write_line(0, &format!("{} ({}% match)", label, match_percent))?;
                }
                if let Some(info) = species::species_info(&label) {
                    device_display
                        .write_line(1, &format!("{} - {:?}", info.scientific, info.kind))?;
                    device_display.write_line(3, info.description)?;
                }
            }
            None => {
                device_display.write_line(0, "No identification yet")?;
            }
        }

        match &session.photo {
            Some(path) => {
                device_display.write_line(2, &format!("Photo: {}", path.display()))?;
            }
            None => {
                device_display.write_line(2, "No photo captured")?;
            }
        }

        Ok(())
    }
}
