use crate::capture::core::{CaptureSession, Effect, Event};
use crate::capture::main::CaptureFlow;
use crate::sighting_store::interface::SightingRecord;
use crate::species;
use chrono::Utc;
use std::sync::atomic::Ordering;

impl CaptureFlow {
    pub(super) fn run_effect(&self, effect: Effect) {
        match effect {
            Effect::TorchOn => {
                if let Err(e) = self.device_camera.set_torch(true) {
                    let _ = self.logger.error(&format!("Failed to turn torch on: {}", e));
                }
            }
            Effect::SettleDelay => {
                std::thread::sleep(self.config.torch_settle);
                let _ = self.event_sender.send(Event::TorchSettled);
            }
            Effect::OpenGate => {
                self.gate.open();
            }
            Effect::PreCaptureGap => {
                std::thread::sleep(self.config.pre_capture_gap);
                let _ = self.event_sender.send(Event::PreCaptureGapDone);
            }
            Effect::TakePhoto => {
                let result = self.device_camera.take_photo();
                if let Err(e) = &result {
                    // Non-fatal: the cycle continues without an image.
                    let _ = self.logger.error(&format!("Failed to take photo: {}", e));
                }
                let _ = self.event_sender.send(Event::PhotoDone(result));
            }
            Effect::TorchOff => {
                let result = self.device_camera.set_torch(false);
                if let Err(e) = &result {
                    let _ = self
                        .logger
                        .error(&format!("Failed to turn torch off: {}", e));
                }
                let _ = self.event_sender.send(Event::TorchOffDone(result));
            }
            Effect::Navigate { session } => {
                let _ = self.logger.info("Navigating to results view");
                self.save_sighting(&session);
            }
        }
    }

    /// A cycle that produced a result is added to the collection; a
    /// cycle without one has nothing to save.
    fn save_sighting(&self, session: &CaptureSession) {
        let Some(result) = &session.result else {
            return;
        };

        let label = species::label_for(result.label_index);
        let scientific = species::species_info(&label)
            .map(|info| info.scientific.to_string())
            .unwrap_or_else(|| "Unknown".to_string());
        let captured_at = Utc::now();
        // Timestamps alone can collide within a millisecond; the
        // counter keeps every id distinct.
        let sequence = self.sighting_counter.fetch_add(1, Ordering::Relaxed);

        let record = SightingRecord {
            id: format!("{}-{}", captured_at.timestamp_millis(), sequence),
            label,
            scientific,
            captured_at,
            image_path: session.photo.clone(),
            confidence: result.confidence,
        };

        if let Err(e) = self.sighting_store.save(record) {
            let _ = self.logger.error(&format!("Failed to save sighting: {}", e));
        }
    }
}
