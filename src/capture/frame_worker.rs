use crate::capture::core::Event;
use crate::capture::gate::CaptureGate;
use crate::config::Config;
use crate::image_classifier::interface::{select_result, ImageClassifier, ModelState};
use crate::image_classifier::preprocess::preprocess;
use crate::library::logger::interface::Logger;
use image::DynamicImage;
use std::sync::mpsc::{Receiver, Sender};
use std::sync::Arc;

/// The frame-processing context. Runs on its own thread, one frame in
/// flight at a time; the camera drops frames delivered while a previous
/// one is still being processed.
pub struct FrameWorker {
    config: Config,
    logger: Arc<dyn Logger + Send + Sync>,
    gate: Arc<CaptureGate>,
    classifier: Arc<dyn ImageClassifier + Send + Sync>,
    /// The result bridge: results cross into the presentation context
    /// by value, in send order.
    bridge: Sender<Event>,
}

impl FrameWorker {
    pub fn new(
        config: Config,
        logger: Arc<dyn Logger + Send + Sync>,
        gate: Arc<CaptureGate>,
        classifier: Arc<dyn ImageClassifier + Send + Sync>,
        bridge: Sender<Event>,
    ) -> Self {
        Self {
            config,
            logger: logger.with_namespace("frame_worker"),
            gate,
            classifier,
            bridge,
        }
    }

    /// Runs until the frame stream closes.
    pub fn run(&self, frames: Receiver<DynamicImage>) {
        for frame in frames.iter() {
            self.process_frame(&frame);
        }
    }

    /// One frame cycle. The gate is consumed first, so a single
    /// `open()` authorizes at most one classification attempt even
    /// when the attempt yields nothing.
    pub fn process_frame(&self, frame: &DynamicImage) {
        if !self.gate.consume() {
            return;
        }

        if self.classifier.state() != ModelState::Loaded {
            let _ = self.logger.info("Model not loaded; skipping classification");
            return;
        }

        let Some(tensor) = preprocess(frame, self.config.input_size, self.config.crop_margin)
        else {
            let _ = self.logger.info("Malformed frame; skipping classification");
            return;
        };

        let probabilities = match self.classifier.classify(tensor) {
            Ok(probabilities) => probabilities,
            Err(e) => {
                let _ = self.logger.error(&format!("Inference failed: {}", e));
                return;
            }
        };

        let Some(result) = select_result(&probabilities) else {
            return;
        };

        if result.confidence < self.config.confidence_threshold {
            let _ = self.logger.info(&format!(
                "Low-confidence result ({:.2}); reporting as uncertain",
                result.confidence
            ));
        }

        let _ = self.bridge.send(Event::ResultArrived(result));
    }
}
