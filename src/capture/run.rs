use crate::capture::core::{init, transition, Effect, Event};
use crate::capture::frame_worker::FrameWorker;
use crate::capture::main::CaptureFlow;
use crate::capture::render::Availability;
use crate::device_camera::interface::DeviceCameraEvent;
use std::sync::Arc;

impl CaptureFlow {
    /// Starts the camera and the frame-processing thread, then drives
    /// the presentation loop until the event channel closes.
    pub fn run(&self) -> Result<(), Arc<dyn std::error::Error + Send + Sync>> {
        self.device_camera
            .start()
            .map_err(Arc::<dyn std::error::Error + Send + Sync>::from)?;

        let frames = self.device_camera.frames();
        let worker = FrameWorker::new(
            self.config.clone(),
            self.logger.clone(),
            self.gate.clone(),
            self.classifier.clone(),
            self.event_sender(),
        );
        std::thread::spawn(move || worker.run(frames));

        let camera_events = self.device_camera.events();
        let camera_bridge = self.event_sender();
        std::thread::spawn(move || {
            for event in camera_events.iter() {
                if camera_bridge.send(Event::CameraEvent(event)).is_err() {
                    break;
                }
            }
        });

        let mut availability = Availability {
            camera_connected: false,
        };
        let (mut current_state, effects) = init();
        self.render.render(&current_state, &availability)?;
        self.spawn_effects(effects);

        loop {
            let event = match self.event_receiver.lock().unwrap().recv() {
                Ok(event) => event,
                Err(e) => return Err(Arc::new(e)),
            };

            let _ = self
                .logger
                .info(&format!("Processing event: {:?}", event));

            if let Event::CameraEvent(camera_event) = &event {
                availability.camera_connected =
                    matches!(camera_event, DeviceCameraEvent::Connected);
            }

            let (new_state, new_effects) = transition(&self.config, current_state, event);
            current_state = new_state;
            self.render.render(&current_state, &availability)?;

            self.spawn_effects(new_effects);
        }
    }

    pub(super) fn spawn_effects(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                // Gate and torch flips must land before the delay
                // effects that pace them, so they run inline.
                Effect::OpenGate | Effect::TorchOn => self.run_effect(effect),
                effect => {
                    let self_clone = self.clone();
                    std::thread::spawn(move || self_clone.run_effect(effect));
                }
            }
        }
    }
}
