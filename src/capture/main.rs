use crate::capture::core::Event;
use crate::capture::gate::CaptureGate;
use crate::capture::render::Render;
use crate::config::Config;
use crate::device_camera::interface::DeviceCamera;
use crate::device_display::interface::DeviceDisplay;
use crate::image_classifier::interface::ImageClassifier;
use crate::library::logger::interface::Logger;
use crate::sighting_store::interface::SightingStore;
use std::sync::atomic::AtomicU64;
use std::sync::mpsc::{channel, Receiver, Sender};
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub struct CaptureFlow {
    pub(super) config: Config,
    pub(super) logger: Arc<dyn Logger + Send + Sync>,
    pub(super) device_camera: Arc<dyn DeviceCamera + Send + Sync>,
    pub(super) classifier: Arc<dyn ImageClassifier + Send + Sync>,
    pub(super) gate: Arc<CaptureGate>,
    pub(super) sighting_store: Arc<dyn SightingStore + Send + Sync>,
    pub(super) render: Render,
    pub(super) sighting_counter: Arc<AtomicU64>,
    pub(super) event_sender: Sender<Event>,
    pub(super) event_receiver: Arc<Mutex<Receiver<Event>>>,
}

impl CaptureFlow {
    pub fn new(
        config: Config,
        logger: Arc<dyn Logger + Send + Sync>,
        device_camera: Arc<dyn DeviceCamera + Send + Sync>,
        classifier: Arc<dyn ImageClassifier + Send + Sync>,
        device_display: Arc<Mutex<dyn DeviceDisplay + Send + Sync>>,
        sighting_store: Arc<dyn SightingStore + Send + Sync>,
    ) -> Self {
        let (event_sender, event_receiver) = channel();
        let render = Render::new(device_display, classifier.clone(), config.clone());
        Self {
            config,
            logger: logger.with_namespace("capture"),
            device_camera,
            classifier,
            gate: Arc::new(CaptureGate::new()),
            sighting_store,
            render,
            sighting_counter: Arc::new(AtomicU64::new(0)),
            event_sender,
            event_receiver: Arc::new(Mutex::new(event_receiver)),
        }
    }

    /// Handle for pushing events into the presentation loop: the
    /// shutter button, and the frame worker's result bridge.
    pub fn event_sender(&self) -> Sender<Event> {
        self.event_sender.clone()
    }

    pub fn gate(&self) -> Arc<CaptureGate> {
        self.gate.clone()
    }
}
