use capture::core::Event;
use capture::main::CaptureFlow;
use config::Config;
use device_camera::impl_fake::DeviceCameraFake;
use device_display::impl_console::DeviceDisplayConsole;
use image_classifier::impl_fake::ImageClassifierFake;
use image_classifier::impl_tract::ImageClassifierTract;
use image_classifier::interface::ImageClassifier;
use library::logger::impl_console::LoggerConsole;
use library::logger::interface::Logger;
use sighting_store::impl_fake::SightingStoreFake;
use std::sync::{Arc, Mutex};

mod capture;
mod config;
mod device_camera;
mod device_display;
mod image_classifier;
mod library;
mod sighting_store;
mod species;

fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let config = Config::default();

    let logger: Arc<dyn Logger + Send + Sync> = Arc::new(LoggerConsole::new(config.logger_timezone));

    let device_camera = Arc::new(
        DeviceCameraFake::new(logger.clone()).with_frame_interval(config.frame_interval),
    );

    let device_display = Arc::new(Mutex::new(DeviceDisplayConsole::new()));

    // Pass an ONNX model path to classify with a real model; the fake
    // classifier otherwise stands in for demo runs.
    let classifier: Arc<dyn ImageClassifier + Send + Sync> = match std::env::args().nth(1) {
        Some(model_path) => Arc::new(ImageClassifierTract::load(&model_path, config.input_size)?),
        None => Arc::new(ImageClassifierFake::new(logger.clone())),
    };

    let sighting_store = Arc::new(SightingStoreFake::new());

    let capture_flow = CaptureFlow::new(
        config,
        logger,
        device_camera,
        classifier,
        device_display,
        sighting_store,
    );

    // Stand-in for the user: press the shutter, dwell on the results
    // view, return to the camera, repeat.
    let shutter = capture_flow.event_sender();
    std::thread::spawn(move || loop {
        let _ = shutter.send(Event::ShutterPressed);
        std::thread::sleep(std::time::Duration::from_secs(4));
        let _ = shutter.send(Event::ReturnToCamera);
        std::thread::sleep(std::time::Duration::from_secs(2));
    });

    if let Err(e) = capture_flow.run() {
        return Err(e.to_string().into());
    }

    Ok(())
}
