use crate::capture::core::Event;
use crate::capture::frame_worker::FrameWorker;
use crate::capture::gate::CaptureGate;
use crate::config::Config;
use crate::image_classifier::impl_fake::ImageClassifierFake;
use crate::image_classifier::interface::ModelState;
use crate::library::logger::impl_console::LoggerConsole;
use crate::library::logger::interface::Logger;
use image::{DynamicImage, ImageBuffer, Rgb};
use std::sync::mpsc::{channel, Receiver};
use std::sync::Arc;

fn frame() -> DynamicImage {
    DynamicImage::ImageRgb8(ImageBuffer::from_pixel(64, 48, Rgb([120u8, 90, 60])))
}

fn worker_with(
    build: impl FnOnce(Arc<dyn Logger + Send + Sync>) -> ImageClassifierFake,
) -> (FrameWorker, Arc<CaptureGate>, Receiver<Event>) {
    let config = Config {
        input_size: 32,
        ..Config::default()
    };
    let logger: Arc<dyn Logger + Send + Sync> =
        Arc::new(LoggerConsole::new(config.logger_timezone));
    let classifier = Arc::new(build(logger.clone()));
    let gate = Arc::new(CaptureGate::new());
    let (bridge, events) = channel();
    let worker = FrameWorker::new(config, logger, gate.clone(), classifier, bridge);
    (worker, gate, events)
}

#[test]
fn test_closed_gate_skips_inference() {
    let (worker, _gate, events) =
        worker_with(|logger| ImageClassifierFake::new(logger).with_probabilities(vec![0.1, 0.9]));

    worker.process_frame(&frame());

    assert!(events.try_recv().is_err());
}

#[test]
fn test_open_gate_produces_exactly_one_result() {
    let (worker, gate, events) = worker_with(|logger| {
        ImageClassifierFake::new(logger).with_probabilities(vec![0.1, 0.9, 0.05])
    });

    gate.open();
    worker.process_frame(&frame());

    match events.try_recv() {
        Ok(Event::ResultArrived(result)) => {
            assert_eq!(result.label_index, 1);
            assert_eq!(result.confidence, 0.9);
        }
        other => panic!("Expected a result, got {:?}", other),
    }

    // The gate closed with the first frame; later frames yield nothing.
    worker.process_frame(&frame());
    assert!(events.try_recv().is_err());
}

#[test]
fn test_model_loading_consumes_gate_without_result() {
    let (worker, gate, events) =
        worker_with(|logger| ImageClassifierFake::new(logger).with_state(ModelState::Loading));

    gate.open();
    worker.process_frame(&frame());

    assert!(!gate.is_open());
    assert!(events.try_recv().is_err());
}

#[test]
fn test_malformed_frame_consumes_gate_without_result() {
    let (worker, gate, events) =
        worker_with(|logger| ImageClassifierFake::new(logger).with_probabilities(vec![0.1, 0.9]));

    gate.open();
    worker.process_frame(&DynamicImage::new_rgb8(0, 0));

    assert!(!gate.is_open());
    assert!(events.try_recv().is_err());
}

#[test]
fn test_inference_failure_terminates_cycle_without_result() {
    let (worker, gate, events) =
        worker_with(|logger| ImageClassifierFake::new(logger).with_failure());

    gate.open();
    worker.process_frame(&frame());

    assert!(!gate.is_open());
    assert!(events.try_recv().is_err());
}

#[test]
fn test_low_confidence_result_is_still_reported() {
    let (worker, gate, events) = worker_with(|logger| {
        ImageClassifierFake::new(logger).with_probabilities(vec![0.05, 0.02])
    });

    gate.open();
    worker.process_frame(&frame());

    match events.try_recv() {
        Ok(Event::ResultArrived(result)) => {
            assert_eq!(result.label_index, 0);
            assert_eq!(result.confidence, 0.05);
        }
        other => panic!("Expected a result, got {:?}", other),
    }
}

#[test]
fn test_tie_resolves_to_lowest_index() {
    let (worker, gate, events) = worker_with(|logger| {
        ImageClassifierFake::new(logger).with_probabilities(vec![0.4, 0.4, 0.4])
    });

    gate.open();
    worker.process_frame(&frame());

    match events.try_recv() {
        Ok(Event::ResultArrived(result)) => assert_eq!(result.label_index, 0),
        other => panic!("Expected a result, got {:?}", other),
    }
}
