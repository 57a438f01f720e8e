use crate::config::Config;
use crate::device_camera::interface::DeviceCameraEvent;
use crate::image_classifier::interface::ClassificationResult;
use std::path::PathBuf;

/// Everything one shutter press accumulates. Created on shutter press,
/// dropped when the user returns to the camera.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CaptureSession {
    /// Whether this cycle turned the torch on (and so must turn it off).
    pub torch_on: bool,
    pub result: Option<ClassificationResult>,
    pub photo: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum State {
    Idle,
    /// Torch requested; waiting for it to reach full brightness.
    FlashSettling { session: CaptureSession },
    /// Gate open; giving the frame worker a chance to consume it on a
    /// lit preview frame before the photo request starts.
    GateOpen { session: CaptureSession },
    PhotoPending { session: CaptureSession },
    FlashOff { session: CaptureSession },
    /// Results view. The session stays readable here; a late-arriving
    /// classification result is still applied.
    Navigated { session: CaptureSession },
}

#[derive(Debug)]
pub enum Event {
    ShutterPressed,
    TorchSettled,
    PreCaptureGapDone,
    PhotoDone(Result<PathBuf, Box<dyn std::error::Error + Send + Sync>>),
    TorchOffDone(Result<(), Box<dyn std::error::Error + Send + Sync>>),
    /// Delivered over the result bridge from the frame worker.
    ResultArrived(ClassificationResult),
    ReturnToCamera,
    /// Connectivity updates fold into the presentation loop's
    /// availability status; they never disturb a running cycle.
    CameraEvent(DeviceCameraEvent),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    TorchOn,
    SettleDelay,
    OpenGate,
    PreCaptureGap,
    TakePhoto,
    TorchOff,
    /// Fires exactly once per capture cycle, whatever the cycle produced.
    Navigate { session: CaptureSession },
}

pub fn init() -> (State, Vec<Effect>) {
    (State::Idle, vec![])
}

pub fn transition(config: &Config, state: State, event: Event) -> (State, Vec<Effect>) {
    match (state, event) {
        (State::Idle, Event::ShutterPressed) => {
            if config.flash_mode.needs_light() {
                (
                    State::FlashSettling {
                        session: CaptureSession {
                            torch_on: true,
                            ..CaptureSession::default()
                        },
                    },
                    vec![Effect::TorchOn, Effect::SettleDelay],
                )
            } else {
                (
                    State::GateOpen {
                        session: CaptureSession::default(),
                    },
                    vec![Effect::OpenGate, Effect::PreCaptureGap],
                )
            }
        }
        (State::FlashSettling { session }, Event::TorchSettled) => (
            State::GateOpen { session },
            vec![Effect::OpenGate, Effect::PreCaptureGap],
        ),
        (State::GateOpen { session }, Event::PreCaptureGapDone) => {
            (State::PhotoPending { session }, vec![Effect::TakePhoto])
        }
        (State::PhotoPending { mut session }, Event::PhotoDone(result)) => {
            // A failed photo is logged by the effect runner; the cycle
            // proceeds with the image reference unset.
            session.photo = result.ok();
            if session.torch_on {
                (
                    State::FlashOff {
                        session: session.clone(),
                    },
                    vec![Effect::TorchOff],
                )
            } else {
                (
                    State::Navigated {
                        session: session.clone(),
                    },
                    vec![Effect::Navigate { session }],
                )
            }
        }
        (State::FlashOff { session }, Event::TorchOffDone(_)) => (
            State::Navigated {
                session: session.clone(),
            },
            vec![Effect::Navigate { session }],
        ),
        (State::Navigated { .. }, Event::ReturnToCamera) => (State::Idle, vec![]),
        // The classification result and the photo write disjoint session
        // fields; whichever state the cycle is in, the last writer wins.
        (state, Event::ResultArrived(result)) => (with_result(state, result), vec![]),
        (state, _) => (state, vec![]),
    }
}

fn with_result(state: State, result: ClassificationResult) -> State {
    match state {
        // No cycle to attach it to; a stale result is dropped.
        State::Idle => State::Idle,
        State::FlashSettling { mut session } => {
            session.result = Some(result);
            State::FlashSettling { session }
        }
        State::GateOpen { mut session } => {
            session.result = Some(result);
            State::GateOpen { session }
        }
        State::PhotoPending { mut session } => {
            session.result = Some(result);
            State::PhotoPending { session }
        }
        State::FlashOff { mut session } => {
            session.result = Some(result);
            State::FlashOff { session }
        }
        State::Navigated { mut session } => {
            session.result = Some(result);
            State::Navigated { session }
        }
    }
}
