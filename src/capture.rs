//! The single-shot capture cycle: shutter press to results view.
//!
//! `core` is the pure state machine, `gate` the one-shot classification
//! permission flag shared with the frame-processing thread, and
//! `frame_worker` the per-frame path that consumes the gate, runs
//! inference, and hands the result back over the event channel.

pub mod core;
pub mod frame_worker;
pub mod gate;
pub mod main;
pub mod render;
pub mod run;
pub mod run_effect;
