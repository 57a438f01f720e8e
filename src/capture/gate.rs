use std::sync::atomic::{AtomicBool, Ordering};

/// One-shot permission flag authorizing exactly one classification
/// attempt per capture. The presentation side opens it; the frame
/// worker consumes it. Read-and-clear is a single atomic swap, so no
/// frame can observe a half-updated flag and no two frames can both
/// win one `open()`.
#[derive(Debug, Default)]
pub struct CaptureGate {
    armed: AtomicBool,
}

impl CaptureGate {
    pub fn new() -> Self {
        Self {
            armed: AtomicBool::new(false),
        }
    }

    pub fn open(&self) {
        self.armed.store(true, Ordering::Release);
    }

    /// Atomically reads and clears the flag. Returns whether the gate
    /// was open; the gate is closed afterwards regardless of what the
    /// caller does with the frame.
    pub fn consume(&self) -> bool {
        self.armed.swap(false, Ordering::AcqRel)
    }

    pub fn is_open(&self) -> bool {
        self.armed.load(Ordering::Acquire)
    }
}
