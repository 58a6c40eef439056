//! Progress reporting side channel.
//!
//! The analyzer pushes coarse checkpoints through an observer so a caller
//! can drive a progress bar. Progress is observable state only: it never
//! influences the analysis itself, and a single analyzer run is the only
//! writer for its observer.

use std::sync::Mutex;

/// Receives progress checkpoints during an analysis run.
pub trait ProgressObserver: Send + Sync {
    fn on_progress(&self, percent: u8, stage: &str);
}

/// Observer that discards all progress events.
pub struct NullProgress;

impl ProgressObserver for NullProgress {
    fn on_progress(&self, _percent: u8, _stage: &str) {}
}

/// Observer that records every event, for assertions in tests.
#[derive(Default)]
pub struct RecordingProgress {
    events: Mutex<Vec<(u8, String)>>,
}

impl RecordingProgress {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a snapshot of the recorded `(percent, stage)` events.
    pub fn events(&self) -> Vec<(u8, String)> {
        self.events.lock().expect("progress lock poisoned").clone()
    }

    /// Returns the last reported percentage, if any event was recorded.
    pub fn last_percent(&self) -> Option<u8> {
        self.events
            .lock()
            .expect("progress lock poisoned")
            .last()
            .map(|(percent, _)| *percent)
    }
}

impl ProgressObserver for RecordingProgress {
    fn on_progress(&self, percent: u8, stage: &str) {
        self.events
            .lock()
            .expect("progress lock poisoned")
            .push((percent, stage.to_string()));
    }
}
