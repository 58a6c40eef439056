//! Application layer: the analysis orchestrator and its progress channel.

pub mod analyze;
pub mod progress;

pub use analyze::{AnalysisError, AnalysisInput, AnalysisOutcome, DevolutivaAnalyzer};
pub use progress::{NullProgress, ProgressObserver, RecordingProgress};
