//! Ports: trait boundaries to external collaborators.

pub mod extraction;
pub mod history;

pub use extraction::{AssessmentExtractor, ExtractedAssessment};
pub use history::DevolutivaHistory;
