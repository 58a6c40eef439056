//! A single step of the 15-step devolutiva narrative.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{DevolutivaPhase, Visualization};

/// One narrative step.
///
/// Steps are generated once, in phase order, and never reordered or
/// mutated after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DevolutivaStep {
    pub phase: DevolutivaPhase,
    /// 1-based position in the session; contiguous 1..=15 across phases.
    pub step_number: u8,
    pub title: String,
    pub description: String,
    /// Templated narrative content.
    pub content: String,
    /// Fixed rendering hint; metadata only.
    pub visualization: Option<Visualization>,
}

impl DevolutivaStep {
    /// Creates a new step.
    pub fn new(
        phase: DevolutivaPhase,
        step_number: u8,
        title: impl Into<String>,
        description: impl Into<String>,
        content: impl Into<String>,
        visualization: Option<Visualization>,
    ) -> Self {
        Self {
            phase,
            step_number,
            title: title.into(),
            description: description.into(),
            content: content.into(),
            visualization,
        }
    }
}
