//! Devolutiva session aggregate, report data, and the 15-step narrative.

mod data;
mod narrative;
mod session;
mod step;

pub use data::{DevolutivaData, GeneratedContent, GeneratedQuestion, GeneratedQuestions};
pub use narrative::NarrativeAssembler;
pub use session::{DevolutivaSession, EXPECTED_STEP_COUNT};
pub use step::DevolutivaStep;
