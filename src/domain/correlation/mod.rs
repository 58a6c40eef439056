//! Correlation engine: weighted affinity between the DISC profile and
//! external assessment dimensions.

mod engine;
mod result;

pub use engine::CorrelationEngine;
pub use result::{CorrelationResult, Correlations};
