//! The nine weighted behavioral health indices.

mod calculator;
mod health_index;

pub use calculator::IndexCalculator;
pub use health_index::{HealthIndex, IndexKind};
