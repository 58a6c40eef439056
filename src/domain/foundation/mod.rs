//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, enums, and error types
//! that form the vocabulary of the devolutiva domain.

mod errors;
mod ids;
mod phase;
mod timestamp;
mod visualization;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::DevolutivaId;
pub use phase::DevolutivaPhase;
pub use timestamp::Timestamp;
pub use visualization::Visualization;
