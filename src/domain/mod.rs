//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, enums, errors)
//! - `profile` - DISC profile, dominant-profile classifier, tower and skill data
//! - `indices` - The nine weighted behavioral health indices
//! - `correlation` - Weighted-affinity scores against external dimensions
//! - `devolutiva` - Session aggregate, report data, and the 15-step narrative

pub mod correlation;
pub mod devolutiva;
pub mod foundation;
pub mod indices;
pub mod profile;
