//! DISC profile types and supporting assessment data.

mod disc;
mod skills;
mod tower;

pub use disc::{DiscProfile, DominantProfile};
pub use skills::{Skill, SkillKind, ValuesPyramid};
pub use tower::TowerReading;
