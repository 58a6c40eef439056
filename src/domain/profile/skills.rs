//! Skill and values-pyramid types extracted from supporting documents.

use serde::{Deserialize, Serialize};
use std::fmt;

/// How a skill relates to the subject's development direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillKind {
    /// Established strength to lean on.
    Core,
    /// Growth opportunity to develop.
    Expansion,
    /// Tendency to moderate.
    Retraction,
}

impl fmt::Display for SkillKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SkillKind::Core => "core",
            SkillKind::Expansion => "expansion",
            SkillKind::Retraction => "retraction",
        };
        write!(f, "{}", s)
    }
}

/// A named skill or competency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    pub kind: SkillKind,
    /// Proficiency 0-100, when the source document provides one.
    pub proficiency: Option<u8>,
}

impl Skill {
    /// Creates a new skill.
    pub fn new(name: impl Into<String>, kind: SkillKind) -> Self {
        Self {
            name: name.into(),
            kind,
            proficiency: None,
        }
    }

    /// Creates a new skill with a proficiency score.
    pub fn with_proficiency(name: impl Into<String>, kind: SkillKind, proficiency: u8) -> Self {
        Self {
            name: name.into(),
            kind,
            proficiency: Some(proficiency),
        }
    }
}

/// Personal values hierarchy: foundation, middle tier, and apex.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValuesPyramid {
    /// Fundamentos: non-negotiable core values.
    pub base: Vec<String>,
    /// Desenvolvimento: important guiding values.
    pub middle: Vec<String>,
    /// Ápice: the single overarching purpose.
    pub top: String,
}

impl ValuesPyramid {
    /// Creates a new values pyramid.
    pub fn new(
        base: Vec<String>,
        middle: Vec<String>,
        top: impl Into<String>,
    ) -> Self {
        Self {
            base,
            middle,
            top: top.into(),
        }
    }
}
