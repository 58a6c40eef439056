//! Devolutiva phase enum covering the fixed 15-step structure.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::RangeInclusive;

/// One of the four fixed phases of a devolutiva session.
///
/// The phases partition the 15 steps into fixed, contiguous ranges:
/// rapport 1-4, indices 5-8, identity 9-12, transformation 13-15.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DevolutivaPhase {
    /// Rapport & initial understanding (steps 1-4).
    Rapport,
    /// Behavioral indices & health analysis (steps 5-8).
    Indices,
    /// Identity & values discovery (steps 9-12).
    Identity,
    /// Transformation & action planning (steps 13-15).
    Transformation,
}

impl DevolutivaPhase {
    /// All phases in session order.
    pub const ALL: [DevolutivaPhase; 4] = [
        DevolutivaPhase::Rapport,
        DevolutivaPhase::Indices,
        DevolutivaPhase::Identity,
        DevolutivaPhase::Transformation,
    ];

    /// The step numbers belonging to this phase.
    pub fn step_range(&self) -> RangeInclusive<u8> {
        match self {
            DevolutivaPhase::Rapport => 1..=4,
            DevolutivaPhase::Indices => 5..=8,
            DevolutivaPhase::Identity => 9..=12,
            DevolutivaPhase::Transformation => 13..=15,
        }
    }

    /// Number of steps in this phase.
    pub fn step_count(&self) -> usize {
        self.step_range().count()
    }

    /// Returns the display label for this phase.
    pub fn label(&self) -> &'static str {
        match self {
            DevolutivaPhase::Rapport => "Rapport & Initial Understanding",
            DevolutivaPhase::Indices => "Behavioral Indices & Health Analysis",
            DevolutivaPhase::Identity => "Identity & Values Discovery",
            DevolutivaPhase::Transformation => "Transformation & Action Planning",
        }
    }
}

impl fmt::Display for DevolutivaPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            DevolutivaPhase::Rapport => "rapport",
            DevolutivaPhase::Indices => "indices",
            DevolutivaPhase::Identity => "identity",
            DevolutivaPhase::Transformation => "transformation",
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phases_cover_exactly_fifteen_steps() {
        let total: usize = DevolutivaPhase::ALL.iter().map(|p| p.step_count()).sum();
        assert_eq!(total, 15);
    }

    #[test]
    fn phase_ranges_are_contiguous() {
        let mut expected = 1u8;
        for phase in DevolutivaPhase::ALL {
            for step in phase.step_range() {
                assert_eq!(step, expected);
                expected += 1;
            }
        }
        assert_eq!(expected, 16);
    }

    #[test]
    fn phase_serializes_lowercase() {
        let json = serde_json::to_string(&DevolutivaPhase::Rapport).unwrap();
        assert_eq!(json, "\"rapport\"");
        let json = serde_json::to_string(&DevolutivaPhase::Transformation).unwrap();
        assert_eq!(json, "\"transformation\"");
    }
}
