//! Tower readings: self-perception versus environmental demand per trait.

use serde::{Deserialize, Serialize};

use super::DominantProfile;

/// One tower reading for a DISC trait.
///
/// The tower model contrasts how the subject sees themselves
/// (autopercepção) with what their environment demands of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TowerReading {
    /// Which trait this reading measures.
    pub profile: DominantProfile,
    /// Autopercepção (0-100).
    pub self_perception: u8,
    /// Demanda do ambiente (0-100).
    pub environment_demand: u8,
}

impl TowerReading {
    /// Creates a new tower reading.
    pub fn new(profile: DominantProfile, self_perception: u8, environment_demand: u8) -> Self {
        Self {
            profile,
            self_perception,
            environment_demand,
        }
    }

    /// Absolute gap between self-perception and environmental demand.
    pub fn gap(&self) -> u8 {
        self.self_perception.abs_diff(self.environment_demand)
    }

    /// Which way the adaptation leans.
    pub fn direction(&self) -> &'static str {
        if self.self_perception > self.environment_demand {
            "Over-adapted to self"
        } else {
            "Under-adapted to environment"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gap_is_absolute_difference() {
        let reading = TowerReading::new(DominantProfile::D, 60, 55);
        assert_eq!(reading.gap(), 5);

        let reading = TowerReading::new(DominantProfile::S, 40, 70);
        assert_eq!(reading.gap(), 30);
    }

    #[test]
    fn direction_reflects_which_side_dominates() {
        let over = TowerReading::new(DominantProfile::D, 60, 55);
        assert_eq!(over.direction(), "Over-adapted to self");

        let under = TowerReading::new(DominantProfile::C, 40, 70);
        assert_eq!(under.direction(), "Under-adapted to environment");
    }
}
