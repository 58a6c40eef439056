//! DISC profile value object and dominant-profile classification.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::ValidationError;

/// A DISC behavioral profile: four independent axes, each 0-100.
///
/// # Invariants
///
/// - Each axis is within [0, 100]
/// - The axes do NOT need to sum to 100 (independent scales, not a simplex)
/// - Immutable once constructed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscProfile {
    /// Dominância: drive, assertiveness, results-orientation.
    d: u8,
    /// Influência: sociability, optimism, persuasion.
    i: u8,
    /// Estabilidade: patience, stability, loyalty.
    s: u8,
    /// Conformidade: accuracy, rules, quality.
    c: u8,
}

impl DiscProfile {
    /// Creates a profile, clamping each axis to 100.
    pub fn new(d: u8, i: u8, s: u8, c: u8) -> Self {
        Self {
            d: d.min(100),
            i: i.min(100),
            s: s.min(100),
            c: c.min(100),
        }
    }

    /// Creates a profile, returning an error if any axis is out of range.
    pub fn try_new(d: u8, i: u8, s: u8, c: u8) -> Result<Self, ValidationError> {
        for (name, value) in [("d", d), ("i", i), ("s", s), ("c", c)] {
            if value > 100 {
                return Err(ValidationError::out_of_range(name, 0, 100, value as i32));
            }
        }
        Ok(Self { d, i, s, c })
    }

    /// Dominância axis value.
    pub fn d(&self) -> u8 {
        self.d
    }

    /// Influência axis value.
    pub fn i(&self) -> u8 {
        self.i
    }

    /// Estabilidade axis value.
    pub fn s(&self) -> u8 {
        self.s
    }

    /// Conformidade axis value.
    pub fn c(&self) -> u8 {
        self.c
    }

    /// Classifies the dominant trait: the first axis reaching the maximum,
    /// checked in fixed order D, I, S, C. Ties therefore resolve to the
    /// earlier axis; an all-zero profile classifies as D.
    pub fn dominant(&self) -> DominantProfile {
        let max = self.d.max(self.i).max(self.s).max(self.c);
        if self.d == max {
            DominantProfile::D
        } else if self.i == max {
            DominantProfile::I
        } else if self.s == max {
            DominantProfile::S
        } else {
            DominantProfile::C
        }
    }
}

/// The single dominant DISC trait letter.
///
/// Derived from a [`DiscProfile`]; never stored independently of its source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DominantProfile {
    D,
    I,
    S,
    C,
}

impl DominantProfile {
    /// Returns the trait letter.
    pub fn letter(&self) -> char {
        match self {
            DominantProfile::D => 'D',
            DominantProfile::I => 'I',
            DominantProfile::S => 'S',
            DominantProfile::C => 'C',
        }
    }

    /// Returns the Portuguese trait name.
    pub fn trait_name(&self) -> &'static str {
        match self {
            DominantProfile::D => "Dominância",
            DominantProfile::I => "Influência",
            DominantProfile::S => "Estabilidade",
            DominantProfile::C => "Conformidade",
        }
    }
}

impl fmt::Display for DominantProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disc_profile_try_new_accepts_valid_axes() {
        let profile = DiscProfile::try_new(65, 55, 45, 35).unwrap();
        assert_eq!(profile.d(), 65);
        assert_eq!(profile.i(), 55);
        assert_eq!(profile.s(), 45);
        assert_eq!(profile.c(), 35);
    }

    #[test]
    fn disc_profile_try_new_rejects_out_of_range_axis() {
        let result = DiscProfile::try_new(101, 50, 50, 50);
        assert!(result.is_err());
    }

    #[test]
    fn disc_profile_new_clamps_to_100() {
        let profile = DiscProfile::new(200, 150, 50, 50);
        assert_eq!(profile.d(), 100);
        assert_eq!(profile.i(), 100);
    }

    #[test]
    fn dominant_picks_highest_axis() {
        assert_eq!(DiscProfile::new(30, 70, 20, 10).dominant(), DominantProfile::I);
        assert_eq!(DiscProfile::new(10, 20, 80, 40).dominant(), DominantProfile::S);
        assert_eq!(DiscProfile::new(10, 20, 30, 90).dominant(), DominantProfile::C);
    }

    #[test]
    fn dominant_ties_resolve_in_d_i_s_c_order() {
        // D wins all ties
        assert_eq!(DiscProfile::new(50, 50, 0, 0).dominant(), DominantProfile::D);
        // I beats S and C on ties
        assert_eq!(DiscProfile::new(10, 60, 60, 60).dominant(), DominantProfile::I);
        // S beats C on ties
        assert_eq!(DiscProfile::new(10, 20, 60, 60).dominant(), DominantProfile::S);
    }

    #[test]
    fn dominant_all_zero_profile_defaults_to_d() {
        assert_eq!(DiscProfile::new(0, 0, 0, 0).dominant(), DominantProfile::D);
    }

    #[test]
    fn dominant_profile_displays_as_letter() {
        assert_eq!(format!("{}", DominantProfile::D), "D");
        assert_eq!(format!("{}", DominantProfile::S), "S");
    }

    #[test]
    fn dominant_profile_serializes_as_letter() {
        assert_eq!(serde_json::to_string(&DominantProfile::I).unwrap(), "\"I\"");
    }

    #[test]
    fn disc_profile_round_trips_through_json() {
        let profile = DiscProfile::new(65, 55, 45, 35);
        let json = serde_json::to_string(&profile).unwrap();
        let back: DiscProfile = serde_json::from_str(&json).unwrap();
        assert_eq!(profile, back);
    }
}
