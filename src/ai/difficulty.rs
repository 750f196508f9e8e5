//! Difficulty tiers and their scoring profiles
//!
//! Each tier that scores moves is described by a [`ScoringProfile`]: a set of
//! weights for capture value, center occupation, development, check and mate,
//! plus a switch for the positional evaluation terms. The hint engine is just
//! another profile, scored from white's side.
//!
//! | Profile      | Capture | King | Center | Develop | Check | Mate | Positional |
//! |--------------|---------|------|--------|---------|-------|------|------------|
//! | intermediate | 10      | 0    | 2      | 3       | 1     | 0    | no         |
//! | advanced     | 15      | 100  | 0      | 0       | 5     | 1000 | yes        |
//! | hint         | 1       | 0    | 0.5    | 0.3     | 0.7   | 0    | no         |
//!
//! The beginner tier does not score at all: it picks a random capture, or a
//! random legal move when no capture exists.

use serde::{Deserialize, Serialize};
use std::fmt;

/// AI strength setting, also used to label strategy tips
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    #[default]
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    /// Scoring weights for this tier, `None` for the random beginner tier
    pub fn profile(self) -> Option<ScoringProfile> {
        match self {
            Difficulty::Beginner => None,
            Difficulty::Intermediate => Some(ScoringProfile::intermediate()),
            Difficulty::Advanced => Some(ScoringProfile::advanced()),
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Difficulty::Beginner => "Beginner (prefers captures, otherwise random)",
            Difficulty::Intermediate => "Intermediate (captures, center and development)",
            Difficulty::Advanced => "Advanced (material, checks and positional play)",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Difficulty::Beginner => "beginner",
            Difficulty::Intermediate => "intermediate",
            Difficulty::Advanced => "advanced",
        })
    }
}

/// Weighted single-ply evaluation terms
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringProfile {
    /// Multiplier applied to the captured piece's value
    pub capture_weight: f64,
    /// Value of a captured king before weighting
    pub king_capture_value: f64,
    /// Bonus for landing on d4/d5/e4/e5
    pub center_bonus: f64,
    /// Bonus for a knight or bishop leaving its back rank
    pub development_bonus: f64,
    pub check_bonus: f64,
    /// Added on top of `check_bonus` when the opponent has no legal reply
    pub checkmate_bonus: f64,
    /// Add board control, mobility and pawn structure of the resulting board
    pub positional: bool,
}

impl ScoringProfile {
    pub const fn intermediate() -> Self {
        Self {
            capture_weight: 10.0,
            king_capture_value: 0.0,
            center_bonus: 2.0,
            development_bonus: 3.0,
            check_bonus: 1.0,
            checkmate_bonus: 0.0,
            positional: false,
        }
    }

    pub const fn advanced() -> Self {
        Self {
            capture_weight: 15.0,
            king_capture_value: 100.0,
            center_bonus: 0.0,
            development_bonus: 0.0,
            check_bonus: 5.0,
            checkmate_bonus: 1000.0,
            positional: true,
        }
    }

    /// Beginner-friendly weights used for player hints
    pub const fn hint() -> Self {
        Self {
            capture_weight: 1.0,
            king_capture_value: 0.0,
            center_bonus: 0.5,
            development_bonus: 0.3,
            check_bonus: 0.7,
            checkmate_bonus: 0.0,
            positional: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_beginner_has_no_profile() {
        assert!(Difficulty::Beginner.profile().is_none());
        assert_eq!(
            Difficulty::Advanced.profile(),
            Some(ScoringProfile::advanced())
        );
    }

    #[test]
    fn test_difficulty_serde_lowercase() {
        let json = serde_json::to_string(&Difficulty::Intermediate).unwrap();
        assert_eq!(json, "\"intermediate\"");

        let parsed: Difficulty = serde_json::from_str("\"advanced\"").unwrap();
        assert_eq!(parsed, Difficulty::Advanced);
    }
}
