//! Strategy tip catalog
//!
//! A fixed table of named chess advice, tagged with a coarse game [`Phase`]
//! and a [`Difficulty`] label. The AI tiers and the hint engine attach tips to
//! the moves they choose; the CLI samples them for display.
//!
//! # Architecture
//!
//! The tables in `catalog` are `static` arrays, so every lookup hands out
//! `&'static StrategyTip` references. The combined list is built once on first
//! use and never mutated, which makes the catalog safe to query from any
//! thread.
//!
//! # Sampling
//!
//! Phase and difficulty queries shuffle the matching tips (Fisher-Yates via
//! [`rand::seq::SliceRandom::shuffle`]) and take the first `count`. Results are
//! not stable across calls; use the `_with_rng` variants with a seeded RNG
//! when a repeatable order is needed.
//!
//! ```
//! use chess_mentor::strategy::{tips_by_phase, Phase};
//!
//! for tip in tips_by_phase(Phase::Opening, 3) {
//!     println!("{}: {}", tip.name, tip.description);
//! }
//! ```

mod catalog;

use crate::ai::Difficulty;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;
use std::fmt;
use std::sync::LazyLock;

/// Number of tips returned by sampling queries when the caller has no preference
pub const DEFAULT_TIP_COUNT: usize = 3;

/// Coarse game phase used only to group tips
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Opening,
    Middlegame,
    Endgame,
    General,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Phase::Opening => "opening",
            Phase::Middlegame => "middlegame",
            Phase::Endgame => "endgame",
            Phase::General => "general",
        })
    }
}

/// One catalog entry
#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct StrategyTip {
    /// Unique key, e.g. `"opening-center"`
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub phase: Phase,
    pub difficulty: Difficulty,
}

impl fmt::Display for StrategyTip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.description)
    }
}

static ALL_TIPS: LazyLock<Vec<&'static StrategyTip>> = LazyLock::new(|| {
    catalog::OPENING
        .iter()
        .chain(catalog::MIDDLEGAME.iter())
        .chain(catalog::ENDGAME.iter())
        .chain(catalog::GENERAL.iter())
        .collect()
});

/// Every tip, in phase order: opening, middlegame, endgame, general
pub fn all_tips() -> &'static [&'static StrategyTip] {
    ALL_TIPS.as_slice()
}

/// Tips belonging to `phase`, in catalog order
pub fn tips_for_phase(phase: Phase) -> &'static [StrategyTip] {
    match phase {
        Phase::Opening => &catalog::OPENING,
        Phase::Middlegame => &catalog::MIDDLEGAME,
        Phase::Endgame => &catalog::ENDGAME,
        Phase::General => &catalog::GENERAL,
    }
}

pub fn tip_by_id(id: &str) -> Option<&'static StrategyTip> {
    all_tips().iter().copied().find(|tip| tip.id == id)
}

fn sample<R: Rng + ?Sized>(
    mut tips: Vec<&'static StrategyTip>,
    count: usize,
    rng: &mut R,
) -> Vec<&'static StrategyTip> {
    tips.shuffle(rng);
    tips.truncate(count);
    tips
}

/// Up to `count` tips from `phase`, in random order
pub fn tips_by_phase(phase: Phase, count: usize) -> Vec<&'static StrategyTip> {
    tips_by_phase_with_rng(phase, count, &mut rand::rng())
}

pub fn tips_by_phase_with_rng<R: Rng + ?Sized>(
    phase: Phase,
    count: usize,
    rng: &mut R,
) -> Vec<&'static StrategyTip> {
    sample(tips_for_phase(phase).iter().collect(), count, rng)
}

/// Up to `count` tips labelled `level`, drawn from every phase
pub fn tips_by_difficulty(level: Difficulty, count: usize) -> Vec<&'static StrategyTip> {
    tips_by_difficulty_with_rng(level, count, &mut rand::rng())
}

pub fn tips_by_difficulty_with_rng<R: Rng + ?Sized>(
    level: Difficulty,
    count: usize,
    rng: &mut R,
) -> Vec<&'static StrategyTip> {
    let matching = all_tips()
        .iter()
        .copied()
        .filter(|tip| tip.difficulty == level)
        .collect();
    sample(matching, count, rng)
}

/// A single uniformly chosen tip
pub fn random_tip() -> &'static StrategyTip {
    random_tip_with_rng(&mut rand::rng())
}

pub fn random_tip_with_rng<R: Rng + ?Sized>(rng: &mut R) -> &'static StrategyTip {
    let tips = all_tips();
    tips[rng.random_range(0..tips.len())]
}
