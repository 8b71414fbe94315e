//! Experience and leveling
//!
//! Resolves a total XP value into a level by inverting the curve's
//! cumulative block XP quadratic, then walking the levels of the last
//! (possibly partial) block.

use log::{debug, error, warn};
use thiserror::Error;

use super::curve::{
    cumulative_block_xp_whole, xp_per_level_in_block_whole, BASE_XP, BLOCK_XP_COEFFICIENT,
    LEVELS_PER_BLOCK,
};

/// Largest total XP resolved as given; larger totals resolve as this value.
///
/// Keeps the per-level cost, and so every XP value in a resolved state,
/// inside f64's exact integer range.
pub const MAX_TOTAL_XP: f64 = 1e29;

/// Level and progress derived from a total XP value
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProgressionState {
    pub level: u64,
    /// XP earned toward the next level
    pub xp_into_level: f64,
    /// XP cost of the current level
    pub xp_to_next_level: f64,
}

impl ProgressionState {
    /// Degenerate state returned when a total XP value cannot be resolved
    pub const SENTINEL: Self = Self {
        level: 0,
        xp_into_level: 0.0,
        xp_to_next_level: BASE_XP,
    };

    /// Fraction of the current level completed
    pub fn progress(&self) -> f64 {
        self.xp_into_level / self.xp_to_next_level
    }

    /// XP still needed to reach the next level
    pub fn xp_remaining(&self) -> f64 {
        self.xp_to_next_level - self.xp_into_level
    }
}

/// Total XP values outside the solvable domain
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum LevelError {
    #[error("total XP must be a finite number, got {0}")]
    NonFinite(f64),
    #[error("total XP cannot be negative, got {0}")]
    Negative(f64),
}

/// Resolve a total XP value, falling back to [`ProgressionState::SENTINEL`]
/// for out-of-domain input.
pub fn resolve_level(total_xp: f64) -> ProgressionState {
    try_resolve_level(total_xp).unwrap_or_else(|e| {
        warn!("{}; falling back to level 0", e);
        ProgressionState::SENTINEL
    })
}

/// Resolve a total XP value, rejecting out-of-domain input.
pub fn try_resolve_level(total_xp: f64) -> Result<ProgressionState, LevelError> {
    if !total_xp.is_finite() {
        return Err(LevelError::NonFinite(total_xp));
    }
    if total_xp < 0.0 {
        return Err(LevelError::Negative(total_xp));
    }
    let total_xp = if total_xp > MAX_TOTAL_XP {
        debug!("{} XP is past {}, resolving at the ceiling", total_xp, MAX_TOTAL_XP);
        MAX_TOTAL_XP
    } else {
        // Turns -0.0 into 0.0
        total_xp + 0.0
    };

    // Blocks and levels are counted on the whole part; the fraction only
    // ever lands in xp_into_level
    let whole_xp = total_xp.trunc();
    let fraction = total_xp - whole_xp;
    let whole_xp = whole_xp as u128;

    let blocks = completed_blocks(total_xp, whole_xp).ok_or(LevelError::Negative(total_xp))?;

    let remaining_xp = whole_xp - cumulative_block_xp_whole(blocks);
    let xp_per_level = xp_per_level_in_block_whole(blocks);

    let mut levels_in_block = remaining_xp / xp_per_level;
    debug_assert!(
        levels_in_block < u128::from(LEVELS_PER_BLOCK),
        "{} XP resolved to {} levels inside block {}",
        total_xp,
        levels_in_block,
        blocks
    );
    if levels_in_block >= u128::from(LEVELS_PER_BLOCK) {
        error!(
            "{} XP resolved to {} levels inside block {}, clamping",
            total_xp, levels_in_block, blocks
        );
        levels_in_block = u128::from(LEVELS_PER_BLOCK - 1);
    }

    let state = ProgressionState {
        level: LEVELS_PER_BLOCK * blocks + levels_in_block as u64,
        xp_into_level: (remaining_xp - levels_in_block * xp_per_level) as f64 + fraction,
        xp_to_next_level: xp_per_level as f64,
    };
    debug!(
        "{} XP -> {} full blocks, level {} ({}/{} XP)",
        total_xp, blocks, state.level, state.xp_into_level, state.xp_to_next_level
    );
    Ok(state)
}

/// Number of fully completed blocks, or `None` if the quadratic has no real root
fn completed_blocks(total_xp: f64, whole_xp: u128) -> Option<u64> {
    // m^2 + m - total_xp / BLOCK_XP_COEFFICIENT = 0
    let c = -total_xp / BLOCK_XP_COEFFICIENT;
    let discriminant = 1.0 - 4.0 * c;
    if discriminant < 0.0 {
        return None;
    }

    let root = (-1.0 + discriminant.sqrt()) / 2.0;
    let mut blocks = root as u64;

    // The square root can land a block off in either direction
    while blocks > 0 && cumulative_block_xp_whole(blocks) > whole_xp {
        blocks -= 1;
    }
    while cumulative_block_xp_whole(blocks + 1) <= whole_xp {
        blocks += 1;
    }
    Some(blocks)
}
