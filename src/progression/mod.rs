//! Progression systems

pub mod curve;
pub mod xp;

pub use curve::{
    BASE_XP, LEVELS_PER_BLOCK, XP_INCREMENT_PER_BLOCK,
    cumulative_block_xp, xp_per_level_in_block, xp_for_level, total_xp_for_level,
};
pub use xp::{ProgressionState, LevelError, MAX_TOTAL_XP, resolve_level, try_resolve_level};
