//! Leveling curve
//!
//! XP cost per level is flat inside a block of levels and rises by a fixed
//! increment at every block boundary: levels 0-4 cost 500 XP each, levels
//! 5-9 cost 1000 XP each, and so on.

/// Starting XP per level
pub const BASE_XP: f64 = 500.0;

/// Levels in each XP increment block
pub const LEVELS_PER_BLOCK: u64 = 5;

/// Increase in XP per level every block
pub const XP_INCREMENT_PER_BLOCK: f64 = 500.0;

/// Leading coefficient of the cumulative block XP quadratic
pub const BLOCK_XP_COEFFICIENT: f64 = BASE_XP * LEVELS_PER_BLOCK as f64 / 2.0;

/// Total XP needed to complete `blocks` full blocks.
///
/// Sum of an arithmetic progression of block costs, which collapses to
/// `BLOCK_XP_COEFFICIENT * m * (m + 1)` because the per-block increment
/// equals the base cost.
pub fn cumulative_block_xp(blocks: u64) -> f64 {
    let m = blocks as f64;
    BLOCK_XP_COEFFICIENT * m * (m + 1.0)
}

/// Exact integer form of [`cumulative_block_xp`]
pub fn cumulative_block_xp_whole(blocks: u64) -> u128 {
    let m = u128::from(blocks);
    BLOCK_XP_COEFFICIENT as u128 * m * (m + 1)
}

/// XP cost of a single level inside block `block`
pub fn xp_per_level_in_block(block: u64) -> f64 {
    BASE_XP + XP_INCREMENT_PER_BLOCK * block as f64
}

/// Exact integer form of [`xp_per_level_in_block`]
pub fn xp_per_level_in_block_whole(block: u64) -> u128 {
    BASE_XP as u128 + XP_INCREMENT_PER_BLOCK as u128 * u128::from(block)
}

/// Block a level belongs to
pub fn block_of_level(level: u64) -> u64 {
    level / LEVELS_PER_BLOCK
}

/// Calculate XP needed to go from `level` to `level + 1`
pub fn xp_for_level(level: u64) -> f64 {
    xp_per_level_in_block(block_of_level(level))
}

/// Calculate total XP needed from level 0 to reach a given level
pub fn total_xp_for_level(level: u64) -> f64 {
    let block = block_of_level(level);
    let levels_into_block = level % LEVELS_PER_BLOCK;
    cumulative_block_xp(block) + levels_into_block as f64 * xp_per_level_in_block(block)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_xp_for_level() {
        assert_eq!(xp_for_level(0), 500.0);
        assert_eq!(xp_for_level(4), 500.0);
        assert_eq!(xp_for_level(5), 1000.0); // First block boundary
        assert_eq!(xp_for_level(9), 1000.0);
        assert_eq!(xp_for_level(10), 1500.0);
        assert_eq!(xp_for_level(186), 19000.0);
    }

    #[test]
    fn test_cumulative_block_xp() {
        assert_eq!(cumulative_block_xp(0), 0.0);
        assert_eq!(cumulative_block_xp(1), 2500.0);
        assert_eq!(cumulative_block_xp(2), 7500.0);
        assert_eq!(cumulative_block_xp(37), 1_757_500.0);
    }

    #[test]
    fn test_whole_forms_agree() {
        for block in [0, 1, 2, 37, 893, 1_000_000] {
            assert_eq!(cumulative_block_xp_whole(block) as f64, cumulative_block_xp(block));
            assert_eq!(xp_per_level_in_block_whole(block) as f64, xp_per_level_in_block(block));
        }
        // Past f64's exact integer range
        assert_eq!(cumulative_block_xp_whole(10_000_000_000), 125_000_000_012_500_000_000_000);
    }

    #[test]
    fn test_closed_form_matches_summed_costs() {
        let mut summed = 0.0;
        for level in 0..500 {
            if level % LEVELS_PER_BLOCK == 0 {
                assert_eq!(cumulative_block_xp(block_of_level(level)), summed, "level {}", level);
            }
            summed += xp_for_level(level);
        }
    }

    #[test]
    fn test_total_xp_for_level() {
        assert_eq!(total_xp_for_level(0), 0.0);
        assert_eq!(total_xp_for_level(1), 500.0);
        assert_eq!(total_xp_for_level(5), 2500.0);
        assert_eq!(total_xp_for_level(10), 7500.0);
        assert_eq!(total_xp_for_level(186), 1_776_500.0);
    }
}
