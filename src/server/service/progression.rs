//! Experience and rank rules.
//!
//! Both functions are pure so the same numbers drive match rewards, the
//! dashboard rank card, and the leaderboard.

use crate::model::user::RankDto;

/// Flat award for finishing a match.
const PARTICIPATION_POINTS: i32 = 25;
/// Maximum additional award, scaled by score percentage.
const PERFORMANCE_POINTS: i32 = 75;
/// Extra award for winning the match.
const WIN_BONUS: i32 = 50;

/// Rank thresholds, ascending. A player holds the highest rank whose
/// threshold their experience meets.
pub const RANKS: &[(i32, &str)] = &[
    (0, "Novice Reader"),
    (200, "Word Explorer"),
    (500, "Page Turner"),
    (1000, "Story Weaver"),
    (2000, "Word Wizard"),
    (4000, "Grand Scholar"),
];

/// Experience awarded for a finished match.
///
/// Monotonic in score percentage; a win never awards less than a loss at the
/// same percentage.
pub fn experience_for(score: i32, total: i32, won: bool) -> i32 {
    let total = total.max(1);
    let score = score.clamp(0, total);

    let performance =
        (PERFORMANCE_POINTS as f64 * score as f64 / total as f64).round() as i32;
    let bonus = if won { WIN_BONUS } else { 0 };

    PARTICIPATION_POINTS + performance + bonus
}

/// Rank derived from accumulated experience.
pub fn rank_for(experience: i32) -> RankDto {
    let experience = experience.max(0);

    let mut current = RANKS[0];
    let mut next_at = RANKS.get(1).map(|rank| rank.0);

    for (index, rank) in RANKS.iter().enumerate() {
        if experience >= rank.0 {
            current = *rank;
            next_at = RANKS.get(index + 1).map(|next| next.0);
        }
    }

    RankDto {
        title: current.1.to_string(),
        floor: current.0,
        next_at,
    }
}
