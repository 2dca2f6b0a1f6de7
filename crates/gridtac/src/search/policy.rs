//! Pluggable rules the search consults at each node.

use super::DepthBudget;
use crate::{Board, Player, Score};

/// Chooses which marker a hypothetical placement uses.
///
/// The search asks this rule at every expanded node instead of tracking
/// whose turn it is, so the marker depends only on the remaining budget.
pub trait PlacementRule {
    /// Marker placed by a node holding `budget` plies of search.
    fn marker(&self, budget: DepthBudget) -> Player;
}

/// Even remaining budget places X, odd places O.
///
/// An unbounded budget has no even parity and always places O.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DepthParity;

impl PlacementRule for DepthParity {
    fn marker(&self, budget: DepthBudget) -> Player {
        match budget {
            DepthBudget::Limited(plies) if plies % 2 == 0 => Player::X,
            _ => Player::O,
        }
    }
}

/// Scores a non-terminal board once the depth budget runs out.
pub trait ExhaustedDepthPolicy {
    /// Fallback score for `board`.
    fn score(&self, board: &Board) -> Score;
}

/// Treats an undecided board as a draw.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Neutral;

impl ExhaustedDepthPolicy for Neutral {
    fn score(&self, _board: &Board) -> Score {
        0
    }
}
