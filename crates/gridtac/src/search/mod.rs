//! Depth-limited alpha-beta search over N×N tic-tac-toe positions.
//!
//! The search borrows the caller's board mutably for the duration of one
//! call. Every hypothetical placement is undone before the next sibling is
//! tried, so the board comes back bit-identical.

mod policy;

pub use policy::{DepthParity, ExhaustedDepthPolicy, Neutral, PlacementRule};

use crate::rules::evaluate;
use crate::{Board, Position, Score};
use derive_getters::Getters;
use derive_more::Display;
use serde::{Deserialize, Serialize};
use tracing::{instrument, trace};

/// Initial alpha, just below the lowest reachable score.
pub const SCORE_FLOOR: Score = -2;

/// Initial beta, just above the highest reachable score.
pub const SCORE_CEILING: Score = 2;

/// How many plies the search may still expand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum DepthBudget {
    /// At most this many more plies.
    #[display("{_0}")]
    Limited(u32),
    /// Search until every line ends in a terminal position.
    #[display("unbounded")]
    Unbounded,
}

impl DepthBudget {
    /// Budget of `plies`, saturating at `u32::MAX`.
    pub fn limited(plies: usize) -> Self {
        DepthBudget::Limited(u32::try_from(plies).unwrap_or(u32::MAX))
    }

    /// Whether no ply may be expanded.
    pub fn is_exhausted(self) -> bool {
        self == DepthBudget::Limited(0)
    }

    /// Budget handed to a child node.
    pub fn descend(self) -> Self {
        match self {
            DepthBudget::Limited(plies) => DepthBudget::Limited(plies.saturating_sub(1)),
            DepthBudget::Unbounded => DepthBudget::Unbounded,
        }
    }
}

/// Work counters accumulated over one or more searches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Getters)]
pub struct SearchStats {
    /// Nodes entered, including leaves.
    nodes: u64,
    /// Sibling loops abandoned because `beta <= alpha`.
    cutoffs: u64,
    /// Deepest ply reached below the search root (the root is ply 0).
    deepest_ply: u32,
}

impl SearchStats {
    fn visit(&mut self, ply: u32) {
        self.nodes += 1;
        self.deepest_ply = self.deepest_ply.max(ply);
    }
}

/// Alpha-beta minimax parameterised by its placement and fallback rules.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Searcher<P = DepthParity, F = Neutral> {
    placement: P,
    fallback: F,
}

impl Searcher {
    /// Searcher with depth-parity placement and a neutral fallback.
    pub fn new() -> Self {
        Self {
            placement: DepthParity,
            fallback: Neutral,
        }
    }
}

impl<P: PlacementRule, F: ExhaustedDepthPolicy> Searcher<P, F> {
    /// Searcher with custom rules.
    pub fn with_rules(placement: P, fallback: F) -> Self {
        Self {
            placement,
            fallback,
        }
    }

    /// The placement rule in use.
    pub fn placement(&self) -> &P {
        &self.placement
    }

    /// Evaluates `board` with alpha-beta pruning.
    ///
    /// Terminal positions return their score. A non-terminal position with
    /// an exhausted budget returns the fallback score. Otherwise every empty
    /// square is tried in row-major order with the marker chosen by the
    /// placement rule, and the maximum (or minimum) child score is returned.
    /// Siblings are skipped once `beta <= alpha`.
    #[instrument(level = "trace", skip(self, board, stats), fields(size = board.size()))]
    pub fn search(
        &self,
        board: &mut Board,
        budget: DepthBudget,
        alpha: Score,
        beta: Score,
        maximizing: bool,
        stats: &mut SearchStats,
    ) -> Score {
        self.search_at(board, budget, alpha, beta, maximizing, 0, stats)
    }

    #[allow(clippy::too_many_arguments)]
    fn search_at(
        &self,
        board: &mut Board,
        budget: DepthBudget,
        mut alpha: Score,
        mut beta: Score,
        maximizing: bool,
        ply: u32,
        stats: &mut SearchStats,
    ) -> Score {
        stats.visit(ply);

        if let Some(score) = evaluate(board).score() {
            return score;
        }
        if budget.is_exhausted() {
            return self.fallback.score(board);
        }

        let marker = self.placement.marker(budget);
        let child_budget = budget.descend();
        let side = if maximizing { "max" } else { "min" };
        let mut best = if maximizing { SCORE_FLOOR } else { SCORE_CEILING };

        for pos in Position::valid_moves(board) {
            board.put(pos, marker);
            trace!(side, %pos, %marker, alpha, beta, "trying");
            let eval = self.search_at(board, child_budget, alpha, beta, !maximizing, ply + 1, stats);
            board.clear(pos);

            if maximizing {
                best = best.max(eval);
                alpha = alpha.max(eval);
            } else {
                best = best.min(eval);
                beta = beta.min(eval);
            }
            trace!(side, %pos, eval, alpha, beta, "scored");

            if beta <= alpha {
                stats.cutoffs += 1;
                trace!(side, alpha, beta, "pruning");
                break;
            }
        }

        best
    }

    /// Full-width minimax with the same rules and no pruning.
    ///
    /// Always returns the same score as [`Searcher::search`] with the full
    /// bound window; it only does more work.
    pub fn minimax(&self, board: &mut Board, budget: DepthBudget, maximizing: bool) -> Score {
        if let Some(score) = evaluate(board).score() {
            return score;
        }
        if budget.is_exhausted() {
            return self.fallback.score(board);
        }

        let marker = self.placement.marker(budget);
        let child_budget = budget.descend();
        let scores = Position::valid_moves(board).into_iter().map(|pos| {
            board.put(pos, marker);
            let eval = self.minimax(board, child_budget, !maximizing);
            board.clear(pos);
            eval
        });

        if maximizing {
            scores.fold(SCORE_FLOOR, Score::max)
        } else {
            scores.fold(SCORE_CEILING, Score::min)
        }
    }
}
