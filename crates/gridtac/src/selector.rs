//! Move selection for the automated player.

use crate::error::{ConfigError, ConfigErrorKind};
use crate::search::{
    DepthBudget, DepthParity, ExhaustedDepthPolicy, Neutral, PlacementRule, SCORE_CEILING,
    SCORE_FLOOR, SearchStats, Searcher,
};
use crate::{Board, Position, Score};
use derive_getters::Getters;
use derive_setters::Setters;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Requested playing strength.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Difficulty {
    /// Shallow search.
    Easy,
    /// Exhaustive search on small boards.
    Hard,
}

impl Difficulty {
    /// Parses `easy` / `hard`, reporting anything else as a config error.
    #[track_caller]
    pub fn parse(value: &str) -> Result<Self, ConfigError> {
        match value.trim().parse::<Difficulty>() {
            Ok(difficulty) => Ok(difficulty),
            Err(_) => Err(ConfigError::new(ConfigErrorKind::UnknownDifficulty(
                value.to_string(),
            ))),
        }
    }
}

/// Depth caps applied at the root of move selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Getters, Setters)]
#[serde(default)]
#[setters(prefix = "with_")]
pub struct SearchLimits {
    /// Budget used on easy, and on any board larger than `exhaustive_max_size`.
    easy_depth: u32,
    /// Largest board size searched to the end on hard.
    exhaustive_max_size: usize,
}

impl Default for SearchLimits {
    fn default() -> Self {
        Self {
            easy_depth: 2,
            exhaustive_max_size: 3,
        }
    }
}

/// Result of one move selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Getters)]
pub struct Selection {
    /// Chosen square, `None` when the board had no empty square.
    position: Option<Position>,
    /// Search score of the chosen square.
    score: Option<Score>,
    /// Budget each candidate was searched with.
    budget: DepthBudget,
    /// Work done across all candidates.
    stats: SearchStats,
}

/// Picks the square with the best search score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveSelector<P = DepthParity, F = Neutral> {
    limits: SearchLimits,
    searcher: Searcher<P, F>,
}

impl MoveSelector {
    /// Selector with the standard search rules.
    pub fn new(limits: SearchLimits) -> Self {
        Self {
            limits,
            searcher: Searcher::new(),
        }
    }
}

impl Default for MoveSelector {
    fn default() -> Self {
        Self::new(SearchLimits::default())
    }
}

impl<P: PlacementRule, F: ExhaustedDepthPolicy> MoveSelector<P, F> {
    /// Selector over a custom searcher.
    pub fn with_searcher(limits: SearchLimits, searcher: Searcher<P, F>) -> Self {
        Self { limits, searcher }
    }

    /// Depth caps in use.
    pub fn limits(&self) -> &SearchLimits {
        &self.limits
    }

    /// Budget for a difficulty on a board of the given size.
    ///
    /// Easy, or any board above `exhaustive_max_size`, gets `easy_depth`.
    /// Hard on a small board searches to the end.
    pub fn depth_budget(&self, difficulty: Difficulty, size: usize) -> DepthBudget {
        match difficulty {
            Difficulty::Hard if size <= self.limits.exhaustive_max_size => DepthBudget::Unbounded,
            Difficulty::Easy | Difficulty::Hard => DepthBudget::Limited(self.limits.easy_depth),
        }
    }

    /// Scores every empty square and returns the best one.
    ///
    /// Each candidate is filled with the marker the placement rule gives for
    /// `remaining`, searched as a minimizing node with the full bound window
    /// and then cleared. The first square with the strictly greatest score
    /// wins. The board is unchanged on return.
    #[instrument(level = "debug", skip(self, board), fields(board_size = board.size()))]
    pub fn select(
        &self,
        board: &mut Board,
        difficulty: Difficulty,
        remaining: usize,
        size: usize,
    ) -> Selection {
        let budget = self.depth_budget(difficulty, size);
        let marker = self.searcher.placement().marker(DepthBudget::limited(remaining));
        debug!(%budget, %marker, "selecting move");

        let mut stats = SearchStats::default();
        let mut best: Option<(Position, Score)> = None;

        for pos in Position::valid_moves(board) {
            board.put(pos, marker);
            let eval = self
                .searcher
                .search(board, budget, SCORE_FLOOR, SCORE_CEILING, false, &mut stats);
            board.clear(pos);
            debug!(%pos, eval, "scored candidate");

            if best.is_none_or(|(_, best_eval)| eval > best_eval) {
                best = Some((pos, eval));
            }
        }

        let selection = Selection {
            position: best.map(|(pos, _)| pos),
            score: best.map(|(_, eval)| eval),
            budget,
            stats,
        };
        info!(
            position = ?selection.position,
            score = ?selection.score,
            nodes = stats.nodes(),
            "move selected"
        );
        selection
    }
}

/// Picks a move for `difficulty` given as text.
///
/// The difficulty is parsed before the board is touched; an unknown value
/// is returned as a [`ConfigError`].
#[instrument(skip(board), fields(board_size = board.size()))]
pub fn select(
    board: &mut Board,
    difficulty: &str,
    remaining: usize,
    size: usize,
) -> Result<Option<Position>, ConfigError> {
    let difficulty = Difficulty::parse(difficulty)?;
    let selection = MoveSelector::new(SearchLimits::default()).select(board, difficulty, remaining, size);
    Ok(*selection.position())
}
