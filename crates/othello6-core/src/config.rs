//! Search and evaluation configuration.
//!
//! A [`SearchConfig`] bundles the search depth, the positional weight table
//! and the set of active evaluation terms. Each optional term carries its own
//! constant; `None` disables it. Configurations are plain `Copy` values built
//! once per playing style and never mutated during a search.

use crate::bitboard::{CORNER_MASK, INSET_RING_MASK};
use crate::constants::{BOARD_SIZE, MAX_MOVES, SCORE_INF, TOTAL_SQUARES};
use crate::error::{EngineError, Result};
use crate::types::{Depth, Score, WeightTable};

/// How mobility contributes to the evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MobilityKind {
    /// Own legal moves minus the opponent's legal moves.
    Differential,
    /// Own legal moves only.
    OwnMoves,
}

/// Mobility term: `kind` selects the count, `scale` multiplies it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mobility {
    pub kind: MobilityKind,
    pub scale: Score,
}

/// Multiplies the positional term once the remaining depth is at or below
/// `threshold`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EndgameBoost {
    pub threshold: Depth,
    pub factor: Score,
}

/// Order in which candidate moves are searched.
///
/// Moves are always scored by evaluating the resulting position from the
/// mover's perspective; ties keep generation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MoveOrdering {
    /// Best score first at every node, including the root.
    #[default]
    Descending,
    /// Root moves in generation order; best score first at maximizing nodes
    /// and worst score first at minimizing nodes.
    NodeRelative,
}

/// Immutable configuration for one playing style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    depth: Depth,
    weights: WeightTable,
    mobility: Option<Mobility>,
    stability_bonus: Option<Score>,
    frontier_penalty: Option<Score>,
    edge_penalty: Option<Score>,
    corner_bonus: Option<Score>,
    endgame_boost: Option<EndgameBoost>,
    ordering: MoveOrdering,
}

impl SearchConfig {
    /// Creates a configuration that scores positions by `weights` alone.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidDepth`] if `depth` is zero and
    /// [`EngineError::InvalidWeights`] if the table can push a score to the
    /// search bound.
    pub fn new(depth: Depth, weights: WeightTable) -> Result<Self> {
        if depth == 0 {
            return Err(EngineError::InvalidDepth);
        }
        Self::preset(depth, weights).checked()
    }

    /// Unchecked constructor for built-in presets with a known-good depth.
    pub(crate) const fn preset(depth: Depth, weights: WeightTable) -> Self {
        SearchConfig {
            depth,
            weights,
            mobility: None,
            stability_bonus: None,
            frontier_penalty: None,
            edge_penalty: None,
            corner_bonus: None,
            endgame_boost: None,
            ordering: MoveOrdering::Descending,
        }
    }

    /// Returns a copy searching to a different depth.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidDepth`] if `depth` is zero.
    pub fn with_depth(self, depth: Depth) -> Result<Self> {
        if depth == 0 {
            return Err(EngineError::InvalidDepth);
        }
        Ok(SearchConfig { depth, ..self })
    }

    // The `with_*` term builders below fail with
    // `EngineError::InvalidWeights` when the new term lets a score reach
    // `SCORE_INF`.

    pub fn with_mobility(self, kind: MobilityKind, scale: Score) -> Result<Self> {
        self.mobility_term(kind, scale).checked()
    }

    pub fn with_stability_bonus(self, bonus: Score) -> Result<Self> {
        self.stability_term(bonus).checked()
    }

    pub fn with_frontier_penalty(self, penalty: Score) -> Result<Self> {
        self.frontier_term(penalty).checked()
    }

    pub fn with_edge_penalty(self, penalty: Score) -> Result<Self> {
        self.edge_term(penalty).checked()
    }

    pub fn with_corner_bonus(self, bonus: Score) -> Result<Self> {
        self.corner_term(bonus).checked()
    }

    pub fn with_endgame_boost(self, threshold: Depth, factor: Score) -> Result<Self> {
        self.endgame_term(threshold, factor).checked()
    }

    pub const fn with_ordering(mut self, ordering: MoveOrdering) -> Self {
        self.ordering = ordering;
        self
    }

    pub(crate) const fn mobility_term(mut self, kind: MobilityKind, scale: Score) -> Self {
        self.mobility = Some(Mobility { kind, scale });
        self
    }

    pub(crate) const fn stability_term(mut self, bonus: Score) -> Self {
        self.stability_bonus = Some(bonus);
        self
    }

    pub(crate) const fn frontier_term(mut self, penalty: Score) -> Self {
        self.frontier_penalty = Some(penalty);
        self
    }

    pub(crate) const fn edge_term(mut self, penalty: Score) -> Self {
        self.edge_penalty = Some(penalty);
        self
    }

    pub(crate) const fn corner_term(mut self, bonus: Score) -> Self {
        self.corner_bonus = Some(bonus);
        self
    }

    pub(crate) const fn endgame_term(mut self, threshold: Depth, factor: Score) -> Self {
        self.endgame_boost = Some(EndgameBoost { threshold, factor });
        self
    }

    fn checked(self) -> Result<Self> {
        let bound = self.score_bound();
        if bound >= SCORE_INF as i64 {
            return Err(EngineError::InvalidWeights { bound });
        }
        Ok(self)
    }

    /// Largest score magnitude the evaluation can produce under this
    /// configuration, saturating at `i64::MAX`.
    ///
    /// Every term is bounded by its constant times the most squares it can
    /// count, and the positional term by the sum of absolute weights. While
    /// this stays below [`SCORE_INF`] no evaluation overflows `Score` and no
    /// score reaches the alpha-beta sentinels.
    pub const fn score_bound(&self) -> i64 {
        let mut positional: i64 = 0;
        let mut y = 0;
        while y < BOARD_SIZE {
            let mut x = 0;
            while x < BOARD_SIZE {
                positional = positional.saturating_add((self.weights[y][x] as i64).abs());
                x += 1;
            }
            y += 1;
        }
        if let Some(boost) = self.endgame_boost {
            let factor = (boost.factor as i64).abs();
            if factor > 1 {
                positional = positional.saturating_mul(factor);
            }
        }

        let mut bound = positional;
        if let Some(mobility) = self.mobility {
            bound = bound.saturating_add(term_bound(MAX_MOVES as u32, mobility.scale));
        }
        if let Some(bonus) = self.stability_bonus {
            bound = bound.saturating_add(term_bound(TOTAL_SQUARES as u32, bonus));
        }
        if let Some(penalty) = self.frontier_penalty {
            bound = bound.saturating_add(term_bound(TOTAL_SQUARES as u32, penalty));
        }
        if let Some(penalty) = self.edge_penalty {
            bound = bound.saturating_add(term_bound(INSET_RING_MASK.count_ones(), penalty));
        }
        if let Some(bonus) = self.corner_bonus {
            bound = bound.saturating_add(term_bound(CORNER_MASK.count_ones(), bonus));
        }
        bound
    }

    /// Plies searched below each root move.
    pub const fn depth(&self) -> Depth {
        self.depth
    }

    pub const fn weights(&self) -> &WeightTable {
        &self.weights
    }

    pub const fn mobility(&self) -> Option<Mobility> {
        self.mobility
    }

    pub const fn stability_bonus(&self) -> Option<Score> {
        self.stability_bonus
    }

    pub const fn frontier_penalty(&self) -> Option<Score> {
        self.frontier_penalty
    }

    pub const fn edge_penalty(&self) -> Option<Score> {
        self.edge_penalty
    }

    pub const fn corner_bonus(&self) -> Option<Score> {
        self.corner_bonus
    }

    pub const fn endgame_boost(&self) -> Option<EndgameBoost> {
        self.endgame_boost
    }

    pub const fn ordering(&self) -> MoveOrdering {
        self.ordering
    }
}

const fn term_bound(count: u32, constant: Score) -> i64 {
    (count as i64).saturating_mul((constant as i64).abs())
}

#[cfg(test)]
mod tests {
    use super::*;

    const FLAT: WeightTable = [[1; 6]; 6];

    #[test]
    fn test_new_rejects_zero_depth() {
        assert_eq!(SearchConfig::new(0, FLAT), Err(EngineError::InvalidDepth));
        let config = SearchConfig::new(3, FLAT).unwrap();
        assert_eq!(config.depth(), 3);
        assert_eq!(config.with_depth(0), Err(EngineError::InvalidDepth));
        assert_eq!(config.with_depth(7).unwrap().depth(), 7);
    }

    #[test]
    fn test_new_has_only_positional_term() {
        let config = SearchConfig::new(1, FLAT).unwrap();
        assert_eq!(config.mobility(), None);
        assert_eq!(config.stability_bonus(), None);
        assert_eq!(config.frontier_penalty(), None);
        assert_eq!(config.edge_penalty(), None);
        assert_eq!(config.corner_bonus(), None);
        assert_eq!(config.endgame_boost(), None);
        assert_eq!(config.ordering(), MoveOrdering::Descending);
    }

    #[test]
    fn test_builders_enable_terms() {
        let config = SearchConfig::new(2, FLAT)
            .unwrap()
            .with_mobility(MobilityKind::OwnMoves, 2)
            .and_then(|c| c.with_stability_bonus(20))
            .and_then(|c| c.with_frontier_penalty(5))
            .and_then(|c| c.with_edge_penalty(20))
            .and_then(|c| c.with_corner_bonus(25))
            .and_then(|c| c.with_endgame_boost(3, 2))
            .unwrap()
            .with_ordering(MoveOrdering::NodeRelative);
        assert_eq!(
            config.mobility(),
            Some(Mobility {
                kind: MobilityKind::OwnMoves,
                scale: 2
            })
        );
        assert_eq!(config.stability_bonus(), Some(20));
        assert_eq!(config.frontier_penalty(), Some(5));
        assert_eq!(config.edge_penalty(), Some(20));
        assert_eq!(config.corner_bonus(), Some(25));
        assert_eq!(
            config.endgame_boost(),
            Some(EndgameBoost {
                threshold: 3,
                factor: 2
            })
        );
        assert_eq!(config.ordering(), MoveOrdering::NodeRelative);
        // Builders keep the depth.
        assert_eq!(config.depth(), 2);
    }

    #[test]
    fn test_score_bound() {
        let config = SearchConfig::new(1, FLAT).unwrap();
        assert_eq!(config.score_bound(), 36);

        // 36 * 2 positional, 32 * 3 mobility, 4 * 25 corners.
        let config = config
            .with_endgame_boost(2, -2)
            .and_then(|c| c.with_mobility(MobilityKind::Differential, 3))
            .and_then(|c| c.with_corner_bonus(-25))
            .unwrap();
        assert_eq!(config.score_bound(), 72 + 96 + 100);
    }

    #[test]
    fn test_large_weights_are_rejected() {
        let mut weights = [[0; 6]; 6];
        for (y, row) in weights.iter_mut().enumerate() {
            for (x, w) in row.iter_mut().enumerate() {
                *w = -4_000_000 * (1 + (7 * x as Score + 3 * y as Score) % 5);
            }
        }
        assert!(matches!(
            SearchConfig::new(2, weights),
            Err(EngineError::InvalidWeights { .. })
        ));
        assert!(matches!(
            SearchConfig::new(2, [[Score::MIN; 6]; 6]),
            Err(EngineError::InvalidWeights { bound }) if bound == 36 * 2_147_483_648
        ));

        // Fits on its own, overflows once a term is added.
        let config = SearchConfig::new(1, [[400_000; 6]; 6]).unwrap();
        assert!(matches!(
            config.with_endgame_boost(3, Score::MAX),
            Err(EngineError::InvalidWeights { .. })
        ));
        assert!(matches!(
            config.with_mobility(MobilityKind::OwnMoves, 100_000),
            Err(EngineError::InvalidWeights { .. })
        ));
        assert!(config.with_stability_bonus(1_000).is_ok());
    }
}
