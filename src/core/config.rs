//! Board configuration: size presets and width-dependent scoring tiers.
//!
//! Every constant that depends on board width lives in `ScoringTier`, so the
//! rest of the engine asks one place for score columns, the win threshold and
//! the final-score weights.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Row holding Circle's own score cells.
pub const CIRCLE_SCORE_ROW: i32 = 2;

/// Accepted actions between two repetition samples (one round for both sides).
pub const STALEMATE_SAMPLE_INTERVAL: u32 = 4;

/// Identical consecutive samples that end the game in a draw.
pub const STALEMATE_REPEATS: usize = 3;

/// Standard board presets.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BoardSize {
    /// 13 rows x 12 columns, 12 pieces per side.
    #[default]
    Small,
    /// 15 rows x 14 columns, 14 pieces per side.
    Medium,
    /// 17 rows x 16 columns, 16 pieces per side.
    Large,
}

impl BoardSize {
    #[must_use]
    pub const fn rows(self) -> usize {
        match self {
            BoardSize::Small => 13,
            BoardSize::Medium => 15,
            BoardSize::Large => 17,
        }
    }

    #[must_use]
    pub const fn cols(self) -> usize {
        match self {
            BoardSize::Small => 12,
            BoardSize::Medium => 14,
            BoardSize::Large => 16,
        }
    }

    /// Preset matching the given dimensions, if any.
    #[must_use]
    pub fn from_dims(rows: usize, cols: usize) -> Option<Self> {
        [BoardSize::Small, BoardSize::Medium, BoardSize::Large]
            .into_iter()
            .find(|s| s.rows() == rows && s.cols() == cols)
    }
}

/// Score column indices. At most six for any tier.
pub type ScoreColumns = SmallVec<[i32; 6]>;

/// Width-dependent constants.
///
/// | cols   | score width | win count | W    | total |
/// |--------|-------------|-----------|------|-------|
/// | <= 12  | 4           | 4         | 10.0 | 12    |
/// | <= 14  | 5           | 5         | 8.0  | 14    |
/// | > 14   | 6           | 6         | 6.5  | 16    |
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScoringTier {
    /// Number of centered score columns.
    pub score_width: usize,
    /// Stones in own score cells needed to win.
    pub win_count: usize,
    /// Weight applied to the loser's board standing.
    pub weight: f64,
    /// Pieces per side, the denominator for "reachable in one" counts.
    pub total_pieces: usize,
}

impl ScoringTier {
    /// Tier for a board `cols` wide.
    #[must_use]
    pub const fn for_cols(cols: usize) -> Self {
        if cols <= 12 {
            Self {
                score_width: 4,
                win_count: 4,
                weight: 10.0,
                total_pieces: 12,
            }
        } else if cols <= 14 {
            Self {
                score_width: 5,
                win_count: 5,
                weight: 8.0,
                total_pieces: 14,
            }
        } else {
            Self {
                score_width: 6,
                win_count: 6,
                weight: 6.5,
                total_pieces: 16,
            }
        }
    }

    /// Centered score columns for a board `cols` wide.
    #[must_use]
    pub fn score_columns(&self, cols: usize) -> ScoreColumns {
        let start = cols.saturating_sub(self.score_width) / 2;
        (start..start + self.score_width).map(|c| c as i32).collect()
    }
}
