//! Pieces: stones and oriented rivers.
//!
//! A stone has no orientation at the type level, so nothing can read one.
//! The wire record still carries an optional `orientation` field; it is
//! dropped when a stone is decoded and omitted when one is encoded.

use serde::{Deserialize, Serialize};

use super::side::Side;

/// Axis of a river piece.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    /// The other axis.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Orientation::Horizontal => Orientation::Vertical,
            Orientation::Vertical => Orientation::Horizontal,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Orientation::Horizontal => "horizontal",
            Orientation::Vertical => "vertical",
        }
    }
}

/// What a piece currently is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Stone,
    River(Orientation),
}

impl PieceKind {
    #[must_use]
    pub const fn is_stone(self) -> bool {
        matches!(self, PieceKind::Stone)
    }

    #[must_use]
    pub const fn is_river(self) -> bool {
        matches!(self, PieceKind::River(_))
    }

    /// Wire name of the kind, without orientation.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            PieceKind::Stone => "stone",
            PieceKind::River(_) => "river",
        }
    }
}

impl std::fmt::Display for PieceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A piece on the board. Plain value: moving one is a copy plus a clear.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "PieceRecord", into = "PieceRecord")]
pub struct Piece {
    pub owner: Side,
    pub kind: PieceKind,
}

impl Piece {
    #[must_use]
    pub const fn stone(owner: Side) -> Self {
        Self {
            owner,
            kind: PieceKind::Stone,
        }
    }

    #[must_use]
    pub const fn river(owner: Side, orientation: Orientation) -> Self {
        Self {
            owner,
            kind: PieceKind::River(orientation),
        }
    }

    #[must_use]
    pub const fn is_stone(&self) -> bool {
        self.kind.is_stone()
    }

    #[must_use]
    pub const fn is_river(&self) -> bool {
        self.kind.is_river()
    }

    /// Orientation if this is a river.
    #[must_use]
    pub const fn orientation(&self) -> Option<Orientation> {
        match self.kind {
            PieceKind::River(o) => Some(o),
            PieceKind::Stone => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
enum KindTag {
    Stone,
    River,
}

/// Wire shape of a piece: `{owner, kind, orientation}`.
#[derive(Clone, Debug, Serialize, Deserialize)]
struct PieceRecord {
    owner: Side,
    #[serde(alias = "side", default = "default_kind_tag")]
    kind: KindTag,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    orientation: Option<Orientation>,
}

fn default_kind_tag() -> KindTag {
    KindTag::Stone
}

impl From<PieceRecord> for Piece {
    fn from(record: PieceRecord) -> Self {
        match record.kind {
            KindTag::Stone => Piece::stone(record.owner),
            // Older board files wrote rivers without an explicit axis.
            KindTag::River => Piece::river(
                record.owner,
                record.orientation.unwrap_or(Orientation::Horizontal),
            ),
        }
    }
}

impl From<Piece> for PieceRecord {
    fn from(piece: Piece) -> Self {
        match piece.kind {
            PieceKind::Stone => PieceRecord {
                owner: piece.owner,
                kind: KindTag::Stone,
                orientation: None,
            },
            PieceKind::River(o) => PieceRecord {
                owner: piece.owner,
                kind: KindTag::River,
                orientation: Some(o),
            },
        }
    }
}
