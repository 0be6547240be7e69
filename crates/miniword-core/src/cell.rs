//! Cell occupancy.

/// Whether a grid cell takes a letter.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, derive_more::IsVariant)]
pub enum CellKind {
    /// Non-playable (black) cell.
    #[default]
    Blocked,
    /// Playable (white) cell.
    Open,
}

impl CellKind {
    /// Converts the raw `0`/`1` encoding used by puzzle definitions.
    ///
    /// Returns `None` for any other value.
    #[must_use]
    pub const fn from_raw(value: u8) -> Option<Self> {
        match value {
            0 => Some(Self::Blocked),
            1 => Some(Self::Open),
            _ => None,
        }
    }
}
