use std::fmt;

/// One of the two players.
///
/// `PlayerA` moves first and is drawn as `X`; `PlayerB` is drawn as `O`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    PlayerA,
    PlayerB,
}

impl Side {
    /// Returns the other side.
    #[inline(always)]
    pub const fn opponent(self) -> Side {
        match self {
            Side::PlayerA => Side::PlayerB,
            Side::PlayerB => Side::PlayerA,
        }
    }

    /// Index into per-side arrays (0 for `PlayerA`, 1 for `PlayerB`).
    #[inline(always)]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Converts the side to its character representation.
    ///
    /// # Returns
    ///
    /// * `'X'` for `Side::PlayerA`
    /// * `'O'` for `Side::PlayerB`
    pub const fn to_char(self) -> char {
        match self {
            Side::PlayerA => 'X',
            Side::PlayerB => 'O',
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::PlayerA => write!(f, "PlayerA"),
            Side::PlayerB => write!(f, "PlayerB"),
        }
    }
}

/// Contents of a single square.
///
/// The `Cell` enum has three variants:
///
/// * `Empty` - No disc.
/// * `PlayerA` - A disc of [`Side::PlayerA`].
/// * `PlayerB` - A disc of [`Side::PlayerB`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    PlayerA,
    PlayerB,
}

impl Cell {
    /// Converts the cell to its character representation.
    ///
    /// # Returns
    ///
    /// * `'-'` for `Cell::Empty`
    /// * `'X'` for `Cell::PlayerA`
    /// * `'O'` for `Cell::PlayerB`
    pub const fn to_char(self) -> char {
        match self {
            Cell::Empty => '-',
            Cell::PlayerA => 'X',
            Cell::PlayerB => 'O',
        }
    }
}

impl From<Side> for Cell {
    fn from(side: Side) -> Self {
        match side {
            Side::PlayerA => Cell::PlayerA,
            Side::PlayerB => Cell::PlayerB,
        }
    }
}
