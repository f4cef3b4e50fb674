//! Move-selection contract shared by every playing style.

use crate::board::Board;
use crate::disc::Side;
use crate::square::Square;

/// A player that picks moves.
///
/// Implementations must be deterministic: the same board and side always
/// yield the same answer.
pub trait Agent: Send + Sync {
    /// Display name, e.g. `"GorillaAI"`.
    fn name(&self) -> &str;

    /// Short decorative label shown next to the name.
    fn face(&self) -> &str;

    /// Chooses a move for `side` on `board`.
    ///
    /// # Returns
    ///
    /// A legal square, or `None` if `side` has to pass.
    fn place(&self, board: &Board, side: Side) -> Option<Square>;
}
