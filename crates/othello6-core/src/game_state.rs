//! Game state management.
//!
//! This module provides the `GameState` struct which maintains the current
//! game position and handles the game flow around the engine: making moves,
//! automatic passing when the next side has no legal move, and game
//! termination detection.

use crate::board::Board;
use crate::disc::Side;
use crate::error::{EngineError, Result};
use crate::square::Square;

/// One entry of the move history.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HistoryEntry {
    /// The square played, or `None` for a pass.
    pub sq: Option<Square>,
    /// The board before the move.
    pub board: Board,
    /// The side that made the move (or passed).
    pub side: Side,
}

/// Represents the state of a game.
#[derive(Clone, Debug)]
pub struct GameState {
    /// The current board position.
    board: Board,
    /// Which side's turn it is to move.
    side_to_move: Side,
    history: Vec<HistoryEntry>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// Creates a new game in the initial position with PlayerA to move.
    pub fn new() -> Self {
        Self::from_board(Board::new(), Side::PlayerA)
    }

    /// Creates a new game state from an existing board position.
    ///
    /// # Arguments
    ///
    /// * `board` - The board position to start from
    /// * `side_to_move` - Which side moves next
    pub fn from_board(board: Board, side_to_move: Side) -> Self {
        Self {
            board,
            side_to_move,
            history: Vec::new(),
        }
    }

    /// Returns a reference to the current board position.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns which side's turn it is to move.
    pub fn side_to_move(&self) -> Side {
        self.side_to_move
    }

    /// Executes a move for the side to move.
    ///
    /// If the opponent is then left without a legal move while the game is
    /// not over, a pass is recorded for it and the turn comes back.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidMove`] if the move is not legal on the
    /// current board.
    pub fn make_move(&mut self, sq: Square) -> Result<()> {
        let next = self.board.apply(self.side_to_move, sq)?;

        self.history.push(HistoryEntry {
            sq: Some(sq),
            board: self.board,
            side: self.side_to_move,
        });
        self.board = next;
        self.side_to_move = self.side_to_move.opponent();

        if !self.board.has_legal_moves(self.side_to_move) && !self.board.is_game_over() {
            self.handle_pass();
        }

        Ok(())
    }

    /// Passes the turn without placing a disc.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidMove`] naming an available move if the
    /// side to move is not forced to pass.
    pub fn make_pass(&mut self) -> Result<()> {
        let moves = self.board.generate_moves(self.side_to_move);
        if let Some(sq) = moves.lsb_square() {
            return Err(EngineError::InvalidMove(sq));
        }

        self.handle_pass();
        Ok(())
    }

    fn handle_pass(&mut self) {
        self.history.push(HistoryEntry {
            sq: None,
            board: self.board,
            side: self.side_to_move,
        });
        self.side_to_move = self.side_to_move.opponent();
    }

    /// Checks if the game has ended: neither side can move, which includes a
    /// full board.
    pub fn is_game_over(&self) -> bool {
        self.board.is_game_over()
    }

    /// Returns the disc counts as `(player_a, player_b)`.
    pub fn get_score(&self) -> (u32, u32) {
        (
            self.board.count(Side::PlayerA),
            self.board.count(Side::PlayerB),
        )
    }

    /// Returns the side with more discs, or `None` on a draw.
    pub fn winner(&self) -> Option<Side> {
        let (a, b) = self.get_score();
        match a.cmp(&b) {
            std::cmp::Ordering::Greater => Some(Side::PlayerA),
            std::cmp::Ordering::Less => Some(Side::PlayerB),
            std::cmp::Ordering::Equal => None,
        }
    }

    /// Returns the last square played; `None` if the last entry was a pass
    /// or nothing has been played yet.
    pub fn last_move(&self) -> Option<Square> {
        self.history.last().and_then(|entry| entry.sq)
    }

    /// Returns the move history, passes included.
    pub fn move_history(&self) -> &[HistoryEntry] {
        &self.history
    }

    /// Undoes the last history entry.
    ///
    /// # Returns
    ///
    /// `true` if an entry was undone, `false` if the history is empty.
    pub fn undo(&mut self) -> bool {
        match self.history.pop() {
            Some(entry) => {
                self.board = entry.board;
                self.side_to_move = entry.side;
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_game() {
        let game = GameState::new();
        assert_eq!(game.side_to_move(), Side::PlayerA);
        assert!(!game.is_game_over());
        assert_eq!(game.get_score(), (2, 2));
        assert_eq!(game.winner(), None);
    }

    #[test]
    fn test_make_move() {
        let mut game = GameState::new();
        game.make_move(Square::D2).unwrap();
        assert_eq!(game.side_to_move(), Side::PlayerB);
        assert_eq!(game.get_score(), (4, 1));
        assert_eq!(game.last_move(), Some(Square::D2));
    }

    #[test]
    fn test_illegal_move() {
        let mut game = GameState::new();
        assert_eq!(
            game.make_move(Square::A1),
            Err(EngineError::InvalidMove(Square::A1))
        );
        assert_eq!(
            game.make_move(Square::C3),
            Err(EngineError::InvalidMove(Square::C3))
        );
        assert!(game.move_history().is_empty());
        assert_eq!(game.side_to_move(), Side::PlayerA);
    }

    #[test]
    fn test_make_pass_rejected_with_moves() {
        let mut game = GameState::new();
        assert_eq!(game.make_pass(), Err(EngineError::InvalidMove(Square::D2)));
    }

    #[test]
    fn test_make_pass_when_stuck() {
        let board = Board::from_string(
            "OXXXXX
             XXXXXX
             XXXXXX
             XXXXXX
             XXXXXX
             XXXXX-",
        )
        .unwrap();
        let mut game = GameState::from_board(board, Side::PlayerA);
        game.make_pass().unwrap();
        assert_eq!(game.side_to_move(), Side::PlayerB);
        assert_eq!(game.last_move(), None);

        game.make_move(Square::F6).unwrap();
        assert!(game.is_game_over());
        assert_eq!(game.get_score(), (30, 6));
        assert_eq!(game.winner(), Some(Side::PlayerA));
        // No pass is recorded once the game is over.
        assert_eq!(game.last_move(), Some(Square::F6));
    }

    #[test]
    fn test_undo() {
        let mut game = GameState::new();
        let original_board = *game.board();

        game.make_move(Square::D2).unwrap();
        game.make_move(Square::C2).unwrap();
        assert!(game.undo());
        assert!(game.undo());
        assert!(!game.undo());
        assert_eq!(*game.board(), original_board);
        assert_eq!(game.side_to_move(), Side::PlayerA);
    }

    #[test]
    fn test_game_record_with_passes() {
        // Always playing the lowest legal square fills the board with two
        // forced passes by PlayerB.
        let record = "d2c2b1c1d1e1f1e2b2a2a1b3f2e4a3e3b5b4a5a4c5a6f4d5b6f3e5f5c6d6e6f6";
        let moves: Vec<Square> = record
            .as_bytes()
            .chunks(2)
            .map(|chunk| std::str::from_utf8(chunk).unwrap().parse().unwrap())
            .collect();

        let mut game = GameState::new();
        for (i, &sq) in moves.iter().enumerate() {
            assert_eq!(
                game.board().generate_moves(game.side_to_move()).lsb_square(),
                Some(sq),
                "move #{} should be the lowest legal square",
                i + 1
            );
            game.make_move(sq).unwrap();
        }

        assert!(game.is_game_over());
        assert!(game.board().is_full());
        assert_eq!(game.get_score(), (24, 12));
        assert_eq!(game.winner(), Some(Side::PlayerA));

        let history = game.move_history();
        assert_eq!(history.len(), moves.len() + 2);
        let passes: Vec<&HistoryEntry> = history.iter().filter(|e| e.sq.is_none()).collect();
        assert_eq!(passes.len(), 2);
        assert!(passes.iter().all(|e| e.side == Side::PlayerB));
        assert_eq!(history[15].sq, None);
        assert_eq!(history[14].sq, Some(Square::A3));

        let played: Vec<Square> = history.iter().filter_map(|e| e.sq).collect();
        assert_eq!(played, moves);

        for pair in history.windows(2) {
            assert_eq!(pair[1].side, pair[0].side.opponent());
        }
    }
}
