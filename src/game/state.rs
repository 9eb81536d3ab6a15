use crate::error::MoveError;

use super::{Grid, Player, WinLine};

/// How a finished game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Won { player: Player, line: WinLine },
    Tied,
}

/// A committed move: where the piece landed and whose it is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlacedPiece {
    pub row: usize,
    pub column: usize,
    pub player: Player,
}

/// Authoritative game state: the grid, whose turn it is, and whether the game
/// has ended.
///
/// Mutated in place by [`play`](GameState::play); starting over means
/// replacing the whole value with a fresh one, never clearing this one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    grid: Grid,
    current_player: Player,
    outcome: Option<GameOutcome>,
}

impl GameState {
    /// Fresh game on an empty `rows × cols` grid; Player 1 moves first.
    pub fn new(rows: usize, cols: usize) -> Self {
        GameState {
            grid: Grid::new(rows, cols),
            current_player: Player::One,
            outcome: None,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Outcome of the game, once there is one.
    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    /// Whether a win or tie has been reached. Set at most once; no further
    /// moves are accepted afterward.
    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    /// Drop the current player's piece down `column`.
    ///
    /// The whole transition commits synchronously: placement, win check, tie
    /// check, and turn switch all happen before this returns. A rejected move
    /// leaves the state untouched. On a win or tie the turn does not switch,
    /// so `current_player` still names the mover.
    pub fn play(&mut self, column: usize) -> Result<PlacedPiece, MoveError> {
        if self.is_over() {
            return Err(MoveError::GameOver);
        }

        let player = self.current_player;
        let row = self.grid.drop_piece(column, player)?;

        if let Some(line) = self.grid.detect_win(player) {
            self.outcome = Some(GameOutcome::Won { player, line });
        } else if self.grid.is_full() {
            self.outcome = Some(GameOutcome::Tied);
        } else {
            self.current_player = player.other();
        }

        Ok(PlacedPiece {
            row,
            column,
            player,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let state = GameState::new(6, 7);
        assert_eq!(state.current_player(), Player::One);
        assert!(!state.is_over());
        assert_eq!(state.outcome(), None);
        assert_eq!(state.grid().rows(), 6);
        assert_eq!(state.grid().cols(), 7);
    }

    #[test]
    fn test_play_drops_to_bottom_and_switches_turn() {
        let mut state = GameState::new(6, 7);

        let placed = state.play(3).unwrap();
        assert_eq!(
            placed,
            PlacedPiece {
                row: 5,
                column: 3,
                player: Player::One
            }
        );
        assert_eq!(state.grid().get(5, 3), Some(Player::One));
        assert_eq!(state.current_player(), Player::Two);

        let placed = state.play(3).unwrap();
        assert_eq!(placed.row, 4);
        assert_eq!(placed.player, Player::Two);
        assert_eq!(state.current_player(), Player::One);
    }

    #[test]
    fn test_horizontal_win_ends_game() {
        let mut state = GameState::new(6, 7);

        // Player 1 builds the bottom row while Player 2 stacks on top.
        for column in [0, 0, 1, 1, 2, 2] {
            state.play(column).unwrap();
        }
        state.play(3).unwrap();

        assert!(state.is_over());
        match state.outcome().unwrap() {
            GameOutcome::Won { player, line } => {
                assert_eq!(player, Player::One);
                assert_eq!(line.cells, [(5, 0), (5, 1), (5, 2), (5, 3)]);
            }
            GameOutcome::Tied => panic!("expected a win"),
        }
        // The winner stays the current player.
        assert_eq!(state.current_player(), Player::One);
    }

    #[test]
    fn test_vertical_win_in_one_column() {
        let mut state = GameState::new(6, 7);

        // Player 1 stacks column 2; Player 2 plays elsewhere.
        for column in [2, 5, 2, 6, 2, 5] {
            state.play(column).unwrap();
        }
        state.play(2).unwrap();

        match state.outcome().unwrap() {
            GameOutcome::Won { player, line } => {
                assert_eq!(player, Player::One);
                assert_eq!(line.cells, [(2, 2), (3, 2), (4, 2), (5, 2)]);
            }
            GameOutcome::Tied => panic!("expected a win"),
        }
    }

    #[test]
    fn test_move_after_win_is_rejected() {
        let mut state = GameState::new(6, 7);
        for column in [0, 0, 1, 1, 2, 2, 3] {
            state.play(column).unwrap();
        }
        assert!(state.is_over());
        let outcome = state.outcome();
        let grid_before = state.grid().clone();

        assert_eq!(state.play(4), Err(MoveError::GameOver));
        assert_eq!(state.outcome(), outcome);
        assert_eq!(state.grid(), &grid_before);
    }

    #[test]
    fn test_tie_on_filled_board() {
        // On a 2x2 board no run can reach four, so filling it ties.
        let mut state = GameState::new(2, 2);
        for column in [0, 1, 0, 1] {
            state.play(column).unwrap();
        }

        assert_eq!(state.outcome(), Some(GameOutcome::Tied));
        assert_eq!(state.play(0), Err(MoveError::GameOver));
    }

    #[test]
    fn test_full_column_rejected_without_state_change() {
        let mut state = GameState::new(6, 7);
        for _ in 0..3 {
            state.play(0).unwrap();
            state.play(0).unwrap();
        }
        let mover = state.current_player();

        assert_eq!(state.play(0), Err(MoveError::ColumnFull { column: 0 }));
        assert_eq!(state.current_player(), mover);
        assert!(!state.is_over());
    }

    #[test]
    fn test_out_of_range_column_rejected() {
        let mut state = GameState::new(6, 7);
        assert_eq!(
            state.play(7),
            Err(MoveError::ColumnOutOfRange { column: 7 })
        );
        assert_eq!(state.current_player(), Player::One);
    }
}
