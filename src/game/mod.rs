//! Core Connect Four game logic: grid representation, player types, and the
//! turn state machine.

mod grid;
mod player;
mod state;

pub use grid::{Cell, Direction, Grid, WinLine, WIN_LENGTH};
pub use player::Player;
pub use state::{GameOutcome, GameState, PlacedPiece};
