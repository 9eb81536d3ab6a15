//! # Connect Four
//!
//! A two-player Connect Four game for the terminal. Players alternate
//! dropping pieces down a column until one gets four in a row (horizontal,
//! vertical, or diagonal) or the board fills for a tie.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: grid, players, win/tie detection, turn state machine
//! - [`ui`] — Terminal UI: board rendering and the event loop
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod config;
pub mod error;
pub mod game;
pub mod ui;
