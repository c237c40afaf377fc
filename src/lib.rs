//! # Connect Four
//!
//! The board state machine and win-detection engine for Connect Four on a
//! 6-column by 7-row grid. Presentation layers call [`game::GameState::drop_coin`]
//! and render whatever the returned [`game::MoveResult`] reports.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: board, player, state machine, shared handle
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod config;
pub mod error;
pub mod game;
