//! Core Connect Four game logic: board representation and win scan, player
//! types, the game state machine, and a thread-safe handle around it.

mod board;
mod player;
mod shared;
mod state;

pub use board::{Board, Cell, Direction, Position, WinningLine, CELLS, COLUMNS, ROWS, WIN_LENGTH};
pub use player::Player;
pub use shared::SharedGame;
pub use state::{GameOutcome, GameState, GameStatus, MoveOutcome, MoveResult};
