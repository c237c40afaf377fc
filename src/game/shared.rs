use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use super::player::Player;
use super::state::{GameState, MoveResult};
use crate::error::MoveError;

/// A game that several threads can drive. Every operation holds the lock for
/// its full duration, so a `drop_coin` is observed entirely or not at all.
#[derive(Debug, Clone, Default)]
pub struct SharedGame {
    inner: Arc<Mutex<GameState>>,
}

impl SharedGame {
    pub fn new(state: GameState) -> Self {
        SharedGame {
            inner: Arc::new(Mutex::new(state)),
        }
    }

    // A panic while holding the lock cannot leave a half-applied move behind:
    // drop_coin validates before it writes.
    fn lock(&self) -> MutexGuard<'_, GameState> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn drop_coin(&self, column: usize) -> Result<MoveResult, MoveError> {
        self.lock().drop_coin(column)
    }

    pub fn reset(&self) {
        self.lock().reset();
    }

    pub fn current_player(&self) -> Player {
        self.lock().current_player()
    }

    /// Copy of the current state
    pub fn snapshot(&self) -> GameState {
        self.lock().clone()
    }
}

impl From<GameState> for SharedGame {
    fn from(state: GameState) -> Self {
        Self::new(state)
    }
}
