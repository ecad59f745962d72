//! Shared-state wrapper for multi-threaded presentation layers.
//!
//! The engine itself is single-threaded and synchronous; every operation
//! completes before returning. A presentation layer that handles input on
//! another thread needs exclusive access to the whole `GameState`, so one
//! coarse lock around it is enough.

use std::sync::Arc;

use parking_lot::{Mutex, MutexGuard};

use crate::board::{Color, Piece, Square};
use crate::game::GameState;

/// A clone-able handle to a mutex-guarded [`GameState`].
#[derive(Clone, Debug)]
pub struct SharedGame(Arc<Mutex<GameState>>);

impl SharedGame {
    /// Create a shared game at the standard starting position.
    #[must_use]
    pub fn new() -> Self {
        SharedGame(Arc::new(Mutex::new(GameState::new())))
    }

    /// Wrap an existing game state.
    #[must_use]
    pub fn from_state(state: GameState) -> Self {
        SharedGame(Arc::new(Mutex::new(state)))
    }

    /// Lock the game state for a sequence of operations.
    #[must_use]
    pub fn lock(&self) -> MutexGuard<'_, GameState> {
        self.0.lock()
    }

    /// Process one square interaction under the lock.
    pub fn select_or_move(&self, sq: Square) {
        self.0.lock().select_or_move(sq);
    }

    /// The side whose turn it is.
    #[must_use]
    pub fn side_to_move(&self) -> Color {
        self.0.lock().side_to_move()
    }

    /// The piece occupying a square, for rendering.
    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Option<(Color, Piece)> {
        self.0.lock().piece_at(sq)
    }

    /// The currently selected origin square, if any.
    #[must_use]
    pub fn selection(&self) -> Option<Square> {
        self.0.lock().selection()
    }
}

impl Default for SharedGame {
    fn default() -> Self {
        Self::new()
    }
}

impl From<GameState> for SharedGame {
    fn from(state: GameState) -> Self {
        Self::from_state(state)
    }
}
