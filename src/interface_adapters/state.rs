use crate::domain::GameState;
use crate::use_cases::GameEngine;
use tokio::sync::{Mutex, watch};

// Shared application state for the HTTP handlers and the push channel.
pub struct AppState {
    // Single serialization point for every mutation and every read.
    pub engine: Mutex<GameEngine>,
    // Latest board snapshot; each connection task holds a receiver.
    pub updates_tx: watch::Sender<GameState>,
}

impl AppState {
    pub fn new(engine: GameEngine) -> Self {
        let (updates_tx, _updates_rx) = watch::channel(engine.current_state().clone());
        Self {
            engine: Mutex::new(engine),
            updates_tx,
        }
    }

    /// Publishes the post-mutation snapshot to every subscriber. Callers
    /// hold the engine lock, so the watch value never trails the board.
    pub fn publish(&self, snapshot: GameState) {
        // A send error just means nobody is connected right now.
        let _ = self.updates_tx.send(snapshot);
    }
}
