//! In-memory game records keyed by integer id.
//!
//! The store treats [`Game`] as an opaque value: it never inspects the board,
//! it only hands moves to [`Game::apply_move`] and keeps whatever comes back.

use std::collections::HashMap;

use log::{debug, info};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::chess::error::GameError;
use crate::chess::game::Game;
use crate::chess::moves::Move;

pub type GameId = u32;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    pub game_id: GameId,
    pub white_username: Option<String>,
    pub black_username: Option<String>,
    pub game_name: String,
    pub game: Game,
}

impl GameRecord {
    /// A record with no players yet. The id is assigned by the store on creation.
    pub fn new(game_name: impl Into<String>, game: Game) -> Self {
        Self {
            game_id: 0,
            white_username: None,
            black_username: None,
            game_name: game_name.into(),
            game,
        }
    }

    pub fn with_white(mut self, user: impl Into<String>) -> Self {
        self.white_username = Some(user.into());
        self
    }

    pub fn with_black(mut self, user: impl Into<String>) -> Self {
        self.black_username = Some(user.into());
        self
    }
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("no game with id {0}")]
    UnknownGame(GameId),

    #[error(transparent)]
    Move(#[from] GameError),
}

/// Storage for game records.
pub trait GameStore {
    /// Stores `record` under a fresh id and returns that id.
    fn create_game(&mut self, record: GameRecord) -> Result<GameId, StoreError>;

    fn get_game(&self, id: GameId) -> Result<Option<GameRecord>, StoreError>;

    fn list_games(&self) -> Result<Vec<GameRecord>, StoreError>;

    /// Writes `record` under `record.game_id`, replacing any previous record.
    fn update_game(&mut self, record: GameRecord) -> Result<(), StoreError>;

    fn clear(&mut self) -> Result<(), StoreError>;
}

#[derive(Debug, Clone)]
pub struct MemoryGameStore {
    next_id: GameId,
    games: HashMap<GameId, GameRecord>,
}

impl Default for MemoryGameStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryGameStore {
    pub fn new() -> Self {
        Self {
            next_id: 1,
            games: HashMap::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.games.len()
    }

    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }
}

impl GameStore for MemoryGameStore {
    fn create_game(&mut self, mut record: GameRecord) -> Result<GameId, StoreError> {
        let id = self.next_id;
        self.next_id += 1;
        record.game_id = id;
        info!("created game {id} ({})", record.game_name);
        self.games.insert(id, record);
        Ok(id)
    }

    fn get_game(&self, id: GameId) -> Result<Option<GameRecord>, StoreError> {
        Ok(self.games.get(&id).cloned())
    }

    fn list_games(&self) -> Result<Vec<GameRecord>, StoreError> {
        let mut out: Vec<GameRecord> = self.games.values().cloned().collect();
        out.sort_by_key(|r| r.game_id);
        Ok(out)
    }

    fn update_game(&mut self, record: GameRecord) -> Result<(), StoreError> {
        debug!("updated game {}", record.game_id);
        self.games.insert(record.game_id, record);
        Ok(())
    }

    fn clear(&mut self) -> Result<(), StoreError> {
        info!("cleared {} games", self.games.len());
        self.games.clear();
        Ok(())
    }
}

/// Loads game `id`, plays `mv` on it and writes the result back.
///
/// A rejected move leaves the stored record untouched.
pub fn play_move<S: GameStore + ?Sized>(
    store: &mut S,
    id: GameId,
    mv: Move,
) -> Result<GameRecord, StoreError> {
    let mut record = store.get_game(id)?.ok_or(StoreError::UnknownGame(id))?;
    record.game.apply_move(mv)?;
    store.update_game(record.clone())?;
    Ok(record)
}
