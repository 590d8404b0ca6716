use std::{
    collections::HashMap,
    fs,
    path::{Path, PathBuf},
};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tracing::{debug, warn};

use crate::{
    application::{error::ApplicationError, repositories::save_repository::SaveRepository},
    domain::models::{
        game::Game,
        save::{Save, SaveName, SAVE_EXTENSION},
    },
};

/// Reads saves straight out of a single directory on every call.
pub struct FsSaveRepository {
    save_dir: PathBuf,
}

impl FsSaveRepository {
    pub fn new(save_dir: PathBuf) -> Self {
        Self { save_dir }
    }
}

#[async_trait]
impl SaveRepository for FsSaveRepository {
    async fn list_games(&self) -> Result<Vec<Game>, ApplicationError> {
        let save_dir = self.save_dir.clone();
        tokio::task::spawn_blocking(move || scan_save_dir(&save_dir))
            .await
            .map_err(|e| ApplicationError::InternalError(format!("Save scan failed: {}", e)))
    }
}

/// Groups the `.sav` files directly inside `dir` by game. An unreadable
/// directory yields no games.
pub fn scan_save_dir(dir: &Path) -> Vec<Game> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            warn!("Cannot list save directory {}: {}", dir.display(), e);
            return Vec::new();
        }
    };

    let mut games: HashMap<String, Game> = HashMap::new();

    for entry in entries.flatten() {
        let file_name = match entry.file_name().into_string() {
            Ok(file_name) => file_name,
            Err(raw) => {
                debug!("Skipping non UTF-8 file name {:?}", raw);
                continue;
            }
        };

        let Some(SaveName {
            game_name,
            save_type,
        }) = SaveName::parse(&file_name)
        else {
            if file_name.ends_with(SAVE_EXTENSION) {
                debug!("Skipping {}: not a <game>_<type> save name", file_name);
            }
            continue;
        };

        let path = entry.path();
        let metadata = match fs::metadata(&path) {
            Ok(metadata) if metadata.is_file() => metadata,
            Ok(_) => continue,
            Err(e) => {
                debug!("Skipping {}: {}", path.display(), e);
                continue;
            }
        };

        let timestamp = match metadata.modified() {
            Ok(modified) => DateTime::<Utc>::from(modified),
            Err(e) => {
                debug!("Skipping {}: {}", path.display(), e);
                continue;
            }
        };

        games
            .entry(game_name)
            .or_insert_with_key(|name| Game::new(name.clone()))
            .saves
            .push(Save::new(file_name, save_type, timestamp, metadata.len()));
    }

    games
        .into_values()
        .map(|mut game| {
            game.sort_saves();
            game
        })
        .collect()
}
