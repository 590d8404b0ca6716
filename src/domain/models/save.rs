use chrono::{DateTime, Utc};

/// Extension every save file carries. Matching is case-sensitive.
pub const SAVE_EXTENSION: &str = ".sav";

/// Identity parsed out of a save's file name: `<game>_<type>[_...].sav`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveName {
    pub game_name: String,
    pub save_type: String,
}

impl SaveName {
    /// Returns `None` for anything that is not a save: a missing extension or
    /// fewer than two `_` segments. Game names cannot contain `_`; a file named
    /// `My_Factory_auto.sav` is game `My`, type `Factory`.
    pub fn parse(file_name: &str) -> Option<Self> {
        let stem = file_name.strip_suffix(SAVE_EXTENSION)?;
        let mut parts = stem.split('_');
        let game_name = parts.next()?;
        let save_type = parts.next()?;

        Some(Self {
            game_name: game_name.to_string(),
            save_type: save_type.to_string(),
        })
    }
}

#[derive(Debug, Clone)]
pub struct Save {
    pub file_name: String,
    pub save_type: String,
    pub timestamp: DateTime<Utc>,
    pub size_bytes: u64,
}

impl Save {
    pub fn new(
        file_name: String,
        save_type: String,
        timestamp: DateTime<Utc>,
        size_bytes: u64,
    ) -> Self {
        Self {
            file_name,
            save_type,
            timestamp,
            size_bytes,
        }
    }
}
