use crate::domain::models::save::Save;

/// All saves sharing a game name, newest first once [`Game::sort_saves`] ran.
#[derive(Debug, Clone)]
pub struct Game {
    pub name: String,
    pub saves: Vec<Save>,
}

impl Game {
    pub fn new(name: String) -> Self {
        Self {
            name,
            saves: Vec::new(),
        }
    }

    /// Newest first. Equal timestamps keep their discovery order.
    pub fn sort_saves(&mut self) {
        self.saves.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    }

    pub fn latest(&self) -> Option<&Save> {
        self.saves.first()
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;

    fn save(file_name: &str, secs: i64) -> Save {
        Save::new(
            file_name.to_string(),
            "autosave".to_string(),
            Utc.timestamp_opt(secs, 0).unwrap(),
            0,
        )
    }

    #[test]
    fn sorts_newest_first() {
        let mut game = Game::new("Factory".to_string());
        game.saves.push(save("Factory_a.sav", 100));
        game.saves.push(save("Factory_b.sav", 300));
        game.saves.push(save("Factory_c.sav", 200));

        game.sort_saves();

        let names: Vec<_> = game.saves.iter().map(|s| s.file_name.as_str()).collect();
        assert_eq!(names, ["Factory_b.sav", "Factory_c.sav", "Factory_a.sav"]);
        assert_eq!(game.latest().unwrap().file_name, "Factory_b.sav");
    }

    #[test]
    fn ties_keep_discovery_order() {
        let mut game = Game::new("Factory".to_string());
        game.saves.push(save("Factory_a.sav", 100));
        game.saves.push(save("Factory_b.sav", 100));

        game.sort_saves();

        assert_eq!(game.saves[0].file_name, "Factory_a.sav");
        assert_eq!(game.saves[1].file_name, "Factory_b.sav");
    }
}
