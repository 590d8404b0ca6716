use std::fmt::Display;

use chrono::{DateTime, Local, TimeZone};

use crate::{
    application::services::link_service::LinkService,
    domain::models::{game::Game, save::Save},
};

const SAVE_TIME_FORMAT: &str = "%a, %d %b %Y %H:%M:%S";
const SIZE_UNITS: [&str; 7] = ["B", "kB", "MB", "GB", "TB", "PB", "EB"];

#[derive(Debug, Clone)]
pub struct SaveEntry {
    pub file_name: String,
    pub save_type: String,
    pub download_url: String,
    pub full_url: String,
    pub view_url: String,
    pub save_time: String,
    pub file_size: String,
}

impl SaveEntry {
    pub fn from_save(save: &Save, links: &LinkService) -> Self {
        Self {
            file_name: save.file_name.clone(),
            save_type: save.save_type.clone(),
            download_url: links.download_url(save),
            full_url: links.full_url(save),
            view_url: links.view_url(save),
            save_time: format_save_time(&save.timestamp.with_timezone(&Local)),
            file_size: format_size(save.size_bytes),
        }
    }
}

#[derive(Debug, Clone)]
pub struct GameEntry {
    pub name: String,
    pub latest_download_url: String,
    pub latest_view_url: String,
    pub saves: Vec<SaveEntry>,
}

impl GameEntry {
    pub fn from_game(game: &Game, links: &LinkService) -> Self {
        Self {
            name: game.name.clone(),
            latest_download_url: links.latest_download_url(game),
            latest_view_url: links.latest_view_url(game),
            saves: game
                .saves
                .iter()
                .map(|save| SaveEntry::from_save(save, links))
                .collect(),
        }
    }
}

/// Everything the listing page shows for one request.
#[derive(Debug, Clone, Default)]
pub struct ListingDTO {
    pub games: Vec<GameEntry>,
}

impl ListingDTO {
    /// Games are ordered by name here; the inventory itself has no order.
    pub fn new(games: &[Game], links: &LinkService) -> Self {
        let mut games: Vec<GameEntry> = games
            .iter()
            .map(|game| GameEntry::from_game(game, links))
            .collect();
        games.sort_by(|a, b| a.name.cmp(&b.name));
        Self { games }
    }
}

pub fn format_save_time<Tz: TimeZone>(timestamp: &DateTime<Tz>) -> String
where
    Tz::Offset: Display,
{
    timestamp.format(SAVE_TIME_FORMAT).to_string()
}

/// SI sizes with one decimal below ten units: `5 B`, `812 B`, `1.2 MB`, `34 MB`.
pub fn format_size(bytes: u64) -> String {
    if bytes < 10 {
        return format!("{} B", bytes);
    }

    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1000.0 && unit < SIZE_UNITS.len() - 1 {
        value /= 1000.0;
        unit += 1;
    }

    let rounded = (value * 10.0 + 0.5).floor() / 10.0;
    if rounded >= 10.0 {
        format!("{:.0} {}", rounded, SIZE_UNITS[unit])
    } else {
        format!("{:.1} {}", rounded, SIZE_UNITS[unit])
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;

    fn save(file_name: &str, secs: i64) -> Save {
        Save::new(
            file_name.to_string(),
            "autosave".to_string(),
            Utc.timestamp_opt(secs, 0).unwrap(),
            2_500_000,
        )
    }

    #[test]
    fn formats_sizes() {
        assert_eq!(format_size(0), "0 B");
        assert_eq!(format_size(9), "9 B");
        assert_eq!(format_size(812), "812 B");
        assert_eq!(format_size(1_000), "1.0 kB");
        assert_eq!(format_size(1_234_567), "1.2 MB");
        assert_eq!(format_size(34_000_000), "34 MB");
        assert_eq!(format_size(5_500_000_000), "5.5 GB");
    }

    #[test]
    fn formats_save_time() {
        let ts = Utc.with_ymd_and_hms(2006, 1, 2, 15, 4, 5).unwrap();
        assert_eq!(format_save_time(&ts), "Mon, 02 Jan 2006 15:04:05");
    }

    #[test]
    fn game_entry_carries_links_for_every_save() {
        let mut game = Game::new("Factory".to_string());
        game.saves.push(save("Factory_manual.sav", 200));
        game.saves.push(save("Factory_autosave.sav", 100));
        let links = LinkService::new("host");

        let entry = GameEntry::from_game(&game, &links);

        assert_eq!(entry.latest_download_url, "https://host/latest/Factory");
        assert_eq!(entry.saves.len(), 2);
        assert_eq!(entry.saves[0].download_url, "/saves/Factory_manual.sav");
        assert_eq!(entry.saves[0].full_url, "https://host/saves/Factory_manual.sav");
        assert_eq!(entry.saves[1].file_size, "2.5 MB");
    }

    #[test]
    fn listing_orders_games_by_name() {
        let games = vec![
            Game::new("Zeta".to_string()),
            Game::new("Alpha".to_string()),
            Game::new("Mid".to_string()),
        ];

        let listing = ListingDTO::new(&games, &LinkService::new("host"));

        let names: Vec<_> = listing.games.iter().map(|g| g.name.as_str()).collect();
        assert_eq!(names, ["Alpha", "Mid", "Zeta"]);
    }
}
