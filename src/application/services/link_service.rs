use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

use crate::domain::models::{game::Game, save::Save};

/// Prefix under which raw save files are served.
pub const SAVES_PREFIX: &str = "/saves";
/// Prefix of the redirect to a game's newest save.
pub const LATEST_PREFIX: &str = "/latest";
/// Interactive map that loads a save from the URL passed in `url`.
pub const VIEWER_URL: &str = "https://satisfactory-calculator.com/en/interactive-map?url=";

const SCHEME: &str = "https";

/// Characters that cannot appear raw inside a single URL path segment.
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'\\')
    .add(b'^')
    .add(b'`')
    .add(b'{')
    .add(b'|')
    .add(b'}');

/// Builds the links handed out for one request. Absolute URLs use the
/// request's host verbatim and are always `https`, since they are meant to be
/// fetched by the external viewer.
#[derive(Debug, Clone)]
pub struct LinkService {
    host: String,
}

impl LinkService {
    pub fn new(host: impl Into<String>) -> Self {
        Self { host: host.into() }
    }

    pub fn download_url(&self, save: &Save) -> String {
        format!("{}/{}", SAVES_PREFIX, path_segment(&save.file_name))
    }

    pub fn full_url(&self, save: &Save) -> String {
        self.absolute(&self.download_url(save))
    }

    pub fn view_url(&self, save: &Save) -> String {
        viewer_url(&self.full_url(save))
    }

    pub fn latest_download_url(&self, game: &Game) -> String {
        self.absolute(&format!("{}/{}", LATEST_PREFIX, path_segment(&game.name)))
    }

    pub fn latest_view_url(&self, game: &Game) -> String {
        viewer_url(&self.latest_download_url(game))
    }

    fn absolute(&self, path: &str) -> String {
        format!("{}://{}{}", SCHEME, self.host, path)
    }
}

fn path_segment(value: &str) -> String {
    utf8_percent_encode(value, PATH_SEGMENT).to_string()
}

fn viewer_url(target: &str) -> String {
    format!("{}{}", VIEWER_URL, target)
}
