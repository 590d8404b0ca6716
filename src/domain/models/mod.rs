pub mod game;
pub mod save;
