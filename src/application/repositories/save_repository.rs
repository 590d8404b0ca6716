use async_trait::async_trait;

use crate::{application::error::ApplicationError, domain::models::game::Game};

#[async_trait]
pub trait SaveRepository: Send + Sync {
    /// Scans the save store from scratch. Games come back in no particular
    /// order; each game's saves are newest first. Files that cannot be read or
    /// are not saves are left out rather than reported.
    async fn list_games(&self) -> Result<Vec<Game>, ApplicationError>;
}
