use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use tracing::{info, warn};

use crate::{
    adapters::extractors::RequestHost,
    application::{
        error::ApplicationError, repositories::save_repository::SaveRepository,
        services::link_service::LinkService,
    },
};

pub struct LatestController;

impl LatestController {
    /// Redirects to the newest save of a game. The redirect is a 302 so the
    /// `/latest` URL itself is what clients keep.
    /// GET /latest/{game_name}
    pub async fn latest(
        State(save_repo): State<Arc<dyn SaveRepository>>,
        RequestHost(host): RequestHost,
        Path(game_name): Path<String>,
    ) -> Result<Response, ApplicationError> {
        if game_name.is_empty() {
            return Err(ApplicationError::NotFound);
        }

        let games = save_repo.list_games().await?;
        let latest = games
            .iter()
            .find(|game| game.name == game_name)
            .and_then(|game| game.latest())
            .ok_or_else(|| {
                warn!("No saves for game {}", game_name);
                ApplicationError::NotFound
            })?;

        let target = LinkService::new(host).full_url(latest);
        info!("Latest save for {} is {}", game_name, latest.file_name);

        Ok((StatusCode::FOUND, [(header::LOCATION, target)]).into_response())
    }
}
