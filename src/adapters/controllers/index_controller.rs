use std::sync::Arc;

use axum::{extract::State, http::Uri, response::Html};
use tracing::{debug, info};

use crate::{
    adapters::{extractors::RequestHost, views::list_page},
    application::{
        dto::listing_dto::ListingDTO, error::ApplicationError,
        repositories::save_repository::SaveRepository, services::link_service::LinkService,
    },
};

pub struct IndexController;

impl IndexController {
    /// Listing of every game and its saves
    /// GET /
    pub async fn index(
        State(save_repo): State<Arc<dyn SaveRepository>>,
        RequestHost(host): RequestHost,
    ) -> Result<Html<String>, ApplicationError> {
        let games = save_repo.list_games().await?;
        info!("Listing {} games for host {}", games.len(), host);

        let listing = ListingDTO::new(&games, &LinkService::new(host));
        let page = list_page::render(&listing).map_err(|e| {
            ApplicationError::InternalError(format!("Failed to render listing: {}", e))
        })?;

        Ok(Html(page))
    }

    pub async fn not_found(uri: Uri) -> ApplicationError {
        debug!("No route for {}", uri);
        ApplicationError::NotFound
    }
}
