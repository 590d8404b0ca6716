use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::{services::ServeDir, trace::TraceLayer};

use crate::{
    adapters::{
        controllers::{index_controller::IndexController, latest_controller::LatestController},
        repositories::FsSaveRepository,
        state::AppState,
    },
    application::{
        repositories::save_repository::SaveRepository, services::link_service::SAVES_PREFIX,
    },
    domain::config::server::ServerConfig,
};

pub fn create_router(config: &ServerConfig) -> Router {
    let app_state = AppState {
        save_repository: Arc::new(FsSaveRepository::new(config.save_dir.clone()))
            as Arc<dyn SaveRepository>,
    };

    Router::new()
        .route("/", get(IndexController::index))
        .route("/latest/{game_name}", get(LatestController::latest))
        .nest_service(SAVES_PREFIX, ServeDir::new(&config.save_dir))
        .fallback(IndexController::not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}
