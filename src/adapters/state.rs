use axum::extract::FromRef;
use std::sync::Arc;

use crate::application::repositories::save_repository::SaveRepository;

#[derive(Clone, FromRef)]
pub struct AppState {
    pub save_repository: Arc<dyn SaveRepository>,
}
