use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::{error, warn};

use crate::application::error::ApplicationError;

pub const NOT_FOUND_BODY: &str = "404 Page Not Found\n";
pub const INTERNAL_ERROR_BODY: &str = "500 Internal Server Error\n";

impl IntoResponse for ApplicationError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ApplicationError::NotFound => {
                warn!("Resource not found");
                (StatusCode::NOT_FOUND, NOT_FOUND_BODY)
            }
            ApplicationError::InternalError(ref msg) => {
                error!("Internal server error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR_BODY)
            }
        };

        (status, body).into_response()
    }
}
