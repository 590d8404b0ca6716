use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error("not found")]
    NotFound,

    #[error("internal error: {0}")]
    InternalError(String),
}
