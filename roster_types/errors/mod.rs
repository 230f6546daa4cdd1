use thiserror::Error;

pub mod app_error;
pub mod db_error;
pub mod game_error;

pub use app_error::AppError;
pub use db_error::DbError;
pub use game_error::GameError;

pub type Result<T, E = ApplicationError> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Game(#[from] GameError),

    #[error(transparent)]
    App(#[from] AppError),

    #[error(transparent)]
    Db(#[from] DbError),

    #[error("Infrastructure error: {0}")]
    Infrastructure(String),
}

/// Broad category of an [`ApplicationError`], as seen by callers of the core.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Bad identifier, unreadable body or unparseable filter/order/page parameter.
    MalformedRequest,
    /// Candidate record is missing required fields or has out-of-range values.
    ValidationFailed,
    NotFound,
    /// The store failed; the underlying error is kept untouched.
    StoreFailure,
    Internal,
}

impl ApplicationError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ApplicationError::App(_) => ErrorKind::MalformedRequest,
            ApplicationError::Game(_) => ErrorKind::ValidationFailed,
            ApplicationError::Db(DbError::PlayerNotFound(_)) => ErrorKind::NotFound,
            ApplicationError::Db(_) => ErrorKind::StoreFailure,
            ApplicationError::Infrastructure(_) => ErrorKind::Internal,
        }
    }
}
