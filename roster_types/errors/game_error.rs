use thiserror::Error;

/// Validation errors for player records.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("Required field '{0}' is missing")]
    MissingRequiredField(&'static str),

    #[error("Name must be 1 to 12 characters long, got {0}")]
    InvalidName(usize),

    #[error("Title must be at most 30 characters long, got {0}")]
    InvalidTitle(usize),

    #[error("Experience must be within 1..=10000000, got {0}")]
    InvalidExperience(i32),

    #[error("Birthday {0} is out of the accepted range")]
    InvalidBirthday(i64),
}
