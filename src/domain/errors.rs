use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Invalid instant: {0}")]
    InvalidInstant(#[from] chrono::ParseError),
    #[error("Holiday feed request failed: {0}")]
    Feed(#[from] reqwest::Error),
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

pub type DomainResult<T> = Result<T, DomainError>;
