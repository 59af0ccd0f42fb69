use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("session carries neither an institution nor a private customer id")]
    MissingIdentity,

    #[error("unparseable date: {0}")]
    InvalidDate(String),
}
