use crate::repositories;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Empty comment")]
    EmptyComment,
    #[error("Following fields must not be set: {}", .0.join(", "))]
    IllegalFields(Vec<&'static str>),
    #[error(transparent)]
    Repo(#[from] repositories::Error),
}

impl Error {
    /// Errors that are caused by the client and not by the storage.
    pub const fn is_validation_error(&self) -> bool {
        matches!(self, Self::EmptyComment | Self::IllegalFields(_))
    }

    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::Repo(repositories::Error::NotFound))
    }
}
