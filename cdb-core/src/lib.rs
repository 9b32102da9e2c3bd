//! # cdb-core
//!
//! Persistence contract and use cases of commentdb.
//! The storage engine is plugged in by implementing
//! [`repositories::CommentRepository`].

pub mod repositories;
pub mod usecases;

pub mod entities {
    pub use cdb_entities::{comment::*, id::*, time::*};

    #[cfg(test)]
    pub use cdb_entities::builders::*;
}

pub use self::repositories::Error as RepoError;
