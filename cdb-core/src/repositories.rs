// Low-level database access traits.
// A repository is responsible for a single entity.
// Lookups never return soft-deleted records.

use crate::entities::*;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("The requested object could not be found")]
    NotFound,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

type Result<T> = std::result::Result<T, Error>;

pub trait CommentRepository {
    /// Append a new comment.
    ///
    /// The repository assigns the id. Both `created_at` and
    /// `updated_at` are set to the given insertion time.
    fn create_comment(&self, comment: NewComment, created_at: TimestampMs) -> Result<Comment>;

    // Only active comments
    fn load_comment(&self, id: CommentId) -> Result<Comment>;
    // Only active comments, in insertion order
    fn load_comments_by_url(&self, url: &str) -> Result<Vec<Comment>>;

    /// Apply the patch to the active comment with the given id and
    /// return the updated comment.
    ///
    /// The new `updated_at` is the later of `updated_at` and the
    /// successor of the previous value, i.e. it always advances.
    ///
    /// Fails with [`Error::NotFound`] if the update did not affect
    /// any row, even though the statement itself succeeded.
    fn update_comment(
        &self,
        id: CommentId,
        patch: CommentPatch,
        updated_at: TimestampMs,
    ) -> Result<Comment>;

    /// Mark the active comment with the given id as deleted and
    /// return it.
    ///
    /// Fails with [`Error::NotFound`] if the statement did not
    /// affect any row.
    fn delete_comment(&self, id: CommentId, deleted_at: TimestampMs) -> Result<Comment>;
}
