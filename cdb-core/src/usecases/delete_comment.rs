use super::prelude::*;

/// Soft delete the comment with the given id.
pub fn delete_comment<R>(repo: &R, id: CommentId) -> Result<Comment>
where
    R: CommentRepository,
{
    log::debug!("Deleting comment {id}");
    Ok(repo.delete_comment(id, TimestampMs::now())?)
}
