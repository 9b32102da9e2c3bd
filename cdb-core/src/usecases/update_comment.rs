use super::prelude::*;

/// Overwrite all non-zero fields of the payload onto the comment
/// with the given id.
pub fn update_comment<R>(repo: &R, id: CommentId, payload: CommentPayload) -> Result<Comment>
where
    R: CommentRepository,
{
    validate_comment(&payload)?;
    let patch = CommentPatch::from(payload.comment);
    log::debug!("Updating comment {id}");
    Ok(repo.update_comment(id, patch, TimestampMs::now())?)
}
