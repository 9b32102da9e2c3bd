use super::prelude::*;

pub fn get_comment<R>(repo: &R, id: CommentId) -> Result<Comment>
where
    R: CommentRepository,
{
    Ok(repo.load_comment(id)?)
}
