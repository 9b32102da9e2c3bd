use super::prelude::*;

/// All active comments of a page in insertion order.
pub fn list_comments_by_url<R>(repo: &R, url: &str) -> Result<Vec<Comment>>
where
    R: CommentRepository,
{
    let comments = repo.load_comments_by_url(url)?;
    log::debug!("Found {} comments for {url}", comments.len());
    Ok(comments)
}
