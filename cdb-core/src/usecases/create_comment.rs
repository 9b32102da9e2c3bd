use super::prelude::*;

/// Store a new comment for the page with the given `url`.
///
/// The `url` overrides any url in the payload.
pub fn create_comment<R>(repo: &R, url: &str, payload: CommentPayload) -> Result<Comment>
where
    R: CommentRepository,
{
    validate_comment(&payload)?;
    let CommentPayload { mut comment, .. } = payload;
    comment.url = url.to_owned();
    log::debug!("Creating comment for {url}");
    Ok(repo.create_comment(comment, TimestampMs::now())?)
}

#[cfg(test)]
mod tests {
    use super::{super::tests::MockDb, *};

    #[test]
    fn create_and_bind_to_url() {
        let db = MockDb::default();
        let payload = CommentPayload::from(
            NewComment::build()
                .content("hi")
                .url("http://other/")
                .finish(),
        );
        let c = create_comment(&db, "http://x/1", payload).unwrap();
        assert_eq!(CommentId::new(1), c.id);
        assert_eq!("http://x/1", c.url);
        assert_eq!("hi", c.content);
        assert_eq!(c.created_at, c.updated_at);
        assert!(c.visibility.is_active());
        assert_eq!(1, db.comments.borrow().len());
    }

    #[test]
    fn assign_ascending_ids() {
        let db = MockDb::default();
        for expected in 1..=3 {
            let payload = CommentPayload::from(NewComment::build().content("x").finish());
            let c = create_comment(&db, "http://x/1", payload).unwrap();
            assert_eq!(CommentId::new(expected), c.id);
        }
    }

    #[test]
    fn reject_empty_comment_without_touching_storage() {
        let db = MockDb::default();
        let err = create_comment(&db, "http://x/1", CommentPayload::default()).unwrap_err();
        assert!(matches!(err, Error::EmptyComment));
        assert_eq!(0, db.writes.get());
    }

    #[test]
    fn reject_server_assigned_fields_without_touching_storage() {
        let db = MockDb::default();
        let payload = CommentPayload {
            created_at: Some(TimestampMs::from_inner(1)),
            comment: NewComment::build().content("hi").finish(),
            ..Default::default()
        };
        let err = create_comment(&db, "http://x/1", payload).unwrap_err();
        assert!(err.is_validation_error());
        assert_eq!(0, db.writes.get());
        assert!(db.comments.borrow().is_empty());
    }

    #[test]
    fn forward_storage_errors() {
        let db = MockDb::failing();
        let payload = CommentPayload::from(NewComment::build().content("hi").finish());
        let err = create_comment(&db, "http://x/1", payload).unwrap_err();
        assert!(matches!(err, Error::Repo(RepoError::Other(_))));
    }
}
