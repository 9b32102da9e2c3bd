use super::prelude::*;

/// A comment as submitted by a client.
///
/// The server-assigned fields are only kept to be able to
/// reject payloads that try to set them.
#[rustfmt::skip]
#[derive(Debug, Clone, Default)]
pub struct CommentPayload {
    pub id         : Option<u64>,
    pub created_at : Option<TimestampMs>,
    pub updated_at : Option<TimestampMs>,
    pub deleted_at : Option<TimestampMs>,
    pub comment    : NewComment,
}

impl CommentPayload {
    /// All fields are absent or have their zero value.
    pub fn is_empty(&self) -> bool {
        self.server_assigned_fields().is_empty() && self.comment.is_empty()
    }

    /// Names of all server-assigned fields that are set,
    /// in the order of the wire format.
    pub fn server_assigned_fields(&self) -> Vec<&'static str> {
        let Self {
            id,
            created_at,
            updated_at,
            deleted_at,
            comment: _,
        } = self;
        [
            ("id", id.is_some()),
            ("createdAt", created_at.is_some()),
            ("updatedAt", updated_at.is_some()),
            ("deletedAt", deleted_at.is_some()),
        ]
        .into_iter()
        .filter_map(|(name, is_set)| is_set.then_some(name))
        .collect()
    }
}

impl From<NewComment> for CommentPayload {
    fn from(comment: NewComment) -> Self {
        Self {
            comment,
            ..Default::default()
        }
    }
}

/// Reject payloads that contain any server-assigned field.
pub fn validate_inbound_fields(payload: &CommentPayload) -> Result<()> {
    let fields = payload.server_assigned_fields();
    if !fields.is_empty() {
        return Err(Error::IllegalFields(fields));
    }
    Ok(())
}

/// Check that the payload is acceptable for storing it,
/// i.e. not empty and without any server-assigned fields.
pub fn validate_comment(payload: &CommentPayload) -> Result<()> {
    if payload.is_empty() {
        return Err(Error::EmptyComment);
    }
    validate_inbound_fields(payload)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accept_payload_without_server_assigned_fields() {
        let payload = CommentPayload::from(NewComment::build().content("hi").finish());
        assert!(validate_inbound_fields(&payload).is_ok());
        assert!(validate_comment(&payload).is_ok());
    }

    #[test]
    fn reject_every_server_assigned_field() {
        let ts = TimestampMs::from_inner(1);
        let payloads = [
            CommentPayload {
                id: Some(1),
                ..Default::default()
            },
            CommentPayload {
                created_at: Some(ts),
                ..Default::default()
            },
            CommentPayload {
                updated_at: Some(ts),
                ..Default::default()
            },
            CommentPayload {
                deleted_at: Some(ts),
                ..Default::default()
            },
        ];
        for payload in payloads {
            assert!(matches!(
                validate_inbound_fields(&payload),
                Err(Error::IllegalFields(ref fields)) if fields.len() == 1
            ));
        }
    }

    #[test]
    fn name_all_illegal_fields() {
        let payload = CommentPayload {
            id: Some(3),
            deleted_at: Some(TimestampMs::from_inner(2)),
            comment: NewComment::build().content("hi").finish(),
            ..Default::default()
        };
        match validate_comment(&payload) {
            Err(Error::IllegalFields(fields)) => assert_eq!(vec!["id", "deletedAt"], fields),
            res => panic!("unexpected result: {res:?}"),
        }
    }

    #[test]
    fn empty_check_runs_before_field_check() {
        assert!(matches!(
            validate_comment(&CommentPayload::default()),
            Err(Error::EmptyComment)
        ));
        // A payload with only an id is not empty but illegal
        let payload = CommentPayload {
            id: Some(1),
            ..Default::default()
        };
        assert!(matches!(
            validate_comment(&payload),
            Err(Error::IllegalFields(_))
        ));
    }

    #[test]
    fn accept_payload_without_content() {
        let payload = CommentPayload::from(NewComment::build().parent_id(1).finish());
        assert!(validate_comment(&payload).is_ok());
    }
}
