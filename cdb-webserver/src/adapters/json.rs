pub use cdb_boundary::*;

use cdb_core::{entities as e, usecases};

pub mod from_json {
    //! JSON -> Entity

    use super::*;

    // NOTE:
    // We cannot impl From<T> here, because both the JSON structs
    // and the payload of the use cases are defined outside of
    // this crate.

    /// A `parentId` of 0 refers to no parent.
    pub fn comment_payload(from: Comment) -> usecases::CommentPayload {
        let Comment {
            id,
            created_at,
            updated_at,
            deleted_at,
            parent_id,
            username,
            email,
            content,
            upvotes,
            downvotes,
            status,
            url,
        } = from;
        usecases::CommentPayload {
            id,
            created_at: created_at.map(Into::into),
            updated_at: updated_at.map(Into::into),
            deleted_at: deleted_at.map(Into::into),
            comment: e::NewComment {
                parent_id: parent_id.filter(|id| *id != 0).map(e::CommentId::new),
                username,
                email,
                content,
                upvotes,
                downvotes,
                status,
                url,
            },
        }
    }

}
