use super::*;
use cdb_entities as e;

impl TryFrom<e::comment::Comment> for Comment {
    type Error = e::time::OutOfRangeError;

    fn try_from(from: e::comment::Comment) -> Result<Self, Self::Error> {
        let deleted_at = from.deleted_at();
        let e::comment::Comment {
            id,
            created_at,
            updated_at,
            visibility: _,
            parent_id,
            username,
            email,
            content,
            upvotes,
            downvotes,
            status,
            url,
        } = from;
        Ok(Self {
            id: Some(id.into()),
            created_at: Some(created_at.try_into()?),
            updated_at: Some(updated_at.try_into()?),
            deleted_at: deleted_at.map(TryInto::try_into).transpose()?,
            parent_id: parent_id.map(Into::into),
            username,
            email,
            content,
            upvotes,
            downvotes,
            status,
            url,
        })
    }
}
