// NOTE:
// All timestamps with the `_at` postfix are stored
// as unix timestamp in **milli**seconds.

use anyhow::anyhow;
use diesel::{self, prelude::*, result::Error as DieselError};

use cdb_core::{
    entities::*,
    repositories::{self as repo, *},
};

use super::*;

mod comment;

type Result<T> = std::result::Result<T, repo::Error>;

pub fn from_diesel_err(err: DieselError) -> repo::Error {
    match err {
        DieselError::NotFound => repo::Error::NotFound,
        _ => repo::Error::Other(err.into()),
    }
}

diesel::define_sql_function! {
    /// Id of the latest row inserted through the same connection.
    fn last_insert_rowid() -> diesel::sql_types::BigInt;
}

pub(crate) fn last_insert_id(conn: &mut SqliteConnection) -> Result<i64> {
    diesel::select(last_insert_rowid())
        .get_result::<i64>(conn)
        .map_err(from_diesel_err)
}

fn load_counter(name: &str, value: i64) -> Result<u32> {
    u32::try_from(value).map_err(|_| anyhow!("Invalid {name} counter: {value}").into())
}

fn load_parent_id(parent_id: i64) -> Result<Option<CommentId>> {
    match parent_id {
        0 => Ok(None),
        id => u64::try_from(id)
            .map(|id| Some(CommentId::new(id)))
            .map_err(|_| anyhow!("Invalid parent id: {id}").into()),
    }
}

fn store_parent_id(parent_id: Option<CommentId>) -> Result<i64> {
    let Some(id) = parent_id else {
        return Ok(0);
    };
    i64::try_from(id.get()).map_err(|_| anyhow!("Parent id {id} is out of range").into())
}

fn store_id(id: CommentId) -> Result<i64> {
    i64::try_from(id.get()).map_err(|_| repo::Error::NotFound)
}

impl TryFrom<models::Comment> for Comment {
    type Error = repo::Error;

    fn try_from(from: models::Comment) -> Result<Self> {
        let models::Comment {
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
        let id = u64::try_from(id).map_err(|_| anyhow!("Invalid comment id: {id}"))?;
        Ok(Self {
            id: CommentId::new(id),
            created_at: TimestampMs::from_inner(created_at),
            updated_at: TimestampMs::from_inner(updated_at),
            visibility: deleted_at.map(TimestampMs::from_inner).into(),
            parent_id: load_parent_id(parent_id)?,
            username,
            email,
            content,
            upvotes: load_counter("upvotes", upvotes)?,
            downvotes: load_counter("downvotes", downvotes)?,
            status,
            url,
        })
    }
}
