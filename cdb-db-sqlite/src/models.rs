#![allow(clippy::extra_unused_lifetimes)]

// NOTE:
// All timestamps with the `_at` postfix are stored
// as unix timestamp in **milli**seconds.

use super::schema::*;

#[derive(Insertable)]
#[diesel(table_name = comments)]
pub struct NewComment<'a> {
    pub created_at: i64,
    pub updated_at: i64,
    pub parent_id: i64,
    pub username: &'a str,
    pub email: &'a str,
    pub content: &'a str,
    pub upvotes: i64,
    pub downvotes: i64,
    pub status: &'a str,
    pub url: &'a str,
}

#[derive(Queryable)]
pub struct Comment {
    pub id: i64,
    pub created_at: i64,
    pub updated_at: i64,
    pub deleted_at: Option<i64>,
    pub parent_id: i64,
    pub username: String,
    pub email: String,
    pub content: String,
    pub upvotes: i64,
    pub downvotes: i64,
    pub status: String,
    pub url: String,
}

/// Only the fields that are `Some` are written.
#[derive(AsChangeset)]
#[diesel(table_name = comments)]
pub struct CommentChangeset<'a> {
    pub parent_id: Option<i64>,
    pub username: Option<&'a str>,
    pub email: Option<&'a str>,
    pub content: Option<&'a str>,
    pub upvotes: Option<i64>,
    pub downvotes: Option<i64>,
    pub status: Option<&'a str>,
    pub url: Option<&'a str>,
}
