use diesel::{dsl::sql, sql_types::BigInt};

use super::*;

impl CommentRepository for DbReadWrite<'_> {
    fn create_comment(&self, comment: NewComment, created_at: TimestampMs) -> Result<Comment> {
        create_comment(&mut self.conn.borrow_mut(), comment, created_at)
    }
    fn load_comment(&self, id: CommentId) -> Result<Comment> {
        load_comment(&mut self.conn.borrow_mut(), id)
    }
    fn load_comments_by_url(&self, url: &str) -> Result<Vec<Comment>> {
        load_comments_by_url(&mut self.conn.borrow_mut(), url)
    }
    fn update_comment(
        &self,
        id: CommentId,
        patch: CommentPatch,
        updated_at: TimestampMs,
    ) -> Result<Comment> {
        update_comment(&mut self.conn.borrow_mut(), id, patch, updated_at)
    }
    fn delete_comment(&self, id: CommentId, deleted_at: TimestampMs) -> Result<Comment> {
        delete_comment(&mut self.conn.borrow_mut(), id, deleted_at)
    }
}

impl CommentRepository for DbReadOnly<'_> {
    fn create_comment(&self, _comment: NewComment, _created_at: TimestampMs) -> Result<Comment> {
        unreachable!();
    }
    fn load_comment(&self, id: CommentId) -> Result<Comment> {
        load_comment(&mut self.conn.borrow_mut(), id)
    }
    fn load_comments_by_url(&self, url: &str) -> Result<Vec<Comment>> {
        load_comments_by_url(&mut self.conn.borrow_mut(), url)
    }
    fn update_comment(
        &self,
        _id: CommentId,
        _patch: CommentPatch,
        _updated_at: TimestampMs,
    ) -> Result<Comment> {
        unreachable!();
    }
    fn delete_comment(&self, _id: CommentId, _deleted_at: TimestampMs) -> Result<Comment> {
        unreachable!();
    }
}

fn create_comment(
    conn: &mut SqliteConnection,
    comment: NewComment,
    created_at: TimestampMs,
) -> Result<Comment> {
    let NewComment {
        parent_id,
        username,
        email,
        content,
        upvotes,
        downvotes,
        status,
        url,
    } = &comment;
    let new_comment = models::NewComment {
        created_at: created_at.as_millis(),
        updated_at: created_at.as_millis(),
        parent_id: store_parent_id(*parent_id)?,
        username,
        email,
        content,
        upvotes: (*upvotes).into(),
        downvotes: (*downvotes).into(),
        status,
        url,
    };
    let _count = diesel::insert_into(schema::comments::table)
        .values(&new_comment)
        .execute(conn)
        .map_err(from_diesel_err)?;
    debug_assert_eq!(1, _count);
    let id = last_insert_id(conn)?;
    load_comment_including_deleted(conn, id)
}

fn load_comment_including_deleted(conn: &mut SqliteConnection, id: i64) -> Result<Comment> {
    use schema::comments::dsl;
    schema::comments::table
        .filter(dsl::id.eq(id))
        .first::<models::Comment>(conn)
        .map_err(from_diesel_err)?
        .try_into()
}

fn load_comment(conn: &mut SqliteConnection, id: CommentId) -> Result<Comment> {
    use schema::comments::dsl;
    schema::comments::table
        .filter(dsl::id.eq(store_id(id)?))
        .filter(dsl::deleted_at.is_null())
        .first::<models::Comment>(conn)
        .map_err(from_diesel_err)?
        .try_into()
}

fn load_comments_by_url(conn: &mut SqliteConnection, url: &str) -> Result<Vec<Comment>> {
    use schema::comments::dsl;
    schema::comments::table
        .filter(dsl::url.eq(url))
        .filter(dsl::deleted_at.is_null())
        .order_by(dsl::id)
        .load::<models::Comment>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(TryInto::try_into)
        .collect()
}

fn update_comment(
    conn: &mut SqliteConnection,
    id: CommentId,
    patch: CommentPatch,
    updated_at: TimestampMs,
) -> Result<Comment> {
    use schema::comments::dsl;
    let id = store_id(id)?;
    let CommentPatch {
        parent_id,
        username,
        email,
        content,
        upvotes,
        downvotes,
        status,
        url,
    } = &patch;
    let changeset = models::CommentChangeset {
        parent_id: parent_id.map(|id| store_parent_id(Some(id))).transpose()?,
        username: username.as_deref(),
        email: email.as_deref(),
        content: content.as_deref(),
        upvotes: upvotes.map(Into::into),
        downvotes: downvotes.map(Into::into),
        status: status.as_deref(),
        url: url.as_deref(),
    };
    // The new timestamp must be strictly later than the previous one
    let advanced_updated_at = sql::<BigInt>("MAX(")
        .bind::<BigInt, _>(updated_at.as_millis())
        .sql(", updated_at + 1)");
    let count = diesel::update(
        schema::comments::table
            .filter(dsl::id.eq(id))
            .filter(dsl::deleted_at.is_null()),
    )
    .set((changeset, dsl::updated_at.eq(advanced_updated_at)))
    .execute(conn)
    .map_err(from_diesel_err)?;
    debug_assert!(count <= 1);
    if count == 0 {
        return Err(repo::Error::NotFound);
    }
    load_comment_including_deleted(conn, id)
}

fn delete_comment(
    conn: &mut SqliteConnection,
    id: CommentId,
    deleted_at: TimestampMs,
) -> Result<Comment> {
    use schema::comments::dsl;
    let id = store_id(id)?;
    let count = diesel::update(
        schema::comments::table
            .filter(dsl::id.eq(id))
            .filter(dsl::deleted_at.is_null()),
    )
    .set(dsl::deleted_at.eq(Some(deleted_at.as_millis())))
    .execute(conn)
    .map_err(from_diesel_err)?;
    debug_assert!(count <= 1);
    if count == 0 {
        return Err(repo::Error::NotFound);
    }
    load_comment_including_deleted(conn, id)
}
