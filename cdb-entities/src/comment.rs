use crate::{id::*, time::*};

/// Lifecycle tag of a stored comment.
///
/// Deleted comments stay in the table for auditing purposes,
/// but are invisible for all regular lookups.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Active,
    Deleted { at: TimestampMs },
}

impl Visibility {
    pub const fn is_active(&self) -> bool {
        matches!(self, Self::Active)
    }

    pub const fn deleted_at(&self) -> Option<TimestampMs> {
        match self {
            Self::Active => None,
            Self::Deleted { at } => Some(*at),
        }
    }
}

impl From<Option<TimestampMs>> for Visibility {
    fn from(deleted_at: Option<TimestampMs>) -> Self {
        deleted_at.map_or(Self::Active, |at| Self::Deleted { at })
    }
}

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub id         : CommentId,
    pub created_at : TimestampMs,
    pub updated_at : TimestampMs,
    pub visibility : Visibility,
    pub parent_id  : Option<CommentId>,
    pub username   : String,
    pub email      : String,
    pub content    : String,
    pub upvotes    : u32,
    pub downvotes  : u32,
    pub status     : String,
    pub url        : String,
}

impl Comment {
    pub const fn deleted_at(&self) -> Option<TimestampMs> {
        self.visibility.deleted_at()
    }

    /// Overwrite all fields that are present in the patch.
    ///
    /// Server-assigned fields are never touched.
    pub fn apply(&mut self, patch: CommentPatch) {
        let CommentPatch {
            parent_id,
            username,
            email,
            content,
            upvotes,
            downvotes,
            status,
            url,
        } = patch;
        if let Some(parent_id) = parent_id {
            self.parent_id = Some(parent_id);
        }
        if let Some(username) = username {
            self.username = username;
        }
        if let Some(email) = email {
            self.email = email;
        }
        if let Some(content) = content {
            self.content = content;
        }
        if let Some(upvotes) = upvotes {
            self.upvotes = upvotes;
        }
        if let Some(downvotes) = downvotes {
            self.downvotes = downvotes;
        }
        if let Some(status) = status {
            self.status = status;
        }
        if let Some(url) = url {
            self.url = url;
        }
    }
}

/// The client-controlled part of a comment.
#[rustfmt::skip]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewComment {
    pub parent_id : Option<CommentId>,
    pub username  : String,
    pub email     : String,
    pub content   : String,
    pub upvotes   : u32,
    pub downvotes : u32,
    pub status    : String,
    pub url       : String,
}

impl NewComment {
    /// All fields have their zero value.
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

/// A partial update of a comment.
///
/// `None` leaves the corresponding field unchanged.
#[rustfmt::skip]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommentPatch {
    pub parent_id : Option<CommentId>,
    pub username  : Option<String>,
    pub email     : Option<String>,
    pub content   : Option<String>,
    pub upvotes   : Option<u32>,
    pub downvotes : Option<u32>,
    pub status    : Option<String>,
    pub url       : Option<String>,
}

impl CommentPatch {
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

fn non_empty(s: String) -> Option<String> {
    (!s.is_empty()).then_some(s)
}

fn non_zero(n: u32) -> Option<u32> {
    (n != 0).then_some(n)
}

// Zero values are indistinguishable from absent values
// and therefore never overwrite stored values.
impl From<NewComment> for CommentPatch {
    fn from(from: NewComment) -> Self {
        let NewComment {
            parent_id,
            username,
            email,
            content,
            upvotes,
            downvotes,
            status,
            url,
        } = from;
        Self {
            parent_id,
            username: non_empty(username),
            email: non_empty(email),
            content: non_empty(content),
            upvotes: non_zero(upvotes),
            downvotes: non_zero(downvotes),
            status: non_empty(status),
            url: non_empty(url),
        }
    }
}
