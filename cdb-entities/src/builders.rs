pub trait Builder {
    type Build;
    fn build() -> Self::Build;
}

pub use self::comment_builder::*;

pub mod comment_builder {

    use super::*;
    use crate::{comment::*, id::*, time::*};

    #[derive(Debug)]
    pub struct NewCommentBuild {
        comment: NewComment,
    }

    impl NewCommentBuild {
        pub fn parent_id(mut self, id: u64) -> Self {
            self.comment.parent_id = Some(CommentId::new(id));
            self
        }
        pub fn username(mut self, username: &str) -> Self {
            self.comment.username = username.into();
            self
        }
        pub fn email(mut self, email: &str) -> Self {
            self.comment.email = email.into();
            self
        }
        pub fn content(mut self, content: &str) -> Self {
            self.comment.content = content.into();
            self
        }
        pub fn votes(mut self, upvotes: u32, downvotes: u32) -> Self {
            self.comment.upvotes = upvotes;
            self.comment.downvotes = downvotes;
            self
        }
        pub fn status(mut self, status: &str) -> Self {
            self.comment.status = status.into();
            self
        }
        pub fn url(mut self, url: &str) -> Self {
            self.comment.url = url.into();
            self
        }
        pub fn finish(self) -> NewComment {
            self.comment
        }
    }

    impl Builder for NewComment {
        type Build = NewCommentBuild;
        fn build() -> NewCommentBuild {
            NewCommentBuild {
                comment: NewComment::default(),
            }
        }
    }

    #[derive(Debug)]
    pub struct CommentBuild {
        comment: Comment,
    }

    impl CommentBuild {
        pub fn id(mut self, id: u64) -> Self {
            self.comment.id = CommentId::new(id);
            self
        }
        pub fn created_at(mut self, at: TimestampMs) -> Self {
            self.comment.created_at = at;
            self.comment.updated_at = at;
            self
        }
        pub fn deleted_at(mut self, at: TimestampMs) -> Self {
            self.comment.visibility = Visibility::Deleted { at };
            self
        }
        pub fn content(mut self, content: &str) -> Self {
            self.comment.content = content.into();
            self
        }
        pub fn url(mut self, url: &str) -> Self {
            self.comment.url = url.into();
            self
        }
        pub fn finish(self) -> Comment {
            self.comment
        }
    }

    impl Builder for Comment {
        type Build = CommentBuild;
        fn build() -> CommentBuild {
            let now = TimestampMs::now();
            CommentBuild {
                comment: Comment {
                    id: CommentId::new(1),
                    created_at: now,
                    updated_at: now,
                    visibility: Visibility::Active,
                    parent_id: None,
                    username: String::new(),
                    email: String::new(),
                    content: String::new(),
                    upvotes: 0,
                    downvotes: 0,
                    status: String::new(),
                    url: String::new(),
                },
            }
        }
    }
}
