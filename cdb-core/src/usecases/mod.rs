mod create_comment;
mod delete_comment;
mod error;
mod get_comment;
mod list_comments;
mod update_comment;
mod validate_comment;


pub use self::{
    create_comment::*, delete_comment::*, error::Error, get_comment::*, list_comments::*,
    update_comment::*, validate_comment::*,
};

mod prelude {
    pub use super::{error::Error, validate_comment::*};
    pub type Result<T> = std::result::Result<T, Error>;
    pub use crate::{entities::*, repositories::*, RepoError};
}
