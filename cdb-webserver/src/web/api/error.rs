use std::fmt::Display;

use rocket::{
    http::Status,
    response::{self, Responder},
    Request,
};
use thiserror::Error;

use super::json_error_response;

/// A failed request.
///
/// Only the status and the description are revealed to the client.
#[derive(Debug, Error)]
#[error("{status}: {description}")]
pub struct Error {
    status: Status,
    description: String,
}

impl Error {
    pub fn new(status: Status, description: impl Into<String>) -> Self {
        Self {
            status,
            description: description.into(),
        }
    }

    pub fn bad_request(description: impl Into<String>) -> Self {
        Self::new(Status::BadRequest, description)
    }

    pub fn not_found(description: impl Into<String>) -> Self {
        Self::new(Status::NotFound, description)
    }

    /// Log the cause and hide it from the client.
    pub fn internal(cause: impl Display, description: impl Into<String>) -> Self {
        let description = description.into();
        error!("{description} {cause}");
        Self::new(Status::InternalServerError, description)
    }
}

impl<'r> Responder<'r, 'static> for Error {
    fn respond_to(self, req: &'r Request<'_>) -> response::Result<'static> {
        json_error_response(req, self.status, &self.description)
    }
}
