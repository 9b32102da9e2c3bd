use std::{fmt::Display, result};

use cdb_core::{entities::*, usecases};
use cdb_db_sqlite::Connections;
use rocket::{
    catch, catchers, delete, get,
    http::{ContentType, Status},
    post, put,
    response::{self, Responder},
    routes,
    serde::json::{Error as JsonError, Json},
    Catcher, Request, Route, State,
};
use serde::Serialize;

use crate::adapters::json::{self, from_json};

mod comments;
mod error;


pub use self::error::Error as ApiError;

type Result<T> = result::Result<JsonResponse<T>, ApiError>;
type JsonResult<'a, T> = result::Result<Json<T>, JsonError<'a>>;

pub fn routes() -> Vec<Route> {
    routes![
        comments::post_comment,
        comments::get_comments_by_url,
        comments::get_comment,
        comments::put_comment,
        comments::delete_comment,
    ]
}

pub fn catchers() -> Vec<Catcher> {
    catchers![default_catcher]
}

/// Requests that have not been handled by any route
/// are answered with the error envelope.
#[catch(default)]
fn default_catcher(status: Status, req: &Request) -> ApiError {
    let description = match status.code {
        404 => format!("Could not find {} {}.", req.method(), req.uri()),
        _ => format!("{}.", status.reason_lossy()),
    };
    ApiError::new(status, description)
}

fn json_content_type() -> ContentType {
    ContentType::new("application", "json").with_params(("charset", "utf-8"))
}

/// A JSON response body with an explicit UTF-8 charset.
pub struct JsonResponse<T>(pub T);

impl<'r, T: Serialize> Responder<'r, 'static> for JsonResponse<T> {
    fn respond_to(self, req: &'r Request<'_>) -> response::Result<'static> {
        match serde_json::to_string(&self.0) {
            Ok(body) => (json_content_type(), body).respond_to(req),
            Err(err) => {
                error!("Failed to serialize response: {err}");
                json_error_response(
                    req,
                    Status::InternalServerError,
                    "Could not serialize response.",
                )
            }
        }
    }
}

fn envelope(status: Status, description: impl Display) -> json::Error {
    json::Error {
        code: status.code,
        message: status.reason_lossy().to_owned(),
        description: description.to_string(),
    }
}

fn json_error_response<'r, D: Display>(
    req: &'r Request<'_>,
    status: Status,
    description: D,
) -> response::Result<'static> {
    let body = serde_json::to_string(&envelope(status, description)).map_err(|err| {
        error!("Failed to serialize error response: {err}");
        Status::InternalServerError
    })?;
    (status, (json_content_type(), body)).respond_to(req)
}
