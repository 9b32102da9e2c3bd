use super::*;

const DECODE_FAILURE: &str = "Could not decode comment in payload.";

fn parse_id(raw: &str) -> result::Result<CommentId, ApiError> {
    // Signs are not part of an id
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(bad_id(raw));
    }
    raw.parse::<u32>()
        .map(CommentId::from)
        .map_err(|_| bad_id(raw))
}

fn bad_id(raw: &str) -> ApiError {
    ApiError::bad_request(format!("Bad ID parameter {raw}."))
}

fn decode_payload(
    body: JsonResult<json::Comment>,
) -> result::Result<usecases::CommentPayload, ApiError> {
    let comment = body.map_err(|err| {
        debug!("Failed to decode comment: {err}");
        ApiError::bad_request(DECODE_FAILURE)
    })?;
    Ok(from_json::comment_payload(comment.into_inner()))
}

/// Decode and validate the body before any storage access.
fn valid_payload(
    body: JsonResult<json::Comment>,
) -> result::Result<usecases::CommentPayload, ApiError> {
    let payload = decode_payload(body)?;
    usecases::validate_comment(&payload).map_err(invalid_payload)?;
    Ok(payload)
}

fn invalid_payload(err: usecases::Error) -> ApiError {
    match err {
        usecases::Error::IllegalFields(fields) => {
            debug!("Rejected comment with fields {}", fields.join(", "));
            ApiError::bad_request("Comment contains illegal fields.")
        }
        usecases::Error::EmptyComment => ApiError::bad_request("Comment cannot be empty."),
        err => ApiError::internal(err, "Could not validate comment."),
    }
}

fn to_json(comment: Comment) -> result::Result<json::Comment, ApiError> {
    json::Comment::try_from(comment)
        .map_err(|err| ApiError::internal(err, "Could not serialize response."))
}

fn not_found(id: CommentId) -> ApiError {
    ApiError::not_found(format!("Could not find comment with id {id}."))
}

fn write_failure(err: usecases::Error, id: Option<CommentId>, storage_failure: &str) -> ApiError {
    if err.is_validation_error() {
        return invalid_payload(err);
    }
    match id {
        Some(id) if err.is_not_found() => not_found(id),
        _ => ApiError::internal(err, storage_failure),
    }
}

#[post("/?<url>", data = "<body>")]
pub fn post_comment(
    db: &State<Connections>,
    url: &str,
    body: JsonResult<json::Comment>,
) -> Result<json::Comment> {
    const STORAGE_FAILURE: &str = "Failed to create comment.";
    let payload = valid_payload(body)?;
    let db = db
        .exclusive()
        .map_err(|err| ApiError::internal(err, STORAGE_FAILURE))?;
    let comment = usecases::create_comment(&db, url, payload)
        .map_err(|err| write_failure(err, None, STORAGE_FAILURE))?;
    info!("Created comment {} for {}", comment.id, comment.url);
    Ok(JsonResponse(to_json(comment)?))
}

#[get("/?<url>")]
pub fn get_comments_by_url(db: &State<Connections>, url: &str) -> Result<Vec<json::Comment>> {
    let storage_failure = || format!("Could not get comments for url {url}.");
    let db = db
        .shared()
        .map_err(|err| ApiError::internal(err, storage_failure()))?;
    let comments = usecases::list_comments_by_url(&db, url)
        .map_err(|err| ApiError::internal(err, storage_failure()))?;
    let comments: Vec<json::Comment> = comments
        .into_iter()
        .map(to_json)
        .collect::<result::Result<_, _>>()?;
    Ok(JsonResponse(comments))
}

#[get("/<id>")]
pub fn get_comment(db: &State<Connections>, id: &str) -> Result<json::Comment> {
    let id = parse_id(id)?;
    let storage_failure = || format!("Failed to get comment with id {id}.");
    let db = db
        .shared()
        .map_err(|err| ApiError::internal(err, storage_failure()))?;
    let comment = usecases::get_comment(&db, id).map_err(|err| {
        if err.is_not_found() {
            not_found(id)
        } else {
            ApiError::internal(err, storage_failure())
        }
    })?;
    Ok(JsonResponse(to_json(comment)?))
}

#[put("/<id>", data = "<body>")]
pub fn put_comment(
    db: &State<Connections>,
    id: &str,
    body: JsonResult<json::Comment>,
) -> Result<json::Comment> {
    const STORAGE_FAILURE: &str = "Failed to update comment.";
    let id = parse_id(id)?;
    let payload = valid_payload(body)?;
    let db = db
        .exclusive()
        .map_err(|err| ApiError::internal(err, STORAGE_FAILURE))?;
    let comment = usecases::update_comment(&db, id, payload)
        .map_err(|err| write_failure(err, Some(id), STORAGE_FAILURE))?;
    info!("Updated comment {id}");
    Ok(JsonResponse(to_json(comment)?))
}

#[delete("/<id>")]
pub fn delete_comment(db: &State<Connections>, id: &str) -> Result<json::Error> {
    const STORAGE_FAILURE: &str = "Failed to delete comment.";
    let id = parse_id(id)?;
    let db = db
        .exclusive()
        .map_err(|err| ApiError::internal(err, STORAGE_FAILURE))?;
    usecases::delete_comment(&db, id).map_err(|err| write_failure(err, Some(id), STORAGE_FAILURE))?;
    info!("Deleted comment {id}");
    Ok(JsonResponse(envelope(
        Status::Ok,
        "Comment successfully deleted.",
    )))
}
