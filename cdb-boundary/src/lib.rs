//! Serializable, anemic data structures of the commentdb JSON API.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

#[cfg(feature = "entity-conversions")]
mod conv;

/// A comment as it is sent and received over the wire.
///
/// All server-assigned fields are `null` in requests and present in
/// responses. Missing fields default to their zero value.
#[rustfmt::skip]
#[derive(Serialize, Deserialize, Default)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
#[serde(rename_all = "camelCase", default)]
pub struct Comment {
    pub id         : Option<u64>,
    #[serde(with = "time::serde::rfc3339::option")]
    pub created_at : Option<OffsetDateTime>,
    #[serde(with = "time::serde::rfc3339::option")]
    pub updated_at : Option<OffsetDateTime>,
    #[serde(with = "time::serde::rfc3339::option")]
    pub deleted_at : Option<OffsetDateTime>,
    pub parent_id  : Option<u64>,
    pub username   : String,
    pub email      : String,
    pub content    : String,
    pub upvotes    : u32,
    pub downvotes  : u32,
    pub status     : String,
    pub url        : String,
}

/// The response envelope for errors and confirmations.
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
#[cfg_attr(feature = "extra-derive", derive(thiserror::Error))]
#[cfg_attr(feature = "extra-derive", error("{code} {message}: {description}"))]
pub struct Error {
    /// HTTP status code
    pub code: u16,
    /// Canonical reason phrase of the status code
    pub message: String,
    pub description: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    #[test]
    fn deserialize_partial_comment() {
        let c: Comment = serde_json::from_str(r#"{"content":"hi","unknown":1}"#).unwrap();
        assert_eq!("hi", c.content);
        assert_eq!(None, c.id);
        assert_eq!(None, c.created_at);
        assert_eq!(None, c.parent_id);
        assert_eq!(0, c.upvotes);
        assert!(c.url.is_empty());
    }

    #[test]
    fn deserialize_null_server_fields() {
        let c: Comment = serde_json::from_str(
            r#"{"id":null,"createdAt":null,"updatedAt":null,"deletedAt":null,"content":"x"}"#,
        )
        .unwrap();
        assert_eq!(None, c.id);
        assert_eq!(None, c.deleted_at);
    }

    #[test]
    fn deserialize_timestamps() {
        let c: Comment =
            serde_json::from_str(r#"{"createdAt":"2020-02-29T12:00:00.5Z"}"#).unwrap();
        assert_eq!(Some(datetime!(2020-02-29 12:00:00.5 UTC)), c.created_at);
        assert!(serde_json::from_str::<Comment>(r#"{"createdAt":"yesterday"}"#).is_err());
    }

    #[test]
    fn reject_negative_votes() {
        assert!(serde_json::from_str::<Comment>(r#"{"upvotes":-1}"#).is_err());
    }

    #[test]
    fn serialize_all_keys() {
        let c = Comment {
            id: Some(1),
            created_at: Some(datetime!(1970-01-01 00:00:00 UTC)),
            updated_at: Some(datetime!(1970-01-01 00:00:00 UTC)),
            content: "hi".into(),
            ..Default::default()
        };
        let json = serde_json::to_value(&c).unwrap();
        assert_eq!(
            serde_json::json!({
                "id": 1,
                "createdAt": "1970-01-01T00:00:00Z",
                "updatedAt": "1970-01-01T00:00:00Z",
                "deletedAt": null,
                "parentId": null,
                "username": "",
                "email": "",
                "content": "hi",
                "upvotes": 0,
                "downvotes": 0,
                "status": "",
                "url": ""
            }),
            json
        );
    }

    #[test]
    fn serialize_error_envelope() {
        let err = Error {
            code: 404,
            message: "Not Found".into(),
            description: "Could not find comment with id 1.".into(),
        };
        assert_eq!(
            r#"{"code":404,"message":"Not Found","description":"Could not find comment with id 1."}"#,
            serde_json::to_string(&err).unwrap()
        );
    }
}
