//! Request and response types for the board backend API.
//!
//! All structs use camelCase serialization to match the API's JSON format.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use super::error::ApiError;

/// Result codes meaning the caller is not authenticated.
pub const SESSION_EXPIRED_CODES: [&str; 2] = ["F-A", "F-B"];

/// Common wrapper around every backend response.
///
/// `body` is optional because failure and session-expiry responses may
/// omit it; those still reach the caller as values.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Envelope<T> {
    pub result_code: String,
    #[serde(default)]
    pub msg: String,
    #[serde(default)]
    pub fail: bool,
    #[serde(default)]
    pub success: bool,
    pub body: Option<T>,
}

impl<T> Envelope<T> {
    pub fn is_success(&self) -> bool {
        self.success && !self.fail
    }

    pub fn is_session_expired(&self) -> bool {
        is_session_expired_code(&self.result_code)
    }

    /// Unwrap the body of a successful envelope.
    ///
    /// A non-success envelope, or a successful one without a body, becomes
    /// [`ApiError::Rejected`] carrying the server's code and message.
    pub fn into_body(self) -> Result<T, ApiError> {
        match self.body {
            Some(body) if self.is_success() => Ok(body),
            _ => Err(ApiError::Rejected {
                result_code: self.result_code,
                msg: self.msg,
            }),
        }
    }
}

impl<T: DeserializeOwned> Envelope<T> {
    /// Parse an envelope from a response body.
    ///
    /// The body is decoded strictly only for successful envelopes. On a
    /// failure or session-expiry envelope a body that does not fit `T`
    /// becomes `None`, so the result code still reaches the caller.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, serde_json::Error> {
        let raw: Envelope<serde_json::Value> = serde_json::from_slice(bytes)?;
        let success = raw.is_success();
        let body = match raw.body {
            Some(value) if success => Some(serde_json::from_value(value)?),
            Some(value) => serde_json::from_value(value).ok(),
            None => None,
        };
        Ok(Envelope {
            result_code: raw.result_code,
            msg: raw.msg,
            fail: raw.fail,
            success: raw.success,
            body,
        })
    }
}

pub fn is_session_expired_code(code: &str) -> bool {
    SESSION_EXPIRED_CODES.contains(&code)
}

/// Article row as returned by `/article/list` and `/article/detail`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub id: u64,
    #[serde(default)]
    pub reg_date: String,
    #[serde(default)]
    pub update_date: String,
    #[serde(default)]
    pub board_id: u64,
    #[serde(default)]
    pub member_id: u64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub body: String,
    #[serde(default, rename = "extra__writerName")]
    pub writer_name: Option<String>,
    #[serde(default, rename = "extra__boardName")]
    pub board_name: Option<String>,
}

/// Body of `/article/list`.
#[derive(Debug, Clone, Deserialize)]
pub struct ArticleListBody {
    pub articles: Vec<Article>,
}

/// Body of `/article/detail`.
#[derive(Debug, Clone, Deserialize)]
pub struct ArticleDetailBody {
    pub article: Article,
}

/// Body of `/article/doAdd` and `/member/doJoin`: the new row's id.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatedBody {
    pub id: u64,
}

/// Body of `/member/authKey`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthKeyBody {
    pub auth_key: String,
    pub id: u64,
    pub name: String,
    pub nickname: String,
}

/// Fields posted to `/member/doJoin`.
#[derive(Debug, Clone)]
pub struct JoinRequest {
    pub login_id: String,
    pub login_pw: String,
    pub name: String,
    pub nickname: String,
    pub cellphone_no: String,
    pub email: String,
}

impl JoinRequest {
    /// Form fields in wire order.
    pub fn fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("loginId", self.login_id.clone()),
            ("loginPw", self.login_pw.clone()),
            ("name", self.name.clone()),
            ("nickname", self.nickname.clone()),
            ("cellphoneNo", self.cellphone_no.clone()),
            ("email", self.email.clone()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_without_body() {
        let json = r#"{"resultCode":"F-A","msg":"login required","fail":true,"success":false}"#;
        let env: Envelope<ArticleListBody> = serde_json::from_str(json).unwrap();
        assert!(env.is_session_expired());
        assert!(!env.is_success());
        assert!(env.body.is_none());
    }

    #[test]
    fn test_envelope_null_body() {
        let json = r#"{"resultCode":"F-B","msg":"","fail":true,"success":false,"body":null}"#;
        let env: Envelope<CreatedBody> = serde_json::from_str(json).unwrap();
        assert!(env.is_session_expired());
        assert!(env.body.is_none());
    }

    #[test]
    fn test_from_slice_tolerates_mismatched_failure_body() {
        let json = br#"{"resultCode":"F-A","msg":"login","fail":true,"success":false,"body":{}}"#;
        let env = Envelope::<ArticleListBody>::from_slice(json).unwrap();
        assert!(env.is_session_expired());
        assert!(env.body.is_none());
    }

    #[test]
    fn test_from_slice_keeps_matching_failure_body() {
        let json = br#"{"resultCode":"F-1","msg":"","fail":true,"success":false,"body":{"id":3}}"#;
        let env = Envelope::<CreatedBody>::from_slice(json).unwrap();
        assert_eq!(env.body.map(|b| b.id), Some(3));
    }

    #[test]
    fn test_from_slice_is_strict_on_success() {
        let json = br#"{"resultCode":"S-1","msg":"","fail":false,"success":true,"body":{}}"#;
        assert!(Envelope::<ArticleListBody>::from_slice(json).is_err());
    }

    #[test]
    fn test_into_body_success() {
        let json = r#"{"resultCode":"S-1","msg":"ok","fail":false,"success":true,"body":{"id":7}}"#;
        let env: Envelope<CreatedBody> = serde_json::from_str(json).unwrap();
        assert_eq!(env.into_body().unwrap().id, 7);
    }

    #[test]
    fn test_into_body_failure_is_rejected() {
        let json = r#"{"resultCode":"F-1","msg":"bad","fail":true,"success":false,"body":{"id":0}}"#;
        let env: Envelope<CreatedBody> = serde_json::from_str(json).unwrap();
        match env.into_body() {
            Err(ApiError::Rejected { result_code, msg }) => {
                assert_eq!(result_code, "F-1");
                assert_eq!(msg, "bad");
            }
            other => panic!("expected Rejected, got {:?}", other),
        }
    }

    #[test]
    fn test_article_extra_columns() {
        let json = r#"{
            "id": 3,
            "regDate": "2021-01-01 00:00:00",
            "updateDate": "2021-01-02 00:00:00",
            "boardId": 1,
            "memberId": 2,
            "title": "hello",
            "body": "world",
            "extra__writerName": "kim"
        }"#;
        let article: Article = serde_json::from_str(json).unwrap();
        assert_eq!(article.id, 3);
        assert_eq!(article.board_id, 1);
        assert_eq!(article.writer_name.as_deref(), Some("kim"));
        assert_eq!(article.board_name, None);
    }

    #[test]
    fn test_auth_key_body() {
        let json = r#"{"authKey":"abc","id":4,"name":"Lee","nickname":"lee"}"#;
        let body: AuthKeyBody = serde_json::from_str(json).unwrap();
        assert_eq!(body.auth_key, "abc");
        assert_eq!(body.id, 4);
    }

    #[test]
    fn test_session_expired_codes() {
        assert!(is_session_expired_code("F-A"));
        assert!(is_session_expired_code("F-B"));
        assert!(!is_session_expired_code("F-C"));
        assert!(!is_session_expired_code("S-1"));
    }
}
