//! # Allow-listed upstream request bodies
//!
//! Each struct here is the exact field set an upstream write accepts.
//! Client input is copied field by field into these types, so nothing the
//! client adds beyond the documented set can reach an upstream write.

use serde::Serialize;

/// Body for `POST user/` and `PUT user/{id}/`.
///
/// `enabled` is only serialized when present: sign-up and update omit it,
/// enable/disable sends it.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct UserPayload {
    pub date_of_birth: String,
    pub document: String,
    pub document_type: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    pub entity: String,
    pub full_name: String,
    pub password: String,
    #[serde(rename = "phoneNumber")]
    pub phone_number: String,
    pub position: String,
    pub role: String,
}

/// Body for `POST login/`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CredentialsPayload {
    pub email: String,
    pub password: String,
}

/// Body for `POST refresh/`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RefreshPayload {
    pub refresh: String,
}

/// Body for `POST verifyToken/`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct VerifyTokenPayload {
    pub token: String,
}

/// Body for `POST api/ms/reasons/` and `PUT api/ms/reasons/{id}`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ReasonPayload {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Reason reference embedded in a log write.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LogReasonPayload {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Body for `POST api/ms/logs/` and `PUT api/ms/logs/{id}`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LogPayload {
    pub reason: LogReasonPayload,
    pub user: String,
}
