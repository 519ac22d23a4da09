//! # Operation dispatch
//!
//! One method per GraphQL operation. Every method takes the request's
//! [`Identity`] explicitly, checks the operation's [`Policy`], then performs
//! its upstream call(s) and reshapes the response.
//!
//! The dispatchers know nothing about async-graphql's execution context,
//! which keeps them testable with plain values and stub upstreams.

pub mod auth;
pub mod logs;

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::warn;

use crate::auth::{Identity, Policy, authorize};
use crate::error::{GatewayError, GatewayResult};
use crate::upstream::UpstreamError;

pub use auth::AuthDispatcher;
pub use logs::LogsDispatcher;

/// Runs the guard for `policy`, logging and converting a denial.
pub(crate) fn guard(
    identity: &Identity,
    policy: &Policy,
    owner_id: Option<&str>,
) -> GatewayResult<()> {
    authorize(identity, policy, owner_id).into_result().map_err(|denial| {
        warn!(
            operation = policy.operation,
            user_id = identity.user_id().unwrap_or("-"),
            code = denial.code(),
            "request denied"
        );
        GatewayError::from(denial)
    })
}

/// Deserializes an upstream payload into a GraphQL type.
pub(crate) fn decode<T: DeserializeOwned>(value: Value) -> GatewayResult<T> {
    serde_json::from_value(value).map_err(|e| GatewayError::from(UpstreamError::from(e)))
}

/// Deserializes the `key` member of an upstream envelope (`data`, `message`).
///
/// A missing member is treated as `null`.
pub(crate) fn unwrap_envelope<T: DeserializeOwned>(
    mut value: Value,
    key: &str,
) -> GatewayResult<T> {
    let inner = value.get_mut(key).map(Value::take).unwrap_or(Value::Null);
    decode(inner)
}

/// Logs an upstream failure and converts it.
pub(crate) fn upstream_failed(operation: &'static str) -> impl Fn(UpstreamError) -> GatewayError {
    move |err| {
        tracing::error!(operation, error = %err, "upstream call failed");
        GatewayError::from(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    use crate::auth::{Role, policy};

    #[test]
    fn unwrap_envelope_extracts_member() {
        let names: Vec<String> =
            unwrap_envelope(json!({ "data": ["a", "b"] }), "data").unwrap();

        assert_eq!(names, vec!["a", "b"]);
    }

    #[test]
    fn unwrap_envelope_treats_missing_member_as_null() {
        let names: Option<Vec<String>> = unwrap_envelope(json!({}), "data").unwrap();

        assert_eq!(names, None);
    }

    #[test]
    fn decode_failure_is_an_upstream_error() {
        let err = decode::<Vec<String>>(json!({ "not": "a list" })).unwrap_err();

        assert_eq!(err.code(), 500);
        assert!(matches!(err, GatewayError::Upstream(UpstreamError::Decode(_))));
    }

    #[test]
    fn guard_converts_denials() {
        let err = guard(&Identity::anonymous(), &policy::GET_ALL_LOGS, None).unwrap_err();
        assert_eq!(err.code(), 407);

        let user = Identity::authenticated("2", Some(Role::User));
        let err = guard(&user, &policy::SIGN_UP_USER, None).unwrap_err();
        assert_eq!(err.code(), 403);

        assert!(guard(&user, &policy::GET_ALL_LOGS, None).is_ok());
    }
}
