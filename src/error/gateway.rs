use async_graphql::{ErrorExtensions, ServerError};
use thiserror::Error;

use crate::auth::policy::Denial;
use crate::error::entity::NotFoundError;
use crate::upstream::UpstreamError;

/// Every failure a GraphQL client can observe.
///
/// Each variant maps to a numeric code, exposed to clients as the `code`
/// extension of the GraphQL error:
///
/// | variant | code |
/// |---|---|
/// | `Unauthenticated` | 407 |
/// | `Unauthorized` | 403 |
/// | `Authentication` | 401 (token rejected) or 500 (fault while verifying) |
/// | `Conflict` | 412 |
/// | `NotFound` | 404 |
/// | `Upstream` | 500 |
#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("not authenticated")]
    Unauthenticated,

    #[error("not authorized")]
    Unauthorized,

    #[error("token error: {message}")]
    Authentication { code: u16, message: String },

    #[error("{0}")]
    Conflict(String),

    #[error(transparent)]
    NotFound(#[from] NotFoundError),

    #[error(transparent)]
    Upstream(#[from] UpstreamError),
}

impl GatewayError {
    pub fn code(&self) -> u16 {
        match self {
            GatewayError::Unauthenticated => 407,
            GatewayError::Unauthorized => 403,
            GatewayError::Authentication { code, .. } => *code,
            GatewayError::Conflict(_) => 412,
            GatewayError::NotFound(_) => 404,
            GatewayError::Upstream(_) => 500,
        }
    }

    pub fn token_rejected(message: impl Into<String>) -> Self {
        GatewayError::Authentication {
            code: 401,
            message: message.into(),
        }
    }

    pub fn token_fault(message: impl Into<String>) -> Self {
        GatewayError::Authentication {
            code: 500,
            message: message.into(),
        }
    }

    /// Converts into a request-level GraphQL error (no path, no location).
    pub fn to_server_error(&self) -> ServerError {
        let mut err = ServerError::new(self.to_string(), None);
        err.extensions = self.extend().extensions;
        err
    }
}

impl From<Denial> for GatewayError {
    fn from(denial: Denial) -> Self {
        match denial {
            Denial::Unauthenticated => GatewayError::Unauthenticated,
            Denial::Unauthorized => GatewayError::Unauthorized,
        }
    }
}

impl ErrorExtensions for GatewayError {
    fn extend(&self) -> async_graphql::Error {
        async_graphql::Error::new(self.to_string())
            .extend_with(|_, e| e.set("code", i32::from(self.code())))
    }
}

pub type GatewayResult<T> = Result<T, GatewayError>;

#[cfg(test)]
mod tests {
    use super::*;
    use async_graphql::Value;

    #[test]
    fn codes_follow_taxonomy() {
        assert_eq!(GatewayError::Unauthenticated.code(), 407);
        assert_eq!(GatewayError::Unauthorized.code(), 403);
        assert_eq!(GatewayError::token_rejected("x").code(), 401);
        assert_eq!(GatewayError::token_fault("x").code(), 500);
        assert_eq!(GatewayError::Conflict("x".into()).code(), 412);
        assert_eq!(
            GatewayError::from(NotFoundError::new("User", "1")).code(),
            404
        );
        assert_eq!(
            GatewayError::from(UpstreamError::Status {
                status: 502,
                body: String::new()
            })
            .code(),
            500
        );
    }

    #[test]
    fn denials_convert_to_matching_variants() {
        assert!(matches!(
            GatewayError::from(Denial::Unauthenticated),
            GatewayError::Unauthenticated
        ));
        assert!(matches!(
            GatewayError::from(Denial::Unauthorized),
            GatewayError::Unauthorized
        ));
    }

    #[test]
    fn graphql_error_carries_code_extension() {
        let err = GatewayError::Conflict("reason in use".into()).extend();

        assert_eq!(err.message, "reason in use");
        let code = err.extensions.as_ref().and_then(|ext| ext.get("code"));
        assert_eq!(code, Some(&Value::from(412)));
    }

    #[test]
    fn server_error_carries_message_and_code() {
        let err = GatewayError::token_rejected("session inactive").to_server_error();

        assert_eq!(err.message, "token error: session inactive");
        assert!(err.locations.is_empty());
        let code = err.extensions.as_ref().and_then(|ext| ext.get("code"));
        assert_eq!(code, Some(&Value::from(401)));
    }
}
