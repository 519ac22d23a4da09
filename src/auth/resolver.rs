use std::sync::Arc;

use tracing::{debug, warn};

use crate::auth::identity::{Identity, Role};
use crate::error::{GatewayError, GatewayResult};
use crate::upstream::payload::VerifyTokenPayload;
use crate::upstream::wire::id_field;
use crate::upstream::{AuthApi, UpstreamError};

/// Turns a bearer token into an [`Identity`].
///
/// # Flow
///
/// 1. Empty token: anonymous identity, no upstream call.
/// 2. `POST verifyToken/` with the raw token; read `UserId`.
/// 3. `GET userPk/{UserId}/`; read `role`.
///
/// A non-success status at step 2 or 3 is a rejected token (code 401).
/// Anything else going wrong (transport, malformed JSON, missing `UserId`)
/// is a fault (code 500). Upstream errors never escape unwrapped.
/// Status rejections keep their 401 and are never re-wrapped as a 500
/// fault, so clients can tell a bad token from a broken auth service.
///
/// The two calls are sequential since the second needs the first's result.
/// Nothing is cached: every request verifies its token again.
#[derive(Clone)]
pub struct IdentityResolver {
    auth: Arc<dyn AuthApi>,
}

impl IdentityResolver {
    pub fn new(auth: Arc<dyn AuthApi>) -> Self {
        Self { auth }
    }

    pub async fn resolve(&self, token: &str) -> GatewayResult<Identity> {
        let token = token.trim();
        if token.is_empty() {
            debug!("no token supplied, continuing as anonymous");
            return Ok(Identity::anonymous());
        }

        let verified = self
            .auth
            .verify_token(&VerifyTokenPayload {
                token: token.to_string(),
            })
            .await
            .map_err(|e| classify(e, "session inactive"))?;

        let user_id = id_field(&verified, "UserId").ok_or_else(|| {
            warn!("token verification response carried no UserId");
            GatewayError::token_fault("verification response has no UserId")
        })?;

        let user = self
            .auth
            .get_user(&user_id)
            .await
            .map_err(|e| classify(e, "could not load permissions"))?;

        let role = id_field(&user, "role").map(|code| Role::from_code(&code));
        debug!(user_id = %user_id, role = ?role, "identity resolved");

        Ok(Identity::authenticated(user_id, role))
    }
}

fn classify(err: UpstreamError, context: &str) -> GatewayError {
    if err.is_status() {
        warn!(error = %err, "{context}");
        GatewayError::token_rejected(format!("{context}: {err}"))
    } else {
        warn!(error = %err, "token verification failed");
        GatewayError::token_fault(format!("{context}: {err}"))
    }
}
