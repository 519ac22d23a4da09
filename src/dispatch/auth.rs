use std::sync::Arc;

use tracing::info;

use crate::auth::{Identity, policy};
use crate::error::GatewayResult;
use crate::graphql::types::{
    Access, CredentialsInput, DisableEnableUserInput, RegisterUserInput, SignUpInput, Token,
    UpdateInput, User,
};
use crate::upstream::AuthApi;
use crate::upstream::payload::{CredentialsPayload, RefreshPayload, UserPayload};

use super::{decode, guard, upstream_failed};

/// Password assigned to self-registered users.
pub const REGISTERED_USER_PASSWORD: &str = "yosoysena";
/// Role code assigned to self-registered users.
pub const REGISTERED_USER_ROLE: &str = "3";

/// Auth domain operations.
#[derive(Clone)]
pub struct AuthDispatcher {
    auth: Arc<dyn AuthApi>,
}

impl AuthDispatcher {
    pub fn new(auth: Arc<dyn AuthApi>) -> Self {
        Self { auth }
    }

    pub async fn user_detail_by_id(
        &self,
        identity: &Identity,
        user_id: &str,
    ) -> GatewayResult<User> {
        guard(identity, &policy::USER_DETAIL_BY_ID, Some(user_id))?;

        let user = self
            .auth
            .get_user(user_id)
            .await
            .map_err(upstream_failed("userDetailById"))?;
        decode(user)
    }

    pub async fn sign_up_user(
        &self,
        identity: &Identity,
        input: &SignUpInput,
    ) -> GatewayResult<Token> {
        guard(identity, &policy::SIGN_UP_USER, None)?;

        let token = self
            .auth
            .create_user(&UserPayload::from(input))
            .await
            .map_err(upstream_failed("signUpUser"))?;
        info!(email = %input.email, "user signed up");
        decode(token)
    }

    pub async fn log_in(
        &self,
        identity: &Identity,
        input: &CredentialsInput,
    ) -> GatewayResult<Token> {
        guard(identity, &policy::LOG_IN, None)?;

        let token = self
            .auth
            .log_in(&CredentialsPayload::from(input))
            .await
            .map_err(upstream_failed("logIn"))?;
        decode(token)
    }

    pub async fn refresh_token(&self, identity: &Identity, refresh: &str) -> GatewayResult<Access> {
        guard(identity, &policy::REFRESH_TOKEN, None)?;

        let access = self
            .auth
            .refresh_token(&RefreshPayload {
                refresh: refresh.to_string(),
            })
            .await
            .map_err(upstream_failed("refreshToken"))?;
        decode(access)
    }

    pub async fn update_user(
        &self,
        identity: &Identity,
        user_id: &str,
        input: &UpdateInput,
    ) -> GatewayResult<User> {
        guard(identity, &policy::UPDATE_USER, Some(user_id))?;

        let user = self
            .auth
            .update_user(user_id, &UserPayload::from(input))
            .await
            .map_err(upstream_failed("updateUser"))?;
        decode(user)
    }

    /// Enables or disables a user. Sends the full record, `enabled` included.
    pub async fn disable_unable_user(
        &self,
        identity: &Identity,
        user_id: &str,
        input: &DisableEnableUserInput,
    ) -> GatewayResult<User> {
        guard(identity, &policy::DISABLE_UNABLE_USER, None)?;

        let user = self
            .auth
            .update_user(user_id, &UserPayload::from(input))
            .await
            .map_err(upstream_failed("disableUnableUser"))?;
        info!(user_id, enabled = input.enabled, "user status changed");
        decode(user)
    }

    /// Public self-registration with a fixed password and role.
    pub async fn register_user(
        &self,
        identity: &Identity,
        input: &RegisterUserInput,
    ) -> GatewayResult<Token> {
        guard(identity, &policy::REGISTER_USER, None)?;

        let payload = input.to_payload(REGISTERED_USER_PASSWORD, REGISTERED_USER_ROLE);
        let token = self
            .auth
            .create_user(&payload)
            .await
            .map_err(upstream_failed("registerUser"))?;
        info!(email = %input.email, "user registered");
        decode(token)
    }
}
