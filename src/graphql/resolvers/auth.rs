use async_graphql::{Context, ErrorExtensions, ID, Object, Result};

use crate::dispatch::AuthDispatcher;
use crate::graphql::types::{
    Access, CredentialsInput, DisableEnableUserInput, RegisterUserInput, SignUpInput, Token,
    UpdateInput, User,
};

use super::{dispatcher, identity};

#[derive(Default)]
pub struct AuthQuery;

#[Object]
impl AuthQuery {
    /// A single user. Admins may read anyone; users only themselves.
    async fn user_detail_by_id(
        &self,
        ctx: &Context<'_>,
        #[graphql(name = "userIdInput")] user_id: ID,
    ) -> Result<User> {
        dispatcher::<AuthDispatcher>(ctx)?
            .user_detail_by_id(&identity(ctx), &user_id)
            .await
            .map_err(|e| e.extend())
    }
}

#[derive(Default)]
pub struct AuthMutation;

#[Object]
impl AuthMutation {
    /// Creates a user on behalf of an admin.
    async fn sign_up_user(
        &self,
        ctx: &Context<'_>,
        #[graphql(name = "userInput")] input: SignUpInput,
    ) -> Result<Token> {
        dispatcher::<AuthDispatcher>(ctx)?
            .sign_up_user(&identity(ctx), &input)
            .await
            .map_err(|e| e.extend())
    }

    async fn log_in(
        &self,
        ctx: &Context<'_>,
        #[graphql(name = "credentialsInput")] input: CredentialsInput,
    ) -> Result<Token> {
        dispatcher::<AuthDispatcher>(ctx)?
            .log_in(&identity(ctx), &input)
            .await
            .map_err(|e| e.extend())
    }

    async fn refresh_token(
        &self,
        ctx: &Context<'_>,
        #[graphql(name = "refreshInput")] refresh: String,
    ) -> Result<Access> {
        dispatcher::<AuthDispatcher>(ctx)?
            .refresh_token(&identity(ctx), &refresh)
            .await
            .map_err(|e| e.extend())
    }

    async fn update_user(
        &self,
        ctx: &Context<'_>,
        #[graphql(name = "userIdInput")] user_id: ID,
        #[graphql(name = "userInput")] input: UpdateInput,
    ) -> Result<User> {
        dispatcher::<AuthDispatcher>(ctx)?
            .update_user(&identity(ctx), &user_id, &input)
            .await
            .map_err(|e| e.extend())
    }

    /// Enables or disables an account. Admin only.
    async fn disable_unable_user(
        &self,
        ctx: &Context<'_>,
        #[graphql(name = "userIdInput")] user_id: ID,
        #[graphql(name = "userInput")] input: DisableEnableUserInput,
    ) -> Result<User> {
        dispatcher::<AuthDispatcher>(ctx)?
            .disable_unable_user(&identity(ctx), &user_id, &input)
            .await
            .map_err(|e| e.extend())
    }

    async fn register_user(
        &self,
        ctx: &Context<'_>,
        #[graphql(name = "userInput")] input: RegisterUserInput,
    ) -> Result<Token> {
        dispatcher::<AuthDispatcher>(ctx)?
            .register_user(&identity(ctx), &input)
            .await
            .map_err(|e| e.extend())
    }
}
