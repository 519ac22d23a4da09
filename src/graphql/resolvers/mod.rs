//! GraphQL root objects.
//!
//! Resolvers are thin: they pull the request [`Identity`] and the relevant
//! dispatcher out of the execution context and forward their arguments.

pub mod auth;
pub mod logs;

use std::sync::Arc;

use async_graphql::Context;

use crate::auth::Identity;

pub use auth::{AuthMutation, AuthQuery};
pub use logs::{LogsMutation, LogsQuery};

/// The identity injected by the HTTP handler; anonymous when absent.
pub(crate) fn identity(ctx: &Context<'_>) -> Identity {
    ctx.data_opt::<Identity>().cloned().unwrap_or_default()
}

/// A dispatcher registered on the schema.
pub(crate) fn dispatcher<'a, T: Send + Sync + 'static>(
    ctx: &'a Context<'_>,
) -> async_graphql::Result<&'a Arc<T>> {
    ctx.data::<Arc<T>>()
}
