use std::sync::Arc;

use async_graphql::{ComplexObject, Context, ErrorExtensions, ID, InputObject, SimpleObject};
use serde::Deserialize;

use crate::dispatch::LogsDispatcher;
use crate::upstream::payload::{LogPayload, LogReasonPayload, ReasonPayload};
use crate::upstream::wire::deserialize_id;

use super::auth::User;
use super::graphql_id;

#[derive(Clone, Debug, PartialEq, Deserialize, SimpleObject)]
pub struct Reason {
    #[serde(alias = "_id", deserialize_with = "graphql_id")]
    pub id: ID,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// An audit log entry.
///
/// The logs service stores only the user id; the `user` field is resolved
/// against the auth service when a client selects it.
#[derive(Clone, Debug, PartialEq, Deserialize, SimpleObject)]
#[graphql(complex)]
pub struct Log {
    #[serde(alias = "_id", deserialize_with = "graphql_id")]
    pub id: ID,
    pub reason: Reason,
    #[serde(rename = "user", deserialize_with = "deserialize_id")]
    #[graphql(skip)]
    pub user_id: String,
    #[serde(rename = "dateTime")]
    pub date_time: String,
    pub date: String,
}

#[ComplexObject]
impl Log {
    async fn user(&self, ctx: &Context<'_>) -> async_graphql::Result<User> {
        let logs = ctx.data::<Arc<LogsDispatcher>>()?;
        logs.log_user(&self.user_id).await.map_err(|e| e.extend())
    }
}

#[derive(Clone, Debug, InputObject)]
pub struct ReasonCreateInput {
    pub name: String,
    pub description: Option<String>,
}

impl From<&ReasonCreateInput> for ReasonPayload {
    fn from(input: &ReasonCreateInput) -> Self {
        Self {
            name: input.name.clone(),
            description: input.description.clone(),
        }
    }
}

#[derive(Clone, Debug, InputObject)]
pub struct ReasonUpdateInput {
    pub name: String,
    pub description: String,
}

impl From<&ReasonUpdateInput> for ReasonPayload {
    fn from(input: &ReasonUpdateInput) -> Self {
        Self {
            name: input.name.clone(),
            description: Some(input.description.clone()),
        }
    }
}

#[derive(Clone, Debug, InputObject)]
pub struct ReasonLogCreateInput {
    pub id: ID,
    pub name: String,
    pub description: Option<String>,
}

#[derive(Clone, Debug, InputObject)]
pub struct LogCreateInput {
    pub reason: ReasonLogCreateInput,
    pub user: ID,
}

impl From<&LogCreateInput> for LogPayload {
    fn from(input: &LogCreateInput) -> Self {
        Self {
            reason: LogReasonPayload {
                id: input.reason.id.0.clone(),
                name: input.reason.name.clone(),
                description: input.reason.description.clone(),
            },
            user: input.user.0.clone(),
        }
    }
}

#[derive(Clone, Debug, InputObject)]
pub struct ReasonLogUpdateInput {
    pub id: ID,
    pub name: String,
    pub description: Option<String>,
}

#[derive(Clone, Debug, InputObject)]
pub struct LogUpdateInput {
    pub reason: ReasonLogUpdateInput,
    pub user: ID,
}

impl From<&LogUpdateInput> for LogPayload {
    fn from(input: &LogUpdateInput) -> Self {
        Self {
            reason: LogReasonPayload {
                id: input.reason.id.0.clone(),
                name: input.reason.name.clone(),
                description: input.reason.description.clone(),
            },
            user: input.user.0.clone(),
        }
    }
}
