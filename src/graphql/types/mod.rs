//! GraphQL object and input types.
//!
//! Field names follow the schema clients already use (`date_of_birth`,
//! `phoneNumber`, `dateTime`, ...), which is why several types override
//! async-graphql's default camelCase renaming.

pub mod auth;
pub mod logs;

use async_graphql::ID;
use serde::Deserializer;

use crate::upstream::wire::deserialize_id;

pub use auth::{
    Access, CredentialsInput, DisableEnableUserInput, RegisterUserInput, SignUpInput, Token,
    UpdateInput, User,
};
pub use logs::{
    Log, LogCreateInput, LogUpdateInput, Reason, ReasonCreateInput, ReasonLogCreateInput,
    ReasonLogUpdateInput, ReasonUpdateInput,
};

pub(crate) fn graphql_id<'de, D>(deserializer: D) -> Result<ID, D::Error>
where
    D: Deserializer<'de>,
{
    deserialize_id(deserializer).map(ID)
}
