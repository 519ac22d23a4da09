use async_graphql::{ID, InputObject, SimpleObject};
use serde::Deserialize;

use crate::upstream::payload::{CredentialsPayload, UserPayload};
use crate::upstream::wire::deserialize_id;

use super::graphql_id;

/// A user record of the auth microservice.
#[derive(Clone, Debug, PartialEq, Deserialize, SimpleObject)]
#[graphql(rename_fields = "snake_case")]
pub struct User {
    #[serde(deserialize_with = "graphql_id")]
    pub id: ID,
    pub date_of_birth: String,
    pub document: String,
    pub document_type: String,
    pub email: String,
    pub enabled: bool,
    pub entity: String,
    pub full_name: String,
    pub password: String,
    #[serde(rename = "phoneNumber")]
    #[graphql(name = "phoneNumber")]
    pub phone_number: String,
    pub position: String,
    #[serde(deserialize_with = "deserialize_id")]
    pub role: String,
}

/// Token pair returned by login and user creation.
#[derive(Clone, Debug, PartialEq, Deserialize, SimpleObject)]
pub struct Token {
    pub refresh: String,
    pub access: String,
}

/// Fresh access token returned by `refreshToken`.
#[derive(Clone, Debug, PartialEq, Deserialize, SimpleObject)]
pub struct Access {
    pub access: String,
}

#[derive(Clone, Debug, InputObject)]
pub struct CredentialsInput {
    pub email: String,
    pub password: String,
}

impl From<&CredentialsInput> for CredentialsPayload {
    fn from(input: &CredentialsInput) -> Self {
        Self {
            email: input.email.clone(),
            password: input.password.clone(),
        }
    }
}

#[derive(Clone, Debug, InputObject)]
#[graphql(rename_fields = "snake_case")]
pub struct SignUpInput {
    pub date_of_birth: String,
    pub document: String,
    pub document_type: String,
    pub email: String,
    pub entity: String,
    pub full_name: String,
    pub password: String,
    #[graphql(name = "phoneNumber")]
    pub phone_number: String,
    pub position: String,
    pub role: String,
}

impl From<&SignUpInput> for UserPayload {
    fn from(input: &SignUpInput) -> Self {
        Self {
            date_of_birth: input.date_of_birth.clone(),
            document: input.document.clone(),
            document_type: input.document_type.clone(),
            email: input.email.clone(),
            enabled: None,
            entity: input.entity.clone(),
            full_name: input.full_name.clone(),
            password: input.password.clone(),
            phone_number: input.phone_number.clone(),
            position: input.position.clone(),
            role: input.role.clone(),
        }
    }
}

#[derive(Clone, Debug, InputObject)]
#[graphql(rename_fields = "snake_case")]
pub struct UpdateInput {
    pub date_of_birth: String,
    pub document: String,
    pub document_type: String,
    pub email: String,
    pub entity: String,
    pub full_name: String,
    pub password: String,
    #[graphql(name = "phoneNumber")]
    pub phone_number: String,
    pub position: String,
    pub role: String,
}

impl From<&UpdateInput> for UserPayload {
    fn from(input: &UpdateInput) -> Self {
        Self {
            date_of_birth: input.date_of_birth.clone(),
            document: input.document.clone(),
            document_type: input.document_type.clone(),
            email: input.email.clone(),
            enabled: None,
            entity: input.entity.clone(),
            full_name: input.full_name.clone(),
            password: input.password.clone(),
            phone_number: input.phone_number.clone(),
            position: input.position.clone(),
            role: input.role.clone(),
        }
    }
}

#[derive(Clone, Debug, InputObject)]
#[graphql(name = "disableEnableUserInput", rename_fields = "snake_case")]
pub struct DisableEnableUserInput {
    pub date_of_birth: String,
    pub document: String,
    pub document_type: String,
    pub email: String,
    pub enabled: bool,
    pub entity: String,
    pub full_name: String,
    pub password: String,
    #[graphql(name = "phoneNumber")]
    pub phone_number: String,
    pub position: String,
    pub role: String,
}

impl From<&DisableEnableUserInput> for UserPayload {
    fn from(input: &DisableEnableUserInput) -> Self {
        Self {
            date_of_birth: input.date_of_birth.clone(),
            document: input.document.clone(),
            document_type: input.document_type.clone(),
            email: input.email.clone(),
            enabled: Some(input.enabled),
            entity: input.entity.clone(),
            full_name: input.full_name.clone(),
            password: input.password.clone(),
            phone_number: input.phone_number.clone(),
            position: input.position.clone(),
            role: input.role.clone(),
        }
    }
}

/// Self-service registration. Password and role are assigned by the gateway.
#[derive(Clone, Debug, InputObject)]
#[graphql(rename_fields = "snake_case")]
pub struct RegisterUserInput {
    pub date_of_birth: String,
    pub document: String,
    pub document_type: String,
    pub email: String,
    pub entity: String,
    pub full_name: String,
    #[graphql(name = "phoneNumber")]
    pub phone_number: String,
    pub position: String,
}

impl RegisterUserInput {
    pub fn to_payload(&self, password: &str, role: &str) -> UserPayload {
        UserPayload {
            date_of_birth: self.date_of_birth.clone(),
            document: self.document.clone(),
            document_type: self.document_type.clone(),
            email: self.email.clone(),
            enabled: None,
            entity: self.entity.clone(),
            full_name: self.full_name.clone(),
            password: password.to_string(),
            phone_number: self.phone_number.clone(),
            position: self.position.clone(),
            role: role.to_string(),
        }
    }
}
