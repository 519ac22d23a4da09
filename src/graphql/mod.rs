//! GraphQL surface of the gateway: types, resolvers, schema and the axum
//! handler that resolves the caller's identity before execution.

pub mod config;
pub mod context;
pub mod graphiql;
pub mod handler;
pub mod resolvers;
pub mod schema;
pub mod types;

pub use config::GraphqlAuthConfig;
pub use handler::graphql_handler;
pub use schema::{GatewaySchema, build_schema};
