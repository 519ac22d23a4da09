use async_graphql::EmptySubscription;
use axum::{Extension, Router, routing::post};
use tower_http::limit::RequestBodyLimitLayer;

use crate::auth::IdentityResolver;
use crate::config::AppConfig;
use crate::graphql::schema::{Mutation, Query};
use crate::graphql::{GatewaySchema, graphiql::graphiql_handler, graphql_handler};
use crate::web::{cors::build_cors, fallback::not_found};

pub const GRAPHQL_PATH: &str = "/graphql";

/// Assembles the HTTP surface: `POST /graphql`, plus `GET /graphql` serving
/// GraphiQL when enabled. Everything else is a 404.
pub fn build_router(schema: GatewaySchema, resolver: IdentityResolver, cfg: &AppConfig) -> Router {
    let mut graphql = post(graphql_handler::<Query, Mutation, EmptySubscription>);
    if cfg.enable_graphiql {
        graphql = graphql.get(|| graphiql_handler(GRAPHQL_PATH));
    }

    Router::new()
        .route(GRAPHQL_PATH, graphql)
        .fallback(not_found)
        .layer(Extension(schema))
        .layer(Extension(resolver))
        .layer(Extension(cfg.auth.clone()))
        .layer(RequestBodyLimitLayer::new(cfg.http.max_body_bytes))
        .layer(build_cors(&cfg.cors, &cfg.auth.token_header))
}
