use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use audit_gateway::auth::IdentityResolver;
use audit_gateway::config::{AppConfig, create_auth_api, create_logs_api};
use audit_gateway::dispatch::{AuthDispatcher, LogsDispatcher};
use audit_gateway::graphql::build_schema;
use audit_gateway::web::{GRAPHQL_PATH, build_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cfg = AppConfig::from_env();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let auth = Arc::new(create_auth_api(&cfg.upstream)?);
    let logs = Arc::new(create_logs_api(&cfg.upstream)?);

    let schema = build_schema(
        AuthDispatcher::new(auth.clone()),
        LogsDispatcher::new(logs, auth.clone()),
    );
    let app = build_router(schema, IdentityResolver::new(auth), &cfg);

    let addr = SocketAddr::from(([0, 0, 0, 0], cfg.http.port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("binding {addr}"))?;

    info!(
        %addr,
        auth_api = cfg.upstream.auth_url.as_deref().unwrap_or_default(),
        logs_api = cfg.upstream.logs_url.as_deref().unwrap_or_default(),
        graphiql = cfg.enable_graphiql,
        "gateway listening on http://{addr}{GRAPHQL_PATH}"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
