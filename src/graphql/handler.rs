use async_graphql::{ObjectType, Response, Schema, SubscriptionType};
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::Extension;
use axum::http::HeaderMap;

use crate::auth::IdentityResolver;
use crate::graphql::config::GraphqlAuthConfig;
use crate::graphql::context::extract_token;

/// GraphQL endpoint handler.
///
/// # Responsibilities
///
/// - Read the bearer token from the configured header
/// - Resolve it to an [`Identity`](crate::auth::Identity) through the auth
///   service
/// - Inject the identity into the GraphQL execution context
///
/// Authorization happens later, per operation, in the dispatchers.
///
/// # Failure model
///
/// If identity resolution fails the request is aborted before any resolver
/// runs. The failure is returned as a GraphQL-compliant response (HTTP 200
/// with an `errors` entry whose `code` extension is 401 or 500).
pub async fn graphql_handler<Q, M, S>(
    Extension(schema): Extension<Schema<Q, M, S>>,
    Extension(resolver): Extension<IdentityResolver>,
    Extension(auth_cfg): Extension<GraphqlAuthConfig>,
    headers: HeaderMap,
    req: GraphQLRequest,
) -> GraphQLResponse
where
    Q: ObjectType + 'static,
    M: ObjectType + 'static,
    S: SubscriptionType + 'static,
{
    let token = extract_token(&headers, &auth_cfg.token_header);

    let identity = match resolver.resolve(token).await {
        Ok(identity) => identity,
        Err(err) => return Response::from_errors(vec![err.to_server_error()]).into(),
    };

    schema.execute(req.into_inner().data(identity)).await.into()
}
