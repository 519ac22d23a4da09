use async_graphql::http::GraphiQLSource;
use axum::response::Html;

/// GraphiQL page for `endpoint`.
///
/// Only mounted when `GRAPHIQL` is enabled. The page sends whatever
/// `Authorization` header the user types into its headers pane.
pub async fn graphiql_handler(endpoint: &str) -> Html<String> {
    Html(GraphiQLSource::build().endpoint(endpoint).finish())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn graphiql_handler_embeds_endpoint() {
        let Html(body) = graphiql_handler("/graphql").await;

        assert!(body.contains("<!DOCTYPE html>"));
        assert!(body.contains("/graphql"));
    }
}
