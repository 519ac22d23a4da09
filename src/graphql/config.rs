/// Configuration for GraphQL authentication handling.
///
/// This configuration is injected via `axum::Extension` and
/// controls where the bearer token is read from.
#[derive(Clone, Debug)]
pub struct GraphqlAuthConfig {
    /// Request header carrying the token.
    ///
    /// Example: `"authorization"`
    pub token_header: String,
}

impl GraphqlAuthConfig {
    pub const DEFAULT_HEADER: &'static str = "authorization";

    pub fn new(token_header: impl Into<String>) -> Self {
        Self {
            token_header: token_header.into(),
        }
    }
}

impl Default for GraphqlAuthConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_HEADER)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn creates_config_with_str_literal() {
        let cfg = GraphqlAuthConfig::new("x-access-token");

        assert_eq!(cfg.token_header, "x-access-token");
    }

    #[test]
    fn default_reads_authorization_header() {
        assert_eq!(GraphqlAuthConfig::default().token_header, "authorization");
    }
}
