use async_trait::async_trait;
use serde_json::Value;

use super::client::{UpstreamClient, segment};
use super::error::UpstreamResult;
use super::payload::{
    CredentialsPayload, RefreshPayload, UserPayload, VerifyTokenPayload,
};

/// Port for the authentication / user-management microservice.
///
/// Every method maps to exactly one REST call and returns the parsed JSON
/// body untouched. Authorization is **not** this layer's concern; callers
/// must have consulted the guard before invoking a protected call.
///
/// Implementations must be `Send + Sync` so they can be shared through
/// `Arc<dyn AuthApi>` by the identity resolver and the dispatchers.
#[async_trait]
pub trait AuthApi: Send + Sync {
    /// `POST user/`
    async fn create_user(&self, user: &UserPayload) -> UpstreamResult<Value>;

    /// `GET user/`
    async fn list_users(&self) -> UpstreamResult<Value>;

    /// `GET userPk/{id}/`
    async fn get_user(&self, user_id: &str) -> UpstreamResult<Value>;

    /// `PUT user/{id}/`
    async fn update_user(&self, user_id: &str, user: &UserPayload) -> UpstreamResult<Value>;

    /// `POST login/`
    async fn log_in(&self, credentials: &CredentialsPayload) -> UpstreamResult<Value>;

    /// `POST refresh/`
    async fn refresh_token(&self, refresh: &RefreshPayload) -> UpstreamResult<Value>;

    /// `POST verifyToken/`
    async fn verify_token(&self, token: &VerifyTokenPayload) -> UpstreamResult<Value>;
}

/// [`AuthApi`] over HTTP.
#[derive(Clone, Debug)]
pub struct HttpAuthApi {
    client: UpstreamClient,
}

impl HttpAuthApi {
    pub fn new(client: UpstreamClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl AuthApi for HttpAuthApi {
    async fn create_user(&self, user: &UserPayload) -> UpstreamResult<Value> {
        self.client.post("user/", user).await
    }

    async fn list_users(&self) -> UpstreamResult<Value> {
        self.client.get("user/").await
    }

    async fn get_user(&self, user_id: &str) -> UpstreamResult<Value> {
        self.client.get(&format!("userPk/{}/", segment(user_id))).await
    }

    async fn update_user(&self, user_id: &str, user: &UserPayload) -> UpstreamResult<Value> {
        self.client.put(&format!("user/{}/", segment(user_id)), user).await
    }

    async fn log_in(&self, credentials: &CredentialsPayload) -> UpstreamResult<Value> {
        self.client.post("login/", credentials).await
    }

    async fn refresh_token(&self, refresh: &RefreshPayload) -> UpstreamResult<Value> {
        self.client.post("refresh/", refresh).await
    }

    async fn verify_token(&self, token: &VerifyTokenPayload) -> UpstreamResult<Value> {
        self.client.post("verifyToken/", token).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        Json, Router,
        extract::Path,
        routing::{get, post},
    };
    use serde_json::json;

    use crate::upstream::testing::serve;

    async fn api() -> HttpAuthApi {
        let app = Router::new()
            .route(
                "/verifyToken/",
                post(|Json(body): Json<Value>| async move {
                    Json(json!({ "UserId": 7, "received": body }))
                }),
            )
            .route(
                "/userPk/{id}/",
                get(|Path(id): Path<String>| async move { Json(json!({ "id": id, "role": "1" })) }),
            )
            .route(
                "/user/",
                get(|| async { Json(json!([{ "id": 1 }, { "id": 2 }])) }).post(
                    |Json(body): Json<Value>| async move { Json(json!({ "created": body })) },
                ),
            )
            .route(
                "/user/{id}/",
                axum::routing::put(|Path(id): Path<String>, Json(body): Json<Value>| async move {
                    Json(json!({ "id": id, "updated": body }))
                }),
            )
            .route(
                "/refresh/",
                post(|Json(body): Json<Value>| async move {
                    Json(json!({ "access": body["refresh"] }))
                }),
            )
            .route(
                "/login/",
                post(|Json(body): Json<Value>| async move {
                    Json(json!({ "access": "a", "refresh": "r", "email": body["email"] }))
                }),
            );

        let base = serve(app).await;
        HttpAuthApi::new(UpstreamClient::new(&base, None).unwrap())
    }

    #[tokio::test]
    async fn verify_token_posts_token_in_body() {
        let api = api().await;

        let value = api
            .verify_token(&VerifyTokenPayload {
                token: "opaque".into(),
            })
            .await
            .unwrap();

        assert_eq!(value["UserId"], 7);
        assert_eq!(value["received"], json!({ "token": "opaque" }));
    }

    #[tokio::test]
    async fn get_user_uses_user_pk_path() {
        let api = api().await;

        let value = api.get_user("42").await.unwrap();

        assert_eq!(value["id"], "42");
        assert_eq!(value["role"], "1");
    }

    #[tokio::test]
    async fn get_user_escapes_the_id() {
        let api = api().await;

        let value = api.get_user("../user/1").await.unwrap();

        assert_eq!(value["id"], "../user/1");
    }

    #[tokio::test]
    async fn list_users_returns_array() {
        let api = api().await;

        let value = api.list_users().await.unwrap();

        assert_eq!(value.as_array().map(Vec::len), Some(2));
    }

    #[tokio::test]
    async fn update_user_puts_to_user_path() {
        let api = api().await;
        let payload = UserPayload {
            date_of_birth: "2000-02-02".into(),
            document: "1".into(),
            document_type: "CC".into(),
            email: "u@example.com".into(),
            enabled: None,
            entity: "e".into(),
            full_name: "U".into(),
            password: "p".into(),
            phone_number: "0".into(),
            position: "p".into(),
            role: "2".into(),
        };

        let value = api.update_user("9", &payload).await.unwrap();

        assert_eq!(value["id"], "9");
        assert_eq!(value["updated"]["email"], "u@example.com");
        assert!(value["updated"].get("enabled").is_none());
    }

    #[tokio::test]
    async fn log_in_and_refresh_post_their_bodies() {
        let api = api().await;
        let payload = CredentialsPayload {
            email: "x@example.com".into(),
            password: "p".into(),
        };

        let value = api.log_in(&payload).await.unwrap();
        assert_eq!(value["email"], "x@example.com");

        let refreshed = api
            .refresh_token(&RefreshPayload {
                refresh: "r-token".into(),
            })
            .await
            .unwrap();
        assert_eq!(refreshed["access"], "r-token");
    }
}
