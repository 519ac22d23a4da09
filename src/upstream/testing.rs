//! Test doubles for the upstream ports.
//!
//! [`StubUpstream`] implements both [`AuthApi`] and [`LogsApi`]. Every call
//! is recorded as `"METHOD path"` plus the JSON body, and answered from a
//! table of canned replies keyed the same way.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use axum::Router;
use serde::Serialize;
use serde_json::Value;

use super::auth_api::AuthApi;
use super::error::{UpstreamError, UpstreamResult};
use super::logs_api::LogsApi;
use super::payload::{
    CredentialsPayload, LogPayload, ReasonPayload, RefreshPayload, UserPayload,
    VerifyTokenPayload,
};

/// Serves `app` on an ephemeral localhost port and returns its base URL.
pub async fn serve(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral port");
    let addr = listener.local_addr().expect("local addr");

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("test server");
    });

    format!("http://{addr}/")
}

#[derive(Clone, Debug)]
enum Reply {
    Json(Value),
    Status(u16),
    Malformed,
}

#[derive(Clone, Debug, PartialEq)]
pub struct RecordedCall {
    pub route: String,
    pub body: Option<Value>,
}

#[derive(Default)]
pub struct StubUpstream {
    replies: Mutex<HashMap<String, Reply>>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl StubUpstream {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reply(self, route: &str, value: Value) -> Self {
        self.set(route, Reply::Json(value))
    }

    pub fn reply_status(self, route: &str, status: u16) -> Self {
        self.set(route, Reply::Status(status))
    }

    pub fn reply_malformed(self, route: &str) -> Self {
        self.set(route, Reply::Malformed)
    }

    fn set(self, route: &str, reply: Reply) -> Self {
        self.replies.lock().unwrap().insert(route.to_string(), reply);
        self
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn count(&self, route: &str) -> usize {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|c| c.route == route)
            .count()
    }

    pub fn body_of(&self, route: &str) -> Option<Value> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .rev()
            .find(|c| c.route == route)
            .and_then(|c| c.body.clone())
    }

    fn call(&self, route: String, body: Option<Value>) -> UpstreamResult<Value> {
        let reply = self.replies.lock().unwrap().get(&route).cloned();
        self.calls.lock().unwrap().push(RecordedCall { route, body });

        match reply {
            Some(Reply::Json(value)) => Ok(value),
            Some(Reply::Status(status)) => Err(UpstreamError::Status {
                status,
                body: String::new(),
            }),
            Some(Reply::Malformed) => {
                Err(serde_json::from_str::<Value>("{").unwrap_err().into())
            }
            None => Ok(Value::Null),
        }
    }

    fn call_with<B: Serialize>(&self, route: String, body: &B) -> UpstreamResult<Value> {
        let body = serde_json::to_value(body).expect("serializable payload");
        self.call(route, Some(body))
    }
}

#[async_trait]
impl AuthApi for StubUpstream {
    async fn create_user(&self, user: &UserPayload) -> UpstreamResult<Value> {
        self.call_with("POST user/".into(), user)
    }

    async fn list_users(&self) -> UpstreamResult<Value> {
        self.call("GET user/".into(), None)
    }

    async fn get_user(&self, user_id: &str) -> UpstreamResult<Value> {
        self.call(format!("GET userPk/{user_id}/"), None)
    }

    async fn update_user(&self, user_id: &str, user: &UserPayload) -> UpstreamResult<Value> {
        self.call_with(format!("PUT user/{user_id}/"), user)
    }

    async fn log_in(&self, credentials: &CredentialsPayload) -> UpstreamResult<Value> {
        self.call_with("POST login/".into(), credentials)
    }

    async fn refresh_token(&self, refresh: &RefreshPayload) -> UpstreamResult<Value> {
        self.call_with("POST refresh/".into(), refresh)
    }

    async fn verify_token(&self, token: &VerifyTokenPayload) -> UpstreamResult<Value> {
        self.call_with("POST verifyToken/".into(), token)
    }
}

#[async_trait]
impl LogsApi for StubUpstream {
    async fn list_reasons(&self) -> UpstreamResult<Value> {
        self.call("GET api/ms/reasons/".into(), None)
    }

    async fn get_reason(&self, reason_id: &str) -> UpstreamResult<Value> {
        self.call(format!("GET api/ms/reasons/{reason_id}"), None)
    }

    async fn create_reason(&self, reason: &ReasonPayload) -> UpstreamResult<Value> {
        self.call_with("POST api/ms/reasons/".into(), reason)
    }

    async fn update_reason(
        &self,
        reason_id: &str,
        reason: &ReasonPayload,
    ) -> UpstreamResult<Value> {
        self.call_with(format!("PUT api/ms/reasons/{reason_id}"), reason)
    }

    async fn delete_reason(&self, reason_id: &str) -> UpstreamResult<Value> {
        self.call(format!("DELETE api/ms/reasons/{reason_id}"), None)
    }

    async fn list_logs(&self) -> UpstreamResult<Value> {
        self.call("GET api/ms/logs/".into(), None)
    }

    async fn get_log(&self, log_id: &str) -> UpstreamResult<Value> {
        self.call(format!("GET api/ms/logs/{log_id}"), None)
    }

    async fn logs_by_user(&self, user_id: &str) -> UpstreamResult<Value> {
        self.call(format!("GET api/ms/logs/user/{user_id}"), None)
    }

    async fn logs_by_reason(&self, reason_id: &str) -> UpstreamResult<Value> {
        self.call(format!("GET api/ms/logs/reason/{reason_id}"), None)
    }

    async fn logs_by_date(&self, date: &str) -> UpstreamResult<Value> {
        self.call(format!("GET api/ms/logs/date/{date}"), None)
    }

    async fn logs_by_reason_and_date(
        &self,
        reason_id: &str,
        date: &str,
    ) -> UpstreamResult<Value> {
        self.call(format!("GET api/ms/logs/reason/{reason_id}/{date}"), None)
    }

    async fn create_log(&self, log: &LogPayload) -> UpstreamResult<Value> {
        self.call_with("POST api/ms/logs/".into(), log)
    }

    async fn update_log(&self, log_id: &str, log: &LogPayload) -> UpstreamResult<Value> {
        self.call_with(format!("PUT api/ms/logs/{log_id}"), log)
    }
}
