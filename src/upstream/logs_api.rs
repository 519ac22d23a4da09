use async_trait::async_trait;
use serde_json::Value;

use super::client::{UpstreamClient, segment};
use super::error::UpstreamResult;
use super::payload::{LogPayload, ReasonPayload};

/// Port for the logs / audit microservice.
///
/// Responses are returned as received, including the `{ "data": ... }` or
/// `{ "message": ... }` envelope the service wraps them in.
#[async_trait]
pub trait LogsApi: Send + Sync {
    async fn list_reasons(&self) -> UpstreamResult<Value>;
    async fn get_reason(&self, reason_id: &str) -> UpstreamResult<Value>;
    async fn create_reason(&self, reason: &ReasonPayload) -> UpstreamResult<Value>;
    async fn update_reason(&self, reason_id: &str, reason: &ReasonPayload)
    -> UpstreamResult<Value>;
    async fn delete_reason(&self, reason_id: &str) -> UpstreamResult<Value>;

    async fn list_logs(&self) -> UpstreamResult<Value>;
    async fn get_log(&self, log_id: &str) -> UpstreamResult<Value>;
    async fn logs_by_user(&self, user_id: &str) -> UpstreamResult<Value>;
    async fn logs_by_reason(&self, reason_id: &str) -> UpstreamResult<Value>;
    async fn logs_by_date(&self, date: &str) -> UpstreamResult<Value>;
    async fn logs_by_reason_and_date(&self, reason_id: &str, date: &str)
    -> UpstreamResult<Value>;
    async fn create_log(&self, log: &LogPayload) -> UpstreamResult<Value>;
    async fn update_log(&self, log_id: &str, log: &LogPayload) -> UpstreamResult<Value>;
}

/// [`LogsApi`] over HTTP.
#[derive(Clone, Debug)]
pub struct HttpLogsApi {
    client: UpstreamClient,
}

impl HttpLogsApi {
    pub fn new(client: UpstreamClient) -> Self {
        Self { client }
    }
}

const REASONS: &str = "api/ms/reasons/";
const LOGS: &str = "api/ms/logs/";

#[async_trait]
impl LogsApi for HttpLogsApi {
    async fn list_reasons(&self) -> UpstreamResult<Value> {
        self.client.get(REASONS).await
    }

    async fn get_reason(&self, reason_id: &str) -> UpstreamResult<Value> {
        self.client.get(&format!("{REASONS}{}", segment(reason_id))).await
    }

    async fn create_reason(&self, reason: &ReasonPayload) -> UpstreamResult<Value> {
        self.client.post(REASONS, reason).await
    }

    async fn update_reason(
        &self,
        reason_id: &str,
        reason: &ReasonPayload,
    ) -> UpstreamResult<Value> {
        self.client.put(&format!("{REASONS}{}", segment(reason_id)), reason).await
    }

    async fn delete_reason(&self, reason_id: &str) -> UpstreamResult<Value> {
        self.client.delete(&format!("{REASONS}{}", segment(reason_id))).await
    }

    async fn list_logs(&self) -> UpstreamResult<Value> {
        self.client.get(LOGS).await
    }

    async fn get_log(&self, log_id: &str) -> UpstreamResult<Value> {
        self.client.get(&format!("{LOGS}{}", segment(log_id))).await
    }

    async fn logs_by_user(&self, user_id: &str) -> UpstreamResult<Value> {
        self.client.get(&format!("{LOGS}user/{}", segment(user_id))).await
    }

    async fn logs_by_reason(&self, reason_id: &str) -> UpstreamResult<Value> {
        self.client.get(&format!("{LOGS}reason/{}", segment(reason_id))).await
    }

    async fn logs_by_date(&self, date: &str) -> UpstreamResult<Value> {
        self.client.get(&format!("{LOGS}date/{}", segment(date))).await
    }

    async fn logs_by_reason_and_date(
        &self,
        reason_id: &str,
        date: &str,
    ) -> UpstreamResult<Value> {
        self.client
            .get(&format!("{LOGS}reason/{}/{}", segment(reason_id), segment(date)))
            .await
    }

    async fn create_log(&self, log: &LogPayload) -> UpstreamResult<Value> {
        self.client.post(LOGS, log).await
    }

    async fn update_log(&self, log_id: &str, log: &LogPayload) -> UpstreamResult<Value> {
        self.client.put(&format!("{LOGS}{}", segment(log_id)), log).await
    }
}
