use std::sync::Arc;

use serde_json::Value;
use tracing::{error, info, warn};

use crate::auth::{Identity, policy};
use crate::error::{GatewayError, GatewayResult, NotFoundError};
use crate::graphql::types::{
    Log, LogCreateInput, LogUpdateInput, Reason, ReasonCreateInput, ReasonUpdateInput, User,
};
use crate::upstream::payload::{LogPayload, ReasonPayload};
use crate::upstream::wire::{id_field, scalar_string};
use crate::upstream::{AuthApi, LogsApi};

use super::{decode, guard, unwrap_envelope, upstream_failed};

/// Logs domain operations.
///
/// The logs service wraps every payload in `{ "data": ... }` (or
/// `{ "message": ... }` for deletions); these methods return the unwrapped
/// member.
#[derive(Clone)]
pub struct LogsDispatcher {
    logs: Arc<dyn LogsApi>,
    auth: Arc<dyn AuthApi>,
}

impl LogsDispatcher {
    pub fn new(logs: Arc<dyn LogsApi>, auth: Arc<dyn AuthApi>) -> Self {
        Self { logs, auth }
    }

    pub async fn get_all_reasons(&self, identity: &Identity) -> GatewayResult<Option<Vec<Reason>>> {
        guard(identity, &policy::GET_ALL_REASONS, None)?;

        let reasons = self
            .logs
            .list_reasons()
            .await
            .map_err(upstream_failed("getAllReasons"))?;
        unwrap_envelope(reasons, "data")
    }

    pub async fn get_reason_by_id(
        &self,
        identity: &Identity,
        reason_id: &str,
    ) -> GatewayResult<Reason> {
        guard(identity, &policy::GET_REASON_BY_ID, None)?;

        let reason = self
            .logs
            .get_reason(reason_id)
            .await
            .map_err(upstream_failed("getReasonById"))?;
        unwrap_envelope(reason, "data")
    }

    pub async fn get_all_logs(&self, identity: &Identity) -> GatewayResult<Option<Vec<Log>>> {
        guard(identity, &policy::GET_ALL_LOGS, None)?;

        let logs = self
            .logs
            .list_logs()
            .await
            .map_err(upstream_failed("getAllLogs"))?;
        unwrap_envelope(logs, "data")
    }

    pub async fn get_log_by_id(&self, identity: &Identity, log_id: &str) -> GatewayResult<Log> {
        guard(identity, &policy::GET_LOG_BY_ID, None)?;

        let log = self
            .logs
            .get_log(log_id)
            .await
            .map_err(upstream_failed("getLogById"))?;
        unwrap_envelope(log, "data")
    }

    pub async fn get_logs_by_user(
        &self,
        identity: &Identity,
        user_id: &str,
    ) -> GatewayResult<Option<Vec<Log>>> {
        guard(identity, &policy::GET_LOGS_BY_USER, None)?;

        let logs = self
            .logs
            .logs_by_user(user_id)
            .await
            .map_err(upstream_failed("getLogsByUser"))?;
        unwrap_envelope(logs, "data")
    }

    pub async fn get_logs_by_reason(
        &self,
        identity: &Identity,
        reason_id: &str,
    ) -> GatewayResult<Option<Vec<Log>>> {
        guard(identity, &policy::GET_LOGS_BY_REASON, None)?;

        let logs = self
            .logs
            .logs_by_reason(reason_id)
            .await
            .map_err(upstream_failed("getLogsByReason"))?;
        unwrap_envelope(logs, "data")
    }

    pub async fn get_logs_by_date(
        &self,
        identity: &Identity,
        date: &str,
    ) -> GatewayResult<Option<Vec<Log>>> {
        guard(identity, &policy::GET_LOGS_BY_DATE, None)?;

        let logs = self
            .logs
            .logs_by_date(date)
            .await
            .map_err(upstream_failed("getLogsByDate"))?;
        unwrap_envelope(logs, "data")
    }

    pub async fn get_logs_by_reason_and_date(
        &self,
        identity: &Identity,
        reason_id: &str,
        date: &str,
    ) -> GatewayResult<Option<Vec<Log>>> {
        guard(identity, &policy::GET_LOGS_BY_REASON_AND_DATE, None)?;

        let logs = self
            .logs
            .logs_by_reason_and_date(reason_id, date)
            .await
            .map_err(upstream_failed("getLogsByReasonAndDate"))?;
        unwrap_envelope(logs, "data")
    }

    pub async fn create_reason(
        &self,
        identity: &Identity,
        input: &ReasonCreateInput,
    ) -> GatewayResult<Reason> {
        guard(identity, &policy::CREATE_REASON, None)?;

        let reason = self
            .logs
            .create_reason(&ReasonPayload::from(input))
            .await
            .map_err(upstream_failed("createReason"))?;
        unwrap_envelope(reason, "data")
    }

    pub async fn update_reason(
        &self,
        identity: &Identity,
        reason_id: &str,
        input: &ReasonUpdateInput,
    ) -> GatewayResult<Reason> {
        guard(identity, &policy::UPDATE_REASON, None)?;

        let reason = self
            .logs
            .update_reason(reason_id, &ReasonPayload::from(input))
            .await
            .map_err(upstream_failed("updateReason"))?;
        unwrap_envelope(reason, "data")
    }

    /// Deletes a reason unless some log still references it.
    ///
    /// The reference check and the delete are two separate upstream calls
    /// with nothing spanning them: a log created in between can end up
    /// pointing at a deleted reason.
    pub async fn delete_reason_by_id(
        &self,
        identity: &Identity,
        reason_id: &str,
    ) -> GatewayResult<String> {
        guard(identity, &policy::DELETE_REASON_BY_ID, None)?;

        let logs = self
            .logs
            .list_logs()
            .await
            .map_err(upstream_failed("deleteReasonById"))?;

        let entries: Vec<Value> = unwrap_envelope(logs, "data").inspect_err(|err| {
            error!(reason_id, error = %err, "log list unreadable, reason kept");
        })?;

        if references_reason(&entries, reason_id) {
            warn!(reason_id, "refusing to delete a reason linked to logs");
            return Err(GatewayError::Conflict(format!(
                "reason {reason_id} is linked to at least one log"
            )));
        }

        let deleted = self
            .logs
            .delete_reason(reason_id)
            .await
            .map_err(upstream_failed("deleteReasonById"))?;
        info!(reason_id, "reason deleted");
        unwrap_envelope(deleted, "message")
    }

    pub async fn create_log(
        &self,
        identity: &Identity,
        input: &LogCreateInput,
    ) -> GatewayResult<Log> {
        guard(identity, &policy::CREATE_LOG, None)?;

        let log = self
            .logs
            .create_log(&LogPayload::from(input))
            .await
            .map_err(upstream_failed("createLog"))?;
        unwrap_envelope(log, "data")
    }

    pub async fn update_log(
        &self,
        identity: &Identity,
        log_id: &str,
        input: &LogUpdateInput,
    ) -> GatewayResult<Log> {
        guard(identity, &policy::UPDATE_LOG, None)?;

        let log = self
            .logs
            .update_log(log_id, &LogPayload::from(input))
            .await
            .map_err(upstream_failed("updateLog"))?;
        unwrap_envelope(log, "data")
    }

    /// Resolves the user behind a log entry.
    ///
    /// Fetches the full user list and scans it; the auth service is asked
    /// for every user on each resolution.
    // TODO: switch to `GET userPk/{id}/` behind a DataLoader once the auth
    // service exposes a batch lookup.
    pub async fn log_user(&self, user_id: &str) -> GatewayResult<User> {
        let users = self
            .auth
            .list_users()
            .await
            .map_err(upstream_failed("Log.user"))?;

        let found = match users {
            Value::Array(users) => users
                .into_iter()
                .find(|u| id_field(u, "id").as_deref() == Some(user_id)),
            _ => None,
        };

        match found {
            Some(user) => decode(user),
            None => Err(NotFoundError::new("User", user_id).into()),
        }
    }
}

/// Returns `true` when any log entry points at `reason_id`. The reference
/// may be an embedded reason object or a bare id.
fn references_reason(entries: &[Value], reason_id: &str) -> bool {
    entries.iter().any(|log| {
        let reference = match log.get("reason") {
            Some(reason @ Value::Object(_)) => id_field(reason, "id"),
            Some(other) => scalar_string(other),
            None => None,
        };
        reference.as_deref() == Some(reason_id)
    })
}
