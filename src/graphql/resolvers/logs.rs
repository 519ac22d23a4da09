use async_graphql::{Context, ErrorExtensions, ID, Object, Result};

use crate::dispatch::LogsDispatcher;
use crate::graphql::types::{
    Log, LogCreateInput, LogUpdateInput, Reason, ReasonCreateInput, ReasonUpdateInput,
};

use super::{dispatcher, identity};

#[derive(Default)]
pub struct LogsQuery;

#[Object]
impl LogsQuery {
    async fn get_all_reasons(&self, ctx: &Context<'_>) -> Result<Option<Vec<Reason>>> {
        dispatcher::<LogsDispatcher>(ctx)?
            .get_all_reasons(&identity(ctx))
            .await
            .map_err(|e| e.extend())
    }

    async fn get_reason_by_id(
        &self,
        ctx: &Context<'_>,
        #[graphql(name = "reasonIdInput")] reason_id: ID,
    ) -> Result<Reason> {
        dispatcher::<LogsDispatcher>(ctx)?
            .get_reason_by_id(&identity(ctx), &reason_id)
            .await
            .map_err(|e| e.extend())
    }

    async fn get_all_logs(&self, ctx: &Context<'_>) -> Result<Option<Vec<Log>>> {
        dispatcher::<LogsDispatcher>(ctx)?
            .get_all_logs(&identity(ctx))
            .await
            .map_err(|e| e.extend())
    }

    async fn get_log_by_id(
        &self,
        ctx: &Context<'_>,
        #[graphql(name = "logIdInput")] log_id: ID,
    ) -> Result<Log> {
        dispatcher::<LogsDispatcher>(ctx)?
            .get_log_by_id(&identity(ctx), &log_id)
            .await
            .map_err(|e| e.extend())
    }

    async fn get_logs_by_user(
        &self,
        ctx: &Context<'_>,
        #[graphql(name = "userIdInput")] user_id: ID,
    ) -> Result<Option<Vec<Log>>> {
        dispatcher::<LogsDispatcher>(ctx)?
            .get_logs_by_user(&identity(ctx), &user_id)
            .await
            .map_err(|e| e.extend())
    }

    async fn get_logs_by_reason(
        &self,
        ctx: &Context<'_>,
        #[graphql(name = "reasonIdInput")] reason_id: ID,
    ) -> Result<Option<Vec<Log>>> {
        dispatcher::<LogsDispatcher>(ctx)?
            .get_logs_by_reason(&identity(ctx), &reason_id)
            .await
            .map_err(|e| e.extend())
    }

    /// Logs recorded on a calendar date, as formatted by the logs service.
    async fn get_logs_by_date(
        &self,
        ctx: &Context<'_>,
        #[graphql(name = "dateInput")] date: String,
    ) -> Result<Option<Vec<Log>>> {
        dispatcher::<LogsDispatcher>(ctx)?
            .get_logs_by_date(&identity(ctx), &date)
            .await
            .map_err(|e| e.extend())
    }

    async fn get_logs_by_reason_and_date(
        &self,
        ctx: &Context<'_>,
        #[graphql(name = "reasonIdInput")] reason_id: ID,
        #[graphql(name = "dateInput")] date: String,
    ) -> Result<Option<Vec<Log>>> {
        dispatcher::<LogsDispatcher>(ctx)?
            .get_logs_by_reason_and_date(&identity(ctx), &reason_id, &date)
            .await
            .map_err(|e| e.extend())
    }
}

#[derive(Default)]
pub struct LogsMutation;

#[Object]
impl LogsMutation {
    async fn create_reason(
        &self,
        ctx: &Context<'_>,
        #[graphql(name = "reasonInput")] input: ReasonCreateInput,
    ) -> Result<Reason> {
        dispatcher::<LogsDispatcher>(ctx)?
            .create_reason(&identity(ctx), &input)
            .await
            .map_err(|e| e.extend())
    }

    async fn update_reason(
        &self,
        ctx: &Context<'_>,
        #[graphql(name = "reasonIdInput")] reason_id: ID,
        #[graphql(name = "reasonInput")] input: ReasonUpdateInput,
    ) -> Result<Reason> {
        dispatcher::<LogsDispatcher>(ctx)?
            .update_reason(&identity(ctx), &reason_id, &input)
            .await
            .map_err(|e| e.extend())
    }

    /// Deletes a reason. Fails with code 412 while any log references it.
    async fn delete_reason_by_id(
        &self,
        ctx: &Context<'_>,
        #[graphql(name = "reasonIdInput")] reason_id: ID,
    ) -> Result<String> {
        dispatcher::<LogsDispatcher>(ctx)?
            .delete_reason_by_id(&identity(ctx), &reason_id)
            .await
            .map_err(|e| e.extend())
    }

    async fn create_log(
        &self,
        ctx: &Context<'_>,
        #[graphql(name = "logInput")] input: LogCreateInput,
    ) -> Result<Log> {
        dispatcher::<LogsDispatcher>(ctx)?
            .create_log(&identity(ctx), &input)
            .await
            .map_err(|e| e.extend())
    }

    async fn update_log(
        &self,
        ctx: &Context<'_>,
        #[graphql(name = "logIdInput")] log_id: ID,
        #[graphql(name = "logInput")] input: LogUpdateInput,
    ) -> Result<Log> {
        dispatcher::<LogsDispatcher>(ctx)?
            .update_log(&identity(ctx), &log_id, &input)
            .await
            .map_err(|e| e.extend())
    }
}
