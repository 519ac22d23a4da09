use std::sync::Arc;

use async_graphql::{EmptySubscription, MergedObject, Schema};

use crate::dispatch::{AuthDispatcher, LogsDispatcher};
use crate::graphql::resolvers::{AuthMutation, AuthQuery, LogsMutation, LogsQuery};

#[derive(MergedObject, Default)]
pub struct Query(AuthQuery, LogsQuery);

#[derive(MergedObject, Default)]
pub struct Mutation(AuthMutation, LogsMutation);

pub type GatewaySchema = Schema<Query, Mutation, EmptySubscription>;

/// Builds the gateway schema with both dispatchers registered as context data.
///
/// Introspection stays enabled.
pub fn build_schema(auth: AuthDispatcher, logs: LogsDispatcher) -> GatewaySchema {
    Schema::build(Query::default(), Mutation::default(), EmptySubscription)
        .data(Arc::new(auth))
        .data(Arc::new(logs))
        .finish()
}
