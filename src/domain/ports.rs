use crate::domain::model::{Query, QueryResult};
use crate::utils::error::Result;
use async_trait::async_trait;

/// The aggregation service, treated as a black box: accepts a structured
/// query, returns pre-aggregated analytics data or fails with a message.
#[async_trait]
pub trait Aggregator: Send + Sync {
    async fn find(&self, query: &Query) -> Result<QueryResult>;
}

pub trait ConfigProvider: Send + Sync {
    fn service_url(&self) -> &str;
}
