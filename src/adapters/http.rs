use crate::core::{Aggregator, Query, QueryResult, Result};
use async_trait::async_trait;
use reqwest::Client;

/// Aggregation-service client over HTTP. The query is posted as JSON and
/// the response body is passed through as-is; the core treats the service
/// transport as opaque and this adapter is one concrete collaborator.
#[derive(Debug, Clone)]
pub struct HttpAggregator {
    endpoint: String,
    client: Client,
}

impl HttpAggregator {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            client: Client::new(),
        }
    }
}

#[async_trait]
impl Aggregator for HttpAggregator {
    async fn find(&self, query: &Query) -> Result<QueryResult> {
        tracing::debug!("Sending aggregation request to: {}", self.endpoint);
        let response = self.client.post(&self.endpoint).json(query).send().await?;

        tracing::debug!("Aggregation response status: {}", response.status());
        let payload = response.error_for_status()?.json().await?;
        Ok(payload)
    }
}
