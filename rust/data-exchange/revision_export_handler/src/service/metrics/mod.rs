mod send_usage;

use lambda_runtime::tracing;
#[allow(unused_imports)]
use mockall::automock;

use crate::{error::MetricsReportError, model::UsageMetric};

#[cfg(test)]
pub use MockMetricsClient as Metrics;
#[cfg(not(test))]
pub use MetricsClient as Metrics;

/// The collector anonymous usage metrics are posted to
pub const METRICS_ENDPOINT: &str = "https://metrics.awssolutionsbuilder.com/generic";

#[derive(Clone, Debug)]
pub struct MetricsClient {
    client: reqwest::Client,
    endpoint: String,
}

#[cfg_attr(test, automock)]
impl MetricsClient {
    pub fn new(client: reqwest::Client) -> Self {
        Self::with_endpoint(client, METRICS_ENDPOINT.to_string())
    }

    pub fn with_endpoint(client: reqwest::Client, endpoint: String) -> Self {
        Self { client, endpoint }
    }

    /// Posts the metric as json. Any transport failure or non success status is an error.
    #[tracing::instrument(skip(self))]
    pub async fn send_usage(&self, metric: &UsageMetric) -> Result<(), MetricsReportError> {
        send_usage::send_usage(&self.client, &self.endpoint, metric).await
    }
}
