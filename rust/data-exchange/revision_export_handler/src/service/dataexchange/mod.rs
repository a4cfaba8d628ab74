mod create_export_job;
mod list_revision_assets;
mod start_job;

use anyhow::Result;
use aws_sdk_dataexchange as dataexchange;
use lambda_runtime::tracing;
#[allow(unused_imports)]
use mockall::automock;

use crate::model::{Asset, CreatedJob, ExportJobRequest};

#[cfg(test)]
pub use MockDataExchangeClient as DataExchange;
#[cfg(not(test))]
pub use DataExchangeClient as DataExchange;

#[derive(Clone, Debug)]
pub struct DataExchangeClient {
    /// Inner Data Exchange client
    inner: dataexchange::Client,
}

#[cfg_attr(test, automock)]
impl DataExchangeClient {
    pub fn new(inner: dataexchange::Client) -> Self {
        Self { inner }
    }

    /// Lists the assets of a revision in the order the service returns them.
    #[tracing::instrument(skip(self))]
    pub async fn list_revision_assets(
        &self,
        dataset_id: &str,
        revision_id: &str,
    ) -> Result<Vec<Asset>> {
        list_revision_assets::list_revision_assets(&self.inner, dataset_id, revision_id).await
    }

    /// Creates an `EXPORT_ASSETS_TO_S3` job. The job is not started.
    #[tracing::instrument(skip(self))]
    pub async fn create_export_job(&self, request: &ExportJobRequest) -> Result<CreatedJob> {
        create_export_job::create_export_job(&self.inner, request).await
    }

    #[tracing::instrument(skip(self))]
    pub async fn start_job(&self, job_id: &str) -> Result<()> {
        start_job::start_job(&self.inner, job_id).await
    }
}
