use thiserror::Error;

/// Failures that abort an invocation. Each one is logged and returned to the lambda runtime as is.
#[derive(Debug, Error)]
pub enum ExportError {
    /// The event is missing the data set or revision id
    #[error("malformed event: {0}")]
    MalformedEvent(&'static str),
    #[error("unable to list revision assets: {0:#}")]
    ListAssets(#[source] anyhow::Error),
    #[error("unable to create export job: {0:#}")]
    CreateJob(#[source] anyhow::Error),
    /// The job was created but could not be started. It is left as created.
    #[error("unable to start export job {job_id}: {source:#}")]
    StartJob {
        job_id: String,
        #[source]
        source: anyhow::Error,
    },
}

/// Failure to deliver the anonymous usage metric. Never fails an invocation.
#[derive(Debug, Error)]
pub enum MetricsReportError {
    #[error("unable to send usage metric: {0}")]
    Request(#[from] reqwest::Error),
    #[error("metrics endpoint responded with status {status_code}")]
    Status { status_code: u16 },
}
