use lambda_runtime::{
    Error, LambdaEvent,
    tracing::{self},
};

use crate::{
    config::{Config, UsageReporting},
    error::ExportError,
    model::{
        ExportJobRequest, JobResult, RevisionPublishedEvent, UsageMetric, asset_destinations,
    },
    service::{dataexchange::DataExchange, metrics::Metrics},
};


/// Handles the "Revision Published To Data Set" eventbridge event
#[tracing::instrument(skip_all)]
pub async fn handler(
    dataexchange: &DataExchange,
    metrics: &Metrics,
    config: &Config,
    event: LambdaEvent<RevisionPublishedEvent>,
) -> Result<JobResult, Error> {
    tracing::debug!(event=?event.payload, "processing event");

    export_revision(dataexchange, metrics, config, &event.payload)
        .await
        .map_err(|e| {
            tracing::error!(error=?e, "unable to export revision");
            Error::from(e)
        })
}

/// Lists the assets of the published revision, then creates and starts a job exporting all of
/// them into the configured bucket.
///
/// Nothing is retried or rolled back. If starting the job fails the created job is left as is.
#[tracing::instrument(
    skip_all,
    fields(
        dataset_id = tracing::field::Empty,
        revision_id = tracing::field::Empty,
        job_id = tracing::field::Empty
    )
)]
pub async fn export_revision(
    dataexchange: &DataExchange,
    metrics: &Metrics,
    config: &Config,
    event: &RevisionPublishedEvent,
) -> Result<JobResult, ExportError> {
    let revision = event.revision_ref()?;

    let span = tracing::Span::current();
    span.record("dataset_id", revision.dataset_id.as_str());
    span.record("revision_id", revision.revision_id.as_str());

    let assets = dataexchange
        .list_revision_assets(&revision.dataset_id, &revision.revision_id)
        .await
        .map_err(ExportError::ListAssets)?;

    let destinations =
        asset_destinations(&assets, &revision, &config.bucket, &config.prefix_start);
    let request = ExportJobRequest::new(&revision, destinations);

    tracing::debug!(request=?request, "creating export job");

    let job = dataexchange
        .create_export_job(&request)
        .await
        .map_err(ExportError::CreateJob)?;

    let job_id = job
        .id()
        .ok_or_else(|| {
            ExportError::CreateJob(anyhow::anyhow!("job arn {} has no job id", job.arn))
        })?
        .to_string();

    span.record("job_id", job_id.as_str());
    tracing::info!(job_id=%job_id, "created export job");

    dataexchange
        .start_job(&job_id)
        .await
        .map_err(|source| ExportError::StartJob {
            job_id: job_id.clone(),
            source,
        })?;

    if config.usage.enabled {
        report_usage(metrics, &config.usage, assets.len()).await;
    }

    Ok(JobResult::started(revision, job_id))
}

/// Failures are logged and dropped so they never fail the export
async fn report_usage(metrics: &Metrics, usage: &UsageReporting, asset_count: usize) {
    let metric = UsageMetric::new(usage, asset_count, chrono::Utc::now());

    if let Err(e) = metrics.send_usage(&metric).await {
        tracing::warn!(error=?e, "unable to report anonymous usage");
    }
}
