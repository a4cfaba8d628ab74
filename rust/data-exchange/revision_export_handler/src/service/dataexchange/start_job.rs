use anyhow::Context;
use aws_sdk_dataexchange as dataexchange;
use lambda_runtime::tracing;

#[tracing::instrument(skip(client))]
pub(in crate::service::dataexchange) async fn start_job(
    client: &dataexchange::Client,
    job_id: &str,
) -> anyhow::Result<()> {
    client
        .start_job()
        .job_id(job_id)
        .send()
        .await
        .context(format!("could not start job {job_id}"))?;

    Ok(())
}
