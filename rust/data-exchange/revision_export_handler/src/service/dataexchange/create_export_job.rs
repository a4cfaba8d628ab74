use anyhow::Context;
use aws_sdk_dataexchange as dataexchange;
use dataexchange::types::{
    AssetDestinationEntry, ExportAssetsToS3RequestDetails, RequestDetails, Type,
};
use lambda_runtime::tracing;

use crate::model::{CreatedJob, ExportJobRequest};

#[tracing::instrument(skip(client))]
pub(in crate::service::dataexchange) async fn create_export_job(
    client: &dataexchange::Client,
    request: &ExportJobRequest,
) -> anyhow::Result<CreatedJob> {
    let asset_destinations = request
        .destinations
        .iter()
        .map(|destination| {
            AssetDestinationEntry::builder()
                .asset_id(&destination.asset_id)
                .bucket(&destination.bucket)
                .key(&destination.key)
                .build()
                .context("can build asset destination entry")
        })
        .collect::<anyhow::Result<Vec<AssetDestinationEntry>>>()?;

    let export_details = ExportAssetsToS3RequestDetails::builder()
        .set_asset_destinations(Some(asset_destinations))
        .data_set_id(&request.dataset_id)
        .revision_id(&request.revision_id)
        .build()
        .context("can build export assets to s3 details")?;

    let details = RequestDetails::builder()
        .export_assets_to_s3(export_details)
        .build();

    let resp = client
        .create_job()
        .r#type(Type::ExportAssetsToS3)
        .details(details)
        .send()
        .await
        .context(format!(
            "could not create export job for revision {} in data set {}",
            request.revision_id, request.dataset_id
        ))?;

    let arn = resp.arn().context("created job has no arn")?;

    Ok(CreatedJob {
        arn: arn.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::AssetDestination;
    use aws_sdk_dataexchange::{
        Client,
        error::ErrorMetadata,
        operation::create_job::{CreateJobError, CreateJobOutput},
    };
    use aws_smithy_mocks::{mock, mock_client};

    const JOB_ARN: &str = "arn:aws:dataexchange:us-east-1:123456789012:jobs/JOB123";

    fn request() -> ExportJobRequest {
        ExportJobRequest {
            dataset_id: "ds1".to_string(),
            revision_id: "rv1".to_string(),
            destinations: vec![
                AssetDestination {
                    asset_id: "a1".to_string(),
                    bucket: "b".to_string(),
                    key: "exports/ds1/rv1/file1.csv".to_string(),
                },
                AssetDestination {
                    asset_id: "a2".to_string(),
                    bucket: "b".to_string(),
                    key: "exports/ds1/rv1/file2.csv".to_string(),
                },
            ],
        }
    }

    #[tokio::test]
    async fn sends_export_to_s3_job_with_every_destination() {
        let create = mock!(Client::create_job)
            .match_requests(|req| {
                let Some(export) = req.details().and_then(|d| d.export_assets_to_s3()) else {
                    return false;
                };
                let destinations: Vec<(&str, &str, Option<&str>)> = export
                    .asset_destinations()
                    .iter()
                    .map(|entry| (entry.asset_id(), entry.bucket(), entry.key()))
                    .collect();

                req.r#type() == Some(&Type::ExportAssetsToS3)
                    && export.data_set_id() == "ds1"
                    && export.revision_id() == "rv1"
                    && destinations
                        == vec![
                            ("a1", "b", Some("exports/ds1/rv1/file1.csv")),
                            ("a2", "b", Some("exports/ds1/rv1/file2.csv")),
                        ]
            })
            .then_output(|| {
                CreateJobOutput::builder()
                    .arn(JOB_ARN)
                    .id("JOB123")
                    .build()
            });
        let client = mock_client!(aws_sdk_dataexchange, [&create]);

        let job = create_export_job(&client, &request()).await.unwrap();

        assert_eq!(job.arn, JOB_ARN);
        assert_eq!(job.id(), Some("JOB123"));
        assert_eq!(create.num_calls(), 1);
    }

    #[tokio::test]
    async fn response_without_arn_is_an_error() {
        let create =
            mock!(Client::create_job).then_output(|| CreateJobOutput::builder().id("JOB123").build());
        let client = mock_client!(aws_sdk_dataexchange, [&create]);

        let err = create_export_job(&client, &request()).await.unwrap_err();

        assert_eq!(err.to_string(), "created job has no arn");
    }

    #[tokio::test]
    async fn service_error_names_the_revision() {
        let create = mock!(Client::create_job).then_error(|| {
            CreateJobError::generic(
                ErrorMetadata::builder()
                    .code("AccessDeniedException")
                    .message("not subscribed")
                    .build(),
            )
        });
        let client = mock_client!(aws_sdk_dataexchange, [&create]);

        let err = create_export_job(&client, &request()).await.unwrap_err();

        assert_eq!(
            err.to_string(),
            "could not create export job for revision rv1 in data set ds1"
        );
        assert_eq!(create.num_calls(), 1);
    }
}
