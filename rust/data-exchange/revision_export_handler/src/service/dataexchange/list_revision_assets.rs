use anyhow::Context;
use aws_sdk_dataexchange as dataexchange;
use lambda_runtime::tracing;

use crate::model::Asset;

/// Only the first page of the listing is read.
#[tracing::instrument(skip(client))]
pub(in crate::service::dataexchange) async fn list_revision_assets(
    client: &dataexchange::Client,
    dataset_id: &str,
    revision_id: &str,
) -> anyhow::Result<Vec<Asset>> {
    let resp = client
        .list_revision_assets()
        .data_set_id(dataset_id)
        .revision_id(revision_id)
        .send()
        .await
        .context(format!(
            "could not list assets of revision {revision_id} in data set {dataset_id}"
        ))?;

    let assets: Vec<Asset> = resp
        .assets()
        .iter()
        .map(|entry| Asset {
            id: entry.id().to_string(),
            name: entry.name().to_string(),
        })
        .collect();

    tracing::trace!(asset_count = assets.len(), "listed revision assets");

    Ok(assets)
}
