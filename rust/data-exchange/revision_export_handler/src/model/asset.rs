use super::RevisionRef;

/// An asset listed in a revision
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Asset {
    pub id: String,
    /// Path like name, e.g. `folder/sub/file1.csv`
    pub name: String,
}

impl Asset {
    pub fn file_name(&self) -> &str {
        file_name(&self.name)
    }
}

/// Returns the segment after the last `/`, or the whole name when there is none
pub fn file_name(name: &str) -> &str {
    name.rsplit('/').next().unwrap_or(name)
}

/// Where a single asset is written by the export job
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetDestination {
    pub asset_id: String,
    pub bucket: String,
    pub key: String,
}

impl AssetDestination {
    pub fn new(asset: &Asset, bucket: &str, key_prefix: &str) -> Self {
        Self {
            asset_id: asset.id.clone(),
            bucket: bucket.to_string(),
            key: format!("{}/{}", key_prefix, asset.file_name()),
        }
    }
}

/// Maps each asset to `bucket` under `prefix_start/dataset_id/revision_id/file_name`.
///
/// The output keeps the listing order. Assets that share a file name map to the same key and
/// are all kept.
pub fn asset_destinations(
    assets: &[Asset],
    revision: &RevisionRef,
    bucket: &str,
    prefix_start: &str,
) -> Vec<AssetDestination> {
    let key_prefix = revision.key_prefix(prefix_start);

    assets
        .iter()
        .map(|asset| AssetDestination::new(asset, bucket, &key_prefix))
        .collect()
}

/// Everything needed to create an `EXPORT_ASSETS_TO_S3` job
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportJobRequest {
    pub dataset_id: String,
    pub revision_id: String,
    pub destinations: Vec<AssetDestination>,
}

impl ExportJobRequest {
    pub fn new(revision: &RevisionRef, destinations: Vec<AssetDestination>) -> Self {
        Self {
            dataset_id: revision.dataset_id.clone(),
            revision_id: revision.revision_id.clone(),
            destinations,
        }
    }
}
