mod asset;
mod event;
mod job;
mod usage;

pub use asset::{Asset, AssetDestination, ExportJobRequest, asset_destinations, file_name};
pub use event::{RevisionPublishedDetail, RevisionPublishedEvent, RevisionRef};
pub use job::{CreatedJob, JobResult, JobStatus};
pub use usage::{UsageData, UsageMetric};
