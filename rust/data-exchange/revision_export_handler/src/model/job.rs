use serde::{Deserialize, Serialize};

use super::RevisionRef;

/// A job returned by `CreateJob`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedJob {
    pub arn: String,
}

impl CreatedJob {
    /// The job id is the second `/` separated segment of the arn,
    /// e.g. `arn:aws:dataexchange:us-east-1:123456789012:jobs/<id>`
    pub fn id(&self) -> Option<&str> {
        self.arn.split('/').nth(1)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum JobStatus {
    #[serde(rename = "IN_PROGRESS")]
    InProgress,
}

/// The value returned to the lambda runtime once the export job has been started
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct JobResult {
    pub message: String,
    pub data_set_id: String,
    pub revision_id: String,
    pub job_id: String,
    pub job_status: JobStatus,
}

impl JobResult {
    pub const STARTED_MESSAGE: &'static str = "Subscription Started";

    pub fn started(revision: RevisionRef, job_id: String) -> Self {
        Self {
            message: Self::STARTED_MESSAGE.to_string(),
            data_set_id: revision.dataset_id,
            revision_id: revision.revision_id,
            job_id,
            job_status: JobStatus::InProgress,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn job_id_is_second_arn_segment() {
        let job = CreatedJob {
            arn: "arn:aws:dataexchange:region:acct:jobs/JOB123".to_string(),
        };

        assert_eq!(job.id(), Some("JOB123"));
    }

    #[test]
    fn arn_without_slash_has_no_id() {
        let job = CreatedJob {
            arn: "arn:aws:dataexchange:region:acct:jobs".to_string(),
        };

        assert_eq!(job.id(), None);
    }

    #[test]
    fn result_serializes_with_runtime_field_names() {
        let result = JobResult::started(
            RevisionRef {
                dataset_id: "ds1".to_string(),
                revision_id: "rv1".to_string(),
            },
            "JOB123".to_string(),
        );

        assert_eq!(
            serde_json::to_value(&result).unwrap(),
            json!({
                "Message": "Subscription Started",
                "DataSetId": "ds1",
                "RevisionId": "rv1",
                "JobId": "JOB123",
                "JobStatus": "IN_PROGRESS"
            })
        );
    }
}
