use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::config::UsageReporting;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.6f";

/// Anonymous usage ping sent after a job is started
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UsageMetric {
    #[serde(rename = "Solution")]
    pub solution: Option<String>,
    #[serde(rename = "UUID")]
    pub uuid: Option<String>,
    /// UTC, `YYYY-MM-DD HH:MM:SS.ffffff`
    #[serde(rename = "TimeStamp")]
    pub timestamp: String,
    #[serde(rename = "Data")]
    pub data: UsageData,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct UsageData {
    pub version: Option<String>,
    pub asset_count: usize,
}

impl UsageMetric {
    pub fn new(usage: &UsageReporting, asset_count: usize, at: DateTime<Utc>) -> Self {
        Self {
            solution: usage.solution_id.clone(),
            uuid: usage.uuid.clone(),
            timestamp: at.format(TIMESTAMP_FORMAT).to_string(),
            data: UsageData {
                version: usage.version.clone(),
                asset_count,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Timelike};
    use serde_json::json;

    #[test]
    fn serializes_collector_payload() {
        let at = Utc
            .with_ymd_and_hms(2024, 1, 2, 3, 4, 5)
            .unwrap()
            .with_nanosecond(123_456_789)
            .unwrap();
        let usage = UsageReporting {
            enabled: true,
            solution_id: Some("SO0000".to_string()),
            uuid: Some("9a1f0c5e-uuid".to_string()),
            version: Some("v1.0.0".to_string()),
        };

        let metric = UsageMetric::new(&usage, 2, at);

        assert_eq!(
            serde_json::to_value(&metric).unwrap(),
            json!({
                "Solution": "SO0000",
                "UUID": "9a1f0c5e-uuid",
                "TimeStamp": "2024-01-02 03:04:05.123456",
                "Data": { "Version": "v1.0.0", "AssetCount": 2 }
            })
        );
    }

    #[test]
    fn unset_fields_are_null() {
        let at = Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();

        let metric = UsageMetric::new(&UsageReporting::default(), 0, at);
        let value = serde_json::to_value(&metric).unwrap();

        assert_eq!(value["Solution"], serde_json::Value::Null);
        assert_eq!(value["Data"]["Version"], serde_json::Value::Null);
        assert_eq!(value["TimeStamp"], "2024-01-02 03:04:05.000000");
    }
}
