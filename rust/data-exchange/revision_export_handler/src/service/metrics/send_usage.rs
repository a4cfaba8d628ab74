use lambda_runtime::tracing;

use crate::{error::MetricsReportError, model::UsageMetric};

#[tracing::instrument(skip(client))]
pub(in crate::service::metrics) async fn send_usage(
    client: &reqwest::Client,
    endpoint: &str,
    metric: &UsageMetric,
) -> Result<(), MetricsReportError> {
    // json() sets Content-Type: application/json
    let response = client.post(endpoint).json(metric).send().await?;

    let status = response.status();
    if !status.is_success() {
        return Err(MetricsReportError::Status {
            status_code: status.as_u16(),
        });
    }

    tracing::trace!(status = status.as_u16(), "sent usage metric");

    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::{
        error::MetricsReportError,
        model::{UsageData, UsageMetric},
        service::metrics::MetricsClient,
    };
    use mockito::Matcher;
    use serde_json::json;

    fn metric() -> UsageMetric {
        UsageMetric {
            solution: Some("SO0000".to_string()),
            uuid: Some("9a1f0c5e-uuid".to_string()),
            timestamp: "2024-01-02 03:04:05.123456".to_string(),
            data: UsageData {
                version: Some("v1.0.0".to_string()),
                asset_count: 2,
            },
        }
    }

    #[tokio::test]
    async fn posts_metric_as_json() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/generic")
            .match_header("content-type", "application/json")
            .match_body(Matcher::Json(json!({
                "Solution": "SO0000",
                "UUID": "9a1f0c5e-uuid",
                "TimeStamp": "2024-01-02 03:04:05.123456",
                "Data": { "Version": "v1.0.0", "AssetCount": 2 }
            })))
            .with_status(200)
            .create_async()
            .await;

        let client = MetricsClient::with_endpoint(
            reqwest::Client::new(),
            format!("{}/generic", server.url()),
        );

        client.send_usage(&metric()).await.unwrap();

        mock.assert_async().await;
    }

    #[tokio::test]
    async fn error_status_is_reported() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/generic")
            .with_status(503)
            .create_async()
            .await;

        let client = MetricsClient::with_endpoint(
            reqwest::Client::new(),
            format!("{}/generic", server.url()),
        );

        let err = client.send_usage(&metric()).await.unwrap_err();

        assert!(matches!(
            err,
            MetricsReportError::Status { status_code: 503 }
        ));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn unreachable_endpoint_is_a_request_error() {
        let client = MetricsClient::with_endpoint(
            reqwest::Client::new(),
            "http://127.0.0.1:1/generic".to_string(),
        );

        let err = client.send_usage(&metric()).await.unwrap_err();

        assert!(matches!(err, MetricsReportError::Request(_)));
    }
}
