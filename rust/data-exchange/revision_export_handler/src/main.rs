#![recursion_limit = "256"]

use anyhow::Context;
use entrypoint::{Entrypoint, LogLevel};
use lambda_runtime::{Error, LambdaEvent, run, service_fn, tracing};
use revision_export_handler::{
    config::Config, handler::handler, model::RevisionPublishedEvent, service,
};
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<(), Error> {
    Entrypoint::from_env()
        .with_level(LogLevel::from_env())
        .init();

    let config = Config::from_env()
        .context("all necessary env vars should be available")
        .inspect_err(|e| tracing::error!(error=?e, "unable to load config"))?;

    tracing::info!("initiating lambda");

    let dataexchange_client = service::dataexchange::DataExchange::new(
        aws_sdk_dataexchange::Client::new(
            &aws_config::defaults(aws_config::BehaviorVersion::latest())
                .load()
                .await,
        ),
    );

    tracing::trace!("initialized data exchange client");

    let metrics_client = service::metrics::Metrics::new(reqwest::Client::new());

    // Shared references
    let shared_dataexchange_client = Arc::new(dataexchange_client);
    let shared_metrics_client = Arc::new(metrics_client);
    let shared_config = Arc::new(config);

    let func = service_fn(move |event: LambdaEvent<RevisionPublishedEvent>| {
        let dataexchange_client = shared_dataexchange_client.clone();
        let metrics_client = shared_metrics_client.clone();
        let config = shared_config.clone();

        async move { handler(&dataexchange_client, &metrics_client, &config, event).await }
    });

    run(func).await
}
