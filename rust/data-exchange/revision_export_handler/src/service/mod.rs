pub mod dataexchange;
pub mod metrics;
