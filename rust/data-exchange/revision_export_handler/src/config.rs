use anyhow::Context;

mod var {
    env_var::env_var!(pub struct Bucket;);
    env_var::env_var!(pub struct PrefixStart;);
    env_var::env_var!(pub struct AnonymousUsage = "AnonymousUsage";);
    env_var::env_var!(pub struct Version = "Version";);
    env_var::env_var!(pub struct SolutionId = "SolutionId";);
    env_var::env_var!(pub struct Uuid = "UUID";);
}

/// The configuration parameters for the lambda.
///
/// Read once from environment variables when the lambda cold starts and shared by every
/// invocation afterwards.
#[derive(Debug, Clone)]
pub struct Config {
    /// The bucket exported assets are written to
    pub bucket: String,

    /// Root of every exported key, followed by `/<data set id>/<revision id>/<file name>`
    pub prefix_start: String,

    /// Anonymous usage reporting settings
    pub usage: UsageReporting,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UsageReporting {
    /// Only `AnonymousUsage=Yes` turns reporting on
    pub enabled: bool,
    pub solution_id: Option<String>,
    pub uuid: Option<String>,
    pub version: Option<String>,
}

impl Config {
    pub fn new(bucket: &str, prefix_start: &str, usage: UsageReporting) -> Self {
        Config {
            bucket: bucket.to_string(),
            prefix_start: prefix_start.to_string(),
            usage,
        }
    }

    pub fn from_env() -> anyhow::Result<Self> {
        let bucket = var::Bucket::new().context("BUCKET must be provided")?;
        let prefix_start = var::PrefixStart::new().context("PREFIX_START must be provided")?;
        let usage = UsageReporting::from_env()?;

        Ok(Config::new(&bucket, &prefix_start, usage))
    }
}

impl UsageReporting {
    const ENABLED: &'static str = "Yes";

    pub fn from_env() -> anyhow::Result<Self> {
        let enabled = var::AnonymousUsage::optional()
            .context("unable to read AnonymousUsage")?
            .is_some_and(|value| &*value == Self::ENABLED);

        Ok(Self {
            enabled,
            solution_id: var::SolutionId::optional()?.map(|v| v.to_string()),
            uuid: var::Uuid::optional()?.map(|v| v.to_string()),
            version: var::Version::optional()?.map(|v| v.to_string()),
        })
    }
}
