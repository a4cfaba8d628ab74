use env_var::VarNameErr;
use thiserror::Error;

mod var {
    env_var::env_var!(pub struct Environment;);
}

/// The current environment the application is running in
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display, strum::EnumString)]
pub enum Environment {
    /// Production environment
    #[strum(serialize = "prod")]
    Production,
    /// Dev and or staging environment
    #[strum(serialize = "dev")]
    Develop,
    /// Running on a developer machine
    #[strum(serialize = "local")]
    Local,
}

/// An error which can occur when constructing an [Environment]
#[derive(Debug, Error)]
pub enum EnvironmentErr {
    /// The `ENVIRONMENT` variable could not be read
    #[error("{0}")]
    Var(#[from] VarNameErr),
    /// The value of `ENVIRONMENT` is not a known environment
    #[error("could not convert {0} into an environment value")]
    UnknownValue(String),
}

impl Environment {
    /// Attempt to read the environment from the `ENVIRONMENT` variable
    #[tracing::instrument(err, level = tracing::Level::TRACE)]
    pub fn new_from_env() -> Result<Self, EnvironmentErr> {
        let value = var::Environment::new()?;
        value
            .parse()
            .map_err(|_| EnvironmentErr::UnknownValue(value.to_string()))
    }

    /// Read the environment, falling back to [Environment::Production] when it is missing or unknown
    pub fn new_or_prod() -> Self {
        Self::new_from_env().unwrap_or(Environment::Production)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use env_var::with_vars;

    #[test]
    fn parses_known_values() {
        assert_eq!("prod".parse::<Environment>().unwrap(), Environment::Production);
        assert_eq!("dev".parse::<Environment>().unwrap(), Environment::Develop);
        assert_eq!("local".parse::<Environment>().unwrap(), Environment::Local);
        assert_eq!(Environment::Develop.to_string(), "dev");
    }

    #[test]
    fn reads_from_env() {
        let env = with_vars(&[("ENVIRONMENT", "local")], Environment::new_from_env).unwrap();
        assert_eq!(env, Environment::Local);
    }

    #[test]
    fn unknown_value_is_reported() {
        let err = with_vars(&[("ENVIRONMENT", "staging")], Environment::new_from_env).unwrap_err();
        assert!(matches!(err, EnvironmentErr::UnknownValue(value) if value == "staging"));
    }

    #[test]
    fn falls_back_to_prod() {
        assert_eq!(with_vars(&[], Environment::new_or_prod), Environment::Production);
        assert_eq!(
            with_vars(&[("ENVIRONMENT", "qa")], Environment::new_or_prod),
            Environment::Production
        );
    }
}
