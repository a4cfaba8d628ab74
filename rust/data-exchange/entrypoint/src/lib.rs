#![deny(missing_docs)]
//! This crate provides a standardized initialization process that should be used across entrypoint crates.
//! It loads local `.env` files, installs the panic hook and configures the tracing subscriber.
//!
//! The log level is an explicit input rather than something the subscriber reads from the
//! environment. A binary reads it with [LogLevel::from_env] and hands it over before it loads the
//! rest of its configuration.

mod environment;
mod level;

pub use environment::{Environment, EnvironmentErr};
pub use level::LogLevel;

use tracing_subscriber::filter::LevelFilter;

/// Defines the behaviour for initializing a binary
#[derive(Debug)]
pub struct Entrypoint {
    env: Environment,
    level: LogLevel,
}

/// sentinel struct which guarantees that we called [Entrypoint::init]
#[derive(Debug)]
pub struct InitializedEntrypoint(());

impl Entrypoint {
    /// Load a `.env` file if present and resolve the [Environment] from the process env
    pub fn from_env() -> Self {
        dotenv::dotenv().ok();
        Self::new(Environment::new_or_prod())
    }

    /// create a new instance of [Self] from an input [Environment], logging at [LogLevel::Error]
    pub fn new(env: Environment) -> Self {
        Self {
            env,
            level: LogLevel::default(),
        }
    }

    /// set the most verbose level that will be emitted
    pub fn with_level(mut self, level: LogLevel) -> Self {
        self.level = level;
        self
    }

    /// the environment this entrypoint will initialize for
    pub fn environment(&self) -> Environment {
        self.env
    }

    /// the level this entrypoint will initialize with
    pub fn level(&self) -> LogLevel {
        self.level
    }

    /// consume self, initialize this binary, and return a proof that it was initialized [InitializedEntrypoint]
    pub fn init(self) -> InitializedEntrypoint {
        std::panic::set_hook(Box::new(tracing_panic::panic_hook));

        let filter = LevelFilter::from(self.level);

        match self.env {
            Environment::Local => {
                tracing_subscriber::fmt()
                    .with_ansi(true)
                    .with_max_level(filter)
                    .with_file(true)
                    .with_line_number(true)
                    .pretty()
                    .init();
            }
            Environment::Production | Environment::Develop => {
                tracing_subscriber::fmt()
                    .with_ansi(false)
                    .with_max_level(filter)
                    .with_file(true)
                    .with_line_number(true)
                    .json()
                    .with_current_span(true)
                    .with_span_list(false)
                    .flatten_event(true)
                    .init();
            }
        }

        InitializedEntrypoint(())
    }
}
