//! Typed access to environment variables.
//!
//! [env_var!] declares one newtype per variable. Holding an instance of that type proves the
//! variable was present when it was read, so callers do not need to re-check the environment.

// Re-export paste so users don't need to depend on it directly
pub use paste;
use std::env::VarError;
use thiserror::Error;


#[cfg(any(test, feature = "testing"))]
mod testing_harness {
    use super::VarNameErr;
    use std::{cell::RefCell, env::VarError};

    type Getter = Box<dyn Fn(&'static str) -> Result<String, VarError>>;

    thread_local! {
        static MOCK_GETTER: RefCell<Option<Getter>> = const { RefCell::new(None) };
    }

    /// Reads `name` through the getter installed by [with_mock_env], falling back to the process
    /// environment when none is installed on this thread.
    pub fn read_env(name: &'static str) -> Result<String, VarNameErr> {
        MOCK_GETTER
            .with_borrow(|getter| match getter {
                Some(mock) => mock(name),
                None => std::env::var(name),
            })
            .map_err(|err| VarNameErr {
                var_name: name,
                err,
            })
    }

    /// Runs `cb` with every env var read on the current thread answered by `mock`.
    pub fn with_mock_env<F, Cb, U>(mock: F, cb: Cb) -> U
    where
        F: Fn(&'static str) -> Result<String, VarError> + 'static,
        Cb: FnOnce() -> U,
    {
        let previous = MOCK_GETTER.replace(Some(Box::new(mock)));
        let output = cb();
        MOCK_GETTER.set(previous);
        output
    }

    /// Runs `cb` as if `vars` were the only variables in the environment.
    pub fn with_vars<Cb, U>(vars: &[(&'static str, &'static str)], cb: Cb) -> U
    where
        Cb: FnOnce() -> U,
    {
        let vars = vars.to_vec();
        with_mock_env(
            move |name| {
                vars.iter()
                    .find(|(key, _)| *key == name)
                    .map(|(_, value)| value.to_string())
                    .ok_or(VarError::NotPresent)
            },
            cb,
        )
    }
}

#[cfg(any(test, feature = "testing"))]
pub use testing_harness::{read_env, with_mock_env, with_vars};

/// Reads `name` from the process environment.
#[cfg(not(any(test, feature = "testing")))]
pub fn read_env(name: &'static str) -> Result<String, VarNameErr> {
    std::env::var(name).map_err(|err| VarNameErr {
        var_name: name,
        err,
    })
}

/// The type of error that is produced by this crate
#[derive(Debug, Error)]
#[error("could not read env var {var_name}: {err}")]
pub struct VarNameErr {
    var_name: &'static str,
    err: VarError,
}

impl VarNameErr {
    /// The name of the variable that failed to read
    pub fn var_name(&self) -> &'static str {
        self.var_name
    }

    /// True when the variable is simply unset, as opposed to holding invalid unicode
    pub fn is_not_present(&self) -> bool {
        matches!(self.err, VarError::NotPresent)
    }
}

/// Declares a newtype backed by a single environment variable.
///
/// Without an explicit name the variable is the SCREAMING_SNAKE_CASE form of the type name:
///
/// ```
/// env_var::env_var!(pub struct PrefixStart;);
/// assert_eq!(PrefixStart::KEY, "PREFIX_START");
///
/// env_var::env_var!(pub struct AnonymousUsage = "AnonymousUsage";);
/// assert_eq!(AnonymousUsage::KEY, "AnonymousUsage");
/// ```
#[macro_export]
macro_rules! env_var {
    (
        $(#[$attr:meta])*
        $v:vis struct $n:ident;
    ) => {
        $crate::paste::paste! {
            $crate::env_var!(
                $(#[$attr])*
                $v struct $n = stringify!([<$n:snake:upper>]);
            );
        }
    };
    (
        $(#[$attr:meta])*
        $v:vis struct $n:ident = $key:expr;
    ) => {
        $(#[$attr])*
        #[derive(Debug)]
        $v struct $n(std::sync::Arc<str>);

        #[allow(dead_code)]
        impl $n {
            /// Name of the environment variable backing this type
            $v const KEY: &'static str = $key;

            /// Reads the variable, failing if it is unset or not valid unicode
            $v fn new() -> Result<Self, $crate::VarNameErr> {
                $crate::read_env(Self::KEY).map(|value| Self(std::sync::Arc::from(value)))
            }

            /// Reads the variable, treating an unset variable as [None]
            $v fn optional() -> Result<Option<Self>, $crate::VarNameErr> {
                match Self::new() {
                    Ok(value) => Ok(Some(value)),
                    Err(err) if err.is_not_present() => Ok(None),
                    Err(err) => Err(err),
                }
            }

            /// Returns an Arc<str> of the contained value
            $v fn as_arc(&self) -> std::sync::Arc<str> {
                self.0.clone()
            }
        }

        impl std::ops::Deref for $n {
            type Target = str;

            fn deref(&self) -> &Self::Target {
                &self.0
            }
        }

        impl std::convert::AsRef<str> for $n {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl std::fmt::Display for $n {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}
