#![forbid(unsafe_code)]

//! Error types for the public API.
//!
//! Guide operations themselves are infallible: out-of-order calls are
//! ignored and missing geometry is skipped. Errors come only from loading
//! configuration and from posting to a guide that no longer exists.

use std::fmt;

use crate::config::ConfigError;

/// Top-level error type.
#[derive(Debug)]
pub enum Error {
    /// Loading or validating a [`GuideConfig`](crate::GuideConfig) failed.
    Config(ConfigError),
    /// The guide a [`GuideRemote`](crate::GuideRemote) points at was dropped.
    Disconnected,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(e) => write!(f, "config error: {e}"),
            Self::Disconnected => write!(f, "guide is gone"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Config(e) => Some(e),
            Self::Disconnected => None,
        }
    }
}

impl From<ConfigError> for Error {
    fn from(err: ConfigError) -> Self {
        Self::Config(err)
    }
}

impl<M> From<waymark_runtime::Disconnected<M>> for Error {
    fn from(_: waymark_runtime::Disconnected<M>) -> Self {
        Self::Disconnected
    }
}

/// Standard result type for waymark APIs.
pub type Result<T> = std::result::Result<T, Error>;
