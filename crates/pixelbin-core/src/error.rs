//! Error types for the URL codec and client configuration.

use std::path::PathBuf;
use thiserror::Error;

/// Error returned by the transformation URL codec.
///
/// Every variant is an input-rejection signal: the caller passed a URL or
/// descriptor the codec cannot accept, and retrying with the same input
/// will fail the same way.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UrlError {
    /// URL does not match any recognized CDN shape, or its pattern failed to parse.
    #[error("{0}")]
    InvalidUrl(String),

    /// Descriptor is missing a required field or carries a malformed operation parameter.
    #[error("{0}")]
    IllegalArgument(String),

    /// `dpr` out of range or `f_auto` not a boolean.
    #[error("{0}")]
    IllegalQueryParameter(String),
}

impl UrlError {
    pub(crate) fn invalid_url() -> Self {
        UrlError::InvalidUrl("Invalid pixelbin url. Please make sure the url is correct.".into())
    }
}

/// Errors raised while loading or validating [`crate::config::PixelbinConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0}")]
    InvalidCredential(String),

    #[error("IO error when reading `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("config file parsing error")]
    Toml(#[from] toml::de::Error),

    #[error("config serialization error")]
    TomlSer(#[from] toml::ser::Error),

    #[error("could not resolve XDG directories")]
    Xdg(#[from] xdg::BaseDirectoriesError),
}
