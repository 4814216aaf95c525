//! Pixelbin SDK core: the CDN transformation URL codec plus client
//! configuration, credential checks and logging setup.

pub mod access;
pub mod config;
pub mod error;
pub mod logging;
pub mod url_model;

pub use error::{ConfigError, UrlError};
pub use url_model::{obj_to_url, url_to_obj, UrlDescriptor};
