//! Pixelbin CDN URL codec.
//!
//! Converts between a CDN URL such as
//! `https://cdn.pixelbin.io/v2/red-scene-95b6ea/z-slug/t.resize(w:100)~p:grayscale/dir/a.jpg?dpr=2.0`
//! and a [`UrlDescriptor`]. Both directions are pure and allocation-only.

mod descriptor;
mod loose;
mod pattern;
mod query;
mod structure;

pub use descriptor::{OperationDescriptor, Param, QueryOptions, UrlDescriptor, Version};
pub use loose::descriptor_from_value;
pub use pattern::{format_pattern, parse_pattern, BASIC_PLUGIN};
pub use query::{validate_dpr, validate_f_auto};
pub use structure::{is_zone_slug, BASE_URL, ORIGINAL};

use crate::error::UrlError;
use serde_json::Value;

/// Parses a CDN URL into its structured form.
///
/// Structural problems, a too-short cloud name and an unparseable operation
/// chain all surface as [`UrlError::InvalidUrl`]; a bad `dpr`/`f_auto` query
/// value surfaces as [`UrlError::IllegalQueryParameter`].
///
/// # Examples
///
/// - `https://cdn.pixelbin.io/v2/red-scene-95b6ea/original/a.jpg` → no transformations, `version = v2`
/// - `https://cdn.pixelbin.io/red-scene-95b6ea/t.flip()/a.jpg` → one `t.flip` operation, `version = v1`
pub fn url_to_obj(url: &str) -> Result<UrlDescriptor, UrlError> {
    let parts = structure::parse_url_parts(url)?;

    let transformations = if parts.pattern == ORIGINAL {
        Vec::new()
    } else {
        parse_pattern(&parts.pattern).map_err(|err| {
            tracing::debug!(%url, "pattern parse failed: {}", err);
            UrlError::InvalidUrl(format!(
                "Error processing url. Please check the url is correct: {url}: {err}"
            ))
        })?
    };

    Ok(UrlDescriptor {
        base_url: Some(parts.base_url),
        version: Some(parts.version),
        cloud_name: Some(parts.cloud_name),
        zone: parts.zone,
        pattern: Some(parts.pattern),
        file_path: Some(parts.file_path),
        options: parts.options,
        transformations,
    })
}

/// Builds the canonical CDN URL for a descriptor.
///
/// `base_url` defaults to [`BASE_URL`], `version` to `v2`, and an absent or
/// malformed zone is left out. `pattern` is always recomputed from
/// `transformations`; an empty chain becomes `original`.
pub fn obj_to_url(descriptor: &UrlDescriptor) -> Result<String, UrlError> {
    let url = structure::build_url(descriptor)?;
    tracing::debug!(%url, "built url");
    Ok(url)
}

/// [`obj_to_url`] for a loosely typed JSON object (see [`descriptor_from_value`]).
pub fn obj_to_url_from_value(value: &Value) -> Result<String, UrlError> {
    obj_to_url(&descriptor_from_value(value)?)
}
