//! Path layout of a CDN URL: `{base}/{version}/{cloud}/{zone}/{pattern}/{file...}`.

use regex::Regex;
use std::sync::LazyLock;
use url::Url;

use super::descriptor::{QueryOptions, UrlDescriptor, Version};
use super::pattern::format_pattern;
use super::query::{format_query, parse_query};
use crate::error::UrlError;

/// Base URL used when a descriptor does not carry one.
pub const BASE_URL: &str = "https://cdn.pixelbin.io";

/// Pattern segment meaning "no transformations".
pub const ORIGINAL: &str = "original";

const MIN_CLOUD_NAME_LEN: usize = 3;

static URL_WITH_ZONE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^/([a-zA-Z0-9_-]*)/([a-zA-Z0-9_-]{6})/(.+)/(.*)$").expect("invalid zone url regex")
});

static URL_WITHOUT_ZONE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"/([a-zA-Z0-9_-]*)/(.+)/(.*)").expect("invalid url regex")
});

static ZONE_SLUG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9_-]{6}$").expect("invalid zone slug regex"));

/// Returns true for a 6-character `[A-Za-z0-9_-]` zone slug.
pub fn is_zone_slug(zone: &str) -> bool {
    ZONE_SLUG.is_match(zone)
}

/// Structural pieces of a CDN URL before the pattern is expanded.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct UrlParts {
    pub base_url: String,
    pub version: Version,
    pub cloud_name: String,
    pub zone: Option<String>,
    pub pattern: String,
    pub file_path: String,
    pub options: QueryOptions,
}

/// Splits a CDN URL into its structural parts and validated query options.
pub(crate) fn parse_url_parts(raw: &str) -> Result<UrlParts, UrlError> {
    let url = Url::parse(raw).map_err(|_| UrlError::invalid_url())?;
    let host = url.host_str().ok_or_else(UrlError::invalid_url)?;
    let base_url = match url.port() {
        Some(port) => format!("{}://{}:{}", url.scheme(), host, port),
        None => format!("{}://{}", url.scheme(), host),
    };

    // Index 0 is the empty segment before the leading '/'.
    let mut segments: Vec<&str> = url.path().split('/').collect();

    let mut version = Version::V1;
    if let Some(v) = segments.get(1).and_then(|s| s.parse::<Version>().ok()) {
        version = v;
        segments.remove(1);
    }

    if segments
        .get(1)
        .map_or(true, |cloud| cloud.len() < MIN_CLOUD_NAME_LEN)
    {
        return Err(UrlError::invalid_url());
    }

    let joined = segments.join("/");
    let (zone, pattern_idx) = if URL_WITH_ZONE.is_match(&joined) {
        (Some(segments[2].to_string()), 3)
    } else if URL_WITHOUT_ZONE.is_match(&joined) {
        (None, 2)
    } else {
        return Err(UrlError::invalid_url());
    };

    let pattern = segments
        .get(pattern_idx)
        .filter(|p| !p.is_empty())
        .ok_or_else(UrlError::invalid_url)?
        .to_string();
    let file_path = segments
        .get(pattern_idx + 1..)
        .map(|rest| rest.join("/"))
        .unwrap_or_default();

    let options = parse_query(&url)?;

    tracing::debug!(
        cloud_name = segments[1],
        zone = zone.as_deref(),
        %pattern,
        "parsed url structure"
    );

    Ok(UrlParts {
        base_url,
        version,
        cloud_name: segments[1].to_string(),
        zone,
        pattern,
        file_path,
        options,
    })
}

fn required<'a>(value: Option<&'a str>, key: &str) -> Result<&'a str, UrlError> {
    value
        .filter(|v| !v.is_empty())
        .ok_or_else(|| UrlError::IllegalArgument(format!("key {key} should be defined")))
}

/// Assembles the canonical URL for a (possibly partial) descriptor.
pub(crate) fn build_url(descriptor: &UrlDescriptor) -> Result<String, UrlError> {
    let cloud_name = required(descriptor.cloud_name.as_deref(), "cloudName")?;
    let file_path = required(descriptor.file_path.as_deref(), "filePath")?;

    let base_url = descriptor
        .base_url
        .as_deref()
        .filter(|b| !b.is_empty())
        .unwrap_or(BASE_URL);
    let version = descriptor.version.unwrap_or_default();
    let zone = descriptor
        .zone
        .as_deref()
        .filter(|z| is_zone_slug(z))
        .unwrap_or("");

    let mut pattern = format_pattern(&descriptor.transformations)?;
    if pattern.is_empty() {
        pattern = ORIGINAL.to_string();
    }

    let segments = [
        base_url,
        version.as_str(),
        cloud_name,
        zone,
        pattern.as_str(),
        file_path,
    ];
    let mut out = segments
        .iter()
        .filter(|s| !s.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join("/");

    if let Some(query) = format_query(&descriptor.options)? {
        out.push('?');
        out.push_str(&query);
    }
    Ok(out)
}
