//! Structured form of a Pixelbin CDN URL.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// URL layout version segment (`v1` or `v2`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Version {
    /// Implied when a parsed URL has no version segment.
    V1,
    /// Emitted when a descriptor does not name a version.
    #[default]
    V2,
}

impl Version {
    pub fn as_str(&self) -> &'static str {
        match self {
            Version::V1 => "v1",
            Version::V2 => "v2",
        }
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Version {
    type Err = ();

    /// Exact match only: `v1` or `v2`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "v1" => Ok(Version::V1),
            "v2" => Ok(Version::V2),
            _ => Err(()),
        }
    }
}

/// One `key:value` parameter of an operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Param {
    pub key: String,
    pub value: String,
}

impl Param {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// A single transformation step, e.g. `t.resize(w:100,h:200)`.
///
/// The plugin id `p` marks a built-in operation and is encoded as `p:name(...)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperationDescriptor {
    pub plugin: String,
    /// Empty name means the operation is skipped when formatting.
    #[serde(default)]
    pub name: String,
    /// Parameters in the order they appear in the URL. `None` when there are none.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub values: Option<Vec<Param>>,
}

impl OperationDescriptor {
    pub fn new(plugin: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            plugin: plugin.into(),
            name: name.into(),
            values: None,
        }
    }

    /// Appends a parameter, keeping insertion order.
    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.values
            .get_or_insert_with(Vec::new)
            .push(Param::new(key, value));
        self
    }
}

/// The two recognized query options.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct QueryOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dpr: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub f_auto: Option<bool>,
}

impl QueryOptions {
    pub fn is_empty(&self) -> bool {
        self.dpr.is_none() && self.f_auto.is_none()
    }
}

/// Parsed (or to-be-built) Pixelbin CDN URL.
///
/// Fields are optional so that callers can hand a partial descriptor to
/// [`super::obj_to_url`]; missing fields take defaults, except `cloud_name`
/// and `file_path` which are required.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UrlDescriptor {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<Version>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cloud_name: Option<String>,
    #[serde(default)]
    pub zone: Option<String>,
    /// `original` or the `~`-joined operation chain. Recomputed on build.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_path: Option<String>,
    #[serde(default)]
    pub options: QueryOptions,
    #[serde(default)]
    pub transformations: Vec<OperationDescriptor>,
}

impl UrlDescriptor {
    /// Minimal descriptor with the two required fields set.
    pub fn new(cloud_name: impl Into<String>, file_path: impl Into<String>) -> Self {
        Self {
            cloud_name: Some(cloud_name.into()),
            file_path: Some(file_path.into()),
            ..Self::default()
        }
    }
}
