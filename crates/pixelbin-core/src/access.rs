//! Access level of an uploaded asset.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Access {
    #[default]
    PublicRead,
    Private,
}

impl Access {
    pub fn as_str(&self) -> &'static str {
        match self {
            Access::PublicRead => "public-read",
            Access::Private => "private",
        }
    }
}

impl fmt::Display for Access {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for a string that is not a known access level.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid AccessEnum type: {0}")]
pub struct InvalidAccess(pub String);

impl FromStr for Access {
    type Err = InvalidAccess;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "public-read" => Ok(Access::PublicRead),
            "private" => Ok(Access::Private),
            other => Err(InvalidAccess(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_known_values() {
        assert_eq!("public-read".parse::<Access>(), Ok(Access::PublicRead));
        assert_eq!("private".parse::<Access>(), Ok(Access::Private));
    }

    #[test]
    fn parse_rejects_unknown() {
        assert_eq!(
            "PRIVATE".parse::<Access>(),
            Err(InvalidAccess("PRIVATE".into()))
        );
    }

    #[test]
    fn serde_uses_wire_names() {
        assert_eq!(
            serde_json::to_string(&Access::PublicRead).unwrap(),
            "\"public-read\""
        );
        let a: Access = serde_json::from_str("\"private\"").unwrap();
        assert_eq!(a, Access::Private);
    }
}
