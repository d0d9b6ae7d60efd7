// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Tabnav and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use schemars::{json_schema, JsonSchema, Schema, SchemaGenerator};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use smol_str::SmolStr;

/// Location a tab bar is mounted at, e.g. `/staking`.
///
/// Always starts with `/`, never ends with one, and has no empty segments, so `<base>/<name>`
/// is a well-formed location for every tab name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BasePath(SmolStr);

impl BasePath {
    pub fn new(value: impl AsRef<str>) -> Result<Self, BasePathError> {
        let value = value.as_ref();
        if value.is_empty() {
            return Err(BasePathError::Empty);
        }
        if !value.starts_with('/') {
            return Err(BasePathError::MissingLeadingSlash);
        }
        if value.ends_with('/') {
            return Err(BasePathError::TrailingSlash);
        }
        if value.contains("//") {
            return Err(BasePathError::EmptySegment);
        }
        Ok(Self(SmolStr::new(value)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BasePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for BasePath {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl FromStr for BasePath {
    type Err = BasePathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl Serialize for BasePath {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for BasePath {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::new(&raw).map_err(|err| de::Error::custom(format!("{err}: {raw:?}")))
    }
}

impl JsonSchema for BasePath {
    fn inline_schema() -> bool {
        true
    }

    fn schema_name() -> Cow<'static, str> {
        "BasePath".into()
    }

    fn json_schema(_generator: &mut SchemaGenerator) -> Schema {
        json_schema!({
            "type": "string",
            "pattern": "^(/[^/]+)+$"
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BasePathError {
    Empty,
    MissingLeadingSlash,
    TrailingSlash,
    EmptySegment,
}

impl fmt::Display for BasePathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("base path must not be empty"),
            Self::MissingLeadingSlash => f.write_str("base path must start with '/'"),
            Self::TrailingSlash => f.write_str("base path must not end with '/'"),
            Self::EmptySegment => f.write_str("base path must not contain empty segments"),
        }
    }
}

impl std::error::Error for BasePathError {}

/// Returns the section segment of a location.
///
/// Locations look like `/<root>/<section>/<rest...>`; the section is the third `/`-separated
/// field (the first one is the empty string before the leading slash). Locations with fewer
/// than three fields have no section. `"/staking/"` has an empty section.
pub fn section_segment(path: &str) -> Option<&str> {
    let mut slashes = memchr::memchr_iter(b'/', path.as_bytes());
    slashes.next()?;
    let start = slashes.next()? + 1;
    let end = slashes.next().unwrap_or(path.len());
    Some(&path[start..end])
}
