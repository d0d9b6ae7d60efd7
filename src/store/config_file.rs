// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Tabnav and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::model::{HideList, ModelError, TabDescriptor, TabSet};
use crate::reconcile::TabBarConfig;
use crate::route::BasePath;

/// On-disk form of a [`TabBarConfig`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct TabConfigJson {
    pub base_path: BasePath,
    pub items: Vec<TabDescriptor>,
    #[serde(default, skip_serializing_if = "HideList::is_empty")]
    pub hidden: HideList,
    #[serde(default)]
    pub is_sequence: bool,
}

impl TabConfigJson {
    pub fn into_config(self) -> Result<TabBarConfig, ModelError> {
        let items = TabSet::new(self.items)?;
        Ok(TabBarConfig::new(self.base_path, items)
            .with_hidden(self.hidden)
            .with_sequence(self.is_sequence))
    }

    pub fn from_config(config: &TabBarConfig) -> Self {
        Self {
            base_path: config.base_path.clone(),
            items: config.items.as_slice().to_vec(),
            hidden: config.hidden.clone(),
            is_sequence: config.is_sequence,
        }
    }
}

/// JSON schema of the config file format.
pub fn config_schema() -> serde_json::Value {
    let schema = schemars::schema_for!(TabConfigJson);
    schema.as_value().clone()
}

#[derive(Debug)]
pub enum StoreError {
    Io {
        path: PathBuf,
        source: io::Error,
    },
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
    Model {
        path: PathBuf,
        source: ModelError,
    },
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "io error at {path:?}: {source}"),
            Self::Json { path, source } => write!(f, "json error at {path:?}: {source}"),
            Self::Model { path, source } => write!(f, "invalid tab list in {path:?}: {source}"),
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Json { source, .. } => Some(source),
            Self::Model { source, .. } => Some(source),
        }
    }
}

/// A tab configuration file on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabConfigFile {
    path: PathBuf,
}

impl TabConfigFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self) -> Result<TabBarConfig, StoreError> {
        let raw = fs::read_to_string(&self.path).map_err(|source| StoreError::Io {
            path: self.path.clone(),
            source,
        })?;
        let json: TabConfigJson = serde_json::from_str(&raw).map_err(|source| StoreError::Json {
            path: self.path.clone(),
            source,
        })?;
        let config = json.into_config().map_err(|source| StoreError::Model {
            path: self.path.clone(),
            source,
        })?;

        for ambiguous in config.items.ambiguous_aliases() {
            warn!(path = ?self.path, %ambiguous, "ambiguous tab alias");
        }
        debug!(
            path = ?self.path,
            base_path = %config.base_path,
            tabs = config.items.len(),
            "loaded tab config"
        );
        Ok(config)
    }

    /// Writes through a sibling temp file so readers never see a partial file.
    pub fn save(&self, config: &TabBarConfig) -> Result<(), StoreError> {
        let json = TabConfigJson::from_config(config);
        let raw = serde_json::to_string_pretty(&json).map_err(|source| StoreError::Json {
            path: self.path.clone(),
            source,
        })?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|source| StoreError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let mut tmp_name = self
            .path
            .file_name()
            .map(|name| name.to_os_string())
            .unwrap_or_default();
        tmp_name.push(format!(".tmp-{}", std::process::id()));
        let tmp_path = self.path.with_file_name(tmp_name);

        fs::write(&tmp_path, format!("{raw}\n")).map_err(|source| StoreError::Io {
            path: tmp_path.clone(),
            source,
        })?;
        fs::rename(&tmp_path, &self.path).map_err(|source| {
            let _ = fs::remove_file(&tmp_path);
            StoreError::Io {
                path: self.path.clone(),
                source,
            }
        })
    }
}
