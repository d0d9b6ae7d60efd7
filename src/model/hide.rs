// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Tabnav and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use smol_str::SmolStr;

/// One entry of a hide-list.
///
/// Callers usually build hide-lists from conditions (`[is_dev.then_some("query"), ...]`), so
/// flags and missing values are accepted and ignored. Only a non-empty name hides a tab.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum HideEntry {
    Name(#[schemars(with = "String")] SmolStr),
    Flag(bool),
    Absent,
}

impl HideEntry {
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Name(name) if !name.is_empty() => Some(name.as_str()),
            _ => None,
        }
    }
}

impl From<&str> for HideEntry {
    fn from(value: &str) -> Self {
        Self::Name(SmolStr::new(value))
    }
}

impl From<String> for HideEntry {
    fn from(value: String) -> Self {
        Self::Name(SmolStr::from(value))
    }
}

impl From<bool> for HideEntry {
    fn from(value: bool) -> Self {
        Self::Flag(value)
    }
}

impl<S: AsRef<str>> From<Option<S>> for HideEntry {
    fn from(value: Option<S>) -> Self {
        match value {
            Some(name) => Self::Name(SmolStr::new(name.as_ref())),
            None => Self::Absent,
        }
    }
}

/// Names that must not be shown or navigated to, plus ignored placeholder entries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct HideList {
    #[schemars(with = "Vec<HideEntry>")]
    entries: SmallVec<[HideEntry; 4]>,
}

impl HideList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[HideEntry] {
        &self.entries
    }

    pub fn push(&mut self, entry: impl Into<HideEntry>) {
        self.entries.push(entry.into());
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names().any(|hidden| hidden == name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().filter_map(HideEntry::name)
    }

    pub fn is_empty(&self) -> bool {
        self.names().next().is_none()
    }
}

impl<E: Into<HideEntry>> FromIterator<E> for HideList {
    fn from_iter<I: IntoIterator<Item = E>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().map(Into::into).collect(),
        }
    }
}
