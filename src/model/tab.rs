// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Tabnav and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::{BTreeMap, HashSet};
use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

use super::hide::HideList;
use super::ids::{IconName, TabName};

/// Static metadata for one navigable section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct TabDescriptor {
    name: TabName,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(with = "Option<String>")]
    alias: Option<SmolStr>,
    #[serde(default)]
    is_root: bool,
    #[schemars(with = "String")]
    text: SmolStr,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    icon: Option<IconName>,
}

impl TabDescriptor {
    pub fn new(name: TabName, text: impl Into<SmolStr>) -> Self {
        Self {
            name,
            alias: None,
            is_root: false,
            text: text.into(),
            icon: None,
        }
    }

    pub fn with_alias(mut self, alias: impl Into<SmolStr>) -> Self {
        self.alias = Some(alias.into());
        self
    }

    pub fn with_icon(mut self, icon: IconName) -> Self {
        self.icon = Some(icon);
        self
    }

    pub fn as_root(mut self) -> Self {
        self.is_root = true;
        self
    }

    pub fn name(&self) -> &TabName {
        &self.name
    }

    pub fn alias(&self) -> Option<&str> {
        self.alias.as_deref()
    }

    pub fn is_root(&self) -> bool {
        self.is_root
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn icon(&self) -> Option<&IconName> {
        self.icon.as_ref()
    }

    /// Location this tab links to under `base_path`. The root tab owns the base path itself.
    pub fn href(&self, base_path: &str) -> String {
        if self.is_root {
            base_path.to_owned()
        } else {
            format!("{base_path}/{}", self.name)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    Empty,
    /// Two descriptors share a name.
    InvalidModel {
        name: TabName,
    },
    MultipleRoots {
        first: TabName,
        second: TabName,
    },
}

impl fmt::Display for ModelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("tab list must contain at least one tab"),
            Self::InvalidModel { name } => write!(f, "duplicate tab name: {name}"),
            Self::MultipleRoots { first, second } => {
                write!(f, "more than one root tab: {first} and {second}")
            }
        }
    }
}

impl std::error::Error for ModelError {}

/// Two or more tabs answering to the same alias. Resolution still takes the first one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AmbiguousAlias {
    pub alias: SmolStr,
    pub names: Vec<TabName>,
}

impl fmt::Display for AmbiguousAlias {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "alias {:?} is shared by", self.alias.as_str())?;
        for (idx, name) in self.names.iter().enumerate() {
            let sep = if idx == 0 { " " } else { ", " };
            write!(f, "{sep}{name}")?;
        }
        Ok(())
    }
}

/// Returns `tabs` without the hidden ones, in their original order.
pub fn compute_visible<'a>(
    tabs: &'a [TabDescriptor],
    hide: &HideList,
) -> Result<Vec<&'a TabDescriptor>, ModelError> {
    ensure_unique_names(tabs)?;
    Ok(filter_hidden(tabs, hide))
}

fn filter_hidden<'a>(tabs: &'a [TabDescriptor], hide: &HideList) -> Vec<&'a TabDescriptor> {
    tabs.iter()
        .filter(|tab| !hide.contains(tab.name.as_str()))
        .collect()
}

fn ensure_unique_names(tabs: &[TabDescriptor]) -> Result<(), ModelError> {
    let mut seen = HashSet::with_capacity(tabs.len());
    for tab in tabs {
        if !seen.insert(tab.name.as_str()) {
            return Err(ModelError::InvalidModel {
                name: tab.name.clone(),
            });
        }
    }
    Ok(())
}

/// A validated, ordered tab list: non-empty, unique names, at most one root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabSet {
    tabs: Vec<TabDescriptor>,
}

impl TabSet {
    pub fn new(tabs: Vec<TabDescriptor>) -> Result<Self, ModelError> {
        if tabs.is_empty() {
            return Err(ModelError::Empty);
        }
        ensure_unique_names(&tabs)?;

        let mut roots = tabs.iter().filter(|tab| tab.is_root);
        if let (Some(first), Some(second)) = (roots.next(), roots.next()) {
            return Err(ModelError::MultipleRoots {
                first: first.name.clone(),
                second: second.name.clone(),
            });
        }

        Ok(Self { tabs })
    }

    pub fn as_slice(&self) -> &[TabDescriptor] {
        &self.tabs
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TabDescriptor> {
        self.tabs.iter()
    }

    pub fn len(&self) -> usize {
        self.tabs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tabs.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&TabDescriptor> {
        self.tabs.iter().find(|tab| tab.name.as_str() == name)
    }

    pub fn root(&self) -> Option<&TabDescriptor> {
        self.tabs.iter().find(|tab| tab.is_root)
    }

    pub fn visible(&self, hide: &HideList) -> Vec<&TabDescriptor> {
        filter_hidden(&self.tabs, hide)
    }

    pub fn ambiguous_aliases(&self) -> Vec<AmbiguousAlias> {
        let mut by_alias: BTreeMap<&str, Vec<TabName>> = BTreeMap::new();
        for tab in &self.tabs {
            if let Some(alias) = tab.alias() {
                by_alias.entry(alias).or_default().push(tab.name.clone());
            }
        }

        by_alias
            .into_iter()
            .filter(|(_, names)| names.len() > 1)
            .map(|(alias, names)| AmbiguousAlias {
                alias: SmolStr::new(alias),
                names,
            })
            .collect()
    }
}

impl TryFrom<Vec<TabDescriptor>> for TabSet {
    type Error = ModelError;

    fn try_from(tabs: Vec<TabDescriptor>) -> Result<Self, Self::Error> {
        Self::new(tabs)
    }
}

impl<'a> IntoIterator for &'a TabSet {
    type Item = &'a TabDescriptor;
    type IntoIter = std::slice::Iter<'a, TabDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use rstest::{fixture, rstest};

    use super::{compute_visible, ModelError, TabDescriptor, TabSet};
    use crate::model::{HideList, TabName};

    fn tab(name: &str) -> TabDescriptor {
        TabDescriptor::new(TabName::new(name).expect("tab name"), name.to_uppercase())
    }

    #[fixture]
    fn tabs() -> Vec<TabDescriptor> {
        vec![
            tab("overview").as_root(),
            tab("actions"),
            tab("payouts"),
            tab("query").with_alias("q"),
            tab("slashes"),
        ]
    }

    fn names(tabs: &[&TabDescriptor]) -> Vec<String> {
        tabs.iter().map(|tab| tab.name().to_string()).collect()
    }

    #[rstest]
    #[case(&[], &["overview", "actions", "payouts", "query", "slashes"])]
    #[case(&["query"], &["overview", "actions", "payouts", "slashes"])]
    #[case(&["slashes", "overview"], &["actions", "payouts", "query"])]
    #[case(&["nope"], &["overview", "actions", "payouts", "query", "slashes"])]
    fn visible_preserves_order_and_drops_hidden(
        tabs: Vec<TabDescriptor>,
        #[case] hidden: &[&str],
        #[case] expected: &[&str],
    ) {
        let hide: HideList = hidden.iter().copied().collect();
        let visible = compute_visible(&tabs, &hide).expect("visible");
        assert_eq!(names(&visible), expected);
    }

    #[rstest]
    fn visible_is_idempotent(tabs: Vec<TabDescriptor>) {
        let hide: HideList = ["payouts", "query"].into_iter().collect();
        let once: Vec<TabDescriptor> = compute_visible(&tabs, &hide)
            .expect("visible")
            .into_iter()
            .cloned()
            .collect();
        let twice = compute_visible(&once, &hide).expect("visible");
        assert_eq!(names(&twice), names(&once.iter().collect::<Vec<_>>()));
    }

    #[rstest]
    fn duplicate_names_are_rejected(mut tabs: Vec<TabDescriptor>) {
        tabs.push(tab("query"));
        let err = compute_visible(&tabs, &HideList::new()).unwrap_err();
        assert_eq!(
            err,
            ModelError::InvalidModel {
                name: TabName::new("query").unwrap()
            }
        );
        assert_eq!(TabSet::new(tabs).unwrap_err().to_string(), "duplicate tab name: query");
    }

    #[test]
    fn tab_set_rejects_empty_and_multiple_roots() {
        assert_eq!(TabSet::new(Vec::new()), Err(ModelError::Empty));

        let err = TabSet::new(vec![tab("a").as_root(), tab("b").as_root()]).unwrap_err();
        assert!(matches!(err, ModelError::MultipleRoots { .. }));
    }

    #[rstest]
    fn href_points_root_at_base(tabs: Vec<TabDescriptor>) {
        assert_eq!(tabs[0].href("/staking"), "/staking");
        assert_eq!(tabs[3].href("/staking"), "/staking/query");
    }

    #[test]
    fn ambiguous_aliases_are_reported_in_list_order() {
        let set = TabSet::new(vec![
            tab("a").with_alias("x"),
            tab("b").with_alias("y"),
            tab("c").with_alias("x"),
        ])
        .expect("tab set");

        let ambiguous = set.ambiguous_aliases();
        assert_eq!(ambiguous.len(), 1);
        assert_eq!(ambiguous[0].alias.as_str(), "x");
        assert_eq!(ambiguous[0].to_string(), "alias \"x\" is shared by a, c");
    }

    #[test]
    fn descriptor_deserializes_camel_case_json() {
        let tab: TabDescriptor = serde_json::from_str(
            r#"{ "name": "overview", "isRoot": true, "text": "Overview", "icon": "home" }"#,
        )
        .expect("descriptor");
        assert!(tab.is_root());
        assert_eq!(tab.icon().map(|icon| icon.as_str()), Some("home"));
        assert_eq!(tab.alias(), None);
    }
}
