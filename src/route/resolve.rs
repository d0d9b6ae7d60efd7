// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Tabnav and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;

use super::path::{section_segment, BasePath};
use crate::model::{HideList, TabDescriptor};

/// Longest redirect chain a single location may start before it counts as a loop.
pub const MAX_REDIRECT_DEPTH: usize = 5;

/// What to do about the current location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    NoAction,
    /// The section segment is some tab's alias.
    RedirectToAlias { target: String },
    /// The section is hidden or names no non-root tab.
    RedirectToBase { target: String },
}

impl Decision {
    pub fn target(&self) -> Option<&str> {
        match self {
            Self::NoAction => None,
            Self::RedirectToAlias { target } | Self::RedirectToBase { target } => Some(target),
        }
    }

    /// True when acting on this decision would leave `path` where it is.
    pub fn is_settled_at(&self, path: &str) -> bool {
        self.target().map_or(true, |target| target == path)
    }
}

/// Decides whether `path` is a valid location for the tabs mounted at `base_path`.
///
/// Aliases are looked up across all of `items`, hidden ones included, so a hidden tab's alias
/// still redirects to that tab's location (which then redirects to the base on the next pass).
pub fn resolve(
    path: &str,
    base_path: &BasePath,
    items: &[TabDescriptor],
    hide: &HideList,
) -> Decision {
    if path == base_path.as_str() {
        return Decision::NoAction;
    }

    let section = section_segment(path);

    if let Some(tab) =
        section.and_then(|section| items.iter().find(|tab| tab.alias() == Some(section)))
    {
        return Decision::RedirectToAlias {
            target: tab.href(base_path.as_str()),
        };
    }

    let reachable = section.is_some_and(|section| {
        !hide.contains(section)
            && items
                .iter()
                .any(|tab| !tab.is_root() && tab.name().as_str() == section)
    });

    if reachable {
        Decision::NoAction
    } else {
        Decision::RedirectToBase {
            target: base_path.to_string(),
        }
    }
}

/// A redirect chain that revisits a location or never settles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedirectLoop {
    pub from: String,
    pub chain: Vec<String>,
}

impl fmt::Display for RedirectLoop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "redirect loop starting at {}", self.from)?;
        for hop in &self.chain {
            write!(f, " -> {hop}")?;
        }
        Ok(())
    }
}

impl std::error::Error for RedirectLoop {}

/// Follows redirects from `path` without dispatching anything.
///
/// Returns the redirect targets in order; an empty chain means `path` is already settled.
pub fn follow_redirects(
    path: &str,
    base_path: &BasePath,
    items: &[TabDescriptor],
    hide: &HideList,
) -> Result<Vec<String>, RedirectLoop> {
    let mut chain: Vec<String> = Vec::new();
    let mut current = path.to_owned();

    loop {
        let decision = resolve(&current, base_path, items, hide);
        let Some(target) = decision.target() else {
            return Ok(chain);
        };
        if target == current {
            return Ok(chain);
        }

        let revisited = target == path || chain.iter().any(|hop| hop == target);
        chain.push(target.to_owned());
        if revisited || chain.len() > MAX_REDIRECT_DEPTH {
            return Err(RedirectLoop {
                from: path.to_owned(),
                chain,
            });
        }
        current = target.to_owned();
    }
}
