// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Tabnav and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Navigation reconciliation.
//!
//! [`NavigationReconciler`] receives every location change (including the initial mount), runs
//! the resolver against its tab set, and dispatches at most one replace-navigation per change.
//! It never waits for that navigation: the resulting location change comes back through the
//! host as the next pass, which must settle.

use std::fmt;

use tracing::{debug, info, warn};

use crate::model::{HideList, TabDescriptor, TabSet};
use crate::route::{
    follow_redirects, resolve, section_segment, BasePath, Decision, RedirectLoop,
    MAX_REDIRECT_DEPTH,
};
use crate::section::{ActiveSection, SectionContext, SectionReader};

pub mod history;
pub mod view;

pub use history::{ChangeKind, LocationChange, LocationHistory};
pub use view::{SectionIndicator, TabBarView, TabItemView};

/// Side-effect seam for redirects. Implementations replace the current location; they must not
/// add a history entry.
pub trait Navigator {
    fn replace(&mut self, path: &str);
}

/// Inputs of one tab bar: where it is mounted, which tabs exist and which are hidden.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabBarConfig {
    pub base_path: BasePath,
    pub items: TabSet,
    pub hidden: HideList,
    pub is_sequence: bool,
}

impl TabBarConfig {
    pub fn new(base_path: BasePath, items: TabSet) -> Self {
        Self {
            base_path,
            items,
            hidden: HideList::new(),
            is_sequence: false,
        }
    }

    pub fn with_hidden(mut self, hidden: HideList) -> Self {
        self.hidden = hidden;
        self
    }

    pub fn with_sequence(mut self, is_sequence: bool) -> Self {
        self.is_sequence = is_sequence;
        self
    }

    pub fn visible(&self) -> Vec<&TabDescriptor> {
        self.items.visible(&self.hidden)
    }

    pub fn resolve(&self, path: &str) -> Decision {
        resolve(
            path,
            &self.base_path,
            self.items.as_slice(),
            &self.hidden,
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReconcileOutcome {
    Settled,
    Redirected(Decision),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReconcileError {
    RedirectLoop(RedirectLoop),
}

impl fmt::Display for ReconcileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RedirectLoop(source) => write!(f, "tab configuration error: {source}"),
        }
    }
}

impl std::error::Error for ReconcileError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::RedirectLoop(source) => Some(source),
        }
    }
}

impl From<RedirectLoop> for ReconcileError {
    fn from(value: RedirectLoop) -> Self {
        Self::RedirectLoop(value)
    }
}

#[derive(Debug, Clone)]
pub struct NavigationReconciler {
    config: TabBarConfig,
    section: SectionReader,
    location: Option<String>,
    redirect_streak: usize,
}

impl NavigationReconciler {
    pub fn new(config: TabBarConfig, section: SectionReader) -> Self {
        for ambiguous in config.items.ambiguous_aliases() {
            warn!(%ambiguous, "ambiguous tab alias; the first tab wins");
        }
        Self {
            config,
            section,
            location: None,
            redirect_streak: 0,
        }
    }

    pub fn config(&self) -> &TabBarConfig {
        &self.config
    }

    /// Location of the latest pass.
    pub fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }

    /// Runs one reconciliation pass for `path`.
    pub fn on_location_change(
        &mut self,
        path: &str,
        navigator: &mut dyn Navigator,
    ) -> Result<ReconcileOutcome, ReconcileError> {
        self.location = Some(path.to_owned());

        let decision = self.config.resolve(path);
        debug!(path, ?decision, "reconciled location");

        let Some(target) = decision
            .target()
            .filter(|_| !decision.is_settled_at(path))
        else {
            self.redirect_streak = 0;
            return Ok(ReconcileOutcome::Settled);
        };

        self.redirect_streak += 1;
        if self.redirect_streak > MAX_REDIRECT_DEPTH {
            let err = RedirectLoop {
                from: path.to_owned(),
                chain: vec![target.to_owned()],
            };
            warn!(%err, streak = self.redirect_streak, "navigator keeps leaving the tab set");
            self.redirect_streak = 0;
            return Err(err.into());
        }

        if let Err(err) = follow_redirects(
            path,
            &self.config.base_path,
            self.config.items.as_slice(),
            &self.config.hidden,
        ) {
            warn!(%err, "refusing to redirect");
            self.redirect_streak = 0;
            return Err(err.into());
        }

        info!(from = path, to = target, "redirecting");
        navigator.replace(target);
        Ok(ReconcileOutcome::Redirected(decision))
    }

    /// Visible tab that owns `path`: the root tab at the base path, otherwise the non-root tab
    /// named by the section segment.
    pub fn active_tab(&self, path: &str) -> Option<&TabDescriptor> {
        let mut visible = self.config.visible().into_iter();
        if path == self.config.base_path.as_str() {
            return visible.find(|tab| tab.is_root());
        }
        let section = section_segment(path)?;
        visible.find(|tab| !tab.is_root() && tab.name().as_str() == section)
    }

    pub fn view(&self) -> TabBarView<'_> {
        let visible = self.config.visible();
        let num = visible.len();
        let base = self.config.base_path.as_str();
        let active = self
            .location
            .as_deref()
            .and_then(|path| self.active_tab(path))
            .map(|tab| tab.name().clone());

        let items = visible
            .into_iter()
            .enumerate()
            .map(|(index, tab)| TabItemView {
                tab,
                index,
                num,
                is_sequence: self.config.is_sequence,
                href: tab.href(base),
                is_active: active.as_ref() == Some(tab.name()),
            })
            .collect();

        let section = self.section.current();
        let current_section = section.indicator().map(|(icon, text)| SectionIndicator {
            icon: icon.clone(),
            text: text.into(),
        });

        TabBarView {
            current_section,
            items,
        }
    }
}

/// Publishes the active tab's icon and label into a [`SectionContext`].
///
/// This is the writer side of the section slot; it owns the context, so dropping the tracker
/// unmounts the slot for every reader.
#[derive(Debug, Default)]
pub struct ActiveSectionTracker {
    context: SectionContext,
}

impl ActiveSectionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reader(&self) -> SectionReader {
        self.context.reader()
    }

    pub fn current(&self) -> ActiveSection {
        self.context.current()
    }

    /// Publishes once for the reconciler's latest location.
    pub fn sync(&self, reconciler: &NavigationReconciler) {
        match reconciler
            .location()
            .and_then(|path| reconciler.active_tab(path))
        {
            Some(tab) => self.context.publish(ActiveSection::from_tab(tab)),
            None => self.context.clear(),
        }
    }
}

/// Feeds every queued location change to the reconciler, in order, until the history is quiet.
///
/// A change whose path is no longer the current entry has been overtaken by a later one and is
/// skipped, so its redirect cannot overwrite the newer location. Returns the number of passes run.
pub fn drain_changes(
    history: &mut LocationHistory,
    reconciler: &mut NavigationReconciler,
    tracker: &ActiveSectionTracker,
) -> Result<usize, ReconcileError> {
    let mut passes = 0usize;
    while let Some(change) = history.next_change() {
        if change.path != history.current() {
            debug!(
                path = change.path.as_str(),
                current = history.current(),
                "skipping superseded location change"
            );
            continue;
        }
        passes += 1;
        reconciler.on_location_change(&change.path, history)?;
        tracker.sync(reconciler);
    }
    Ok(passes)
}
