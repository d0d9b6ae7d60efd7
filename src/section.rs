// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Tabnav and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Active section shared between the tab bar and the view that owns the current tab.
//!
//! The view that knows which tab is active publishes its icon and label; the tab bar reads the
//! latest value for its header. Only the latest value is observable.

use smol_str::SmolStr;
use tokio::sync::watch;

use crate::model::{IconName, TabDescriptor};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActiveSection {
    icon: Option<IconName>,
    text: Option<SmolStr>,
}

impl ActiveSection {
    pub fn new(icon: Option<IconName>, text: Option<impl Into<SmolStr>>) -> Self {
        Self {
            icon,
            text: text.map(Into::into),
        }
    }

    pub fn from_tab(tab: &TabDescriptor) -> Self {
        Self {
            icon: tab.icon().cloned(),
            text: Some(SmolStr::new(tab.text())),
        }
    }

    pub fn icon(&self) -> Option<&IconName> {
        self.icon.as_ref()
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    pub fn is_empty(&self) -> bool {
        self.icon.is_none() && self.text.is_none()
    }

    /// Icon and label, when both are present and non-empty.
    pub fn indicator(&self) -> Option<(&IconName, &str)> {
        match (&self.icon, self.text.as_deref()) {
            (Some(icon), Some(text)) if !text.is_empty() => Some((icon, text)),
            _ => None,
        }
    }
}

/// Owner of the active-section slot.
///
/// Dropping the context tears the slot down; readers created from it fall back to the empty
/// section afterwards.
#[derive(Debug)]
pub struct SectionContext {
    sender: watch::Sender<ActiveSection>,
}

impl Default for SectionContext {
    fn default() -> Self {
        Self::new()
    }
}

impl SectionContext {
    pub fn new() -> Self {
        let (sender, _receiver) = watch::channel(ActiveSection::default());
        Self { sender }
    }

    pub fn reader(&self) -> SectionReader {
        SectionReader {
            receiver: self.sender.subscribe(),
        }
    }

    /// Replaces the current value.
    pub fn publish(&self, section: ActiveSection) {
        self.sender.send_if_modified(|current| {
            if *current == section {
                return false;
            }
            *current = section;
            true
        });
    }

    pub fn clear(&self) {
        self.publish(ActiveSection::default());
    }

    pub fn current(&self) -> ActiveSection {
        self.sender.borrow().clone()
    }
}

#[derive(Debug, Clone)]
pub struct SectionReader {
    receiver: watch::Receiver<ActiveSection>,
}

impl SectionReader {
    pub fn current(&self) -> ActiveSection {
        if !self.is_mounted() {
            return ActiveSection::default();
        }
        self.receiver.borrow().clone()
    }

    pub fn is_mounted(&self) -> bool {
        self.receiver.has_changed().is_ok()
    }
}
