// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Tabnav and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Overview screen shown under the root tab.
//!
//! The screen only wires collaborators together: a translation lookup for its button label, a
//! count source for the summary, and a toggle for the "add" form.

use crate::model::IconName;

pub trait Translate {
    fn t(&self, key: &str) -> String;
}

/// Returns keys unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoTranslation;

impl Translate for NoTranslation {
    fn t(&self, key: &str) -> String {
        key.to_owned()
    }
}

impl<F: Fn(&str) -> String> Translate for F {
    fn t(&self, key: &str) -> String {
        self(key)
    }
}

pub trait CountSource {
    fn count(&self) -> usize;
}

impl CountSource for usize {
    fn count(&self) -> usize {
        *self
    }
}

impl<T> CountSource for [T] {
    fn count(&self) -> usize {
        self.len()
    }
}

impl<T> CountSource for Vec<T> {
    fn count(&self) -> usize {
        self.len()
    }
}

/// On/off state with a flip operation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Toggle {
    on: bool,
}

impl Toggle {
    pub fn is_on(&self) -> bool {
        self.on
    }

    pub fn toggle(&mut self) {
        self.on = !self.on;
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonSpec {
    pub icon: IconName,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverviewView {
    pub summary_count: usize,
    pub button: ButtonSpec,
    pub add_open: bool,
}

pub const ADD_CAMPAIGN_KEY: &str = "Add campaign";
const ADD_ICON: &str = "plus";

#[derive(Debug, Clone)]
pub struct Overview<T, C> {
    translate: T,
    counts: C,
    add: Toggle,
}

impl<T: Translate, C: CountSource> Overview<T, C> {
    pub fn new(translate: T, counts: C) -> Self {
        Self {
            translate,
            counts,
            add: Toggle::default(),
        }
    }

    pub fn view(&self) -> OverviewView {
        OverviewView {
            summary_count: self.counts.count(),
            button: ButtonSpec {
                icon: add_icon(),
                label: self.translate.t(ADD_CAMPAIGN_KEY),
            },
            add_open: self.add.is_on(),
        }
    }

    /// Button click: flips the add form.
    pub fn click_add(&mut self) {
        self.add.toggle();
    }
}

fn add_icon() -> IconName {
    IconName::new(ADD_ICON).expect("static icon name")
}

#[cfg(test)]
mod tests {
    use super::{NoTranslation, Overview, Toggle, ADD_CAMPAIGN_KEY};

    #[test]
    fn view_counts_and_translates() {
        let overview = Overview::new(
            |key: &str| format!("[{key}]"),
            vec![1u32, 2, 3],
        );
        let view = overview.view();

        assert_eq!(view.summary_count, 3);
        assert_eq!(view.button.label, format!("[{ADD_CAMPAIGN_KEY}]"));
        assert_eq!(view.button.icon.as_str(), "plus");
        assert!(!view.add_open);
    }

    #[test]
    fn click_toggles_add_form() {
        let mut overview = Overview::new(NoTranslation, 0usize);
        overview.click_add();
        assert!(overview.view().add_open);
        overview.click_add();
        assert!(!overview.view().add_open);
    }

    #[test]
    fn toggle_starts_off() {
        let mut toggle = Toggle::default();
        assert!(!toggle.is_on());
        toggle.toggle();
        assert!(toggle.is_on());
    }
}
