// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Tabnav and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

#![allow(dead_code)]

// Shared deterministic benchmark fixtures (no RNG).

use tabnav::model::{HideList, IconName, TabDescriptor, TabName, TabSet};
use tabnav::reconcile::TabBarConfig;
use tabnav::route::BasePath;

pub const BASE_PATH: &str = "/bench";

pub struct TabBarCase {
    pub id: &'static str,
    pub config: TabBarConfig,
    pub paths: Vec<String>,
}

/// `tab_count` tabs, every third aliased, every fifth hidden, the first one root.
pub fn tab_bar_config(tab_count: usize) -> TabBarConfig {
    assert!(tab_count >= 1, "tab bar fixture needs at least one tab");

    let icon = IconName::new("list").expect("icon name");
    let tabs = (0..tab_count)
        .map(|idx| {
            let name = TabName::new(format!("tab_{idx:04}")).expect("tab name");
            let mut tab = TabDescriptor::new(name, format!("Tab {idx}")).with_icon(icon.clone());
            if idx == 0 {
                tab = tab.as_root();
            }
            if idx % 3 == 1 {
                tab = tab.with_alias(format!("t{idx}"));
            }
            tab
        })
        .collect::<Vec<_>>();
    let hidden = (0..tab_count)
        .filter(|idx| idx % 5 == 4)
        .map(|idx| format!("tab_{idx:04}"))
        .collect::<HideList>();

    let items = TabSet::new(tabs).expect("tab set");
    let base_path = BasePath::new(BASE_PATH).expect("base path");
    TabBarConfig::new(base_path, items)
        .with_hidden(hidden)
        .with_sequence(true)
}

/// A mix of settled, aliased, hidden and unknown locations.
pub fn location_mix(tab_count: usize, count: usize) -> Vec<String> {
    (0..count)
        .map(|idx| {
            let tab = idx % tab_count;
            match idx % 4 {
                0 => format!("{BASE_PATH}/tab_{tab:04}/detail/{idx}"),
                1 => format!("{BASE_PATH}/t{tab}"),
                2 => format!("{BASE_PATH}/unknown_{idx}"),
                _ => BASE_PATH.to_owned(),
            }
        })
        .collect()
}

pub fn cases() -> Vec<TabBarCase> {
    [("small", 6usize), ("medium", 40), ("large", 400)]
        .into_iter()
        .map(|(id, tab_count)| TabBarCase {
            id,
            config: tab_bar_config(tab_count),
            paths: location_mix(tab_count, 256),
        })
        .collect()
}
