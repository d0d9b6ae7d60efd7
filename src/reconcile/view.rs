// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Tabnav and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use smol_str::SmolStr;

use crate::model::{IconName, TabDescriptor};

/// Everything the tab bar shows for one pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabBarView<'a> {
    pub current_section: Option<SectionIndicator>,
    pub items: Vec<TabItemView<'a>>,
}

impl TabBarView<'_> {
    pub fn active_index(&self) -> Option<usize> {
        self.items.iter().position(|item| item.is_active)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionIndicator {
    pub icon: IconName,
    pub text: SmolStr,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabItemView<'a> {
    pub tab: &'a TabDescriptor,
    pub index: usize,
    /// Number of visible tabs.
    pub num: usize,
    pub is_sequence: bool,
    pub href: String,
    pub is_active: bool,
}

impl TabItemView<'_> {
    /// 1-based position shown in front of the label when the tabs form a sequence.
    pub fn sequence_number(&self) -> Option<usize> {
        self.is_sequence.then_some(self.index + 1)
    }

    pub fn is_last(&self) -> bool {
        self.index + 1 == self.num
    }
}
