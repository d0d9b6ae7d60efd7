// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Tabnav and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Rendering for tab bars.
//!
//! Turns a [`TabBarView`] into a styled ratatui line for the TUI, or into plain text for
//! non-interactive output.

use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use crate::model::IconName;
use crate::reconcile::{SectionIndicator, TabBarView, TabItemView};

mod text;

pub(crate) use text::truncate_with_ellipsis;
use text::numbered_label;

/// Labels longer than this are cut with an ellipsis.
pub const MAX_TAB_LABEL_LEN: usize = 24;

const PLAIN_SEPARATOR: &str = " | ";
const SEQUENCE_SEPARATOR: &str = " › ";
const INDICATOR_DELIMITER: &str = " ┃ ";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TabBarStyles {
    pub base: Style,
    pub active: Style,
    pub inactive: Style,
    pub indicator: Style,
    pub separator: Style,
}

impl TabBarStyles {
    pub fn plain() -> Self {
        Self {
            active: Style::default().add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            ..Self::default()
        }
    }
}

/// Terminal stand-in for an icon name. Unknown icons get a bullet.
pub fn icon_glyph(icon: &IconName) -> char {
    match icon.as_str() {
        "home" | "house" => '⌂',
        "search" | "magnifying-glass" => '⌕',
        "user" | "users" => '☺',
        "plus" => '+',
        "money-bill" | "coins" => '¤',
        "clock" => '◷',
        "flag" => '⚑',
        "star" => '★',
        "list" | "list-alt" => '≡',
        _ => '•',
    }
}

fn indicator_spans(indicator: &SectionIndicator, styles: &TabBarStyles) -> Vec<Span<'static>> {
    vec![
        Span::styled(
            format!("{} {}", icon_glyph(&indicator.icon), indicator.text),
            styles.indicator,
        ),
        Span::styled(INDICATOR_DELIMITER.to_owned(), styles.separator),
    ]
}

fn item_label(item: &TabItemView<'_>) -> String {
    let label = truncate_with_ellipsis(item.tab.text(), MAX_TAB_LABEL_LEN);
    numbered_label(item.sequence_number(), &label)
}

fn separator(view: &TabBarView<'_>) -> &'static str {
    match view.items.first() {
        Some(item) if item.is_sequence => SEQUENCE_SEPARATOR,
        _ => PLAIN_SEPARATOR,
    }
}

pub fn tab_bar_line(view: &TabBarView<'_>, styles: &TabBarStyles) -> Line<'static> {
    let mut spans = Vec::<Span<'static>>::new();

    if let Some(indicator) = &view.current_section {
        spans.extend(indicator_spans(indicator, styles));
    }

    let separator = separator(view);
    for item in &view.items {
        if item.index > 0 {
            spans.push(Span::styled(separator.to_owned(), styles.separator));
        }
        let style = if item.is_active {
            styles.active
        } else {
            styles.inactive
        };
        spans.push(Span::styled(item_label(item), style));
    }

    let mut line = Line::from(spans);
    line.style = styles.base;
    line
}

/// Plain-text rendering; the active tab is wrapped in `[` `]`.
pub fn tab_bar_plain(view: &TabBarView<'_>) -> String {
    let mut out = String::new();

    if let Some(indicator) = &view.current_section {
        out.push(icon_glyph(&indicator.icon));
        out.push(' ');
        out.push_str(&indicator.text);
        out.push_str(INDICATOR_DELIMITER);
    }

    let separator = separator(view);
    for item in &view.items {
        if item.index > 0 {
            out.push_str(separator);
        }
        let label = item_label(item);
        if item.is_active {
            out.push('[');
            out.push_str(&label);
            out.push(']');
        } else {
            out.push_str(&label);
        }
    }

    out
}
