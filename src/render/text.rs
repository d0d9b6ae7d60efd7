// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Tabnav and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

pub(crate) fn truncate_with_ellipsis(text: &str, max_len: usize) -> String {
    if max_len == 0 {
        return String::new();
    }

    let len = text_len(text);
    if len <= max_len {
        return text.to_owned();
    }

    if max_len == 1 {
        return "…".to_owned();
    }

    let mut out: String = text.chars().take(max_len - 1).collect();
    out.push('…');
    out
}

pub(crate) fn text_len(text: &str) -> usize {
    text.chars().count()
}

/// `"<n>. <label>"` for sequence tabs.
pub(crate) fn numbered_label(number: Option<usize>, label: &str) -> String {
    let Some(number) = number else {
        return label.to_owned();
    };
    let mut digits = itoa::Buffer::new();
    let digits = digits.format(number);
    let mut out = String::with_capacity(digits.len() + 2 + label.len());
    out.push_str(digits);
    out.push_str(". ");
    out.push_str(label);
    out
}
