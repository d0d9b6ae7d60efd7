// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Tabnav and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::{env, error::Error, fmt};

use ratatui::style::{Color, Modifier, Style};

use crate::render::TabBarStyles;

const ACCENT_ENV: &str = "TABNAV_ACCENT";
const DEFAULT_ACCENT: Color = Color::LightGreen;

#[derive(Debug, Clone, Default)]
pub(crate) struct TuiTheme {
    accent: Option<Color>,
}

impl TuiTheme {
    pub(crate) fn from_env() -> Result<Self, ThemeError> {
        let accent = accent_override_from_env()?;
        Ok(Self { accent })
    }

    pub(crate) fn accent(&self) -> Color {
        self.accent.unwrap_or(DEFAULT_ACCENT)
    }

    pub(crate) fn border_style(&self, focused: bool) -> Style {
        if focused {
            Style::default().fg(self.accent())
        } else {
            Style::default()
        }
    }

    pub(crate) fn tab_bar_styles(&self) -> TabBarStyles {
        TabBarStyles {
            base: Style::default(),
            active: Style::default()
                .fg(Color::Black)
                .bg(self.accent())
                .add_modifier(Modifier::BOLD),
            inactive: Style::default().fg(Color::Gray),
            indicator: Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
            separator: Style::default().fg(Color::DarkGray),
        }
    }

    pub(crate) fn error_style(&self) -> Style {
        Style::default().fg(Color::Red)
    }
}

fn accent_override_from_env() -> Result<Option<Color>, ThemeError> {
    let value = match env::var(ACCENT_ENV) {
        Ok(value) => value,
        Err(env::VarError::NotPresent) => return Ok(None),
        Err(env::VarError::NotUnicode(_)) => {
            return Err(ThemeError::InvalidEnv {
                name: ACCENT_ENV.to_string(),
                value: "<non-unicode>".to_string(),
            });
        }
    };

    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    parse_color(trimmed)
        .map(Some)
        .map_err(|error| ThemeError::InvalidEnv {
            name: ACCENT_ENV.to_string(),
            value: format!("{trimmed} ({error})"),
        })
}

fn parse_color(value: &str) -> Result<Color, String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err("empty color".to_string());
    }

    let lower = trimmed.to_ascii_lowercase();
    if let Some(rest) = lower.strip_prefix("rgb:") {
        let parts: Vec<&str> = rest.split('/').collect();
        if parts.len() != 3 {
            return Err(format!("invalid rgb: value: {trimmed}"));
        }
        let r = parse_hex_channel(parts[0])?;
        let g = parse_hex_channel(parts[1])?;
        let b = parse_hex_channel(parts[2])?;
        return Ok(Color::Rgb(r, g, b));
    }

    let hex = trimmed
        .strip_prefix('#')
        .or_else(|| trimmed.strip_prefix("0x"))
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed);

    if hex.len() != 6 || !hex.chars().all(|ch| ch.is_ascii_hexdigit()) {
        return Err(format!("invalid hex color: {trimmed} (expected #RRGGBB)"));
    }
    let rgb = u32::from_str_radix(hex, 16).map_err(|_| format!("invalid hex color: {trimmed}"))?;
    let r = ((rgb >> 16) & 0xFF) as u8;
    let g = ((rgb >> 8) & 0xFF) as u8;
    let b = (rgb & 0xFF) as u8;
    Ok(Color::Rgb(r, g, b))
}

fn parse_hex_channel(value: &str) -> Result<u8, String> {
    let value = value.trim();
    match value.len() {
        2 => u8::from_str_radix(value, 16).map_err(|_| format!("invalid rgb: component {value}")),
        4 => u16::from_str_radix(value, 16)
            .map(|parsed| (parsed >> 8) as u8)
            .map_err(|_| format!("invalid rgb: component {value}")),
        _ => Err(format!(
            "invalid rgb: component {value} (expected 2 or 4 hex digits)"
        )),
    }
}

#[derive(Debug, Clone)]
pub(crate) enum ThemeError {
    InvalidEnv { name: String, value: String },
}

impl fmt::Display for ThemeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidEnv { name, value } => write!(f, "invalid env {name}={value}"),
        }
    }
}

impl Error for ThemeError {}
