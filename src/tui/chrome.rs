// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Tabnav and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

/// Layout, title, footer, help, and style helpers used by TUI rendering.
fn view_title(label: &str, tail: Option<&str>) -> String {
    let mut title = format!("─ {label}");
    if let Some(tail) = tail {
        let tail = tail.trim();
        if !tail.is_empty() {
            title.push(' ');
            title.push_str(tail);
        }
    }
    title.push(' ');
    title
}

fn decision_label(decision: Option<&Decision>) -> String {
    match decision {
        None => "—".to_owned(),
        Some(Decision::NoAction) => "no action".to_owned(),
        Some(Decision::RedirectToAlias { target }) => format!("alias redirect to {target}"),
        Some(Decision::RedirectToBase { target }) => format!("base redirect to {target}"),
    }
}

fn body_lines(app: &App) -> Vec<Line<'static>> {
    let label_style = Style::default().fg(FOOTER_LABEL_COLOR);
    let mut lines = vec![
        Line::from(vec![
            Span::styled("Location: ", label_style),
            Span::raw(app.history.current().to_owned()),
        ]),
        Line::from(vec![
            Span::styled("Last pass: ", label_style),
            Span::raw(decision_label(app.last_decision.as_ref())),
        ]),
        Line::from(vec![
            Span::styled("History: ", label_style),
            Span::raw(format!(
                "{} entries, {} passes",
                app.history.len(),
                app.passes
            )),
        ]),
    ];

    if let Some(error) = &app.error {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!("Error: {error}"),
            app.theme.error_style(),
        )));
    }

    if app.root_is_active() {
        let overview = app.overview.view();
        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::styled("Campaigns: ", label_style),
            Span::raw(overview.summary_count.to_string()),
        ]));
        let marker = if overview.add_open { "◼" } else { "◻" };
        lines.push(Line::from(vec![
            Span::styled(
                format!("[{} {}]", icon_glyph(&overview.button.icon), overview.button.label),
                Style::default()
                    .fg(FOOTER_KEY_COLOR)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(format!(" {marker}")),
        ]));
    }

    lines
}

fn footer_help_line(app: &App, toast_suffix: &str) -> Line<'static> {
    let mut spans = Vec::<Span<'static>>::new();

    push_footer_entry(&mut spans, "TABS", "←/→");
    push_footer_entry(&mut spans, "JUMP", "1-9");
    push_footer_entry(&mut spans, "GOTO", ":");
    push_footer_entry(&mut spans, "BACK", "b/f");
    push_footer_entry_maybe_disabled(&mut spans, "ADD", "a", !app.root_is_active());
    push_footer_entry(&mut spans, "HELP", "?");
    push_footer_entry(&mut spans, "QUIT", "q");

    push_toast(&mut spans, toast_suffix);
    Line::from(spans)
}

fn path_footer_line(buffer: &str, toast_suffix: &str) -> Line<'static> {
    let mut spans = vec![
        Span::styled(
            ":".to_owned(),
            Style::default()
                .fg(FOOTER_KEY_COLOR)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(buffer.to_owned()),
        Span::raw("   "),
    ];
    push_footer_entry_with_separator(&mut spans, "Go", "Enter", " | ");
    push_footer_entry_with_separator(&mut spans, "Close", "Esc", " | ");

    push_toast(&mut spans, toast_suffix);
    Line::from(spans)
}

fn push_toast(spans: &mut Vec<Span<'static>>, toast_suffix: &str) {
    let toast_message = toast_suffix
        .strip_prefix(" | ")
        .unwrap_or(toast_suffix)
        .trim();
    if !toast_message.is_empty() {
        spans.push(Span::styled(" | ", Style::default().fg(FOOTER_LABEL_COLOR)));
        spans.push(Span::styled(
            "Toast:".to_owned(),
            Style::default().fg(FOOTER_LABEL_COLOR),
        ));
        spans.push(Span::raw(toast_message.to_owned()));
    }
}

fn centered_rect(width_percent: u16, height_percent: u16, area: Rect) -> Rect {
    let vertical_margin = (100u16.saturating_sub(height_percent)) / 2;
    let horizontal_margin = (100u16.saturating_sub(width_percent)) / 2;

    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(vertical_margin),
            Constraint::Percentage(height_percent),
            Constraint::Percentage(vertical_margin),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(horizontal_margin),
            Constraint::Percentage(width_percent),
            Constraint::Percentage(horizontal_margin),
        ])
        .split(vertical[1])[1]
}

fn help_kv(key: &str, desc: &str, key_width: usize, key_style: Style) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{key:>key_width$}"), key_style.add_modifier(Modifier::BOLD)),
        Span::raw("  "),
        Span::raw(desc.to_owned()),
    ])
}

fn help_lines() -> Vec<Line<'static>> {
    let key_style = Style::default().fg(FOOTER_KEY_COLOR);
    let header_style = Style::default()
        .fg(Color::White)
        .add_modifier(Modifier::BOLD);
    let entries: [(&str, &str); 9] = [
        ("←/→, h/l", "Previous/next visible tab"),
        ("1-9", "Jump to tab by position"),
        (":", "Type a location and push it"),
        ("b/f", "History back/forward"),
        ("a", "Toggle add form (root tab)"),
        ("Enter", "Push typed location"),
        ("Esc", "Close prompt/help"),
        ("?", "Help (toggle)"),
        ("q", "Quit"),
    ];
    let key_width = entries.iter().map(|(key, _)| key.chars().count()).max().unwrap_or(0);

    let mut lines = vec![Line::from(Span::styled("--- Navigation ---", header_style))];
    lines.extend(
        entries
            .iter()
            .map(|(key, desc)| help_kv(key, desc, key_width, key_style)),
    );
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Invalid or aliased locations are replaced, not pushed.",
        Style::default().fg(Color::DarkGray),
    )));
    lines
}

fn render_help(frame: &mut Frame<'_>, app: &App, main_area: Rect) {
    let area = centered_rect(70, 60, main_area);
    frame.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .title("─ Help ─")
        .border_style(app.theme.border_style(true))
        .title_style(app.theme.border_style(true).add_modifier(Modifier::BOLD));

    let paragraph = Paragraph::new(help_lines())
        .block(block)
        .alignment(Alignment::Left)
        .wrap(Wrap { trim: false })
        .scroll((app.help_scroll, 0));
    frame.render_widget(paragraph, area);
}

fn push_footer_entry(spans: &mut Vec<Span<'static>>, label: &str, value: &str) {
    push_footer_entry_maybe_disabled(spans, label, value, false);
}

fn push_footer_entry_maybe_disabled(
    spans: &mut Vec<Span<'static>>,
    label: &str,
    value: &str,
    disabled: bool,
) {
    push_footer_entry_with_separator_maybe_disabled(spans, label, value, " | ", disabled);
}

fn push_footer_entry_with_separator(
    spans: &mut Vec<Span<'static>>,
    label: &str,
    value: &str,
    separator: &'static str,
) {
    push_footer_entry_with_separator_maybe_disabled(spans, label, value, separator, false);
}

fn push_footer_entry_with_separator_maybe_disabled(
    spans: &mut Vec<Span<'static>>,
    label: &str,
    value: &str,
    separator: &'static str,
    disabled: bool,
) {
    if !spans.is_empty() {
        spans.push(Span::styled(
            separator.to_owned(),
            Style::default().fg(FOOTER_LABEL_COLOR),
        ));
    }
    spans.push(Span::styled(
        format!("{}:", footer_label_ucfirst(label)),
        Style::default().fg(FOOTER_LABEL_COLOR),
    ));
    let color = if disabled {
        Color::DarkGray
    } else {
        FOOTER_KEY_COLOR
    };
    spans.push(Span::styled(
        value.to_owned(),
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    ));
}

fn footer_label_ucfirst(label: &str) -> String {
    let lower = label.to_lowercase();
    let mut chars = lower.chars();
    let Some(first) = chars.next() else {
        return String::new();
    };
    let mut out = first.to_uppercase().collect::<String>();
    out.push_str(chars.as_str());
    out
}

fn footer_brand_line() -> Line<'static> {
    Line::from(vec![Span::styled(
        FOOTER_BRAND.to_owned(),
        Style::default().fg(FOOTER_BRAND_COLOR),
    )])
}
