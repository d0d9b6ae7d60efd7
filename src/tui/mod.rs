// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Tabnav and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Terminal UI.
//!
//! Hosts a [`NavigationReconciler`] against an in-memory [`LocationHistory`] so tab switching,
//! typed locations and history moves go through the same redirect rules a browser host would.

use std::{
    error::Error,
    io,
    time::{Duration, Instant},
};

use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};
use tracing::debug;

use crate::model::{HideEntry, HideList, IconName, TabDescriptor, TabName, TabSet};
use crate::overview::{NoTranslation, Overview};
use crate::reconcile::{
    drain_changes, ActiveSectionTracker, LocationHistory, NavigationReconciler, ReconcileError,
    TabBarConfig,
};
use crate::render::{icon_glyph, tab_bar_line};
use crate::route::{BasePath, Decision};

mod theme;

use theme::TuiTheme;

const FOOTER_LABEL_COLOR: Color = Color::Gray;
const FOOTER_KEY_COLOR: Color = Color::Cyan;
const FOOTER_BRAND_COLOR: Color = Color::White;
const FOOTER_BRAND: &str = "🆃 🅰 🅱 🅽 🅰 🆅 ";
const DEMO_CAMPAIGN_COUNT: usize = 3;
const TOAST_TTL: Duration = Duration::from_secs(2);

/// Runs the interactive terminal UI until the user quits.
///
/// `initial_path` defaults to the configured base path. A redirect loop on the initial location
/// is returned as an error before the terminal is taken over.
pub fn run(config: TabBarConfig, initial_path: Option<String>) -> Result<(), Box<dyn Error>> {
    let theme = TuiTheme::from_env()?;
    let mut app = App::new(config, initial_path, theme);
    app.start()?;

    let mut terminal = TerminalSession::new()?;
    while !app.should_quit {
        terminal.draw(|frame| draw(frame, &mut app))?;

        if event::poll(Duration::from_millis(250))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    app.handle_key(key);
                }
            }
        }
    }

    Ok(())
}

/// Built-in staking dashboard used by `--demo`.
pub fn demo_config() -> TabBarConfig {
    let tab = |name: &str, text: &str, icon: &str| {
        TabDescriptor::new(TabName::new(name).expect("static tab name"), text)
            .with_icon(IconName::new(icon).expect("static icon name"))
    };
    let items = TabSet::new(vec![
        tab("overview", "Overview", "home").as_root(),
        tab("actions", "Account actions", "user"),
        tab("payouts", "Payouts", "money-bill"),
        tab("query", "Validator stats", "search").with_alias("q"),
        tab("slashes", "Slashes", "flag"),
    ])
    .expect("static demo tabs");
    let base_path = BasePath::new("/staking").expect("static base path");

    TabBarConfig::new(base_path, items).with_hidden(HideList::from_iter([
        HideEntry::from("slashes"),
        HideEntry::from(false),
    ]))
}

fn draw(frame: &mut Frame<'_>, app: &mut App) {
    let area = frame.area();

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(area);
    let tabs_area = layout[0];
    let body_area = layout[1];
    let status_area = layout[2];

    let tab_line = tab_bar_line(&app.reconciler.view(), &app.theme.tab_bar_styles());
    let tabs_title = view_title("Tabs", Some(app.reconciler.config().base_path.as_str()));
    let tabs = Paragraph::new(tab_line).block(
        Block::default()
            .borders(Borders::ALL)
            .title(tabs_title)
            .border_style(app.theme.border_style(true)),
    );
    frame.render_widget(tabs, tabs_area);

    let body_title = view_title("Location", app.active_label().as_deref());
    let body = Paragraph::new(Text::from(body_lines(app)))
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(body_title)
                .border_style(app.theme.border_style(false)),
        );
    frame.render_widget(body, body_area);

    let toast_suffix = match app.toast.as_ref() {
        Some(toast) if toast.expires_at > Instant::now() => format!(" | {}", toast.message),
        Some(_) => {
            app.toast = None;
            String::new()
        }
        None => String::new(),
    };

    if let InputMode::Path { buffer } = &app.input {
        let status = Paragraph::new(path_footer_line(buffer, &toast_suffix));
        frame.render_widget(status, status_area);
        let cursor_x = status_area
            .x
            .saturating_add(1)
            .saturating_add(buffer.chars().count() as u16)
            .min(status_area.x.saturating_add(status_area.width.saturating_sub(1)));
        frame.set_cursor_position((cursor_x, status_area.y));
        return;
    }

    let status = Paragraph::new(footer_help_line(app, &toast_suffix));
    frame.render_widget(status, status_area);
    let brand = Paragraph::new(footer_brand_line()).alignment(Alignment::Right);
    frame.render_widget(brand, status_area);

    if app.show_help {
        render_help(frame, app, body_area);
    }
}

// Extracted header/footer/help rendering helpers.
include!("chrome.rs");

#[derive(Debug, Clone)]
struct Toast {
    message: String,
    expires_at: Instant,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum InputMode {
    Normal,
    Path { buffer: String },
}

struct App {
    history: LocationHistory,
    reconciler: NavigationReconciler,
    tracker: ActiveSectionTracker,
    overview: Overview<NoTranslation, usize>,
    theme: TuiTheme,
    input: InputMode,
    show_help: bool,
    help_scroll: u16,
    toast: Option<Toast>,
    error: Option<ReconcileError>,
    last_decision: Option<Decision>,
    passes: usize,
    should_quit: bool,
}

impl App {
    fn new(config: TabBarConfig, initial_path: Option<String>, theme: TuiTheme) -> Self {
        let initial = initial_path.unwrap_or_else(|| config.base_path.to_string());
        let tracker = ActiveSectionTracker::new();
        let reconciler = NavigationReconciler::new(config, tracker.reader());
        let last_decision = Some(reconciler.config().resolve(&initial));

        Self {
            history: LocationHistory::new(initial),
            reconciler,
            tracker,
            overview: Overview::new(NoTranslation, DEMO_CAMPAIGN_COUNT),
            theme,
            input: InputMode::Normal,
            show_help: false,
            help_scroll: 0,
            toast: None,
            error: None,
            last_decision,
            passes: 0,
            should_quit: false,
        }
    }

    /// Drains the mount event. Unlike later passes, a failure here is returned to the caller.
    fn start(&mut self) -> Result<(), ReconcileError> {
        self.passes += drain_changes(&mut self.history, &mut self.reconciler, &self.tracker)?;
        Ok(())
    }

    fn settle(&mut self) {
        if !self.history.has_pending() {
            return;
        }
        match drain_changes(&mut self.history, &mut self.reconciler, &self.tracker) {
            Ok(passes) => {
                self.passes += passes;
                self.error = None;
            }
            Err(err) => {
                self.set_toast(err.to_string());
                self.error = Some(err);
            }
        }
    }

    fn navigate(&mut self, path: impl Into<String>) {
        let path = path.into();
        debug!(path = path.as_str(), "user navigation");
        self.last_decision = Some(self.reconciler.config().resolve(&path));
        self.history.push(path);
        self.settle();
    }

    fn go_back(&mut self) {
        if !self.history.back() {
            self.set_toast("No earlier location");
            return;
        }
        self.last_decision = Some(self.reconciler.config().resolve(self.history.current()));
        self.settle();
    }

    fn go_forward(&mut self) {
        if !self.history.forward() {
            self.set_toast("No later location");
            return;
        }
        self.last_decision = Some(self.reconciler.config().resolve(self.history.current()));
        self.settle();
    }

    fn root_is_active(&self) -> bool {
        self.reconciler
            .location()
            .and_then(|path| self.reconciler.active_tab(path))
            .is_some_and(TabDescriptor::is_root)
    }

    fn active_label(&self) -> Option<String> {
        let section = self.tracker.current();
        let (icon, text) = section.indicator()?;
        Some(format!("— {} {text}", icon_glyph(icon)))
    }

    fn select_relative(&mut self, delta: isize) {
        let href = {
            let view = self.reconciler.view();
            let len = view.items.len();
            if len == 0 {
                return;
            }
            let next = match view.active_index() {
                Some(index) => (index as isize + delta).rem_euclid(len as isize) as usize,
                None => 0,
            };
            view.items[next].href.clone()
        };
        self.navigate(href);
    }

    fn jump_to(&mut self, position: usize) {
        let href = {
            let view = self.reconciler.view();
            position
                .checked_sub(1)
                .and_then(|index| view.items.get(index))
                .map(|item| item.href.clone())
        };
        match href {
            Some(href) => self.navigate(href),
            None => self.set_toast(format!("No tab {position}")),
        }
    }

    fn click_add(&mut self) {
        if !self.root_is_active() {
            self.set_toast("Add is only available on the root tab");
            return;
        }
        self.overview.click_add();
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if self.handle_key_code(key.code) {
            self.should_quit = true;
        }
    }

    fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
        if self.show_help {
            self.input = InputMode::Normal;
            self.help_scroll = 0;
        }
    }

    /// Returns `true` when the key asks to quit.
    fn handle_key_code(&mut self, code: KeyCode) -> bool {
        if self.show_help {
            match code {
                KeyCode::Char('q') => return true,
                KeyCode::Esc | KeyCode::Char('?') => self.show_help = false,
                KeyCode::Down | KeyCode::Char('j') => {
                    self.help_scroll = self.help_scroll.saturating_add(1);
                }
                KeyCode::Up | KeyCode::Char('k') => {
                    self.help_scroll = self.help_scroll.saturating_sub(1);
                }
                _ => {}
            }
            return false;
        }

        if let InputMode::Path { buffer } = &mut self.input {
            match code {
                KeyCode::Char(ch) => buffer.push(ch),
                KeyCode::Backspace => {
                    buffer.pop();
                }
                KeyCode::Enter => {
                    let path = std::mem::take(buffer);
                    self.input = InputMode::Normal;
                    if path.trim().is_empty() {
                        self.set_toast("Empty location");
                    } else {
                        self.navigate(path.trim());
                    }
                }
                KeyCode::Esc => self.input = InputMode::Normal,
                _ => {}
            }
            return false;
        }

        match code {
            KeyCode::Char('q') => return true,
            KeyCode::Char('?') => self.toggle_help(),
            KeyCode::Left | KeyCode::Char('h') => self.select_relative(-1),
            KeyCode::Right | KeyCode::Char('l') | KeyCode::Tab => self.select_relative(1),
            KeyCode::Char(ch @ '1'..='9') => {
                let position = ch.to_digit(10).map_or(0, |digit| digit as usize);
                self.jump_to(position);
            }
            KeyCode::Char(':') | KeyCode::Char('g') => {
                self.input = InputMode::Path {
                    buffer: String::new(),
                };
            }
            KeyCode::Char('b') | KeyCode::Backspace => self.go_back(),
            KeyCode::Char('f') => self.go_forward(),
            KeyCode::Char('a') => self.click_add(),
            _ => {}
        }
        false
    }

    fn set_toast(&mut self, message: impl Into<String>) {
        self.toast = Some(Toast {
            message: message.into(),
            expires_at: Instant::now() + TOAST_TTL,
        });
    }
}

struct TerminalSession {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
}

impl TerminalSession {
    fn new() -> Result<Self, Box<dyn Error>> {
        enable_raw_mode()?;

        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen).map_err(|err| {
            teardown_terminal();
            err
        })?;

        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend).map_err(|err| {
            teardown_terminal();
            err
        })?;
        terminal.clear().map_err(|err| {
            teardown_terminal();
            err
        })?;

        Ok(Self { terminal })
    }

    fn draw(&mut self, draw_fn: impl FnOnce(&mut Frame<'_>)) -> io::Result<()> {
        self.terminal.draw(draw_fn)?;
        Ok(())
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = self.terminal.show_cursor();
        teardown_terminal();
    }
}

fn teardown_terminal() {
    let _ = disable_raw_mode();
    let mut stdout = io::stdout();
    let _ = execute!(stdout, LeaveAlternateScreen);
}
