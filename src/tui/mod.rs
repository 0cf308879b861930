// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Apiscope-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Apiscope and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Terminal UI.
//!
//! Provides the interactive outline viewer (ratatui + crossterm), including a built-in demo
//! document.

use std::{error::Error, io, sync::Arc};

use crossterm::{
    event::{self, Event, KeyEvent, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
};
use tracing::{debug, info};

use crate::detail::{DetailBlock, DetailFormatter, Segment, INDENT_WIDTH};
use crate::index::EndpointIndex;
use crate::model::{fixtures, Endpoint, SpecDocument};
use crate::nav::{Outline, OutlineRow, Selection};

mod input;
mod theme;

use input::{Action, InputRouter};
use theme::TuiTheme;

/// Runs the interactive terminal UI over an already indexed document.
///
/// Blocks until the user quits. The terminal is restored on every exit path.
pub fn run(document: &SpecDocument, index: &EndpointIndex) -> Result<(), Box<dyn Error>> {
    let theme = TuiTheme::from_env()?;
    let mut terminal = TerminalSession::new()?;
    let mut app = App::new(document, index, theme);

    while !app.should_quit {
        terminal.draw(|frame| draw(frame, &mut app))?;

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key),
            _ => {}
        }
    }

    Ok(())
}

/// Sample document used by `--demo`.
pub fn demo_document() -> SpecDocument {
    fixtures::petstore()
}

fn draw(frame: &mut Frame<'_>, app: &mut App) {
    let area = frame.area();

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(area);
    let main_area = layout[0];
    let footer_area = layout[1];

    let compact = stack_panes_vertically(main_area);
    let direction = if compact {
        Direction::Vertical
    } else {
        Direction::Horizontal
    };
    let panes = Layout::default()
        .direction(direction)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(main_area);
    let outline_area = panes[0];
    let detail_area = panes[1];

    app.outline.set_viewport_height(outline_area.height.saturating_sub(2) as usize);
    app.detail_viewport_height = detail_area.height.saturating_sub(2) as usize;
    app.detail_viewport_width = detail_area.width.saturating_sub(2);

    let items = app
        .outline
        .visible_rows()
        .into_iter()
        .map(|row| ListItem::new(outline_row_line(row, &app.theme)))
        .collect::<Vec<_>>();
    app.outline_state.select(Some(app.outline.cursor()));
    let outline_focused = app.focus == Focus::Outline;
    let outline = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(view_title("Endpoints", "e", Some(&app.header)))
                .border_style(app.theme.panel_border_style(outline_focused)),
        )
        .style(app.theme.base_style())
        .highlight_style(app.theme.selection_style(outline_focused));
    frame.render_stateful_widget(outline, outline_area, &mut app.outline_state);

    let detail_tail = app.selected.as_ref().map(|endpoint| endpoint.to_string());
    let detail_body = match &app.detail {
        Some(block) => detail_text(block, &app.theme),
        None => empty_detail_text(&app.theme),
    };
    let detail = Paragraph::new(detail_body)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(view_title("Detail", "tab", detail_tail.as_deref()))
                .border_style(app.theme.panel_border_style(app.focus == Focus::Detail)),
        )
        .style(app.theme.base_style())
        .wrap(Wrap { trim: false })
        .scroll((app.detail_scroll, 0));
    frame.render_widget(detail, detail_area);

    let footer = Paragraph::new(footer_help_line(app.focus, compact, &app.theme))
        .style(app.theme.base_style());
    frame.render_widget(footer, footer_area);
}

include!("chrome.rs");

struct App {
    header: String,
    outline: Outline,
    outline_state: ListState,
    router: InputRouter,
    formatter: DetailFormatter,
    theme: TuiTheme,
    selected: Option<Arc<Endpoint>>,
    detail: Option<DetailBlock>,
    detail_scroll: u16,
    detail_viewport_height: usize,
    detail_viewport_width: u16,
    focus: Focus,
    should_quit: bool,
}

impl App {
    fn new(document: &SpecDocument, index: &EndpointIndex, theme: TuiTheme) -> Self {
        Self {
            header: document_header(document),
            outline: Outline::new(index),
            outline_state: ListState::default(),
            router: InputRouter::default(),
            formatter: DetailFormatter::new(),
            theme,
            selected: None,
            detail: None,
            detail_scroll: 0,
            detail_viewport_height: 0,
            detail_viewport_width: 0,
            focus: Focus::Outline,
            should_quit: false,
        }
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if self.should_quit {
            return;
        }
        let action = self.router.route(key);
        self.apply(action);
    }

    fn apply(&mut self, action: Action) {
        match action {
            Action::Quit => {
                info!("quit requested");
                self.should_quit = true;
            }
            Action::FocusOutline => self.focus = Focus::Outline,
            Action::CycleFocus => self.focus = self.focus.cycle(),
            Action::SelectCurrent => self.select_current(),
            Action::Expand => {
                if self.outline.expand() {
                    debug!(cursor = self.outline.cursor(), "tag expanded");
                }
            }
            Action::Collapse => {
                if self.outline.collapse() {
                    debug!(cursor = self.outline.cursor(), "tag collapsed");
                }
            }
            Action::Noop => {}
            motion => match self.focus {
                Focus::Outline => self.move_outline(motion),
                Focus::Detail => self.scroll_detail(motion),
            },
        }
    }

    fn select_current(&mut self) {
        match self.outline.select_current() {
            Selection::Toggled { tag, expanded } => {
                debug!(tag = %tag, expanded, "tag toggled");
            }
            Selection::Endpoint(endpoint) => {
                debug!(endpoint = %endpoint, "endpoint selected");
                self.detail = Some(self.formatter.render(&endpoint));
                self.detail_scroll = 0;
                self.selected = Some(endpoint);
            }
            Selection::Empty => {}
        }
    }

    fn move_outline(&mut self, motion: Action) {
        match motion {
            Action::Move(delta) => self.outline.move_by(delta),
            Action::HalfPageDown => self.outline.half_page_down(),
            Action::HalfPageUp => self.outline.half_page_up(),
            Action::PageDown => self.outline.page_down(),
            Action::PageUp => self.outline.page_up(),
            Action::JumpTop => self.outline.jump_top(),
            Action::JumpBottom => self.outline.jump_bottom(),
            _ => {}
        }
    }

    fn scroll_detail(&mut self, motion: Action) {
        let half = (self.detail_viewport_height / 2).max(1) as isize;
        let full = self.detail_viewport_height.max(1) as isize;
        match motion {
            Action::Move(delta) => self.scroll_detail_by(delta),
            Action::HalfPageDown => self.scroll_detail_by(half),
            Action::HalfPageUp => self.scroll_detail_by(-half),
            Action::PageDown => self.scroll_detail_by(full),
            Action::PageUp => self.scroll_detail_by(-full),
            Action::JumpTop => self.detail_scroll = 0,
            Action::JumpBottom => self.detail_scroll = self.max_detail_scroll(),
            _ => {}
        }
    }

    fn scroll_detail_by(&mut self, delta: isize) {
        let current = self.detail_scroll as isize;
        let max = self.max_detail_scroll() as isize;
        self.detail_scroll = current.saturating_add(delta).clamp(0, max) as u16;
    }

    /// Last wrapped row may scroll to the top of the pane, never past it.
    ///
    /// Rows are counted at the width of the last draw; before the first draw every block line
    /// counts as one row.
    fn max_detail_scroll(&self) -> u16 {
        let Some(block) = self.detail.as_ref() else {
            return 0;
        };
        let rows = if self.detail_viewport_width == 0 {
            block.len()
        } else {
            Paragraph::new(detail_text(block, &self.theme))
                .wrap(Wrap { trim: false })
                .line_count(self.detail_viewport_width)
        };
        u16::try_from(rows.saturating_sub(1)).unwrap_or(u16::MAX)
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
