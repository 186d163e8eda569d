use std::io::{self, IsTerminal};
use std::sync::OnceLock;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use time::OffsetDateTime;
use time::format_description::FormatItem;

use crate::gallery::{Card, GalleryController, NoDelay};
use crate::sink::MemorySink;

mod event_loop;
mod render;
mod runtime;
mod time_utils;

pub(super) use self::runtime::run;
use self::time_utils::fmt_clock;

pub(in crate::tui_shell) struct App {
    pub(in crate::tui_shell) controller: GalleryController,
    pub(in crate::tui_shell) surface: MemorySink,
    pub(in crate::tui_shell) account: String,
    pub(in crate::tui_shell) fetched_at: OffsetDateTime,

    // Cards are revealed from `surface` one per interval.
    pub(in crate::tui_shell) revealed: usize,
    pub(in crate::tui_shell) reveal_interval: Duration,
    pub(in crate::tui_shell) last_reveal: Option<Instant>,
    seen_generation: u64,

    pub(in crate::tui_shell) selected: usize,
    pub(in crate::tui_shell) scroll: u16,
    pub(in crate::tui_shell) quit: bool,
}

impl App {
    pub(in crate::tui_shell) fn load(opts: crate::tui::TuiRunOptions) -> Self {
        let controller = GalleryController::new(opts.projects, &opts.config);
        let mut app = App {
            controller,
            surface: MemorySink::new(),
            account: opts.config.account.clone(),
            fetched_at: OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc()),
            revealed: 0,
            reveal_interval: opts.config.reveal_delay(),
            last_reveal: None,
            seen_generation: 0,
            selected: 0,
            scroll: 0,
            quit: false,
        };
        app.controller.load(&mut app.surface, &mut NoDelay);
        app
    }

    /// Cards currently on screen.
    pub(in crate::tui_shell) fn visible_cards(&self) -> &[Card] {
        let n = self.revealed.min(self.surface.cards.len());
        &self.surface.cards[..n]
    }

    pub(in crate::tui_shell) fn revealing(&self) -> bool {
        self.revealed < self.surface.cards.len()
    }

    /// Advances the reveal clock. Returns true when a card was revealed.
    pub(in crate::tui_shell) fn tick(&mut self, now: Instant) -> bool {
        if self.surface.generation != self.seen_generation {
            self.seen_generation = self.surface.generation;
            self.revealed = 0;
            self.scroll = 0;
        }
        if !self.revealing() {
            return false;
        }
        let due = self
            .last_reveal
            .map(|t| now.saturating_duration_since(t) >= self.reveal_interval)
            .unwrap_or(true);
        if !due {
            return false;
        }
        self.revealed += 1;
        self.last_reveal = Some(now);
        true
    }

    pub(in crate::tui_shell) fn move_up(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub(in crate::tui_shell) fn move_down(&mut self) {
        let n = self.controller.selectors().len();
        if self.selected + 1 < n {
            self.selected += 1;
        }
    }

    pub(in crate::tui_shell) fn toggle_selected(&mut self) {
        let Some(sel) = self.controller.selectors().get(self.selected) else {
            return;
        };
        let id = sel.id.clone();
        let checked = !sel.checked;
        self.controller
            .toggle_selector(&id, checked, &mut self.surface, &mut NoDelay);
    }

    pub(in crate::tui_shell) fn show_more(&mut self) {
        if self.surface.show_more_visible {
            self.controller.show_more(&mut self.surface, &mut NoDelay);
        }
    }

    pub(in crate::tui_shell) fn scroll_down(&mut self) {
        self.scroll = self.scroll.saturating_add(5);
    }

    pub(in crate::tui_shell) fn scroll_up(&mut self) {
        self.scroll = self.scroll.saturating_sub(5);
    }
}

#[cfg(test)]
#[path = "../tests/tui_shell/app_tests.rs"]
mod tests;
