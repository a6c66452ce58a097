//! Application state and event loop.
//!
//! The UI runs single-threaded: draw a frame, wait briefly for input, then
//! run a tick that folds worker completions into the window and fires any
//! due prefetch probe. Scrolling never fetches directly; it only feeds the
//! debouncer, and the trailing probe decides.

use std::sync::mpsc::Receiver;
use std::time::Instant;

use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEvent, MouseEventKind,
};
use ratatui::{
    backend::Backend,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame, Terminal,
};
use tracing::warn;

use crate::config::{DEBOUNCE_INTERVAL, ITEM_HEIGHT, TICK_INTERVAL, VIEWPORT_ROWS, WINDOW_HEIGHT};
use crate::error::Result;
use crate::scroll::{prefetch_direction, Debouncer};
use crate::widgets::product_list::{ProductList, ProductListState};
use crate::window::{FetchDirection, ProductWindow};
use crate::worker::{FetchComplete, FetchKind, FetchRequest, Requester};

/// Top-level state for the catalog browser
pub struct Application {
    /// The windowed view over the remote catalog
    window: ProductWindow,
    /// Scroll state of the list viewport
    list_state: ProductListState,
    /// Trailing-edge coalescing of scroll probes
    debouncer: Debouncer,
    /// Handle for submitting fetches to the worker
    requester: Requester,
    /// Completions coming back from the worker
    completions: Receiver<FetchComplete>,
    /// Set by quit keys; checked at the top of the loop
    should_quit: bool,
}

impl Application {
    /// Create the application around a spawned worker.
    pub fn new(requester: Requester, completions: Receiver<FetchComplete>) -> Self {
        Self {
            window: ProductWindow::new(),
            list_state: ProductListState::new(),
            debouncer: Debouncer::new(DEBOUNCE_INTERVAL),
            requester,
            completions,
            should_quit: false,
        }
    }

    /// Run the event loop until a quit key is pressed.
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()>
    where
        crate::error::Error: From<B::Error>,
    {
        while !self.should_quit {
            terminal.draw(|frame| self.draw(frame))?;

            if event::poll(TICK_INTERVAL)? {
                match event::read()? {
                    Event::Key(key) => self.on_key(key),
                    Event::Mouse(mouse) => self.on_mouse(mouse),
                    _ => {},
                }
            }

            self.on_tick(Instant::now());
        }

        Ok(())
    }

    fn on_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            },
            KeyCode::Up | KeyCode::Char('k') => self.on_scroll(-ITEM_HEIGHT),
            KeyCode::Down | KeyCode::Char('j') => self.on_scroll(ITEM_HEIGHT),
            KeyCode::PageUp => self.on_scroll(-WINDOW_HEIGHT),
            KeyCode::PageDown => self.on_scroll(WINDOW_HEIGHT),
            KeyCode::Home => self.on_scroll(-self.list_state.scroll.offset()),
            _ => {},
        }
    }

    fn on_mouse(&mut self, mouse: MouseEvent) {
        match mouse.kind {
            MouseEventKind::ScrollUp => self.on_scroll(-ITEM_HEIGHT),
            MouseEventKind::ScrollDown => self.on_scroll(ITEM_HEIGHT),
            _ => {},
        }
    }

    /// Move the viewport and arm the prefetch debounce.
    fn on_scroll(&mut self, delta: f64) {
        let item_count = self.window.len();
        if let Some(probe) = self.list_state.scroll.scroll_by(delta, item_count) {
            self.debouncer.record(probe, Instant::now());
        }
    }

    /// Fold in worker completions, then fire any due prefetch probe.
    fn on_tick(&mut self, now: Instant) {
        while let Ok(done) = self.completions.try_recv() {
            self.apply_completion(done);
        }

        if let Some(probe) = self.debouncer.poll(now) {
            if let Some(direction) = prefetch_direction(&probe, self.window.len()) {
                self.fetch(direction);
            }
        }
    }

    fn apply_completion(&mut self, done: FetchComplete) {
        match done.request.kind {
            FetchKind::Initial => match done.result {
                Ok(products) => self.window.replace_initial(products),
                Err(e) => warn!(err = %e, "initial catalog fetch failed"),
            },
            FetchKind::Paginate(direction) => {
                self.window.finish(direction, done.request.offset, done.result);
            },
        }
    }

    /// Dispatch a directional fetch if the window accepts it.
    fn fetch(&mut self, direction: FetchDirection) {
        if let Some(offset) = self.window.request(direction) {
            self.requester.fetch(FetchRequest::paginate(direction, offset));
        }
    }

    fn draw(&mut self, frame: &mut Frame<'_>) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),                 // title
                Constraint::Length(VIEWPORT_ROWS + 2), // bordered list viewport
                Constraint::Length(1),                 // loading indicator
                Constraint::Min(0),                    // debug panel
            ])
            .split(frame.area());

        let title = Paragraph::new("Products List")
            .alignment(Alignment::Center)
            .style(Style::default().add_modifier(Modifier::BOLD));
        frame.render_widget(title, chunks[0]);

        let list = ProductList::new(self.window.items())
            .block(Block::default().borders(Borders::ALL));
        frame.render_stateful_widget(list, chunks[1], &mut self.list_state);

        if self.window.is_loading() {
            let loading = Paragraph::new("Loading...")
                .alignment(Alignment::Center)
                .style(Style::default().fg(Color::Yellow));
            frame.render_widget(loading, chunks[2]);
        }

        frame.render_widget(self.debug_panel(), chunks[3]);
    }

    /// Debug panel showing the pagination internals.
    fn debug_panel(&self) -> Paragraph<'_> {
        let label = Style::default().fg(Color::DarkGray);
        let lines = vec![
            Line::from(vec![
                Span::styled("Skip: ", label),
                Span::raw(self.window.skip().to_string()),
            ]),
            Line::from(vec![
                Span::styled("Has More: ", label),
                Span::raw(self.window.has_more(FetchDirection::Next).to_string()),
            ]),
            Line::from(vec![
                Span::styled("Has More Prev: ", label),
                Span::raw(self.window.has_more(FetchDirection::Prev).to_string()),
            ]),
            Line::from(vec![
                Span::styled("Products: ", label),
                Span::raw(self.window.len().to_string()),
            ]),
        ];

        Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title("Debug Info"))
    }
}
