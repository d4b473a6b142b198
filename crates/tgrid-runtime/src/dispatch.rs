#![forbid(unsafe_code)]

//! Input dispatcher: the page/mode state machine.
//!
//! The dispatcher owns all mutable scene state: the pages, the cursor, and
//! the log buffer. It consumes one [`Token`] at a time while navigating and
//! one line at a time during text entry.
//!
//! # State machine
//!
//! ```text
//!   Navigate(p) --Move--------------> Navigate(p)          cursor clamped
//!   Navigate(p) --Activate(hit)-----> per bound action     "Selected: <label>"
//!   Navigate(p) --Activate(miss)----> Navigate(p)          NoHit logged
//!   Navigate(p) --Page(n) known-----> Navigate(n)
//!   Navigate(p) --Page(n) unknown---> Navigate(p)          InvalidPage logged
//!   Navigate(p) --Unrecognized------> Navigate(p)          logged
//!   Navigate(p) --Quit--------------> Quit
//!   TextEntry(p) --line-------------> Navigate(p)          processed line logged
//!   any         --input closed------> Quit
//! ```
//!
//! Rejected input is logged and never fatal. Only `Quit` is terminal.

use std::collections::BTreeMap;
use std::fmt;

use tgrid_core::geometry::{Rect, Size};
use tgrid_widgets::{ButtonId, Cursor, Label, LogBuffer, WidgetRegistry};
use tracing::{debug, info};

use crate::action::Action;
use crate::config::ConfigError;
use crate::page::Page;
use crate::token::Token;

/// Current mode of the state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Moving the cursor and pressing buttons on a page.
    Navigate(u8),
    /// Waiting for a line of text; navigation resumes on `return_page`.
    TextEntry { return_page: u8 },
    /// Terminal state.
    Quit,
}

/// Input that was rejected. The `Display` text is what gets logged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchError {
    /// Activate with no visible button under the cursor.
    NoHit { x: u16, y: u16 },
    /// A key without a meaning in the current mode.
    UnrecognizedInput(String),
    /// A page-select token naming a page that does not exist.
    InvalidPage(u8),
}

impl fmt::Display for DispatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoHit { .. } => write!(f, "No button at the cursor position!"),
            Self::UnrecognizedInput(_) => write!(f, "Invalid input!"),
            Self::InvalidPage(n) => write!(f, "Invalid page: {n}"),
        }
    }
}

impl std::error::Error for DispatchError {}

/// What one call to the dispatcher did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// The cursor is now here (possibly unchanged at an edge).
    Moved(Cursor),
    /// A button was pressed and its action ran.
    Activated(ButtonId),
    /// Now showing this page.
    PageSwitched(u8),
    /// A text-entry line was processed and logged.
    LineProcessed,
    /// The input was rejected; the error text was logged.
    Rejected(DispatchError),
    /// The input had no meaning in the current mode and was dropped.
    Ignored,
    /// The machine reached `Quit`.
    Quit,
}

/// Turns a text-entry line into the message that gets logged.
pub type LineProcessor = Box<dyn Fn(&str) -> String>;

/// The `"Processed: <line>"` processor.
pub fn default_processor(line: &str) -> String {
    format!("Processed: {line}")
}

/// Owns pages, cursor, and log; applies tokens and lines to them.
pub struct Dispatcher {
    pages: BTreeMap<u8, Page>,
    mode: Mode,
    visible_page: u8,
    cursor: Cursor,
    bounds: Rect,
    log: LogBuffer,
    processor: LineProcessor,
}

impl fmt::Debug for Dispatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dispatcher")
            .field("pages", &self.pages.keys().collect::<Vec<_>>())
            .field("mode", &self.mode)
            .field("cursor", &self.cursor)
            .field("log_len", &self.log.len())
            .finish_non_exhaustive()
    }
}

impl Dispatcher {
    /// Build a dispatcher over `pages`, all of which must share one grid
    /// size, starting in `Navigate(initial_page)` with the cursor at the
    /// top-left interior cell.
    pub fn new(pages: Vec<Page>, initial_page: u8, log: LogBuffer) -> Result<Self, ConfigError> {
        let size = pages
            .first()
            .map(|p| p.registry().size())
            .ok_or(ConfigError::NoPages)?;
        let mut by_id = BTreeMap::new();
        for page in pages {
            let actual = page.registry().size();
            if actual != size {
                return Err(ConfigError::PageSizeMismatch {
                    page: page.id(),
                    expected: size,
                    actual,
                });
            }
            let id = page.id();
            if by_id.insert(id, page).is_some() {
                return Err(ConfigError::DuplicatePage(id));
            }
        }
        if !by_id.contains_key(&initial_page) {
            return Err(ConfigError::UnknownPage(initial_page));
        }
        let bounds = size.bounds().interior();
        if bounds.is_empty() {
            return Err(ConfigError::GridTooSmall {
                width: size.width,
                height: size.height,
            });
        }
        Ok(Self {
            pages: by_id,
            mode: Mode::Navigate(initial_page),
            visible_page: initial_page,
            cursor: Cursor::new(bounds.x, bounds.y),
            bounds,
            log,
            processor: Box::new(default_processor),
        })
    }

    /// Replace the text-entry line processor.
    #[must_use]
    pub fn with_processor(mut self, processor: impl Fn(&str) -> String + 'static) -> Self {
        self.processor = Box::new(processor);
        self
    }

    #[inline]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    #[inline]
    pub fn is_quit(&self) -> bool {
        self.mode == Mode::Quit
    }

    #[inline]
    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    /// Cells the cursor may occupy.
    #[inline]
    pub fn cursor_bounds(&self) -> Rect {
        self.bounds
    }

    pub fn log(&self) -> &LogBuffer {
        &self.log
    }

    pub fn log_mut(&mut self) -> &mut LogBuffer {
        &mut self.log
    }

    /// Grid size shared by every page.
    pub fn size(&self) -> Size {
        Size::new(self.bounds.width + 2, self.bounds.height + 2)
    }

    pub fn page(&self, id: u8) -> Option<&Page> {
        self.pages.get(&id)
    }

    pub fn page_mut(&mut self, id: u8) -> Option<&mut Page> {
        self.pages.get_mut(&id)
    }

    pub fn pages(&self) -> impl Iterator<Item = &Page> {
        self.pages.values()
    }

    /// Id of the page on screen. During text entry this is the page that
    /// navigation will return to; after quit it is the last page shown.
    pub fn current_page_id(&self) -> u8 {
        self.visible_page
    }

    /// Registry of the page on screen.
    pub fn current_registry(&self) -> Option<&WidgetRegistry> {
        self.page(self.current_page_id()).map(Page::registry)
    }

    /// Prompt to draw: the page's prompt during text entry, otherwise none.
    pub fn prompt(&self) -> Option<&Label> {
        match self.mode {
            Mode::TextEntry { return_page } => self.page(return_page).and_then(Page::prompt),
            Mode::Navigate(_) | Mode::Quit => None,
        }
    }

    /// Apply one navigation token.
    pub fn handle(&mut self, token: Token) -> Step {
        let page = match self.mode {
            Mode::Navigate(page) => page,
            Mode::TextEntry { .. } | Mode::Quit => {
                debug!(%token, mode = ?self.mode, "token ignored");
                return Step::Ignored;
            }
        };
        debug!(%token, page, "dispatch");

        match token {
            Token::Move(dir) => {
                self.cursor = self.cursor.step(dir, self.bounds);
                Step::Moved(self.cursor)
            }
            Token::Activate => self.activate(page),
            Token::Page(n) => self.switch_page(n),
            Token::Quit => self.quit("quit requested"),
            Token::Unrecognized(key) => self.reject(DispatchError::UnrecognizedInput(key)),
        }
    }

    /// Apply one line of text. Only meaningful in text entry.
    pub fn handle_line(&mut self, line: &str) -> Step {
        let Mode::TextEntry { return_page } = self.mode else {
            debug!(mode = ?self.mode, "line ignored");
            return Step::Ignored;
        };
        let message = (self.processor)(line);
        self.log.push(message);
        self.mode = Mode::Navigate(return_page);
        Step::LineProcessed
    }

    /// The input source is exhausted.
    pub fn close(&mut self) -> Step {
        self.quit("input closed")
    }

    fn quit(&mut self, reason: &'static str) -> Step {
        info!(reason, "quit");
        self.mode = Mode::Quit;
        Step::Quit
    }

    fn reject(&mut self, error: DispatchError) -> Step {
        debug!(%error, "input rejected");
        self.log.push(error.to_string());
        Step::Rejected(error)
    }

    fn switch_page(&mut self, n: u8) -> Step {
        if !self.pages.contains_key(&n) {
            return self.reject(DispatchError::InvalidPage(n));
        }
        self.mode = Mode::Navigate(n);
        self.visible_page = n;
        Step::PageSwitched(n)
    }

    fn activate(&mut self, page: u8) -> Step {
        let Cursor { x, y } = self.cursor;
        let hit = self.pages.get(&page).and_then(|p| {
            let id = p.registry().hit_test(x, y)?;
            let label = p.registry().button(id)?.label.clone();
            Some((id, label, p.action(id).cloned().unwrap_or_default()))
        });
        let Some((id, label, action)) = hit else {
            return self.reject(DispatchError::NoHit { x, y });
        };

        self.log.push(format!("Selected: {label}"));
        match self.run_action(page, id, action) {
            Some(rejected) => rejected,
            None if self.mode == Mode::Quit => Step::Quit,
            None => Step::Activated(id),
        }
    }

    /// Run `action` for button `pressed` on `page`. Returns a step only when
    /// the action itself was rejected.
    fn run_action(&mut self, page: u8, pressed: ButtonId, action: Action) -> Option<Step> {
        match action {
            Action::Noop => None,
            Action::Log(message) => {
                self.log.push(message);
                None
            }
            Action::SwitchPage(n) => match self.switch_page(n) {
                rejected @ Step::Rejected(_) => Some(rejected),
                _ => None,
            },
            Action::TextEntry => {
                self.mode = Mode::TextEntry { return_page: page };
                None
            }
            Action::Quit => {
                self.quit("quit button");
                None
            }
            Action::Toggle(target) => {
                if let Some(p) = self.pages.get_mut(&page) {
                    p.registry_mut().toggle(target);
                }
                None
            }
            Action::Once(inner) => {
                let outcome = self.run_action(page, pressed, *inner);
                if let Some(p) = self.pages.get_mut(&page) {
                    p.registry_mut().hide(pressed);
                }
                outcome
            }
        }
    }
}
