#![forbid(unsafe_code)]

//! Input tokens and the key-to-token mapping.
//!
//! The dispatcher consumes exactly one [`Token`] per frame. A [`Keymap`]
//! turns raw key events into tokens; keys with no binding become
//! [`Token::Unrecognized`] so the dispatcher can report them.

use std::collections::HashMap;
use std::fmt;

use tgrid_core::event::{KeyCode, KeyEvent};
use tgrid_widgets::Direction;

/// One discrete unit of navigation input.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Token {
    Move(Direction),
    Activate,
    Quit,
    /// Select page `0..=9`.
    Page(u8),
    /// Any key without a binding, described for the log.
    Unrecognized(String),
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Move(dir) => write!(f, "move {dir:?}"),
            Self::Activate => write!(f, "activate"),
            Self::Quit => write!(f, "quit"),
            Self::Page(n) => write!(f, "page {n}"),
            Self::Unrecognized(key) => write!(f, "unrecognized {key:?}"),
        }
    }
}

/// Maps key codes to tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keymap {
    bindings: HashMap<KeyCode, Token>,
}

impl Keymap {
    /// A keymap with no bindings. Every key is unrecognized.
    pub fn empty() -> Self {
        Self {
            bindings: HashMap::new(),
        }
    }

    /// Bind `code` to `token`, replacing any previous binding.
    #[must_use]
    pub fn bind(mut self, code: KeyCode, token: Token) -> Self {
        self.bindings.insert(code, token);
        self
    }

    /// Token bound to `code`, if any.
    pub fn lookup(&self, code: KeyCode) -> Option<&Token> {
        self.bindings.get(&code)
    }

    /// Translate a key event.
    ///
    /// Releases yield `None`. Ctrl+C always quits.
    pub fn translate(&self, key: &KeyEvent) -> Option<Token> {
        if !key.is_actionable() {
            return None;
        }
        if key.ctrl() && key.is_char('c') {
            return Some(Token::Quit);
        }
        Some(
            self.lookup(key.code)
                .cloned()
                .unwrap_or_else(|| Token::Unrecognized(describe_key(key.code))),
        )
    }

    /// Translate a bare character as if it were typed.
    pub fn translate_char(&self, ch: char) -> Token {
        self.lookup(KeyCode::Char(ch))
            .cloned()
            .unwrap_or_else(|| Token::Unrecognized(ch.to_string()))
    }
}

impl Default for Keymap {
    /// `w`/`a`/`s`/`d` and arrows move, `e` and Enter activate, `q` and Esc
    /// quit, digits select pages.
    fn default() -> Self {
        let mut map = Self::empty()
            .bind(KeyCode::Char('w'), Token::Move(Direction::Up))
            .bind(KeyCode::Char('a'), Token::Move(Direction::Left))
            .bind(KeyCode::Char('s'), Token::Move(Direction::Down))
            .bind(KeyCode::Char('d'), Token::Move(Direction::Right))
            .bind(KeyCode::Up, Token::Move(Direction::Up))
            .bind(KeyCode::Left, Token::Move(Direction::Left))
            .bind(KeyCode::Down, Token::Move(Direction::Down))
            .bind(KeyCode::Right, Token::Move(Direction::Right))
            .bind(KeyCode::Char('e'), Token::Activate)
            .bind(KeyCode::Enter, Token::Activate)
            .bind(KeyCode::Char('q'), Token::Quit)
            .bind(KeyCode::Escape, Token::Quit);
        for n in 0..=9u8 {
            map = map.bind(KeyCode::Char(char::from(b'0' + n)), Token::Page(n));
        }
        map
    }
}

fn describe_key(code: KeyCode) -> String {
    match code {
        KeyCode::Char(ch) => ch.to_string(),
        KeyCode::F(n) => format!("F{n}"),
        KeyCode::Other => "unknown key".to_string(),
        other => format!("{other:?}"),
    }
}
