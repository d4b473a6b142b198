#![forbid(unsafe_code)]

//! Input sources.
//!
//! The run loop never talks to a terminal directly. It asks an
//! [`InputSource`] for the next token (optionally with a timeout) while
//! navigating, and for a whole line while in text entry.
//!
//! - [`ScriptedInput`] replays a fixed script; used by tests and the
//!   simulator.
//! - [`TerminalInput`] reads keys from a live [`TerminalSession`].

use std::collections::VecDeque;
use std::io;
use std::time::Duration;

use tgrid_core::terminal_session::TerminalSession;

use crate::token::{Keymap, Token};

/// Result of asking for the next token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Polled {
    Token(Token),
    /// Nothing arrived before the timeout.
    Pending,
    /// The source is exhausted and will never produce another token.
    Closed,
}

/// Where navigation tokens and text-entry lines come from.
pub trait InputSource {
    /// Next token. `None` blocks until one is available.
    fn poll_token(&mut self, timeout: Option<Duration>) -> io::Result<Polled>;

    /// Next full line, without its terminator. `Ok(None)` at end of input.
    fn next_line(&mut self) -> io::Result<Option<String>>;
}

impl<S: InputSource + ?Sized> InputSource for &mut S {
    fn poll_token(&mut self, timeout: Option<Duration>) -> io::Result<Polled> {
        (**self).poll_token(timeout)
    }

    fn next_line(&mut self) -> io::Result<Option<String>> {
        (**self).next_line()
    }
}

/// A pre-recorded input script.
///
/// Tokens and lines are kept in separate queues, matching how the run loop
/// consumes them: tokens while navigating, lines during text entry.
///
/// ```
/// use tgrid_runtime::input::{InputSource, Polled, ScriptedInput};
/// use tgrid_runtime::token::Token;
///
/// let mut input = ScriptedInput::from_keys("e").line("hello");
/// assert_eq!(input.poll_token(None).unwrap(), Polled::Token(Token::Activate));
/// assert_eq!(input.next_line().unwrap().as_deref(), Some("hello"));
/// assert_eq!(input.poll_token(None).unwrap(), Polled::Closed);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    tokens: VecDeque<Polled>,
    lines: VecDeque<String>,
}

impl ScriptedInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Script typed characters through the default keymap.
    pub fn from_keys(keys: &str) -> Self {
        Self::new().keys(keys, &Keymap::default())
    }

    /// Append typed characters through `keymap`.
    #[must_use]
    pub fn keys(mut self, keys: &str, keymap: &Keymap) -> Self {
        self.tokens
            .extend(keys.chars().map(|ch| Polled::Token(keymap.translate_char(ch))));
        self
    }

    #[must_use]
    pub fn token(mut self, token: Token) -> Self {
        self.tokens.push_back(Polled::Token(token));
        self
    }

    /// Append a poll that times out without a token.
    #[must_use]
    pub fn pending(mut self) -> Self {
        self.tokens.push_back(Polled::Pending);
        self
    }

    /// Queue a line for the next text entry.
    #[must_use]
    pub fn line(mut self, line: impl Into<String>) -> Self {
        self.lines.push_back(line.into());
        self
    }

    /// Tokens not yet consumed.
    pub fn remaining_tokens(&self) -> usize {
        self.tokens.len()
    }

    /// Lines not yet consumed.
    pub fn remaining_lines(&self) -> usize {
        self.lines.len()
    }
}

impl InputSource for ScriptedInput {
    fn poll_token(&mut self, _timeout: Option<Duration>) -> io::Result<Polled> {
        Ok(self.tokens.pop_front().unwrap_or(Polled::Closed))
    }

    fn next_line(&mut self) -> io::Result<Option<String>> {
        Ok(self.lines.pop_front())
    }
}

/// Keys from a live terminal session.
#[derive(Debug)]
pub struct TerminalInput {
    session: TerminalSession,
    keymap: Keymap,
}

impl TerminalInput {
    pub fn new(session: TerminalSession, keymap: Keymap) -> Self {
        Self { session, keymap }
    }

    pub fn session(&self) -> &TerminalSession {
        &self.session
    }

    pub fn keymap(&self) -> &Keymap {
        &self.keymap
    }

    /// Give back the session; dropping it restores the terminal.
    pub fn into_session(self) -> TerminalSession {
        self.session
    }
}

impl InputSource for TerminalInput {
    fn poll_token(&mut self, timeout: Option<Duration>) -> io::Result<Polled> {
        let polled = match self.session.poll_key(timeout)? {
            Some(key) => match self.keymap.translate(&key) {
                Some(token) => Polled::Token(token),
                None => Polled::Pending,
            },
            None => Polled::Pending,
        };
        Ok(polled)
    }

    fn next_line(&mut self) -> io::Result<Option<String>> {
        self.session.read_line()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tgrid_widgets::Direction;

    #[test]
    fn scripted_keys_use_default_keymap() {
        let mut input = ScriptedInput::from_keys("dx");
        assert_eq!(
            input.poll_token(None).unwrap(),
            Polled::Token(Token::Move(Direction::Right))
        );
        assert_eq!(
            input.poll_token(None).unwrap(),
            Polled::Token(Token::Unrecognized("x".into()))
        );
        assert_eq!(input.poll_token(None).unwrap(), Polled::Closed);
        assert_eq!(input.poll_token(None).unwrap(), Polled::Closed);
    }

    #[test]
    fn pending_is_replayed_in_order() {
        let mut input = ScriptedInput::new().pending().token(Token::Quit);
        assert_eq!(
            input.poll_token(Some(Duration::from_millis(5))).unwrap(),
            Polled::Pending
        );
        assert_eq!(input.poll_token(None).unwrap(), Polled::Token(Token::Quit));
    }

    #[test]
    fn lines_are_independent_of_tokens() {
        let mut input = ScriptedInput::new().line("a").line("b").token(Token::Activate);
        assert_eq!(input.remaining_tokens(), 1);
        assert_eq!(input.remaining_lines(), 2);
        assert_eq!(input.next_line().unwrap().as_deref(), Some("a"));
        assert_eq!(input.next_line().unwrap().as_deref(), Some("b"));
        assert_eq!(input.next_line().unwrap(), None);
        assert_eq!(input.poll_token(None).unwrap(), Polled::Token(Token::Activate));
    }

    #[test]
    fn mutable_reference_is_a_source() {
        fn drain(mut src: impl InputSource) -> usize {
            let mut n = 0;
            while let Ok(Polled::Token(_)) = src.poll_token(None) {
                n += 1;
            }
            n
        }
        let mut input = ScriptedInput::from_keys("wasd");
        assert_eq!(drain(&mut input), 4);
        assert_eq!(input.remaining_tokens(), 0);
    }
}
