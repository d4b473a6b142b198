#![forbid(unsafe_code)]

//! Canonical key event types.
//!
//! The terminal driver translates crossterm events into these types so the
//! runtime's keymap never depends on the backend. Only keyboard input is
//! modeled; mouse, paste, and focus events are dropped at the boundary.

use bitflags::bitflags;
use crossterm::event as cte;

/// A keyboard event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    pub code: KeyCode,
    pub modifiers: Modifiers,
    /// Press, repeat, or release. Only enhanced keyboard reporting emits
    /// the latter two.
    pub kind: KeyEventKind,
}

impl KeyEvent {
    /// A plain key press.
    #[must_use]
    pub const fn new(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: Modifiers::NONE,
            kind: KeyEventKind::Press,
        }
    }

    #[must_use]
    pub const fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    #[must_use]
    pub const fn with_kind(mut self, kind: KeyEventKind) -> Self {
        self.kind = kind;
        self
    }

    /// Whether this is the character key `c`.
    #[must_use]
    pub fn is_char(&self, c: char) -> bool {
        matches!(self.code, KeyCode::Char(ch) if ch == c)
    }

    #[must_use]
    pub const fn ctrl(&self) -> bool {
        self.modifiers.contains(Modifiers::CTRL)
    }

    /// Whether this event should be acted on.
    ///
    /// Terminals with enhanced keyboard reporting emit release events too;
    /// the dispatcher consumes exactly one token per keystroke.
    #[must_use]
    pub const fn is_actionable(&self) -> bool {
        !matches!(self.kind, KeyEventKind::Release)
    }

    /// Convert a crossterm key event.
    ///
    /// Every key maps to something; keys the grid has no name for become
    /// [`KeyCode::Other`] so the keymap can still report them.
    #[must_use]
    pub fn from_crossterm(event: cte::KeyEvent) -> Self {
        Self {
            code: map_key_code(event.code),
            modifiers: map_modifiers(event.modifiers),
            kind: map_key_kind(event.kind),
        }
    }
}

/// The keys the grid distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    Char(char),
    Enter,
    Escape,
    Backspace,
    Tab,
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    PageUp,
    PageDown,
    Insert,
    Delete,
    BackTab,
    /// Function key, `F(1)` is F1.
    F(u8),
    /// Lock, media, and bare modifier keys.
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum KeyEventKind {
    #[default]
    Press,
    Repeat,
    Release,
}

bitflags! {
    /// Held modifier keys.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Modifiers: u8 {
        const NONE  = 0b0000;
        const SHIFT = 0b0001;
        const ALT   = 0b0010;
        const CTRL  = 0b0100;
    }
}

impl Default for Modifiers {
    fn default() -> Self {
        Self::NONE
    }
}

fn map_key_kind(kind: cte::KeyEventKind) -> KeyEventKind {
    match kind {
        cte::KeyEventKind::Press => KeyEventKind::Press,
        cte::KeyEventKind::Repeat => KeyEventKind::Repeat,
        cte::KeyEventKind::Release => KeyEventKind::Release,
    }
}

fn map_key_code(code: cte::KeyCode) -> KeyCode {
    match code {
        cte::KeyCode::Char(ch) => KeyCode::Char(ch),
        cte::KeyCode::Enter => KeyCode::Enter,
        cte::KeyCode::Esc => KeyCode::Escape,
        cte::KeyCode::Backspace => KeyCode::Backspace,
        cte::KeyCode::Tab => KeyCode::Tab,
        cte::KeyCode::Up => KeyCode::Up,
        cte::KeyCode::Down => KeyCode::Down,
        cte::KeyCode::Left => KeyCode::Left,
        cte::KeyCode::Right => KeyCode::Right,
        cte::KeyCode::Home => KeyCode::Home,
        cte::KeyCode::End => KeyCode::End,
        cte::KeyCode::PageUp => KeyCode::PageUp,
        cte::KeyCode::PageDown => KeyCode::PageDown,
        cte::KeyCode::Insert => KeyCode::Insert,
        cte::KeyCode::Delete => KeyCode::Delete,
        cte::KeyCode::BackTab => KeyCode::BackTab,
        cte::KeyCode::F(n) => KeyCode::F(n),
        _ => KeyCode::Other,
    }
}

fn map_modifiers(held: cte::KeyModifiers) -> Modifiers {
    [
        (cte::KeyModifiers::SHIFT, Modifiers::SHIFT),
        (cte::KeyModifiers::ALT, Modifiers::ALT),
        (cte::KeyModifiers::CONTROL, Modifiers::CTRL),
    ]
    .into_iter()
    .filter(|(ct, _)| held.contains(*ct))
    .fold(Modifiers::NONE, |acc, (_, ours)| acc | ours)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_event_is_char() {
        let event = KeyEvent::new(KeyCode::Char('q'));
        assert!(event.is_char('q'));
        assert!(!event.is_char('x'));
    }

    #[test]
    fn release_is_not_actionable() {
        let press = KeyEvent::new(KeyCode::Enter);
        assert!(press.is_actionable());
        assert!(press.with_kind(KeyEventKind::Repeat).is_actionable());
        assert!(!press.with_kind(KeyEventKind::Release).is_actionable());
    }

    #[test]
    fn crossterm_char_with_ctrl() {
        let ct = cte::KeyEvent::new(cte::KeyCode::Char('c'), cte::KeyModifiers::CONTROL);
        let mapped = KeyEvent::from_crossterm(ct);
        assert!(mapped.is_char('c'));
        assert!(mapped.ctrl());
        assert_eq!(mapped.kind, KeyEventKind::Press);
    }

    #[test]
    fn crossterm_arrows_and_escape() {
        let cases = [
            (cte::KeyCode::Up, KeyCode::Up),
            (cte::KeyCode::Down, KeyCode::Down),
            (cte::KeyCode::Left, KeyCode::Left),
            (cte::KeyCode::Right, KeyCode::Right),
            (cte::KeyCode::Esc, KeyCode::Escape),
            (cte::KeyCode::Enter, KeyCode::Enter),
        ];
        for (ct, expected) in cases {
            let mapped =
                KeyEvent::from_crossterm(cte::KeyEvent::new(ct, cte::KeyModifiers::NONE));
            assert_eq!(mapped.code, expected);
        }
    }

    #[test]
    fn crossterm_editing_keys_are_kept() {
        let cases = [
            (cte::KeyCode::Home, KeyCode::Home),
            (cte::KeyCode::End, KeyCode::End),
            (cte::KeyCode::PageUp, KeyCode::PageUp),
            (cte::KeyCode::PageDown, KeyCode::PageDown),
            (cte::KeyCode::Insert, KeyCode::Insert),
            (cte::KeyCode::Delete, KeyCode::Delete),
            (cte::KeyCode::BackTab, KeyCode::BackTab),
        ];
        for (ct, expected) in cases {
            let mapped =
                KeyEvent::from_crossterm(cte::KeyEvent::new(ct, cte::KeyModifiers::NONE));
            assert_eq!(mapped.code, expected);
            assert!(mapped.is_actionable());
        }
    }

    #[test]
    fn crossterm_unnamed_key_maps_to_other() {
        let ct = cte::KeyEvent::new(cte::KeyCode::CapsLock, cte::KeyModifiers::NONE);
        assert_eq!(KeyEvent::from_crossterm(ct).code, KeyCode::Other);
    }
}
