#![forbid(unsafe_code)]

//! ANSI escape sequence generation helpers.
//!
//! Pure string-building functions; no state tracking. The canvas serializer
//! decides *when* a sequence is needed, these helpers decide *what* it is.
//!
//! # Sequence Reference
//!
//! | Category | Sequence | Description |
//! |----------|----------|-------------|
//! | CSI | `ESC [ n ; ... m` | SGR (Select Graphic Rendition) |
//! | CSI | `ESC [ H` | Cursor home |
//! | CSI | `ESC [ 2 J` | Erase display |

use crate::cell::{Color, Style, StyleFlags};

/// SGR reset: `CSI 0 m`
pub const SGR_RESET: &str = "\x1b[0m";

/// Cursor home: `CSI H`
pub const CURSOR_HOME: &str = "\x1b[H";

/// Erase entire display: `CSI 2 J`
pub const ERASE_DISPLAY: &str = "\x1b[2J";

/// SGR enable codes for each style flag, in emission order.
const FLAG_TABLE: [(StyleFlags, u8); 6] = [
    (StyleFlags::BOLD, 1),
    (StyleFlags::DIM, 2),
    (StyleFlags::ITALIC, 3),
    (StyleFlags::UNDERLINE, 4),
    (StyleFlags::BLINK, 5),
    (StyleFlags::REVERSE, 7),
];

/// SGR parameters for a style, not including the leading reset.
#[must_use]
pub fn sgr_params(style: Style) -> Vec<u8> {
    let mut params = Vec::with_capacity(4);
    for (flag, code) in FLAG_TABLE {
        if style.flags.contains(flag) {
            params.push(code);
        }
    }
    if style.fg != Color::Default {
        params.push(style.fg.fg_code());
    }
    if style.bg != Color::Default {
        params.push(style.bg.bg_code());
    }
    params
}

/// Append a sequence that resets attributes and then applies `style`.
///
/// Emits a single `CSI 0 ; p1 ; p2 ... m`, or a bare reset for the plain
/// style. Reset-then-apply keeps the output independent of whatever the
/// previous cell enabled.
pub fn push_style(out: &mut String, style: Style) {
    let params = sgr_params(style);
    if params.is_empty() {
        out.push_str(SGR_RESET);
        return;
    }
    out.push_str("\x1b[0");
    for p in params {
        out.push(';');
        push_u8_dec(out, p);
    }
    out.push('m');
}

#[inline]
fn push_u8_dec(out: &mut String, n: u8) {
    if n >= 100 {
        out.push(char::from(b'0' + n / 100));
    }
    if n >= 10 {
        out.push(char::from(b'0' + (n / 10) % 10));
    }
    out.push(char::from(b'0' + n % 10));
}

/// Translate bare `\n` line endings to `\r\n`.
///
/// Raw-mode terminals do not return the carriage on a line feed.
#[must_use]
pub fn crlf(frame: &str) -> String {
    let mut out = String::with_capacity(frame.len() + frame.len() / 16);
    for ch in frame.chars() {
        if ch == '\n' {
            out.push('\r');
        }
        out.push(ch);
    }
    out
}
