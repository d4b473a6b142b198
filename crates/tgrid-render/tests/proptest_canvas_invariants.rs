//! Property-based invariant tests for the canvas.
//!
//! 1. Out-of-bounds writes never change the canvas.
//! 2. Serialization is a pure function of canvas contents.
//! 3. Serialization always emits exactly one newline per row.
//! 4. Stripping SGR sequences from the serialized frame yields the plain lines.

use proptest::prelude::*;
use tgrid_render::canvas::Canvas;
use tgrid_render::cell::{Cell, Color, Style, StyleFlags};

fn color_strategy() -> impl Strategy<Value = Color> {
    prop_oneof![
        Just(Color::Default),
        Just(Color::Red),
        Just(Color::Blue),
        Just(Color::White),
        Just(Color::BrightGreen),
    ]
}

fn style_strategy() -> impl Strategy<Value = Style> {
    (color_strategy(), color_strategy(), any::<u8>()).prop_map(|(fg, bg, bits)| {
        Style::new()
            .fg(fg)
            .bg(bg)
            .flags(StyleFlags::from_bits_truncate(bits))
    })
}

fn cell_strategy() -> impl Strategy<Value = Cell> {
    (prop::char::range('!', '~'), style_strategy()).prop_map(|(ch, style)| Cell::new(ch, style))
}

fn canvas_strategy() -> impl Strategy<Value = Canvas> {
    (1u16..=12, 1u16..=8)
        .prop_flat_map(|(w, h)| {
            let writes = prop::collection::vec((0..w, 0..h, cell_strategy()), 0..40);
            (Just(w), Just(h), writes)
        })
        .prop_map(|(w, h, writes)| {
            let mut canvas = Canvas::new(w, h, Style::PLAIN);
            for (x, y, cell) in writes {
                canvas.set(x, y, cell);
            }
            canvas
        })
}

/// Remove every `ESC [ ... m` sequence.
fn strip_sgr(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars();
    while let Some(ch) = chars.next() {
        if ch == '\x1b' {
            for inner in chars.by_ref() {
                if inner == 'm' {
                    break;
                }
            }
        } else {
            out.push(ch);
        }
    }
    out
}

proptest! {
    #[test]
    fn out_of_bounds_writes_are_ignored(
        canvas in canvas_strategy(),
        dx in 0u16..=50,
        dy in 0u16..=50,
        cell in cell_strategy(),
    ) {
        let mut mutated = canvas.clone();
        mutated.set(canvas.width() + dx, dy, cell);
        mutated.set(dx, canvas.height() + dy, cell);
        prop_assert_eq!(mutated, canvas);
    }

    #[test]
    fn serialize_is_deterministic(canvas in canvas_strategy()) {
        let copy = canvas.clone();
        prop_assert_eq!(canvas.serialize(), canvas.serialize());
        prop_assert_eq!(canvas.serialize(), copy.serialize());
    }

    #[test]
    fn one_newline_per_row(canvas in canvas_strategy()) {
        let out = canvas.serialize();
        prop_assert_eq!(out.matches('\n').count(), canvas.height() as usize);
        prop_assert!(out.ends_with('\n'));
    }

    #[test]
    fn stripped_frame_matches_plain_lines(canvas in canvas_strategy()) {
        let stripped = strip_sgr(&canvas.serialize());
        let lines: Vec<&str> = stripped.lines().collect();
        let expected = canvas.to_plain_lines();
        prop_assert_eq!(lines, expected.iter().map(String::as_str).collect::<Vec<_>>());
    }
}
