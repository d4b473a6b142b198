#![forbid(unsafe_code)]

//! Presenter: one write per frame.
//!
//! The Presenter owns the output sink. Each call to [`Presenter::present`]
//! serializes the canvas, applies the caller's framing options, and hands
//! the result to the writer with a single `write_all` followed by `flush`.
//!
//! # Usage
//!
//! ```
//! use tgrid_render::canvas::Canvas;
//! use tgrid_render::cell::Style;
//! use tgrid_render::presenter::{PresentOptions, Presenter};
//!
//! let canvas = Canvas::new(2, 1, Style::PLAIN);
//! let mut presenter = Presenter::new(Vec::new(), PresentOptions::default());
//! presenter.present(&canvas).unwrap();
//! assert_eq!(presenter.get_ref().as_slice(), b"\x1b[0m  \n");
//! ```

use std::io::{self, Write};

use crate::ansi;
use crate::canvas::Canvas;

/// Framing applied around each serialized canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PresentOptions {
    /// Prefix each frame with `CSI H` so it overwrites the previous one in
    /// place instead of scrolling.
    pub home_cursor: bool,
    /// Translate `\n` to `\r\n` for terminals in raw mode.
    pub crlf: bool,
}

impl PresentOptions {
    /// Options for a live raw-mode terminal: redraw in place with CRLF.
    #[must_use]
    pub const fn terminal() -> Self {
        Self {
            home_cursor: true,
            crlf: true,
        }
    }
}

/// Writes serialized frames to an output sink.
#[derive(Debug)]
pub struct Presenter<W: Write> {
    writer: W,
    options: PresentOptions,
    frames: u64,
}

impl<W: Write> Presenter<W> {
    /// Create a presenter writing to `writer`.
    pub fn new(writer: W, options: PresentOptions) -> Self {
        Self {
            writer,
            options,
            frames: 0,
        }
    }

    #[inline]
    pub fn options(&self) -> PresentOptions {
        self.options
    }

    /// Number of frames presented so far.
    #[inline]
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Build the exact bytes [`present`](Self::present) would write.
    pub fn frame_string(&self, canvas: &Canvas) -> String {
        let body = canvas.serialize();
        let body = if self.options.crlf {
            ansi::crlf(&body)
        } else {
            body
        };
        if self.options.home_cursor {
            let mut out = String::with_capacity(ansi::CURSOR_HOME.len() + body.len());
            out.push_str(ansi::CURSOR_HOME);
            out.push_str(&body);
            out
        } else {
            body
        }
    }

    /// Present one frame.
    pub fn present(&mut self, canvas: &Canvas) -> io::Result<()> {
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!(
            "present",
            width = canvas.width(),
            height = canvas.height(),
            frame = self.frames
        );
        #[cfg(feature = "tracing")]
        let _guard = _span.enter();

        let frame = self.frame_string(canvas);
        self.writer.write_all(frame.as_bytes())?;
        self.writer.flush()?;
        self.frames += 1;

        #[cfg(feature = "tracing")]
        tracing::trace!(bytes = frame.len(), "frame presented");
        Ok(())
    }

    /// Clear the screen and home the cursor.
    pub fn clear_screen(&mut self) -> io::Result<()> {
        self.writer.write_all(ansi::ERASE_DISPLAY.as_bytes())?;
        self.writer.write_all(ansi::CURSOR_HOME.as_bytes())?;
        self.writer.flush()
    }

    #[inline]
    pub fn get_ref(&self) -> &W {
        &self.writer
    }

    #[inline]
    pub fn get_mut(&mut self) -> &mut W {
        &mut self.writer
    }

    /// Get the inner writer (consuming the presenter).
    pub fn into_inner(self) -> W {
        self.writer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::{Cell, Color, Style};

    /// Counts calls so the single-write contract can be checked.
    #[derive(Default)]
    struct CountingWriter {
        bytes: Vec<u8>,
        writes: usize,
        flushes: usize,
    }

    impl Write for CountingWriter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.writes += 1;
            self.bytes.extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            self.flushes += 1;
            Ok(())
        }
    }

    fn sample_canvas() -> Canvas {
        let mut canvas = Canvas::new(3, 2, Style::PLAIN);
        canvas.set(1, 0, Cell::new('X', Style::new().fg(Color::Red)));
        canvas
    }

    #[test]
    fn default_options_write_serialized_canvas() {
        let canvas = sample_canvas();
        let mut presenter = Presenter::new(Vec::new(), PresentOptions::default());
        presenter.present(&canvas).unwrap();
        assert_eq!(presenter.into_inner(), canvas.serialize().into_bytes());
    }

    #[test]
    fn one_write_and_one_flush_per_frame() {
        let canvas = sample_canvas();
        let mut presenter = Presenter::new(CountingWriter::default(), PresentOptions::terminal());
        presenter.present(&canvas).unwrap();
        presenter.present(&canvas).unwrap();
        let writer = presenter.get_ref();
        assert_eq!(writer.writes, 2);
        assert_eq!(writer.flushes, 2);
        assert_eq!(presenter.frames(), 2);
    }

    #[test]
    fn terminal_options_home_and_crlf() {
        let canvas = Canvas::new(2, 2, Style::PLAIN);
        let presenter = Presenter::new(Vec::new(), PresentOptions::terminal());
        assert_eq!(presenter.frame_string(&canvas), "\x1b[H\x1b[0m  \r\n  \r\n");
    }

    #[test]
    fn clear_screen_sequence() {
        let mut presenter = Presenter::new(Vec::new(), PresentOptions::default());
        presenter.clear_screen().unwrap();
        assert_eq!(presenter.into_inner(), b"\x1b[2J\x1b[H");
    }
}
