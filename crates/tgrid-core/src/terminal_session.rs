#![forbid(unsafe_code)]

//! Terminal session lifecycle guard.
//!
//! [`TerminalSession`] owns raw-mode entry/exit and the handful of terminal
//! modes a full-screen grid needs. Every mode it enables is restored when the
//! session is dropped, from a panic hook, and (on unix) when SIGINT/SIGTERM
//! arrive.
//!
//! Restoration runs in reverse of setup: the cursor is shown again, the
//! alternate screen is left, raw mode is switched off, and stdout is
//! flushed. Each step is best effort so a failing one never blocks the rest.
//!
//! # Usage
//!
//! ```no_run
//! use std::time::Duration;
//! use tgrid_core::terminal_session::{SessionOptions, TerminalSession};
//!
//! fn run() -> std::io::Result<()> {
//!     let session = TerminalSession::new(SessionOptions::default())?;
//!     session.clear_screen()?;
//!     if let Some(key) = session.poll_key(Some(Duration::from_millis(100)))? {
//!         // handle key...
//!         let _ = key;
//!     }
//!     Ok(())
//! }
//! ```

use std::io::{self, Write};
use std::sync::OnceLock;
use std::time::Duration;

use crossterm::event as cte;

#[cfg(unix)]
use signal_hook::consts::signal::{SIGINT, SIGTERM};
#[cfg(unix)]
use signal_hook::iterator::Signals;

use crate::event::KeyEvent;

/// Terminal modes to enable for a session.
#[derive(Debug, Clone)]
pub struct SessionOptions {
    /// Draw on the alternate screen so the shell scrollback is untouched.
    pub alternate_screen: bool,
    /// Hide the hardware cursor; the grid draws its own.
    pub hide_cursor: bool,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            alternate_screen: true,
            hide_cursor: true,
        }
    }
}

/// RAII guard for raw mode and screen state.
#[derive(Debug)]
pub struct TerminalSession {
    options: SessionOptions,
    alternate_screen_enabled: bool,
    cursor_hidden: bool,
    #[cfg(unix)]
    signal_guard: Option<SignalGuard>,
}

impl TerminalSession {
    /// Enter raw mode and enable the requested modes.
    ///
    /// # Errors
    ///
    /// Returns an error if raw mode cannot be enabled or a mode sequence
    /// cannot be written.
    pub fn new(options: SessionOptions) -> io::Result<Self> {
        install_panic_hook();

        crossterm::terminal::enable_raw_mode()?;
        #[cfg(feature = "tracing")]
        tracing::info!("terminal raw mode enabled");

        let mut session = Self {
            options: options.clone(),
            alternate_screen_enabled: false,
            cursor_hidden: false,
            #[cfg(unix)]
            signal_guard: Some(SignalGuard::new()?),
        };

        let mut stdout = io::stdout();
        if options.alternate_screen {
            crossterm::execute!(stdout, crossterm::terminal::EnterAlternateScreen)?;
            session.alternate_screen_enabled = true;
            #[cfg(feature = "tracing")]
            tracing::info!("alternate screen enabled");
        }
        if options.hide_cursor {
            crossterm::execute!(stdout, crossterm::cursor::Hide)?;
            session.cursor_hidden = true;
        }

        Ok(session)
    }

    /// Get the session options.
    pub fn options(&self) -> &SessionOptions {
        &self.options
    }

    /// Get the current terminal size (columns, rows).
    pub fn size(&self) -> io::Result<(u16, u16)> {
        crossterm::terminal::size()
    }

    /// Clear the whole screen and home the cursor.
    ///
    /// Issued once before the first frame; later frames redraw in place.
    pub fn clear_screen(&self) -> io::Result<()> {
        crossterm::execute!(
            io::stdout(),
            crossterm::terminal::Clear(crossterm::terminal::ClearType::All),
            crossterm::cursor::MoveTo(0, 0)
        )
    }

    /// Wait for the next key press.
    ///
    /// With `None` this blocks until a key arrives. With `Some(timeout)` it
    /// returns `Ok(None)` when nothing actionable arrived in time. Non-key
    /// events and key releases are swallowed.
    pub fn poll_key(&self, timeout: Option<Duration>) -> io::Result<Option<KeyEvent>> {
        if let Some(timeout) = timeout
            && !cte::poll(timeout)?
        {
            return Ok(None);
        }
        loop {
            if let cte::Event::Key(key) = cte::read()? {
                let mapped = KeyEvent::from_crossterm(key);
                if mapped.is_actionable() {
                    return Ok(Some(mapped));
                }
            }
            if timeout.is_some() && !cte::poll(Duration::ZERO)? {
                return Ok(None);
            }
        }
    }

    /// Read one line of text in cooked mode.
    ///
    /// Raw mode is suspended for the duration of the read so the terminal
    /// echoes and edits the line itself. Returns `Ok(None)` at end of input.
    pub fn read_line(&self) -> io::Result<Option<String>> {
        let mut stdout = io::stdout();
        crossterm::terminal::disable_raw_mode()?;
        if self.cursor_hidden {
            crossterm::execute!(stdout, crossterm::cursor::Show)?;
        }

        let mut line = String::new();
        let read = io::stdin().read_line(&mut line);

        if self.cursor_hidden {
            crossterm::execute!(stdout, crossterm::cursor::Hide)?;
        }
        crossterm::terminal::enable_raw_mode()?;

        if read? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }

    fn cleanup(&mut self) {
        #[cfg(unix)]
        let _ = self.signal_guard.take();

        let mut stdout = io::stdout();
        if self.cursor_hidden {
            let _ = crossterm::execute!(stdout, crossterm::cursor::Show);
            self.cursor_hidden = false;
        }
        if self.alternate_screen_enabled {
            let _ = crossterm::execute!(stdout, crossterm::terminal::LeaveAlternateScreen);
            self.alternate_screen_enabled = false;
        }
        let _ = crossterm::terminal::disable_raw_mode();
        let _ = stdout.flush();
        #[cfg(feature = "tracing")]
        tracing::info!("terminal state restored");
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        self.cleanup();
    }
}

fn install_panic_hook() {
    static HOOK: OnceLock<()> = OnceLock::new();
    HOOK.get_or_init(|| {
        let previous = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            best_effort_cleanup();
            previous(info);
        }));
    });
}

fn best_effort_cleanup() {
    let mut stdout = io::stdout();
    let _ = crossterm::execute!(stdout, crossterm::cursor::Show);
    let _ = crossterm::execute!(stdout, crossterm::terminal::LeaveAlternateScreen);
    let _ = crossterm::terminal::disable_raw_mode();
    let _ = stdout.flush();
}

#[cfg(unix)]
#[derive(Debug)]
struct SignalGuard {
    handle: signal_hook::iterator::Handle,
    thread: Option<std::thread::JoinHandle<()>>,
}

#[cfg(unix)]
impl SignalGuard {
    fn new() -> io::Result<Self> {
        let mut signals = Signals::new([SIGINT, SIGTERM]).map_err(io::Error::other)?;
        let handle = signals.handle();
        let thread = std::thread::spawn(move || {
            if let Some(signal) = signals.forever().next() {
                #[cfg(feature = "tracing")]
                tracing::warn!(signal, "termination signal received, cleaning up");
                best_effort_cleanup();
                std::process::exit(128 + signal);
            }
        });
        Ok(Self {
            handle,
            thread: Some(thread),
        })
    }
}

#[cfg(unix)]
impl Drop for SignalGuard {
    fn drop(&mut self) {
        self.handle.close();
        if let Some(thread) = self.thread.take() {
            let _ = thread.join();
        }
    }
}
