#![forbid(unsafe_code)]

//! The frame loop.
//!
//! ```text
//! loop {
//!     render: compositor(page, cursor, log) -> canvas -> presenter
//!     if quit: break
//!     wait:   one token (Navigate) or one line (TextEntry)
//!     handle: dispatcher updates cursor / widgets / log / mode
//! }
//! ```
//!
//! The loop is single-threaded and synchronous. With a frame delay the
//! wait is a timed poll supplied by the input source; a timeout simply
//! renders the next frame.

use std::io::{self, Write};

use tgrid_render::canvas::Canvas;
use tgrid_render::presenter::{PresentOptions, Presenter};
use tgrid_widgets::{Compositor, LogBuffer};
use tracing::{debug, info, info_span};

use crate::config::{ConfigError, ProgramConfig};
use crate::dispatch::{Dispatcher, Mode, Step};
use crate::input::{InputSource, Polled};
use crate::page::Page;

/// Validate `config`, install its log panel on every page that lacks one,
/// and build the dispatcher.
pub fn build_dispatcher(config: &ProgramConfig, mut pages: Vec<Page>) -> Result<Dispatcher, ConfigError> {
    config.validate()?;
    let expected = config.size();
    for page in &mut pages {
        let actual = page.registry().size();
        if actual != expected {
            return Err(ConfigError::PageSizeMismatch {
                page: page.id(),
                expected,
                actual,
            });
        }
        if let Some(region) = config.log_region
            && page.registry().log_panel().is_none()
        {
            page.registry_mut()
                .set_log_panel(region, config.log_title.clone())
                .map_err(|source| ConfigError::LogPanel {
                    page: page.id(),
                    source,
                })?;
        }
    }
    let mut log = LogBuffer::new(config.log_capacity);
    for message in &config.initial_log {
        log.push(message.clone());
    }
    Dispatcher::new(pages, config.initial_page, log)
}

/// Render the page on screen, with its prompt while a line is expected.
pub fn render(compositor: &Compositor, dispatcher: &Dispatcher) -> Option<Canvas> {
    let registry = dispatcher.current_registry()?;
    Some(compositor.render_with_prompt(
        registry,
        dispatcher.cursor(),
        dispatcher.log(),
        dispatcher.prompt(),
    ))
}

/// Wait for and apply one unit of input.
///
/// Returns `Ok(None)` when the source had nothing before the timeout.
pub fn advance<I: InputSource + ?Sized>(
    dispatcher: &mut Dispatcher,
    input: &mut I,
    config: &ProgramConfig,
) -> io::Result<Option<Step>> {
    let step = match dispatcher.mode() {
        Mode::Quit => Some(Step::Quit),
        Mode::TextEntry { .. } => match input.next_line()? {
            Some(line) => Some(dispatcher.handle_line(&line)),
            None => Some(dispatcher.close()),
        },
        Mode::Navigate(_) => match input.poll_token(config.frame_delay)? {
            Polled::Token(token) => Some(dispatcher.handle(token)),
            Polled::Pending => None,
            Polled::Closed => Some(dispatcher.close()),
        },
    };
    Ok(step)
}

/// A running program: dispatcher, compositor, output, and input.
pub struct Program<W: Write, I: InputSource> {
    config: ProgramConfig,
    dispatcher: Dispatcher,
    compositor: Compositor,
    presenter: Presenter<W>,
    input: I,
}

impl<W: Write, I: InputSource> Program<W, I> {
    pub fn new(
        config: ProgramConfig,
        pages: Vec<Page>,
        compositor: Compositor,
        writer: W,
        present: PresentOptions,
        input: I,
    ) -> Result<Self, ConfigError> {
        let dispatcher = build_dispatcher(&config, pages)?;
        Ok(Self {
            config,
            dispatcher,
            compositor,
            presenter: Presenter::new(writer, present),
            input,
        })
    }

    pub fn config(&self) -> &ProgramConfig {
        &self.config
    }

    pub fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }

    pub fn dispatcher_mut(&mut self) -> &mut Dispatcher {
        &mut self.dispatcher
    }

    pub fn presenter(&self) -> &Presenter<W> {
        &self.presenter
    }

    /// Tear down, returning the output sink and the input source.
    pub fn into_parts(self) -> (W, I) {
        (self.presenter.into_inner(), self.input)
    }

    fn render_frame(&mut self) -> io::Result<()> {
        if let Some(canvas) = render(&self.compositor, &self.dispatcher) {
            self.presenter.present(&canvas)?;
        }
        Ok(())
    }

    /// Run until quit. The final frame is presented before returning.
    pub fn run(&mut self) -> io::Result<()> {
        let _span = info_span!(
            "tgrid.program.run",
            width = self.config.width,
            height = self.config.height
        )
        .entered();
        info!(page = self.dispatcher.current_page_id(), "program started");

        if self.presenter.options().home_cursor {
            self.presenter.clear_screen()?;
        }

        loop {
            self.render_frame()?;
            if self.dispatcher.is_quit() {
                break;
            }
            if let Some(step) = advance(&mut self.dispatcher, &mut self.input, &self.config)? {
                debug!(?step, mode = ?self.dispatcher.mode(), "step");
            }
        }

        info!(
            frames = self.presenter.frames(),
            logged = self.dispatcher.log().total_pushed(),
            "program finished"
        );
        Ok(())
    }
}
