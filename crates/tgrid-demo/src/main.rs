#![forbid(unsafe_code)]

//! tgrid demo binary entry point.

use std::io;

use tgrid_core::terminal_session::{SessionOptions, TerminalSession};
use tgrid_demo::{app, cli, logging};
use tgrid_render::presenter::PresentOptions;
use tgrid_runtime::{Keymap, Program, TerminalInput};
use tgrid_widgets::{Compositor, Theme};

fn main() {
    let opts = cli::Opts::parse();

    if let Err(e) = logging::init_from_env() {
        eprintln!("Cannot open log file: {e}");
        std::process::exit(1);
    }

    let config = opts.program_config();
    let pages = match app::build_pages(config.width, config.height) {
        Ok(pages) => pages,
        Err(e) => {
            eprintln!("Grid {}x{} cannot hold the demo pages: {e}", config.width, config.height);
            std::process::exit(1);
        }
    };
    let compositor = Compositor::new(Theme::default().with_border_chars(opts.border));

    let session = match TerminalSession::new(SessionOptions::default()) {
        Ok(session) => session,
        Err(e) => {
            eprintln!("Failed to initialize terminal: {e}");
            std::process::exit(1);
        }
    };
    if let Ok((cols, rows)) = session.size()
        && (cols < config.width || rows < config.height)
    {
        tracing::warn!(cols, rows, width = config.width, height = config.height, "terminal smaller than grid");
    }
    let input = TerminalInput::new(session, Keymap::default());

    match Program::new(config, pages, compositor, io::stdout(), PresentOptions::terminal(), input) {
        Ok(mut program) => {
            let result = program.run();
            // Restore the terminal before reporting.
            drop(program);
            if let Err(e) = result {
                eprintln!("Runtime error: {e}");
                std::process::exit(1);
            }
        }
        Err(e) => {
            eprintln!("Failed to initialize: {e}");
            std::process::exit(1);
        }
    }
}
