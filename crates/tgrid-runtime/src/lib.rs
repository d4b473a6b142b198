#![forbid(unsafe_code)]

//! Runtime for tgrid: input tokens, pages, the dispatcher state machine,
//! and the frame loop.
//!
//! A [`Program`](program::Program) renders the current page, waits for one
//! token from an [`InputSource`](input::InputSource), hands it to the
//! [`Dispatcher`](dispatch::Dispatcher), and repeats until quit.
//! [`ProgramSimulator`](simulator::ProgramSimulator) drives the same
//! machinery headlessly for tests.

pub mod action;
pub mod config;
pub mod dispatch;
pub mod input;
pub mod page;
pub mod program;
pub mod simulator;
pub mod token;

pub use action::Action;
pub use config::{ConfigError, ProgramConfig};
pub use dispatch::{DispatchError, Dispatcher, Mode, Step};
pub use input::{InputSource, Polled, ScriptedInput, TerminalInput};
pub use page::Page;
pub use program::Program;
pub use simulator::ProgramSimulator;
pub use token::{Keymap, Token};
