#![forbid(unsafe_code)]

//! tgrid demo: pages, command-line options, and log file setup for the
//! interactive binary.

pub mod app;
pub mod cli;
pub mod logging;
