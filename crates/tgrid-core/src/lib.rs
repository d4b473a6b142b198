#![forbid(unsafe_code)]

//! Core: geometry, key events, and the terminal session guard.

pub mod event;
pub mod geometry;
pub mod terminal_session;
