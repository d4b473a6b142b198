#![forbid(unsafe_code)]

//! Render kernel: cells, the canvas, drawing, and ANSI frame presentation.

pub mod ansi;
pub mod canvas;
pub mod cell;
pub mod drawing;
pub mod presenter;
pub mod sanitize;
