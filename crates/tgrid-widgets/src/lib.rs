#![forbid(unsafe_code)]

//! Widgets for the tgrid compositor.
//!
//! A page's widgets live in a [`WidgetRegistry`], which enforces placement
//! rules at setup time. The [`Compositor`] turns a registry, the cursor,
//! and the [`LogBuffer`] into a [`Canvas`](tgrid_render::canvas::Canvas)
//! every frame.

pub mod compositor;
pub mod hit;
pub mod log_buffer;
pub mod registry;
pub mod theme;
pub mod widget;

pub use compositor::Compositor;
pub use log_buffer::LogBuffer;
pub use registry::{PlacementError, WidgetRegistry};
pub use theme::Theme;
pub use widget::{Button, ButtonId, Cursor, Direction, Label, LogPanel, Widget};
