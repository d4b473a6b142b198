#![forbid(unsafe_code)]

//! Hit testing.
//!
//! Buttons never overlap once placed, but visibility can change at runtime,
//! so the rule is stated over insertion order: the first *visible* button
//! whose footprint contains the point wins.

use crate::widget::{Button, ButtonId};

/// Return the first visible button covering `(x, y)`, if any.
pub fn hit_test<'a>(buttons: impl IntoIterator<Item = &'a Button>, x: u16, y: u16) -> Option<ButtonId> {
    buttons
        .into_iter()
        .find(|b| b.visible && b.covers(x, y))
        .map(|b| b.id)
}
