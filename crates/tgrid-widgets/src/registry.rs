#![forbid(unsafe_code)]

//! Widget registry: placement rules and button visibility.
//!
//! Every text widget must lie strictly inside the border. Buttons must also
//! not overlap any existing label, button, or the log panel, and the log
//! panel must not overlap any button. A rejected placement leaves the
//! registry exactly as it was.

use std::fmt;

use tgrid_core::geometry::{Rect, Size};
use tgrid_render::sanitize::is_single_width;

use crate::hit;
use crate::widget::{Button, ButtonId, Label, LogPanel, Widget};

/// Why a widget could not be placed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlacementError {
    /// The footprint touches or crosses the border.
    OutsideBorder { footprint: Rect },
    /// The footprint overlaps an existing widget.
    Overlap { footprint: Rect, existing: Rect },
    /// Labels and buttons need at least one character.
    EmptyText,
    /// The text contains a glyph that is not exactly one cell wide.
    UnsupportedGlyph(char),
    /// The log panel region has zero area.
    EmptyRegion,
}

impl fmt::Display for PlacementError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutsideBorder { footprint } => write!(
                f,
                "footprint at ({}, {}) width {} height {} is not inside the border",
                footprint.x, footprint.y, footprint.width, footprint.height
            ),
            Self::Overlap {
                footprint,
                existing,
            } => write!(
                f,
                "footprint at ({}, {}) overlaps widget at ({}, {})",
                footprint.x, footprint.y, existing.x, existing.y
            ),
            Self::EmptyText => write!(f, "widget text must not be empty"),
            Self::UnsupportedGlyph(ch) => {
                write!(f, "glyph {ch:?} does not occupy exactly one cell")
            }
            Self::EmptyRegion => write!(f, "log panel region must not be empty"),
        }
    }
}

impl std::error::Error for PlacementError {}

/// All widgets on one page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetRegistry {
    size: Size,
    labels: Vec<Label>,
    buttons: Vec<Button>,
    log_panel: Option<LogPanel>,
}

impl WidgetRegistry {
    /// Create an empty registry for a grid of `width` x `height` cells.
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            size: Size::new(width, height),
            labels: Vec::new(),
            buttons: Vec::new(),
            log_panel: None,
        }
    }

    #[inline]
    pub fn size(&self) -> Size {
        self.size
    }

    /// Cells strictly inside the border.
    #[inline]
    pub fn interior(&self) -> Rect {
        self.size.bounds().interior()
    }

    /// Validate text for `(col, row)` and compute its single-row footprint.
    ///
    /// Applies the label rules: non-empty, single-width glyphs, strictly
    /// inside the border. No overlap check.
    pub fn text_footprint(&self, text: &str, row: u16, col: u16) -> Result<Rect, PlacementError> {
        if text.is_empty() {
            return Err(PlacementError::EmptyText);
        }
        if let Some(bad) = text.chars().find(|&ch| !is_single_width(ch)) {
            return Err(PlacementError::UnsupportedGlyph(bad));
        }
        let width = text.chars().count();
        let footprint = Rect::row_span(col, row, u16::try_from(width).unwrap_or(u16::MAX));
        if width > usize::from(u16::MAX) || !self.interior().contains_rect(&footprint) {
            return Err(PlacementError::OutsideBorder { footprint });
        }
        Ok(footprint)
    }

    fn first_overlap(&self, footprint: Rect) -> Option<Rect> {
        self.labels
            .iter()
            .map(Label::footprint)
            .chain(self.buttons.iter().map(Button::footprint))
            .chain(self.log_panel.iter().map(|panel| panel.region))
            .find(|existing| existing.intersects(&footprint))
    }

    /// Add a button at `(col, row)`.
    ///
    /// Fails if the label footprint is not strictly inside the border or
    /// overlaps any existing widget.
    pub fn add_button(
        &mut self,
        label: impl Into<String>,
        row: u16,
        col: u16,
    ) -> Result<ButtonId, PlacementError> {
        let label = label.into();
        let footprint = self.text_footprint(&label, row, col)?;
        if let Some(existing) = self.first_overlap(footprint) {
            return Err(PlacementError::Overlap {
                footprint,
                existing,
            });
        }
        let id = ButtonId(self.buttons.len());
        #[cfg(feature = "tracing")]
        tracing::debug!(%id, label = %label, row, col, "button placed");
        self.buttons.push(Button {
            id,
            label,
            row,
            col,
            visible: true,
        });
        Ok(id)
    }

    /// Add a static label at `(col, row)`. Labels may overlap each other.
    pub fn add_label(
        &mut self,
        text: impl Into<String>,
        row: u16,
        col: u16,
    ) -> Result<(), PlacementError> {
        let text = text.into();
        self.text_footprint(&text, row, col)?;
        self.labels.push(Label { text, row, col });
        Ok(())
    }

    /// Place (or replace) the log panel.
    ///
    /// The region must be non-empty, strictly inside the border, and clear
    /// of every button.
    pub fn set_log_panel(
        &mut self,
        region: Rect,
        title: Option<String>,
    ) -> Result<(), PlacementError> {
        if region.is_empty() {
            return Err(PlacementError::EmptyRegion);
        }
        if !self.interior().contains_rect(&region) {
            return Err(PlacementError::OutsideBorder { footprint: region });
        }
        if let Some(button) = self.buttons.iter().find(|b| b.footprint().intersects(&region)) {
            return Err(PlacementError::Overlap {
                footprint: region,
                existing: button.footprint(),
            });
        }
        self.log_panel = Some(LogPanel { region, title });
        Ok(())
    }

    fn set_visible(&mut self, id: ButtonId, visible: bool) -> bool {
        match self.buttons.get_mut(id.0) {
            Some(button) => {
                button.visible = visible;
                true
            }
            None => false,
        }
    }

    /// Hide a button. Returns `false` for an unknown id.
    pub fn hide(&mut self, id: ButtonId) -> bool {
        self.set_visible(id, false)
    }

    /// Show a button. Returns `false` for an unknown id.
    pub fn show(&mut self, id: ButtonId) -> bool {
        self.set_visible(id, true)
    }

    /// Flip a button's visibility. Returns `false` for an unknown id.
    pub fn toggle(&mut self, id: ButtonId) -> bool {
        match self.buttons.get_mut(id.0) {
            Some(button) => {
                button.visible = !button.visible;
                true
            }
            None => false,
        }
    }

    /// Whether the button exists and is visible.
    pub fn is_visible(&self, id: ButtonId) -> bool {
        self.button(id).is_some_and(|b| b.visible)
    }

    pub fn button(&self, id: ButtonId) -> Option<&Button> {
        self.buttons.get(id.0)
    }

    /// Look up a button by its label. First match in insertion order.
    pub fn button_by_label(&self, label: &str) -> Option<&Button> {
        self.buttons.iter().find(|b| b.label == label)
    }

    pub fn buttons(&self) -> &[Button] {
        &self.buttons
    }

    pub fn labels(&self) -> &[Label] {
        &self.labels
    }

    pub fn log_panel(&self) -> Option<&LogPanel> {
        self.log_panel.as_ref()
    }

    /// First visible button covering `(x, y)`.
    pub fn hit_test(&self, x: u16, y: u16) -> Option<ButtonId> {
        hit::hit_test(&self.buttons, x, y)
    }

    /// Every registered widget in layering order: border, labels, buttons
    /// (visible or not), then the log panel. The cursor is not registered.
    pub fn widgets(&self) -> Vec<Widget<'_>> {
        let mut out = Vec::with_capacity(2 + self.labels.len() + self.buttons.len());
        out.push(Widget::Border(self.size.bounds()));
        out.extend(self.labels.iter().map(Widget::Label));
        out.extend(self.buttons.iter().map(Widget::Button));
        out.extend(self.log_panel.iter().map(Widget::LogPanel));
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> WidgetRegistry {
        WidgetRegistry::new(10, 5)
    }

    #[test]
    fn button_inside_border_is_accepted() {
        let mut reg = registry();
        let id = reg.add_button("Go", 2, 2).unwrap();
        assert_eq!(id.index(), 0);
        assert_eq!(reg.buttons().len(), 1);
        assert!(reg.is_visible(id));
    }

    #[test]
    fn button_touching_border_is_rejected() {
        let mut reg = registry();
        assert!(matches!(
            reg.add_button("Go", 0, 2),
            Err(PlacementError::OutsideBorder { .. })
        ));
        assert!(matches!(
            reg.add_button("Go", 4, 2),
            Err(PlacementError::OutsideBorder { .. })
        ));
        assert!(matches!(
            reg.add_button("Go", 2, 0),
            Err(PlacementError::OutsideBorder { .. })
        ));
        // col + len must stay <= W - 1
        assert!(reg.add_button("Go", 2, 7).is_ok());
        assert!(matches!(
            reg.add_button("Go", 3, 8),
            Err(PlacementError::OutsideBorder { .. })
        ));
    }

    #[test]
    fn overlapping_button_leaves_registry_unchanged() {
        let mut reg = registry();
        reg.add_button("Go", 2, 2).unwrap();
        let before = reg.clone();
        let err = reg.add_button("Stop", 2, 3).unwrap_err();
        assert_eq!(
            err,
            PlacementError::Overlap {
                footprint: Rect::new(3, 2, 4, 1),
                existing: Rect::new(2, 2, 2, 1),
            }
        );
        assert_eq!(reg, before);
    }

    #[test]
    fn button_may_not_overlap_label() {
        let mut reg = registry();
        reg.add_label("Hi", 1, 1).unwrap();
        assert!(matches!(
            reg.add_button("Go", 1, 2),
            Err(PlacementError::Overlap { .. })
        ));
    }

    #[test]
    fn labels_may_overlap() {
        let mut reg = registry();
        reg.add_label("Hello", 1, 1).unwrap();
        reg.add_label("Bye", 1, 2).unwrap();
        assert_eq!(reg.labels().len(), 2);
    }

    #[test]
    fn empty_and_wide_text_rejected() {
        let mut reg = registry();
        assert_eq!(reg.add_label("", 1, 1), Err(PlacementError::EmptyText));
        assert_eq!(
            reg.add_button("中", 1, 1),
            Err(PlacementError::UnsupportedGlyph('中'))
        );
        assert_eq!(
            reg.add_label("a\tb", 1, 1),
            Err(PlacementError::UnsupportedGlyph('\t'))
        );
    }

    #[test]
    fn log_panel_rules() {
        let mut reg = WidgetRegistry::new(20, 6);
        reg.add_button("Go", 1, 1).unwrap();
        assert_eq!(
            reg.set_log_panel(Rect::new(10, 1, 0, 3), None),
            Err(PlacementError::EmptyRegion)
        );
        assert!(matches!(
            reg.set_log_panel(Rect::new(10, 1, 10, 3), None),
            Err(PlacementError::OutsideBorder { .. })
        ));
        assert!(matches!(
            reg.set_log_panel(Rect::new(1, 1, 5, 3), None),
            Err(PlacementError::Overlap { .. })
        ));
        reg.set_log_panel(Rect::new(10, 1, 9, 4), Some("Log".into()))
            .unwrap();
        assert!(matches!(
            reg.add_button("Late", 2, 12),
            Err(PlacementError::Overlap { .. })
        ));
    }

    #[test]
    fn hide_show_toggle() {
        let mut reg = registry();
        let id = reg.add_button("Go", 2, 2).unwrap();
        assert!(reg.hide(id));
        assert!(!reg.is_visible(id));
        assert_eq!(reg.hit_test(2, 2), None);
        assert!(reg.show(id));
        assert_eq!(reg.hit_test(2, 2), Some(id));
        assert!(reg.toggle(id));
        assert!(!reg.is_visible(id));
    }

    #[test]
    fn unknown_id_changes_nothing() {
        let mut reg = registry();
        let mut other = registry();
        other.add_button("A", 1, 1).unwrap();
        let foreign = other.add_button("B", 2, 1).unwrap();
        let before = reg.clone();
        assert!(!reg.hide(foreign));
        assert!(!reg.show(foreign));
        assert!(!reg.toggle(foreign));
        assert!(!reg.is_visible(foreign));
        assert!(reg.button(foreign).is_none());
        assert_eq!(reg, before);
    }

    #[test]
    fn widgets_in_layering_order() {
        let mut reg = WidgetRegistry::new(30, 6);
        reg.add_button("Go", 2, 2).unwrap();
        reg.add_label("Title", 1, 1).unwrap();
        reg.set_log_panel(Rect::new(15, 1, 10, 3), None).unwrap();
        let kinds: Vec<&str> = reg
            .widgets()
            .iter()
            .map(|w| match w {
                Widget::Border(_) => "border",
                Widget::Label(_) => "label",
                Widget::Button(_) => "button",
                Widget::LogPanel(_) => "log",
                Widget::Prompt(_) => "prompt",
                Widget::Cursor(_) => "cursor",
            })
            .collect();
        assert_eq!(kinds, vec!["border", "label", "button", "log"]);
    }

    #[test]
    fn button_by_label_finds_first() {
        let mut reg = registry();
        let id = reg.add_button("Go", 2, 2).unwrap();
        assert_eq!(reg.button_by_label("Go").map(|b| b.id), Some(id));
        assert!(reg.button_by_label("Stop").is_none());
    }
}
