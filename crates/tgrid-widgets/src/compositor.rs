#![forbid(unsafe_code)]

//! The compositor: scene state in, canvas out.
//!
//! Rendering is a pure function of the registry, the cursor, the log
//! buffer, the optional text-entry prompt, and the theme. Layers are painted
//! back to front and later layers overwrite earlier ones:
//!
//! 1. background fill
//! 2. border glyphs
//! 3. labels
//! 4. visible buttons
//! 5. the text-entry prompt, if any
//! 6. log panel content
//! 7. the cursor, unconditionally
//!
//! Calling [`Compositor::render`] twice on unchanged state produces equal
//! canvases and therefore byte-identical serialized frames.

use tgrid_core::geometry::Rect;
use tgrid_render::canvas::Canvas;
use tgrid_render::cell::Cell;
use tgrid_render::drawing::Draw;
use tgrid_render::sanitize::sanitize;

use crate::log_buffer::{LogBuffer, truncate_to_width};
use crate::registry::WidgetRegistry;
use crate::theme::Theme;
use crate::widget::{Button, Cursor, Label, LogPanel, Widget};

/// Renders widget scenes into canvases.
#[derive(Debug, Clone, Default)]
pub struct Compositor {
    theme: Theme,
}

impl Compositor {
    pub fn new(theme: Theme) -> Self {
        Self { theme }
    }

    #[inline]
    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Render one frame.
    pub fn render(&self, registry: &WidgetRegistry, cursor: Cursor, log: &LogBuffer) -> Canvas {
        self.render_with_prompt(registry, cursor, log, None)
    }

    /// Render one frame with an optional text-entry prompt.
    ///
    /// The prompt row is cleared from the prompt's column to the right
    /// border, so labels and buttons on that row are hidden while it shows.
    pub fn render_with_prompt(
        &self,
        registry: &WidgetRegistry,
        cursor: Cursor,
        log: &LogBuffer,
        prompt: Option<&Label>,
    ) -> Canvas {
        let size = registry.size();

        #[cfg(feature = "tracing")]
        let _span = tracing::trace_span!(
            "compositor.render",
            width = size.width,
            height = size.height,
            cursor_x = cursor.x,
            cursor_y = cursor.y
        )
        .entered();

        let mut canvas = Canvas::new(size.width, size.height, self.theme.background);
        // Text may never reach the right border column.
        let text_limit = canvas.width().saturating_sub(1);

        let mut layers = registry.widgets();
        if let Some(prompt) = prompt {
            let below_panel = layers
                .iter()
                .position(|w| matches!(w, Widget::LogPanel(_)))
                .unwrap_or(layers.len());
            layers.insert(below_panel, Widget::Prompt(prompt));
        }
        layers.push(Widget::Cursor(cursor));

        for widget in layers {
            match widget {
                Widget::Border(bounds) => {
                    canvas.draw_border(bounds, self.theme.border_chars, self.theme.border);
                }
                Widget::Label(label) => self.draw_label(&mut canvas, label, text_limit),
                Widget::Button(button) => {
                    self.draw_button(&mut canvas, button, cursor, text_limit);
                }
                Widget::Prompt(prompt) => self.draw_prompt(&mut canvas, prompt, text_limit),
                Widget::LogPanel(panel) => self.draw_log_panel(&mut canvas, panel, log),
                Widget::Cursor(cursor) => {
                    canvas.set(
                        cursor.x,
                        cursor.y,
                        Cell::new(self.theme.cursor_glyph, self.theme.cursor),
                    );
                }
            }
        }
        canvas
    }

    fn draw_label(&self, canvas: &mut Canvas, label: &Label, limit: u16) {
        canvas.print_text_clipped(label.col, label.row, &label.text, self.theme.label, limit);
    }

    fn draw_button(&self, canvas: &mut Canvas, button: &Button, cursor: Cursor, limit: u16) {
        if !button.visible {
            return;
        }
        canvas.print_text_clipped(button.col, button.row, &button.label, self.theme.button, limit);
        if button.covers(cursor.x, cursor.y) {
            canvas.paint_area(button.footprint(), self.theme.button_focused);
        }
    }

    fn draw_prompt(&self, canvas: &mut Canvas, prompt: &Label, limit: u16) {
        let row = Rect::row_span(prompt.col, prompt.row, limit.saturating_sub(prompt.col));
        canvas.fill(row, Cell::blank(self.theme.prompt));
        canvas.print_text_clipped(prompt.col, prompt.row, &prompt.text, self.theme.prompt, limit);
    }

    fn draw_log_panel(&self, canvas: &mut Canvas, panel: &LogPanel, log: &LogBuffer) {
        let region = panel.region;
        canvas.fill(region, Cell::blank(self.theme.log_panel));
        let width = usize::from(region.width);

        if let Some(title) = &panel.title {
            let title = sanitize(title);
            canvas.print_text_clipped(
                region.x,
                region.y,
                truncate_to_width(&title, width),
                self.theme.log_title,
                region.right(),
            );
        }

        let content: Rect = panel.content_area();
        for (row, message) in log.window(usize::from(content.height)).into_iter().enumerate() {
            let message = sanitize(message);
            canvas.print_text_clipped(
                content.x,
                content.y + row as u16,
                truncate_to_width(&message, width),
                self.theme.log_panel,
                content.right(),
            );
        }
    }
}
