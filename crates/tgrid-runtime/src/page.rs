#![forbid(unsafe_code)]

//! Pages: a widget registry plus the actions bound to its buttons.

use std::collections::HashMap;

use tgrid_widgets::{ButtonId, Label, PlacementError, WidgetRegistry};

use crate::action::Action;

/// Prompt shown while a line is being typed, unless the page sets its own.
pub const DEFAULT_PROMPT: &str = "Input:";

/// One screen of widgets, selected by a digit key.
#[derive(Debug, Clone)]
pub struct Page {
    id: u8,
    title: String,
    registry: WidgetRegistry,
    bindings: HashMap<ButtonId, Action>,
    prompt: Option<Label>,
}

impl Page {
    /// A page with no widgets and [`DEFAULT_PROMPT`] on the first interior
    /// row.
    pub fn new(id: u8, title: impl Into<String>, registry: WidgetRegistry) -> Self {
        Self {
            id,
            title: title.into(),
            registry,
            bindings: HashMap::new(),
            prompt: Some(Label {
                text: DEFAULT_PROMPT.to_string(),
                row: 1,
                col: 1,
            }),
        }
    }

    #[inline]
    pub fn id(&self) -> u8 {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn registry(&self) -> &WidgetRegistry {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut WidgetRegistry {
        &mut self.registry
    }

    /// Place a button and bind its action in one step.
    pub fn add_button(
        &mut self,
        label: impl Into<String>,
        row: u16,
        col: u16,
        action: Action,
    ) -> Result<ButtonId, PlacementError> {
        let id = self.registry.add_button(label, row, col)?;
        self.bindings.insert(id, action);
        Ok(id)
    }

    pub fn add_label(
        &mut self,
        text: impl Into<String>,
        row: u16,
        col: u16,
    ) -> Result<(), PlacementError> {
        self.registry.add_label(text, row, col)
    }

    /// Bind (or rebind) the action of an existing button.
    ///
    /// Returns `false` if the id does not belong to this page.
    pub fn bind(&mut self, id: ButtonId, action: Action) -> bool {
        if self.registry.button(id).is_none() {
            return false;
        }
        self.bindings.insert(id, action);
        true
    }

    /// Action bound to `id`. Unbound buttons behave as [`Action::Noop`].
    pub fn action(&self, id: ButtonId) -> Option<&Action> {
        self.bindings.get(&id)
    }

    /// Move or reword the text-entry prompt. Same placement rules as a
    /// label; on failure the previous prompt is kept.
    pub fn set_prompt(
        &mut self,
        text: impl Into<String>,
        row: u16,
        col: u16,
    ) -> Result<(), PlacementError> {
        let text = text.into();
        self.registry.text_footprint(&text, row, col)?;
        self.prompt = Some(Label { text, row, col });
        Ok(())
    }

    /// Show no prompt during text entry.
    pub fn clear_prompt(&mut self) {
        self.prompt = None;
    }

    /// Prompt drawn while this page waits for a line.
    pub fn prompt(&self) -> Option<&Label> {
        self.prompt.as_ref()
    }
}
