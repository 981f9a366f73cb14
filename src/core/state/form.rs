use crate::{
    core::{cmd::Cmd, msg::form::FormMsg, text_field_engine::TextFieldEngine},
    domain::{location::Draft, ui::FormField},
};

/// Snapshot of a single-line text field
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TextFieldState {
    pub content: String,
    /// Cursor column, in characters
    pub cursor: usize,
}

impl TextFieldState {
    pub fn new(content: impl Into<String>, cursor: usize) -> Self {
        Self {
            content: content.into(),
            cursor,
        }
    }

    /// Replace the content and park the cursor at its end
    pub fn set(&mut self, content: String) {
        self.cursor = content.chars().count();
        self.content = content;
    }

    /// Insert `text` at the cursor
    pub fn insert_str(&mut self, text: &str) {
        let byte_index = self
            .content
            .char_indices()
            .nth(self.cursor)
            .map_or(self.content.len(), |(i, _)| i);
        self.content.insert_str(byte_index, text);
        self.cursor += text.chars().count();
    }

    pub fn clear(&mut self) {
        self.content.clear();
        self.cursor = 0;
    }
}

/// Add-location form: Closed (default) or Open with two drafted fields.
///
/// While the form is open the "View Locations" action is not offered.
#[derive(Debug, Clone, Default)]
pub struct FormState {
    open: bool,
    title: TextFieldState,
    description: TextFieldState,
    /// Field holding text-entry focus; `None` once focus is dismissed
    focus: Option<FormField>,
}

impl FormState {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn title(&self) -> &TextFieldState {
        &self.title
    }

    pub fn description(&self) -> &TextFieldState {
        &self.description
    }

    pub fn focus(&self) -> Option<FormField> {
        self.focus
    }

    /// Current field values, untrimmed
    pub fn draft(&self) -> Draft {
        Draft::new(self.title.content.clone(), self.description.content.clone())
    }

    /// The draft to save, or `None` when the title is empty after trimming
    pub fn submission(&self) -> Option<Draft> {
        Some(self.draft()).filter(Draft::is_valid)
    }

    pub fn open(&mut self) {
        self.open = true;
        self.focus = Some(FormField::Title);
    }

    /// Cancel: drop drafts and close without touching anything else
    pub fn cancel(&mut self) {
        self.close();
    }

    /// Successful save: drop drafts, close, dismiss text-entry focus
    pub fn complete(&mut self) {
        self.close();
    }

    fn close(&mut self) {
        self.open = false;
        self.title.clear();
        self.description.clear();
        self.focus = None;
    }

    fn focused_field_mut(&mut self) -> Option<&mut TextFieldState> {
        match self.focus? {
            FormField::Title => Some(&mut self.title),
            FormField::Description => Some(&mut self.description),
        }
    }

    /// Form-local update; Save is coordinated by the top-level update
    pub fn update(&mut self, msg: FormMsg, engine: &dyn TextFieldEngine) -> Vec<Cmd> {
        match msg {
            FormMsg::Open => self.open(),
            FormMsg::Cancel => self.cancel(),
            FormMsg::Save => {}
            FormMsg::FocusNext | FormMsg::FocusPrevious => {
                // Two fields: next and previous coincide
                if self.open {
                    self.focus = Some(self.focus.unwrap_or_default().next());
                }
            }
            FormMsg::Input(key) => {
                if self.open {
                    if let Some(field) = self.focused_field_mut() {
                        *field = engine.apply_keys(field, &[key]);
                    }
                }
            }
            FormMsg::Paste(text) => {
                if self.open {
                    if let Some(field) = self.focused_field_mut() {
                        field.insert_str(&text.replace(['\r', '\n'], " "));
                    }
                }
            }
            FormMsg::SetTitle(title) => self.title.set(title),
            FormMsg::SetDescription(description) => self.description.set(description),
        }
        vec![]
    }
}
