use serde::{Deserialize, Serialize};
use strum::Display;

/// Which surface currently owns keyboard input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, Serialize, Deserialize)]
pub enum Mode {
    #[default]
    Map,
    Form,
    List,
    Alert,
    Help,
}

/// Field of the add-location form that receives text input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FormField {
    #[default]
    Title,
    Description,
}

impl FormField {
    pub fn next(self) -> Self {
        match self {
            FormField::Title => FormField::Description,
            FormField::Description => FormField::Title,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FormField::Title => "Title",
            FormField::Description => "Description",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_field_cycles() {
        assert_eq!(FormField::Title.next(), FormField::Description);
        assert_eq!(FormField::Description.next(), FormField::Title);
    }

    #[test]
    fn test_mode_display() {
        assert_eq!(Mode::Map.to_string(), "Map");
        assert_eq!(Mode::default(), Mode::Map);
    }
}
