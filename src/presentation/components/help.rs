//! Key binding overlay

use ratatui::{
    prelude::*,
    widgets::{Cell, Row, Table},
};

use crate::{
    core::state::AppState,
    presentation::{config::keybindings::key_event_to_string, widgets::popup::Popup},
};

const HELP_WIDTH: u16 = 40;

#[derive(Debug, Clone, Default)]
pub struct HelpComponent;

impl HelpComponent {
    pub fn new() -> Self {
        Self
    }

    /// Configured map bindings, sorted by action then key
    pub fn bindings(state: &AppState) -> Vec<(String, String)> {
        let mut rows: Vec<(String, String)> = state
            .config
            .config
            .keybindings
            .iter()
            .map(|(keys, action)| {
                let keys = keys
                    .iter()
                    .map(|key| format!("<{}>", key_event_to_string(key)))
                    .collect::<String>();
                (action.to_string(), keys)
            })
            .collect();
        rows.sort();
        rows.into_iter().map(|(action, keys)| (keys, action)).collect()
    }

    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        if !state.system.show_help {
            return;
        }
        let styles = &state.config.config.styles;
        let bindings = Self::bindings(state);
        let height = u16::try_from(bindings.len() + 2).unwrap_or(u16::MAX);
        let inner = Popup::new(" Keys ", HELP_WIDTH, height)
            .border_style(styles.style("popup_border"))
            .title_style(styles.style("popup_title"))
            .render_frame(area, frame.buffer_mut());

        let rows = bindings.into_iter().map(|(keys, action)| {
            Row::new(vec![
                Cell::from(Span::styled(keys, Style::default().bold())),
                Cell::from(action),
            ])
        });
        let table = Table::new(rows, [Constraint::Length(12), Constraint::Min(10)]);
        frame.render_widget(table, inner);
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::infrastructure::config::Config;

    #[test]
    fn test_bindings_are_sorted_by_action() {
        let state = AppState::new_with_config(Config::embedded().unwrap());
        let bindings = HelpComponent::bindings(&state);

        assert_eq!(bindings[0], ("<a>".to_string(), "AddLocation".to_string()));
        assert!(bindings.contains(&("<ctrl-c>".to_string(), "Quit".to_string())));
        assert!(bindings.contains(&("<?>".to_string(), "Help".to_string())));
    }
}
