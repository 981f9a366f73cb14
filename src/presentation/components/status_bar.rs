//! Status bar component
//!
//! One line at the bottom: key hints for the focused surface on the left,
//! device and permission state on the right.

use ratatui::{prelude::*, widgets::Paragraph};

use crate::{
    core::state::AppState,
    domain::{location::Permission, ui::Mode},
    presentation::config::keybindings::{key_event_to_string, Action},
};

#[derive(Debug, Clone, Default)]
pub struct StatusBarComponent;

impl StatusBarComponent {
    pub fn new() -> Self {
        Self
    }

    /// Hints for the surface that currently has focus
    pub fn hints(state: &AppState) -> Vec<(String, &'static str)> {
        match state.mode() {
            Mode::Map => {
                let mut hints = vec![];
                let mut push = |action: Action, label: &'static str| {
                    if let Some(key) = key_for(state, action) {
                        hints.push((key, label));
                    }
                };
                push(Action::GoToMyLocation, "My Location");
                push(Action::AddLocation, "Add Current Location");
                if state.view_locations_available() {
                    push(Action::ViewLocations, "View Locations");
                }
                push(Action::Help, "Help");
                push(Action::Quit, "Quit");
                hints
            }
            Mode::Form => vec![
                ("Enter".into(), "Save Location"),
                ("Esc".into(), "Cancel"),
                ("Tab".into(), "Next Field"),
            ],
            Mode::List => vec![
                ("↑↓".into(), "Move"),
                ("Enter".into(), "Go"),
                ("Esc".into(), "Close"),
            ],
            Mode::Alert => vec![("Enter".into(), "OK")],
            Mode::Help => vec![("Esc".into(), "Close")],
        }
    }

    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let styles = &state.config.config.styles;
        let bar_style = styles.style("status_bar");

        let mut spans = vec![Span::raw(" ")];
        for (key, label) in Self::hints(state) {
            spans.push(Span::styled(key, Style::default().bold()));
            spans.push(Span::raw(format!(" {label}  ")));
        }
        frame.render_widget(Paragraph::new(Line::from(spans)).style(bar_style), area);

        let status = if state.system.is_locating() {
            Span::styled(" Locating… ", styles.style("status_locating"))
        } else {
            match state.system.permission {
                None => Span::raw(" Requesting location access… "),
                Some(Permission::Denied) => Span::raw(" Location access denied "),
                Some(Permission::Granted) => Span::raw(format!(
                    " {} saved ",
                    state.store.len()
                )),
            }
        };
        frame.render_widget(
            Paragraph::new(Line::from(status)).alignment(Alignment::Right),
            area,
        );
    }
}

/// Shortest configured key for `action`, e.g. `q` rather than `ctrl-d`
fn key_for(state: &AppState, action: Action) -> Option<String> {
    state
        .config
        .config
        .keybindings
        .iter()
        .filter(|(_, bound)| **bound == action)
        .map(|(keys, _)| {
            keys.iter()
                .map(key_event_to_string)
                .collect::<Vec<_>>()
                .join(" ")
        })
        .min_by(|a, b| a.len().cmp(&b.len()).then_with(|| a.cmp(b)))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use ratatui::backend::TestBackend;

    use super::*;
    use crate::infrastructure::config::Config;

    fn create_test_state() -> AppState {
        AppState::new_with_config(Config::embedded().unwrap())
    }

    fn labels(state: &AppState) -> Vec<&'static str> {
        StatusBarComponent::hints(state)
            .into_iter()
            .map(|(_, label)| label)
            .collect()
    }

    #[test]
    fn test_map_hints_offer_view_locations() {
        let state = create_test_state();
        assert_eq!(
            labels(&state),
            vec![
                "My Location",
                "Add Current Location",
                "View Locations",
                "Help",
                "Quit"
            ]
        );
    }

    #[test]
    fn test_form_hides_view_locations() {
        let mut state = create_test_state();
        state.form.open();

        assert!(!labels(&state).contains(&"View Locations"));
        assert!(labels(&state).contains(&"Save Location"));
    }

    #[test]
    fn test_quit_hint_uses_shortest_key() {
        let state = create_test_state();
        assert_eq!(key_for(&state, Action::Quit), Some("q".to_string()));
    }

    #[test]
    fn test_locating_indicator() {
        let mut state = create_test_state();
        state.system.begin_fetch();

        let mut terminal = Terminal::new(TestBackend::new(120, 1)).unwrap();
        terminal
            .draw(|f| StatusBarComponent::new().view(&state, f, f.area()))
            .unwrap();
        let line: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect();

        assert!(line.contains("Locating…"));
    }
}
