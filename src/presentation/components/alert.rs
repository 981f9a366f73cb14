//! Modal alert overlay

use ratatui::{
    prelude::*,
    widgets::{Paragraph, Wrap},
};

use crate::{core::state::AppState, presentation::widgets::popup::Popup};

const ALERT_WIDTH: u16 = 44;
const ALERT_HEIGHT: u16 = 7;

/// Shows the oldest queued alert until it is dismissed
#[derive(Debug, Clone, Default)]
pub struct AlertComponent;

impl AlertComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let Some(alert) = state.alerts.current() else {
            return;
        };
        let styles = &state.config.config.styles;
        let title = if state.alerts.len() > 1 {
            format!(" {} (1/{}) ", alert.title, state.alerts.len())
        } else {
            format!(" {} ", alert.title)
        };
        let inner = Popup::new(title, ALERT_WIDTH, ALERT_HEIGHT)
            .border_style(styles.style("alert_border"))
            .title_style(styles.style("popup_title"))
            .render_frame(area, frame.buffer_mut());

        let [message_area, button_area] =
            Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(inner);

        frame.render_widget(
            Paragraph::new(alert.message.as_str())
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true }),
            message_area,
        );
        frame.render_widget(
            Paragraph::new(Span::styled("[ OK ]", Style::default().bold()))
                .alignment(Alignment::Center),
            button_area,
        );
    }
}

#[cfg(test)]
mod tests {
    use ratatui::backend::TestBackend;

    use super::*;
    use crate::domain::alert::Alert;

    fn render(state: &AppState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(60, 12)).unwrap();
        terminal
            .draw(|f| AlertComponent::new().view(state, f, f.area()))
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_no_alert_renders_nothing() {
        assert!(render(&AppState::new()).trim().is_empty());
    }

    #[test]
    fn test_front_alert_is_shown_with_count() {
        let mut state = AppState::new();
        state.alerts.push(Alert::missing_title());
        state.alerts.push(Alert::save_failed());

        let screen = render(&state);

        assert!(screen.contains("Incomplete (1/2)"));
        assert!(screen.contains("Please enter a location name."));
        assert!(!screen.contains("Could not save"));
        assert!(screen.contains("[ OK ]"));
    }
}
