//! Saved locations modal
//!
//! Lists the sample location followed by saved ones; the highlighted row is
//! where Enter pans the camera.

use ratatui::{
    prelude::*,
    widgets::{HighlightSpacing, List, ListItem, ListState, Paragraph},
};

use crate::{core::state::AppState, presentation::widgets::popup::Popup};

const LIST_WIDTH: u16 = 50;
const LIST_MAX_HEIGHT: u16 = 20;

#[derive(Debug, Clone, Default)]
pub struct LocationListComponent;

impl LocationListComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        if !state.list.is_open() {
            return;
        }
        let styles = &state.config.config.styles;
        let locations = state.all_locations();
        // two rows per entry plus borders and the footer
        let wanted = u16::try_from(locations.len() * 2 + 3).unwrap_or(LIST_MAX_HEIGHT);
        let inner = Popup::new(" Saved Locations ", LIST_WIDTH, wanted.min(LIST_MAX_HEIGHT))
            .border_style(styles.style("popup_border"))
            .title_style(styles.style("popup_title"))
            .render_frame(area, frame.buffer_mut());

        let [list_area, footer_area] =
            Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(inner);

        let description_style = styles.style("list_description");
        let items: Vec<ListItem> = locations
            .iter()
            .map(|location| {
                ListItem::new(vec![
                    Line::from(Span::styled(
                        location.title.clone(),
                        Style::default().bold(),
                    )),
                    Line::from(Span::styled(
                        location.description.clone(),
                        description_style,
                    )),
                ])
            })
            .collect();

        let list = List::new(items)
            .highlight_style(styles.style("list_highlight"))
            .highlight_symbol("▶ ")
            .highlight_spacing(HighlightSpacing::Always);
        let mut list_state = ListState::default().with_selected(Some(state.list.highlighted()));
        frame.render_stateful_widget(list, list_area, &mut list_state);

        let footer = Line::from(vec![
            Span::styled("Enter", Style::default().bold()),
            Span::raw(" Go  "),
            Span::styled("Esc", Style::default().bold()),
            Span::raw(" Close"),
        ]);
        frame.render_widget(
            Paragraph::new(footer).alignment(Alignment::Center),
            footer_area,
        );
    }
}
