//! Add-location form overlay

use ratatui::{prelude::*, widgets::Paragraph};
use unicode_width::UnicodeWidthChar;

use crate::{
    core::state::{form::TextFieldState, AppState},
    domain::ui::FormField,
    presentation::{config::Styles, widgets::popup::Popup},
};

const FORM_WIDTH: u16 = 56;
const FORM_HEIGHT: u16 = 8;
const LABEL_WIDTH: u16 = 13;

/// Two single-line fields and the save/cancel hints
#[derive(Debug, Clone, Default)]
pub struct FormComponent;

impl FormComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        if !state.form.is_open() {
            return;
        }
        let styles = &state.config.config.styles;
        let inner = Popup::new(" Add Current Location ", FORM_WIDTH, FORM_HEIGHT)
            .border_style(styles.style("popup_border"))
            .title_style(styles.style("popup_title"))
            .render_frame(area, frame.buffer_mut());

        let [title_row, _, description_row, _, hint_row] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .areas(inner);

        let focus = state.form.focus();
        for (row, field, value) in [
            (title_row, FormField::Title, state.form.title()),
            (description_row, FormField::Description, state.form.description()),
        ] {
            self.field(frame, row, styles, field, value, focus == Some(field));
        }

        let hint = Line::from(vec![
            Span::styled("Enter", Style::default().bold()),
            Span::raw(" Save Location  "),
            Span::styled("Esc", Style::default().bold()),
            Span::raw(" Cancel  "),
            Span::styled("Tab", Style::default().bold()),
            Span::raw(" Next Field"),
        ])
        .style(styles.style("form_label"));
        frame.render_widget(Paragraph::new(hint).alignment(Alignment::Center), hint_row);
    }

    fn field(
        &self,
        frame: &mut Frame,
        area: Rect,
        styles: &Styles,
        field: FormField,
        value: &TextFieldState,
        focused: bool,
    ) {
        let [label_area, input_area] =
            Layout::horizontal([Constraint::Length(LABEL_WIDTH), Constraint::Min(1)]).areas(area);

        frame.render_widget(
            Paragraph::new(format!("{}:", field.label())).style(styles.style("form_label")),
            label_area,
        );

        let (visible, column) = visible_tail(value, input_area.width);
        let input = if value.content.is_empty() {
            Paragraph::new(Span::styled(
                placeholder(field),
                Style::default().fg(Color::DarkGray).italic(),
            ))
        } else {
            Paragraph::new(visible)
        };
        let input = if focused {
            input.style(styles.style("form_focused"))
        } else {
            input
        };
        frame.render_widget(input, input_area);

        if focused {
            frame.set_cursor_position(Position::new(input_area.x + column, input_area.y));
        }
    }
}

fn placeholder(field: FormField) -> &'static str {
    match field {
        FormField::Title => "Location Name",
        FormField::Description => "Location Description",
    }
}

/// Slice of the content that fits the field with the cursor in view,
/// plus the cursor column inside that slice
fn visible_tail(value: &TextFieldState, width: u16) -> (String, u16) {
    let width = usize::from(width.max(1));
    let chars: Vec<char> = value.content.chars().collect();
    let cursor = value.cursor.min(chars.len());

    // One column stays free for the cursor itself
    let mut start = cursor;
    let mut used = 1;
    while start > 0 {
        let w = chars[start - 1].width().unwrap_or(0);
        if used + w > width {
            break;
        }
        used += w;
        start -= 1;
    }

    let mut columns = 0;
    let mut text = String::new();
    for c in &chars[start..] {
        let w = c.width().unwrap_or(0);
        if columns + w > width {
            break;
        }
        columns += w;
        text.push(*c);
    }

    let cursor_column: usize = chars[start..cursor]
        .iter()
        .map(|c| c.width().unwrap_or(0))
        .sum();
    (text, u16::try_from(cursor_column).unwrap_or_default())
}
