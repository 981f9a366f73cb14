use ratatui::{
    layout::Flex,
    prelude::*,
    widgets::{Block, BorderType, Clear, Widget},
};

/// Bordered overlay box centered in the area it is rendered into.
///
/// Clears what is underneath, so it can be drawn over the map.
#[derive(Debug, Clone)]
pub struct Popup<'a> {
    title: Line<'a>,
    width: u16,
    height: u16,
    border_style: Style,
    title_style: Style,
}

impl<'a> Popup<'a> {
    pub fn new(title: impl Into<Line<'a>>, width: u16, height: u16) -> Self {
        Self {
            title: title.into(),
            width,
            height,
            border_style: Style::default(),
            title_style: Style::default(),
        }
    }

    pub fn border_style(mut self, style: Style) -> Self {
        self.border_style = style;
        self
    }

    pub fn title_style(mut self, style: Style) -> Self {
        self.title_style = style;
        self
    }

    /// Outer rectangle the popup occupies inside `area`
    pub fn area(&self, area: Rect) -> Rect {
        centered_rect(area, self.width, self.height)
    }

    /// Render the frame and return the inner area for content
    pub fn render_frame(self, area: Rect, buf: &mut Buffer) -> Rect {
        let outer = self.area(area);
        Clear.render(outer, buf);
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(self.border_style)
            .title(self.title.style(self.title_style))
            .title_alignment(Alignment::Center);
        let inner = block.inner(outer);
        block.render(outer, buf);
        inner
    }
}

/// `width` x `height` rectangle centered in `area`, clamped to it
pub fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let [area] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(area);
    let [area] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(area);
    area
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_centered_rect() {
        let area = Rect::new(0, 0, 80, 24);
        assert_eq!(centered_rect(area, 40, 10), Rect::new(20, 7, 40, 10));
    }

    #[test]
    fn test_centered_rect_clamps_to_area() {
        let area = Rect::new(0, 0, 20, 5);
        assert_eq!(centered_rect(area, 40, 10), area);
    }

    #[test]
    fn test_render_frame_returns_inner_area() {
        let area = Rect::new(0, 0, 30, 10);
        let mut buf = Buffer::empty(area);

        let inner = Popup::new(" Hi ", 20, 6).render_frame(area, &mut buf);

        assert_eq!(inner, Rect::new(6, 3, 18, 4));
        assert_eq!(buf[(5, 2)].symbol(), "╭");
    }
}
