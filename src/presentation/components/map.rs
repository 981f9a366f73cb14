//! Map component
//!
//! Draws the world outline, one labelled marker per location, and the
//! device position when it is known and enabled.

use ratatui::{
    prelude::*,
    symbols,
    widgets::{
        canvas::{Canvas, Map as WorldMap, MapResolution},
        Block, BorderType,
    },
};

use crate::{
    core::state::AppState,
    domain::{marker::DEFAULT_MARKER_COLOR, region::Region},
};

const MARKER_GLYPH: &str = "●";
const USER_GLYPH: &str = "◉";

#[derive(Debug, Clone, Default)]
pub struct MapComponent;

impl MapComponent {
    pub fn new() -> Self {
        Self
    }

    /// Render the map viewed through `region`
    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect, region: Region) {
        let styles = &state.config.config.styles;
        let world_color = styles.style("map_world").fg.unwrap_or(Color::DarkGray);
        let user_style = styles.style("map_user");
        let markers = state.markers();
        let user_position = state.map.visible_user_position();

        let title = format!(" {:.4}, {:.4} ", region.latitude, region.longitude);
        let canvas = Canvas::default()
            .block(
                Block::bordered()
                    .border_type(BorderType::Rounded)
                    .title(title),
            )
            .marker(symbols::Marker::Braille)
            .x_bounds(region.x_bounds())
            .y_bounds(region.y_bounds())
            .paint(|ctx| {
                ctx.draw(&WorldMap {
                    color: world_color,
                    resolution: MapResolution::High,
                });
                ctx.layer();
                for marker in &markers {
                    let style = Style::default().fg(marker_color(&marker.color));
                    ctx.print(
                        marker.longitude,
                        marker.latitude,
                        Line::styled(format!("{MARKER_GLYPH} {}", marker.title), style),
                    );
                }
                if let Some(position) = user_position {
                    ctx.print(
                        position.longitude,
                        position.latitude,
                        Line::styled(USER_GLYPH, user_style),
                    );
                }
            });
        frame.render_widget(canvas, area);
    }
}

/// Terminal color for a marker color name.
///
/// Accepts anything ratatui parses (`red`, `#aa3311`, `12`) plus `brown`.
/// Unknown names fall back to the default marker color.
pub fn marker_color(name: &str) -> Color {
    match name.trim().to_ascii_lowercase().as_str() {
        "brown" => Color::Rgb(165, 42, 42),
        other => other
            .parse::<Color>()
            .or_else(|_| DEFAULT_MARKER_COLOR.parse::<Color>())
            .unwrap_or(Color::Green),
    }
}
