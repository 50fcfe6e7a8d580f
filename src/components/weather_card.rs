use artbox::{
    Alignment as ArtAlignment, Color as ArtColor, Fill, LinearGradient, Renderer, fonts,
    integrations::ratatui::ArtBox,
};
use ratatui::{
    Frame,
    layout::{Constraint, Flex, Layout, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::Component;
use crate::action::Action;
use crate::format::{condition_glyph, format_temperature, to_celsius, toggle_label};
use crate::state::{Unit, WeatherSnapshot};

/// The weather card: glyph, temperature, city, description, unit toggle
pub struct WeatherCard;

pub struct WeatherCardProps<'a> {
    pub snapshot: &'a WeatherSnapshot,
    /// Unit the next lookup will use
    pub unit: Unit,
}

/// FIGlet height cap for the temperature (terminus font).
const TEMP_CAP: u16 = 6;

impl Component<Action> for WeatherCard {
    type Props<'a> = WeatherCardProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let snapshot = props.snapshot;
        let chunks = Layout::vertical([
            Constraint::Length(1),      // Glyph
            Constraint::Length(1),      // Spacer
            Constraint::Max(TEMP_CAP),  // Temperature
            Constraint::Length(1),      // City
            Constraint::Length(1),      // Description
            Constraint::Length(1),      // Icon URL
            Constraint::Length(1),      // Spacer
            Constraint::Length(1),      // Toggle
        ])
        .flex(Flex::Center)
        .split(area);

        frame.render_widget(
            Paragraph::new(Line::from(condition_glyph(&snapshot.icon_code)).centered()),
            chunks[0],
        );

        let temp_text = format_temperature(snapshot.temperature, snapshot.unit);
        let renderer = Renderer::new(fonts::stack(&["terminus", "miniwi"]))
            .with_plain_fallback()
            .with_alignment(ArtAlignment::Center)
            .with_fill(temperature_gradient(to_celsius(
                snapshot.temperature,
                snapshot.unit,
            )));
        frame.render_widget(ArtBox::new(&renderer, &temp_text), chunks[2]);

        let city = Line::from(vec![Span::styled(
            snapshot.city_name.clone(),
            Style::default().fg(Color::White).bold(),
        )])
        .centered();
        frame.render_widget(Paragraph::new(city), chunks[3]);

        let desc = Line::from(vec![
            Span::styled("Weather: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                snapshot.description.clone(),
                Style::default().fg(Color::Gray),
            ),
        ])
        .centered();
        frame.render_widget(Paragraph::new(desc), chunks[4]);

        let icon = Line::from(vec![Span::styled(
            snapshot.icon_url.clone(),
            Style::default().fg(Color::DarkGray),
        )])
        .centered();
        frame.render_widget(Paragraph::new(icon), chunks[5]);

        let toggle = Line::from(vec![
            Span::styled("tab", Style::default().fg(Color::Cyan).bold()),
            Span::styled(
                format!(" {}", toggle_label(props.unit)),
                Style::default().fg(Color::DarkGray),
            ),
        ])
        .centered();
        frame.render_widget(Paragraph::new(toggle), chunks[7]);
    }
}

fn temperature_gradient(celsius: f64) -> Fill {
    let (start, end) = match celsius {
        t if t < 0.0 => (
            ArtColor::rgb(150, 200, 255),
            ArtColor::rgb(200, 230, 255),
        ),
        t if t < 15.0 => (
            ArtColor::rgb(100, 180, 255),
            ArtColor::rgb(150, 220, 200),
        ),
        t if t < 25.0 => (
            ArtColor::rgb(100, 200, 150),
            ArtColor::rgb(255, 220, 100),
        ),
        t if t < 35.0 => (
            ArtColor::rgb(255, 180, 80),
            ArtColor::rgb(255, 120, 80),
        ),
        _ => (
            ArtColor::rgb(255, 100, 80),
            ArtColor::rgb(255, 60, 60),
        ),
    };
    Fill::Linear(LinearGradient::horizontal(start, end))
}
