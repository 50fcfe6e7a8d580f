use crossterm::event::{KeyCode, KeyModifiers};
use ratatui::layout::{Constraint, Layout};
use ratatui::prelude::{Frame, Rect};
use ratatui::style::{Color, Style, Stylize};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use tui_dispatch::EventKind;
use tui_dispatch_components::{
    StatusBar, StatusBarHint, StatusBarProps, StatusBarSection, StatusBarStyle,
};

use super::{Component, SearchBar, SearchBarProps, WeatherCard, WeatherCardProps};
use crate::action::Action;
use crate::state::AppState;

const ERROR_ICON: &str = "\u{26a0}\u{fe0f}";
const SPINNERS: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Props for WeatherDisplay - read-only view of state
pub struct WeatherDisplayProps<'a> {
    pub state: &'a AppState,
    pub is_focused: bool,
}

/// The whole screen: search bar, status line, weather card, help bar
#[derive(Default)]
pub struct WeatherDisplay {
    search: SearchBar,
}

impl WeatherDisplay {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Component<Action> for WeatherDisplay {
    type Props<'a> = WeatherDisplayProps<'a>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = Action> {
        if !props.is_focused {
            return Vec::new();
        }

        let EventKind::Key(key) = event else {
            return Vec::new();
        };

        match key.code {
            KeyCode::Esc => return vec![Action::Quit],
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                return vec![Action::Quit];
            }
            KeyCode::Tab => return vec![Action::UiToggleUnits],
            KeyCode::Enter => return vec![Action::SearchSubmit],
            _ => {}
        }

        // Everything else edits the city text
        self.search
            .handle_event(
                event,
                SearchBarProps {
                    query: &props.state.city_input,
                    is_focused: true,
                    on_change: Action::SearchInputChange,
                    on_submit: |_| Action::SearchSubmit,
                },
            )
            .into_iter()
            .collect()
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: WeatherDisplayProps<'_>) {
        let state = props.state;
        let chunks = Layout::vertical([
            Constraint::Length(3), // Search bar
            Constraint::Length(1), // Loading / error line
            Constraint::Min(1),    // Weather card
            Constraint::Length(1), // Help bar
        ])
        .split(area);

        self.search.render(
            frame,
            chunks[0],
            SearchBarProps {
                query: &state.city_input,
                is_focused: props.is_focused,
                on_change: Action::SearchInputChange,
                on_submit: |_| Action::SearchSubmit,
            },
        );

        render_status_line(frame, chunks[1], state);

        if let Some(snapshot) = &state.snapshot {
            let mut card = WeatherCard;
            card.render(
                frame,
                chunks[2],
                WeatherCardProps {
                    snapshot,
                    unit: state.unit,
                },
            );
        }

        let mut status_bar = StatusBar::new();
        <StatusBar as Component<Action>>::render(
            &mut status_bar,
            frame,
            chunks[3],
            StatusBarProps {
                left: StatusBarSection::empty(),
                center: StatusBarSection::hints(&[
                    StatusBarHint::new("enter", "search"),
                    StatusBarHint::new("tab", "units"),
                    StatusBarHint::new("esc", "quit"),
                ]),
                right: StatusBarSection::empty(),
                style: StatusBarStyle::default(),
                is_focused: false,
            },
        );
    }
}

/// Loading indicator, error message, or the idle hint
fn render_status_line(frame: &mut Frame, area: Rect, state: &AppState) {
    let line = if state.is_loading {
        let spinner = SPINNERS[state.tick_count as usize % SPINNERS.len()];
        Line::from(vec![
            Span::styled(spinner, Style::default().fg(Color::Cyan)),
            Span::styled(" Loading Weather...", Style::default().fg(Color::Gray)),
        ])
    } else if let Some(error) = &state.error {
        Line::from(vec![
            Span::raw(ERROR_ICON),
            Span::raw(" "),
            Span::styled(error.clone(), Style::default().fg(Color::Rgb(200, 100, 100))),
        ])
    } else if state.snapshot.is_none() {
        Line::from(vec![
            Span::styled("Type a city and press ", Style::default().fg(Color::DarkGray)),
            Span::styled("enter", Style::default().fg(Color::Cyan).bold()),
        ])
    } else {
        Line::default()
    };
    frame.render_widget(Paragraph::new(line.centered()), area);
}
