pub mod components;

use std::sync::OnceLock;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::App;
use crate::theme::Theme;
use components::{FunctionalChild, StatefulChild};

/// ASCII logo shown in the header block
const LOGO: &str = include_str!("../../assets/logo.txt");

/// Header title text
pub const TITLE: &str = "Welcome to Hinagata";

// Load theme colors from the user config once at startup
static THEME: OnceLock<Theme> = OnceLock::new();

fn theme() -> &'static Theme {
    THEME.get_or_init(Theme::load)
}

// Helper functions to get theme colors
fn accent() -> Color { theme().accent }
fn header() -> Color { theme().header }
fn logo() -> Color { theme().logo }
fn text() -> Color { theme().text }
fn text_dim() -> Color { theme().text_dim }
fn inactive() -> Color { theme().inactive }

pub fn draw(f: &mut Frame, app: &mut App) {
    let area = f.area();

    let header_height = LOGO.lines().count() as u16 + 1;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(0)
        .constraints([
            Constraint::Length(header_height),   // Header: logo + title
            Constraint::Length(3),               // Functional greeting panel
            Constraint::Length(3),               // Stateful greeting panel
            Constraint::Min(0),                  // Spacer
            Constraint::Length(1),               // Footer
        ])
        .split(area);

    draw_header(f, chunks[0]);
    f.render_widget(FunctionalChild, chunks[1]);
    f.render_stateful_widget(StatefulChild, chunks[2], &mut app.child_state);
    draw_footer(f, chunks[4]);
}

fn draw_header(f: &mut Frame, area: Rect) {
    let mut lines: Vec<Line> = LOGO
        .lines()
        .map(|l| Line::from(Span::styled(l, Style::default().fg(logo()))))
        .collect();

    lines.push(Line::from(Span::styled(
        TITLE,
        Style::default().fg(header()).add_modifier(Modifier::BOLD),
    )));

    let banner = Paragraph::new(lines).alignment(Alignment::Center);
    f.render_widget(banner, area);
}

fn draw_footer(f: &mut Frame, area: Rect) {
    let hints: Vec<(&str, &str)> = vec![
        ("q", "Quit"),
        ("Esc", "Quit"),
    ];

    let hint_spans: Vec<Span> = hints
        .iter()
        .flat_map(|(key, action)| {
            vec![
                Span::styled(*key, Style::default().fg(accent())),
                Span::styled(format!(" {} │ ", action), Style::default().fg(text_dim())),
            ]
        })
        .collect();

    let footer = Paragraph::new(Line::from(hint_spans)).alignment(Alignment::Center);
    f.render_widget(footer, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use super::components::{StatefulChildState, FUNCTIONAL_GREETING, STATEFUL_GREETING};
    use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};

    fn test_app() -> App {
        App {
            config: AppConfig::default(),
            child_state: StatefulChildState::default(),
        }
    }

    fn draw_to_buffer(app: &mut App) -> Buffer {
        let backend = TestBackend::new(60, 20);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| draw(f, app)).unwrap();
        terminal.backend().buffer().clone()
    }

    fn rows(buf: &Buffer) -> Vec<String> {
        (0..buf.area.height)
            .map(|y| (0..buf.area.width).map(|x| buf[(x, y)].symbol()).collect())
            .collect()
    }

    #[test]
    fn shell_mounts_header_and_both_children_in_order() {
        let mut app = test_app();
        let rows = rows(&draw_to_buffer(&mut app));

        let title_row = rows
            .iter()
            .position(|r| r.contains(TITLE))
            .expect("header title not rendered");
        let functional_row = rows
            .iter()
            .position(|r| r.contains(FUNCTIONAL_GREETING))
            .expect("functional greeting not rendered");
        let stateful_row = rows
            .iter()
            .position(|r| r.contains(STATEFUL_GREETING))
            .expect("stateful greeting not rendered");

        assert!(title_row < functional_row);
        assert!(functional_row < stateful_row);
    }

    #[test]
    fn shell_mounts_each_child_exactly_once() {
        let mut app = test_app();
        let rows = rows(&draw_to_buffer(&mut app));

        let count = |needle: &str| rows.iter().filter(|r| r.contains(needle)).count();

        assert_eq!(count(TITLE), 1);
        assert_eq!(count(FUNCTIONAL_GREETING), 1);
        assert_eq!(count(STATEFUL_GREETING), 1);
    }

    #[test]
    fn redraw_is_idempotent() {
        let mut app = test_app();

        let first = draw_to_buffer(&mut app);
        let second = draw_to_buffer(&mut app);

        assert_eq!(first, second);
    }

    #[test]
    fn drawing_leaves_child_state_untouched() {
        let mut app = test_app();
        let _ = draw_to_buffer(&mut app);

        assert_eq!(app.child_state, StatefulChildState::default());
    }

    #[test]
    fn draw_handles_tiny_terminals() {
        let mut app = test_app();

        let backend = TestBackend::new(10, 3);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| draw(f, &mut app)).unwrap();
    }
}
