//! The two child panels mounted by the root shell.
//!
//! `FunctionalChild` is a plain stateless widget. `StatefulChild` goes through
//! ratatui's `StatefulWidget` plumbing and owns a state type, which holds
//! nothing yet. Both render a single fixed greeting line.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, StatefulWidget, Widget},
};

pub const FUNCTIONAL_GREETING: &str = "Hello from FunctionalChildComponent";
pub const STATEFUL_GREETING: &str = "Hello from StatefulChildComponent";

/// Stateless greeting panel
pub struct FunctionalChild;

impl Widget for FunctionalChild {
    fn render(self, area: Rect, buf: &mut Buffer) {
        greeting_panel(" Functional ", FUNCTIONAL_GREETING).render(area, buf);
    }
}

/// Greeting panel with a declared state container
pub struct StatefulChild;

/// State for [`StatefulChild`]. Empty until the panel grows real behavior.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatefulChildState {}

impl StatefulWidget for StatefulChild {
    type State = StatefulChildState;

    fn render(self, area: Rect, buf: &mut Buffer, _state: &mut Self::State) {
        greeting_panel(" Stateful ", STATEFUL_GREETING).render(area, buf);
    }
}

fn greeting_panel(title: &'static str, greeting: &'static str) -> Paragraph<'static> {
    let block = Block::default()
        .title(Span::styled(title, Style::default().fg(super::header())))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(super::inactive()));

    Paragraph::new(Line::from(Span::styled(
        greeting,
        Style::default().fg(super::text()),
    )))
    .block(block)
}
