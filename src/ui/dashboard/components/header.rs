//! Dashboard header component
//!
//! Renders the title bar with environment, uptime and poll status

use super::super::state::{DashboardState, ViewState};
use crate::environment::Environment;

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

/// Render the header with title and connection line.
pub fn render_header(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let header_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Length(2)])
        .split(area);

    let version = env!("CARGO_PKG_VERSION");
    let title = Paragraph::new(format!("SENTINEL MONITOR v{}", version))
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_type(BorderType::Thick),
        );
    f.render_widget(title, header_chunks[0]);

    let env_color = match state.environment {
        Environment::Local => Color::Green,
        Environment::Custom { .. } => Color::Yellow,
    };

    // Poll status: live while polling, paused after a failure.
    let (status_text, status_color) = match (&state.view, state.paused) {
        (_, true) => ("PAUSED", Color::Red),
        (ViewState::Loading, _) => ("LOADING", Color::Yellow),
        _ => ("LIVE", Color::Green),
    };

    let uptime = state.start_time.elapsed();
    let uptime_text = format!("{}m {}s", uptime.as_secs() / 60, uptime.as_secs() % 60);

    let mut spans = vec![
        Span::styled(
            format!("Env: {}", state.environment),
            Style::default().fg(env_color),
        ),
        Span::raw("  |  "),
        Span::styled(
            status_text,
            Style::default()
                .fg(status_color)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  |  "),
        Span::styled(
            format!("Uptime: {}", uptime_text),
            Style::default().fg(Color::LightGreen),
        ),
    ];

    if let Some(last_updated) = &state.last_updated {
        spans.push(Span::raw("  |  "));
        spans.push(Span::styled(
            format!("Updated: {}", last_updated),
            Style::default().fg(Color::DarkGray),
        ));
    }

    let status_line = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);
    f.render_widget(status_line, header_chunks[1]);
}
