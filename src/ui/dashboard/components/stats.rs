//! Dashboard statistics component
//!
//! Renders the total/active/completed counters from the aggregate response

use super::super::state::DashboardState;

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

/// Render the three stat boxes for the dashboard aggregate.
pub fn render_stats(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(34),
            Constraint::Percentage(33),
            Constraint::Percentage(33),
        ])
        .split(area);

    let (total, active, completed) = match state.view.data() {
        Some(dashboard) => (
            dashboard.total_transactions.to_string(),
            dashboard.active_transactions.len().to_string(),
            dashboard.completed_transactions.len().to_string(),
        ),
        None => ("-".to_string(), "-".to_string(), "-".to_string()),
    };

    render_stat_box(f, chunks[0], "TOTAL", &total, Color::Cyan);
    render_stat_box(f, chunks[1], "ACTIVE", &active, Color::Yellow);
    render_stat_box(f, chunks[2], "COMPLETED", &completed, Color::Green);
}

fn render_stat_box(
    f: &mut Frame,
    area: ratatui::layout::Rect,
    label: &str,
    value: &str,
    color: Color,
) {
    let lines = vec![Line::from(Span::styled(
        value.to_string(),
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    ))];

    let block = Block::default()
        .title(label)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(color));

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(block);
    f.render_widget(paragraph, area);
}
