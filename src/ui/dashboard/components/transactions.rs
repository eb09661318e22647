//! Transaction list component
//!
//! Renders the active and completed partitions side by side with selection

use super::super::state::{DashboardState, Panel, ViewState};
use super::super::utils::{get_status_color, shorten};
use crate::models::TransactionSummary;

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, List, ListItem, ListState, Padding, Paragraph};

pub const NO_ACTIVE_MESSAGE: &str = "No active transactions";
pub const NO_COMPLETED_MESSAGE: &str = "No completed transactions";

/// Message shown when a partition has no rows.
pub fn empty_message(panel: Panel) -> &'static str {
    match panel {
        Panel::Active => NO_ACTIVE_MESSAGE,
        Panel::Completed => NO_COMPLETED_MESSAGE,
    }
}

/// Render the transaction lists, or the loading/error placeholder when no
/// data has arrived yet.
pub fn render_transactions(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    match &state.view {
        ViewState::Loading => render_placeholder(f, area, "Loading dashboard...", Color::Yellow),
        ViewState::Failed(message) => render_placeholder(f, area, message, Color::Red),
        ViewState::Ready(_) => render_lists(f, area, state),
    }
}

fn render_placeholder(f: &mut Frame, area: ratatui::layout::Rect, message: &str, color: Color) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(color))
        .padding(Padding::uniform(1));

    let paragraph = Paragraph::new(message.to_string())
        .alignment(Alignment::Center)
        .style(Style::default().fg(color))
        .block(block);
    f.render_widget(paragraph, area);
}

fn render_lists(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    render_panel(f, chunks[0], state, Panel::Active);
    render_panel(f, chunks[1], state, Panel::Completed);
}

fn render_panel(
    f: &mut Frame,
    area: ratatui::layout::Rect,
    state: &DashboardState,
    panel: Panel,
) {
    let focused = state.panel == panel;
    let rows = state.rows_of(panel);

    let title = match panel {
        Panel::Active => format!("ACTIVE ({})", rows.len()),
        Panel::Completed => format!("COMPLETED ({})", rows.len()),
    };

    let border_color = if focused { Color::Cyan } else { Color::DarkGray };
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border_color))
        .padding(Padding::uniform(1));

    if rows.is_empty() {
        let paragraph = Paragraph::new(empty_message(panel))
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        f.render_widget(paragraph, area);
        return;
    }

    let items: Vec<ListItem> = rows.iter().map(summary_item).collect();
    let list = List::new(items).block(block).highlight_style(
        Style::default()
            .bg(Color::Rgb(30, 40, 50))
            .add_modifier(Modifier::BOLD),
    );

    let mut list_state = ListState::default();
    if focused {
        list_state.select(Some(state.selected));
    }
    f.render_stateful_widget(list, area, &mut list_state);
}

fn summary_item(summary: &TransactionSummary) -> ListItem<'_> {
    let line = Line::from(vec![
        Span::styled(
            shorten(&summary.transaction_id, 10, 4),
            Style::default().fg(Color::White),
        ),
        Span::raw("  "),
        Span::styled(
            format!("from {}", shorten(&summary.from_address, 6, 4)),
            Style::default().fg(Color::DarkGray),
        ),
        Span::raw("  "),
        Span::styled(
            summary.status.to_string(),
            Style::default().fg(get_status_color(summary.status)),
        ),
        Span::raw("  "),
        Span::styled(
            summary.created_at.to_string(),
            Style::default().fg(Color::DarkGray),
        ),
    ]);
    ListItem::new(line)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::environment::Environment;
    use crate::models::DashboardResponse;
    use std::time::Instant;

    fn ready_state(active: usize, completed: usize) -> DashboardState {
        let mut state = DashboardState::new(Environment::Local, Instant::now());
        let summary = |id: usize| crate::models::TransactionSummary {
            transaction_id: format!("tx-{}", id),
            from_address: "0xabc".to_string(),
            created_at: crate::models::Timestamp::EpochSecs(0.0),
            status: crate::models::TransactionStatus::Pending,
        };
        state.view = ViewState::Ready(DashboardResponse {
            total_transactions: active + completed,
            active_transactions: (0..active).map(summary).collect(),
            completed_transactions: (0..completed).map(summary).collect(),
        });
        state
    }

    #[test]
    /// An empty active partition renders its configured empty message and no
    /// rows, independently of the other partition.
    fn empty_active_partition_selects_empty_message() {
        let state = ready_state(0, 2);

        let rows = state.rows_of(Panel::Active);
        assert!(rows.is_empty());
        assert_eq!(empty_message(Panel::Active), NO_ACTIVE_MESSAGE);

        // The completed side still has rows and keeps its own message.
        assert_eq!(state.rows_of(Panel::Completed).len(), 2);
        assert_eq!(empty_message(Panel::Completed), NO_COMPLETED_MESSAGE);
    }

    #[test]
    fn populated_partition_takes_the_list_branch() {
        let state = ready_state(1, 0);
        assert!(!state.rows_of(Panel::Active).is_empty());
        assert!(state.rows_of(Panel::Completed).is_empty());
    }
}
