//! Transaction detail screen
//!
//! Fetched once when opened; renders the full record including sentinel
//! validation outcomes with their raw JSON payloads.

use crate::events::{Event, EventKind, FetchOutcome, Fetcher};
use crate::models::TransactionDetail;
use crate::ui::dashboard::ViewState;
use crate::ui::dashboard::utils::get_status_color;

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph, Wrap};

/// Generic user-facing message shown for any detail fetch failure.
pub const DETAIL_ERROR_MESSAGE: &str =
    "Error loading transaction. Press [Esc] to return to the dashboard.";

/// State for the detail screen: the requested id and its view-state slot.
#[derive(Debug)]
pub struct DetailState {
    pub transaction_id: String,
    pub view: ViewState<TransactionDetail>,
}

impl DetailState {
    /// Opens the screen in the loading state; the fetch runs once.
    pub fn loading(transaction_id: String) -> Self {
        Self {
            transaction_id,
            view: ViewState::Loading,
        }
    }

    /// Apply a detail fetch event to this screen.
    pub fn apply(&mut self, event: &Event) {
        if event.fetcher != Fetcher::DetailFetcher {
            return;
        }
        match event.kind {
            EventKind::Success => {
                if let Some(FetchOutcome::Detail(detail)) = &event.outcome {
                    // Guard against a stale fetch for a previously opened id.
                    if detail.transaction_id == self.transaction_id {
                        self.view = ViewState::Ready((**detail).clone());
                    }
                }
            }
            EventKind::Error => {
                self.view = ViewState::Failed(DETAIL_ERROR_MESSAGE.to_string());
            }
            EventKind::Warning | EventKind::Refresh => {}
        }
    }
}

/// Render the detail screen for the current view state.
pub fn render_detail(f: &mut Frame, state: &DetailState) {
    match &state.view {
        ViewState::Loading => render_notice(
            f,
            &format!("Loading transaction {}...", state.transaction_id),
            Color::Yellow,
        ),
        ViewState::Failed(message) => render_notice(f, message, Color::Red),
        ViewState::Ready(detail) => render_record(f, detail),
    }
}

fn render_notice(f: &mut Frame, message: &str, color: Color) {
    let block = Block::default()
        .title("TRANSACTION DETAIL")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(color))
        .padding(Padding::uniform(1));

    let paragraph = Paragraph::new(message.to_string())
        .alignment(Alignment::Center)
        .style(Style::default().fg(color))
        .block(block);
    f.render_widget(paragraph, f.area());
}

fn render_record(f: &mut Frame, detail: &TransactionDetail) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Fill(1),
            Constraint::Percentage(45),
            Constraint::Length(2),
        ])
        .margin(1)
        .split(f.area());

    let mut lines = vec![
        Line::from(vec![
            Span::styled("Transaction: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                detail.transaction_id.clone(),
                Style::default().fg(Color::White),
            ),
            Span::raw("  "),
            Span::styled(
                detail.status.to_string(),
                Style::default()
                    .fg(get_status_color(detail.status))
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::styled("Chain ID: ", Style::default().fg(Color::DarkGray)),
            Span::raw(detail.chain_id.to_string()),
        ]),
        Line::from(vec![
            Span::styled("Created: ", Style::default().fg(Color::DarkGray)),
            Span::raw(detail.created_at.to_string()),
        ]),
        Line::from(vec![
            Span::styled("From: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                detail.from_address.clone(),
                Style::default().fg(Color::LightBlue),
            ),
        ]),
        Line::from(vec![
            Span::styled("To: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                detail.to_address.clone(),
                Style::default().fg(Color::LightBlue),
            ),
        ]),
        Line::from(vec![
            Span::styled("Value: ", Style::default().fg(Color::DarkGray)),
            Span::raw(detail.value.to_string()),
        ]),
        Line::from(vec![
            Span::styled("Data: ", Style::default().fg(Color::DarkGray)),
            Span::raw(detail.data.clone()),
        ]),
    ];

    // The reason section only exists when the backend attached one.
    if let Some(reason) = &detail.reason {
        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::styled("Reason: ", Style::default().fg(Color::DarkGray)),
            Span::styled(reason.clone(), Style::default().fg(Color::Yellow)),
        ]));
    }

    let info_block = Block::default()
        .title("TRANSACTION DETAIL")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan))
        .padding(Padding::uniform(1));
    let info = Paragraph::new(lines)
        .block(info_block)
        .wrap(Wrap { trim: true });
    f.render_widget(info, chunks[0]);

    render_validations(f, chunks[1], detail);

    let footer = Paragraph::new("[Esc] Back to dashboard | [Q] Quit")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Cyan))
        .block(
            Block::default()
                .borders(Borders::TOP)
                .border_type(BorderType::Thick),
        );
    f.render_widget(footer, chunks[2]);
}

fn render_validations(f: &mut Frame, area: ratatui::layout::Rect, detail: &TransactionDetail) {
    let mut lines: Vec<Line> = Vec::new();
    for validation in &detail.validations {
        lines.push(Line::from(vec![
            Span::styled(
                validation.name.clone(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(
                validation.status.to_string(),
                Style::default().fg(get_status_color(validation.status)),
            ),
        ]));
        // Raw JSON preview of the sentinel payload, reproduced verbatim.
        if let Some(result) = &validation.result {
            let raw = serde_json::to_string_pretty(result)
                .unwrap_or_else(|_| "<unrenderable payload>".to_string());
            for raw_line in raw.lines() {
                lines.push(Line::from(Span::styled(
                    format!("  {}", raw_line),
                    Style::default().fg(Color::DarkGray),
                )));
            }
        }
    }

    if lines.is_empty() {
        lines.push(Line::from(Span::styled(
            "No validation outcomes yet",
            Style::default().fg(Color::DarkGray),
        )));
    }

    let block = Block::default()
        .title("SENTINEL VALIDATIONS")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan))
        .padding(Padding::uniform(1));
    let paragraph = Paragraph::new(lines).block(block).wrap(Wrap { trim: true });
    f.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error_classifier::LogLevel;
    use crate::models::{Timestamp, TransactionStatus};

    fn detail(id: &str) -> TransactionDetail {
        TransactionDetail {
            transaction_id: id.to_string(),
            chain_id: 1,
            from_address: "0xfrom".to_string(),
            to_address: "0xto".to_string(),
            data: "0x".to_string(),
            value: 0,
            reason: None,
            validations: vec![],
            created_at: Timestamp::EpochSecs(0.0),
            updated_at: None,
            status: TransactionStatus::Completed,
        }
    }

    #[test]
    fn successful_fetch_fills_the_view() {
        let mut state = DetailState::loading("tx-1".to_string());
        state.apply(&Event::detail_loaded(detail("tx-1")));
        assert!(matches!(state.view, ViewState::Ready(_)));
    }

    #[test]
    /// A late response for a different id must not overwrite this screen.
    fn stale_fetch_for_other_id_is_ignored() {
        let mut state = DetailState::loading("tx-2".to_string());
        state.apply(&Event::detail_loaded(detail("tx-1")));
        assert_eq!(state.view, ViewState::Loading);
    }

    #[test]
    /// Failures collapse to one generic message with a path back to the list.
    fn failure_is_terminal_with_back_hint() {
        let mut state = DetailState::loading("tx-404".to_string());
        state.apply(&Event::detail_failed(
            "Failed to load transaction tx-404: HTTP error with status 404".to_string(),
            LogLevel::Error,
        ));
        assert_eq!(
            state.view,
            ViewState::Failed(DETAIL_ERROR_MESSAGE.to_string())
        );
    }

    #[test]
    fn dashboard_events_do_not_touch_detail_state() {
        let mut state = DetailState::loading("tx-1".to_string());
        state.apply(&Event::dashboard_failed(
            "Dashboard fetch failed".to_string(),
            LogLevel::Error,
        ));
        assert_eq!(state.view, ViewState::Loading);
    }
}
