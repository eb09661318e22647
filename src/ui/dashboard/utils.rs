//! Dashboard utility functions
//!
//! Contains helper functions used across dashboard components

use crate::events::Fetcher;
use crate::models::TransactionStatus;
use ratatui::prelude::Color;

/// Get a ratatui color for a fetcher based on its type
pub fn get_fetcher_color(fetcher: &Fetcher) -> Color {
    match fetcher {
        Fetcher::DashboardPoller => Color::Cyan,
        Fetcher::DetailFetcher => Color::Yellow,
    }
}

/// Get a ratatui color for a transaction status tag
pub fn get_status_color(status: TransactionStatus) -> Color {
    match status {
        TransactionStatus::Completed => Color::Green,
        TransactionStatus::Failed => Color::Red,
        TransactionStatus::Pending | TransactionStatus::Processing => Color::Yellow,
        TransactionStatus::Unknown => Color::DarkGray,
    }
}

/// Format compact timestamp with date and time from full timestamp
pub fn format_compact_timestamp(timestamp: &str) -> String {
    // Extract from "YYYY-MM-DD HH:MM:SS" format
    if let Some(date_part) = timestamp.split(' ').next() {
        if let Some(time_part) = timestamp.split(' ').nth(1) {
            // Extract MM-DD from date and HH:MM from time
            if let Some(month_day) = date_part.get(5..10) {
                if let Some(hour_min) = time_part.get(0..5) {
                    return format!("{} {}", month_day, hour_min);
                }
            }
        }
    }
    // Fallback to original timestamp if parsing fails
    timestamp.to_string()
}

/// Shorten a long identifier or address for list display: keeps the first
/// and last few characters with an ellipsis in between.
pub fn shorten(value: &str, head: usize, tail: usize) -> String {
    if value.chars().count() <= head + tail + 1 {
        return value.to_string();
    }
    let start: String = value.chars().take(head).collect();
    let end: String = value
        .chars()
        .rev()
        .take(tail)
        .collect::<Vec<_>>()
        .into_iter()
        .rev()
        .collect();
    format!("{}…{}", start, end)
}
