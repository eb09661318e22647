//! Data model for the sentinel backend API.
//!
//! Mirrors the flat wire schema served by the backend. Validation result
//! payloads are kept as raw JSON so that re-serializing a record reproduces
//! the server payload verbatim, unknown fields included.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Lifecycle status of a transaction, as tagged by the backend.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum TransactionStatus {
    Pending,
    Processing,
    Completed,
    Failed,
    /// Catch-all for status tags this client does not know about.
    #[serde(other)]
    Unknown,
}

impl TransactionStatus {
    /// Whether the transaction has reached a terminal state.
    pub fn is_terminal(&self) -> bool {
        matches!(self, TransactionStatus::Completed | TransactionStatus::Failed)
    }
}

/// Creation/update timestamp. The backend emits either an ISO-8601 string or
/// epoch seconds depending on where the record came from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Timestamp {
    Text(String),
    EpochSecs(f64),
}

impl Display for Timestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Timestamp::Text(s) => match DateTime::parse_from_rfc3339(s) {
                Ok(dt) => write!(
                    f,
                    "{}",
                    dt.with_timezone(&Local).format("%Y-%m-%d %H:%M:%S")
                ),
                Err(_) => write!(f, "{}", s),
            },
            Timestamp::EpochSecs(secs) => match DateTime::from_timestamp(*secs as i64, 0) {
                Some(dt) => write!(
                    f,
                    "{}",
                    dt.with_timezone(&Local).format("%Y-%m-%d %H:%M:%S")
                ),
                None => write!(f, "{}", secs),
            },
        }
    }
}

/// Lightweight transaction record used in list views.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionSummary {
    pub transaction_id: String,
    pub from_address: String,
    pub created_at: Timestamp,
    pub status: TransactionStatus,
}

/// Named sentinel check outcome attached to a transaction detail.
///
/// `result` is deliberately untyped: sentinels attach free-form payloads and
/// the client must preserve them as-is for the raw JSON preview.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub name: String,
    pub status: TransactionStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<serde_json::Value>,
}

/// Full transaction record including sentinel validation outcomes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionDetail {
    pub transaction_id: String,
    #[serde(rename = "chainId")]
    pub chain_id: u64,
    pub from_address: String,
    pub to_address: String,
    pub data: String,
    pub value: u128,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    pub validations: Vec<ValidationResult>,
    pub created_at: Timestamp,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<Timestamp>,
    pub status: TransactionStatus,
}

/// Dashboard aggregate: a total plus two collections partitioned by status.
/// The backend guarantees every summary appears in exactly one partition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardResponse {
    pub total_transactions: usize,
    pub active_transactions: Vec<TransactionSummary>,
    pub completed_transactions: Vec<TransactionSummary>,
}

impl DashboardResponse {
    /// Backend obligation: the total must account for both partitions.
    /// Checked so the UI can flag a drifting backend, never enforced.
    pub fn is_consistent(&self) -> bool {
        self.total_transactions
            == self.active_transactions.len() + self.completed_transactions.len()
    }
}
