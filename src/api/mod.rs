use crate::api::error::ApiError;
use crate::environment::Environment;
use crate::models::{DashboardResponse, TransactionDetail};

pub(crate) mod client;
pub use client::ApiClient;
pub mod error;

#[cfg(test)]
use mockall::{automock, predicate::*};

#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait MonitorApi: Send + Sync {
    fn environment(&self) -> &Environment;

    /// Fetch the dashboard aggregate: total count plus the active and
    /// completed transaction partitions.
    async fn get_dashboard(&self) -> Result<DashboardResponse, ApiError>;

    /// Fetch the full record for a single transaction, including its
    /// sentinel validation outcomes.
    async fn get_transaction(&self, transaction_id: &str)
    -> Result<TransactionDetail, ApiError>;
}
