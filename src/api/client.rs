//! Sentinel backend API client
//!
//! A thin reqwest wrapper for the monitoring endpoints: the dashboard
//! aggregate and single-transaction details.

use crate::api::MonitorApi;
use crate::api::error::ApiError;
use crate::environment::Environment;
use crate::models::{DashboardResponse, TransactionDetail};
use reqwest::{Client, ClientBuilder, Response};
use serde::de::DeserializeOwned;
use std::time::Duration;

// User-Agent string with monitor version
const USER_AGENT: &str = concat!("sentinel-monitor/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    environment: Environment,
}

impl ApiClient {
    pub fn new(environment: Environment) -> Self {
        Self {
            client: ClientBuilder::new()
                .connect_timeout(Duration::from_secs(10))
                .timeout(Duration::from_secs(10))
                .build()
                .expect("Failed to create HTTP client"),
            environment,
        }
    }

    fn build_url(&self, endpoint: &str) -> String {
        format!(
            "{}/{}",
            self.environment.api_base_url().trim_end_matches('/'),
            endpoint.trim_start_matches('/')
        )
    }

    async fn handle_response_status(response: Response) -> Result<Response, ApiError> {
        if !response.status().is_success() {
            return Err(ApiError::from_response(response).await);
        }
        Ok(response)
    }

    async fn get_request<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, ApiError> {
        let url = self.build_url(endpoint);
        let response = self
            .client
            .get(&url)
            .header("User-Agent", USER_AGENT)
            .send()
            .await?;

        let response = Self::handle_response_status(response).await?;
        let body = response.text().await?;
        serde_json::from_str(&body).map_err(ApiError::Decode)
    }
}

#[async_trait::async_trait]
impl MonitorApi for ApiClient {
    fn environment(&self) -> &Environment {
        &self.environment
    }

    async fn get_dashboard(&self) -> Result<DashboardResponse, ApiError> {
        self.get_request("dashboard").await
    }

    async fn get_transaction(
        &self,
        transaction_id: &str,
    ) -> Result<TransactionDetail, ApiError> {
        let id_path = urlencoding::encode(transaction_id).into_owned();
        let endpoint = format!("transaction/{}", id_path);
        self.get_request(&endpoint).await
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_url_joins_base_and_endpoint() {
        let client = ApiClient::new(Environment::Local);
        assert_eq!(
            client.build_url("dashboard"),
            "http://localhost:8000/api/dashboard"
        );
        // Leading slashes and trailing base slashes must not double up.
        assert_eq!(
            client.build_url("/transaction/tx-1"),
            "http://localhost:8000/api/transaction/tx-1"
        );
    }

    #[test]
    fn build_url_tolerates_trailing_slash_in_base() {
        let client = ApiClient::new(Environment::Custom {
            api_base_url: "https://sentinel.example.com/api/".to_string(),
        });
        assert_eq!(
            client.build_url("dashboard"),
            "https://sentinel.example.com/api/dashboard"
        );
    }

    #[test]
    /// Transaction ids are encoded before being spliced into the path.
    fn transaction_id_is_percent_encoded() {
        let encoded = urlencoding::encode("tx/../admin").into_owned();
        assert_eq!(encoded, "tx%2F..%2Fadmin");
    }
}
