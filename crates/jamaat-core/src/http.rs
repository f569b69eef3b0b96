//! Shared HTTP client construction.

use std::time::Duration;

use reqwest::Client;

use crate::config::ServiceConfig;
use crate::error::{NetworkError, ReqwestErrorExt};

/// Build the reqwest client every service client uses.
///
/// Carries the configured timeout and user agent.
pub fn build_client(services: &ServiceConfig) -> Result<Client, NetworkError> {
    Client::builder()
        .timeout(Duration::from_secs(services.request_timeout_secs))
        .user_agent(services.user_agent.as_str())
        .build()
        .map_err(|e| e.into_network_error())
}
