//! HTTP client creation

use reqwest::Client;
use std::time::Duration;

/// Creates the HTTP client shared by every API in a run.
///
/// With `timeout_seconds` unset the request timeout is left at reqwest's
/// default. Connection reuse is whatever reqwest provides out of the box.
pub fn create_http_client(timeout_seconds: Option<u64>) -> Result<Client, reqwest::Error> {
    let builder = Client::builder().user_agent(concat!(
        env!("CARGO_PKG_NAME"),
        "/",
        env!("CARGO_PKG_VERSION")
    ));

    match timeout_seconds {
        Some(seconds) => builder.timeout(Duration::from_secs(seconds)).build(),
        None => builder.build(),
    }
}

/// Creates an HTTP client for testing with the transport default timeout
#[cfg(test)]
pub fn create_test_http_client() -> Client {
    create_http_client(None).expect("Failed to create test HTTP client")
}
