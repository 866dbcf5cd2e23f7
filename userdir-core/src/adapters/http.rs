//! User directory HTTP client
//!
//! Fetches the user collection from a JSON API that answers `GET <url>` with
//! an array of user records.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::ACCEPT;
use serde_json::Value as JsonValue;
use url::Url;

use crate::domain::result::{Error, Result};
use crate::domain::User;
use crate::ports::UserSource;

/// Endpoint used when no API URL is configured
pub const DEFAULT_API_URL: &str = "https://jsonplaceholder.typicode.com/users";

/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// HTTP user source
#[derive(Debug)]
pub struct HttpUserSource {
    client: Client,
    url: Url,
    timeout: Duration,
}

impl HttpUserSource {
    /// Create a new client for the given API URL
    pub fn new(api_url: &str, timeout: Duration) -> Result<Self> {
        let url = validate_api_url(api_url)?;

        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| Error::config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            url,
            timeout,
        })
    }

    /// The endpoint this client requests
    pub fn url(&self) -> &str {
        self.url.as_str()
    }

    /// Issue the single GET request and decode the user array
    pub fn get_users(&self) -> Result<Vec<User>> {
        let response = self
            .client
            .get(self.url.clone())
            .header(ACCEPT, "application/json")
            .send()
            .map_err(|e| self.map_request_error(e))?;

        check_response_status(&response)?;

        let body = response.text().map_err(|e| self.map_request_error(e))?;

        parse_users(&body)
    }

    /// Map request errors to user-friendly messages
    fn map_request_error(&self, error: reqwest::Error) -> Error {
        if error.is_timeout() {
            Error::transport(format!(
                "Request timed out after {} seconds",
                self.timeout.as_secs_f64()
            ))
        } else if error.is_connect() {
            Error::transport(format!(
                "Unable to connect to {}",
                self.url.host_str().unwrap_or("the user directory")
            ))
        } else {
            Error::transport(error.to_string())
        }
    }
}

impl UserSource for HttpUserSource {
    fn name(&self) -> &str {
        "http"
    }

    fn fetch_users(&self) -> Result<Vec<User>> {
        self.get_users()
    }
}

/// Parse and validate an API URL (http or https, with a host)
pub fn validate_api_url(api_url: &str) -> Result<Url> {
    let parsed = Url::parse(api_url)
        .map_err(|e| Error::config(format!("Invalid API URL '{}': {}", api_url, e)))?;

    if parsed.scheme() != "https" && parsed.scheme() != "http" {
        return Err(Error::config("API URL must use http or https"));
    }

    if parsed.host_str().map_or(true, str::is_empty) {
        return Err(Error::config("API URL must include a host"));
    }

    Ok(parsed)
}

/// Check response status; any non-2xx status is a failed fetch
fn check_response_status(response: &reqwest::blocking::Response) -> Result<()> {
    let status = response.status();
    if status.is_success() {
        Ok(())
    } else {
        Err(Error::Status(status.as_u16()))
    }
}

/// Decode a response body into users
///
/// The body must be a JSON array; each element must carry at least `id`,
/// `name` and `email`.
pub fn parse_users(body: &str) -> Result<Vec<User>> {
    let value: JsonValue =
        serde_json::from_str(body).map_err(|e| Error::payload(e.to_string()))?;

    if !value.is_array() {
        return Err(Error::payload("expected a JSON array of users"));
    }

    serde_json::from_value(value).map_err(|e| Error::payload(e.to_string()))
}
