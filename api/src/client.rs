use reqwest::{header, Client};

use crate::error::ApiError;
use crate::wire::{JoinReply, JoinRequest};

/// Path of the waitlist endpoint, relative to the site origin.
const WAITLIST_PATH: &str = "/waitlist";

/// Thin client for the waitlist endpoint.
///
/// No timeout is configured: a request waits until the transport resolves or
/// fails. Cloning is cheap (the underlying connection pool is shared).
#[derive(Debug, Clone)]
pub struct WaitlistClient {
    http: Client,
    endpoint: String,
}

impl WaitlistClient {
    /// Build a client posting to `{base_url}/waitlist`.
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        let http = Client::builder().build().map_err(ApiError::Client)?;
        Ok(Self {
            http,
            endpoint: format!("{}{WAITLIST_PATH}", base_url.trim_end_matches('/')),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Post `email` to the waitlist.
    ///
    /// HTTP status codes are ignored; any JSON body is the backend's answer.
    pub async fn join(&self, email: &str) -> Result<JoinReply, ApiError> {
        tracing::debug!(endpoint = %self.endpoint, domain = %email_domain(email), "Joining waitlist");

        let response = self
            .http
            .post(&self.endpoint)
            .header(header::CONTENT_TYPE, "application/json")
            .json(&JoinRequest { email })
            .send()
            .await?;

        let status = response.status();
        let body = response.bytes().await?;
        let reply: JoinReply = serde_json::from_slice(&body)?;

        tracing::debug!(
            status = %status,
            success = reply.success,
            "Waitlist reply received"
        );
        Ok(reply)
    }
}

/// Part of the address after `@`, for logs.
fn email_domain(email: &str) -> &str {
    email.rsplit_once('@').map(|(_, domain)| domain).unwrap_or("<none>")
}
