//! Executes the core's plain-data requests with ureq.
//!
//! Status codes are returned as data (`http_status_as_error(false)`) so the
//! core decides what a 404 or 500 means. Only a failed round-trip becomes
//! `ApiError::Transport`.

use tracing::debug;
use users_core::{ApiError, HttpRequest, HttpResponse};

#[derive(Clone)]
pub struct UreqTransport {
    agent: ureq::Agent,
}

impl Default for UreqTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl UreqTransport {
    pub fn new() -> Self {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .new_agent();
        Self { agent }
    }

    pub fn execute(&self, req: &HttpRequest) -> Result<HttpResponse, ApiError> {
        let mut call = self.agent.get(&req.url);
        for (name, value) in &req.headers {
            call = call.header(name.as_str(), value.as_str());
        }
        let mut response = call
            .call()
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .body_mut()
            .read_to_string()
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        debug!(url = %req.url, status, bytes = body.len(), "response received");
        Ok(HttpResponse::new(status, body))
    }
}
