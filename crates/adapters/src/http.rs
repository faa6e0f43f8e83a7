use std::io::Read;
use std::time::Duration;

use gospoil_application::ApplicationError;
use serde_json::Value;
use tracing::debug;

const MAX_BODY_BYTES: u64 = 16 * 1024 * 1024;

/// Blocking HTTP calls the adapters need. One call, one request: nothing is
/// retried.
pub trait HttpTransport: Send + Sync {
    fn get_json(
        &self,
        url: &str,
        query: &[(&str, &str)],
        timeout: Duration,
    ) -> Result<Value, ApplicationError>;

    fn get_bytes(&self, url: &str, timeout: Duration) -> Result<Vec<u8>, ApplicationError>;

    fn post_json(
        &self,
        url: &str,
        bearer_token: Option<&str>,
        body: &Value,
        timeout: Duration,
    ) -> Result<Value, ApplicationError>;
}

#[derive(Debug, Clone)]
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
        let agent = ureq::AgentBuilder::new()
            .timeout_connect(Duration::from_secs(5))
            .user_agent(concat!("gospoil/", env!("CARGO_PKG_VERSION")))
            .build();
        Self { agent }
    }
}

impl HttpTransport for UreqTransport {
    fn get_json(
        &self,
        url: &str,
        query: &[(&str, &str)],
        timeout: Duration,
    ) -> Result<Value, ApplicationError> {
        debug!(url, "GET json");
        let mut request = self.agent.get(url).timeout(timeout);
        for (key, value) in query {
            request = request.query(key, value);
        }
        request
            .call()
            .map_err(|error| map_ureq_error(url, error))?
            .into_json::<Value>()
            .map_err(|error| ApplicationError::Decode(error.to_string()))
    }

    fn get_bytes(&self, url: &str, timeout: Duration) -> Result<Vec<u8>, ApplicationError> {
        debug!(url, "GET bytes");
        let response = self
            .agent
            .get(url)
            .timeout(timeout)
            .call()
            .map_err(|error| map_ureq_error(url, error))?;

        read_capped(response.into_reader(), MAX_BODY_BYTES)
    }

    fn post_json(
        &self,
        url: &str,
        bearer_token: Option<&str>,
        body: &Value,
        timeout: Duration,
    ) -> Result<Value, ApplicationError> {
        debug!(url, "POST json");
        let mut request = self.agent.post(url).timeout(timeout);
        if let Some(token) = bearer_token {
            request = request.set("Authorization", &format!("Bearer {token}"));
        }
        request
            .send_json(body)
            .map_err(|error| map_ureq_error(url, error))?
            .into_json::<Value>()
            .map_err(|error| ApplicationError::Decode(error.to_string()))
    }
}

/// Reads the whole body. A body longer than `limit` bytes is an error.
fn read_capped(reader: impl Read, limit: u64) -> Result<Vec<u8>, ApplicationError> {
    let mut bytes = Vec::new();
    reader
        .take(limit + 1)
        .read_to_end(&mut bytes)
        .map_err(|error| ApplicationError::Network(error.to_string()))?;
    if bytes.len() as u64 > limit {
        return Err(ApplicationError::Network(format!(
            "response body exceeds {limit} bytes"
        )));
    }
    Ok(bytes)
}

fn map_ureq_error(url: &str, error: ureq::Error) -> ApplicationError {
    match error {
        ureq::Error::Status(code, response) => ApplicationError::Network(format!(
            "{url} answered HTTP {code} {}",
            response.status_text()
        )),
        ureq::Error::Transport(transport) => ApplicationError::Network(transport.to_string()),
    }
}
