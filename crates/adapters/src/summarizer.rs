use std::sync::Arc;
use std::time::Duration;

use gospoil_application::{ApplicationError, EngineFactory, SummarizationEngine};
use gospoil_domain::SummaryBounds;
use serde_json::{json, Value};
use tracing::info;

use crate::http::HttpTransport;

const INFERENCE_TIMEOUT: Duration = Duration::from_secs(60);

/// Hands out a hosted-inference summarization engine when a model and an
/// access token are configured.
pub struct HuggingFaceEngineFactory {
    transport: Arc<dyn HttpTransport>,
    endpoint: String,
    model: String,
    token: Option<String>,
}

impl HuggingFaceEngineFactory {
    pub fn new(
        transport: Arc<dyn HttpTransport>,
        endpoint: String,
        model: String,
        token: Option<String>,
    ) -> Self {
        Self {
            transport,
            endpoint,
            model,
            token,
        }
    }
}

impl EngineFactory for HuggingFaceEngineFactory {
    fn acquire(&self) -> Result<Arc<dyn SummarizationEngine>, ApplicationError> {
        let token = self
            .token
            .as_deref()
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .ok_or_else(|| {
                ApplicationError::Summarizer("no summarizer token configured".to_string())
            })?;
        if self.model.trim().is_empty() {
            return Err(ApplicationError::Summarizer(
                "no summarizer model configured".to_string(),
            ));
        }

        let url = format!(
            "{}/{}",
            self.endpoint.trim_end_matches('/'),
            self.model.trim()
        );
        info!(%url, "summarization engine ready");
        Ok(Arc::new(HuggingFaceEngine {
            transport: Arc::clone(&self.transport),
            url,
            token: token.to_string(),
        }))
    }
}

struct HuggingFaceEngine {
    transport: Arc<dyn HttpTransport>,
    url: String,
    token: String,
}

impl SummarizationEngine for HuggingFaceEngine {
    fn summarize(&self, text: &str, bounds: SummaryBounds) -> Result<String, ApplicationError> {
        let body = json!({
            "inputs": text,
            "parameters": {
                "max_length": bounds.max_length,
                "min_length": bounds.min_length,
                "do_sample": false,
            }
        });
        let response =
            self.transport
                .post_json(&self.url, Some(&self.token), &body, INFERENCE_TIMEOUT)?;
        parse_summary(&response)
    }
}

/// Text of the first output: `summary_text`, else `generated_text`.
fn parse_summary(response: &Value) -> Result<String, ApplicationError> {
    if let Some(error) = response.get("error").and_then(Value::as_str) {
        return Err(ApplicationError::Summarizer(error.to_string()));
    }

    let first = response
        .as_array()
        .and_then(|outputs| outputs.first())
        .ok_or_else(|| ApplicationError::Summarizer("engine returned no output".to_string()))?;

    first
        .get("summary_text")
        .or_else(|| first.get("generated_text"))
        .and_then(Value::as_str)
        .map(|text| text.trim().to_string())
        .ok_or_else(|| ApplicationError::Summarizer(format!("unexpected engine output: {first}")))
}
