use reqwest::{Client, header};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ActionError;

/// Production endpoint of the Orquesta Evaluation API.
pub const DEFAULT_API_URL: &str = "https://api.orquesta.dev";

const SDK_VERSION: &str = "@orquestadev/orquesta-action@v1";

#[derive(Serialize)]
struct EvaluationRequest<'a> {
    rule_key: &'a str,
    context: &'a Value,
}

#[derive(Deserialize)]
struct ErrorBody {
    detail: Option<String>,
}

pub struct EvaluationClient {
    client: Client,
    base_url: String,
    api_key: SecretString,
}

impl EvaluationClient {
    pub fn new(base_url: &str, api_key: SecretString) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
        }
    }

    /// Evaluates one rule against the given context.
    ///
    /// Issues a single POST; there is no retry. On success the result is
    /// the response field named by `rule_key`; an absent field is
    /// `Ok(None)`, not an error. A non-success status carries the
    /// server's `detail` code when the body has one.
    pub async fn evaluate(
        &self,
        rule_key: &str,
        context: &Value,
    ) -> Result<Option<Value>, ActionError> {
        let url = format!("{}/evaluate", self.base_url);
        let response = self
            .client
            .post(&url)
            .header(
                header::AUTHORIZATION,
                format!("Bearer {}", self.api_key.expose_secret()),
            )
            .header(header::ACCEPT, "application/json")
            .header("X-SDK-Version", SDK_VERSION)
            .json(&EvaluationRequest { rule_key, context })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            // Best-effort decode: a non-JSON error body means no detail.
            let detail = response
                .json::<ErrorBody>()
                .await
                .ok()
                .and_then(|body| body.detail);
            return Err(ActionError::Api { status, detail });
        }

        let body: Value = response.json().await?;
        Ok(body.get(rule_key).cloned())
    }
}
