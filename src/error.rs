use reqwest::StatusCode;
use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ActionError {
    /// A required action input is absent or blank.
    #[error("Missing required input: {0}")]
    MissingInput(&'static str),

    /// The `jsonContext` input could not be parsed.
    #[error("Invalid JSON provided for contextAsJson")]
    InvalidJsonContext(#[source] serde_json::Error),

    /// The request never produced a usable response (connect, timeout,
    /// body decode).
    #[error("Request to the Orquesta Evaluation API failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The Evaluation API answered with a non-success status. `detail`
    /// carries the server's error code when the body had one.
    #[error("Orquesta Evaluation API returned {status}")]
    Api {
        status: StatusCode,
        detail: Option<String>,
    },

    #[error("Failed to write step output: {0}")]
    Output(#[from] io::Error),
}

/// Maps an error to the message the workflow step fails with.
///
/// The known `detail` codes from the Evaluation API get a specific
/// message; everything else falls back to the error's own message.
pub fn failure_message(err: &ActionError) -> String {
    match err {
        ActionError::Api {
            detail: Some(detail),
            ..
        } => match detail.as_str() {
            "missing_authorization_header" => {
                "Missing API Key. Please provide a valid Orquesta API Key.".to_string()
            }
            "invalid_api_key" => {
                "Failed to authenticate with the Orquesta Evaluation API. Check your API Key."
                    .to_string()
            }
            "invalid_request" => {
                "Invalid request. Please check your inputs and try again.".to_string()
            }
            "workspace_not_found" | "empty_evaluation" => {
                "The provided rule key does not exists.".to_string()
            }
            _ => err.to_string(),
        },
        other => other.to_string(),
    }
}
