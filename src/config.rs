use secrecy::{ExposeSecret, SecretString};

use crate::error::ActionError;

/// Inputs for one evaluation run.
///
/// Built once at the start of the run from the workflow step's inputs
/// (the `INPUT_*` environment variables GitHub sets, or the matching
/// CLI flags) and validated before anything else happens.
#[derive(Debug, Clone)]
pub struct Inputs {
    /// API key used to authenticate against the Evaluation API.
    pub api_key: SecretString,

    /// Key of the rule to evaluate.
    pub rule_key: String,

    /// Evaluation context as a JSON-encoded object.
    pub json_context: Option<String>,

    /// Evaluation context as newline-separated `key:value` pairs.
    pub multiline_context: Option<String>,

    /// Base URL of the Evaluation API.
    pub api_url: String,
}

impl Inputs {
    /// Collects the step inputs, validating required ones in
    /// declaration order. The first missing input fails the run; later
    /// inputs are not checked.
    pub fn gather(
        api_key: Option<String>,
        rule_key: Option<String>,
        json_context: Option<String>,
        multiline_context: Option<String>,
        api_url: String,
    ) -> Result<Self, ActionError> {
        let api_key = required("apiKey", api_key)?;
        let rule_key = required("ruleKey", rule_key)?;

        Ok(Self {
            api_key: SecretString::new(Box::from(api_key)),
            rule_key,
            json_context,
            multiline_context,
            api_url,
        })
    }

    /// API key with everything but the last 4 characters hidden, for
    /// debug output.
    pub fn masked_key(&self) -> String {
        let chars = self.api_key.expose_secret().chars();
        if chars.clone().count() <= 4 {
            "**************************".to_string()
        } else {
            let last_4 = chars.rev().take(4).collect::<String>();
            format!(
                "**********************{}",
                last_4.chars().rev().collect::<String>()
            )
        }
    }
}

fn required(name: &'static str, value: Option<String>) -> Result<String, ActionError> {
    match value {
        Some(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(ActionError::MissingInput(name)),
    }
}
