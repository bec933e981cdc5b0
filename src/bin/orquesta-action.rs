use clap::{Parser, command};
use orquesta_action::{
    client::{DEFAULT_API_URL, EvaluationClient},
    config::Inputs,
    context::build_context,
    error::{ActionError, failure_message},
    github,
};
use serde_json::Value;
use tracing::debug;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Orquesta API key used to authenticate evaluation requests
    #[arg(long, env = "INPUT_APIKEY")]
    api_key: Option<String>,

    /// Key of the rule to evaluate
    #[arg(long, env = "INPUT_RULEKEY")]
    rule_key: Option<String>,

    /// Evaluation context as a JSON-encoded object
    #[arg(long, env = "INPUT_JSONCONTEXT")]
    json_context: Option<String>,

    /// Evaluation context as newline-separated key:value pairs
    #[arg(long, env = "INPUT_MULTILINECONTEXT")]
    multiline_context: Option<String>,

    /// Base URL of the Orquesta Evaluation API
    #[arg(long, env = "ORQUESTA_API_URL", default_value = DEFAULT_API_URL)]
    api_url: String,
}

async fn run(cli: Cli) -> Result<(), ActionError> {
    debug!("Checking required inputs...");

    let inputs = Inputs::gather(
        cli.api_key,
        cli.rule_key,
        cli.json_context,
        cli.multiline_context,
        cli.api_url,
    )?;

    debug!("All required inputs are present");
    debug!("Using API key {}", inputs.masked_key());

    let context = build_context(
        inputs.json_context.as_deref(),
        inputs.multiline_context.as_deref(),
    )?;

    debug!("Sending request to the Orquesta Evaluation API...");

    let client = EvaluationClient::new(&inputs.api_url, inputs.api_key.clone());
    let result = client.evaluate(&inputs.rule_key, &context).await?;

    debug!(?result, "Rule evaluation result");

    github::set_output("result", &render_result(result.as_ref()))?;

    Ok(())
}

/// Renders the evaluation result verbatim: strings raw, other JSON
/// values in their compact encoding, an absent result as empty.
fn render_result(result: Option<&Value>) -> String {
    match result {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(value)) => value.clone(),
        Some(other) => other.to_string(),
    }
}

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(fmt::layer())
        .init();

    let _ = dotenv::dotenv();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        github::set_failed(&failure_message(&e));
        std::process::exit(1);
    }
}
