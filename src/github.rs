//! Minimal GitHub Actions output surface: step outputs and the failure
//! annotation. Inputs come in through `INPUT_*` environment variables
//! and are handled by the CLI parser, not here.

use std::{
    env,
    fs::OpenOptions,
    io::{self, Write},
};

const MULTILINE_DELIMITER: &str = "__ORQUESTA_OUTPUT__";

/// Publishes a step output.
///
/// Appends to the file named by `GITHUB_OUTPUT` (heredoc syntax when the
/// value spans lines). Without `GITHUB_OUTPUT` set, falls back to the
/// legacy `set-output` workflow command so local runs still show the
/// result.
pub fn set_output(name: &str, value: &str) -> io::Result<()> {
    match env::var("GITHUB_OUTPUT") {
        Ok(path) => {
            let mut file = OpenOptions::new().create(true).append(true).open(path)?;
            if value.contains('\n') {
                writeln!(file, "{name}<<{MULTILINE_DELIMITER}")?;
                writeln!(file, "{value}")?;
                writeln!(file, "{MULTILINE_DELIMITER}")?;
            } else {
                writeln!(file, "{name}={value}")?;
            }
            Ok(())
        }
        Err(_) => {
            println!("::set-output name={name}::{}", escape_command_data(value));
            Ok(())
        }
    }
}

/// Marks the step as failed with an error annotation. The caller is
/// responsible for exiting non-zero afterwards.
pub fn set_failed(message: &str) {
    println!("::error::{}", escape_command_data(message));
}

// Workflow command encoding: %, CR and LF must be percent-escaped or
// the runner truncates the message at the first newline.
fn escape_command_data(data: &str) -> String {
    data.replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}
