use anyhow::{Context, Result};
use std::io::{self, Write};

/// Prints the message without a trailing newline and reads one line from
/// stdin, whitespace-trimmed. End of input yields an empty string.
pub fn prompt(message: &str) -> Result<String> {
    print!("{}", message);
    io::stdout().flush().context("Failed to flush stdout")?;

    let mut line = String::new();
    io::stdin()
        .read_line(&mut line)
        .context("Failed to read from stdin")?;

    Ok(line.trim().to_string())
}
