use std::io::{self, Write};

use anyhow::Context;
use serde::Serialize;

use passcheck::{Secret, ValidationResult};

pub(crate) fn write_rules(mut output: impl Write) -> io::Result<()> {
    writeln!(output, "\n------ PASSWORD RULES ------")?;
    for rule in passcheck::rules::RULES {
        writeln!(output, "{}", rule.requirement)?;
    }
    writeln!(output)
}

pub(crate) fn write_result(mut output: impl Write, result: &ValidationResult) -> io::Result<()> {
    writeln!(output, "\n------ PASSWORD RESULT ------")?;
    if result.is_strong() {
        return writeln!(output, "Your password is {}.", result.strength());
    }
    writeln!(output, "Password Strength: {}", result.strength())?;
    writeln!(output, "\nYour password failed:")?;
    for failure in result.failures() {
        writeln!(output, "- {}", failure)?;
    }
    Ok(())
}

pub(crate) fn write_suggestion(mut output: impl Write, suggestion: &Secret) -> io::Result<()> {
    writeln!(output, "Suggested Password: {}", suggestion.as_str())
}

#[derive(Serialize)]
struct JsonReport<'a> {
    #[serde(flatten)]
    result: &'a ValidationResult,
    #[serde(skip_serializing_if = "Option::is_none")]
    suggestion: Option<&'a Secret>,
}

pub(crate) fn write_json(
    mut output: impl Write,
    result: &ValidationResult,
    suggestion: Option<&Secret>,
) -> anyhow::Result<()> {
    serde_json::to_writer_pretty(&mut output, &JsonReport { result, suggestion })
        .context("failed to write the result as JSON")?;
    writeln!(output).context("failed to write the result as JSON")?;
    Ok(())
}

pub(crate) fn print_generated(count: usize, json: bool) -> Result<(), crate::ProgError> {
    let passwords = (0..count)
        .map(|_| passcheck::generate())
        .collect::<Vec<_>>();
    let mut stdout = io::stdout().lock();
    if json {
        serde_json::to_writer(&mut stdout, &passwords)
            .context("failed to write passwords as JSON")?;
        writeln!(stdout).context("failed to write to stdout")?;
    } else {
        for password in &passwords {
            writeln!(stdout, "{}", password.as_str()).context("failed to write to stdout")?;
        }
    }
    Ok(())
}
