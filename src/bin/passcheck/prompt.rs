//! Line-oriented prompts, used when answers come from plain standard input.

use std::io::{BufRead, Write};

use anyhow::Context;

use crate::ProgError;

/// Write `prompt`, then read one line of `input`, without its line terminator.
pub(crate) fn ask<R, W>(input: &mut R, output: &mut W, prompt: &str) -> Result<String, ProgError>
where
    R: BufRead,
    W: Write,
{
    write!(output, "{}: ", prompt)
        .and_then(|()| output.flush())
        .context("failed to write prompt")?;
    let mut line = String::new();
    let read = input
        .read_line(&mut line)
        .context("failed to read from standard input")?;
    if read == 0 {
        return Err(ProgError::InputEnded(prompt.to_owned()));
    }
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    Ok(line)
}

/// Like [`ask`], but trims the answer and treats an empty one as no answer.
pub(crate) fn ask_optional<R, W>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
) -> Result<Option<String>, ProgError>
where
    R: BufRead,
    W: Write,
{
    let answer = ask(input, output, prompt)?;
    let answer = answer.trim();
    Ok((!answer.is_empty()).then(|| answer.to_owned()))
}

pub(crate) fn ask_yes_no<R, W>(
    input: &mut R,
    output: &mut W,
    question: &str,
) -> Result<bool, ProgError>
where
    R: BufRead,
    W: Write,
{
    let answer = ask(input, output, &format!("{} (yes/no)", question))?;
    Ok(is_yes(&answer))
}

pub(crate) fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "yes" | "y")
}
