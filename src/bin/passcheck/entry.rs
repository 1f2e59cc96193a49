//! Ways of reading the password from the operator.

use std::io::{self, BufRead, IsTerminal, Write};

use passcheck::Secret;

use crate::ProgError;

/// How the password is read, as chosen on the command line.
#[derive(Clone, Copy, Debug, Eq, PartialEq, clap::ValueEnum)]
pub(crate) enum EntryMethod {
    /// Pick a strategy based on which streams are attached to a terminal.
    Auto,
    /// Read directly from the terminal with echo disabled.
    Terminal,
    /// A masked prompt drawn on the terminal.
    Masked,
    /// A plain line from standard input; the password is echoed if stdin is a terminal.
    Line,
}

/// A concrete way to read the password; what [`EntryMethod::Auto`] resolves to.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Strategy {
    Terminal,
    Masked,
    Line,
}

/// Which standard streams are attached to a terminal.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Streams {
    pub stdin_is_term: bool,
    pub stdout_is_term: bool,
    pub stderr_is_term: bool,
}

impl Streams {
    pub(crate) fn detect() -> Streams {
        Streams {
            stdin_is_term: io::stdin().is_terminal(),
            stdout_is_term: console::Term::stdout().is_term(),
            stderr_is_term: console::Term::stderr().is_term(),
        }
    }
}

impl EntryMethod {
    pub(crate) fn resolve(self, streams: Streams) -> Strategy {
        let strategy = match self {
            EntryMethod::Terminal => Strategy::Terminal,
            EntryMethod::Masked => Strategy::Masked,
            EntryMethod::Line => Strategy::Line,
            EntryMethod::Auto if streams.stdin_is_term && streams.stdout_is_term => {
                Strategy::Terminal
            }
            EntryMethod::Auto if streams.stderr_is_term => Strategy::Masked,
            EntryMethod::Auto => Strategy::Line,
        };
        tracing::debug!(method = ?self, ?streams, ?strategy, "resolved password entry");
        strategy
    }
}

impl Strategy {
    /// Read the password. `input` and `output` are only used by [`Strategy::Line`]; the other
    /// strategies talk to the terminal directly.
    pub(crate) fn read_password<R, W>(
        self,
        prompt: &str,
        input: &mut R,
        output: &mut W,
    ) -> Result<Secret, ProgError>
    where
        R: BufRead,
        W: Write,
    {
        let password = match self {
            Strategy::Terminal => rpassword::prompt_password(format!("{}: ", prompt))
                .map_err(cancelled_or("failed to read password from TTY"))?,
            Strategy::Masked => {
                dialoguer::Password::with_theme(&dialoguer::theme::ColorfulTheme::default())
                    .with_prompt(prompt)
                    .allow_empty_password(true)
                    .interact()
                    .map_err(cancelled_or("failed to prompt you for a password"))?
            }
            Strategy::Line => crate::prompt::ask(input, output, prompt)?,
        };
        Ok(Secret::from(password))
    }
}

fn cancelled_or(context: &'static str) -> impl FnOnce(io::Error) -> ProgError {
    move |err| match err.kind() {
        io::ErrorKind::Interrupted | io::ErrorKind::UnexpectedEof => ProgError::EntryCancelled,
        _ => anyhow::Error::new(err).context(context).into(),
    }
}
