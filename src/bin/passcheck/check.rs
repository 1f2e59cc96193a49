//! The interactive check: personal details, password, report, suggestion.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::Context;
use passcheck::Strength;

use crate::entry::{EntryMethod, Strategy, Streams};
use crate::{details, prompt, report, status_log, ProgError};

#[derive(clap::Args)]
pub(crate) struct CheckArgs {
    /// Read personal details from this YAML file instead of asking for them.
    #[arg(long, env = "PASSCHECK_DETAILS")]
    details: Option<PathBuf>,
    /// How to read the password.
    #[arg(long, value_enum, default_value_t = EntryMethod::Auto)]
    input: EntryMethod,
    /// File that a `Status=<STRENGTH>` line is appended to after each check.
    #[arg(long, env = "PASSCHECK_STATUS_LOG", default_value = "passcheck_status.log")]
    status_log: PathBuf,
    /// Don't write to the status log.
    #[arg(long)]
    no_status_log: bool,
    /// Print the result as JSON on stdout.
    #[arg(long)]
    json: bool,
    /// Suggest a strong password without asking, if the checked one isn't strong.
    #[arg(long)]
    suggest: bool,
    /// Exit with status 2 if the password isn't strong.
    #[arg(long)]
    fail_on_weak: bool,
}

pub(crate) fn check(args: CheckArgs) -> Result<(), ProgError> {
    let strategy = args.input.resolve(Streams::detect());
    let mut answers = stdin_reader();
    let mut stderr = io::stderr();
    let stdout = io::stdout().lock();
    let strength = check_with(&args, strategy, &mut answers, &mut stderr, stdout)?;
    if args.fail_on_weak && strength != Strength::Strong {
        return Err(ProgError::NotStrong(strength));
    }
    Ok(())
}

/// Line-oriented answers from stdin. The stdin lock is only taken for each read: the masked
/// prompt reads stdin itself when it is a terminal, and would block on a lock held here.
fn stdin_reader() -> io::BufReader<io::Stdin> {
    io::BufReader::new(io::stdin())
}

/// Run a check, reading answers from `input`. Prompts go to `prompts`, and the result to
/// `output`. Returns the strength of the checked password.
fn check_with<R, P, W>(
    args: &CheckArgs,
    strategy: Strategy,
    input: &mut R,
    prompts: &mut P,
    mut output: W,
) -> Result<Strength, ProgError>
where
    R: BufRead,
    P: Write,
    W: Write,
{
    let details = match &args.details {
        Some(path) => crate::load_details(path.clone())?,
        None => {
            writeln!(prompts, "--------- PASSWORD STRENGTH CHECKER & GENERATOR ---------")
                .context("failed to write to the terminal")?;
            details::collect_details(input, prompts)?
        }
    };

    report::write_rules(&mut *prompts).context("failed to write the password rules")?;
    let password = strategy.read_password("Enter your Password", input, prompts)?;

    let result = passcheck::evaluate(password.as_str(), &details.fragments());
    drop(password);
    tracing::info!(
        strength = %result.strength(),
        failures = result.failures().len(),
        "checked password"
    );

    if !args.no_status_log {
        status_log::record_status(&args.status_log, result.strength());
    }

    let suggestion = if result.is_strong() {
        None
    } else if args.suggest {
        Some(passcheck::generate())
    } else if args.json {
        None
    } else {
        report::write_result(&mut output, &result).context("failed to write the result")?;
        wants_suggestion(input, prompts)?.then(passcheck::generate)
    };

    if args.json {
        report::write_json(&mut output, &result, suggestion.as_ref())?;
    } else {
        if result.is_strong() || args.suggest {
            report::write_result(&mut output, &result).context("failed to write the result")?;
        }
        if let Some(suggestion) = &suggestion {
            report::write_suggestion(&mut output, suggestion)
                .context("failed to write the suggested password")?;
        }
    }

    Ok(result.strength())
}

/// Ask whether to suggest a password. Running out of input here counts as "no": the result has
/// already been shown.
fn wants_suggestion<R, P>(input: &mut R, prompts: &mut P) -> Result<bool, ProgError>
where
    R: BufRead,
    P: Write,
{
    match prompt::ask_yes_no(input, prompts, "\nWant a suggested strong password?") {
        Ok(answer) => Ok(answer),
        Err(ProgError::InputEnded(_)) => Ok(false),
        Err(err) => Err(err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc;
    use std::thread;
    use std::time::Duration;

    fn args() -> CheckArgs {
        CheckArgs {
            details: None,
            input: EntryMethod::Line,
            status_log: PathBuf::new(),
            no_status_log: true,
            json: false,
            suggest: false,
            fail_on_weak: false,
        }
    }

    fn run(args: &CheckArgs, answers: &str) -> (Result<Strength, ProgError>, String, String) {
        let mut prompts = Vec::new();
        let mut output = Vec::new();
        let result = check_with(
            args,
            Strategy::Line,
            &mut answers.as_bytes(),
            &mut prompts,
            &mut output,
        );
        (
            result,
            String::from_utf8(prompts).unwrap(),
            String::from_utf8(output).unwrap(),
        )
    }

    #[test]
    fn test_strong_password_needs_no_suggestion() {
        let (strength, prompts, output) = run(&args(), "John\n\n\nno\nPassw0rd!\n");
        assert_eq!(strength.unwrap(), Strength::Strong);
        assert!(prompts.contains("Enter your Password: "));
        assert!(!prompts.contains("suggested"));
        assert!(output.ends_with("Your password is STRONG.\n"));
    }

    #[test]
    fn test_personal_detail_in_password() {
        let answers = "John\njohn@example.com\n1990\nno\nMyNameJohn123!\nno\n";
        let (strength, prompts, output) = run(&args(), answers);
        assert_eq!(strength.unwrap(), Strength::Medium);
        assert!(output.contains("Password Strength: MEDIUM\n"));
        assert!(output.contains("- Password must NOT contain personal details (John)\n"));
        assert!(prompts.contains("Want a suggested strong password? (yes/no): "));
        assert!(!output.contains("Suggested Password"));
    }

    #[test]
    fn test_suggestion_on_request() {
        let (strength, _, output) = run(&args(), "\n\n\nn\npassword\nyes\n");
        assert_eq!(strength.unwrap(), Strength::Weak);
        let suggestion = output
            .lines()
            .find_map(|line| line.strip_prefix("Suggested Password: "))
            .expect("a suggestion");
        assert_eq!(suggestion.chars().count(), 12);
        assert!(passcheck::evaluate(suggestion, &[] as &[&str]).is_strong());
    }

    #[test]
    fn test_end_of_input_at_suggestion_question_is_no() {
        let (strength, _, output) = run(&args(), "\n\n\nn\npassword\n");
        assert_eq!(strength.unwrap(), Strength::Weak);
        assert!(!output.contains("Suggested Password"));
    }

    #[test]
    fn test_end_of_input_before_password_is_an_error() {
        let (result, _, _) = run(&args(), "John\n\n\nno\n");
        assert!(matches!(result, Err(ProgError::InputEnded(_))));
    }

    #[test]
    fn test_details_file_skips_questions() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "name: Alice\nspouse: Bob").unwrap();
        let args = CheckArgs {
            details: Some(file.path().to_owned()),
            suggest: true,
            ..args()
        };
        let (strength, prompts, output) = run(&args, "alice&bob99\n");
        assert_eq!(strength.unwrap(), Strength::Weak);
        assert!(!prompts.contains("Enter your Name"));
        assert!(output.contains("- Password must NOT contain personal details (Alice)\n"));
        assert!(output.contains("- Password must NOT contain personal details (Bob)\n"));
        assert!(output.contains("Suggested Password: "));
    }

    #[test]
    fn test_bad_details_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "name: {{first: Alice}}").unwrap();
        let args = CheckArgs {
            details: Some(file.path().to_owned()),
            ..args()
        };
        let (result, _, _) = run(&args, "Passw0rd!\n");
        assert!(matches!(result, Err(ProgError::BadDetailsFile { .. })));
    }

    #[test]
    fn test_json_output() {
        let args = CheckArgs {
            json: true,
            ..args()
        };
        let (strength, prompts, output) = run(&args, "\n\n\nno\npassword\n");
        assert_eq!(strength.unwrap(), Strength::Weak);
        assert!(!prompts.contains("suggested"));
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["strength"], "WEAK");
        assert_eq!(value["failures"].as_array().unwrap().len(), 3);
        assert!(value.get("suggestion").is_none());
    }

    #[test]
    fn test_json_output_with_suggestion() {
        let args = CheckArgs {
            json: true,
            suggest: true,
            ..args()
        };
        let (_, _, output) = run(&args, "\n\n\nno\nshort\n");
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["suggestion"].as_str().unwrap().chars().count(), 12);
    }

    #[test]
    fn test_status_line_is_recorded() {
        let dir = tempfile::tempdir().unwrap();
        let args = CheckArgs {
            status_log: dir.path().join("status.log"),
            no_status_log: false,
            ..args()
        };
        run(&args, "\n\n\nno\nPassw0rd!\n").0.unwrap();
        run(&args, "\n\n\nno\npassword\nno\n").0.unwrap();
        let log = std::fs::read_to_string(dir.path().join("status.log")).unwrap();
        assert_eq!(log, "Status=STRONG\nStatus=WEAK\n");
    }

    #[test]
    fn test_stdin_reader_leaves_stdin_unlocked() {
        let _answers = stdin_reader();
        let (tx, rx) = mpsc::channel();
        thread::spawn(move || {
            let lock = io::stdin().lock();
            drop(lock);
            let _ = tx.send(());
        });
        rx.recv_timeout(Duration::from_secs(5))
            .expect("stdin should be lockable while the answer reader is alive");
    }
}
