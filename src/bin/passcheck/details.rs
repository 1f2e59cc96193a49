use std::io::{BufRead, Write};

use passcheck::PersonalDetails;

use crate::prompt::{ask_optional, ask_yes_no};
use crate::ProgError;

/// Ask the user for their personal details. Spouse and child are only asked for after a "yes" to
/// being married, and child only after a "yes" to having children.
pub(crate) fn collect_details<R, W>(
    input: &mut R,
    output: &mut W,
) -> Result<PersonalDetails, ProgError>
where
    R: BufRead,
    W: Write,
{
    let mut details = PersonalDetails {
        name: ask_optional(input, output, "Enter your Name")?,
        email: ask_optional(input, output, "Enter your Email")?,
        date_of_birth: ask_optional(input, output, "Enter your Date of Birth (DD/MM/YYYY)")?,
        ..PersonalDetails::default()
    };

    if ask_yes_no(input, output, "Are you married?")? {
        details.spouse = ask_optional(input, output, "Enter your Spouse's Name")?;
        if ask_yes_no(input, output, "Do you have children?")? {
            details.child = ask_optional(input, output, "Enter Child's Name")?;
        }
    }

    tracing::info!(fields = details.fragments().len(), "collected personal details");
    Ok(details)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(answers: &str) -> Result<PersonalDetails, ProgError> {
        collect_details(&mut answers.as_bytes(), &mut Vec::new())
    }

    #[test]
    fn test_unmarried_skips_family_questions() {
        let details = collect("John\njohn@example.com\n01/02/1990\nno\n").unwrap();
        assert_eq!(details.fragments(), ["John", "john@example.com", "01/02/1990"]);
    }

    #[test]
    fn test_married_with_children() {
        let details = collect(" John \n\n1990\nyes\nJane\ny\nTim\n").unwrap();
        assert_eq!(details.name.as_deref(), Some("John"));
        assert_eq!(details.email, None);
        assert_eq!(details.spouse.as_deref(), Some("Jane"));
        assert_eq!(details.child.as_deref(), Some("Tim"));
    }

    #[test]
    fn test_married_without_children() {
        let details = collect("John\nj@x.io\n1990\nYES\nJane\nno\n").unwrap();
        assert_eq!(details.spouse.as_deref(), Some("Jane"));
        assert_eq!(details.child, None);
    }

    #[test]
    fn test_prompts_in_order() {
        let mut output = Vec::new();
        collect_details(&mut "a\nb\nc\ny\nd\nn\n".as_bytes(), &mut output).unwrap();
        assert_eq!(
            String::from_utf8(output).unwrap(),
            "Enter your Name: Enter your Email: Enter your Date of Birth (DD/MM/YYYY): \
             Are you married? (yes/no): Enter your Spouse's Name: \
             Do you have children? (yes/no): "
        );
    }

    #[test]
    fn test_input_ending_early_is_an_error() {
        let err = collect("John\n").unwrap_err();
        assert!(matches!(err, ProgError::InputEnded(p) if p == "Enter your Email"));
    }
}
