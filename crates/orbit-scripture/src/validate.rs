use thiserror::Error;

use crate::reference::ScriptureRef;

/// Why a reference input was rejected.
///
/// The two messages are a deliberate, stable taxonomy for form feedback:
/// empty input gets its own prompt, and every other failure (bad grammar,
/// unknown book, missing chapter) collapses into one generic format hint.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ReferenceError {
    #[error("Please enter a scripture reference")]
    Empty,
    #[error("Invalid format. Use format like 'Matthew 2' or 'John 3:16' or 'Romans 12:1-2'")]
    InvalidFormat,
}

/// Validate a free-text scripture reference for form input.
///
/// Cheap and pure; safe to re-run on every keystroke.
pub fn validate(input: &str) -> Result<ScriptureRef, ReferenceError> {
    if input.trim().is_empty() {
        return Err(ReferenceError::Empty);
    }
    ScriptureRef::parse(input).ok_or(ReferenceError::InvalidFormat)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_gets_its_own_message() {
        assert_eq!(validate(""), Err(ReferenceError::Empty));
        assert_eq!(validate("   "), Err(ReferenceError::Empty));
        assert_eq!(
            ReferenceError::Empty.to_string(),
            "Please enter a scripture reference"
        );
    }

    #[test]
    fn parse_failures_share_one_generic_message() {
        assert_eq!(validate("Foobar 3"), Err(ReferenceError::InvalidFormat));
        assert_eq!(validate("Matthew"), Err(ReferenceError::InvalidFormat));
        assert_eq!(validate("Matthew two"), Err(ReferenceError::InvalidFormat));
        assert_eq!(
            ReferenceError::InvalidFormat.to_string(),
            "Invalid format. Use format like 'Matthew 2' or 'John 3:16' or 'Romans 12:1-2'"
        );
    }

    #[test]
    fn valid_input_returns_the_parsed_reference() {
        let parsed = validate("John 3:16").unwrap();
        assert_eq!(parsed.formatted(), "JHN.3.16");
    }
}
