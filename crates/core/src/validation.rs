//! Formatting rules for category names, question titles and answer options.
//!
//! The predicates are pure; the `validate_*` forms wrap them in the
//! matching [`CoreError`] so callers can propagate with `?`.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Maximum length of a category name or question title, in bytes.
pub const MAX_NAME_LENGTH: usize = 32;

/// Letters with interior spaces only; at least three characters.
pub const CATEGORY_NAME_PATTERN: &str = r"^[a-zA-Z]+[a-zA-Z ]+?[a-zA-Z]+$";

/// Same as [`CATEGORY_NAME_PATTERN`] with an optional trailing `?`.
pub const QUESTION_TITLE_PATTERN: &str = r"^[a-zA-Z]+[a-zA-Z ]+?[a-zA-Z]+\??$";

static CATEGORY_NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(CATEGORY_NAME_PATTERN).expect("valid regex"));

static QUESTION_TITLE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(QUESTION_TITLE_PATTERN).expect("valid regex"));

// ---------------------------------------------------------------------------
// Predicates
// ---------------------------------------------------------------------------

fn within_length(value: &str) -> bool {
    !value.is_empty() && value.len() <= MAX_NAME_LENGTH
}

/// True iff `name` is 1..=32 bytes of letters with interior spaces.
pub fn is_valid_category_name(name: &str) -> bool {
    within_length(name) && CATEGORY_NAME_RE.is_match(name)
}

/// Like [`is_valid_category_name`], but a single trailing `?` is allowed.
pub fn is_valid_question_title(title: &str) -> bool {
    within_length(title) && QUESTION_TITLE_RE.is_match(title)
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

pub fn validate_category_name(name: &str) -> Result<(), CoreError> {
    if is_valid_category_name(name) {
        Ok(())
    } else {
        Err(CoreError::InvalidCategoryName(name.to_string()))
    }
}

pub fn validate_question_title(title: &str) -> Result<(), CoreError> {
    if is_valid_question_title(title) {
        Ok(())
    } else {
        Err(CoreError::InvalidTitle(title.to_string()))
    }
}

/// Validate a list of answer options.
///
/// Every option must be non-empty, and no option may appear twice
/// (exact, case-sensitive match). Empty entries are reported before
/// duplicates.
pub fn validate_options(options: &[String]) -> Result<(), CoreError> {
    if options.iter().any(|o| o.is_empty()) {
        return Err(CoreError::OptionEmpty);
    }

    let mut seen = HashSet::with_capacity(options.len());
    for option in options {
        if !seen.insert(option.as_str()) {
            return Err(CoreError::DuplicateOption(option.clone()));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    // -- category names --

    #[test]
    fn plain_and_spaced_names_are_valid() {
        assert!(is_valid_category_name("accommodation"));
        assert!(is_valid_category_name("food and drink"));
        assert!(is_valid_category_name("Foo"));
    }

    #[test]
    fn empty_name_rejected() {
        assert!(!is_valid_category_name(""));
    }

    #[test]
    fn name_over_limit_rejected() {
        let long = "a".repeat(MAX_NAME_LENGTH + 1);
        assert!(!is_valid_category_name(&long));
        assert!(is_valid_category_name(&"a".repeat(MAX_NAME_LENGTH)));
    }

    #[test]
    fn leading_or_trailing_space_rejected() {
        assert!(!is_valid_category_name(" food"));
        assert!(!is_valid_category_name("food "));
    }

    #[test]
    fn digits_and_punctuation_rejected() {
        assert!(!is_valid_category_name("foo/*!bar"));
        assert!(!is_valid_category_name("food2"));
        assert!(!is_valid_category_name("food?"));
    }

    #[test]
    fn names_shorter_than_three_letters_rejected() {
        assert!(!is_valid_category_name("a"));
        assert!(!is_valid_category_name("ab"));
        assert!(is_valid_category_name("abc"));
    }

    #[test]
    fn validate_category_name_reports_kind() {
        let err = validate_category_name("bad!").unwrap_err();
        assert_eq!(err.kind(), "InvalidCategoryName");
    }

    // -- question titles --

    #[test]
    fn title_may_end_in_question_mark() {
        assert!(is_valid_question_title("how many nights?"));
        assert!(is_valid_question_title("how many nights"));
    }

    #[test]
    fn title_with_two_question_marks_rejected() {
        assert!(!is_valid_question_title("how many nights??"));
        assert!(!is_valid_question_title("how? many"));
    }

    #[test]
    fn title_length_counts_question_mark() {
        let title = format!("{}?", "a".repeat(MAX_NAME_LENGTH));
        assert!(!is_valid_question_title(&title));
    }

    // -- options --

    #[test]
    fn distinct_options_pass() {
        let options = vec!["brekkie".to_string(), "lunch".to_string()];
        assert!(validate_options(&options).is_ok());
        assert!(validate_options(&[]).is_ok());
    }

    #[test]
    fn duplicate_option_rejected() {
        let options = vec!["brekkie".to_string(), "brekkie".to_string()];
        assert_eq!(
            validate_options(&options),
            Err(CoreError::DuplicateOption("brekkie".into()))
        );
    }

    #[test]
    fn options_compare_case_sensitively() {
        let options = vec!["Brekkie".to_string(), "brekkie".to_string()];
        assert!(validate_options(&options).is_ok());
    }

    #[test]
    fn empty_option_reported_before_duplicates() {
        let options = vec!["a".to_string(), "a".to_string(), String::new()];
        assert_eq!(validate_options(&options), Err(CoreError::OptionEmpty));
    }
}
