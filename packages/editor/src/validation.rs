//! Answer validation for question inputs
//!
//! Order of checks:
//! 1. required and blank → "This field is required"
//! 2. blank and optional → accepted
//! 3. custom pattern, when the question has one
//! 4. built-in rule for the question's validation kind

use formdeck_model::{CustomValidation, QuestionDesign, ValidationKind};
use regex::Regex;
use std::sync::OnceLock;
use thiserror::Error;
use tracing::warn;

pub const PASSWORD_SPECIALS: &str = "@$!%*?&";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("This field is required")]
    Required,

    /// Input does not match; carries the message shown under the field
    #[error("{0}")]
    Rejected(String),

    /// The question's custom pattern is not a valid regex
    #[error("Invalid validation pattern")]
    InvalidPattern(String),
}

struct Rule {
    kind: ValidationKind,
    pattern: &'static str,
    message: &'static str,
}

const RULES: &[Rule] = &[
    Rule {
        kind: ValidationKind::Email,
        pattern: r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$",
        message: "Please enter a valid email address",
    },
    Rule {
        kind: ValidationKind::Number,
        pattern: r"^\d+$",
        message: "Please enter only numbers",
    },
    Rule {
        kind: ValidationKind::Phone,
        pattern: r"^[\+]?[1-9][\d]{0,15}$",
        message: "Please enter a valid phone number",
    },
    Rule {
        kind: ValidationKind::Url,
        pattern: r"^https?://.+",
        message: "Please enter a valid URL starting with http:// or https://",
    },
    Rule {
        kind: ValidationKind::Date,
        pattern: r"^\d{4}-\d{2}-\d{2}$",
        message: "Please enter a valid date in YYYY-MM-DD format",
    },
    Rule {
        kind: ValidationKind::Time,
        pattern: r"^([01]?[0-9]|2[0-3]):[0-5][0-9]$",
        message: "Please enter a valid time in HH:MM format",
    },
    Rule {
        kind: ValidationKind::Zipcode,
        pattern: r"^\d{5}(-\d{4})?$",
        message: "Please enter a valid ZIP code",
    },
    Rule {
        kind: ValidationKind::Creditcard,
        pattern: r"^\d{4}[\s-]?\d{4}[\s-]?\d{4}[\s-]?\d{4}$",
        message: "Please enter a valid credit card number",
    },
];

const PASSWORD_MESSAGE: &str =
    "Password must be at least 8 characters with uppercase, lowercase, number and special character";

fn compiled_rules() -> &'static [(ValidationKind, Regex, &'static str)] {
    static COMPILED: OnceLock<Vec<(ValidationKind, Regex, &'static str)>> = OnceLock::new();
    COMPILED.get_or_init(|| {
        RULES
            .iter()
            .filter_map(|rule| {
                Regex::new(rule.pattern)
                    .ok()
                    .map(|regex| (rule.kind, regex, rule.message))
            })
            .collect()
    })
}

/// Check `input` against the question's required flag and validation rules
pub fn validate_answer(design: &QuestionDesign, input: &str) -> Result<(), ValidationError> {
    if input.trim().is_empty() {
        return if design.question_required.unwrap_or(false) {
            Err(ValidationError::Required)
        } else {
            Ok(())
        };
    }

    if let Some(custom) = &design.custom_validation {
        check_custom(custom, input)?;
    }

    match design.validation {
        Some(ValidationKind::Password) => check_password(input),
        Some(kind) => check_builtin(kind, input),
        None => Ok(()),
    }
}

/// Regex for a custom pattern: `/re/` is used as written, anything else must
/// match literally and completely
///
/// Only a trailing `/` is stripped, so an unterminated `/re` keeps its last
/// character.
pub fn custom_regex(pattern: &str) -> Result<Regex, regex::Error> {
    match pattern.strip_prefix('/') {
        Some(rest) => {
            let body = rest.strip_suffix('/').unwrap_or(rest);
            Regex::new(body)
        }
        None => Regex::new(&format!("^{}$", regex::escape(pattern))),
    }
}

fn check_custom(custom: &CustomValidation, input: &str) -> Result<(), ValidationError> {
    let regex = custom_regex(&custom.pattern).map_err(|e| {
        warn!(pattern = %custom.pattern, error = %e, "Invalid custom validation pattern");
        ValidationError::InvalidPattern(custom.pattern.clone())
    })?;

    if regex.is_match(input) {
        Ok(())
    } else {
        Err(ValidationError::Rejected(custom.message.clone()))
    }
}

fn check_builtin(kind: ValidationKind, input: &str) -> Result<(), ValidationError> {
    let Some((_, regex, message)) = compiled_rules().iter().find(|(k, _, _)| *k == kind) else {
        // custom has no built-in rule
        return Ok(());
    };

    if regex.is_match(input) {
        Ok(())
    } else {
        Err(ValidationError::Rejected(message.to_string()))
    }
}

/// At least 8 characters from letters, digits and `@$!%*?&`, with at least
/// one of each class
fn check_password(input: &str) -> Result<(), ValidationError> {
    let allowed = input
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || PASSWORD_SPECIALS.contains(c));
    let valid = allowed
        && input.chars().count() >= 8
        && input.chars().any(|c| c.is_ascii_lowercase())
        && input.chars().any(|c| c.is_ascii_uppercase())
        && input.chars().any(|c| c.is_ascii_digit())
        && input.chars().any(|c| PASSWORD_SPECIALS.contains(c));

    if valid {
        Ok(())
    } else {
        Err(ValidationError::Rejected(PASSWORD_MESSAGE.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with(validation: ValidationKind) -> QuestionDesign {
        QuestionDesign {
            validation: Some(validation),
            ..Default::default()
        }
    }

    #[test]
    fn test_every_rule_compiles() {
        assert_eq!(compiled_rules().len(), RULES.len());
    }

    #[test]
    fn test_required() {
        let mut design = with(ValidationKind::Email);
        assert_eq!(validate_answer(&design, "   "), Ok(()));

        design.question_required = Some(true);
        let err = validate_answer(&design, "").unwrap_err();
        assert_eq!(err.to_string(), "This field is required");
    }

    #[test]
    fn test_builtin_rules() {
        let email = with(ValidationKind::Email);
        assert!(validate_answer(&email, "ada@example.com").is_ok());
        assert_eq!(
            validate_answer(&email, "ada@").unwrap_err().to_string(),
            "Please enter a valid email address"
        );

        let phone = with(ValidationKind::Phone);
        assert!(validate_answer(&phone, "+14155550100").is_ok());
        assert!(validate_answer(&phone, "0123").is_err());

        let time = with(ValidationKind::Time);
        assert!(validate_answer(&time, "23:59").is_ok());
        assert!(validate_answer(&time, "24:00").is_err());

        let zip = with(ValidationKind::Zipcode);
        assert!(validate_answer(&zip, "12345-6789").is_ok());
        assert!(validate_answer(&zip, "1234").is_err());

        let card = with(ValidationKind::Creditcard);
        assert!(validate_answer(&card, "4111 1111-1111 1111").is_ok());

        let url = with(ValidationKind::Url);
        assert_eq!(
            validate_answer(&url, "ftp://x").unwrap_err().to_string(),
            "Please enter a valid URL starting with http:// or https://"
        );
    }

    #[test]
    fn test_password() {
        let design = with(ValidationKind::Password);
        assert!(validate_answer(&design, "Secr3t!pw").is_ok());
        assert!(validate_answer(&design, "Sh0rt!").is_err());
        assert!(validate_answer(&design, "nouppercase1!").is_err());
        assert!(validate_answer(&design, "NoSpecial123").is_err());
        assert!(validate_answer(&design, "Bad#Char123!").is_err());
    }

    #[test]
    fn test_custom_patterns() {
        let mut design = QuestionDesign {
            custom_validation: Some(CustomValidation {
                pattern: "/^[A-Z]{3}$/".to_string(),
                message: "Three capitals".to_string(),
                expected_value: None,
            }),
            ..Default::default()
        };
        assert!(validate_answer(&design, "ABC").is_ok());
        assert_eq!(
            validate_answer(&design, "abc"),
            Err(ValidationError::Rejected("Three capitals".to_string()))
        );

        // literal patterns are escaped and anchored
        design.custom_validation = Some(CustomValidation {
            pattern: "1+1".to_string(),
            message: "Type 1+1".to_string(),
            expected_value: None,
        });
        assert!(validate_answer(&design, "1+1").is_ok());
        assert!(validate_answer(&design, "11").is_err());
        assert!(validate_answer(&design, "1+1=2").is_err());

        design.custom_validation = Some(CustomValidation {
            pattern: "/([a-z/".to_string(),
            message: "unused".to_string(),
            expected_value: None,
        });
        assert_eq!(
            validate_answer(&design, "abc").unwrap_err().to_string(),
            "Invalid validation pattern"
        );
    }

    #[test]
    fn test_unterminated_slash_pattern_keeps_last_char() {
        let regex = custom_regex("/^ab$").unwrap();
        assert!(regex.is_match("ab"));
        assert!(!regex.is_match("a"));

        assert_eq!(custom_regex("/^ab$/").unwrap().as_str(), "^ab$");
        assert_eq!(custom_regex("/").unwrap().as_str(), "");
    }
}
