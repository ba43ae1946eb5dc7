//! Field-level validity predicates.
//!
//! Pure, total functions: no side effects, always a boolean. Patterns are
//! deliberately shallow — the email check is one "@" plus a dot after it,
//! not RFC compliance, and the phone check accepts any arrangement of
//! separators as long as enough digits are present.

use regex::Regex;
use std::sync::OnceLock;

/// One non-whitespace, non-@ run, an "@", another run, a dot, another run.
const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

/// Digits, whitespace, hyphens and parentheses only.
const PHONE_CHARS_PATTERN: &str = r"^[0-9\s\-()]*$";

/// Minimum count of digit characters for a plausible phone number.
const PHONE_MIN_DIGITS: usize = 10;

fn email_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(EMAIL_PATTERN).expect("email pattern compiles"))
}

fn phone_chars_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(PHONE_CHARS_PATTERN).expect("phone pattern compiles"))
}

/// True iff the value has any non-whitespace content.
///
pub fn is_non_empty(value: &str) -> bool {
    !value.trim().is_empty()
}

/// True iff the value looks like an email address: exactly one "@", at
/// least one "." somewhere after it, no embedded whitespace.
///
pub fn is_valid_email(value: &str) -> bool {
    email_regex().is_match(value)
}

/// True iff the value contains only digits, whitespace, hyphens and
/// parentheses, and at least [`PHONE_MIN_DIGITS`] digit characters overall.
/// Separator placement is not checked.
///
pub fn is_valid_phone(value: &str) -> bool {
    if !phone_chars_regex().is_match(value) {
        return false;
    }
    value.chars().filter(|c| c.is_ascii_digit()).count() >= PHONE_MIN_DIGITS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_empty_rejects_whitespace_only() {
        assert!(!is_non_empty(""));
        assert!(!is_non_empty("   "));
        assert!(!is_non_empty("\t\n "));
    }

    #[test]
    fn test_non_empty_accepts_any_content() {
        assert!(is_non_empty("a"));
        assert!(is_non_empty("  a  "));
    }

    #[test]
    fn test_email_accepts_minimal_address() {
        assert!(is_valid_email("a@b.co"));
        assert!(is_valid_email("first.last@sub.domain.io"));
    }

    #[test]
    fn test_email_rejects_double_at() {
        assert!(!is_valid_email("a@@b.co"));
        assert!(!is_valid_email("a@b@c.co"));
    }

    #[test]
    fn test_email_rejects_missing_dot_after_at() {
        assert!(!is_valid_email("a@b"));
    }

    #[test]
    fn test_email_rejects_embedded_whitespace() {
        assert!(!is_valid_email("a b@c.co"));
        assert!(!is_valid_email("a@c. co"));
    }

    #[test]
    fn test_email_rejects_empty_segments() {
        assert!(!is_valid_email("@b.co"));
        assert!(!is_valid_email("a@.co"));
        assert!(!is_valid_email("a@b."));
    }

    #[test]
    fn test_phone_accepts_formatted_number() {
        // 11 digits with parentheses, space and hyphen
        assert!(is_valid_phone("(11) 98765-4321"));
        assert!(is_valid_phone("1234567890"));
    }

    #[test]
    fn test_phone_rejects_too_few_digits() {
        assert!(!is_valid_phone("123456789"));
        assert!(!is_valid_phone(""));
    }

    #[test]
    fn test_phone_rejects_letters() {
        assert!(!is_valid_phone("11-98765-432a"));
        assert!(!is_valid_phone("+5511987654321")); // "+" is not an allowed character
    }

    #[test]
    fn test_phone_separator_placement_is_not_checked() {
        // Lenient on purpose: any count of separators anywhere
        assert!(is_valid_phone(")))1234567890((("));
        assert!(is_valid_phone("1-2-3-4-5-6-7-8-9-0"));
    }
}
