//! Password strength scoring and change validation.
//!
//! Scores a candidate password by counting satisfied character classes,
//! then gates submission on length, confirmation match and a minimum
//! score. Used by both the account reset flow and the admin's
//! change-password modal.

use crate::error::{Error, Result};

/// Minimum password length accepted anywhere.
pub const MIN_LENGTH: usize = 8;

/// Minimum strength score a new password must reach.
pub const REQUIRED_STRENGTH: u8 = 3;

/// Strength bucket shown next to the meter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrengthLabel {
    Weak,
    Medium,
    Strong,
}

impl StrengthLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            StrengthLabel::Weak => "Weak",
            StrengthLabel::Medium => "Medium",
            StrengthLabel::Strong => "Strong",
        }
    }
}

/// Score a password from 0 to 5, one point per satisfied criterion:
/// length of at least [`MIN_LENGTH`], an uppercase letter, a lowercase
/// letter, a digit, and a character outside ASCII alphanumerics.
pub fn strength(password: &str) -> u8 {
    let mut score = 0;
    if password.chars().count() >= MIN_LENGTH {
        score += 1;
    }
    if password.chars().any(|c| c.is_ascii_uppercase()) {
        score += 1;
    }
    if password.chars().any(|c| c.is_ascii_lowercase()) {
        score += 1;
    }
    if password.chars().any(|c| c.is_ascii_digit()) {
        score += 1;
    }
    if password.chars().any(|c| !c.is_ascii_alphanumeric()) {
        score += 1;
    }
    score
}

/// Bucket a score for display.
pub fn label(score: u8) -> StrengthLabel {
    match score {
        0..=2 => StrengthLabel::Weak,
        3 => StrengthLabel::Medium,
        _ => StrengthLabel::Strong,
    }
}

/// Draft of a password change, as typed into the two fields.
#[derive(Debug, Clone, Default)]
pub struct PasswordForm {
    pub new_password: String,
    pub confirm_password: String,
}

impl PasswordForm {
    /// Whether the submit button is enabled for this draft.
    pub fn can_submit(&self) -> bool {
        validate_change(&self.new_password, &self.confirm_password).is_ok()
    }
}

/// Check a password change against all gates, first failure wins:
/// minimum length, confirmation match, minimum strength.
pub fn validate_change(new_password: &str, confirm_password: &str) -> Result<()> {
    if new_password.chars().count() < MIN_LENGTH {
        return Err(Error::Validation(format!(
            "password must be at least {} characters",
            MIN_LENGTH
        )));
    }
    if new_password != confirm_password {
        return Err(Error::Validation("passwords do not match".to_string()));
    }
    if strength(new_password) < REQUIRED_STRENGTH {
        return Err(Error::Validation("password is too weak".to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("", 0)]
    #[case("abc", 1)] // lowercase only
    #[case("abcdefgh", 2)] // length + lowercase
    #[case("abc12345", 3)] // length + lowercase + digit
    #[case("Abc12345", 4)]
    #[case("Abc123!9", 5)]
    #[case("ABCDEFGH", 2)] // length + uppercase
    #[case("!!!!!!!!", 2)] // length + symbol
    #[case("aA1!", 4)] // every class but too short
    fn test_strength_scoring(#[case] password: &str, #[case] expected: u8) {
        assert_eq!(strength(password), expected);
    }

    #[rstest]
    #[case(0, StrengthLabel::Weak)]
    #[case(2, StrengthLabel::Weak)]
    #[case(3, StrengthLabel::Medium)]
    #[case(4, StrengthLabel::Strong)]
    #[case(5, StrengthLabel::Strong)]
    fn test_label_buckets(#[case] score: u8, #[case] expected: StrengthLabel) {
        assert_eq!(label(score), expected);
    }

    #[test]
    fn test_validate_rejects_short_passwords_first() {
        let err = validate_change("aA1!", "aA1!").unwrap_err();
        assert!(err.to_string().contains("at least 8"));
    }

    #[test]
    fn test_validate_rejects_mismatch() {
        let err = validate_change("abc12345", "abc12346").unwrap_err();
        assert!(err.to_string().contains("do not match"));
    }

    #[test]
    fn test_validate_rejects_weak_passwords() {
        // long and matching, but only two criteria met
        let err = validate_change("abcdefgh", "abcdefgh").unwrap_err();
        assert!(err.to_string().contains("too weak"));
    }

    #[test]
    fn test_validate_accepts_medium_and_up() {
        assert!(validate_change("abc12345", "abc12345").is_ok());
        assert!(validate_change("Abc123!9", "Abc123!9").is_ok());
    }

    #[test]
    fn test_form_can_submit_tracks_validation() {
        let mut form = PasswordForm::default();
        assert!(!form.can_submit());

        form.new_password = "abc12345".to_string();
        form.confirm_password = "abc12345".to_string();
        assert!(form.can_submit());

        form.confirm_password = "different".to_string();
        assert!(!form.can_submit());
    }
}
