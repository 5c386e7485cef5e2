use super::*;

// =============================================================
// Credential validation
// =============================================================

#[test]
fn validate_credentials_trims_username() {
    assert_eq!(
        validate_credentials("  nurse@example.com  ", "hunter2"),
        Ok(("nurse@example.com".to_owned(), "hunter2".to_owned()))
    );
}

#[test]
fn validate_credentials_requires_both_fields() {
    assert!(validate_credentials("", "hunter2").is_err());
    assert!(validate_credentials("nurse@example.com", "").is_err());
    assert!(validate_credentials("   ", "hunter2").is_err());
}

// =============================================================
// OTP validation
// =============================================================

#[test]
fn validate_otp_accepts_six_digits() {
    assert_eq!(validate_otp_input(" 123456 "), Ok("123456".to_owned()));
}

#[test]
fn validate_otp_rejects_wrong_length() {
    assert!(validate_otp_input("12345").is_err());
    assert!(validate_otp_input("1234567").is_err());
    assert!(validate_otp_input("").is_err());
}

#[test]
fn validate_otp_rejects_non_digits() {
    assert!(validate_otp_input("12a456").is_err());
    assert!(validate_otp_input("ABCDEF").is_err());
}

// =============================================================
// Step default
// =============================================================

#[test]
fn login_starts_at_credentials_step() {
    assert_eq!(LoginStep::default(), LoginStep::Credentials);
}
