///
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum PasswordError {
    MinLength(usize, usize),
    MaxLength(usize, usize),
    MissingDigit,
    MissingLowercase,
    MissingUppercase,
}

///
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum ConfirmPasswordError {
    Mismatch,
}

const MIN_LEN: usize = 8;
const MAX_LEN: usize = 15;

pub const INVALID_PROMPT: &str =
    "Must be between 8 and 15 characters containing at least one number and one capital letter";
pub const MISMATCH_PROMPT: &str = "Password fields do not match";

#[must_use]
pub fn check(v: &str) -> Option<PasswordError> {
    let len = v.chars().count();

    if len < MIN_LEN {
        Some(PasswordError::MinLength(len, MIN_LEN))
    } else if len > MAX_LEN {
        Some(PasswordError::MaxLength(len, MAX_LEN))
    } else if !v.chars().any(|c| c.is_ascii_digit()) {
        Some(PasswordError::MissingDigit)
    } else if !v.chars().any(|c| c.is_ascii_lowercase()) {
        Some(PasswordError::MissingLowercase)
    } else if !v.chars().any(|c| c.is_ascii_uppercase()) {
        Some(PasswordError::MissingUppercase)
    } else {
        None
    }
}

#[must_use]
pub fn check_match(password: &str, confirm: &str) -> Option<ConfirmPasswordError> {
    if password == confirm {
        None
    } else {
        Some(ConfirmPasswordError::Mismatch)
    }
}
