use once_cell::sync::Lazy;
use regex::Regex;

///
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum EmailError {
    Pattern,
}

pub const INVALID_PROMPT: &str = "Enter a valid email address";

// Anchored on the whole field: alphanumeric/`_-.` local part, dotted-label
// or bracketed-IPv4 domain, 2-4 letter or 1-3 digit TLD.
#[allow(clippy::expect_used)]
static PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^([a-zA-Z0-9_\-\.]+)@((\[[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\.)|(([a-zA-Z0-9\-]+\.)+))([a-zA-Z]{2,4}|[0-9]{1,3})(\]?)$",
    )
    .expect("email pattern compiles")
});

#[must_use]
pub fn check(v: &str) -> Option<EmailError> {
    if PATTERN.is_match(v) {
        None
    } else {
        Some(EmailError::Pattern)
    }
}
