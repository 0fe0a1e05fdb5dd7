pub mod birth_year;
pub mod email;
pub mod password;

pub use birth_year::BirthYearError;
pub use email::EmailError;
pub use password::{ConfirmPasswordError, PasswordError};

use crate::SignupForm;

/// Validity of every signup field, recomputed as a whole on each input
/// event. Stateless: [`Self::check`] is a pure function of the current field
/// values, nothing tracks whether a field was touched or submitted.
#[derive(Default, Debug)]
pub struct SignupValidation {
    pub email: Option<EmailError>,
    pub password: Option<PasswordError>,
    pub confirm_password: Option<ConfirmPasswordError>,
    pub birth_year: Option<BirthYearError>,
}

impl SignupValidation {
    pub fn check(&mut self, form: &SignupForm, current_year: i32) {
        self.email = email::check(&form.email);
        self.password = password::check(&form.password);
        self.confirm_password = password::check_match(&form.password, &form.confirm_password);
        self.birth_year = birth_year::check(form.birth_year, current_year);
    }

    #[must_use]
    pub const fn has_any(&self) -> bool {
        self.email.is_some()
            || self.password.is_some()
            || self.confirm_password.is_some()
            || self.birth_year.is_some()
    }

    /// True iff all four field checks pass; gates the sign-up action.
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        !self.has_any()
    }

    #[must_use]
    pub const fn email_prompt(&self) -> &'static str {
        if self.email.is_some() {
            email::INVALID_PROMPT
        } else {
            ""
        }
    }

    #[must_use]
    pub const fn password_prompt(&self) -> &'static str {
        if self.password.is_some() {
            password::INVALID_PROMPT
        } else {
            ""
        }
    }

    #[must_use]
    pub const fn confirm_password_prompt(&self) -> &'static str {
        if self.confirm_password.is_some() {
            password::MISMATCH_PROMPT
        } else {
            ""
        }
    }

    /// Unlike the other prompts this doubles as the field label, so it is
    /// non-empty even when the age check passes.
    #[must_use]
    pub const fn birth_year_prompt(&self) -> &'static str {
        if self.birth_year.is_some() {
            birth_year::UNDERAGE_LABEL
        } else {
            birth_year::LABEL
        }
    }
}
