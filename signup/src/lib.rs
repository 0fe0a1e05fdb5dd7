mod clock;
pub mod validation;

use serde::{Deserialize, Serialize};

pub use clock::current_year;
pub use validation::{
    BirthYearError, ConfirmPasswordError, EmailError, PasswordError, SignupValidation,
};

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct SignupForm {
    pub email: String,
    pub password: String,
    #[serde(rename = "confirmPassword")]
    pub confirm_password: String,
    #[serde(rename = "birthYear")]
    pub birth_year: i32,
}

impl SignupForm {
    /// Fresh form: empty text fields, birth year preset to the current
    /// calendar year.
    #[must_use]
    pub const fn new(current_year: i32) -> Self {
        Self {
            email: String::new(),
            password: String::new(),
            confirm_password: String::new(),
            birth_year: current_year,
        }
    }

    pub fn reset(&mut self, current_year: i32) {
        *self = Self::new(current_year);
    }

    /// Submit-and-clear: no account is created anywhere, the fields just go
    /// back to their defaults. Callers keep the action disabled until
    /// [`SignupValidation::is_complete`] holds; there is no guard here.
    pub fn submit(&mut self, current_year: i32) {
        self.reset(current_year);
    }
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;

    use super::SignupForm;

    #[test]
    fn test_new_form_defaults() {
        let form = SignupForm::new(2024);

        assert_eq!(form.email, "");
        assert_eq!(form.password, "");
        assert_eq!(form.confirm_password, "");
        assert_eq!(form.birth_year, 2024);
    }

    #[test]
    fn test_submit_clears_fields() {
        let mut form = SignupForm::new(2024);
        form.email = String::from("jane@example.com");
        form.password = String::from("Abcdef12");
        form.confirm_password = String::from("Abcdef12");
        form.birth_year = 2000;

        form.submit(2024);

        assert_eq!(form, SignupForm::new(2024));
    }
}
