///
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum BirthYearError {
    TooYoung(i32, i32),
}

pub const MIN_AGE: i32 = 21;
const PICKER_SPAN: i32 = 100;

pub const LABEL: &str = "Year of birth";
pub const UNDERAGE_LABEL: &str = "Year of birth (must be 21 years old)";

/// Whole calendar years only. A birthday on Dec 31 counts the same as one on
/// Jan 1 of the same year.
#[must_use]
pub const fn check(birth_year: i32, current_year: i32) -> Option<BirthYearError> {
    let age = current_year - birth_year;

    if age >= MIN_AGE {
        None
    } else {
        Some(BirthYearError::TooYoung(age, MIN_AGE))
    }
}

/// Candidate years for the picker, newest first.
#[must_use]
pub fn selectable_years(current_year: i32) -> impl Iterator<Item = i32> {
    (current_year - PICKER_SPAN..=current_year).rev()
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;

    use super::{check, selectable_years, BirthYearError};

    #[test]
    fn test_exactly_min_age_passes() {
        assert_eq!(check(2003, 2024), None);
    }

    #[test]
    fn test_one_year_short_fails() {
        assert_eq!(check(2004, 2024), Some(BirthYearError::TooYoung(20, 21)));
    }

    #[test]
    fn test_current_year_fails() {
        assert_eq!(check(2024, 2024), Some(BirthYearError::TooYoung(0, 21)));
    }

    #[test]
    fn test_selectable_years_span() {
        let years: Vec<i32> = selectable_years(2024).collect();

        assert_eq!(years.len(), 101);
        assert_eq!(years.first(), Some(&2024));
        assert_eq!(years.last(), Some(&1924));
    }
}
