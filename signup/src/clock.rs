use chrono::{Datelike, Local};

/// Calendar year at the time of the call.
///
/// Only the entry points read the clock; the validation functions take the
/// year as an argument so tests can pin it.
#[must_use]
pub fn current_year() -> i32 {
    Local::now().year()
}
