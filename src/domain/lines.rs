//! The recognized transit line codes and input validation rules.
//!
//! Line codes form a fixed, closed set: a selection outside this set is rejected
//! at the line-pick step, and an append with an unrecognized code fails
//! validation. Car numbers are always exactly four ASCII digits, stored as text
//! so leading zeros survive (car "0042" is a different car than "42").

/// The full set of recognized line codes, in display order.
///
/// Numbered lines first, then lettered lines grouped by trunk, matching the
/// order riders expect to see them in.
pub const LINE_CODES: [&str; 23] = [
    "1", "2", "3", "4", "5", "6", "7", "A", "C", "E", "B", "D", "F", "M", "G",
    "J", "Z", "L", "N", "Q", "R", "W", "S",
];

/// Returns `true` if `code` is one of the recognized line codes.
#[must_use]
pub fn is_recognized_line(code: &str) -> bool {
    LINE_CODES.contains(&code)
}

/// Returns `true` if `car` is a valid car number: exactly 4 ASCII digits.
///
/// Leading zeros are allowed. Anything else, including non-ASCII digits and
/// strings of the wrong length, is rejected.
///
/// # Examples
///
/// ```
/// use carlog::domain::lines::is_valid_car_number;
///
/// assert!(is_valid_car_number("4523"));
/// assert!(is_valid_car_number("0001"));
/// assert!(!is_valid_car_number("452"));
/// assert!(!is_valid_car_number("45234"));
/// assert!(!is_valid_car_number("45a3"));
/// ```
#[must_use]
pub fn is_valid_car_number(car: &str) -> bool {
    car.len() == 4 && car.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_four_digit_car_numbers() {
        assert!(is_valid_car_number("0000"));
        assert!(is_valid_car_number("4523"));
        assert!(is_valid_car_number("9999"));
    }

    #[test]
    fn rejects_wrong_length_car_numbers() {
        assert!(!is_valid_car_number(""));
        assert!(!is_valid_car_number("1"));
        assert!(!is_valid_car_number("123"));
        assert!(!is_valid_car_number("12345"));
    }

    #[test]
    fn rejects_non_digit_car_numbers() {
        assert!(!is_valid_car_number("12a4"));
        assert!(!is_valid_car_number("12 4"));
        assert!(!is_valid_car_number("-123"));
        // Non-ASCII digits don't count
        assert!(!is_valid_car_number("１２３４"));
    }

    #[test]
    fn recognizes_all_line_codes() {
        for code in LINE_CODES {
            assert!(is_recognized_line(code), "line {code} should be recognized");
        }
    }

    #[test]
    fn rejects_unknown_line_codes() {
        assert!(!is_recognized_line("X"));
        assert!(!is_recognized_line("8"));
        assert!(!is_recognized_line("a"));
        assert!(!is_recognized_line(""));
        assert!(!is_recognized_line("AA"));
    }
}
