//! Phone number utilities

use once_cell::sync::Lazy;
use regex::Regex;

/// Country calling code assumed for bare national numbers
pub const DEFAULT_COUNTRY_CODE: &str = "1";

/// Length of a national significant number in the default numbering plan
const NATIONAL_NUMBER_LENGTH: usize = 10;

// International phone number regex (E.164 format)
static E164_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\+[1-9]\d{1,14}$").expect("E.164 pattern is valid")
});

/// Strip everything except ASCII digits
pub fn digits_only(phone: &str) -> String {
    phone.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Normalize a phone number into the `+<digits>` form SMS providers expect
///
/// - Non-digit characters are removed.
/// - A bare 10-digit national number gets `+` and `country_code` prepended.
/// - A number that already starts with `country_code` followed by a national
///   number only gets the `+`.
/// - Anything else is passed through with a `+` in front of its digits.
///
/// ```
/// use xerxes_shared::phone::{format_phone_number, DEFAULT_COUNTRY_CODE};
///
/// assert_eq!(format_phone_number("555-123-4567", DEFAULT_COUNTRY_CODE), "+15551234567");
/// assert_eq!(format_phone_number("15551234567", DEFAULT_COUNTRY_CODE), "+15551234567");
/// assert_eq!(format_phone_number("+44 20 7946 0958", DEFAULT_COUNTRY_CODE), "+442079460958");
/// ```
pub fn format_phone_number(phone: &str, country_code: &str) -> String {
    let digits = digits_only(phone);

    if digits.len() == NATIONAL_NUMBER_LENGTH {
        return format!("+{}{}", country_code, digits);
    }

    if digits.len() == NATIONAL_NUMBER_LENGTH + country_code.len()
        && digits.starts_with(country_code)
    {
        return format!("+{}", digits);
    }

    // Assume it already carries its own country code
    format!("+{}", digits)
}

/// Check if a phone number is in E.164 format (`+` followed by up to 15 digits)
pub fn is_valid_e164(phone: &str) -> bool {
    E164_REGEX.is_match(phone)
}

/// Mask a phone number for logging (e.g., 555****4567)
pub fn mask_phone_number(phone: &str) -> String {
    let normalized: String = phone
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '+')
        .collect();
    if normalized.len() >= 7 {
        format!(
            "{}****{}",
            &normalized[0..3],
            &normalized[normalized.len() - 4..]
        )
    } else {
        "****".to_string()
    }
}
