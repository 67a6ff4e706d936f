//! Verification code generation.
//!
//! Codes are transient values: they live only in the key-value store, keyed
//! by phone number, and are never modelled as a stored entity.

use rand::rngs::OsRng;
use rand::Rng;

/// Length of the verification code
pub const CODE_LENGTH: usize = 6;

/// Exclusive upper bound for a `CODE_LENGTH`-digit code
const CODE_SPACE: u32 = 1_000_000;

/// Generates a zero-padded numeric code from the OS random source
pub fn generate_code() -> String {
    let value = OsRng.gen_range(0..CODE_SPACE);
    format!("{:0width$}", value, width = CODE_LENGTH)
}

/// Checks that a code has the shape `generate_code` produces
pub fn is_well_formed(code: &str) -> bool {
    code.len() == CODE_LENGTH && code.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_generated_codes_are_six_digits() {
        for _ in 0..1000 {
            let code = generate_code();
            assert!(is_well_formed(&code), "bad code {}", code);
        }
    }

    #[test]
    fn test_generated_codes_vary() {
        let codes: HashSet<String> = (0..100).map(|_| generate_code()).collect();
        assert!(codes.len() > 90);
    }

    #[test]
    fn test_is_well_formed() {
        assert!(is_well_formed("000123"));
        assert!(!is_well_formed("12345"));
        assert!(!is_well_formed("1234567"));
        assert!(!is_well_formed("12a456"));
        assert!(!is_well_formed(""));
    }
}
