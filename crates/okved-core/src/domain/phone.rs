use crate::domain::digits::digits_only;
use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

const COUNTRY_DIGIT: char = '7';
const TRUNK_DIGIT: char = '8';
const MOBILE_DIGIT: char = '9';
const FULL_LEN: usize = 11;
const LOCAL_LEN: usize = 10;

/// A Russian mobile number in `+7XXXXXXXXXX` form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NormalizedPhone(String);

impl NormalizedPhone {
    pub fn new(raw: &str) -> Result<Self, CoreError> {
        normalize_phone(raw)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The eleven digits without the leading `+`.
    pub fn digits(&self) -> &str {
        &self.0[1..]
    }
}

impl fmt::Display for NormalizedPhone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for NormalizedPhone {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        normalize_phone(s)
    }
}

pub fn normalize_phone(raw: &str) -> Result<NormalizedPhone, CoreError> {
    let digits = digits_only(raw);

    let canonical = match (digits.len(), digits.chars().next()) {
        (FULL_LEN, Some(COUNTRY_DIGIT | TRUNK_DIGIT)) => {
            let mut out = String::with_capacity(FULL_LEN + 1);
            out.push('+');
            out.push(COUNTRY_DIGIT);
            out.push_str(&digits[1..]);
            out
        }
        (LOCAL_LEN, Some(MOBILE_DIGIT)) => format!("+{COUNTRY_DIGIT}{digits}"),
        _ => {
            return Err(CoreError::InvalidPhone {
                raw: raw.to_string(),
            })
        }
    };

    Ok(NormalizedPhone(canonical))
}

#[cfg(test)]
mod tests {
    use super::{normalize_phone, NormalizedPhone};
    use crate::error::CoreError;

    #[test]
    fn normalize_phone_keeps_canonical_input() {
        let phone = normalize_phone("+79161234567").unwrap();
        assert_eq!(phone.as_str(), "+79161234567");
        assert_eq!(phone.digits(), "79161234567");
    }

    #[test]
    fn normalize_phone_rewrites_trunk_prefix() {
        let phone = normalize_phone("8(916)123-45-67").unwrap();
        assert_eq!(phone.as_str(), "+79161234567");
    }

    #[test]
    fn normalize_phone_prepends_country_code_to_local_number() {
        let phone = normalize_phone("916 123 45 67").unwrap();
        assert_eq!(phone.as_str(), "+79161234567");
    }

    #[test]
    fn normalize_phone_accepts_any_eleven_digits_after_country_code() {
        let phone = normalize_phone("7 495 123 45 67").unwrap();
        assert_eq!(phone.as_str(), "+74951234567");
    }

    #[test]
    fn normalize_phone_rejects_local_number_outside_mobile_range() {
        let err = normalize_phone("4951234567").unwrap_err();
        assert_eq!(
            err,
            CoreError::InvalidPhone {
                raw: "4951234567".to_string()
            }
        );
    }

    #[test]
    fn normalize_phone_rejects_foreign_eleven_digit_numbers() {
        assert!(normalize_phone("19161234567").is_err());
    }

    #[test]
    fn normalize_phone_rejects_wrong_lengths() {
        for raw in ["", "abc", "916123456", "891612345678", "+7 916 123 45 678"] {
            assert!(normalize_phone(raw).is_err(), "accepted {raw:?}");
        }
    }

    #[test]
    fn normalize_phone_error_carries_raw_input() {
        let err = normalize_phone("call me maybe").unwrap_err();
        assert_eq!(err.to_string(), "invalid phone number");
        match err {
            CoreError::InvalidPhone { raw } => assert_eq!(raw, "call me maybe"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn normalized_phone_parses_from_str() {
        let phone: NormalizedPhone = "8 916 123-45-67".parse().unwrap();
        assert_eq!(phone.to_string(), "+79161234567");
    }
}
