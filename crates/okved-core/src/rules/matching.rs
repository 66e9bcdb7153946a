use crate::domain::{digits_only, NormalizedPhone, OkvedIndex};
use crate::error::CoreError;
use crate::rules::format::format_code;
use serde::{Deserialize, Serialize};

/// Longest OKVED code considered when matching phone suffixes.
pub const MAX_CODE_LEN: usize = 6;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OkvedMatch {
    pub code: String,
    pub name: String,
    pub match_len: usize,
}

pub fn find_best_match(
    phone: &NormalizedPhone,
    index: &OkvedIndex,
) -> Result<OkvedMatch, CoreError> {
    match_digits(phone.digits(), index)
}

/// Picks the index entry equal to the longest trailing run of `value`'s
/// digits, trying at most [`MAX_CODE_LEN`] digits.
pub fn match_digits(value: &str, index: &OkvedIndex) -> Result<OkvedMatch, CoreError> {
    let digits = digits_only(value);
    let max_len = digits.len().min(MAX_CODE_LEN);

    for len in (1..=max_len).rev() {
        let suffix = &digits[digits.len() - len..];
        if let Some(name) = index.get(suffix) {
            return Ok(OkvedMatch {
                code: format_code(suffix),
                name: name.to_string(),
                match_len: len,
            });
        }
    }

    Err(CoreError::NoMatch)
}

#[cfg(test)]
mod tests {
    use super::{find_best_match, match_digits, OkvedMatch};
    use crate::domain::{normalize_phone, NormalizedPhone, OkvedIndex};
    use crate::error::CoreError;

    fn phone() -> NormalizedPhone {
        normalize_phone("+7 916 123-45-67").unwrap()
    }

    #[test]
    fn longest_suffix_wins() {
        let index: OkvedIndex = [("234567", "Six"), ("4567", "Four")].into_iter().collect();
        let found = find_best_match(&phone(), &index).unwrap();
        assert_eq!(
            found,
            OkvedMatch {
                code: "23.45.67".to_string(),
                name: "Six".to_string(),
                match_len: 6,
            }
        );
    }

    #[test]
    fn falls_back_to_shorter_suffix() {
        let index: OkvedIndex = [("567", "Three"), ("7", "One")].into_iter().collect();
        let found = find_best_match(&phone(), &index).unwrap();
        assert_eq!(found.code, "56.7");
        assert_eq!(found.name, "Three");
        assert_eq!(found.match_len, 3);
    }

    #[test]
    fn codes_longer_than_six_digits_never_match() {
        let index: OkvedIndex = [("1234567", "Seven")].into_iter().collect();
        assert_eq!(find_best_match(&phone(), &index), Err(CoreError::NoMatch));
    }

    #[test]
    fn no_match_is_an_error() {
        let index: OkvedIndex = [("01", "Crops"), ("02", "Forestry")].into_iter().collect();
        let err = find_best_match(&phone(), &index).unwrap_err();
        assert_eq!(err, CoreError::NoMatch);
        assert_eq!(err.to_string(), "phone number doesn't have matches");
    }

    #[test]
    fn match_digits_handles_short_input() {
        let index: OkvedIndex = [("45", "Two")].into_iter().collect();
        let found = match_digits("4-5", &index).unwrap();
        assert_eq!(found.code, "45");
        assert_eq!(found.match_len, 2);
        assert_eq!(match_digits("", &index), Err(CoreError::NoMatch));
    }
}
