use crate::domain::NormalizedPhone;
use crate::rules::OkvedMatch;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LookupDto {
    pub phone: String,
    pub code: String,
    pub name: String,
    pub match_len: usize,
}

impl LookupDto {
    pub fn new(phone: &NormalizedPhone, found: OkvedMatch) -> Self {
        Self {
            phone: phone.as_str().to_string(),
            code: found.code,
            name: found.name,
            match_len: found.match_len,
        }
    }
}
