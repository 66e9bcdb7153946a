const GROUP_LEN: usize = 2;

/// Restores the dotted OKVED layout of a digit code, e.g. `01111` -> `01.11.1`.
pub fn format_code(digits: &str) -> String {
    let len = digits.chars().count();
    if len <= GROUP_LEN {
        return digits.to_string();
    }

    let mut out = String::with_capacity(digits.len() + len / GROUP_LEN);
    for (pos, ch) in digits.chars().enumerate() {
        if pos > 0 && pos % GROUP_LEN == 0 {
            out.push('.');
        }
        out.push(ch);
    }
    out
}
