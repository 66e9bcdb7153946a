pub mod flatten;
pub mod format;
pub mod matching;

pub use flatten::flatten_tree;
pub use format::format_code;
pub use matching::{find_best_match, match_digits, OkvedMatch, MAX_CODE_LEN};
