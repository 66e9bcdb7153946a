use crate::source::TreeSource;
use crate::Result;
use okved_core::{find_best_match, flatten_tree, normalize_phone, LookupDto};
use tracing::debug;

/// Normalizes `raw_phone`, loads the tree from `source` and returns the
/// entry matching the longest phone suffix.
///
/// The phone is validated before the source is touched, so a bad number never
/// triggers a download.
pub fn run(raw_phone: &str, source: &dyn TreeSource) -> Result<LookupDto> {
    let phone = normalize_phone(raw_phone)
        .inspect_err(|_| debug!(raw = raw_phone, "phone rejected"))?;
    debug!(phone = %phone, "phone normalized");

    let tree = source.fetch_tree()?;
    debug!(source = source.source_name(), roots = tree.len(), "okved tree loaded");

    let index = flatten_tree(&tree);
    debug!(entries = index.len(), "okved index built");

    let found = find_best_match(&phone, &index)?;
    debug!(code = %found.code, match_len = found.match_len, "okved match found");

    Ok(LookupDto::new(&phone, found))
}
