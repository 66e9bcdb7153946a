use crate::{Result, SourceError};
use okved_core::OkvedNode;

/// Parses the published JSON layout: an array of root nodes, each with
/// optional `code`, `name` and nested `items`.
pub fn parse_tree(data: &str) -> Result<Vec<OkvedNode>> {
    serde_json::from_str(data).map_err(|err| SourceError::Parse(err.to_string()))
}
