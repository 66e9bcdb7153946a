use crate::Result;
use okved_core::OkvedNode;

/// Supplies the OKVED forest; how it is obtained is up to the implementor.
pub trait TreeSource {
    fn source_name(&self) -> &'static str;
    fn fetch_tree(&self) -> Result<Vec<OkvedNode>>;
}
