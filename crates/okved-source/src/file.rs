use crate::source::TreeSource;
use crate::tree::parse_tree;
use crate::Result;
use okved_core::OkvedNode;
use std::fs;
use std::path::PathBuf;
use tracing::debug;

/// Reads the forest from a JSON file on disk.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl TreeSource for FileSource {
    fn source_name(&self) -> &'static str {
        "file"
    }

    fn fetch_tree(&self) -> Result<Vec<OkvedNode>> {
        debug!(path = %self.path.display(), "reading okved tree");
        let data = fs::read_to_string(&self.path)?;
        parse_tree(&data)
    }
}
