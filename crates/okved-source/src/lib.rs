pub mod error;
pub mod file;
pub mod http;
pub mod pipeline;
pub mod source;
pub mod tree;

pub use error::{Result, SourceError};
pub use file::FileSource;
pub use http::{fetch_tree, HttpSource};
pub use pipeline::run;
pub use source::TreeSource;
pub use tree::parse_tree;
