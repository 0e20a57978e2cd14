// ABOUTME: Capability trait through which the hooks reach the host's open documents
// ABOUTME: A document is its text, its syntax tree and optionally a type oracle

use tokenlens_syntax::{SyntaxTree, TypeOracle};

/// Everything the hooks need to know about one file.
#[derive(Clone, Copy)]
pub struct HostDocument<'a> {
    pub source: &'a str,
    pub tree: &'a SyntaxTree,
    pub oracle: Option<&'a dyn TypeOracle>,
}

/// Document access provided by the editor integration
pub trait DocumentHost {
    /// Look up an open document by file name
    fn document(&self, file: &str) -> Option<HostDocument<'_>>;
}
