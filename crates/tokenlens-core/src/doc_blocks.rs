// ABOUTME: Tagged documentation blocks that can be replaced without duplication
// ABOUTME: Each block ends with an HTML comment marker naming the block

use once_cell::sync::Lazy;
use regex::Regex;

static ANY_MARKER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<!--\[tokenlens-[\w-]+\]-->\n").expect("valid marker regex"));

/// The kinds of block the hooks insert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockId {
    Shorthand,
    Token,
    Variants,
}

impl BlockId {
    pub fn as_str(self) -> &'static str {
        match self {
            BlockId::Shorthand => "shorthand",
            BlockId::Token => "token",
            BlockId::Variants => "variants",
        }
    }

    /// Marker line terminating a block with this id.
    pub fn marker(self) -> String {
        format!("<!--[tokenlens-{}]-->\n", self.as_str())
    }
}

/// Insert `value` as the first block of `doc`, replacing any earlier block with
/// the same id. `None` only removes.
pub fn insert_block(doc: &mut String, id: BlockId, value: Option<&str>) {
    remove_block(doc, id);
    if let Some(value) = value {
        doc.insert_str(0, &format!("{value}\n\n{}", id.marker()));
    }
}

/// Remove the block with `id`. Returns whether one was present.
///
/// Blocks are always prepended, so a block starts right after the previous
/// marker, or at the start of the document.
pub fn remove_block(doc: &mut String, id: BlockId) -> bool {
    let marker = id.marker();
    let Some(marker_start) = doc.find(&marker) else {
        return false;
    };
    let block_start = ANY_MARKER
        .find_iter(&doc[..marker_start])
        .last()
        .map(|found| found.end())
        .unwrap_or(0);
    doc.replace_range(block_start..marker_start + marker.len(), "");
    true
}

pub fn has_block(doc: &str, id: BlockId) -> bool {
    doc.contains(&id.marker())
}
