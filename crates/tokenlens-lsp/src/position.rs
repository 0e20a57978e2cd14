// ABOUTME: Conversions between byte offsets and LSP line/character positions
// ABOUTME: LSP characters count UTF-16 code units

use lsp_types::{Position, Range};
use tokenlens_types::TextSpan;

/// LSP position of byte `offset`. Offsets past the end clamp to the end, and
/// offsets inside a character snap back to its start.
pub fn offset_to_position(source: &str, offset: usize) -> Position {
    let mut offset = offset.min(source.len());
    while !source.is_char_boundary(offset) {
        offset -= 1;
    }
    let before = &source[..offset];
    let line_start = before.rfind('\n').map(|index| index + 1).unwrap_or(0);
    let line = before.matches('\n').count();
    let character: usize = before[line_start..].chars().map(char::len_utf16).sum();
    Position::new(line as u32, character as u32)
}

/// Byte offset of an LSP position, or `None` if it lies outside `source`.
pub fn position_to_offset(source: &str, position: Position) -> Option<usize> {
    let mut line_start = 0;
    for _ in 0..position.line {
        line_start += source[line_start..].find('\n')? + 1;
    }
    let line_end = source[line_start..]
        .find('\n')
        .map(|index| line_start + index)
        .unwrap_or(source.len());

    let mut units = 0usize;
    for (index, ch) in source[line_start..line_end].char_indices() {
        if units >= position.character as usize {
            return Some(line_start + index);
        }
        units += ch.len_utf16();
    }
    (units >= position.character as usize).then_some(line_end)
}

pub fn span_to_range(source: &str, span: TextSpan) -> Range {
    Range::new(
        offset_to_position(source, span.start),
        offset_to_position(source, span.end),
    )
}
