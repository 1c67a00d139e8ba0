//! Splicing a directive into source text

use super::text::SourceText;

/// Insert `directive` at `offset`, surrounded by the document's newline.
///
/// Offsets past the end of the text are clamped to the end.
pub fn splice(source: &SourceText, offset: usize, directive: &str) -> String {
    let text = source.as_str();
    let offset = offset.min(text.len());
    let newline = source.newline().as_str();

    let mut out = String::with_capacity(text.len() + directive.len() + 2 * newline.len());
    out.push_str(&text[..offset]);
    out.push_str(newline);
    out.push_str(directive);
    out.push_str(newline);
    out.push_str(&text[offset..]);
    out
}

/// 1-based line number the directive lands on after splicing at `offset`
pub fn inserted_line(source: &SourceText, offset: usize) -> usize {
    let offset = offset.min(source.len());
    source.as_str()[..offset].matches('\n').count() + 2
}
