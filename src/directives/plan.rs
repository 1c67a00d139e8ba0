//! Insertion planning
//!
//! Picks the byte offset where a new include should go. The choice depends
//! only on which of `#include`, `#ifdef` and `#ifndef` occur in the file:
//! prefer the includes inside the first conditional block, then the first
//! include, then the first conditional, then the start of the file.

use super::text::{SourceText, IFDEF, IFNDEF};

/// Which directive keywords a document contains, as a 3-bit mask
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeywordMask(u8);

impl KeywordMask {
    pub const NONE: u8 = 0;
    pub const INCLUDE: u8 = 1 << 0;
    pub const IFDEF: u8 = 1 << 1;
    pub const IFNDEF: u8 = 1 << 2;

    pub fn of(source: &SourceText) -> Self {
        let mut bits = Self::NONE;
        if source.has_include() {
            bits |= Self::INCLUDE;
        }
        if source.has_ifdef() {
            bits |= Self::IFDEF;
        }
        if source.has_ifndef() {
            bits |= Self::IFNDEF;
        }
        KeywordMask(bits)
    }

    pub fn bits(&self) -> u8 {
        self.0
    }
}

/// Position the new include is anchored to, before moving to the line end.
///
/// `None` means the document has none of the keywords.
pub fn anchor(source: &SourceText) -> Option<usize> {
    let pos = match (
        source.first_include(),
        source.first_ifdef(),
        source.first_ifndef(),
    ) {
        (None, None, None) => return None,
        (Some(include), None, None) => include,
        (None, Some(ifdef), None) => ifdef,
        (None, None, Some(ifndef)) => ifndef,
        (None, Some(ifdef), Some(ifndef)) => ifdef.min(ifndef),
        (Some(_), Some(_), None) => source.first_include_after(IFDEF),
        (Some(_), None, Some(_)) => source.first_include_after(IFNDEF),
        (Some(_), Some(_), Some(_)) => source
            .first_include_after(IFDEF)
            .min(source.first_include_after(IFNDEF)),
    };

    Some(pos)
}

/// Offset to insert a new include at
pub fn plan(source: &SourceText) -> usize {
    match anchor(source) {
        Some(pos) => source.end_of_line(pos),
        None => 0,
    }
}
