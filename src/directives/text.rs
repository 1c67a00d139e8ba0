//! Source text scanning
//!
//! A read-only view over the contents of a C/C++ file. The presence of the
//! three directive keywords and the newline style are computed once when the
//! view is built and never change afterwards.

use serde::{Deserialize, Serialize};

/// `#include` keyword
pub const INCLUDE: &str = "#include";

/// `#ifdef` keyword
pub const IFDEF: &str = "#ifdef";

/// `#ifndef` keyword
pub const IFNDEF: &str = "#ifndef";

/// Line ending convention of a document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Newline {
    #[default]
    Lf,
    CrLf,
}

impl Newline {
    /// Detect the newline style of a whole document.
    ///
    /// A single `\r\n` anywhere is enough to treat the file as DOS/Windows.
    pub fn detect(text: &str) -> Self {
        if text.contains("\r\n") {
            Newline::CrLf
        } else {
            Newline::Lf
        }
    }

    /// The literal character sequence
    pub fn as_str(&self) -> &'static str {
        match self {
            Newline::Lf => "\n",
            Newline::CrLf => "\r\n",
        }
    }
}

/// Immutable view over the text of a source file
#[derive(Debug, Clone)]
pub struct SourceText {
    text: String,
    newline: Newline,
    has_include: bool,
    has_ifdef: bool,
    has_ifndef: bool,
}

impl SourceText {
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let newline = Newline::detect(&text);
        let has_include = text.contains(INCLUDE);
        let has_ifdef = text.contains(IFDEF);
        let has_ifndef = text.contains(IFNDEF);

        Self {
            text,
            newline,
            has_include,
            has_ifdef,
            has_ifndef,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn len(&self) -> usize {
        self.text.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn newline(&self) -> Newline {
        self.newline
    }

    #[allow(dead_code)]
    pub fn contains(&self, needle: &str) -> bool {
        self.text.contains(needle)
    }

    /// Byte index of the first occurrence of `needle`
    pub fn first_index_of(&self, needle: &str) -> Option<usize> {
        self.text.find(needle)
    }

    pub fn has_include(&self) -> bool {
        self.has_include
    }

    pub fn has_ifdef(&self) -> bool {
        self.has_ifdef
    }

    pub fn has_ifndef(&self) -> bool {
        self.has_ifndef
    }

    pub fn first_include(&self) -> Option<usize> {
        self.first_index_of(INCLUDE)
    }

    pub fn first_ifdef(&self) -> Option<usize> {
        self.first_index_of(IFDEF)
    }

    pub fn first_ifndef(&self) -> Option<usize> {
        self.first_index_of(IFNDEF)
    }

    /// A new view over the text starting at `pos`.
    ///
    /// Positions past the end (or inside a multi-byte character) yield an
    /// empty view rather than panicking.
    pub fn suffix_from(&self, pos: usize) -> SourceText {
        SourceText::new(self.text.get(pos..).unwrap_or_default())
    }

    /// Offset of the line break that ends the line containing `pos`.
    ///
    /// The search starts one byte after `pos` and looks for this document's
    /// newline sequence. When the line is the last one and has no trailing
    /// newline, 0 is returned.
    pub fn end_of_line(&self, pos: usize) -> usize {
        let start = pos + 1;
        match self.suffix_from(start).first_index_of(self.newline.as_str()) {
            Some(found) => start + found,
            None => 0,
        }
    }

    /// Position of the first `#include` at or after the first `keyword`.
    ///
    /// Falls back to the first `#include` when `keyword` is absent, to the
    /// keyword itself when no `#include` follows it, and to 0 when neither
    /// exists.
    pub fn first_include_after(&self, keyword: &str) -> usize {
        let Some(pos) = self.first_index_of(keyword) else {
            return self.first_include().unwrap_or(0);
        };

        match self.suffix_from(pos).first_include() {
            Some(found) => pos + found,
            None => pos,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_newline_detection() {
        let dos = SourceText::new("a\r\nb\r\nc");
        assert_eq!(dos.newline(), Newline::CrLf);

        let unix = SourceText::new("a\nb\nc");
        assert_eq!(unix.newline(), Newline::Lf);

        let mixed = SourceText::new("a\nb\r\nc\n");
        assert_eq!(mixed.newline(), Newline::CrLf);

        assert_eq!(SourceText::new("").newline(), Newline::Lf);
    }

    #[test]
    fn test_newline_as_str() {
        assert_eq!(Newline::Lf.as_str(), "\n");
        assert_eq!(Newline::CrLf.as_str(), "\r\n");
    }

    #[test]
    fn test_remembers_ifdef() {
        assert!(SourceText::new("blabla\n#ifdef ost").has_ifdef());
        assert!(!SourceText::new("blablabla").has_ifdef());
    }

    #[test]
    fn test_keyword_facts_match_contains() {
        for text in [
            "",
            "#include <a.h>",
            "#ifndef GUARD\n#define GUARD\n#endif",
            "#ifdef X\n#include <y.h>\n#endif",
            "int main() {}",
        ] {
            let source = SourceText::new(text);
            assert_eq!(source.has_include(), source.contains(INCLUDE));
            assert_eq!(source.has_ifdef(), source.contains(IFDEF));
            assert_eq!(source.has_ifndef(), source.contains(IFNDEF));
        }
    }

    #[test]
    fn test_ifndef_is_not_ifdef() {
        let source = SourceText::new("#ifndef GUARD\n");
        assert!(source.has_ifndef());
        assert!(!source.has_ifdef());
    }

    #[test]
    fn test_first_index_of() {
        let source = SourceText::new("abc abc");
        assert_eq!(source.first_index_of("abc"), Some(0));
        assert_eq!(source.first_index_of("c a"), Some(2));
        assert_eq!(source.first_index_of("xyz"), None);
    }

    #[test]
    fn test_suffix_from() {
        let source = SourceText::new("int x;\n#include <a.h>\n");
        let tail = source.suffix_from(7);
        assert_eq!(tail.as_str(), "#include <a.h>\n");
        assert!(tail.has_include());

        assert!(source.suffix_from(1000).is_empty());
    }

    #[test]
    fn test_suffix_from_keeps_own_newline_detection() {
        let source = SourceText::new("a\r\nb\nc");
        assert_eq!(source.suffix_from(3).newline(), Newline::Lf);
    }

    #[test]
    fn test_end_of_line() {
        let source = SourceText::new("#include \"paraply.h\"\n");
        assert_eq!(source.end_of_line(0), 20);
    }

    #[test]
    fn test_end_of_line_crlf() {
        let source = SourceText::new("#include <a.h>\r\nint x;\r\n");
        assert_eq!(source.end_of_line(0), 14);
    }

    #[test]
    fn test_end_of_line_without_trailing_newline() {
        let source = SourceText::new("int x;\n#include <a.h>");
        assert_eq!(source.end_of_line(7), 0);
    }

    #[test]
    fn test_first_include_after() {
        let source = SourceText::new("#include <a.h>\n#ifdef X\n#include <b.h>\n#endif\n");
        assert_eq!(source.first_include_after(IFDEF), 24);
    }

    #[test]
    fn test_first_include_after_falls_back() {
        let only_include = SourceText::new("x\n#include <a.h>\n");
        assert_eq!(only_include.first_include_after(IFDEF), 2);

        let only_keyword = SourceText::new("#include <a.h>\n#ifdef X\n#endif\n");
        assert_eq!(only_keyword.first_include_after(IFDEF), 15);

        let neither = SourceText::new("int main() {}\n");
        assert_eq!(neither.first_include_after(IFNDEF), 0);
    }
}
