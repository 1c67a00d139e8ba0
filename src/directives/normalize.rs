//! Include normalization
//!
//! Expands a loosely written include into a full directive:
//! - `stdlib` -> `#include <stdlib.h>`
//! - `"util"` -> `#include "util.h"`
//! - `memory` (C++ style) -> `#include <memory>`
//! - `#include <stdio.h>` -> unchanged

use crate::core::error::IncludeError;

use super::text::INCLUDE;

/// Normalize a raw include token into a canonical `#include` directive.
///
/// With `cpp_style` set, `.h` is never appended. Tokens with two words keep
/// only the second word; tokens with more than two words are rejected.
pub fn normalize(token: &str, cpp_style: bool) -> Result<String, IncludeError> {
    match token.matches(' ').count() {
        0 => Ok(expand_word(token, cpp_style)),
        1 => {
            // The first word is usually `#include`, but any word is dropped.
            let (_, tail) = token.split_once(' ').unwrap_or(("", token));
            normalize(tail, cpp_style)
        }
        _ => Err(IncludeError::InvalidIncludeToken(token.to_string())),
    }
}

fn expand_word(word: &str, cpp_style: bool) -> String {
    let needs_suffix = !cpp_style && !word.contains('.');

    if !word.contains('<') && !word.contains('"') {
        let suffix = if needs_suffix { ".h" } else { "" };
        return format!("{INCLUDE} <{word}{suffix}>");
    }

    if needs_suffix {
        // Put `.h` inside the closing delimiter
        if let Some((idx, delimiter)) = word.char_indices().last() {
            return format!("{INCLUDE} {}.h{delimiter}", &word[..idx]);
        }
    }

    format!("{INCLUDE} {word}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn norm(token: &str) -> String {
        normalize(token, false).unwrap()
    }

    #[test]
    fn test_bare_name() {
        assert_eq!(norm("stdlib"), "#include <stdlib.h>");
    }

    #[test]
    fn test_bare_name_with_extension() {
        assert_eq!(norm("config.hpp"), "#include <config.hpp>");
    }

    #[test]
    fn test_quoted_name() {
        assert_eq!(norm("\"stdlib\""), "#include \"stdlib.h\"");
        assert_eq!(norm("\"my.h\""), "#include \"my.h\"");
    }

    #[test]
    fn test_bracketed_name() {
        assert_eq!(norm("<stdlib>"), "#include <stdlib.h>");
        assert_eq!(norm("<vector>"), "#include <vector.h>");
    }

    #[test]
    fn test_cpp_style() {
        assert_eq!(normalize("memory", true).unwrap(), "#include <memory>");
        assert_eq!(normalize("<vector>", true).unwrap(), "#include <vector>");
        assert_eq!(normalize("\"local\"", true).unwrap(), "#include \"local\"");
    }

    #[test]
    fn test_canonical_directive_is_unchanged() {
        assert_eq!(norm("#include <stdlib.h>"), "#include <stdlib.h>");
        assert_eq!(norm("#include \"stdlib.h\""), "#include \"stdlib.h\"");
    }

    #[test]
    fn test_first_word_is_discarded() {
        assert_eq!(norm("bolle stdlib"), "#include <stdlib.h>");
        assert_eq!(norm("include <stdlib.h>"), "#include <stdlib.h>");
        assert_eq!(norm("banana stdlib"), norm("#include stdlib"));
    }

    #[test]
    fn test_too_many_words() {
        let err = normalize("#include <stdlib.h> extra", false).unwrap_err();
        assert!(matches!(err, IncludeError::InvalidIncludeToken(ref t) if t == "#include <stdlib.h> extra"));
        assert_eq!(err.exit_code(), 3);
    }

    #[test]
    fn test_stray_spaces() {
        assert_eq!(norm("stdlib "), "#include <.h>");
        assert!(matches!(
            normalize("a  b", false),
            Err(IncludeError::InvalidIncludeToken(ref t)) if t == "a  b"
        ));
    }

    #[test]
    fn test_empty_token() {
        assert_eq!(norm(""), "#include <.h>");
    }

    #[test]
    fn test_renormalizing_is_stable() {
        for token in ["stdlib", "\"util\"", "<stdio>", "#include <string.h>"] {
            let once = norm(token);
            assert_eq!(norm(&once), once);
        }
    }
}
