//! Code-sample unescaping.
//!
//! Samples are authored as single-line strings carrying literal two-character
//! escape sequences. [`unescape_code`] expands them for display. The chain is
//! NOT idempotent: running it twice over text whose expanded form still
//! contains a backslash followed by `n` converts again. Samples are stored
//! escaped exactly once and unescaped exactly once, in the render pipeline.

/// Expand the literal sequences `\n`, `\t`, `\"` and `\\`, in that fixed
/// order. No other escape sequences are recognized.
pub fn unescape_code(source: &str) -> String {
    source
        .replace("\\n", "\n")
        .replace("\\t", "\t")
        .replace("\\\"", "\"")
        .replace("\\\\", "\\")
}

/// Escape text for safe interpolation into generated markup.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expands_newline_sequences() {
        assert_eq!(unescape_code(r"line1\nline2"), "line1\nline2");
    }

    #[test]
    fn expands_tab_sequences() {
        assert_eq!(unescape_code(r"a\tb"), "a\tb");
    }

    #[test]
    fn expands_escaped_quotes() {
        assert_eq!(unescape_code(r#"say \"hi\""#), "say \"hi\"");
    }

    #[test]
    fn expands_escaped_backslashes() {
        assert_eq!(unescape_code(r"back\\slash"), "back\\slash");
    }

    #[test]
    fn empty_input_yields_empty_output() {
        assert_eq!(unescape_code(""), "");
    }

    #[test]
    fn namespace_separators_survive_a_single_pass() {
        assert_eq!(
            unescape_code(r"use App\\Events\\ArticleDeleted;"),
            "use App\\Events\\ArticleDeleted;"
        );
    }

    #[test]
    fn unrecognized_sequences_pass_through() {
        assert_eq!(unescape_code(r"regex:/^[a-z]+$/i \d"), "regex:/^[a-z]+$/i \\d");
    }

    // The chain is not idempotent: display text that legitimately contains a
    // backslash followed by `n` is corrupted by a further application. This
    // documents the behavior, it is not a guarantee.
    #[test]
    fn reapplying_to_unescaped_text_converts_again() {
        let display = r"C:\nightly";
        assert_eq!(unescape_code(display), "C:\nightly");
    }

    #[test]
    fn escapes_html_metacharacters() {
        assert_eq!(
            escape_html(r#"<a href="x">&'"#),
            "&lt;a href=&quot;x&quot;&gt;&amp;&#39;"
        );
    }
}
