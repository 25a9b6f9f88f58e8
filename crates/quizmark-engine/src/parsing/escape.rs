//! Placeholder transform protecting backslash-escaped control characters.
//!
//! The authoring syntax gives `: # = { } ~` structural meaning, so a
//! literal occurrence is written `\:` etc. Before any segmentation runs,
//! [`escape_pre`] swaps each escaped sequence for a placeholder token that
//! cannot occur in author text; [`escape_post`] restores the literal
//! character once all marker scanning is done.

/// Escaped sequence and its placeholder, placeholder and its literal.
const PLACEHOLDERS: [(&str, &str, &str); 7] = [
    ("\\:", "&&058;", ":"),
    ("\\#", "&&035;", "#"),
    ("\\=", "&&061;", "="),
    ("\\{", "&&123;", "{"),
    ("\\}", "&&125;", "}"),
    ("\\~", "&&126;", "~"),
    ("\\n", "&&010;", "\n"),
];

/// Placeholder guarding a literal `\\` while the other sequences are swapped,
/// so an escaped backslash is not misread as escaping the next character.
const BACKSLASH_GUARD: &str = "&&092;";

/// Replace escaped control characters with placeholders before processing.
pub fn escape_pre(s: &str) -> String {
    let mut out = s.replace("\\\\", BACKSLASH_GUARD);
    for (escaped, placeholder, _) in PLACEHOLDERS {
        out = out.replace(escaped, placeholder);
    }
    out.replace(BACKSLASH_GUARD, "\\")
}

/// Replace placeholders with their literal characters after processing.
pub fn escape_post(s: &str) -> String {
    let mut out = s.to_string();
    for (_, placeholder, literal) in PLACEHOLDERS {
        out = out.replace(placeholder, literal);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("plain text, nothing escaped", "plain text, nothing escaped")]
    #[case("a \\: b \\# c \\= d", "a : b # c = d")]
    #[case("\\{braces\\} and \\~tilde\\~", "{braces} and ~tilde~")]
    #[case("line one\\nline two", "line one\nline two")]
    #[case("all \\: \\# \\= \\{ \\} \\~ \\n done", "all : # = { } ~ \n done")]
    fn pre_then_post_yields_unescaped_literals(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(escape_post(&escape_pre(input)), expected);
    }

    #[test]
    fn round_trip_is_identity_without_escapes() {
        let s = "ordinary ASCII text with no backslashes";
        assert_eq!(escape_post(&escape_pre(s)), s);
    }

    #[test]
    fn pre_hides_markers_from_scanners() {
        let pre = escape_pre("not \\{ an answer \\} here");
        assert!(!pre.contains('{'));
        assert!(!pre.contains('}'));
    }

    #[test]
    fn escaped_backslash_does_not_escape_following_char() {
        // "\\~" is a literal backslash followed by a structural tilde,
        // not an escaped tilde.
        let pre = escape_pre("a \\\\~ b");
        assert!(pre.contains('~'));
        assert!(pre.contains('\\'));
    }

    #[test]
    fn post_restores_literals() {
        assert_eq!(escape_post("&&058;&&035;&&061;"), ":#=");
        assert_eq!(escape_post("&&123;x&&125;"), "{x}");
        assert_eq!(escape_post("a&&010;b"), "a\nb");
    }

    #[test]
    fn unknown_placeholder_like_text_is_left_alone() {
        assert_eq!(escape_post("&&999; stays"), "&&999; stays");
    }
}
