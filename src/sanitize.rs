const ESCAPABLE: &[char] = &[
    '.', '*', '+', '?', '^', ':', '$', '{', '}', '(', ')', '|', ']', '[',
];

/// Escapes characters that are special in a DOM-id selector lookup, so a raw
/// problem location can be used as part of an element id query.
pub fn sanitize_string(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        if ESCAPABLE.contains(&ch) {
            out.push('\\');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_every_special_character() {
        assert_eq!(
            sanitize_string(".*+?^:${}()|]["),
            "\\.\\*\\+\\?\\^\\:\\$\\{\\}\\(\\)\\|\\]\\["
        );
    }

    #[test]
    fn leaves_ordinary_characters_untouched() {
        assert_eq!(sanitize_string("test_loc-42/ok"), "test_loc-42/ok");
        assert_eq!(sanitize_string(""), "");
    }

    #[test]
    fn mixed_input_escapes_only_specials() {
        assert_eq!(
            sanitize_string("i4x://edX/problem/test.loc"),
            "i4x\\://edX/problem/test\\.loc"
        );
    }
}
