//! Quote-aware string splitting.

/// Splits `input` on `separator`, keeping quoted spans intact.
///
/// The scan tracks an active terminator that starts as the separator.
/// Entering a single- or double-quoted span switches the terminator to
/// that quote character until the matching close quote, so separators
/// inside quotes are ordinary text. Quote characters are kept in the
/// emitted tokens; argument parsing strips them later.
///
/// Tokens are trimmed of surrounding spaces, and tokens that are empty
/// after trimming are dropped: `a||b` splits the same as `a|b`.
///
/// An unterminated quote is not an error — the scan never returns to
/// separator mode, so the rest of the input (separators included) lands
/// in the final token verbatim.
pub fn smart_split(input: &str, separator: char) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut word = String::new();
    let mut terminator = separator;

    for ch in input.chars() {
        if ch == terminator {
            if terminator == separator {
                flush(&mut word, &mut tokens);
            } else {
                // Closing quote: keep it and go back to splitting.
                word.push(ch);
                terminator = separator;
            }
        } else {
            if terminator == separator && (ch == '\'' || ch == '"') {
                terminator = ch;
            }
            word.push(ch);
        }
    }
    flush(&mut word, &mut tokens);

    tokens
}

fn flush(word: &mut String, tokens: &mut Vec<String>) {
    let trimmed = word.trim_matches(' ');
    if !trimmed.is_empty() {
        tokens.push(trimmed.to_string());
    }
    word.clear();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_simple() {
        assert_eq!(smart_split("a|b|c", '|'), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_split_single_token() {
        assert_eq!(smart_split("alone", '|'), vec!["alone"]);
    }

    #[test]
    fn test_split_empty_input() {
        assert!(smart_split("", '|').is_empty());
    }

    #[test]
    fn test_consecutive_separators_drop_empty_tokens() {
        assert_eq!(smart_split("a||b", '|'), vec!["a", "b"]);
        assert_eq!(smart_split("|a|", '|'), vec!["a"]);
    }

    #[test]
    fn test_tokens_are_trimmed() {
        assert_eq!(smart_split(" a | b ", '|'), vec!["a", "b"]);
    }

    #[test]
    fn test_whitespace_only_tokens_are_dropped() {
        assert_eq!(smart_split("a| |b", '|'), vec!["a", "b"]);
    }

    #[test]
    fn test_separator_inside_single_quotes() {
        assert_eq!(
            smart_split("greet:'hello, world'", ','),
            vec!["greet:'hello, world'"]
        );
    }

    #[test]
    fn test_separator_inside_double_quotes() {
        assert_eq!(
            smart_split("a|\"b|c\"|d", '|'),
            vec!["a", "\"b|c\"", "d"]
        );
    }

    #[test]
    fn test_quotes_are_kept_in_tokens() {
        assert_eq!(smart_split("'a','b'", ','), vec!["'a'", "'b'"]);
    }

    #[test]
    fn test_whitespace_inside_quotes_is_preserved() {
        assert_eq!(smart_split("' a '|b", '|'), vec!["' a '", "b"]);
    }

    #[test]
    fn test_unterminated_quote_consumes_rest() {
        assert_eq!(smart_split("a|'b|c", '|'), vec!["a", "'b|c"]);
    }

    #[test]
    fn test_mixed_quote_kinds() {
        assert_eq!(
            smart_split("\"a,b\",'c,d',e", ','),
            vec!["\"a,b\"", "'c,d'", "e"]
        );
    }

    #[test]
    fn test_colon_separator() {
        assert_eq!(smart_split("default:'N/A'", ':'), vec!["default", "'N/A'"]);
    }
}
