//! Small shared helpers: word counting and log-safe string truncation.

/// Count whitespace-delimited words in a string.
///
/// This is the unit used by the article-length gate: a page is only
/// worth summarizing if its extracted body exceeds a minimum number of
/// words.
pub fn word_count(s: &str) -> usize {
    s.split_whitespace().count()
}

/// Truncate a string for logging purposes.
///
/// Long strings (article bodies, model output) are cut to at most `max`
/// bytes with an ellipsis and the number of omitted bytes appended, so
/// log lines stay readable. The cut snaps back to the nearest char
/// boundary; article text is arbitrary UTF-8 and `max` can land inside
/// a multibyte character.
pub fn truncate_for_log(s: &str, max: usize) -> String {
    if s.len() <= max {
        return s.to_string();
    }
    let mut cut = max;
    while !s.is_char_boundary(cut) {
        cut -= 1;
    }
    format!("{}…(+{} bytes)", &s[..cut], s.len() - cut)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_count() {
        assert_eq!(word_count(""), 0);
        assert_eq!(word_count("   "), 0);
        assert_eq!(word_count("one"), 1);
        assert_eq!(word_count("one two\nthree\tfour"), 4);
        assert_eq!(word_count("word ".repeat(51).as_str()), 51);
    }

    #[test]
    fn test_truncate_for_log_short_string() {
        assert_eq!(truncate_for_log("Hello, world!", 100), "Hello, world!");
    }

    #[test]
    fn test_truncate_for_log_long_string() {
        let s = "a".repeat(500);
        let result = truncate_for_log(&s, 100);
        assert!(result.starts_with(&"a".repeat(100)));
        assert!(result.contains("…(+400 bytes)"));
    }

    #[test]
    fn test_truncate_for_log_snaps_to_char_boundary() {
        // 200 two-byte chars; byte 301 falls inside one of them, so the
        // cut backs up to byte 300 instead of panicking.
        let s = "é".repeat(200);
        let result = truncate_for_log(&s, 301);
        assert!(result.starts_with(&"é".repeat(150)));
        assert!(result.contains("…(+100 bytes)"));
    }

    #[test]
    fn test_truncate_for_log_multibyte_exact_boundary() {
        let s = "日本語のニュース記事".repeat(20);
        let result = truncate_for_log(&s, 30);
        // Never cuts mid-character, never exceeds the byte budget.
        assert!(result.contains("…(+"));
        assert!(s.starts_with(result.split('…').next().unwrap()));
    }
}
