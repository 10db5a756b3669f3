//! Values computed from the page content on every change

use serde::Serialize;

/// Delimiter between preview paragraphs
pub const PARAGRAPH_BREAK: &str = "\n\n";

/// Number of newline-separated lines; zero only for empty content
pub fn line_count(content: &str) -> usize {
    if content.is_empty() {
        0
    } else {
        content.split('\n').count()
    }
}

/// Number of characters (not bytes).
///
/// Counts Unicode scalar values, so an emoji such as `😀` is one
/// character even though it takes two UTF-16 units in a JS string.
pub fn char_count(content: &str) -> usize {
    content.chars().count()
}

/// Split on blank lines, keeping each segment verbatim
pub fn paragraphs(content: &str) -> Vec<&str> {
    content.split(PARAGRAPH_BREAK).collect()
}

/// Header statistics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct PageStats {
    pub lines: usize,
    pub chars: usize,
}

impl PageStats {
    pub fn of(content: &str) -> Self {
        Self {
            lines: line_count(content),
            chars: char_count(content),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_content() {
        assert_eq!(line_count(""), 0);
        assert_eq!(char_count(""), 0);
        assert_eq!(PageStats::of(""), PageStats::default());
    }

    #[test]
    fn test_line_count_counts_segments() {
        assert_eq!(line_count("a"), 1);
        assert_eq!(line_count("a\nb"), 2);
        assert_eq!(line_count("a\n"), 2);
        assert_eq!(line_count("\n"), 2);
        assert_eq!(line_count(" "), 1);
    }

    #[test]
    fn test_char_count_is_not_bytes() {
        assert_eq!(char_count("héllo"), 5);
        assert_eq!(char_count("日本"), 2);
        assert_eq!("日本".len(), 6);
        assert_eq!(char_count("a😀"), 2);
    }

    #[test]
    fn test_hello_world_scenario() {
        let content = "Hello\n\nWorld";
        assert_eq!(paragraphs(content), vec!["Hello", "World"]);
        assert_eq!(PageStats::of(content), PageStats { lines: 3, chars: 12 });
    }

    #[test]
    fn test_paragraphs_keep_single_newlines() {
        assert_eq!(
            paragraphs("line one\nline two\n\nnext"),
            vec!["line one\nline two", "next"]
        );
    }

    #[test]
    fn test_paragraphs_extra_newlines() {
        assert_eq!(paragraphs("a\n\n\nb"), vec!["a", "\nb"]);
        assert_eq!(paragraphs("a\n\n\n\nb"), vec!["a", "", "b"]);
        assert_eq!(paragraphs("solo"), vec!["solo"]);
    }

    #[test]
    fn test_derivation_is_stable() {
        let content = "x\n\ny\nz";
        assert_eq!(PageStats::of(content), PageStats::of(content));
        assert_eq!(paragraphs(content), paragraphs(content));
    }
}
