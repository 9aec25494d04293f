//! Paragraph split contract for the display layer.
//!
//! A [`GlossaryEntry`](crate::GlossaryEntry) definition carries its paragraph
//! breaks as internal double-newline sentinels. The only contract the display
//! layer needs from the data model is: split on runs of two or more
//! consecutive newlines and trim each piece before display. How paragraphs are
//! then styled or animated is not this crate's concern.

use once_cell::sync::Lazy;
use regex::Regex;

static PARAGRAPH_BREAK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\n{2,}").expect("paragraph break pattern is valid"));

/// Splits an accumulated definition into display paragraphs.
///
/// Runs of two or more newlines are a single break, each paragraph is
/// trimmed, and pieces that trim to empty are dropped.
///
/// # Examples
///
/// ```
/// use glosario::render::split_paragraphs;
///
/// let paragraphs = split_paragraphs("First.\n\nSecond.");
/// assert_eq!(paragraphs, vec!["First.", "Second."]);
/// ```
pub fn split_paragraphs(definition: &str) -> Vec<String> {
    PARAGRAPH_BREAK
        .split(definition)
        .map(str::trim)
        .filter(|paragraph| !paragraph.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_paragraph() {
        assert_eq!(split_paragraphs("Only one."), vec!["Only one."]);
    }

    #[test]
    fn test_two_or_more_newlines_are_one_break() {
        assert_eq!(split_paragraphs("Line1\n\nLine2"), vec!["Line1", "Line2"]);
        assert_eq!(split_paragraphs("Line1\n\n\n\nLine2"), vec!["Line1", "Line2"]);
    }

    #[test]
    fn test_single_newline_is_not_a_break() {
        assert_eq!(split_paragraphs("Line1\nLine2"), vec!["Line1\nLine2"]);
    }

    #[test]
    fn test_paragraphs_are_trimmed() {
        assert_eq!(split_paragraphs("  First. \n\n  Second. "), vec!["First.", "Second."]);
    }

    #[test]
    fn test_empty_and_whitespace_pieces_dropped() {
        assert!(split_paragraphs("").is_empty());
        assert!(split_paragraphs("\n\n\n").is_empty());
        assert_eq!(split_paragraphs("\n\nOnly.\n\n"), vec!["Only."]);
    }
}
