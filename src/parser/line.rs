//! Line classification for the glossary document format.
//!
//! The raw document only has three line shapes with semantic meaning:
//! `## <Letter>` section headers, `**Term**` term openers, and free-text
//! definition lines (with blank lines acting as paragraph separators inside a
//! definition). Anything else a line contains - inline formatting, list
//! markers - passes through literally as definition text.

/// Marker that opens a new letter section, e.g. `## A`.
pub const SECTION_MARKER: &str = "## ";

/// Marker pair wrapping a term name, e.g. `**API**`.
pub const TERM_MARKER: &str = "**";

/// The shape of a single document line, borrowed from the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// `## <Letter>`: the header text with marker and whitespace stripped.
    SectionHeader(&'a str),
    /// `**Term**`: the term text, marker pair stripped when present at both
    /// ends of the trimmed line.
    Term(&'a str),
    /// A line that is empty after trimming; a paragraph separator inside a
    /// definition.
    Blank,
    /// Any other line: definition content, already trimmed.
    Text(&'a str),
}

/// Strips a single trailing carriage return, tolerating `\r\n` documents.
///
/// Leading/trailing spaces are deliberately kept: the parser must still be
/// able to tell a blank line from a content line for paragraph bookkeeping.
pub fn strip_carriage_return(line: &str) -> &str {
    line.strip_suffix('\r').unwrap_or(line)
}

/// Classifies one document line, in priority order: section header, term
/// marker, blank, text.
pub fn classify(line: &str) -> LineKind<'_> {
    let trimmed = line.trim();
    if let Some(header) = trimmed.strip_prefix(SECTION_MARKER) {
        return LineKind::SectionHeader(header.trim());
    }
    if trimmed.starts_with(TERM_MARKER) {
        return LineKind::Term(strip_term_markers(trimmed));
    }
    if trimmed.is_empty() {
        return LineKind::Blank;
    }
    LineKind::Text(trimmed)
}

/// Removes one leading and one trailing `**` pair when both are present.
///
/// No nested or partial-marker recovery is attempted: `**Term` (missing the
/// closing pair) keeps its leading marker as literal term text.
fn strip_term_markers(trimmed: &str) -> &str {
    if trimmed.len() >= 2 * TERM_MARKER.len() {
        if let Some(inner) = trimmed
            .strip_prefix(TERM_MARKER)
            .and_then(|rest| rest.strip_suffix(TERM_MARKER))
        {
            return inner;
        }
    }
    trimmed
}
