//! Single-pass glossary document parser.
//!
//! [`GlossaryParser`] converts a raw glossary document into a
//! [`GlossaryIndex`] in one line-by-line pass, O(n) in the number of lines.
//! Parsing never fails: malformed input degrades gracefully. Stray content
//! before any term is discarded, a term with no definition body is silently
//! dropped, and runs of blank lines collapse to a single paragraph break.
//!
//! The parser is pure and deterministic: parsing the same text twice yields
//! structurally equal indexes. The only configuration is the collation locale,
//! passed explicitly at construction and used to order the "show all" view.
//!
//! # Examples
//!
//! ```
//! use glosario::GlossaryParser;
//!
//! # fn main() -> glosario::Result<()> {
//! let parser = GlossaryParser::with_locale("es")?;
//! let index = parser.parse("## A\n**API**\nApplication Programming Interface.\n");
//! assert_eq!(index.entries_for("A").len(), 1);
//! # Ok(())
//! # }
//! ```

use indexmap::IndexMap;

use crate::index::{GlossaryEntry, GlossaryIndex, SPECIALS_LETTER};
use crate::parser::line::{self, LineKind};
use crate::utils::collation::TermCollator;
use crate::Result;

/// The internal double-newline marker separating paragraphs inside an
/// accumulated definition. The display layer splits on runs of two or more
/// newlines, so repeated blank lines still yield a single break.
const PARAGRAPH_SENTINEL: &str = "\n\n";

/// Parses glossary documents into letter-indexed entries.
///
/// Holds the collator used to order the "show all" view; construct it once
/// with the language the page is being displayed in and reuse it for every
/// document.
#[derive(Debug)]
pub struct GlossaryParser {
    collator: TermCollator,
}

impl GlossaryParser {
    /// Creates a parser that sorts terms with the given collator.
    pub fn new(collator: TermCollator) -> Self {
        Self { collator }
    }

    /// Creates a parser for the given BCP-47 locale string.
    ///
    /// An empty locale yields root collation.
    ///
    /// # Errors
    ///
    /// Returns a `Collator` error when the locale string is malformed or the
    /// collator cannot be built.
    pub fn with_locale(locale: &str) -> Result<Self> {
        Ok(Self::new(TermCollator::try_from(locale)?))
    }

    /// Parses a whole glossary document into a [`GlossaryIndex`].
    ///
    /// The document is expected to be `\n`-separated; a trailing `\r` per line
    /// is tolerated. This function has no failure path: unrecognized input is
    /// dropped or best-effort interpreted per the rules in the module docs.
    pub fn parse(&self, text: &str) -> GlossaryIndex {
        let mut buckets: IndexMap<String, Vec<GlossaryEntry>> = IndexMap::new();
        // The specials bucket is reserved up front, entries or not.
        buckets.insert(SPECIALS_LETTER.to_string(), Vec::new());

        let mut current_letter = String::new();
        let mut current_term = String::new();
        let mut current_definition = String::new();

        for raw_line in text.split('\n') {
            let line = line::strip_carriage_return(raw_line);
            match line::classify(line) {
                LineKind::SectionHeader(header) => {
                    flush_pending(
                        &mut buckets,
                        &current_letter,
                        &mut current_term,
                        &mut current_definition,
                    );
                    current_letter = header.to_string();
                    buckets.entry(current_letter.clone()).or_default();
                }
                LineKind::Term(term) => {
                    // The pending entry still belongs to the current letter.
                    flush_pending(
                        &mut buckets,
                        &current_letter,
                        &mut current_term,
                        &mut current_definition,
                    );
                    current_term = term.to_string();
                    current_definition.clear();
                }
                LineKind::Blank => {
                    // Lines before any open term are discarded.
                    if !current_term.is_empty() {
                        append_paragraph_break(&mut current_definition);
                    }
                }
                LineKind::Text(content) => {
                    if !current_term.is_empty() {
                        append_text(&mut current_definition, content);
                    }
                }
            }
        }

        flush_pending(
            &mut buckets,
            &current_letter,
            &mut current_term,
            &mut current_definition,
        );

        GlossaryIndex::from_buckets(buckets, &self.collator)
    }
}

/// Appends the pending `{term, definition}` to the current letter's bucket,
/// then resets the accumulator.
///
/// Graceful degradation, not errors: nothing is emitted when the term is
/// empty, when the definition trims to empty (an orphan term), or when no
/// section header has been seen yet.
fn flush_pending(
    buckets: &mut IndexMap<String, Vec<GlossaryEntry>>,
    current_letter: &str,
    current_term: &mut String,
    current_definition: &mut String,
) {
    if current_term.is_empty() {
        current_definition.clear();
        return;
    }
    let term = std::mem::take(current_term);
    let definition = std::mem::take(current_definition);
    let definition = definition.trim();

    if definition.is_empty() {
        log::debug!("Dropping term without definition body: {:?}", term);
        return;
    }
    if current_letter.is_empty() {
        log::debug!("Dropping term outside any section: {:?}", term);
        return;
    }

    buckets
        .entry(current_letter.to_string())
        .or_default()
        .push(GlossaryEntry {
            term,
            definition: definition.to_string(),
            letter: current_letter.to_string(),
        });
}

/// Appends one paragraph sentinel, idempotently: a run of blank lines leaves
/// the accumulator with a single break, and blank lines before any content do
/// nothing at all.
fn append_paragraph_break(definition: &mut String) {
    if !definition.is_empty() && !definition.ends_with(PARAGRAPH_SENTINEL) {
        definition.push_str(PARAGRAPH_SENTINEL);
    }
}

/// Appends one trimmed content line, joined to prior content by a single
/// space unless it opens a new paragraph.
fn append_text(definition: &mut String, content: &str) {
    if !definition.is_empty() && !definition.ends_with('\n') {
        definition.push(' ');
    }
    definition.push_str(content);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::LetterSelection;
    use crate::render::split_paragraphs;

    fn init_logger() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    fn parser() -> GlossaryParser {
        GlossaryParser::with_locale("").expect("root collator")
    }

    #[test]
    fn test_two_entries_with_paragraph_break() {
        init_logger();
        let text = "## A\n\
                    **API**\n\
                    Application Programming Interface.\n\
                    \n\
                    A set of rules for communication.\n\
                    **Array**\n\
                    An ordered collection of values.\n";
        let index = parser().parse(text);

        let letters: Vec<&str> = index.letters().iter().map(String::as_str).collect();
        assert_eq!(letters, ["#", "A"]);
        let a = index.entries_for("A");
        assert_eq!(a.len(), 2);
        assert_eq!(a[0].term, "API");
        assert_eq!(
            a[0].definition,
            "Application Programming Interface.\n\nA set of rules for communication."
        );
        assert_eq!(a[0].letter, "A");
        assert_eq!(a[1].term, "Array");
        assert_eq!(a[1].definition, "An ordered collection of values.");
    }

    #[test]
    fn test_header_without_terms_keeps_empty_bucket() {
        let index = parser().parse("## Z\n");
        assert!(index.entries_for("Z").is_empty());
        assert!(index.letters().contains(&"Z".to_string()));
    }

    #[test]
    fn test_orphan_term_is_dropped() {
        init_logger();
        let index = parser().parse("## A\n**Orphan**\n");
        assert!(index.entries_for("A").is_empty());
        assert_eq!(index.len(), 0);
    }

    #[test]
    fn test_filter_all_sorts_across_letters() {
        let text = "## S\n**Sass**\nA CSS preprocessor.\n\
                    ## A\n**Array**\nAn ordered collection.\n**API**\nAn interface.\n";
        let index = parser().parse(text);
        let all: Vec<&str> = index
            .filter(&LetterSelection::All)
            .iter()
            .map(|e| e.term.as_str())
            .collect();
        assert_eq!(all, vec!["API", "Array", "Sass"]);
    }

    #[test]
    fn test_filter_unknown_letter_is_empty_not_error() {
        let index = parser().parse("## A\n**API**\nAn interface.\n");
        assert!(
            index
                .filter(&LetterSelection::Letter("Q".to_string()))
                .is_empty()
        );
    }

    #[test]
    fn test_blank_run_collapses_to_one_paragraph_break() {
        let single = parser().parse("## L\n**Lines**\nLine1\n\nLine2\n");
        let triple = parser().parse("## L\n**Lines**\nLine1\n\n\n\nLine2\n");
        let single_def = &single.entries_for("L")[0].definition;
        let triple_def = &triple.entries_for("L")[0].definition;
        assert_eq!(split_paragraphs(single_def), split_paragraphs(triple_def));
        assert_eq!(split_paragraphs(triple_def), vec!["Line1", "Line2"]);
    }

    #[test]
    fn test_empty_input() {
        let index = parser().parse("");
        let letters: Vec<&str> = index.letters().iter().map(String::as_str).collect();
        assert_eq!(letters, ["#"]);
        assert!(index.is_empty());
        assert!(index.all_entries_sorted().is_empty());
    }

    #[test]
    fn test_parse_is_idempotent() {
        let text = "## A\n**API**\nAn interface.\n## B\n**Bug**\nAn unexpected behavior.\n";
        let p = parser();
        assert_eq!(p.parse(text), p.parse(text));
    }

    #[test]
    fn test_every_term_is_non_empty() {
        let text = "## A\n****\nDefinition for nothing.\n**API**\nAn interface.\n";
        let index = parser().parse(text);
        assert!(index.all_entries_sorted().iter().all(|e| !e.term.is_empty()));
        assert_eq!(index.len(), 1);
    }

    #[test]
    fn test_content_before_any_section_or_term_is_ignored() {
        let text = "stray preamble\n\n**Early**\nbody before any header\n## A\n**API**\nAn interface.\n";
        let index = parser().parse(text);
        // "Early" is flushed with an empty current letter and dropped
        assert_eq!(index.len(), 1);
        assert_eq!(index.entries_for("A")[0].term, "API");
    }

    #[test]
    fn test_crlf_documents_are_tolerated() {
        let text = "## A\r\n**API**\r\nAn interface.\r\n";
        let index = parser().parse(text);
        assert_eq!(index.entries_for("A")[0].definition, "An interface.");
    }

    #[test]
    fn test_pending_term_flushes_on_section_switch() {
        let text = "## A\n**API**\nAn interface.\n## B\n**Bug**\nAn unexpected behavior.\n";
        let index = parser().parse(text);
        assert_eq!(index.entries_for("A").len(), 1);
        assert_eq!(index.entries_for("B").len(), 1);
        assert_eq!(index.entries_for("B")[0].letter, "B");
    }

    #[test]
    fn test_term_missing_closing_marker_keeps_literal_text() {
        let index = parser().parse("## A\n**Broken\nStill gets a body.\n");
        assert_eq!(index.entries_for("A")[0].term, "**Broken");
    }

    #[test]
    fn test_leading_blank_lines_do_not_pad_definition() {
        let index = parser().parse("## A\n**API**\n\n\nAn interface.\n");
        assert_eq!(index.entries_for("A")[0].definition, "An interface.");
    }

    #[test]
    fn test_continuation_lines_join_with_single_space() {
        let index = parser().parse("## A\n**API**\nAn interface\nfor programs.\n");
        assert_eq!(index.entries_for("A")[0].definition, "An interface for programs.");
    }
}
