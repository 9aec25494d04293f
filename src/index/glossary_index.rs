//! Letter-indexed glossary data model.
//!
//! This module defines the two core data types of the crate:
//! - [`GlossaryEntry`]: a single `{term, definition, letter}` record
//! - [`GlossaryIndex`]: the letter-keyed collection of entries with its derived
//!   letter list and locale-sorted "all entries" view
//!
//! The index is built once by [`crate::parser::GlossaryParser`] from a raw text
//! document and held immutably for the lifetime of a page view. Which subset is
//! displayed is transient view state, expressed as a
//! [`LetterSelection`](crate::index::LetterSelection) and answered by
//! [`GlossaryIndex::filter`].

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::index::selection::LetterSelection;
use crate::utils::collation::TermCollator;

/// The reserved bucket for terms that do not fall under an alphabetic header.
///
/// The bucket always exists, and always leads the derived letter list, even
/// when the document put nothing into it.
pub const SPECIALS_LETTER: &str = "#";

/// A single glossary record captured under a section header.
///
/// Invariant: `term` is non-empty; entries whose accumulated definition
/// trimmed to empty are discarded before they ever become a `GlossaryEntry`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlossaryEntry {
    /// The term name, trimmed, with the `**` markers stripped.
    pub term: String,
    /// One or more paragraphs, separated internally by a double-newline
    /// sentinel, trimmed as a whole.
    pub definition: String,
    /// The section header text this entry was captured under.
    pub letter: String,
}

/// An immutable, letter-indexed view over a parsed glossary document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlossaryIndex {
    /// Letter -> entries in document order. The [`SPECIALS_LETTER`] bucket is
    /// always present.
    entries: IndexMap<String, Vec<GlossaryEntry>>,
    /// All observed letters, ordinal ascending, with [`SPECIALS_LETTER`]
    /// prepended first.
    letters: Vec<String>,
    /// Union of all buckets, ordered by term under locale-aware comparison.
    all_sorted: Vec<GlossaryEntry>,
}

impl GlossaryIndex {
    /// Builds the index from the per-letter buckets accumulated by the parser,
    /// deriving the letter list and the locale-sorted "all entries" view.
    pub(crate) fn from_buckets(
        entries: IndexMap<String, Vec<GlossaryEntry>>,
        collator: &TermCollator,
    ) -> Self {
        debug_assert!(entries.contains_key(SPECIALS_LETTER));

        // Letter filter order: specials bucket first, everything else ordinal.
        let mut letters: Vec<String> = entries
            .keys()
            .filter(|letter| letter.as_str() != SPECIALS_LETTER)
            .cloned()
            .collect();
        letters.sort();
        letters.insert(0, SPECIALS_LETTER.to_string());

        let mut all_sorted: Vec<GlossaryEntry> =
            entries.values().flatten().cloned().collect();
        all_sorted.sort_by(|a, b| collator.compare(&a.term, &b.term));

        log::debug!(
            "Built glossary index: {} letters, {} entries",
            letters.len(),
            all_sorted.len()
        );

        Self {
            entries,
            letters,
            all_sorted,
        }
    }

    /// All observed letters, with the specials bucket first and the rest in
    /// ascending order. Usable directly as the letter filter bar.
    pub fn letters(&self) -> &[String] {
        &self.letters
    }

    /// The entries captured under one letter, in document order.
    ///
    /// An unknown letter yields an empty slice, which is a valid, displayable
    /// "no results" state rather than an error.
    pub fn entries_for(&self, letter: &str) -> &[GlossaryEntry] {
        self.entries.get(letter).map_or(&[], Vec::as_slice)
    }

    /// The union of all buckets, sorted by term under the collation the index
    /// was built with. Backs the "show all" view.
    pub fn all_entries_sorted(&self) -> &[GlossaryEntry] {
        &self.all_sorted
    }

    /// Resolves a view selection to the entries it should display.
    ///
    /// `All` returns the precomputed sorted union; `Letter` returns that
    /// bucket or an empty slice. Pure and O(1): both views are precomputed.
    pub fn filter(&self, selection: &LetterSelection) -> &[GlossaryEntry] {
        match selection {
            LetterSelection::All => self.all_entries_sorted(),
            LetterSelection::Letter(letter) => self.entries_for(letter),
        }
    }

    /// Total number of entries across all buckets.
    pub fn len(&self) -> usize {
        self.all_sorted.len()
    }

    /// Whether the document produced no entries at all.
    pub fn is_empty(&self) -> bool {
        self.all_sorted.is_empty()
    }
}
