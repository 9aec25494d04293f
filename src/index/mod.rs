// Letter-indexed glossary data model and view selection
//
// This module provides the core data structures produced by the parser and
// queried by the display layer: entries, the letter index, and the letter
// filter selection.

pub mod glossary_index;
pub mod selection;

pub use glossary_index::{GlossaryEntry, GlossaryIndex, SPECIALS_LETTER};
pub use selection::LetterSelection;
