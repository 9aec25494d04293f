// Glossary document parsing
//
// This module converts raw glossary text into the letter-indexed data model:
// line classification in `line`, the single-pass accumulator in
// `glossary_parser`.

pub mod line;
pub mod glossary_parser;

pub use glossary_parser::GlossaryParser;
pub use line::{LineKind, SECTION_MARKER, TERM_MARKER};
