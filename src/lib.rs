//! # Glosario - Glossary Text Parser and Letter Index
//!
//! This crate parses lightweight glossary text documents into an ordered,
//! letter-indexed collection of term/definition records, with the filtering
//! and view-state pieces a glossary page is built from.
//!
//! ## Features
//!
//! - **Parse glossary documents**: `## <Letter>` section headers, `**Term**`
//!   term markers, free-text definitions with blank-line paragraph breaks
//! - **Letter index**: per-letter buckets in document order, a derived letter
//!   list with a reserved `#` specials bucket, and a "show all" view sorted
//!   with locale-aware collation
//! - **Graceful degradation**: malformed input never raises an error; stray
//!   lines are dropped and orphan terms are discarded
//! - **Fetch collaborator**: load documents from `file://` URLs; fetch
//!   failures are surfaced distinctly and never reach the parser
//! - **Localized content**: schema-validated deserialization of per-language
//!   resources, with explicit language resolution
//! - **Lightbox state machine**: close-on-back-navigation as an explicit FSM
//!   instead of history-stack coupling
//!
//! ## Quick Start
//!
//! ```
//! use glosario::{GlossaryParser, LetterSelection};
//!
//! # fn main() -> glosario::Result<()> {
//! let parser = GlossaryParser::with_locale("es")?;
//! let index = parser.parse(
//!     "## A\n**API**\nApplication Programming Interface.\n",
//! );
//!
//! // Letter filter bar: specials bucket first, then the observed letters
//! let letters: Vec<&str> = index.letters().iter().map(String::as_str).collect();
//! assert_eq!(letters, ["#", "A"]);
//!
//! // "Show all" view, sorted by term
//! let shown = index.filter(&LetterSelection::All);
//! assert_eq!(shown[0].term, "API");
//! # Ok(())
//! # }
//! ```
//!
//! ### Loading from a file URL
//!
//! ```no_run
//! use glosario::{GlossaryParser, source};
//! use url::Url;
//!
//! # fn main() -> glosario::Result<()> {
//! let parser = GlossaryParser::with_locale("es")?;
//! let url = Url::parse("file:///var/www/glosario.txt")?;
//! let index = source::load_glossary(&url, &parser)?;
//! println!("{} entries", index.len());
//! # Ok(())
//! # }
//! ```
//!
//! ## Feature Flags
//!
//! - `icu` (default): locale-aware term ordering via ICU4X collation; without
//!   it, ordering falls back to ordinal comparison
//!
//! ## Architecture
//!
//! - **Parsing**: [`parser`] for line classification and the single-pass
//!   document parser
//! - **Data model**: [`index`] for entries, the letter index, and the letter
//!   filter selection
//! - **Rendering contract**: [`render`] for the paragraph split the display
//!   layer uses
//! - **Sources**: [`source`] for materializing documents before parsing
//! - **Localization**: [`locale`] for language resolution and content schemas
//! - **View state**: [`view`] for the lightbox state machine
//! - **Utilities**: [`utils`] for locale-aware collation
//!
//! ## Error Handling
//!
//! Fallible boundary operations return a [`Result<T>`] type, where errors are
//! represented by [`GlossaryError`]. The crate uses the `snafu` library for
//! ergonomic error handling with context and backtraces. Parsing itself has
//! no failure path once a document string is in hand.
//!
//! ```
//! use glosario::{Result, GlossaryError};
//!
//! fn example() -> Result<String> {
//!     Ok("success".to_string())
//! }
//! ```

pub mod error;
pub mod index;
pub mod locale;
pub mod parser;
pub mod render;
pub mod source;
pub mod utils;
pub mod view;

// Re-export commonly used types for convenience
pub use index::{GlossaryEntry, GlossaryIndex, LetterSelection, SPECIALS_LETTER};
pub use locale::{Language, LocaleContent};
pub use parser::GlossaryParser;
pub use view::LightboxState;

// Re-export error types for convenience
pub use error::{GlossaryError, Result, snafu};
