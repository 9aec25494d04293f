//! Transient letter-filter view state.
//!
//! The selected letter is UI state, not part of the parsed data model. The
//! display layer holds one of these and asks the index for the matching view
//! via [`GlossaryIndex::filter`](crate::index::GlossaryIndex::filter).

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Which subset of the glossary the display layer wants to show.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum LetterSelection {
    /// The virtual "show everything" selector, backed by the sorted union.
    All,
    /// One specific letter bucket. Unknown letters are valid and simply
    /// display as "no results".
    Letter(String),
}

impl LetterSelection {
    /// Parses a UI token into a selection. The token `"all"` (any case) maps
    /// to [`LetterSelection::All`]; anything else is a letter selector.
    pub fn from_token(token: &str) -> Self {
        if token.eq_ignore_ascii_case("all") {
            LetterSelection::All
        } else {
            LetterSelection::Letter(token.to_string())
        }
    }
}

impl Default for LetterSelection {
    fn default() -> Self {
        LetterSelection::All
    }
}

impl FromStr for LetterSelection {
    type Err = Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Self::from_token(s))
    }
}

impl fmt::Display for LetterSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LetterSelection::All => write!(f, "all"),
            LetterSelection::Letter(letter) => write!(f, "{}", letter),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_token_is_case_insensitive() {
        assert_eq!(LetterSelection::from_token("all"), LetterSelection::All);
        assert_eq!(LetterSelection::from_token("All"), LetterSelection::All);
        assert_eq!(LetterSelection::from_token("ALL"), LetterSelection::All);
    }

    #[test]
    fn test_letter_tokens() {
        assert_eq!(
            LetterSelection::from_token("A"),
            LetterSelection::Letter("A".to_string())
        );
        assert_eq!(
            LetterSelection::from_token("#"),
            LetterSelection::Letter("#".to_string())
        );
    }

    #[test]
    fn test_from_str_never_fails() {
        let selection: LetterSelection = "Q".parse().unwrap();
        assert_eq!(selection, LetterSelection::Letter("Q".to_string()));
    }

    #[test]
    fn test_display_round_trip() {
        assert_eq!(LetterSelection::All.to_string(), "all");
        assert_eq!(
            LetterSelection::Letter("B".to_string()).to_string(),
            "B"
        );
    }
}
