//! Document fetch collaborator.
//!
//! The parser itself performs no I/O: some collaborator materializes the whole
//! document as a single string first, and the parser is never invoked when
//! that fails. This module is that collaborator for locally stored documents,
//! addressed by `file://` URLs the same way dictionary resources usually are.
//! Remote (HTTP) delivery stays outside the crate; a network client can hand
//! its response body straight to [`GlossaryParser::parse`](crate::GlossaryParser::parse).
//!
//! # Examples
//!
//! ```no_run
//! use glosario::source::fetch_document;
//! use url::Url;
//!
//! # fn main() -> glosario::Result<()> {
//! let url = Url::parse("file:///var/www/glosario.txt")?;
//! let text = fetch_document(&url)?;
//! # Ok(())
//! # }
//! ```

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::PathBuf;

use percent_encoding::percent_decode_str;
use url::Url;

use crate::index::GlossaryIndex;
use crate::parser::GlossaryParser;
use crate::{GlossaryError, Result};

/// Decodes the filesystem path of a `file://` URL.
fn decoded_path(url: &Url) -> Result<PathBuf> {
    let decoded = percent_decode_str(url.path())
        .decode_utf8()
        .map_err(|e| {
            GlossaryError::fetch_error(url.as_str(), format!("Invalid UTF-8 in path: {}", e))
        })?;
    Ok(PathBuf::from(decoded.into_owned()))
}

/// Fetches a whole glossary document from a `file://` URL.
///
/// # Errors
///
/// Every failure surfaces as the `Fetch` variant: an unsupported URL scheme,
/// a missing or unreadable file, or non-UTF-8 content. Callers present an
/// empty or error view state; they do not go on to parse.
pub fn fetch_document(url: &Url) -> Result<String> {
    if url.scheme() != "file" {
        return Err(GlossaryError::fetch_error(
            url.as_str(),
            format!("Unsupported scheme: {}", url.scheme()),
        ));
    }
    let path = decoded_path(url)?;
    log::debug!("Fetching glossary document from {:?}", path);

    let file = File::open(&path)
        .map_err(|e| GlossaryError::fetch_error(url.as_str(), e.to_string()))?;
    let mut reader = BufReader::new(file);
    let mut text = String::new();
    reader
        .read_to_string(&mut text)
        .map_err(|e| GlossaryError::fetch_error(url.as_str(), e.to_string()))?;
    Ok(text)
}

/// Fetch-then-parse convenience: loads the document at `url` and builds the
/// index with the given parser.
///
/// The fetch is the only fallible step; parsing is synchronous and
/// deterministic once the text is in hand.
pub fn load_glossary(url: &Url, parser: &GlossaryParser) -> Result<GlossaryIndex> {
    let text = fetch_document(url)?;
    Ok(parser.parse(&text))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn init_logger() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    fn write_temp_document(name: &str, contents: &str) -> PathBuf {
        let mut path = std::env::temp_dir();
        path.push(format!("glosario-test-{}-{}", std::process::id(), name));
        let mut file = File::create(&path).expect("create temp document");
        file.write_all(contents.as_bytes()).expect("write temp document");
        path
    }

    fn file_url(path: &PathBuf) -> Url {
        Url::from_file_path(path).expect("absolute path converts to file URL")
    }

    #[test]
    fn test_fetch_document_reads_whole_file() {
        init_logger();
        let path = write_temp_document("fetch.txt", "## A\n**API**\nAn interface.\n");
        let text = fetch_document(&file_url(&path)).expect("fetch succeeds");
        assert_eq!(text, "## A\n**API**\nAn interface.\n");
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_non_file_scheme_is_fetch_error() {
        let url = Url::parse("https://example.com/glosario.txt").unwrap();
        let err = fetch_document(&url).unwrap_err();
        assert!(err.is_fetch_error(), "expected Fetch error, got {:?}", err);
    }

    #[test]
    fn test_missing_file_is_fetch_error() {
        let url = Url::parse("file:///definitely/not/here/glosario.txt").unwrap();
        let err = fetch_document(&url).unwrap_err();
        assert!(err.is_fetch_error(), "expected Fetch error, got {:?}", err);
    }

    #[test]
    fn test_load_glossary_end_to_end() {
        init_logger();
        let path = write_temp_document(
            "load.txt",
            "## A\n**API**\nAn interface.\n## Z\n**Zip**\nAn archive format.\n",
        );
        let parser = GlossaryParser::with_locale("").expect("root collator");
        let index = load_glossary(&file_url(&path), &parser).expect("load succeeds");
        let letters: Vec<&str> = index.letters().iter().map(String::as_str).collect();
        assert_eq!(letters, ["#", "A", "Z"]);
        assert_eq!(index.len(), 2);
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_percent_encoded_paths_are_decoded() {
        init_logger();
        let path = write_temp_document("with space.txt", "## A\n**API**\nAn interface.\n");
        // from_file_path percent-encodes the space; fetch must decode it back
        let url = file_url(&path);
        assert!(url.path().contains("%20"));
        let text = fetch_document(&url).expect("fetch succeeds");
        assert!(text.starts_with("## A"));
        let _ = std::fs::remove_file(&path);
    }
}
