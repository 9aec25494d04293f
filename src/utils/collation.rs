//! Locale-aware string comparison for glossary term sorting.
//!
//! This module wraps the ICU4X collator behind a small interface so the rest of
//! the crate can sort terms the way a reader of the given language expects
//! ("é" next to "e", case folded, and so on). The implementation is selected at
//! compile time:
//! - `icu` feature (default): pure Rust ICU4X collation
//! - feature disabled: plain ordinal `str` comparison as a fallback

use std::cmp::Ordering;

use crate::Result;

#[cfg(feature = "icu")]
mod icu_impl {
    use super::*;
    use icu_collator::{Collator, CollatorBorrowed, CollatorPreferences};
    use icu_collator::options::CollatorOptions;
    use icu_locale::Locale;

    /// Unicode collator using the pure Rust ICU4X backend.
    ///
    /// Provides locale-aware string comparison for ordering glossary terms.
    #[derive(Debug)]
    pub struct TermCollator {
        collator: CollatorBorrowed<'static>,
        locale_str: String,
    }

    impl TermCollator {
        /// Creates a collator for the specified BCP-47 locale string.
        ///
        /// An empty locale string yields the default (root) collation, which is
        /// still accent- and case-aware, just not tailored to any language.
        pub fn try_from(locale_str: &str) -> Result<Self> {
            log::debug!("Creating term collator for locale: {:?}", locale_str);
            if locale_str.is_empty() {
                let collator =
                    Collator::try_new(CollatorPreferences::default(), CollatorOptions::default())
                        .map_err(|e| {
                            crate::GlossaryError::collator_error(format!(
                                "Failed to create default ICU collator: {:?}",
                                e
                            ))
                        })?;
                return Ok(Self {
                    collator,
                    locale_str: String::new(),
                });
            }

            let locale: Locale = locale_str.parse().map_err(|e| {
                log::error!("Failed to parse locale '{}': {:?}", locale_str, e);
                crate::GlossaryError::collator_error(format!(
                    "Invalid BCP-47 locale string: {}",
                    locale_str
                ))
            })?;

            let prefs = CollatorPreferences::from(&locale);
            let collator = Collator::try_new(prefs, CollatorOptions::default()).map_err(|e| {
                crate::GlossaryError::collator_error(format!(
                    "Failed to create ICU collator for '{}': {:?}",
                    locale_str, e
                ))
            })?;

            Ok(Self {
                collator,
                locale_str: locale_str.to_string(),
            })
        }

        /// Compares two UTF-8 strings according to the collation rules.
        pub fn compare(&self, left: &str, right: &str) -> Ordering {
            self.collator.compare(left, right)
        }

        /// The BCP-47 locale string this collator was built from.
        pub fn locale(&self) -> &str {
            &self.locale_str
        }
    }
}

#[cfg(not(feature = "icu"))]
mod fallback_impl {
    use super::*;

    /// Ordinal comparison fallback used when the `icu` feature is disabled.
    ///
    /// Sorting is byte-wise on the UTF-8 representation; accented characters
    /// sort after ASCII. Enable the `icu` feature for proper collation.
    #[derive(Debug)]
    pub struct TermCollator {
        locale_str: String,
    }

    impl TermCollator {
        pub fn try_from(locale_str: &str) -> Result<Self> {
            log::warn!(
                "icu feature disabled; locale {:?} falls back to ordinal comparison",
                locale_str
            );
            Ok(Self {
                locale_str: locale_str.to_string(),
            })
        }

        pub fn compare(&self, left: &str, right: &str) -> Ordering {
            left.cmp(right)
        }

        pub fn locale(&self) -> &str {
            &self.locale_str
        }
    }
}

// Re-export the appropriate implementation based on features
#[cfg(feature = "icu")]
pub use icu_impl::TermCollator;

#[cfg(not(feature = "icu"))]
pub use fallback_impl::TermCollator;

#[cfg(test)]
mod tests {
    use super::*;

    fn init_logger() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    #[test]
    fn test_create_default_collator() {
        init_logger();
        let collator = TermCollator::try_from("").expect("Failed to create default collator");
        assert_eq!(collator.locale(), "");
    }

    #[test]
    fn test_basic_ordering() {
        init_logger();
        let collator = TermCollator::try_from("").expect("Failed to create collator");
        assert_eq!(collator.compare("abc", "abd"), Ordering::Less);
        assert_eq!(collator.compare("zyx", "abc"), Ordering::Greater);
        assert_eq!(collator.compare("hello", "hello"), Ordering::Equal);
    }

    #[cfg(feature = "icu")]
    #[test]
    fn test_spanish_collator_orders_accents_with_base_letters() {
        init_logger();
        let collator = TermCollator::try_from("es").expect("Failed to create Spanish collator");
        // Under ordinal comparison "água" would sort after "zeta"; locale-aware
        // collation keeps it with the a's.
        assert_eq!(collator.compare("água", "zeta"), Ordering::Less);
        assert_eq!(collator.compare("API", "array"), Ordering::Less);
    }

    #[cfg(feature = "icu")]
    #[test]
    fn test_invalid_locale_rejected() {
        init_logger();
        let result = TermCollator::try_from("not a locale!!");
        assert!(result.is_err(), "Malformed locale strings should be rejected");
    }
}
