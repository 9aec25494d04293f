//! Language resolution and schema-validated localized content.
//!
//! The display language is explicit configuration resolved once at startup and
//! passed down, never a mutable global: [`Language::resolve`] combines a
//! stored preference with the platform's language tag and falls back to
//! Spanish.
//!
//! Localized content (skills, certificates, projects) arrives as a JSON
//! resource per language. Instead of trusting its shape at every call site,
//! [`LocaleContent::from_json`] validates it once at the boundary; a document
//! that does not match the schema fails with a `Schema` error and never
//! reaches rendering.

use serde::{Deserialize, Serialize};

use crate::Result;

/// A display language supported by the localized content resources.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// Spanish, the fallback language.
    Es,
    /// English.
    En,
}

impl Language {
    /// The language tag used in resource names and persisted preferences.
    pub fn tag(&self) -> &'static str {
        match self {
            Language::Es => "es",
            Language::En => "en",
        }
    }

    /// Parses a supported language tag; unknown tags yield `None`.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "es" => Some(Language::Es),
            "en" => Some(Language::En),
            _ => None,
        }
    }

    /// Resolves the display language from an optional stored preference and
    /// an optional platform language tag (e.g. `"en-US"`).
    ///
    /// A stored preference naming a supported language always wins. Otherwise
    /// the platform tag's primary subtag is consulted, and anything that is
    /// not English falls back to Spanish.
    pub fn resolve(stored: Option<&str>, platform_tag: Option<&str>) -> Self {
        if let Some(lang) = stored.and_then(Language::from_tag) {
            return lang;
        }
        let primary = platform_tag
            .and_then(|tag| tag.split('-').next())
            .unwrap_or("");
        if primary == "en" {
            Language::En
        } else {
            Language::Es
        }
    }
}

impl Default for Language {
    fn default() -> Self {
        Language::Es
    }
}

/// A named skill with its expandable description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillItem {
    pub name: String,
    pub description: String,
}

/// A project card: title, description, and its technology tags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectItem {
    pub title: String,
    pub description: String,
    pub technologies: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillsSection {
    pub items: Vec<SkillItem>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CertificatesSection {
    pub items: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectsSection {
    pub items: Vec<ProjectItem>,
}

/// The typed shape of one language's content resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocaleContent {
    pub skills: SkillsSection,
    pub certificates: CertificatesSection,
    pub projects: ProjectsSection,
}

impl LocaleContent {
    /// Deserializes and validates one language's content resource.
    ///
    /// # Errors
    ///
    /// Returns a `Schema` error when the document is not valid JSON or does
    /// not match the expected shape.
    pub fn from_json(json: &str) -> Result<Self> {
        let content: LocaleContent = serde_json::from_str(json)?;
        log::debug!(
            "Loaded locale content: {} skills, {} certificates, {} projects",
            content.skills.items.len(),
            content.certificates.items.len(),
            content.projects.items.len()
        );
        Ok(content)
    }
}
