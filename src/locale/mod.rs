// Language selection and localized content loading
//
// This module resolves the display language once at startup and validates
// localized content resources at the boundary.

pub mod content;

pub use content::{Language, LocaleContent, ProjectItem, SkillItem};
