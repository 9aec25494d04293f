// Utility functions and helpers
//
// This module provides shared helpers that do not belong to any single
// pipeline stage, currently locale-aware collation.

pub mod collation;

pub use collation::TermCollator;
