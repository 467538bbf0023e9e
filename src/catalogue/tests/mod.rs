//! Catalogue module tests
//!
//! Contains test suites for catalogue loading:
//! - Built-in recipes
//! - JSON catalogue files (valid, duplicate, malformed, missing)
//! - Ingredient line checking

#[cfg(test)]
mod catalogue_tests;
