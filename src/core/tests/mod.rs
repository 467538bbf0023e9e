//! Core module tests
//!
//! Contains test suites for core functionality:
//! - Type tests (Region, Ingredient, Recipe summaries)
//! - Ingredient line parsing tests
//! - Summary matching tests
