//! Page module tests
//!
//! Contains test suites for the page abstraction:
//! - Context binding and fail-fast on missing elements
//! - Toggle region behaviour against the memory page
//! - Memory page document queries

#[cfg(test)]
mod context_tests;
