//! UI module tests
//!
//! Controller logic is exercised against the headless memory page, so
//! none of these tests need a display server.

#[cfg(test)]
mod controller_tests;
