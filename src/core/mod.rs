// Copyright 2025 Eric Jingryd (tidynest@proton.me)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! src/core/mod.rs
//!
//! Core business logic module
//!
//! This module contains the fundamental data structures and rules of the
//! recipe board:
//! - Type definitions for regions, recipes and ingredients
//! - Ingredient line parsing
//! - The case-insensitive summary match used by the recipe filter
//!
//! All logic here is isolated from UI concerns to enable unit testing
//! without requiring a display server.

pub mod filter;
pub mod ingredient;
pub mod types;

pub use filter::{input_touched, summary_matches, FilterOutcome};
pub use ingredient::{parse_ingredient, IngredientError};
pub use types::*;

#[cfg(test)]
mod tests;
