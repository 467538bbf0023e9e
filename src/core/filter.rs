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

//! src/core/filter.rs
//!
//! Recipe search matching
//!
//! The match rule is deliberately plain: uppercase both sides and look for
//! the query as one contiguous substring of the summary. No tokenising,
//! no ranking, no locale-aware folding. The empty query matches everything.

/// Returns true when `query` appears anywhere in `summary`, ignoring case
///
/// # Example
/// ```
/// use recipe_board::core::filter::summary_matches;
///
/// assert!(summary_matches("Tomato Soup", "tomato"));
/// assert!(summary_matches("Garlic Bread", ""));
/// assert!(!summary_matches("Garlic Bread", "tomato"));
/// ```
pub fn summary_matches(summary: &str, query: &str) -> bool {
    summary.to_uppercase().contains(&query.to_uppercase())
}

/// Whether the search input should carry the touched marker
///
/// Derived from the current value alone, never from history.
pub fn input_touched(query: &str) -> bool {
    !query.is_empty()
}

/// Result of one filter pass over the recipe cards
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct FilterOutcome {
    /// Cards left visible
    pub visible: usize,
    /// Cards hidden by the query
    pub hidden: usize,
}

impl FilterOutcome {
    /// Records one card's result
    pub fn record(&mut self, shown: bool) {
        if shown {
            self.visible += 1;
        } else {
            self.hidden += 1;
        }
    }

    /// Total number of cards scanned
    pub fn total(&self) -> usize {
        self.visible + self.hidden
    }
}
