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

//! Search bar component
//!
//! Text input for the recipe filter.

use gtk4::{prelude::*, SearchEntry};

/// Search bar for filtering recipe cards
pub struct SearchBar {
    /// Root widget (search entry)
    widget: SearchEntry,
}

impl Default for SearchBar {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchBar {
    /// Creates the recipe filter input
    ///
    /// # Example
    /// ```no_run
    /// use recipe_board::ui::components::SearchBar;
    /// use gtk4::prelude::*;
    ///
    /// let search_bar = SearchBar::new();
    /// search_bar.widget().set_text("tomate");
    /// ```
    pub fn new() -> Self {
        let widget = SearchEntry::builder()
            .placeholder_text("Rechercher une recette...")
            .hexpand(true)
            .build();

        // Handlers listen on `changed`, which fires per keystroke;
        // `search-changed` would wait out the entry's search delay.
        Self { widget }
    }

    /// Returns the root widget for adding to parent container
    pub fn widget(&self) -> &SearchEntry {
        &self.widget
    }
}
