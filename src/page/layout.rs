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

//! Page layout contract
//!
//! Every element identifier and class name the controller depends on.
//! Whoever builds the page (the GTK window, the memory page) must register
//! these identifiers before the controller binds.

use crate::core::Region;

/// Identifiers and visibility class for one toggleable region
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RegionLayout {
    /// Identifier of the panel itself
    pub region_id: String,
    /// Identifier of the control that shows the panel
    pub open_id: String,
    /// Identifier of the control that hides the panel
    pub close_id: String,
    /// Class whose presence makes the panel visible
    pub class_name: String,
}

impl RegionLayout {
    fn new(region_id: &str, open_id: &str, close_id: &str, class_name: &str) -> Self {
        Self {
            region_id: region_id.to_string(),
            open_id: open_id.to_string(),
            close_id: close_id.to_string(),
            class_name: class_name.to_string(),
        }
    }
}

/// Full page contract
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PageLayout {
    pub menu: RegionLayout,
    pub search: RegionLayout,
    pub login: RegionLayout,

    /// Text input the recipe filter reads
    pub search_input_id: String,
    /// Marker class on the input while it holds text
    pub touched_class: String,

    /// Container holding every recipe card
    pub recipes_id: String,
    /// Class carried by each card
    pub card_class: String,
    /// Class of the card's summary sub-element
    pub summary_class: String,
}

impl Default for PageLayout {
    fn default() -> Self {
        Self {
            menu: RegionLayout::new("nav-menu", "nav-toggle", "nav-close", "show-menu"),
            search: RegionLayout::new("search", "search-btn", "search-close", "show-search"),
            login: RegionLayout::new("login", "login-btn", "login-close", "show-login"),
            search_input_id: "clear-input".to_string(),
            touched_class: "clear-input--touched".to_string(),
            recipes_id: "all-recipes".to_string(),
            card_class: "recipe".to_string(),
            summary_class: "recipe__summary".to_string(),
        }
    }
}

impl PageLayout {
    /// Layout of one region
    pub fn region(&self, region: Region) -> &RegionLayout {
        match region {
            Region::Menu => &self.menu,
            Region::Search => &self.search,
            Region::Login => &self.login,
        }
    }

    /// Every identifier that must exist at bind time, in bind order
    pub fn required_ids(&self) -> Vec<&str> {
        let mut ids = Vec::with_capacity(11);
        for region in Region::ALL {
            let layout = self.region(region);
            ids.push(layout.region_id.as_str());
            ids.push(layout.open_id.as_str());
            ids.push(layout.close_id.as_str());
        }
        ids.push(self.search_input_id.as_str());
        ids.push(self.recipes_id.as_str());
        ids
    }
}
