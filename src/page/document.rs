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

//! Document and View seams
//!
//! The controller never touches widgets directly. It reads the page
//! through [`Document`] and mutates it through [`View`]. The GTK window
//! and the headless memory page both implement the pair.
//!
//! # Example
//!
//! ```
//! use recipe_board::page::{Document, MemoryPage, PageLayout};
//!
//! let layout = PageLayout::default();
//! let page = MemoryPage::render(&layout, &["Tomato Soup".to_string()]);
//!
//! assert!(page.element_by_id("nav-menu").is_some());
//! assert!(page.element_by_id("no-such-id").is_none());
//! ```

use crate::page::region::ToggleRegion;

/// Read access to the page
pub trait Document {
    /// Handle to one element of the page
    type Element: Clone;

    /// Looks up an element by its registered identifier
    fn element_by_id(&self, id: &str) -> Option<Self::Element>;

    /// Every descendant of `container` carrying `class`, in document order
    fn elements_with_class(&self, container: &Self::Element, class: &str) -> Vec<Self::Element>;

    /// Whether `element` currently carries `class`
    fn has_class(&self, element: &Self::Element, class: &str) -> bool;

    /// Visible text of `element` and its descendants
    fn text_content(&self, element: &Self::Element) -> String;

    /// Current value of a text input
    fn input_value(&self, element: &Self::Element) -> String;

    /// First descendant of `element` carrying `class`
    fn first_with_class(&self, element: &Self::Element, class: &str) -> Option<Self::Element> {
        self.elements_with_class(element, class).into_iter().next()
    }
}

/// Write access to the page
///
/// Operations are idempotent: setting a state the element already has
/// is a no-op as far as the page is concerned.
pub trait View: Document {
    /// Adds or removes a class on an element
    fn set_class(&self, element: &Self::Element, class: &str, present: bool);

    /// Shows or hides a single card
    fn set_card_visible(&self, card: &Self::Element, visible: bool);

    /// Shows or hides a region by toggling its visibility class
    fn set_region_visible(&self, region: &ToggleRegion<Self::Element>, visible: bool) {
        self.set_class(region.element(), region.class_name(), visible);
    }
}
