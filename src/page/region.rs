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

//! Toggleable page region
//!
//! One parametrised type for the menu, the search overlay and the login
//! overlay. Each instance owns its panel handle, its two triggers and its
//! class name; nothing is shared between instances.

use crate::core::Region;
use crate::page::{document::View, error::PageError, layout::RegionLayout, Document};

/// A panel shown and hidden by its own pair of triggers
#[derive(Clone, Debug)]
pub struct ToggleRegion<E> {
    region: Region,
    element: E,
    open_trigger: E,
    close_trigger: E,
    class_name: String,
}

impl<E: Clone> ToggleRegion<E> {
    /// Resolves a region's handles from the page
    ///
    /// # Errors
    ///
    /// Returns `PageError::MissingElement` naming the first identifier
    /// (panel, then open trigger, then close trigger) that is absent.
    pub fn bind<D>(document: &D, region: Region, layout: &RegionLayout) -> Result<Self, PageError>
    where
        D: Document<Element = E>,
    {
        let lookup = |id: &str| {
            document
                .element_by_id(id)
                .ok_or_else(|| PageError::MissingElement { id: id.to_string() })
        };

        Ok(Self {
            region,
            element: lookup(&layout.region_id)?,
            open_trigger: lookup(&layout.open_id)?,
            close_trigger: lookup(&layout.close_id)?,
            class_name: layout.class_name.clone(),
        })
    }

    /// Which region this is
    pub fn region(&self) -> Region {
        self.region
    }

    /// The panel element
    pub fn element(&self) -> &E {
        &self.element
    }

    /// Control that shows the panel
    pub fn open_trigger(&self) -> &E {
        &self.open_trigger
    }

    /// Control that hides the panel
    pub fn close_trigger(&self) -> &E {
        &self.close_trigger
    }

    /// Class whose presence makes the panel visible
    pub fn class_name(&self) -> &str {
        &self.class_name
    }

    /// Shows the panel
    pub fn open<V: View<Element = E>>(&self, view: &V) {
        view.set_region_visible(self, true);
    }

    /// Hides the panel
    pub fn close<V: View<Element = E>>(&self, view: &V) {
        view.set_region_visible(self, false);
    }

    /// Whether the panel currently carries its visibility class
    pub fn is_open<D: Document<Element = E>>(&self, document: &D) -> bool {
        document.has_class(&self.element, &self.class_name)
    }
}
