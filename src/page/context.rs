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

//! Page context
//!
//! Every element handle the controller needs, resolved once at startup.
//! Binding fails on the first missing identifier, so a misconfigured page
//! never reaches the event loop.

use crate::core::Region;
use crate::page::{error::PageError, layout::PageLayout, region::ToggleRegion, Document};

/// Resolved handles for one page
#[derive(Clone, Debug)]
pub struct PageContext<E> {
    menu: ToggleRegion<E>,
    search: ToggleRegion<E>,
    login: ToggleRegion<E>,
    search_input: E,
    recipe_container: E,
    layout: PageLayout,
}

impl<E: Clone> PageContext<E> {
    /// Resolves every handle named by `layout`
    ///
    /// Lookup order follows [`PageLayout::required_ids`].
    ///
    /// # Errors
    ///
    /// Returns `PageError::MissingElement` for the first identifier the
    /// document does not contain.
    pub fn bind<D>(document: &D, layout: PageLayout) -> Result<Self, PageError>
    where
        D: Document<Element = E>,
    {
        let menu = ToggleRegion::bind(document, Region::Menu, &layout.menu)?;
        let search = ToggleRegion::bind(document, Region::Search, &layout.search)?;
        let login = ToggleRegion::bind(document, Region::Login, &layout.login)?;

        let search_input = document
            .element_by_id(&layout.search_input_id)
            .ok_or_else(|| PageError::MissingElement {
                id: layout.search_input_id.clone(),
            })?;

        let recipe_container = document
            .element_by_id(&layout.recipes_id)
            .ok_or_else(|| PageError::MissingElement {
                id: layout.recipes_id.clone(),
            })?;

        Ok(Self {
            menu,
            search,
            login,
            search_input,
            recipe_container,
            layout,
        })
    }

    /// Handles of one region
    pub fn region(&self, region: Region) -> &ToggleRegion<E> {
        match region {
            Region::Menu => &self.menu,
            Region::Search => &self.search,
            Region::Login => &self.login,
        }
    }

    /// All three regions, in page order
    pub fn regions(&self) -> [&ToggleRegion<E>; 3] {
        [&self.menu, &self.search, &self.login]
    }

    /// The filter's text input
    pub fn search_input(&self) -> &E {
        &self.search_input
    }

    /// The container holding the recipe cards
    pub fn recipe_container(&self) -> &E {
        &self.recipe_container
    }

    /// Layout the context was bound with
    pub fn layout(&self) -> &PageLayout {
        &self.layout
    }
}
