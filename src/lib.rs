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

//! Recipe Board
//!
//! A GTK4 recipe board: a navigation menu, a search overlay and a login
//! overlay that open and close independently, and a list of recipe cards
//! filtered as the user types.
//!
//! # Features
//!
//! - **Toggle Regions:** Each panel is shown by adding a single CSS class
//! - **Live Filtering:** Case-insensitive substring match on every keystroke
//! - **Fail-Fast Binding:** Every page element is resolved once at startup
//! - **Headless Page:** The same controller runs against an in-memory page
//! - **Catalogue Files:** Recipes loaded from JSON, with parsed ingredients
//!
//! # Architecture
//!
//! - **`core`:** Business logic (types, ingredient parser, match rule)
//! - **`page`:** Document/View traits, page context, memory page
//! - **`catalogue`:** Loading, de-duplicating and checking recipes
//! - **`settings`:** Where the catalogue comes from
//! - **`ui`:** GTK4 GUI components (MVC pattern)
//!
//! # Examples
//!
//! ## Filtering cards headlessly
//!
//! ```
//! use recipe_board::page::{MemoryPage, PageLayout};
//! use recipe_board::ui::Controller;
//!
//! let layout = PageLayout::default();
//! let summaries = vec!["Tomato Soup".to_string(), "Garlic Bread".to_string()];
//! let controller = Controller::bind(MemoryPage::render(&layout, &summaries), layout.clone())?;
//!
//! let outcome = controller.filter_recipes("tomato");
//! assert_eq!(outcome.visible, 1);
//! assert_eq!(controller.page().visible_summaries(&layout), vec!["Tomato Soup"]);
//! # Ok::<(), recipe_board::page::PageError>(())
//! ```
//!
//! ## Parsing an ingredient line
//!
//! ```
//! use recipe_board::core::parse_ingredient;
//!
//! let salmon = parse_ingredient("1,5g de saumon fumé")?;
//! assert_eq!(salmon.quantity, 1.5);
//! assert_eq!(salmon.name, "saumon fumé");
//! # Ok::<(), recipe_board::core::IngredientError>(())
//! ```

pub mod catalogue;
pub mod core;
pub mod page;
pub mod settings;
pub mod ui;

pub use catalogue::{Catalogue, CatalogueError};
pub use core::{Ingredient, Recipe, Region};
pub use page::{PageContext, PageError, PageLayout};
pub use settings::Settings;
