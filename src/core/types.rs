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

//! src/core/types.rs
//!
//! Core type definitions for the recipe board
//!
//! This module defines the fundamental types used throughout the application:
//! - `Region`: The three toggleable panels (menu, search overlay, login overlay)
//! - `Ingredient`: A parsed ingredient line (quantity, unit, preposition, name)
//! - `Recipe`: A named recipe with ingredients and ordered steps
//! - `RecipeIn`: The raw catalogue entry before ingredient parsing
//!
//! None of these types know about GTK. Visibility state is never stored
//! here; it lives in the page.

use serde::Deserialize;
use std::fmt;

/// A toggleable panel on the page
///
/// Each region has its own open/close triggers and its own visibility
/// class. Regions never affect each other.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Region {
    /// Navigation menu
    Menu,
    /// Search overlay
    Search,
    /// Login overlay
    Login,
}

impl Region {
    /// All regions, in page order
    pub const ALL: [Region; 3] = [Region::Menu, Region::Search, Region::Login];
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Region::Menu => write!(f, "menu"),
            Region::Search => write!(f, "search"),
            Region::Login => write!(f, "login"),
        }
    }
}

/// A single parsed ingredient
///
/// # Example
/// ```ignore
/// // "350 g de Lentilles vertes"
/// let lentils = Ingredient {
///     quantity: 350.0,
///     unit: "g".to_string(),
///     preposition: "de ".to_string(),
///     name: "Lentilles vertes".to_string(),
/// };
/// assert_eq!(lentils.to_string(), "350 g de Lentilles vertes");
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Ingredient {
    /// Amount, e.g. 350.0 or 0.5
    pub quantity: f32,

    /// Unit of measure, empty for countable items ("1 oignon")
    pub unit: String,

    /// French partitive preposition: "", "de " or "d'"
    /// Always empty when `unit` is empty
    pub preposition: String,

    /// Ingredient name as written in the recipe
    pub name: String,
}

impl fmt::Display for Ingredient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.unit.is_empty() {
            write!(f, "{} {}", self.quantity, self.name)
        } else {
            write!(
                f,
                "{} {} {}{}",
                self.quantity, self.unit, self.preposition, self.name
            )
        }
    }
}

/// Raw catalogue entry, as stored in a catalogue file
///
/// Ingredients are still unparsed lines at this stage.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct RecipeIn {
    pub name: String,
    pub ingredients: Vec<String>,
    pub steps: Vec<String>,
}

/// A recipe ready to be rendered as a card
#[derive(Clone, Debug, PartialEq)]
pub struct Recipe {
    /// Unique name within a catalogue
    pub name: String,

    /// Parsed ingredients, in recipe order
    pub ingredients: Vec<Ingredient>,

    /// Preparation steps, in order
    pub steps: Vec<String>,
}

impl Recipe {
    /// Text placed in the card's summary element
    ///
    /// This is what the recipe filter matches against: the recipe name,
    /// then the ingredient names.
    pub fn summary(&self) -> String {
        if self.ingredients.is_empty() {
            return self.name.clone();
        }

        let names: Vec<&str> = self
            .ingredients
            .iter()
            .map(|ingredient| ingredient.name.as_str())
            .collect();

        format!("{}: {}", self.name, names.join(", "))
    }
}

impl fmt::Display for Recipe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
