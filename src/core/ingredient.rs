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

//! src/core/ingredient.rs
//!
//! Ingredient line parser
//!
//! Turns free-form French ingredient lines into structured [`Ingredient`]s:
//!
//! ```text
//! "350 g de Lentilles vertes"  →  350.0 | "g"      | "de " | "Lentilles vertes"
//! "0.5 gousse ail"             →  0.5   | "gousse" | "d'"  | "ail"
//! "1,5g de saumon fumé"        →  1.5   | "g"      | "de " | "saumon fumé"
//! "1 oignon"                   →  1.0   | ""       | ""    | "oignon"
//! ```
//!
//! # Grammar
//! A line is: integer part, optional `,`/`.` decimal part, optional unit
//! (the shortest word followed by a space), optional explicit preposition,
//! then the name. When a unit is present but no preposition is written,
//! one is inferred from the first letter of the name.

use regex::Regex;
use std::sync::OnceLock;
use thiserror::Error;

use crate::core::types::Ingredient;

/// Ingredient line pattern
///
/// Groups: 1 = integer part, 2 = decimal part, 3 = unit,
/// 4 = explicit preposition, 5 = name.
const INGREDIENT_PATTERN: &str =
    r"^([0-9]+)[,.]?([0-9]+)?[ ]?(?:(.*?)[ ])?[ ]?(de |d')?(.*)$";

/// Letters that take the elided preposition "d'"
const ELIDING_LETTERS: [char; 7] = ['a', 'e', 'i', 'o', 'u', 'y', 'h'];

/// Errors raised while parsing an ingredient line
#[derive(Debug, Error, PartialEq)]
pub enum IngredientError {
    /// The line does not start with a quantity
    #[error("Ingredient line does not match '<quantity> [unit] [de |d']<name>': {0:?}")]
    NoMatch(String),

    /// The quantity digits could not be read as a number
    #[error("Invalid quantity in ingredient line: {0:?}")]
    InvalidQuantity(String),

    /// Nothing left after the quantity and unit
    #[error("No ingredient name found in: {0:?}")]
    MissingName(String),
}

fn ingredient_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| {
        // INGREDIENT_PATTERN is a literal that always compiles
        #[allow(clippy::expect_used)]
        Regex::new(INGREDIENT_PATTERN).expect("ingredient pattern is valid")
    })
}

/// Picks "d'" or "de " for a name written without a preposition
pub fn infer_preposition(name: &str) -> &'static str {
    if ELIDING_LETTERS.iter().any(|letter| name.starts_with(*letter)) {
        "d'"
    } else {
        "de "
    }
}

/// Parses a single ingredient line
///
/// # Arguments
/// * `raw` - Line as written in the recipe (e.g. `"200g d'olive noir"`)
///
/// # Returns
/// The structured ingredient, or an [`IngredientError`] describing why
/// the line was rejected.
///
/// # Example
/// ```
/// use recipe_board::core::ingredient::parse_ingredient;
///
/// let garlic = parse_ingredient("2 gousse d'ail").unwrap();
/// assert_eq!(garlic.unit, "gousse");
/// assert_eq!(garlic.preposition, "d'");
/// assert_eq!(garlic.name, "ail");
/// ```
pub fn parse_ingredient(raw: &str) -> Result<Ingredient, IngredientError> {
    let caps = ingredient_regex()
        .captures(raw)
        .ok_or_else(|| IngredientError::NoMatch(raw.to_string()))?;

    let unit = caps.get(3).map_or("", |m| m.as_str());

    let name = caps.get(5).map_or("", |m| m.as_str());
    if name.trim().is_empty() {
        return Err(IngredientError::MissingName(raw.to_string()));
    }

    let preposition = if unit.is_empty() {
        ""
    } else {
        caps.get(4)
            .map_or_else(|| infer_preposition(name), |m| m.as_str())
    };

    let integer_part = caps
        .get(1)
        .map(|m| m.as_str())
        .ok_or_else(|| IngredientError::NoMatch(raw.to_string()))?;

    let quantity_text = match caps.get(2) {
        Some(decimal_part) => format!("{}.{}", integer_part, decimal_part.as_str()),
        None => integer_part.to_string(),
    };

    let quantity = quantity_text
        .parse::<f32>()
        .map_err(|_| IngredientError::InvalidQuantity(raw.to_string()))?;

    Ok(Ingredient {
        quantity,
        unit: unit.to_string(),
        preposition: preposition.to_string(),
        name: name.to_string(),
    })
}
