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

//! Recipe catalogue
//!
//! The set of recipes rendered as cards on the board. A catalogue comes
//! either from the built-in seed recipes or from a JSON file:
//!
//! ```json
//! [
//!   {
//!     "name": "Tapenade",
//!     "ingredients": ["200g d'olive noir", "8 câpres"],
//!     "steps": ["Mixer assez fin."]
//!   }
//! ]
//! ```
//!
//! Loading parses every ingredient line, drops recipes whose name was
//! already seen, and sorts the result by name.

mod seed;

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{info, warn};

use crate::core::ingredient::{parse_ingredient, IngredientError};
use crate::core::types::{Recipe, RecipeIn};

pub use seed::builtin_entries;

/// Errors that can occur while loading a catalogue
#[derive(Debug, Error)]
pub enum CatalogueError {
    /// Catalogue file does not exist.
    #[error("Catalogue file not found: {0}")]
    NotFound(PathBuf),

    /// Path is not valid UTF-8 and cannot be tilde-expanded.
    #[error("Invalid path encoding: {0}")]
    InvalidPath(PathBuf),

    /// File content is not a JSON array of recipes.
    #[error("Malformed catalogue JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// An ingredient line was rejected by the parser.
    #[error("Recipe '{recipe}', ingredient {line}: {source}")]
    Ingredient {
        recipe: String,
        line: usize,
        #[source]
        source: IngredientError,
    },

    /// Generic I/O error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// One ingredient line that failed to parse
#[derive(Debug, PartialEq)]
pub struct IngredientFailure {
    /// Recipe the line belongs to
    pub recipe: String,
    /// 1-based position of the line in the recipe
    pub line: usize,
    /// The line as written
    pub raw: String,
    /// Why it was rejected
    pub error: IngredientError,
}

/// Ordered, de-duplicated set of recipes
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Catalogue {
    recipes: Vec<Recipe>,
}

impl Catalogue {
    /// The built-in recipes
    ///
    /// # Errors
    ///
    /// Only fails if a seed ingredient line stops parsing, which the test
    /// suite guards against.
    pub fn builtin() -> Result<Self, CatalogueError> {
        Self::from_entries(builtin_entries())
    }

    /// Loads a catalogue from a JSON file
    ///
    /// `~` at the start of the path is expanded to the home directory.
    ///
    /// # Errors
    ///
    /// * `CatalogueError::NotFound` - File does not exist
    /// * `CatalogueError::Json` - Content is not a recipe array
    /// * `CatalogueError::Ingredient` - An ingredient line is malformed
    pub fn load(path: &Path) -> Result<Self, CatalogueError> {
        let path = expand_path(path)?;
        info!("Loading catalogue from {}", path.display());
        Self::from_entries(read_entries(&path)?)
    }

    /// Loads `path` when given, the built-in recipes otherwise
    pub fn load_or_builtin(path: Option<&Path>) -> Result<Self, CatalogueError> {
        match path {
            Some(path) => Self::load(path),
            None => Self::builtin(),
        }
    }

    /// Builds a catalogue from raw entries
    ///
    /// Entries whose name duplicates an earlier entry are skipped with a
    /// warning. The result is sorted by name.
    ///
    /// # Errors
    ///
    /// Returns `CatalogueError::Ingredient` for the first malformed line.
    pub fn from_entries(entries: Vec<RecipeIn>) -> Result<Self, CatalogueError> {
        let mut seen = HashSet::new();
        let mut recipes = Vec::with_capacity(entries.len());

        for entry in entries {
            if !seen.insert(entry.name.clone()) {
                warn!("Recipe already exists, skipping: {}", entry.name);
                continue;
            }

            let ingredients = entry
                .ingredients
                .iter()
                .enumerate()
                .map(|(index, raw)| {
                    parse_ingredient(raw).map_err(|source| CatalogueError::Ingredient {
                        recipe: entry.name.clone(),
                        line: index + 1,
                        source,
                    })
                })
                .collect::<Result<Vec<_>, _>>()?;

            recipes.push(Recipe {
                name: entry.name,
                ingredients,
                steps: entry.steps.into_iter().filter(|step| !step.is_empty()).collect(),
            });
        }

        recipes.sort_by(|a, b| a.name.cmp(&b.name));

        Ok(Self { recipes })
    }

    /// All recipes, sorted by name
    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    /// Number of recipes
    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    /// Whether the catalogue holds no recipe
    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    /// Finds a recipe by name, ignoring case
    pub fn find(&self, name: &str) -> Option<&Recipe> {
        let wanted = name.to_lowercase();
        self.recipes
            .iter()
            .find(|recipe| recipe.name.to_lowercase() == wanted)
    }

    /// Card summaries, in display order
    pub fn summaries(&self) -> Vec<String> {
        self.recipes.iter().map(Recipe::summary).collect()
    }
}

/// Parses every ingredient line of a catalogue file and reports failures
///
/// Unlike [`Catalogue::load`], this does not stop at the first bad line.
///
/// # Errors
///
/// Fails only when the file itself cannot be read or decoded.
pub fn check_file(path: &Path) -> Result<(usize, Vec<IngredientFailure>), CatalogueError> {
    let path = expand_path(path)?;
    let entries = read_entries(&path)?;
    Ok(check_entries(&entries))
}

/// Returns the number of lines checked and every line that failed
pub fn check_entries(entries: &[RecipeIn]) -> (usize, Vec<IngredientFailure>) {
    let mut checked = 0;
    let mut failures = Vec::new();

    for entry in entries {
        for (index, raw) in entry.ingredients.iter().enumerate() {
            checked += 1;
            if let Err(error) = parse_ingredient(raw) {
                failures.push(IngredientFailure {
                    recipe: entry.name.clone(),
                    line: index + 1,
                    raw: raw.clone(),
                    error,
                });
            }
        }
    }

    (checked, failures)
}

fn expand_path(path: &Path) -> Result<PathBuf, CatalogueError> {
    let raw = path
        .to_str()
        .ok_or_else(|| CatalogueError::InvalidPath(path.to_path_buf()))?;
    Ok(PathBuf::from(shellexpand::tilde(raw).as_ref()))
}

fn read_entries(path: &Path) -> Result<Vec<RecipeIn>, CatalogueError> {
    if !path.exists() {
        return Err(CatalogueError::NotFound(path.to_path_buf()));
    }

    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

#[cfg(test)]
mod tests;
