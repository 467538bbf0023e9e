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

//! src/settings.rs
//!
//! Runtime settings
//!
//! Where the catalogue comes from, in priority order:
//! 1. The `--catalogue` flag
//! 2. The `RECIPE_BOARD_CATALOGUE` environment variable
//! 3. The built-in catalogue

use std::env;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::catalogue::{Catalogue, CatalogueError};
use crate::page::PageLayout;

/// Environment variable naming a catalogue file
pub const CATALOGUE_ENV: &str = "RECIPE_BOARD_CATALOGUE";

/// Resolved runtime settings
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Settings {
    /// Catalogue file, `None` for the built-in catalogue
    pub catalogue: Option<PathBuf>,
    /// Element identifiers and classes of the page
    pub layout: PageLayout,
}

impl Settings {
    /// Resolves settings from the flag value and the process environment
    pub fn resolve(flag: Option<PathBuf>) -> Self {
        Self::from_sources(flag, env::var(CATALOGUE_ENV).ok())
    }

    /// Resolves settings from explicit sources
    ///
    /// An empty environment value counts as unset.
    ///
    /// # Example
    /// ```
    /// use recipe_board::settings::Settings;
    /// use std::path::PathBuf;
    ///
    /// let settings = Settings::from_sources(None, Some("~/recipes.json".to_string()));
    /// assert_eq!(settings.catalogue, Some(PathBuf::from("~/recipes.json")));
    /// ```
    pub fn from_sources(flag: Option<PathBuf>, env_value: Option<String>) -> Self {
        let catalogue = match flag {
            Some(path) => {
                debug!("Catalogue from --catalogue: {}", path.display());
                Some(path)
            }
            None => env_value.filter(|value| !value.is_empty()).map(|value| {
                debug!("Catalogue from {}: {}", CATALOGUE_ENV, value);
                PathBuf::from(value)
            }),
        };

        if catalogue.is_none() {
            info!("No catalogue file configured, using built-in recipes");
        }

        Self {
            catalogue,
            layout: PageLayout::default(),
        }
    }

    /// Catalogue file, if any
    pub fn catalogue_path(&self) -> Option<&Path> {
        self.catalogue.as_deref()
    }

    /// Loads the configured catalogue
    pub fn load_catalogue(&self) -> Result<Catalogue, CatalogueError> {
        Catalogue::load_or_builtin(self.catalogue_path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_wins_over_environment() {
        let settings = Settings::from_sources(
            Some(PathBuf::from("flag.json")),
            Some("env.json".to_string()),
        );
        assert_eq!(settings.catalogue, Some(PathBuf::from("flag.json")));
    }

    #[test]
    fn test_environment_used_without_flag() {
        let settings = Settings::from_sources(None, Some("env.json".to_string()));
        assert_eq!(settings.catalogue_path(), Some(Path::new("env.json")));
    }

    #[test]
    fn test_empty_environment_means_builtin() {
        let settings = Settings::from_sources(None, Some(String::new()));
        assert_eq!(settings.catalogue, None);

        let catalogue = settings.load_catalogue().unwrap();
        assert_eq!(catalogue.len(), 3);
    }

    #[test]
    fn test_default_layout() {
        let settings = Settings::from_sources(None, None);
        assert_eq!(settings.layout, PageLayout::default());
    }
}
