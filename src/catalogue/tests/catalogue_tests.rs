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

use std::{fs, path::{Path, PathBuf}};
use tempfile::TempDir;

use crate::catalogue::{check_entries, check_file, expand_path, Catalogue, CatalogueError};
use crate::core::{types::RecipeIn, IngredientError};

/// Helper: Writes a catalogue file with the given JSON content
fn create_catalogue_file(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("recipes.json");
    fs::write(&path, content).unwrap();
    (temp_dir, path)
}

fn entry(name: &str, ingredients: &[&str]) -> RecipeIn {
    RecipeIn {
        name: name.to_string(),
        ingredients: ingredients.iter().map(|s| s.to_string()).collect(),
        steps: vec!["Servir.".to_string()],
    }
}

#[test]
fn test_builtin_catalogue_parses() {
    let catalogue = Catalogue::builtin().unwrap();
    assert_eq!(catalogue.len(), 3, "Should ship 3 built-in recipes");
}

#[test]
fn test_builtin_catalogue_is_sorted_by_name() {
    let catalogue = Catalogue::builtin().unwrap();
    let names: Vec<&str> = catalogue.recipes().iter().map(|r| r.name.as_str()).collect();

    assert_eq!(
        names,
        vec![
            "Gratin de gnocchi au saumon et épinards",
            "Saucisses aux lentilles",
            "Tapenade : la meilleure recette",
        ]
    );
}

#[test]
fn test_builtin_tapenade_ingredients() {
    let catalogue = Catalogue::builtin().unwrap();
    let tapenade = catalogue.find("tapenade : la meilleure recette").unwrap();

    let rendered: Vec<String> = tapenade.ingredients.iter().map(|i| i.to_string()).collect();
    assert_eq!(
        rendered,
        vec![
            "200 g d'olive noir",
            "8 câpres",
            "5 filet d'anchois à l'huile",
            "1 gousse d'ail",
        ]
    );
}

#[test]
fn test_load_catalogue_file() {
    let (_temp_dir, path) = create_catalogue_file(
        r#"[
            {"name": "Soupe", "ingredients": ["1 oignon", "2 tomate"], "steps": ["Mixer"]},
            {"name": "Crêpes", "ingredients": ["250 g de farine"], "steps": ["Mélanger", ""]}
        ]"#,
    );

    let catalogue = Catalogue::load(&path).unwrap();
    assert_eq!(catalogue.len(), 2);
    assert_eq!(catalogue.recipes()[0].name, "Crêpes");
    assert_eq!(catalogue.recipes()[0].steps, vec!["Mélanger"], "Empty steps are dropped");
    assert_eq!(catalogue.summaries()[1], "Soupe: oignon, tomate");
}

#[test]
fn test_load_or_builtin_without_path() {
    let catalogue = Catalogue::load_or_builtin(None).unwrap();
    assert_eq!(catalogue, Catalogue::builtin().unwrap());
}

#[test]
fn test_duplicate_names_are_skipped() {
    let catalogue = Catalogue::from_entries(vec![
        entry("Soupe", &["1 oignon"]),
        entry("Soupe", &["2 poireau"]),
    ])
    .unwrap();

    assert_eq!(catalogue.len(), 1);
    assert_eq!(catalogue.recipes()[0].ingredients[0].name, "oignon", "First entry wins");
}

#[test]
fn test_malformed_ingredient_is_rejected() {
    let result = Catalogue::from_entries(vec![entry("Soupe", &["1 oignon", "du sel"])]);

    match result {
        Err(CatalogueError::Ingredient { recipe, line, source }) => {
            assert_eq!(recipe, "Soupe");
            assert_eq!(line, 2);
            assert!(matches!(source, IngredientError::NoMatch(_)));
        }
        other => panic!("Expected ingredient error, got {:?}", other),
    }
}

#[test]
fn test_missing_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("absent.json");

    let result = Catalogue::load(&path);
    assert!(matches!(result, Err(CatalogueError::NotFound(_))));
}

#[test]
fn test_malformed_json() {
    let (_temp_dir, path) = create_catalogue_file(r#"{"name": "not an array"}"#);

    let result = Catalogue::load(&path);
    assert!(matches!(result, Err(CatalogueError::Json(_))));
}

#[test]
fn test_find_is_case_insensitive() {
    let catalogue = Catalogue::builtin().unwrap();
    assert!(catalogue.find("SAUCISSES AUX LENTILLES").is_some());
    assert!(catalogue.find("Saucisses").is_none(), "Find is exact, not substring");
}

#[test]
fn test_check_entries_reports_every_failure() {
    let entries = vec![
        entry("Soupe", &["1 oignon", "du sel", "12"]),
        entry("Salade", &["une laitue"]),
    ];

    let (checked, failures) = check_entries(&entries);

    assert_eq!(checked, 4);
    assert_eq!(failures.len(), 3);
    assert_eq!(failures[0].recipe, "Soupe");
    assert_eq!(failures[0].line, 2);
    assert_eq!(failures[1].raw, "12");
    assert!(matches!(failures[1].error, IngredientError::MissingName(_)));
    assert_eq!(failures[2].recipe, "Salade");
}

#[test]
fn test_check_file() {
    let (_temp_dir, path) = create_catalogue_file(
        r#"[{"name": "Soupe", "ingredients": ["1 oignon", "sel"], "steps": []}]"#,
    );

    let (checked, failures) = check_file(&path).unwrap();
    assert_eq!(checked, 2);
    assert_eq!(failures.len(), 1);
}

#[test]
fn test_tilde_expanded_in_catalogue_path() {
    let expanded = expand_path(Path::new("~/x.json")).unwrap();

    assert_eq!(expanded, PathBuf::from(shellexpand::tilde("~/x.json").as_ref()));
    assert!(!expanded.starts_with("~"), "Tilde should be replaced by the home directory");
    assert!(expanded.ends_with("x.json"));
}

#[test]
fn test_absolute_path_left_alone() {
    let expanded = expand_path(Path::new("/srv/recipes.json")).unwrap();
    assert_eq!(expanded, PathBuf::from("/srv/recipes.json"));
}

#[cfg(unix)]
#[test]
fn test_non_utf8_path_rejected() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    let path = Path::new(OsStr::from_bytes(b"/tmp/recettes-\xff.json"));

    match expand_path(path) {
        Err(CatalogueError::InvalidPath(rejected)) => assert_eq!(rejected, path),
        other => panic!("Expected InvalidPath error, got: {:?}", other),
    }

    match Catalogue::load(path) {
        Err(CatalogueError::InvalidPath(_)) => {}
        other => panic!("Expected InvalidPath from load, got: {:?}", other),
    }
}
