//! UI Components
//!
//! Reusable GTK4 widgets for the recipe board.
//!
//! # Components
//!
//! - `recipe_card.rs` - One filterable recipe card
//! - `search_bar.rs` - Recipe filter input

mod recipe_card;
mod search_bar;

pub use recipe_card::RecipeCard;
pub use search_bar::SearchBar;
