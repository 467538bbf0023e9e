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

//! Recipe card component
//!
//! One card per recipe in the recipe container. The card carries the
//! layout's card class and exposes a summary label carrying the summary
//! class; the recipe filter reads that label's text.
//!
//! # Layout
//!
//! ```text
//! ┌──────────────────────────────────────────────────┐
//! │ Tapenade : la meilleure recette: olive noir, ... │  ← .recipe__summary
//! │ ▸ Ingrédients et préparation                     │
//! └──────────────────────────────────────────────────┘
//! ```

use gtk4::{pango::WrapMode::WordChar, prelude::*, Box as GtkBox, Expander, Label, Orientation};

use crate::core::types::Recipe;
use crate::page::PageLayout;

/// A rendered recipe card
pub struct RecipeCard {
    /// Root widget (carries the card class)
    widget: GtkBox,
}

impl RecipeCard {
    /// Renders `recipe` as a card following `layout`'s class names
    pub fn new(recipe: &Recipe, layout: &PageLayout) -> Self {
        let widget = GtkBox::builder()
            .orientation(Orientation::Vertical)
            .spacing(6)
            .margin_start(10)
            .margin_end(10)
            .margin_top(5)
            .margin_bottom(5)
            .build();
        widget.add_css_class(&layout.card_class);

        let summary_label = Label::builder()
            .label(recipe.summary())
            .xalign(0.0)
            .wrap(true)
            .wrap_mode(WordChar)
            .build();
        summary_label.add_css_class(&layout.summary_class);
        widget.append(&summary_label);

        let details = Expander::builder()
            .label("Ingrédients et préparation")
            .child(&Self::build_details(recipe))
            .build();
        widget.append(&details);

        Self { widget }
    }

    /// Ingredient list followed by numbered steps
    fn build_details(recipe: &Recipe) -> GtkBox {
        let details = GtkBox::new(Orientation::Vertical, 4);
        details.set_margin_start(12);

        for ingredient in &recipe.ingredients {
            let label = Label::builder()
                .label(format!("• {}", ingredient))
                .xalign(0.0)
                .build();
            details.append(&label);
        }

        for (index, step) in recipe.steps.iter().enumerate() {
            let label = Label::builder()
                .label(format!("{}. {}", index + 1, step))
                .xalign(0.0)
                .wrap(true)
                .wrap_mode(WordChar)
                .build();
            label.add_css_class("recipe__step");
            details.append(&label);
        }

        details
    }

    /// Returns the root widget for adding to the recipe container
    pub fn widget(&self) -> &GtkBox {
        &self.widget
    }
}
