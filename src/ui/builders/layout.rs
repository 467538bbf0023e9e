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

//! Layout builder
//!
//! Creates the page widgets and registers each one in a `gtk4::Builder`
//! under the identifier [`PageLayout`] gives it, so the controller can
//! resolve them exactly like elements of a document.
//!
//! ```text
//! Overlay
//!   ├─ ScrolledWindow
//!   │    └─ #all-recipes (cards)
//!   ├─ #nav-menu   (links, #nav-close)
//!   ├─ #search     (#clear-input, #search-close)
//!   └─ #login      (fields, #login-close)
//! ```

use gtk4::{
    prelude::*, Align, Box as GtkBox, Builder, Button, Entry, Label, Orientation, Overlay,
    PasswordEntry, ScrolledWindow,
};

use crate::catalogue::Catalogue;
use crate::page::{PageLayout, RegionLayout};
use crate::ui::components::{RecipeCard, SearchBar};

/// Navigation entries shown in the menu panel
const MENU_ENTRIES: [&str; 2] = ["Accueil", "Recettes"];

/// Creates an overlay panel with its close trigger
///
/// The panel starts hidden; the controller shows it by adding the
/// region's class.
fn build_region_panel(builder: &Builder, region: &RegionLayout, halign: Align) -> GtkBox {
    let panel = GtkBox::builder()
        .orientation(Orientation::Vertical)
        .spacing(10)
        .halign(halign)
        .valign(Align::Start)
        .margin_top(10)
        .margin_start(10)
        .margin_end(10)
        .visible(false)
        .build();
    panel.add_css_class("region");
    builder.expose_object(&region.region_id, &panel);

    let close_button = Button::builder()
        .icon_name("window-close-symbolic")
        .halign(Align::End)
        .tooltip_text("Fermer")
        .build();
    close_button.add_css_class("flat");
    builder.expose_object(&region.close_id, &close_button);
    panel.append(&close_button);

    panel
}

fn build_menu(builder: &Builder, layout: &PageLayout) -> GtkBox {
    let panel = build_region_panel(builder, &layout.menu, Align::Start);

    for entry in MENU_ENTRIES {
        let label = Label::builder().label(entry).xalign(0.0).build();
        label.add_css_class("nav__link");
        panel.append(&label);
    }

    panel
}

fn build_search(builder: &Builder, layout: &PageLayout) -> GtkBox {
    let panel = build_region_panel(builder, &layout.search, Align::Fill);

    let search_bar = SearchBar::new();
    builder.expose_object(&layout.search_input_id, search_bar.widget());
    panel.append(search_bar.widget());

    panel
}

fn build_login(builder: &Builder, layout: &PageLayout) -> GtkBox {
    let panel = build_region_panel(builder, &layout.login, Align::End);

    let title = Label::builder().label("Connexion").xalign(0.0).build();
    title.add_css_class("title-3");
    panel.append(&title);

    let email = Entry::builder().placeholder_text("Adresse e-mail").build();
    panel.append(&email);

    let password = PasswordEntry::builder()
        .placeholder_text("Mot de passe")
        .show_peek_icon(true)
        .build();
    panel.append(&password);

    panel
}

/// Builds the recipe container with one card per recipe
fn build_recipes(builder: &Builder, layout: &PageLayout, catalogue: &Catalogue) -> ScrolledWindow {
    let container = GtkBox::new(Orientation::Vertical, 10);
    container.set_margin_start(10);
    container.set_margin_end(10);
    container.set_margin_bottom(10);
    builder.expose_object(&layout.recipes_id, &container);

    for recipe in catalogue.recipes() {
        let card = RecipeCard::new(recipe, layout);
        container.append(card.widget());
    }

    ScrolledWindow::builder()
        .hexpand(true)
        .vexpand(true)
        .child(&container)
        .build()
}

/// Builds the main page layout
///
/// Every widget named in `layout` is registered in `builder`, except the
/// open triggers, which live in the header bar.
///
/// # Returns
///
/// The root overlay to set as window content
pub fn build_main_layout(builder: &Builder, layout: &PageLayout, catalogue: &Catalogue) -> Overlay {
    let overlay = Overlay::new();
    overlay.set_child(Some(&build_recipes(builder, layout, catalogue)));

    overlay.add_overlay(&build_menu(builder, layout));
    overlay.add_overlay(&build_search(builder, layout));
    overlay.add_overlay(&build_login(builder, layout));

    overlay
}
