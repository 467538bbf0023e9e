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

//! Header bar builder
//!
//! Creates the application header bar holding the three open triggers.

use gtk4::{Builder, Button, HeaderBar};

use crate::page::PageLayout;

fn icon_button(icon_name: &str, tooltip: &str) -> Button {
    Button::builder()
        .icon_name(icon_name)
        .tooltip_text(tooltip)
        .build()
}

/// Builds the header bar and registers its triggers in `builder`
///
/// Creates a HeaderBar containing:
/// - Menu open trigger (left side)
/// - Search and login open triggers (right side)
///
/// # Returns
///
/// The configured HeaderBar widget
pub fn build_header_bar(builder: &Builder, layout: &PageLayout) -> HeaderBar {
    let header_bar = HeaderBar::new();

    let menu_button = icon_button("open-menu-symbolic", "Menu");
    builder.expose_object(&layout.menu.open_id, &menu_button);
    header_bar.pack_start(&menu_button);

    let login_button = icon_button("avatar-default-symbolic", "Connexion");
    builder.expose_object(&layout.login.open_id, &login_button);
    header_bar.pack_end(&login_button);

    let search_button = icon_button("system-search-symbolic", "Rechercher");
    builder.expose_object(&layout.search.open_id, &search_button);
    header_bar.pack_end(&search_button);

    header_bar
}
