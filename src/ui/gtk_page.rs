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

//! GTK4 page
//!
//! Implements [`Document`] and [`View`] over widgets registered in a
//! `gtk4::Builder`. Identifiers are builder object names, classes are GTK
//! CSS classes, and card display is widget visibility.
//!
//! GTK CSS cannot hide a widget, so showing a region both toggles its
//! class (for styling) and its visibility.

use gtk4::{prelude::*, Builder, Editable, Label, Widget};

use crate::page::{Document, ToggleRegion, View};

/// A page backed by GTK4 widgets
#[derive(Clone)]
pub struct GtkPage {
    builder: Builder,
}

impl GtkPage {
    /// Wraps a builder whose objects are named after the page layout
    pub fn new(builder: Builder) -> Self {
        Self { builder }
    }
}

/// Depth-first walk of a widget's descendants, in document order
fn collect_descendants(widget: &Widget, out: &mut Vec<Widget>) {
    let mut child = widget.first_child();
    while let Some(current) = child {
        out.push(current.clone());
        collect_descendants(&current, out);
        child = current.next_sibling();
    }
}

impl Document for GtkPage {
    type Element = Widget;

    fn element_by_id(&self, id: &str) -> Option<Widget> {
        self.builder.object::<Widget>(id)
    }

    fn elements_with_class(&self, container: &Widget, class: &str) -> Vec<Widget> {
        let mut descendants = Vec::new();
        collect_descendants(container, &mut descendants);
        descendants.retain(|widget| widget.has_css_class(class));
        descendants
    }

    fn has_class(&self, element: &Widget, class: &str) -> bool {
        element.has_css_class(class)
    }

    fn text_content(&self, element: &Widget) -> String {
        if let Some(label) = element.downcast_ref::<Label>() {
            return label.text().to_string();
        }

        let mut descendants = Vec::new();
        collect_descendants(element, &mut descendants);
        descendants
            .iter()
            .filter_map(|widget| widget.downcast_ref::<Label>())
            .map(|label| label.text().to_string())
            .collect()
    }

    fn input_value(&self, element: &Widget) -> String {
        element
            .dynamic_cast_ref::<Editable>()
            .map(|editable| editable.text().to_string())
            .unwrap_or_default()
    }
}

impl View for GtkPage {
    fn set_class(&self, element: &Widget, class: &str, present: bool) {
        if present {
            element.add_css_class(class);
        } else {
            element.remove_css_class(class);
        }
    }

    fn set_card_visible(&self, card: &Widget, visible: bool) {
        card.set_visible(visible);
    }

    fn set_region_visible(&self, region: &ToggleRegion<Widget>, visible: bool) {
        self.set_class(region.element(), region.class_name(), visible);
        region.element().set_visible(visible);
    }
}
