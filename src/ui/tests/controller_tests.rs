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

//! Controller tests
//!
//! Test for the MVC Controller logic

use crate::catalogue::Catalogue;
use crate::core::{FilterOutcome, Region};
use crate::page::{Document, MemoryPage, PageError, PageLayout};
use crate::ui::Controller;

/// Helper: Creates a controller over the three-card test page
fn create_test_controller() -> (Controller<MemoryPage>, PageLayout) {
    let layout = PageLayout::default();
    let summaries = vec![
        "Tomato Soup".to_string(),
        "Garlic Bread".to_string(),
        "Tomato Salad".to_string(),
    ];

    let page = MemoryPage::render(&layout, &summaries);
    let controller = Controller::bind(page, layout.clone()).unwrap();
    (controller, layout)
}

/// Helper: Types `value` into the search input and fires the input handler
fn type_query(controller: &Controller<MemoryPage>, value: &str) -> FilterOutcome {
    controller.type_query(value)
}

#[test]
fn test_controller_creation() {
    let (controller, _layout) = create_test_controller();

    for region in Region::ALL {
        assert!(
            !controller.is_region_open(region),
            "{} should start closed",
            region
        );
    }
    assert!(!controller.is_input_touched());
}

#[test]
fn test_controller_fails_fast_on_missing_trigger() {
    let layout = PageLayout::default();
    let page = MemoryPage::render_without(&layout, &[], "login-close");

    let result = Controller::bind(page, layout);
    assert_eq!(
        result.err(),
        Some(PageError::MissingElement {
            id: "login-close".to_string()
        })
    );
}

#[test]
fn test_filter_by_query() {
    let (controller, layout) = create_test_controller();

    let outcome = type_query(&controller, "tomato");

    assert_eq!(
        controller.page().visible_summaries(&layout),
        vec!["Tomato Soup", "Tomato Salad"]
    );
    assert_eq!(outcome, FilterOutcome { visible: 2, hidden: 1 });
}

#[test]
fn test_filter_empty_query_shows_all() {
    let (controller, layout) = create_test_controller();

    type_query(&controller, "tomato");
    let outcome = type_query(&controller, "");

    assert_eq!(controller.page().visible_summaries(&layout).len(), 3);
    assert_eq!(outcome.hidden, 0);
}

#[test]
fn test_filter_no_match_hides_all() {
    let (controller, layout) = create_test_controller();

    let outcome = type_query(&controller, "XYZ");

    assert!(controller.page().visible_summaries(&layout).is_empty());
    assert_eq!(outcome, FilterOutcome { visible: 0, hidden: 3 });
}

#[test]
fn test_filter_is_idempotent() {
    let (controller, layout) = create_test_controller();

    type_query(&controller, "bread");
    let first = controller.page().cards(&layout);

    type_query(&controller, "bread");
    let second = controller.page().cards(&layout);

    assert_eq!(first, second);
}

#[test]
fn test_filter_reads_nested_summary_elements() {
    let layout = PageLayout::default();
    let mut page = MemoryPage::render(&layout, &["Tomato Soup".to_string()]);

    // Summary wrapped one level deeper inside the card
    let container = page.element_by_id(&layout.recipes_id).unwrap();
    let card = page.add_element(Some(container), None, &["recipe"]);
    let body = page.add_element(Some(card), None, &[]);
    let summary = page.add_element(Some(body), None, &["recipe__summary"]);
    page.set_text(summary, "Tomato Salad");

    let controller = Controller::bind(page, layout.clone()).unwrap();

    let outcome = controller.filter_recipes("salad");
    assert_eq!(outcome, FilterOutcome { visible: 1, hidden: 1 });
    assert_eq!(controller.page().visible_summaries(&layout), vec!["Tomato Salad"]);
}

#[test]
fn test_card_without_summary_matches_only_empty_query() {
    let layout = PageLayout::default();
    let mut page = MemoryPage::render(&layout, &[]);
    let container = page.element_by_id(&layout.recipes_id).unwrap();
    let bare_card = page.add_element(Some(container), None, &["recipe"]);
    let controller = Controller::bind(page, layout).unwrap();

    controller.filter_recipes("soup");
    assert!(!controller.page().is_visible(bare_card));

    controller.filter_recipes("");
    assert!(controller.page().is_visible(bare_card));
}

#[test]
fn test_touched_marker_follows_value() {
    let (controller, _layout) = create_test_controller();

    type_query(&controller, "a");
    assert!(controller.is_input_touched(), "Marker added for non-empty value");

    type_query(&controller, "ab");
    assert!(controller.is_input_touched(), "Marker kept while typing");

    type_query(&controller, "");
    assert!(!controller.is_input_touched(), "Marker removed after clearing");
}

#[test]
fn test_menu_open_close() {
    let (controller, _layout) = create_test_controller();
    let menu = controller.region(Region::Menu);

    controller.open_region(Region::Menu);
    assert!(controller.page().has_class(menu.element(), "show-menu"));

    controller.close_region(Region::Menu);
    assert!(!controller.page().has_class(menu.element(), "show-menu"));
}

#[test]
fn test_regions_are_independent() {
    let (controller, _layout) = create_test_controller();

    controller.open_region(Region::Search);
    controller.open_region(Region::Login);

    assert!(!controller.is_region_open(Region::Menu));
    assert!(controller.is_region_open(Region::Search));
    assert!(controller.is_region_open(Region::Login), "Several regions may be open at once");

    controller.close_region(Region::Search);
    assert!(controller.is_region_open(Region::Login), "Closing one leaves the others");
}

#[test]
fn test_filter_does_not_touch_regions() {
    let (controller, _layout) = create_test_controller();

    controller.open_region(Region::Search);
    type_query(&controller, "garlic");

    assert!(controller.is_region_open(Region::Search));
    assert!(!controller.is_region_open(Region::Menu));
}

#[test]
fn test_filter_builtin_catalogue() {
    let layout = PageLayout::default();
    let catalogue = Catalogue::builtin().unwrap();
    let page = MemoryPage::render(&layout, &catalogue.summaries());
    let controller = Controller::bind(page, layout.clone()).unwrap();

    // "parmesan" only appears in an ingredient, never in a title
    let outcome = controller.filter_recipes("PARMESAN");
    assert_eq!(outcome, FilterOutcome { visible: 1, hidden: 2 });

    let visible = controller.page().visible_summaries(&layout);
    assert!(visible[0].starts_with("Gratin de gnocchi au saumon et épinards: "));

    let outcome = controller.filter_recipes("ail");
    let visible = controller.page().visible_summaries(&layout);
    assert_eq!(outcome.visible, visible.len());
    assert!(visible.iter().all(|s| s.to_uppercase().contains("AIL")));
}

#[test]
fn test_escape_closes_open_region() {
    let (controller, _layout) = create_test_controller();

    controller.open_region(Region::Search);
    type_query(&controller, "tomato");

    assert!(controller.on_escape(Region::Search), "Escape used by an open region");
    assert!(!controller.is_region_open(Region::Search));
    assert!(controller.is_input_touched(), "Closing leaves the query alone");
}

#[test]
fn test_escape_ignored_by_closed_region() {
    let (controller, _layout) = create_test_controller();

    controller.open_region(Region::Login);

    assert!(!controller.on_escape(Region::Menu), "Closed region lets Escape through");
    assert!(controller.is_region_open(Region::Login));
}

#[test]
fn test_headless_search_over_builtin_catalogue() {
    let catalogue = Catalogue::builtin().unwrap();
    let controller = Controller::headless(PageLayout::default(), &catalogue.summaries()).unwrap();

    let outcome = controller.type_query("lentilles");
    assert_eq!(outcome, FilterOutcome { visible: 1, hidden: 2 });
    assert!(controller.visible_summaries()[0].starts_with("Saucisses aux lentilles"));
    assert!(controller.is_input_touched());

    let outcome = controller.type_query("");
    assert_eq!(outcome.visible, catalogue.len());
    assert_eq!(controller.visible_summaries(), catalogue.summaries());
    assert!(!controller.is_input_touched());
}
