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

//! Page context tests
//!
//! Binding must succeed on a complete page and fail, naming the
//! identifier, as soon as any required element is absent.

use crate::core::Region;
use crate::page::{MemoryPage, PageContext, PageError, PageLayout};

#[test]
fn test_bind_complete_page() {
    let layout = PageLayout::default();
    let page = MemoryPage::render(&layout, &[]);

    let context = PageContext::bind(&page, layout);
    assert!(context.is_ok(), "Complete page should bind");
}

#[test]
fn test_bind_fails_for_each_missing_element() {
    let layout = PageLayout::default();

    for id in layout.required_ids() {
        let page = MemoryPage::render_without(&layout, &[], id);
        let result = PageContext::bind(&page, layout.clone());

        assert_eq!(
            result.err(),
            Some(PageError::MissingElement { id: id.to_string() }),
            "Binding should fail on missing #{}",
            id
        );
    }
}

#[test]
fn test_required_ids_cover_default_contract() {
    let layout = PageLayout::default();
    let ids = layout.required_ids();

    assert_eq!(ids.len(), 11);
    for id in [
        "nav-menu",
        "nav-toggle",
        "nav-close",
        "search",
        "search-btn",
        "search-close",
        "login",
        "login-btn",
        "login-close",
        "clear-input",
        "all-recipes",
    ] {
        assert!(ids.contains(&id), "Missing #{} from required ids", id);
    }
}

#[test]
fn test_context_regions_use_their_own_classes() {
    let layout = PageLayout::default();
    let page = MemoryPage::render(&layout, &[]);
    let context = PageContext::bind(&page, layout).unwrap();

    assert_eq!(context.region(Region::Menu).class_name(), "show-menu");
    assert_eq!(context.region(Region::Search).class_name(), "show-search");
    assert_eq!(context.region(Region::Login).class_name(), "show-login");

    let regions: Vec<Region> = context.regions().iter().map(|r| r.region()).collect();
    assert_eq!(regions, Region::ALL.to_vec());
}

#[test]
fn test_missing_element_error_message() {
    let error = PageError::MissingElement {
        id: "nav-toggle".to_string(),
    };
    assert_eq!(error.to_string(), "Required page element not found: #nav-toggle");
}
