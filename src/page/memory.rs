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

//! Headless page
//!
//! A small element tree held in memory. It implements [`Document`] and
//! [`View`] so the controller runs unchanged without a display server:
//! the CLI `search` command and the test suites both drive it.

use std::cell::RefCell;
use std::collections::{BTreeSet, HashMap};

use crate::core::Region;
use crate::page::{layout::PageLayout, Document, View};

/// Handle to a node of a [`MemoryPage`]
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct NodeRef(usize);

#[derive(Debug, Default)]
struct Node {
    classes: BTreeSet<String>,
    text: String,
    value: String,
    visible: bool,
    children: Vec<NodeRef>,
}

/// In-memory element tree
#[derive(Debug)]
pub struct MemoryPage {
    nodes: RefCell<Vec<Node>>,
    ids: HashMap<String, NodeRef>,
    root: Option<NodeRef>,
}

impl Default for MemoryPage {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryPage {
    /// Creates an empty page with a single root node
    pub fn new() -> Self {
        let mut page = Self {
            nodes: RefCell::new(Vec::new()),
            ids: HashMap::new(),
            root: None,
        };
        page.root = Some(page.push_node(None));
        page
    }

    /// Builds the standard page for `layout` with one card per summary
    ///
    /// Regions start hidden, the input starts empty and every card starts
    /// visible, like a freshly rendered page.
    pub fn render(layout: &PageLayout, summaries: &[String]) -> Self {
        Self::render_filtered(layout, summaries, |_| true)
    }

    /// Same as [`render`](Self::render) but leaves `missing_id` unregistered
    #[cfg(test)]
    pub(crate) fn render_without(layout: &PageLayout, summaries: &[String], missing_id: &str) -> Self {
        Self::render_filtered(layout, summaries, |id| id != missing_id)
    }

    fn render_filtered(
        layout: &PageLayout,
        summaries: &[String],
        keep: impl Fn(&str) -> bool,
    ) -> Self {
        let mut page = Self::new();
        let kept = |id: &str| keep(id).then(|| id.to_string());

        for region in Region::ALL {
            let region_layout = layout.region(region);

            let panel = page.add_element(None, kept(&region_layout.region_id).as_deref(), &[]);
            page.add_element(None, kept(&region_layout.open_id).as_deref(), &[]);
            page.add_element(Some(panel), kept(&region_layout.close_id).as_deref(), &[]);
        }

        page.add_element(None, kept(&layout.search_input_id).as_deref(), &[]);
        let container = page.add_element(None, kept(&layout.recipes_id).as_deref(), &[]);

        for summary in summaries {
            let card = page.add_element(Some(container), None, &[layout.card_class.as_str()]);
            let summary_node =
                page.add_element(Some(card), None, &[layout.summary_class.as_str()]);
            page.set_text(summary_node, summary);
        }

        page
    }

    fn push_node(&mut self, parent: Option<NodeRef>) -> NodeRef {
        let mut nodes = self.nodes.borrow_mut();
        let node = NodeRef(nodes.len());
        nodes.push(Node {
            visible: true,
            ..Node::default()
        });
        if let Some(parent) = parent {
            nodes[parent.0].children.push(node);
        }
        node
    }

    /// Appends an element under `parent` (the root when `None`)
    ///
    /// # Arguments
    /// * `parent` - Parent node
    /// * `id` - Identifier to register, if any
    /// * `classes` - Initial classes
    pub fn add_element(&mut self, parent: Option<NodeRef>, id: Option<&str>, classes: &[&str]) -> NodeRef {
        let parent = parent.or(self.root);
        let node = self.push_node(parent);

        {
            let mut nodes = self.nodes.borrow_mut();
            nodes[node.0].classes = classes.iter().map(|c| c.to_string()).collect();
        }

        if let Some(id) = id {
            self.ids.insert(id.to_string(), node);
        }

        node
    }

    /// Replaces the text of a node
    pub fn set_text(&self, node: NodeRef, text: &str) {
        self.nodes.borrow_mut()[node.0].text = text.to_string();
    }

    /// Replaces the value of an input node, as typing would
    pub fn set_value(&self, node: NodeRef, value: &str) {
        self.nodes.borrow_mut()[node.0].value = value.to_string();
    }

    /// Whether a node is currently displayed
    pub fn is_visible(&self, node: NodeRef) -> bool {
        self.nodes.borrow()[node.0].visible
    }

    /// Summaries of every card, paired with their visibility
    pub fn cards(&self, layout: &PageLayout) -> Vec<(String, bool)> {
        let Some(container) = self.element_by_id(&layout.recipes_id) else {
            return Vec::new();
        };

        self.elements_with_class(&container, &layout.card_class)
            .into_iter()
            .map(|card| {
                let summary = self
                    .first_with_class(&card, &layout.summary_class)
                    .map(|node| self.text_content(&node))
                    .unwrap_or_default();
                (summary, self.is_visible(card))
            })
            .collect()
    }

    /// Summaries of the cards currently displayed
    pub fn visible_summaries(&self, layout: &PageLayout) -> Vec<String> {
        self.cards(layout)
            .into_iter()
            .filter_map(|(summary, visible)| visible.then_some(summary))
            .collect()
    }

    fn collect_descendants(&self, node: NodeRef, out: &mut Vec<NodeRef>) {
        let children = self.nodes.borrow()[node.0].children.clone();
        for child in children {
            out.push(child);
            self.collect_descendants(child, out);
        }
    }
}

impl Document for MemoryPage {
    type Element = NodeRef;

    fn element_by_id(&self, id: &str) -> Option<NodeRef> {
        self.ids.get(id).copied()
    }

    fn elements_with_class(&self, container: &NodeRef, class: &str) -> Vec<NodeRef> {
        let mut descendants = Vec::new();
        self.collect_descendants(*container, &mut descendants);
        descendants.retain(|node| self.has_class(node, class));
        descendants
    }

    fn has_class(&self, element: &NodeRef, class: &str) -> bool {
        self.nodes.borrow()[element.0].classes.contains(class)
    }

    fn text_content(&self, element: &NodeRef) -> String {
        let mut text = self.nodes.borrow()[element.0].text.clone();
        let mut descendants = Vec::new();
        self.collect_descendants(*element, &mut descendants);
        for node in descendants {
            text.push_str(&self.nodes.borrow()[node.0].text);
        }
        text
    }

    fn input_value(&self, element: &NodeRef) -> String {
        self.nodes.borrow()[element.0].value.clone()
    }
}

impl View for MemoryPage {
    fn set_class(&self, element: &NodeRef, class: &str, present: bool) {
        let mut nodes = self.nodes.borrow_mut();
        let classes = &mut nodes[element.0].classes;
        if present {
            classes.insert(class.to_string());
        } else {
            classes.remove(class);
        }
    }

    fn set_card_visible(&self, card: &NodeRef, visible: bool) {
        self.nodes.borrow_mut()[card.0].visible = visible;
    }
}
