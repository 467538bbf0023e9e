//! MVC Controller - Mediates between the page (View) and user events
//!
//! # Responsibilities
//!
//! - Resolve every page handle once, failing fast on a misconfigured page
//! - Show/hide the menu, search and login regions
//! - Filter recipe cards against the search input
//! - Keep the touched marker on the search input in sync with its value
//!
//! # Architecture
//!
//! The Controller holds the page behind the [`View`] trait and doesn't
//! know about GTK4 widgets. All visibility state lives in the page itself;
//! the controller only decides and applies.

use tracing::{debug, warn};

use crate::core::{input_touched, summary_matches, FilterOutcome, Region};
use crate::page::{MemoryPage, PageContext, PageError, PageLayout, ToggleRegion, View};

/// MVC Controller driving one page
pub struct Controller<P: View> {
    /// The page being driven
    page: P,
    /// Handles resolved at bind time
    context: PageContext<P::Element>,
}

impl<P: View> Controller<P> {
    /// Binds a Controller to a page
    ///
    /// # Arguments
    ///
    /// * `page` - Page implementing [`View`]
    /// * `layout` - Identifiers and class names the page must honour
    ///
    /// # Returns
    ///
    /// * `Ok(Controller)` - Every required element was found
    /// * `Err(PageError)` - The first missing element
    ///
    /// # Example
    ///
    /// ```
    /// use recipe_board::page::{MemoryPage, PageLayout};
    /// use recipe_board::ui::Controller;
    ///
    /// let layout = PageLayout::default();
    /// let page = MemoryPage::render(&layout, &["Tomato Soup".to_string()]);
    /// let controller = Controller::bind(page, layout)?;
    /// # Ok::<(), recipe_board::page::PageError>(())
    /// ```
    pub fn bind(page: P, layout: PageLayout) -> Result<Self, PageError> {
        let context = PageContext::bind(&page, layout)?;
        Ok(Self { page, context })
    }

    /// The page being driven
    pub fn page(&self) -> &P {
        &self.page
    }

    /// Resolved page handles
    pub fn context(&self) -> &PageContext<P::Element> {
        &self.context
    }

    /// Handles of one region
    pub fn region(&self, region: Region) -> &ToggleRegion<P::Element> {
        self.context.region(region)
    }

    /// Open trigger handler: shows `region`
    pub fn open_region(&self, region: Region) {
        debug!("Opening {} region", region);
        self.context.region(region).open(&self.page);
    }

    /// Close trigger handler: hides `region`
    pub fn close_region(&self, region: Region) {
        debug!("Closing {} region", region);
        self.context.region(region).close(&self.page);
    }

    /// Escape handler: closes `region` if it is open
    ///
    /// Returns whether the key was used, so a closed region lets it
    /// propagate.
    pub fn on_escape(&self, region: Region) -> bool {
        if !self.is_region_open(region) {
            return false;
        }

        self.close_region(region);
        true
    }

    /// Whether `region` currently carries its visibility class
    pub fn is_region_open(&self, region: Region) -> bool {
        self.context.region(region).is_open(&self.page)
    }

    /// Input handler: re-filters the cards and updates the touched marker
    ///
    /// Reads the current value of the search input, so it can be wired
    /// directly to the input's change signal.
    pub fn on_search_input(&self) -> FilterOutcome {
        let query = self.page.input_value(self.context.search_input());

        let outcome = self.filter_recipes(&query);
        self.update_touched(&query);

        outcome
    }

    /// Shows every card whose summary contains `query`, hides the rest
    ///
    /// Scans every card currently in the recipe container on each call.
    /// An empty query shows every card.
    pub fn filter_recipes(&self, query: &str) -> FilterOutcome {
        let layout = self.context.layout();
        let cards = self
            .page
            .elements_with_class(self.context.recipe_container(), &layout.card_class);

        let mut outcome = FilterOutcome::default();

        for card in &cards {
            let summary = match self.page.first_with_class(card, &layout.summary_class) {
                Some(summary) => self.page.text_content(&summary),
                None => {
                    warn!("Recipe card without a .{} element", layout.summary_class);
                    String::new()
                }
            };

            let shown = summary_matches(&summary, query);
            self.page.set_card_visible(card, shown);
            outcome.record(shown);
        }

        debug!(
            "Filter '{}': {} shown, {} hidden",
            query, outcome.visible, outcome.hidden
        );

        outcome
    }

    /// Adds the touched marker for a non-empty query, removes it otherwise
    ///
    /// Only writes when the marker's presence actually has to change.
    pub fn update_touched(&self, query: &str) {
        let input = self.context.search_input();
        let marker = &self.context.layout().touched_class;

        let should_be_touched = input_touched(query);
        let is_touched = self.page.has_class(input, marker);

        if should_be_touched != is_touched {
            self.page.set_class(input, marker, should_be_touched);
        }
    }

    /// Whether the search input carries the touched marker
    pub fn is_input_touched(&self) -> bool {
        self.page
            .has_class(self.context.search_input(), &self.context.layout().touched_class)
    }
}

impl Controller<MemoryPage> {
    /// Binds a controller to a headless page holding one card per summary
    ///
    /// # Example
    ///
    /// ```
    /// use recipe_board::page::PageLayout;
    /// use recipe_board::ui::Controller;
    ///
    /// let summaries = vec!["Tomato Soup".to_string(), "Garlic Bread".to_string()];
    /// let controller = Controller::headless(PageLayout::default(), &summaries)?;
    ///
    /// assert_eq!(controller.type_query("soup").visible, 1);
    /// assert_eq!(controller.visible_summaries(), vec!["Tomato Soup"]);
    /// # Ok::<(), recipe_board::page::PageError>(())
    /// ```
    pub fn headless(layout: PageLayout, summaries: &[String]) -> Result<Self, PageError> {
        let page = MemoryPage::render(&layout, summaries);
        Self::bind(page, layout)
    }

    /// Writes `value` into the search input and runs the input handler
    pub fn type_query(&self, value: &str) -> FilterOutcome {
        self.page.set_value(*self.context.search_input(), value);
        self.on_search_input()
    }

    /// Summaries of the cards left visible, in page order
    pub fn visible_summaries(&self) -> Vec<String> {
        self.page.visible_summaries(self.context.layout())
    }
}
