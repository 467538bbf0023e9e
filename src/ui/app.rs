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

//! GTK4 Application wrapper
//!
//! This module sets up the GTK4 application lifecycle and creates
//! the main window. It binds the Controller to the rendered page.
//!
//! # Architecture
//!
//! ```text
//! App (GTK4 Application)
//!   ├─ Builds the page widgets (registered by identifier)
//!   ├─ Binds the Controller (fails fast on a missing element)
//!   └─ Wires trigger and input signals to the Controller
//! ```

use gtk4::prelude::*;
use gtk4::{gdk, Application, ApplicationWindow, Builder, CssProvider};
use std::cell::RefCell;
use std::rc::Rc;
use tracing::{error, info, warn};

use crate::catalogue::Catalogue;
use crate::page::{PageError, PageLayout};
use crate::ui::builders::{build_header_bar, build_main_layout, wire_up_handlers};
use crate::ui::{actions, Controller, GtkPage};

/// GTK4 Application for the recipe board
pub struct App {
    /// GTK4 Application instance
    app: Application,
    /// Recipes rendered as cards
    catalogue: Rc<Catalogue>,
    /// Identifiers and classes the page is built with
    layout: Rc<PageLayout>,
}

impl App {
    /// Creates a new App rendering `catalogue`
    ///
    /// # Example
    ///
    /// ```no_run
    /// use recipe_board::catalogue::Catalogue;
    /// use recipe_board::page::PageLayout;
    /// use recipe_board::ui::App;
    ///
    /// let app = App::new(Catalogue::builtin()?, PageLayout::default());
    /// app.run()?; // Blocks until window closes
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn new(catalogue: Catalogue, layout: PageLayout) -> Self {
        let app = Application::builder()
            .application_id("com.tidynest.recipe-board")
            .build();

        Self {
            app,
            catalogue: Rc::new(catalogue),
            layout: Rc::new(layout),
        }
    }

    /// Runs the GTK4 application
    ///
    /// This starts the GTK4 main loop and blocks until the application
    /// exits.
    ///
    /// # Errors
    ///
    /// Returns the `PageError` that stopped the page from binding, if any.
    pub fn run(self) -> Result<(), PageError> {
        let failure: Rc<RefCell<Option<PageError>>> = Rc::new(RefCell::new(None));

        let catalogue = self.catalogue.clone();
        let layout = self.layout.clone();
        let failure_for_activate = failure.clone();

        // Connect activate signal (called when app starts)
        self.app.connect_activate(move |app| {
            if let Err(e) = Self::build_ui(app, &catalogue, &layout) {
                error!("❌ Page failed to bind: {}", e);
                *failure_for_activate.borrow_mut() = Some(e);
                app.quit();
            }
        });

        // Run the application (blocks until exit)
        self.app.run_with_args::<&str>(&[]);

        let taken = failure.borrow_mut().take();
        match taken {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    /// Loads custom CSS styling for the application
    ///
    /// Applies the CSS from `style.css` to the default display
    /// at APPLICATION priority level.
    fn load_css() {
        let provider = CssProvider::new();
        provider.load_from_string(include_str!("style.css"));

        match gdk::Display::default() {
            Some(display) => gtk4::style_context_add_provider_for_display(
                &display,
                &provider,
                gtk4::STYLE_PROVIDER_PRIORITY_APPLICATION,
            ),
            None => warn!("No display available, skipping custom CSS"),
        }
    }

    /// Builds the main window UI
    ///
    /// This is called when the application activates. It renders the
    /// page, binds the Controller and wires every handler before the
    /// window is shown.
    fn build_ui(
        app: &Application,
        catalogue: &Catalogue,
        layout: &PageLayout,
    ) -> Result<(), PageError> {
        Self::load_css();
        actions::setup_quit_action(app);

        let window = ApplicationWindow::builder()
            .application(app)
            .title("Livre de recettes")
            .default_width(900)
            .default_height(700)
            .build();

        let builder = Builder::new();
        window.set_titlebar(Some(&build_header_bar(&builder, layout)));
        window.set_child(Some(&build_main_layout(&builder, layout, catalogue)));

        let controller = Rc::new(Controller::bind(GtkPage::new(builder), layout.clone())?);
        wire_up_handlers(controller)?;

        info!("📖 Showing {} recipes", catalogue.len());
        window.present();

        Ok(())
    }
}
