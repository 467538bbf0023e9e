//! Event handler setup
//!
//! Wires page events to the controller:
//! - Open/close trigger clicks for each region
//! - Search input changes
//! - Escape inside an open panel

use gtk4::{gdk, prelude::*, Button, Editable, EventControllerKey, PropagationPhase, Widget};
use std::rc::Rc;
use tracing::debug;

use crate::core::Region;
use crate::page::{PageError, ToggleRegion};
use crate::ui::{Controller, GtkPage};

/// Resolves a trigger widget as a button
fn as_button(widget: &Widget, id: &str) -> Result<Button, PageError> {
    widget
        .clone()
        .downcast::<Button>()
        .map_err(|_| PageError::UnexpectedWidget {
            id: id.to_string(),
            expected: "button",
        })
}

fn wire_region(
    controller: &Rc<Controller<GtkPage>>,
    region: &ToggleRegion<Widget>,
) -> Result<(), PageError> {
    let layout = controller.context().layout().region(region.region());
    let kind = region.region();

    let open_button = as_button(region.open_trigger(), &layout.open_id)?;
    let controller_for_open = controller.clone();
    open_button.connect_clicked(move |_| {
        controller_for_open.open_region(kind);
    });

    let close_button = as_button(region.close_trigger(), &layout.close_id)?;
    let controller_for_close = controller.clone();
    close_button.connect_clicked(move |_| {
        controller_for_close.close_region(kind);
    });

    // Capture phase: the search entry would otherwise consume Escape
    // for its own stop-search binding before the panel sees it
    let key_controller = EventControllerKey::new();
    key_controller.set_propagation_phase(PropagationPhase::Capture);
    let controller_for_keys = controller.clone();
    key_controller.connect_key_pressed(move |_controller, key, _code, _modifier| {
        if key == gdk::Key::Escape && controller_for_keys.on_escape(kind) {
            glib::Propagation::Stop
        } else {
            glib::Propagation::Proceed
        }
    });
    region.element().add_controller(key_controller);

    Ok(())
}

/// Wires up all event handlers for the page
///
/// Sets up:
/// - Click handlers on every open/close trigger
/// - The change handler on the search input (fires on every keystroke)
///
/// # Errors
///
/// Returns `PageError::UnexpectedWidget` if a trigger is not a button or
/// the search input is not editable.
pub fn wire_up_handlers(controller: Rc<Controller<GtkPage>>) -> Result<(), PageError> {
    for region in Region::ALL {
        wire_region(&controller, controller.region(region))?;
    }

    let layout = controller.context().layout();
    let input = controller
        .context()
        .search_input()
        .dynamic_cast_ref::<Editable>()
        .ok_or_else(|| PageError::UnexpectedWidget {
            id: layout.search_input_id.clone(),
            expected: "text input",
        })?
        .clone();

    let controller_for_search = controller.clone();
    input.connect_changed(move |_| {
        let outcome = controller_for_search.on_search_input();
        debug!("🔍 {} of {} recipes shown", outcome.visible, outcome.total());
    });

    Ok(())
}
