//! Update functions for the Elm-style architecture
//!
//! All state transformations flow through these functions.

mod app;
mod cell;
mod page;
mod pages;
mod selection;
mod specimen;

use crate::commands::Cmd;
use crate::messages::Msg;
use crate::model::{SpecimenPage, SpecimenPatch, StudioModel};

#[cfg(debug_assertions)]
use crate::tracing::SelectionSnapshot;
#[cfg(debug_assertions)]
use tracing::{debug, span, Level};

pub use app::update_app;
pub use cell::update_cell;
pub use page::update_page;
pub use pages::update_pages;
pub use selection::update_selection;
pub use specimen::update_specimen;

/// Main update function - dispatches to sub-handlers
///
/// In debug builds, this wraps with tracing instrumentation.
/// In release builds, it's a direct dispatch with zero overhead.
#[inline]
pub fn update(model: &mut StudioModel, msg: Msg) -> Option<Cmd> {
    #[cfg(debug_assertions)]
    {
        update_traced(model, msg)
    }
    #[cfg(not(debug_assertions))]
    {
        update_inner(model, msg)
    }
}

/// Inner update logic (no tracing)
fn update_inner(model: &mut StudioModel, msg: Msg) -> Option<Cmd> {
    match msg {
        Msg::Selection(m) => selection::update_selection(model, m),
        Msg::Page(m) => page::update_page(model, m),
        Msg::Cell(m) => cell::update_cell(model, m),
        Msg::Pages(m) => pages::update_pages(model, m),
        Msg::Specimen(m) => specimen::update_specimen(model, m),
        Msg::App(m) => app::update_app(model, m),
    }
}

/// Install a new pages array and describe the single store write for it
pub(crate) fn commit_pages(model: &mut StudioModel, pages: Vec<SpecimenPage>) -> Option<Cmd> {
    model.specimen.pages = pages.clone();
    persist(model, SpecimenPatch::pages(pages))
}

/// Describe a store write for `patch`
pub(crate) fn persist(model: &mut StudioModel, patch: SpecimenPatch) -> Option<Cmd> {
    model.ui.pending_writes += 1;
    Some(Cmd::PersistSpecimen {
        specimen_id: model.specimen.id.clone(),
        patch,
    })
}

/// Traced update wrapper (debug builds only)
///
/// Captures before/after selection state and logs diffs for debugging.
#[cfg(debug_assertions)]
fn update_traced(model: &mut StudioModel, msg: Msg) -> Option<Cmd> {
    use crate::messages::SelectionMsg;

    // Selection changes fire on every caret move
    let is_noisy = matches!(
        &msg,
        Msg::Selection(SelectionMsg::SurfaceSelectionChanged)
    );

    let msg_name = msg_type_name(&msg);
    let _span = if is_noisy {
        None
    } else {
        Some(span!(Level::DEBUG, "update", msg = %msg_name).entered())
    };

    let before = SelectionSnapshot::from_coordinator(&model.selection);

    if !is_noisy {
        debug!(target: "message", msg = %msg_name, "processing");
    }

    let result = update_inner(model, msg);

    let after = SelectionSnapshot::from_coordinator(&model.selection);
    if let Some(diff) = before.diff(&after) {
        debug!(target: "selection", %diff, "state changed");
    }

    result
}

/// Get a display name for a message type
///
/// Uses Debug formatting to include variant names and arguments.
/// Example outputs:
/// - `Selection::PanelPointerDown`
/// - `Cell::TextColor("#ff0000")`
#[cfg(debug_assertions)]
fn msg_type_name(msg: &Msg) -> String {
    match msg {
        Msg::Selection(m) => format!("Selection::{:?}", m),
        Msg::Page(m) => format!("Page::{:?}", m),
        Msg::Cell(m) => format!("Cell::{:?}", m),
        Msg::Pages(m) => format!("Pages::{:?}", m),
        Msg::Specimen(m) => format!("Specimen::{:?}", m),
        Msg::App(m) => format!("App::{:?}", m),
    }
}
