//! Application model - the complete state of the specimen editor
//!
//! This module contains all the state types following the Elm Architecture pattern.

pub mod background;
pub mod cell;
pub mod ids;
pub mod lifecycle;
pub mod mutation;
pub mod page;
pub mod panels;
pub mod selection;
pub mod specimen;
pub mod ui;

pub use background::{Background, BackgroundEdit, BackgroundKind, Fill, Gradient};
pub use cell::{CellPatch, SpecimenPageCell, TextAlign, VerticalAlign};
pub use ids::{CellRef, FontId, PageId, SpecimenId};
pub use lifecycle::PageError;
pub use page::{Grid, MarginSide, Margins, PageFields, PagePatch, SpecimenPage};
pub use panels::{ActivePanel, MarginDraft, PaddingDraft, PanelState, RenameDraft};
pub use selection::{
    FormatOutcome, SelectionAttributes, SelectionCoordinator, SelectionRange, SelectionState,
};
pub use specimen::{Orientation, Specimen, SpecimenFormat, SpecimenPatch};
pub use ui::UiState;

use crate::fonts::FontEntry;
use crate::surface::RichTextSurface;
use crate::template::Template;

/// The complete editor model for one open specimen
#[derive(Debug)]
pub struct StudioModel {
    /// The document being edited; `pages` is only ever replaced wholesale
    pub specimen: Specimen,
    /// Selected page/cell, active surface, live and stored selections
    pub selection: SelectionCoordinator,
    /// Local panel drafts and confirmations
    pub panels: PanelState,
    /// Templates offered by the page panel
    pub templates: Vec<Template>,
    /// Snapshot of the font catalog
    pub fonts: Vec<FontEntry>,
    /// Status line and persistence bookkeeping
    pub ui: UiState,
}

impl StudioModel {
    /// Open `specimen`, selecting its first page (or the placeholder if it has none)
    pub fn new(specimen: Specimen, templates: Vec<Template>, fonts: Vec<FontEntry>) -> Self {
        let first_page = specimen
            .pages
            .first()
            .map(|page| page.id.clone())
            .unwrap_or_else(PageId::placeholder);

        Self {
            specimen,
            selection: SelectionCoordinator::new(first_page),
            panels: PanelState::default(),
            templates,
            fonts,
            ui: UiState::new(),
        }
    }

    pub fn selected_page(&self) -> Option<&SpecimenPage> {
        self.specimen.page(self.selection.selected_page_id())
    }

    /// Committed value of a cell; unmaterialized cells read as the default cell
    pub fn cell(&self, cell: &CellRef) -> SpecimenPageCell {
        self.specimen
            .page(&cell.page_id)
            .and_then(|page| page.cell(cell.cell_index))
            .cloned()
            .unwrap_or_default()
    }

    /// The open cell's committed value
    pub fn selected_cell(&self) -> Option<SpecimenPageCell> {
        self.selection.selected_cell().map(|cell| self.cell(cell))
    }

    /// Which settings panel the container should show
    pub fn active_panel(&self) -> ActivePanel {
        match self.selection.selected_cell() {
            Some(cell) => ActivePanel::Cell(cell.clone()),
            None => ActivePanel::Page(self.selection.selected_page_id().clone()),
        }
    }

    pub fn find_template(&self, id: &str) -> Option<&Template> {
        self.templates.iter().find(|template| template.id == id)
    }

    /// Bind the rich-text surface that just mounted for `cell`.
    ///
    /// Opening a different cell this way discards the previous cell's drafts.
    pub fn attach_surface(&mut self, cell: CellRef, surface: Box<dyn RichTextSurface>) {
        if self.selection.selected_cell() != Some(&cell) {
            self.panels.padding_draft = None;
        }
        if self.selection.selected_page_id() != &cell.page_id {
            self.panels.discard_drafts();
        }
        self.selection.attach_editor(cell, surface);
    }
}
