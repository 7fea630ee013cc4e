//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use std::cell::RefCell;
use std::path::Path;
use std::rc::Rc;

use specimen_studio::assets::{AssetStorage, UploadError};
use specimen_studio::commands::Cmd;
use specimen_studio::fonts::{FontEntry, FontStyle, StaticFontCatalog};
use specimen_studio::messages::Msg;
use specimen_studio::model::{
    CellRef, PageId, SelectionAttributes, SelectionRange, Specimen, SpecimenId, SpecimenPage,
    StudioModel,
};
use specimen_studio::store::MemoryStore;
use specimen_studio::surface::{RichTextSurface, SurfaceCommand};
use specimen_studio::template::builtin_templates;
use specimen_studio::update::update;
use specimen_studio::Studio;

// ========================================================================
// Fake rich-text surface
// ========================================================================

/// Observable state behind a [`FakeSurface`]
#[derive(Debug, Default)]
pub struct FakeSurfaceState {
    pub focused: bool,
    pub selection: Option<SelectionRange>,
    pub text: String,
    /// Every command run, with the selection it ran against
    pub commands: Vec<(SelectionRange, SurfaceCommand)>,
    pub attributes: SelectionAttributes,
}

/// Test double for the embedded editor; clones share state
#[derive(Debug, Clone, Default)]
pub struct FakeSurface(pub Rc<RefCell<FakeSurfaceState>>);

impl FakeSurface {
    pub fn with_text(text: &str) -> Self {
        let surface = Self::default();
        surface.0.borrow_mut().text = text.to_string();
        surface
    }

    /// User drags a selection with the surface focused
    pub fn select(&self, from: usize, to: usize) {
        let mut state = self.0.borrow_mut();
        state.focused = true;
        state.selection = Some(SelectionRange::new(from, to));
    }

    /// Focus moves to a panel control; the selection collapses
    pub fn blur(&self) {
        let mut state = self.0.borrow_mut();
        state.focused = false;
        state.selection = None;
    }

    pub fn type_text(&self, text: &str) {
        self.0.borrow_mut().text.push_str(text);
    }

    pub fn commands(&self) -> Vec<(SelectionRange, SurfaceCommand)> {
        self.0.borrow().commands.clone()
    }

    pub fn is_focused(&self) -> bool {
        self.0.borrow().focused
    }

    pub fn boxed(&self) -> Box<dyn RichTextSurface> {
        Box::new(self.clone())
    }
}

impl RichTextSurface for FakeSurface {
    fn selection(&self) -> Option<SelectionRange> {
        self.0.borrow().selection.filter(|range| !range.is_empty())
    }

    fn selection_attributes(&self) -> Option<SelectionAttributes> {
        let state = self.0.borrow();
        match state.selection {
            Some(range) if state.focused && !range.is_empty() => Some(state.attributes.clone()),
            _ => None,
        }
    }

    fn focus(&mut self) {
        self.0.borrow_mut().focused = true;
    }

    fn set_selection(&mut self, range: SelectionRange) {
        self.0.borrow_mut().selection = Some(range);
    }

    fn run_command(&mut self, command: &SurfaceCommand) {
        let mut state = self.0.borrow_mut();
        let range = state.selection.unwrap_or_default().normalized();
        match command {
            SurfaceCommand::SetColor(color) => state.attributes.color = Some(color.clone()),
            SurfaceCommand::SetBackgroundColor(color) => {
                state.attributes.background_color = Some(color.clone())
            }
            SurfaceCommand::SetFontFamily(family) => {
                state.attributes.font_family = Some(family.clone())
            }
            SurfaceCommand::SetFontSize(size) => state.attributes.font_size = Some(*size),
            SurfaceCommand::SetLineHeight(height) => state.attributes.line_height = Some(*height),
        }
        state.commands.push((range, command.clone()));
    }

    fn serialized_content(&self) -> String {
        let state = self.0.borrow();
        let marks: String = state
            .commands
            .iter()
            .map(|(range, command)| format!("[{}@{}..{}]", command, range.from, range.to))
            .collect();
        format!("<p>{}</p>{}", state.text, marks)
    }
}

// ========================================================================
// Fake asset storage
// ========================================================================

/// Records uploads; fails every upload when `fail` is set
#[derive(Debug, Default)]
pub struct FakeAssets {
    pub uploads: Vec<(String, String, String)>,
    pub fail: bool,
}

impl AssetStorage for FakeAssets {
    fn upload(&mut self, file: &Path, folder: &str, owner_id: &str) -> Result<String, UploadError> {
        if self.fail {
            return Err(UploadError::MissingFile(file.to_path_buf()));
        }
        let name = file
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        self.uploads
            .push((name.clone(), folder.to_string(), owner_id.to_string()));
        Ok(format!("https://assets.test/{}/{}/{}", folder, owner_id, name))
    }
}

// ========================================================================
// Model builders
// ========================================================================

pub fn page_id(n: usize) -> PageId {
    PageId::new(format!("page-{}", n))
}

pub fn cell(page: usize, index: usize) -> CellRef {
    CellRef::new(page_id(page), index)
}

/// Specimen `spec-1` with pages `page-1..=page-N`, each named "Page N"
pub fn test_specimen(page_count: usize) -> Specimen {
    let mut specimen = Specimen::new(SpecimenId::new("spec-1"), "Specimen", "inter");
    specimen.pages = (1..=page_count)
        .map(|n| SpecimenPage::new(page_id(n), format!("Page {}", n)))
        .collect();
    specimen
}

pub fn test_fonts() -> Vec<FontEntry> {
    vec![
        FontEntry::new("inter-400", "Inter", 400, FontStyle::Normal),
        FontEntry::new("inter-700-italic", "Inter", 700, FontStyle::Italic),
        FontEntry::new("plex-mono-400", "IBM Plex Mono", 400, FontStyle::Normal),
    ]
}

pub fn test_catalog() -> StaticFontCatalog {
    StaticFontCatalog::new(test_fonts())
}

/// Model over [`test_specimen`] with builtin templates and [`test_fonts`]
pub fn test_model(page_count: usize) -> StudioModel {
    StudioModel::new(test_specimen(page_count), builtin_templates(), test_fonts())
}

/// Open `cell` with a fresh surface holding `text`
pub fn open_cell(model: &mut StudioModel, cell: CellRef, text: &str) -> FakeSurface {
    let surface = FakeSurface::with_text(text);
    model.attach_surface(cell, surface.boxed());
    surface
}

/// Run `msg` and return the command it produced
pub fn send(model: &mut StudioModel, msg: Msg) -> Option<Cmd> {
    update(model, msg)
}

/// Total store writes described by a command
pub fn persists(cmd: &Option<Cmd>) -> usize {
    cmd.as_ref().map_or(0, Cmd::persist_count)
}

pub fn test_studio(page_count: usize) -> Studio<MemoryStore, FakeAssets> {
    let specimen = test_specimen(page_count);
    let id = specimen.id.clone();
    Studio::open(
        MemoryStore::with_specimen(specimen),
        FakeAssets::default(),
        &test_catalog(),
        builtin_templates(),
        &id,
    )
    .expect("test specimen is in the store")
}
