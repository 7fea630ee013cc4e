//! Message types for the Elm-style architecture
//!
//! All state changes flow through these message types.

use std::path::PathBuf;

use crate::commands::AssetTarget;
use crate::model::{
    BackgroundEdit, CellRef, FontId, MarginSide, Orientation, PageId, SpecimenFormat, TextAlign,
    VerticalAlign,
};

/// Selection and text-surface events
#[derive(Debug, Clone, PartialEq)]
pub enum SelectionMsg {
    /// Select a page (closes any open cell)
    SelectPage(PageId),
    /// Open a cell in the cell panel
    SelectCell(CellRef),
    /// Close the open cell, back to the page panel
    CloseCell,
    /// The active surface reported a selection change
    SurfaceSelectionChanged,
    /// The active surface lost focus
    SurfaceBlurred,
    /// The user typed into the active surface
    SurfaceContentChanged,
    /// The active surface unmounted
    DetachSurface,
    /// Pointer went down on a settings panel control (fires before blur)
    PanelPointerDown,
}

/// Page settings panel
#[derive(Debug, Clone, PartialEq)]
pub enum PageMsg {
    /// Edit one margin field in the local draft
    MarginInput { side: MarginSide, value: String },
    /// Persist the margin draft
    ApplyMargins,
    /// Throw the margin draft away
    DiscardMargins,
    Background(BackgroundEdit),
    UploadBackgroundImage(PathBuf),
    GridColumnsInput(String),
    GridRowsInput(String),
    GridGapInput(String),
    SetShowGrid(bool),
    ApplyTemplate(String),
}

/// Cell settings panel
#[derive(Debug, Clone, PartialEq)]
pub enum CellMsg {
    /// Edit the padding in the local draft
    PaddingInput(String),
    ApplyPadding,
    DiscardPadding,
    Background(BackgroundEdit),
    UploadBackgroundImage(PathBuf),
    // === Formatting (selection or cell default) ===
    TextColor(String),
    /// Inline highlight color; only meaningful with a text selection
    Highlight(String),
    Font(FontId),
    FontSizeInput(String),
    LineHeightInput(String),
    // === Cell-only styling ===
    SelectionBackgroundColor(String),
    TextAlign(TextAlign),
    VerticalAlign(VerticalAlign),
}

/// Page list lifecycle
#[derive(Debug, Clone, PartialEq)]
pub enum PagesMsg {
    AddPage,
    /// Ask for confirmation before deleting
    RequestDelete(PageId),
    ConfirmDelete,
    CancelDelete,
    /// Drag a page from one index to another
    MovePage { from: usize, to: usize },
    /// Replace the order with an explicit permutation of ids
    Reorder(Vec<PageId>),
    BeginRename(PageId),
    RenameInput(String),
    CommitRename,
    CancelRename,
}

/// Specimen-wide settings
#[derive(Debug, Clone, PartialEq)]
pub enum SpecimenMsg {
    SetFormat(SpecimenFormat),
    SetOrientation(Orientation),
}

/// Results of side effects, fed back by the runtime
#[derive(Debug, Clone, PartialEq)]
pub enum AppMsg {
    PersistCompleted(Result<(), String>),
    UploadCompleted {
        target: AssetTarget,
        result: Result<String, String>,
    },
}

/// Top-level message type
#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    Selection(SelectionMsg),
    Page(PageMsg),
    Cell(CellMsg),
    Pages(PagesMsg),
    Specimen(SpecimenMsg),
    App(AppMsg),
}
