//! Selection/editor-state coordinator
//!
//! Settings-panel controls steal focus from the rich-text surface, which
//! collapses the user's text selection before a formatting command can read
//! it. The coordinator bridges that gap:
//!
//! - `Live`: the surface reports a focused, non-empty selection
//! - `Stored`: a selection was captured on panel pointer-down, then focus left
//! - `CellDefault`: a cell is open but there is no selection of any kind
//! - `Idle`: no cell is open
//!
//! Priority when committing a format is `Live > Stored > CellDefault`.
//! Switching cell or page always discards the stored range.

use serde::{Deserialize, Serialize};

use super::ids::{CellRef, PageId};
use crate::surface::{RichTextSurface, SurfaceCommand};

/// Text-offset range inside a surface, `from <= to` once normalized
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SelectionRange {
    pub from: usize,
    pub to: usize,
}

impl SelectionRange {
    pub fn new(from: usize, to: usize) -> Self {
        Self { from, to }
    }

    pub fn is_empty(&self) -> bool {
        self.from == self.to
    }

    /// Same range with endpoints in ascending order
    pub fn normalized(self) -> Self {
        if self.from <= self.to {
            self
        } else {
            Self {
                from: self.to,
                to: self.from,
            }
        }
    }
}

/// Formatting of the live selection inside the active surface
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectionAttributes {
    pub color: Option<String>,
    pub background_color: Option<String>,
    pub font_family: Option<String>,
    pub font_size: Option<f64>,
    pub line_height: Option<f64>,
}

/// Derived coordinator state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionState {
    Idle,
    Live,
    Stored,
    CellDefault,
}

impl SelectionState {
    /// Whether a formatting command would land on text rather than cell defaults
    pub fn targets_text(self) -> bool {
        matches!(self, SelectionState::Live | SelectionState::Stored)
    }
}

/// Where a committed formatting command ended up
#[derive(Debug, Clone, PartialEq)]
pub enum FormatOutcome {
    /// Ran against text; `content` is the surface's serialized output to persist
    Applied {
        cell: CellRef,
        range: SelectionRange,
        content: String,
    },
    /// No selection: the caller should update the cell's default field instead
    CellDefault(CellRef),
    /// No cell open
    NoTarget,
}

/// Tracks the selected page/cell, the active surface and both selection flavours
#[derive(Debug)]
pub struct SelectionCoordinator {
    selected_page_id: PageId,
    selected_cell: Option<CellRef>,
    active_editor: Option<Box<dyn RichTextSurface>>,
    selection_attributes: Option<SelectionAttributes>,
    stored_range: Option<SelectionRange>,
}

impl Default for SelectionCoordinator {
    fn default() -> Self {
        Self::new(PageId::placeholder())
    }
}

impl SelectionCoordinator {
    pub fn new(selected_page_id: PageId) -> Self {
        Self {
            selected_page_id,
            selected_cell: None,
            active_editor: None,
            selection_attributes: None,
            stored_range: None,
        }
    }

    pub fn selected_page_id(&self) -> &PageId {
        &self.selected_page_id
    }

    pub fn selected_cell(&self) -> Option<&CellRef> {
        self.selected_cell.as_ref()
    }

    pub fn selection_attributes(&self) -> Option<&SelectionAttributes> {
        self.selection_attributes.as_ref()
    }

    pub fn stored_range(&self) -> Option<SelectionRange> {
        self.stored_range
    }

    pub fn has_editor(&self) -> bool {
        self.active_editor.is_some()
    }

    pub fn editor(&self) -> Option<&dyn RichTextSurface> {
        self.active_editor.as_deref()
    }

    pub fn state(&self) -> SelectionState {
        if self.selected_cell.is_none() {
            return SelectionState::Idle;
        }
        if self.active_editor.is_some() {
            if self.selection_attributes.is_some() {
                return SelectionState::Live;
            }
            if self.stored_range.is_some() {
                return SelectionState::Stored;
            }
        }
        SelectionState::CellDefault
    }

    /// Select a page; closes any open cell. Returns whether the page changed.
    pub fn select_page(&mut self, page_id: PageId) -> bool {
        let changed = self.selected_page_id != page_id;
        tracing::debug!(target: "selection", page = %page_id, changed, "select page");
        self.selected_page_id = page_id;
        self.close_cell();
        changed
    }

    /// Open a cell for editing. Returns whether the cell changed.
    pub fn select_cell(&mut self, cell: CellRef) -> bool {
        if self.selected_cell.as_ref() == Some(&cell) {
            return false;
        }
        tracing::debug!(target: "selection", %cell, "select cell");
        self.selected_page_id = cell.page_id.clone();
        self.selected_cell = Some(cell);
        self.active_editor = None;
        self.selection_attributes = None;
        self.stored_range = None;
        true
    }

    /// Close the open cell and drop everything tied to it
    pub fn close_cell(&mut self) {
        if self.stored_range.is_some() {
            tracing::debug!(target: "selection", "discarding stored range");
        }
        self.selected_cell = None;
        self.active_editor = None;
        self.selection_attributes = None;
        self.stored_range = None;
    }

    /// Bind the surface of `cell`, opening the cell first if needed
    pub fn attach_editor(&mut self, cell: CellRef, surface: Box<dyn RichTextSurface>) {
        self.select_cell(cell);
        self.active_editor = Some(surface);
        self.refresh_selection();
    }

    pub fn detach_editor(&mut self) -> Option<Box<dyn RichTextSurface>> {
        self.selection_attributes = None;
        self.stored_range = None;
        self.active_editor.take()
    }

    /// Recompute the live attribute snapshot from the surface
    pub fn refresh_selection(&mut self) {
        self.selection_attributes = self
            .active_editor
            .as_ref()
            .and_then(|editor| editor.selection_attributes());
    }

    /// The surface lost focus; its selection is no longer live
    pub fn surface_blurred(&mut self) {
        self.selection_attributes = None;
    }

    /// Pointer-down on a panel control, before the surface sees blur.
    ///
    /// Must run synchronously ahead of the blur. Copies a non-empty selection
    /// into the stored range and returns whether anything was captured. An
    /// empty selection clears any earlier stored range.
    pub fn capture(&mut self) -> bool {
        let Some(editor) = self.active_editor.as_ref() else {
            return false;
        };
        match editor.selection().map(SelectionRange::normalized) {
            Some(range) if !range.is_empty() => {
                tracing::debug!(target: "selection", from = range.from, to = range.to, "captured");
                self.stored_range = Some(range);
                true
            }
            _ => {
                if self.stored_range.take().is_some() {
                    tracing::debug!(target: "selection", "empty selection, stored range cleared");
                }
                false
            }
        }
    }

    /// Commit a formatting command to whichever target currently wins
    pub fn commit(&mut self, command: &SurfaceCommand) -> FormatOutcome {
        let state = self.state();
        let Some(cell) = self.selected_cell.clone() else {
            return FormatOutcome::NoTarget;
        };

        match (state, self.active_editor.as_mut()) {
            (SelectionState::Live, Some(editor)) => {
                let range = editor.selection().unwrap_or_default().normalized();
                editor.run_command(command);
                let content = editor.serialized_content();
                self.selection_attributes = editor.selection_attributes();
                self.stored_range = None;
                tracing::debug!(target: "selection", %cell, %command, "applied to live selection");
                FormatOutcome::Applied {
                    cell,
                    range,
                    content,
                }
            }
            (SelectionState::Stored, Some(editor)) => {
                let range = self.stored_range.take().unwrap_or_default();
                editor.focus();
                editor.set_selection(range);
                editor.run_command(command);
                let content = editor.serialized_content();
                // the panel control keeps focus; the restored selection isn't live
                self.selection_attributes = None;
                tracing::debug!(target: "selection", %cell, %command, "applied to stored selection");
                FormatOutcome::Applied {
                    cell,
                    range,
                    content,
                }
            }
            _ => FormatOutcome::CellDefault(cell),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Debug, Default)]
    struct Recorded {
        focused: bool,
        selection: Option<SelectionRange>,
        commands: Vec<(SelectionRange, String)>,
    }

    #[derive(Debug)]
    struct RecordingSurface(Rc<RefCell<Recorded>>);

    impl RichTextSurface for RecordingSurface {
        fn selection(&self) -> Option<SelectionRange> {
            self.0.borrow().selection
        }

        fn selection_attributes(&self) -> Option<SelectionAttributes> {
            let recorded = self.0.borrow();
            match recorded.selection {
                Some(range) if recorded.focused && !range.is_empty() => {
                    Some(SelectionAttributes::default())
                }
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
            let mut recorded = self.0.borrow_mut();
            let range = recorded.selection.unwrap_or_default();
            recorded.commands.push((range, command.name().to_string()));
        }

        fn serialized_content(&self) -> String {
            format!("<p>{}</p>", self.0.borrow().commands.len())
        }
    }

    fn cell() -> CellRef {
        CellRef::new(PageId::new("p1"), 0)
    }

    fn live_coordinator(range: SelectionRange) -> (SelectionCoordinator, Rc<RefCell<Recorded>>) {
        let recorded = Rc::new(RefCell::new(Recorded {
            focused: true,
            selection: Some(range),
            commands: Vec::new(),
        }));
        let mut coordinator = SelectionCoordinator::new(PageId::new("p1"));
        coordinator.attach_editor(cell(), Box::new(RecordingSurface(recorded.clone())));
        (coordinator, recorded)
    }

    fn blur(coordinator: &mut SelectionCoordinator, recorded: &Rc<RefCell<Recorded>>) {
        {
            let mut p = recorded.borrow_mut();
            p.focused = false;
            p.selection = None;
        }
        coordinator.surface_blurred();
    }

    #[test]
    fn test_state_progression() {
        let mut coordinator = SelectionCoordinator::new(PageId::new("p1"));
        assert_eq!(coordinator.state(), SelectionState::Idle);

        coordinator.select_cell(cell());
        assert_eq!(coordinator.state(), SelectionState::CellDefault);

        let (mut coordinator, recorded) = live_coordinator(SelectionRange::new(2, 6));
        assert_eq!(coordinator.state(), SelectionState::Live);

        assert!(coordinator.capture());
        blur(&mut coordinator, &recorded);
        assert_eq!(coordinator.state(), SelectionState::Stored);
    }

    #[test]
    fn test_capture_ignores_collapsed_selection() {
        let (mut coordinator, _recorded) = live_coordinator(SelectionRange::new(3, 3));
        assert!(!coordinator.capture());
        assert_eq!(coordinator.stored_range(), None);
        assert_eq!(coordinator.state(), SelectionState::CellDefault);
    }

    #[test]
    fn test_empty_capture_clears_stored_range() {
        let (mut coordinator, recorded) = live_coordinator(SelectionRange::new(2, 6));
        assert!(coordinator.capture());
        blur(&mut coordinator, &recorded);
        assert_eq!(coordinator.state(), SelectionState::Stored);

        {
            let mut p = recorded.borrow_mut();
            p.focused = true;
            p.selection = Some(SelectionRange::new(8, 8));
        }
        coordinator.refresh_selection();
        assert!(!coordinator.capture());
        blur(&mut coordinator, &recorded);

        assert_eq!(coordinator.stored_range(), None);
        assert_eq!(coordinator.state(), SelectionState::CellDefault);
    }

    #[test]
    fn test_commit_from_stored_restores_range() {
        let (mut coordinator, recorded) = live_coordinator(SelectionRange::new(6, 2));
        coordinator.capture();
        blur(&mut coordinator, &recorded);

        let outcome = coordinator.commit(&SurfaceCommand::SetColor("#f00".into()));
        let FormatOutcome::Applied { range, .. } = outcome else {
            panic!("expected applied, got {outcome:?}");
        };
        assert_eq!(range, SelectionRange::new(2, 6));
        assert_eq!(
            recorded.borrow().commands,
            vec![(SelectionRange::new(2, 6), "setColor".to_string())]
        );
        assert!(recorded.borrow().focused);
        assert_eq!(coordinator.stored_range(), None);
        assert_eq!(coordinator.state(), SelectionState::CellDefault);
    }

    #[test]
    fn test_live_wins_over_stored() {
        let (mut coordinator, recorded) = live_coordinator(SelectionRange::new(0, 4));
        coordinator.capture();
        // Selection moved without ever losing focus
        recorded.borrow_mut().selection = Some(SelectionRange::new(5, 9));
        coordinator.refresh_selection();

        let outcome = coordinator.commit(&SurfaceCommand::SetFontSize(30.0));
        assert!(matches!(
            outcome,
            FormatOutcome::Applied { range, .. } if range == SelectionRange::new(5, 9)
        ));
        assert_eq!(coordinator.stored_range(), None);
    }

    #[test]
    fn test_switching_cell_discards_stored_range() {
        let (mut coordinator, recorded) = live_coordinator(SelectionRange::new(1, 3));
        coordinator.capture();
        blur(&mut coordinator, &recorded);

        coordinator.select_cell(CellRef::new(PageId::new("p1"), 1));
        assert_eq!(coordinator.stored_range(), None);
        assert!(!coordinator.has_editor());
        assert_eq!(coordinator.state(), SelectionState::CellDefault);
    }

    #[test]
    fn test_switching_page_closes_cell() {
        let (mut coordinator, recorded) = live_coordinator(SelectionRange::new(1, 3));
        coordinator.capture();
        blur(&mut coordinator, &recorded);

        assert!(coordinator.select_page(PageId::new("p2")));
        assert_eq!(coordinator.selected_cell(), None);
        assert_eq!(coordinator.stored_range(), None);
        assert_eq!(coordinator.state(), SelectionState::Idle);
    }

    #[test]
    fn test_commit_without_cell_has_no_target() {
        let mut coordinator = SelectionCoordinator::new(PageId::new("p1"));
        assert_eq!(
            coordinator.commit(&SurfaceCommand::SetColor("#000".into())),
            FormatOutcome::NoTarget
        );
    }
}
