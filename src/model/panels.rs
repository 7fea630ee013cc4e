//! Settings panel state: batched numeric drafts, rename and delete confirmation

use super::ids::{CellRef, PageId};
use super::page::{MarginSide, Margins};
use crate::util::numeric::parse_spacing;

/// Which settings panel the container shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActivePanel {
    Page(PageId),
    Cell(CellRef),
}

/// In-progress margin edits, kept as raw text until Apply
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarginDraft {
    pub left: String,
    pub top: String,
    pub right: String,
    pub bottom: String,
}

impl MarginDraft {
    pub fn from_committed(margins: &Margins) -> Self {
        Self {
            left: margins.left.to_string(),
            top: margins.top.to_string(),
            right: margins.right.to_string(),
            bottom: margins.bottom.to_string(),
        }
    }

    pub fn input(&self, side: MarginSide) -> &str {
        match side {
            MarginSide::Left => &self.left,
            MarginSide::Top => &self.top,
            MarginSide::Right => &self.right,
            MarginSide::Bottom => &self.bottom,
        }
    }

    pub fn set(&mut self, side: MarginSide, value: impl Into<String>) {
        let value = value.into();
        match side {
            MarginSide::Left => self.left = value,
            MarginSide::Top => self.top = value,
            MarginSide::Right => self.right = value,
            MarginSide::Bottom => self.bottom = value,
        }
    }

    /// Parsed and clamped margins; unparsable sides keep the committed value
    pub fn resolve(&self, committed: &Margins) -> Margins {
        let mut margins = *committed;
        for side in MarginSide::ALL {
            margins.set(side, parse_spacing(self.input(side), committed.get(side)));
        }
        margins
    }

    pub fn is_dirty(&self, committed: &Margins) -> bool {
        self.resolve(committed) != *committed
    }
}

/// In-progress padding edit for the open cell
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaddingDraft {
    pub cell: CellRef,
    pub input: String,
}

impl PaddingDraft {
    pub fn resolve(&self, committed: u32) -> u32 {
        parse_spacing(&self.input, committed)
    }

    pub fn is_dirty(&self, committed: u32) -> bool {
        self.resolve(committed) != committed
    }
}

/// Inline page rename in progress
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenameDraft {
    pub page_id: PageId,
    pub input: String,
}

impl RenameDraft {
    /// Trimmed name, or `None` if it would be empty
    pub fn validated(&self) -> Option<&str> {
        let name = self.input.trim();
        (!name.is_empty()).then_some(name)
    }
}

/// Local panel state that isn't part of the persisted document
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PanelState {
    /// Margin draft for the selected page
    pub margin_draft: Option<MarginDraft>,
    pub padding_draft: Option<PaddingDraft>,
    pub rename: Option<RenameDraft>,
    /// Page awaiting delete confirmation
    pub pending_delete: Option<PageId>,
}

impl PanelState {
    /// Drop every local draft (page or cell switched)
    pub fn discard_drafts(&mut self) {
        self.margin_draft = None;
        self.padding_draft = None;
    }

    /// Whether the margin Apply button should be shown
    pub fn margins_unsaved(&self, committed: &Margins) -> bool {
        self.margin_draft
            .as_ref()
            .is_some_and(|draft| draft.is_dirty(committed))
    }

    /// Whether the padding Apply button should be shown
    pub fn padding_unsaved(&self, committed: u32) -> bool {
        self.padding_draft
            .as_ref()
            .is_some_and(|draft| draft.is_dirty(committed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_margin_draft_resolves_with_fallback() {
        let committed = Margins::uniform(10);
        let mut draft = MarginDraft::from_committed(&committed);
        assert!(!draft.is_dirty(&committed));

        draft.set(MarginSide::Left, "24");
        draft.set(MarginSide::Top, "oops");
        draft.set(MarginSide::Right, "-3");
        let resolved = draft.resolve(&committed);
        assert_eq!(
            resolved,
            Margins {
                left: 24,
                top: 10,
                right: 0,
                bottom: 10
            }
        );
        assert!(draft.is_dirty(&committed));
    }

    #[test]
    fn test_rename_validation() {
        let draft = RenameDraft {
            page_id: PageId::new("p"),
            input: "  Cover  ".into(),
        };
        assert_eq!(draft.validated(), Some("Cover"));

        let blank = RenameDraft {
            page_id: PageId::new("p"),
            input: "   ".into(),
        };
        assert_eq!(blank.validated(), None);
    }
}
