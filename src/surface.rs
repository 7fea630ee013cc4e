//! Rich-text surface capability
//!
//! The embedded rich-text editor is imperative and focus-coupled. The
//! coordinator only talks to it through [`RichTextSurface`], so it can be
//! driven by a real editor binding or by a fake in tests.

use std::fmt;

use crate::model::selection::{SelectionAttributes, SelectionRange};

/// A formatting command understood by the surface
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceCommand {
    SetColor(String),
    SetBackgroundColor(String),
    SetFontFamily(String),
    SetFontSize(f64),
    SetLineHeight(f64),
}

impl SurfaceCommand {
    /// Command name as registered with the editor
    pub fn name(&self) -> &'static str {
        match self {
            SurfaceCommand::SetColor(_) => "setColor",
            SurfaceCommand::SetBackgroundColor(_) => "setBackgroundColor",
            SurfaceCommand::SetFontFamily(_) => "setFontFamily",
            SurfaceCommand::SetFontSize(_) => "setFontSize",
            SurfaceCommand::SetLineHeight(_) => "setLineHeight",
        }
    }
}

impl fmt::Display for SurfaceCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SurfaceCommand::SetColor(v)
            | SurfaceCommand::SetBackgroundColor(v)
            | SurfaceCommand::SetFontFamily(v) => write!(f, "{}({})", self.name(), v),
            SurfaceCommand::SetFontSize(v) | SurfaceCommand::SetLineHeight(v) => {
                write!(f, "{}({})", self.name(), v)
            }
        }
    }
}

/// Handle into the focused rich-text editor of one cell
pub trait RichTextSurface: fmt::Debug {
    /// Current selection, `None` when collapsed or absent
    fn selection(&self) -> Option<SelectionRange>;

    /// Formatting of the live selection, `None` without a focused non-empty selection
    fn selection_attributes(&self) -> Option<SelectionAttributes>;

    fn focus(&mut self);

    fn set_selection(&mut self, range: SelectionRange);

    /// Run a formatting command against the current selection
    fn run_command(&mut self, command: &SurfaceCommand);

    /// Serialized markup to persist into `SpecimenPageCell::content`
    fn serialized_content(&self) -> String;
}
