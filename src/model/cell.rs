//! Grid cells and their default styling

use serde::{Deserialize, Serialize};

use super::background::Background;
use super::ids::FontId;
use crate::util::numeric::{clamp_at_least_one, clamp_non_negative};

/// Horizontal alignment of cell text
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
    Justify,
}

/// Vertical placement of the text block inside the cell
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerticalAlign {
    #[default]
    Top,
    Middle,
    Bottom,
}

/// One grid-addressable rich-text region of a page.
///
/// Everything except `content` is cell-default styling: it applies to any
/// text inside `content` that carries no inline override.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SpecimenPageCell {
    pub background: Background,
    pub padding: u32,
    pub text_color: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_id: Option<FontId>,
    pub font_size: f64,
    pub line_height: f64,
    pub selection_background_color: String,
    pub text_align: TextAlign,
    pub vertical_align: VerticalAlign,
    /// Serialized rich-text markup, owned by the text surface
    pub content: String,
}

impl Default for SpecimenPageCell {
    fn default() -> Self {
        Self {
            background: Background::cell_default(),
            padding: 16,
            text_color: "#000000".to_string(),
            font_id: None,
            font_size: 24.0,
            line_height: 1.2,
            selection_background_color: "#b4d5fe".to_string(),
            text_align: TextAlign::default(),
            vertical_align: VerticalAlign::default(),
            content: String::new(),
        }
    }
}

impl SpecimenPageCell {
    /// Clamp numeric fields into their valid ranges
    pub fn normalized(mut self) -> Self {
        self.font_size = clamp_at_least_one(self.font_size);
        self.line_height = clamp_non_negative(self.line_height);
        self
    }
}

/// Partial update for a cell; `None` fields are left untouched
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CellPatch {
    pub background: Option<Background>,
    pub padding: Option<u32>,
    pub text_color: Option<String>,
    pub font_id: Option<FontId>,
    pub font_size: Option<f64>,
    pub line_height: Option<f64>,
    pub selection_background_color: Option<String>,
    pub text_align: Option<TextAlign>,
    pub vertical_align: Option<VerticalAlign>,
    pub content: Option<String>,
}

impl CellPatch {
    pub fn content(content: impl Into<String>) -> Self {
        Self {
            content: Some(content.into()),
            ..Self::default()
        }
    }

    pub fn background(background: Background) -> Self {
        Self {
            background: Some(background),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Merge into `cell`, clamping numeric fields on the way in
    pub fn apply_to(self, cell: &mut SpecimenPageCell) {
        if let Some(background) = self.background {
            cell.background = background;
        }
        if let Some(padding) = self.padding {
            cell.padding = padding;
        }
        if let Some(text_color) = self.text_color {
            cell.text_color = text_color;
        }
        if let Some(font_id) = self.font_id {
            cell.font_id = Some(font_id);
        }
        if let Some(font_size) = self.font_size {
            cell.font_size = clamp_at_least_one(font_size);
        }
        if let Some(line_height) = self.line_height {
            cell.line_height = clamp_non_negative(line_height);
        }
        if let Some(color) = self.selection_background_color {
            cell.selection_background_color = color;
        }
        if let Some(text_align) = self.text_align {
            cell.text_align = text_align;
        }
        if let Some(vertical_align) = self.vertical_align {
            cell.vertical_align = vertical_align;
        }
        if let Some(content) = self.content {
            cell.content = content;
        }
    }
}
