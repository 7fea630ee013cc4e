//! Font catalog collaborator
//!
//! Supplies the fonts offered by the cell panel's font control. Read-only
//! from the engine's point of view.

use serde::{Deserialize, Serialize};

use crate::model::ids::FontId;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontStyle {
    #[default]
    Normal,
    Italic,
}

/// One selectable font
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FontEntry {
    pub id: FontId,
    pub family: String,
    pub weight: u16,
    #[serde(default)]
    pub style: FontStyle,
}

impl FontEntry {
    pub fn new(id: impl Into<String>, family: impl Into<String>, weight: u16, style: FontStyle) -> Self {
        Self {
            id: FontId::new(id),
            family: family.into(),
            weight,
            style,
        }
    }

    /// Label shown in the font dropdown, e.g. "Grotesk 700 Italic"
    pub fn label(&self) -> String {
        match self.style {
            FontStyle::Normal => format!("{} {}", self.family, self.weight),
            FontStyle::Italic => format!("{} {} Italic", self.family, self.weight),
        }
    }
}

/// Source of available fonts
pub trait FontCatalog {
    fn fonts(&self) -> &[FontEntry];

    fn find(&self, id: &FontId) -> Option<&FontEntry> {
        self.fonts().iter().find(|font| &font.id == id)
    }
}

/// Catalog backed by a fixed list
#[derive(Debug, Clone, Default)]
pub struct StaticFontCatalog {
    fonts: Vec<FontEntry>,
}

impl StaticFontCatalog {
    pub fn new(fonts: Vec<FontEntry>) -> Self {
        Self { fonts }
    }
}

impl FontCatalog for StaticFontCatalog {
    fn fonts(&self) -> &[FontEntry] {
        &self.fonts
    }
}

/// Look up a font by id in a plain slice
pub fn find_font<'a>(fonts: &'a [FontEntry], id: &FontId) -> Option<&'a FontEntry> {
    fonts.iter().find(|font| &font.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_find() {
        let catalog = StaticFontCatalog::new(vec![
            FontEntry::new("g-400", "Grotesk", 400, FontStyle::Normal),
            FontEntry::new("g-700i", "Grotesk", 700, FontStyle::Italic),
        ]);
        let font = catalog.find(&FontId::new("g-700i")).unwrap();
        assert_eq!(font.label(), "Grotesk 700 Italic");
        assert!(catalog.find(&FontId::new("missing")).is_none());
    }
}
