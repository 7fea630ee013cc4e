//! The specimen document and its store patch

use serde::{Deserialize, Serialize};

use super::ids::{PageId, SpecimenId};
use super::page::SpecimenPage;

/// Paper format of the printed specimen
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpecimenFormat {
    #[default]
    A4,
    Letter,
}

impl SpecimenFormat {
    /// Portrait (width, height) in millimetres
    pub fn size_mm(self) -> (f64, f64) {
        match self {
            SpecimenFormat::A4 => (210.0, 297.0),
            SpecimenFormat::Letter => (215.9, 279.4),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    #[default]
    Portrait,
    Landscape,
}

/// A multi-page promotional document showcasing a typeface
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Specimen {
    pub id: SpecimenId,
    pub name: String,
    pub typeface_slug: String,
    #[serde(default)]
    pub format: SpecimenFormat,
    #[serde(default)]
    pub orientation: Orientation,
    #[serde(default)]
    pub pages: Vec<SpecimenPage>,
}

impl Specimen {
    /// A new specimen with a single empty page
    pub fn new(id: SpecimenId, name: impl Into<String>, typeface_slug: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            typeface_slug: typeface_slug.into(),
            format: SpecimenFormat::default(),
            orientation: Orientation::default(),
            pages: vec![SpecimenPage::new(PageId::new("page-1"), "Page 1")],
        }
    }

    pub fn page(&self, page_id: &PageId) -> Option<&SpecimenPage> {
        self.pages.iter().find(|page| &page.id == page_id)
    }

    pub fn page_index(&self, page_id: &PageId) -> Option<usize> {
        self.pages.iter().position(|page| &page.id == page_id)
    }

    /// Page size in millimetres, honouring orientation
    pub fn page_size_mm(&self) -> (f64, f64) {
        let (w, h) = self.format.size_mm();
        match self.orientation {
            Orientation::Portrait => (w, h),
            Orientation::Landscape => (h, w),
        }
    }

    /// Apply a store patch in place
    pub fn apply_patch(&mut self, patch: SpecimenPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(format) = patch.format {
            self.format = format;
        }
        if let Some(orientation) = patch.orientation {
            self.orientation = orientation;
        }
        if let Some(pages) = patch.pages {
            self.pages = pages;
        }
    }
}

/// Partial specimen sent to the store. `pages` is always a whole-array replacement.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpecimenPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<SpecimenFormat>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub orientation: Option<Orientation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pages: Option<Vec<SpecimenPage>>,
}

impl SpecimenPatch {
    pub fn pages(pages: Vec<SpecimenPage>) -> Self {
        Self {
            pages: Some(pages),
            ..Self::default()
        }
    }
}
