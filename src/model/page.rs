//! Specimen pages: margins, grid, background and cells

use serde::{Deserialize, Serialize};

use super::background::Background;
use super::cell::SpecimenPageCell;
use super::ids::PageId;

/// Page margins in points
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct Margins {
    pub left: u32,
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
}

impl Default for Margins {
    fn default() -> Self {
        Self::uniform(40)
    }
}

impl Margins {
    pub fn uniform(value: u32) -> Self {
        Self {
            left: value,
            top: value,
            right: value,
            bottom: value,
        }
    }

    pub fn get(&self, side: MarginSide) -> u32 {
        match side {
            MarginSide::Left => self.left,
            MarginSide::Top => self.top,
            MarginSide::Right => self.right,
            MarginSide::Bottom => self.bottom,
        }
    }

    pub fn set(&mut self, side: MarginSide, value: u32) {
        match side {
            MarginSide::Left => self.left = value,
            MarginSide::Top => self.top = value,
            MarginSide::Right => self.right = value,
            MarginSide::Bottom => self.bottom = value,
        }
    }
}

/// One edge of the page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MarginSide {
    Left,
    Top,
    Right,
    Bottom,
}

impl MarginSide {
    pub const ALL: [MarginSide; 4] = [
        MarginSide::Left,
        MarginSide::Top,
        MarginSide::Right,
        MarginSide::Bottom,
    ];
}

/// Layout grid dividing the page into cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Grid {
    pub columns: u32,
    pub rows: u32,
    pub gap: u32,
    pub show_grid: bool,
}

impl Default for Grid {
    fn default() -> Self {
        Self {
            columns: 2,
            rows: 2,
            gap: 16,
            show_grid: true,
        }
    }
}

impl Grid {
    /// Columns and rows are never below one
    pub fn normalized(self) -> Self {
        Self {
            columns: self.columns.max(1),
            rows: self.rows.max(1),
            ..self
        }
    }

    /// Number of addressable cells
    pub fn cell_count(&self) -> usize {
        self.columns.max(1) as usize * self.rows.max(1) as usize
    }
}

/// One page of a specimen
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpecimenPage {
    pub id: PageId,
    pub name: String,
    #[serde(default)]
    pub margins: Margins,
    #[serde(default = "Background::page_default")]
    pub background: Background,
    #[serde(default)]
    pub grid: Grid,
    /// `cells[i]` is the i-th grid cell in row-major order
    #[serde(default)]
    pub cells: Vec<SpecimenPageCell>,
}

impl SpecimenPage {
    /// A fresh page: default margins, background, grid and no cells
    pub fn new(id: PageId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            margins: Margins::default(),
            background: Background::page_default(),
            grid: Grid::default(),
            cells: Vec::new(),
        }
    }

    /// The cell at `index`, if it has been materialized
    pub fn cell(&self, index: usize) -> Option<&SpecimenPageCell> {
        self.cells.get(index)
    }
}

/// Partial update for page-level fields; `None` fields are left untouched
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PagePatch {
    pub name: Option<String>,
    pub margins: Option<Margins>,
    pub background: Option<Background>,
    pub grid: Option<Grid>,
    pub cells: Option<Vec<SpecimenPageCell>>,
}

impl PagePatch {
    pub fn margins(margins: Margins) -> Self {
        Self {
            margins: Some(margins),
            ..Self::default()
        }
    }

    pub fn background(background: Background) -> Self {
        Self {
            background: Some(background),
            ..Self::default()
        }
    }

    pub fn grid(grid: Grid) -> Self {
        Self {
            grid: Some(grid),
            ..Self::default()
        }
    }

    pub fn name(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    /// Merge into `page`; grid dimensions are normalized on the way in
    pub fn apply_to(self, page: &mut SpecimenPage) {
        if let Some(name) = self.name {
            page.name = name;
        }
        if let Some(margins) = self.margins {
            page.margins = margins;
        }
        if let Some(background) = self.background {
            page.background = background;
        }
        if let Some(grid) = self.grid {
            page.grid = grid.normalized();
        }
        if let Some(cells) = self.cells {
            page.cells = cells;
        }
    }
}

/// The three fields a template owns on a page
#[derive(Debug, Clone, PartialEq)]
pub struct PageFields {
    pub grid: Grid,
    pub background: Background,
    pub cells: Vec<SpecimenPageCell>,
}

impl From<PageFields> for PagePatch {
    fn from(fields: PageFields) -> Self {
        Self {
            grid: Some(fields.grid),
            background: Some(fields.background),
            cells: Some(fields.cells),
            ..Self::default()
        }
    }
}
