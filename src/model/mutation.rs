//! Mutation primitives over the `pages` array
//!
//! Every primitive takes the current pages by reference and returns a whole
//! new array, or `None` when it is a no-op. Callers replace
//! `Specimen::pages` with the result and issue exactly one persistence call.

use super::cell::{CellPatch, SpecimenPageCell};
use super::ids::PageId;
use super::page::{PagePatch, SpecimenPage};

/// Grow `items` with `default` until `items[index]` exists.
///
/// This is the only place cell arrays grow, so they never contain holes.
pub fn ensure_length<T>(items: &mut Vec<T>, index: usize, mut default: impl FnMut() -> T) {
    while items.len() <= index {
        items.push(default());
    }
}

fn locate(pages: &[SpecimenPage], page_id: &PageId) -> Option<usize> {
    if page_id.is_placeholder() {
        return None;
    }
    pages.iter().position(|page| &page.id == page_id)
}

/// Merge `patch` into the page's own fields
pub fn set_page_field(
    pages: &[SpecimenPage],
    page_id: &PageId,
    patch: PagePatch,
) -> Option<Vec<SpecimenPage>> {
    let index = locate(pages, page_id)?;
    let mut next = pages.to_vec();
    patch.apply_to(&mut next[index]);
    Some(next)
}

/// Merge `patch` into `cells[cell_index]`, padding the cell array first
pub fn set_cell(
    pages: &[SpecimenPage],
    page_id: &PageId,
    cell_index: usize,
    patch: CellPatch,
) -> Option<Vec<SpecimenPage>> {
    let index = locate(pages, page_id)?;
    let mut next = pages.to_vec();
    let cells = &mut next[index].cells;
    ensure_length(cells, cell_index, SpecimenPageCell::default);
    patch.apply_to(&mut cells[cell_index]);
    Some(next)
}
