//! Page lifecycle over the `pages` array: add, delete, reorder

use std::collections::HashSet;
use std::fmt;

use super::ids::PageId;
use super::page::SpecimenPage;

/// Reasons a lifecycle operation is refused
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageError {
    /// A specimen must keep at least one page
    LastPage,
    NotFound(PageId),
    /// The requested order is not a permutation of the current page ids
    NotAPermutation,
    IndexOutOfRange { index: usize, len: usize },
}

impl fmt::Display for PageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LastPage => f.write_str("cannot delete the last remaining page"),
            Self::NotFound(id) => write!(f, "page not found ({id})"),
            Self::NotAPermutation => f.write_str("page order is not a permutation of the pages"),
            Self::IndexOutOfRange { index, len } => {
                write!(f, "page index {index} out of range (len={len})")
            }
        }
    }
}

impl std::error::Error for PageError {}

/// Pick a `page-N` id that no existing page uses
pub fn next_page_id(pages: &[SpecimenPage]) -> PageId {
    let taken: HashSet<&str> = pages.iter().map(|p| p.id.as_str()).collect();
    let mut n = pages.len() + 1;
    loop {
        let candidate = format!("page-{n}");
        if !taken.contains(candidate.as_str()) {
            return PageId::new(candidate);
        }
        n += 1;
    }
}

/// Append a fresh page and return the new array with its id
pub fn add_page(pages: &[SpecimenPage]) -> (Vec<SpecimenPage>, PageId) {
    let id = next_page_id(pages);
    let mut next = pages.to_vec();
    next.push(SpecimenPage::new(id.clone(), format!("Page {}", pages.len() + 1)));
    (next, id)
}

/// Remove a page; refuses to drop the last one
pub fn remove_page(
    pages: &[SpecimenPage],
    page_id: &PageId,
) -> Result<Vec<SpecimenPage>, PageError> {
    let index = pages
        .iter()
        .position(|p| &p.id == page_id)
        .ok_or_else(|| PageError::NotFound(page_id.clone()))?;
    if pages.len() <= 1 {
        return Err(PageError::LastPage);
    }
    let mut next = pages.to_vec();
    next.remove(index);
    Ok(next)
}

/// Drag-reorder: move the page at `from` so it ends up at `to`
pub fn move_page(
    pages: &[SpecimenPage],
    from: usize,
    to: usize,
) -> Result<Vec<SpecimenPage>, PageError> {
    let len = pages.len();
    for index in [from, to] {
        if index >= len {
            return Err(PageError::IndexOutOfRange { index, len });
        }
    }
    let mut next = pages.to_vec();
    let page = next.remove(from);
    next.insert(to, page);
    Ok(next)
}

/// Reorder pages to match `order`, which must name every page exactly once
pub fn reorder_pages(
    pages: &[SpecimenPage],
    order: &[PageId],
) -> Result<Vec<SpecimenPage>, PageError> {
    if order.len() != pages.len() {
        return Err(PageError::NotAPermutation);
    }
    let mut seen = HashSet::with_capacity(order.len());
    let mut next = Vec::with_capacity(order.len());
    for id in order {
        if !seen.insert(id) {
            return Err(PageError::NotAPermutation);
        }
        let page = pages
            .iter()
            .find(|p| &p.id == id)
            .ok_or(PageError::NotAPermutation)?;
        next.push(page.clone());
    }
    Ok(next)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pages(ids: &[&str]) -> Vec<SpecimenPage> {
        ids.iter()
            .map(|id| SpecimenPage::new(PageId::new(*id), id.to_uppercase()))
            .collect()
    }

    fn ids(pages: &[SpecimenPage]) -> Vec<&str> {
        pages.iter().map(|p| p.id.as_str()).collect()
    }

    #[test]
    fn test_next_page_id_skips_taken() {
        let existing = pages(&["page-2", "page-3"]);
        assert_eq!(next_page_id(&existing), PageId::new("page-4"));
    }

    #[test]
    fn test_add_page_appends() {
        let (next, id) = add_page(&pages(&["page-1"]));
        assert_eq!(ids(&next), vec!["page-1", "page-2"]);
        assert_eq!(id, PageId::new("page-2"));
        assert!(next[1].cells.is_empty());
    }

    #[test]
    fn test_remove_last_page_refused() {
        let one = pages(&["a"]);
        assert_eq!(remove_page(&one, &PageId::new("a")), Err(PageError::LastPage));
    }

    #[test]
    fn test_remove_page() {
        let next = remove_page(&pages(&["a", "b", "c"]), &PageId::new("b")).unwrap();
        assert_eq!(ids(&next), vec!["a", "c"]);
    }

    #[test]
    fn test_move_page_and_inverse() {
        let original = pages(&["a", "b", "c", "d"]);
        let moved = move_page(&original, 0, 2).unwrap();
        assert_eq!(ids(&moved), vec!["b", "c", "a", "d"]);
        let restored = move_page(&moved, 2, 0).unwrap();
        assert_eq!(restored, original);
    }

    #[test]
    fn test_move_page_out_of_range() {
        assert_eq!(
            move_page(&pages(&["a"]), 0, 3),
            Err(PageError::IndexOutOfRange { index: 3, len: 1 })
        );
    }

    #[test]
    fn test_reorder_rejects_duplicates_and_unknowns() {
        let original = pages(&["a", "b"]);
        let dup = [PageId::new("a"), PageId::new("a")];
        assert_eq!(reorder_pages(&original, &dup), Err(PageError::NotAPermutation));
        let unknown = [PageId::new("a"), PageId::new("z")];
        assert_eq!(reorder_pages(&original, &unknown), Err(PageError::NotAPermutation));
        let short = [PageId::new("a")];
        assert_eq!(reorder_pages(&original, &short), Err(PageError::NotAPermutation));
    }
}
