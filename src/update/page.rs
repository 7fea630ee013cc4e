//! Page settings panel handlers (margins, background, grid, template)
//!
//! Margins are batched in a local draft until Apply. Background, grid and
//! template edits commit immediately.

use crate::commands::{AssetTarget, Cmd, ASSET_FOLDER};
use crate::messages::PageMsg;
use crate::model::mutation::set_page_field;
use crate::model::{Grid, MarginDraft, PageId, PagePatch, StudioModel};
use crate::template::apply_template;
use crate::util::numeric::{parse_count, parse_spacing};

use super::commit_pages;

/// Handle page panel messages for the selected page
pub fn update_page(model: &mut StudioModel, msg: PageMsg) -> Option<Cmd> {
    let page_id = model.selection.selected_page_id().clone();
    if page_id.is_placeholder() {
        tracing::debug!("page panel: no page yet, ignoring {:?}", msg);
        return None;
    }
    let page = model.specimen.page(&page_id)?.clone();

    match msg {
        PageMsg::MarginInput { side, value } => {
            model
                .panels
                .margin_draft
                .get_or_insert_with(|| MarginDraft::from_committed(&page.margins))
                .set(side, value);
            None
        }

        PageMsg::ApplyMargins => {
            let draft = model.panels.margin_draft.take()?;
            let margins = draft.resolve(&page.margins);
            if margins == page.margins {
                return None;
            }
            tracing::info!(page = %page_id, ?margins, "applying margins");
            commit_page(model, &page_id, PagePatch::margins(margins))
        }

        PageMsg::DiscardMargins => {
            model.panels.margin_draft = None;
            None
        }

        PageMsg::Background(edit) => {
            let background = page.background.with_edit(&edit);
            if background == page.background {
                return None;
            }
            commit_page(model, &page_id, PagePatch::background(background))
        }

        PageMsg::UploadBackgroundImage(file) => {
            model.ui.is_uploading = true;
            model.ui.set_status("Uploading...");
            Some(Cmd::UploadAsset {
                target: AssetTarget::Page(page_id),
                file,
                folder: ASSET_FOLDER.to_string(),
                owner_id: model.specimen.id.to_string(),
            })
        }

        PageMsg::GridColumnsInput(input) => {
            let mut grid = page.grid;
            grid.columns = parse_count(&input, grid.columns);
            commit_grid(model, &page_id, page.grid, grid)
        }

        PageMsg::GridRowsInput(input) => {
            let mut grid = page.grid;
            grid.rows = parse_count(&input, grid.rows);
            commit_grid(model, &page_id, page.grid, grid)
        }

        PageMsg::GridGapInput(input) => {
            let mut grid = page.grid;
            grid.gap = parse_spacing(&input, grid.gap);
            commit_grid(model, &page_id, page.grid, grid)
        }

        PageMsg::SetShowGrid(show_grid) => {
            let mut grid = page.grid;
            grid.show_grid = show_grid;
            commit_grid(model, &page_id, page.grid, grid)
        }

        PageMsg::ApplyTemplate(template_id) => {
            let Some(template) = model.find_template(&template_id).cloned() else {
                tracing::warn!(template = %template_id, "unknown template");
                model.ui.report_error(format!("Unknown template: {}", template_id));
                return None;
            };
            let pages = apply_template(&model.specimen.pages, &page_id, &template)?;
            tracing::info!(page = %page_id, template = %template_id, "applied template");
            // Cells were replaced wholesale, so any open cell editor is stale
            if model.selection.selected_cell().is_some() {
                model.selection.close_cell();
                model.panels.padding_draft = None;
            }
            commit_pages(model, pages)
        }
    }
}

fn commit_page(model: &mut StudioModel, page_id: &PageId, patch: PagePatch) -> Option<Cmd> {
    let pages = set_page_field(&model.specimen.pages, page_id, patch)?;
    commit_pages(model, pages)
}

fn commit_grid(
    model: &mut StudioModel,
    page_id: &PageId,
    before: Grid,
    after: Grid,
) -> Option<Cmd> {
    if before == after {
        return None;
    }
    commit_page(model, page_id, PagePatch::grid(after))
}
