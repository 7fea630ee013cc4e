//! App message handlers (side-effect completions)

use crate::commands::{AssetTarget, Cmd};
use crate::messages::AppMsg;
use crate::model::mutation::{set_cell, set_page_field};
use crate::model::{BackgroundEdit, CellPatch, PagePatch, StudioModel};

use super::commit_pages;

/// Handle results fed back by the runtime
pub fn update_app(model: &mut StudioModel, msg: AppMsg) -> Option<Cmd> {
    match msg {
        AppMsg::PersistCompleted(result) => {
            model.ui.pending_writes = model.ui.pending_writes.saturating_sub(1);
            match result {
                Ok(()) => {
                    model.ui.last_error = None;
                    model.ui.set_status("Saved");
                }
                Err(e) => {
                    tracing::warn!(specimen = %model.specimen.id, "persist failed: {}", e);
                    model.ui.report_error(format!("Error saving specimen: {}", e));
                }
            }
            None
        }

        AppMsg::UploadCompleted { target, result } => {
            model.ui.is_uploading = false;
            let url = match result {
                Ok(url) => url,
                Err(e) => {
                    tracing::warn!(?target, "upload failed: {}", e);
                    model.ui.report_error(format!("Upload failed: {}", e));
                    return None;
                }
            };
            let edit = BackgroundEdit::SetImage(Some(url));

            let pages = match target {
                AssetTarget::Page(page_id) => {
                    let page = model.specimen.page(&page_id)?;
                    let background = page.background.with_edit(&edit);
                    set_page_field(
                        &model.specimen.pages,
                        &page_id,
                        PagePatch::background(background),
                    )?
                }
                AssetTarget::Cell(cell) => {
                    let background = model.cell(&cell).background.with_edit(&edit);
                    set_cell(
                        &model.specimen.pages,
                        &cell.page_id,
                        cell.cell_index,
                        CellPatch::background(background),
                    )?
                }
            };
            model.ui.set_status("Background image uploaded");
            commit_pages(model, pages)
        }
    }
}
