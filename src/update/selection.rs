//! Selection message handlers (page/cell selection, surface focus events)

use crate::commands::Cmd;
use crate::messages::SelectionMsg;
use crate::model::mutation::set_cell;
use crate::model::{CellPatch, StudioModel};

use super::commit_pages;

/// Handle selection and text-surface messages
pub fn update_selection(model: &mut StudioModel, msg: SelectionMsg) -> Option<Cmd> {
    match msg {
        SelectionMsg::SelectPage(page_id) => {
            if model.specimen.page(&page_id).is_none() {
                tracing::warn!(page = %page_id, "select page: unknown page");
                model.ui.report_error(format!("Unknown page: {}", page_id));
                return None;
            }
            model.selection.select_page(page_id);
            model.panels.discard_drafts();
            model.panels.rename = None;
            None
        }

        SelectionMsg::SelectCell(cell) => {
            let Some(page) = model.specimen.page(&cell.page_id) else {
                tracing::warn!(%cell, "select cell: unknown page");
                model.ui.report_error(format!("Unknown page: {}", cell.page_id));
                return None;
            };
            if cell.cell_index >= page.grid.cell_count() {
                tracing::warn!(%cell, cells = page.grid.cell_count(), "select cell: outside grid");
                let cells = page.grid.cell_count();
                model
                    .ui
                    .report_error(format!("Cell {} is outside the {}-cell grid", cell, cells));
                return None;
            }
            if model.selection.selected_page_id() != &cell.page_id {
                model.panels.discard_drafts();
            }
            if model.selection.select_cell(cell) {
                model.panels.padding_draft = None;
            }
            None
        }

        SelectionMsg::CloseCell => {
            model.selection.close_cell();
            model.panels.padding_draft = None;
            None
        }

        SelectionMsg::SurfaceSelectionChanged => {
            model.selection.refresh_selection();
            None
        }

        SelectionMsg::SurfaceBlurred => {
            model.selection.surface_blurred();
            None
        }

        SelectionMsg::SurfaceContentChanged => {
            let cell = model.selection.selected_cell()?.clone();
            let content = model.selection.editor()?.serialized_content();
            if model.cell(&cell).content == content {
                return None;
            }
            let pages = set_cell(
                &model.specimen.pages,
                &cell.page_id,
                cell.cell_index,
                CellPatch::content(content),
            )?;
            commit_pages(model, pages)
        }

        SelectionMsg::DetachSurface => {
            model.selection.detach_editor();
            None
        }

        SelectionMsg::PanelPointerDown => {
            model.selection.capture();
            None
        }
    }
}
