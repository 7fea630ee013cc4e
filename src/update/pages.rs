//! Page list handlers (add, confirm-gated delete, reorder, inline rename)

use crate::commands::Cmd;
use crate::messages::PagesMsg;
use crate::model::lifecycle::{add_page, move_page, remove_page, reorder_pages};
use crate::model::mutation::set_page_field;
use crate::model::{PagePatch, RenameDraft, StudioModel};

use super::commit_pages;

/// Handle page list messages
pub fn update_pages(model: &mut StudioModel, msg: PagesMsg) -> Option<Cmd> {
    match msg {
        PagesMsg::AddPage => {
            let (pages, page_id) = add_page(&model.specimen.pages);
            tracing::info!(page = %page_id, "added page");
            let cmd = commit_pages(model, pages);
            model.selection.select_page(page_id);
            model.panels.discard_drafts();
            cmd
        }

        PagesMsg::RequestDelete(page_id) => {
            if model.specimen.page(&page_id).is_none() {
                model.ui.report_error(format!("Unknown page: {}", page_id));
                return None;
            }
            if model.specimen.pages.len() <= 1 {
                model.ui.report_error("A specimen needs at least one page");
                return None;
            }
            model.panels.pending_delete = Some(page_id);
            None
        }

        PagesMsg::CancelDelete => {
            model.panels.pending_delete = None;
            None
        }

        PagesMsg::ConfirmDelete => {
            let page_id = model.panels.pending_delete.take()?;
            let index = model.specimen.page_index(&page_id)?;
            let pages = match remove_page(&model.specimen.pages, &page_id) {
                Ok(pages) => pages,
                Err(e) => {
                    tracing::warn!(page = %page_id, "delete refused: {}", e);
                    model.ui.report_error(format!("Cannot delete page: {}", e));
                    return None;
                }
            };

            if model.selection.selected_page_id() == &page_id {
                let neighbour = &pages[index.min(pages.len() - 1)];
                model.selection.select_page(neighbour.id.clone());
                model.panels.discard_drafts();
            }
            if model
                .panels
                .rename
                .as_ref()
                .is_some_and(|rename| rename.page_id == page_id)
            {
                model.panels.rename = None;
            }
            tracing::info!(page = %page_id, "deleted page");
            commit_pages(model, pages)
        }

        PagesMsg::MovePage { from, to } => {
            if from == to {
                return None;
            }
            match move_page(&model.specimen.pages, from, to) {
                Ok(pages) => commit_pages(model, pages),
                Err(e) => {
                    tracing::warn!("move page refused: {}", e);
                    model.ui.report_error(format!("Cannot move page: {}", e));
                    None
                }
            }
        }

        PagesMsg::Reorder(order) => match reorder_pages(&model.specimen.pages, &order) {
            Ok(pages) => {
                if pages == model.specimen.pages {
                    return None;
                }
                commit_pages(model, pages)
            }
            Err(e) => {
                tracing::warn!("reorder refused: {}", e);
                model.ui.report_error(format!("Cannot reorder pages: {}", e));
                None
            }
        },

        PagesMsg::BeginRename(page_id) => {
            let Some(page) = model.specimen.page(&page_id) else {
                model.ui.report_error(format!("Unknown page: {}", page_id));
                return None;
            };
            model.panels.rename = Some(RenameDraft {
                input: page.name.clone(),
                page_id,
            });
            None
        }

        PagesMsg::RenameInput(input) => {
            if let Some(rename) = model.panels.rename.as_mut() {
                rename.input = input;
            }
            None
        }

        PagesMsg::CancelRename => {
            model.panels.rename = None;
            None
        }

        PagesMsg::CommitRename => {
            let rename = model.panels.rename.as_ref()?;
            // Invalid names keep the inline editor open
            let Some(name) = rename.validated().map(str::to_owned) else {
                model.ui.report_error("Page name cannot be empty");
                return None;
            };
            let page_id = rename.page_id.clone();
            model.panels.rename = None;

            let current = model.specimen.page(&page_id)?;
            if current.name == name {
                return None;
            }
            let pages = set_page_field(&model.specimen.pages, &page_id, PagePatch::name(name))?;
            commit_pages(model, pages)
        }
    }
}
