//! Cell settings panel handlers
//!
//! Formatting controls (color, highlight, font, size, line height) go through
//! the selection coordinator: they format the live selection, else the stored
//! selection, else they change the cell's default styling. Every path that
//! touches text persists the surface's serialized content right away.

use crate::commands::{AssetTarget, Cmd, ASSET_FOLDER};
use crate::fonts::find_font;
use crate::messages::CellMsg;
use crate::model::mutation::set_cell;
use crate::model::{CellPatch, CellRef, FontId, FormatOutcome, PaddingDraft, StudioModel};
use crate::surface::SurfaceCommand;
use crate::util::numeric::{clamp_at_least_one, clamp_non_negative, parse_or};

use super::commit_pages;

/// A formatting control's value, before it is routed to text or cell defaults
#[derive(Debug, Clone, PartialEq)]
enum CellFormat {
    TextColor(String),
    Highlight(String),
    Font(FontId),
    FontSize(f64),
    LineHeight(f64),
}

impl CellFormat {
    /// Surface command for a text selection; `None` if the font is unknown
    fn surface_command(&self, model: &StudioModel) -> Option<SurfaceCommand> {
        Some(match self {
            CellFormat::TextColor(color) => SurfaceCommand::SetColor(color.clone()),
            CellFormat::Highlight(color) => SurfaceCommand::SetBackgroundColor(color.clone()),
            CellFormat::Font(font_id) => {
                let font = find_font(&model.fonts, font_id)?;
                SurfaceCommand::SetFontFamily(font.family.clone())
            }
            CellFormat::FontSize(size) => SurfaceCommand::SetFontSize(*size),
            CellFormat::LineHeight(height) => SurfaceCommand::SetLineHeight(*height),
        })
    }

    /// Cell-default field this control falls back to. Highlight has none: it
    /// only exists as an inline mark.
    fn default_patch(&self) -> Option<CellPatch> {
        let mut patch = CellPatch::default();
        match self {
            CellFormat::TextColor(color) => patch.text_color = Some(color.clone()),
            CellFormat::Highlight(_) => return None,
            CellFormat::Font(font_id) => patch.font_id = Some(font_id.clone()),
            CellFormat::FontSize(size) => patch.font_size = Some(*size),
            CellFormat::LineHeight(height) => patch.line_height = Some(*height),
        }
        Some(patch)
    }
}

/// Handle cell panel messages for the open cell
pub fn update_cell(model: &mut StudioModel, msg: CellMsg) -> Option<Cmd> {
    let Some(cell_ref) = model.selection.selected_cell().cloned() else {
        tracing::debug!("cell panel: no open cell, ignoring {:?}", msg);
        return None;
    };
    let cell = model.cell(&cell_ref);

    match msg {
        CellMsg::PaddingInput(input) => {
            model.panels.padding_draft = Some(PaddingDraft {
                cell: cell_ref,
                input,
            });
            None
        }

        CellMsg::ApplyPadding => {
            let draft = model.panels.padding_draft.take()?;
            if draft.cell != cell_ref {
                return None;
            }
            let padding = draft.resolve(cell.padding);
            if padding == cell.padding {
                return None;
            }
            commit_cell(
                model,
                &cell_ref,
                CellPatch {
                    padding: Some(padding),
                    ..CellPatch::default()
                },
            )
        }

        CellMsg::DiscardPadding => {
            model.panels.padding_draft = None;
            None
        }

        CellMsg::Background(edit) => {
            let background = cell.background.with_edit(&edit);
            if background == cell.background {
                return None;
            }
            commit_cell(model, &cell_ref, CellPatch::background(background))
        }

        CellMsg::UploadBackgroundImage(file) => {
            model.ui.is_uploading = true;
            model.ui.set_status("Uploading...");
            Some(Cmd::UploadAsset {
                target: AssetTarget::Cell(cell_ref),
                file,
                folder: ASSET_FOLDER.to_string(),
                owner_id: model.specimen.id.to_string(),
            })
        }

        CellMsg::TextColor(color) => apply_format(model, CellFormat::TextColor(color)),
        CellMsg::Highlight(color) => apply_format(model, CellFormat::Highlight(color)),
        CellMsg::Font(font_id) => apply_format(model, CellFormat::Font(font_id)),

        CellMsg::FontSizeInput(input) => {
            let previous = model
                .selection
                .selection_attributes()
                .and_then(|attrs| attrs.font_size)
                .unwrap_or(cell.font_size);
            let size = clamp_at_least_one(parse_or(&input, previous));
            apply_format(model, CellFormat::FontSize(size))
        }

        CellMsg::LineHeightInput(input) => {
            let previous = model
                .selection
                .selection_attributes()
                .and_then(|attrs| attrs.line_height)
                .unwrap_or(cell.line_height);
            let height = clamp_non_negative(parse_or(&input, previous));
            apply_format(model, CellFormat::LineHeight(height))
        }

        // A per-cell editor preference: never applied to a text selection
        CellMsg::SelectionBackgroundColor(color) => commit_cell(
            model,
            &cell_ref,
            CellPatch {
                selection_background_color: Some(color),
                ..CellPatch::default()
            },
        ),

        CellMsg::TextAlign(text_align) => commit_cell(
            model,
            &cell_ref,
            CellPatch {
                text_align: Some(text_align),
                ..CellPatch::default()
            },
        ),

        CellMsg::VerticalAlign(vertical_align) => commit_cell(
            model,
            &cell_ref,
            CellPatch {
                vertical_align: Some(vertical_align),
                ..CellPatch::default()
            },
        ),
    }
}

/// Route a formatting control to the live selection, stored selection or cell default
fn apply_format(model: &mut StudioModel, format: CellFormat) -> Option<Cmd> {
    if let CellFormat::Font(font_id) = &format {
        if find_font(&model.fonts, font_id).is_none() {
            tracing::warn!(font = %font_id, "font not in catalog, ignoring");
            model.ui.report_error(format!("Unknown font: {}", font_id));
            return None;
        }
    }

    let outcome = if model.selection.state().targets_text() {
        let command = format.surface_command(model)?;
        model.selection.commit(&command)
    } else {
        match model.selection.selected_cell() {
            Some(cell) => FormatOutcome::CellDefault(cell.clone()),
            None => FormatOutcome::NoTarget,
        }
    };

    match outcome {
        FormatOutcome::Applied { cell, content, .. } => {
            commit_cell(model, &cell, CellPatch::content(content))
        }
        FormatOutcome::CellDefault(cell) => {
            let Some(patch) = format.default_patch() else {
                tracing::debug!(?format, "no text selected and no cell default, ignoring");
                return None;
            };
            commit_cell(model, &cell, patch)
        }
        FormatOutcome::NoTarget => None,
    }
}

fn commit_cell(model: &mut StudioModel, cell: &CellRef, patch: CellPatch) -> Option<Cmd> {
    let pages = set_cell(&model.specimen.pages, &cell.page_id, cell.cell_index, patch)?;
    commit_pages(model, pages)
}
