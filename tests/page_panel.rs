//! Page settings panel tests: margin batching, grid, background, templates

mod common;

use common::{cell, open_cell, page_id, persists, send, test_model};
use specimen_studio::commands::{AssetTarget, Cmd};
use specimen_studio::messages::{Msg, PageMsg, SelectionMsg};
use specimen_studio::model::{
    BackgroundEdit, BackgroundKind, Fill, Gradient, Grid, MarginSide, Margins, PageId, SelectionState,
    StudioModel, TextAlign,
};

fn margin(model: &mut StudioModel, side: MarginSide, value: &str) -> Option<Cmd> {
    send(
        model,
        Msg::Page(PageMsg::MarginInput {
            side,
            value: value.to_string(),
        }),
    )
}

// ========================================================================
// Margins
// ========================================================================

#[test]
fn test_margin_inputs_are_batched_until_apply() {
    let mut model = test_model(1);

    assert_eq!(margin(&mut model, MarginSide::Left, "12"), None);
    assert_eq!(margin(&mut model, MarginSide::Bottom, "64"), None);
    // Nothing committed yet
    assert_eq!(model.selected_page().unwrap().margins, Margins::uniform(40));
    assert!(model.panels.margins_unsaved(&Margins::uniform(40)));

    let cmd = send(&mut model, Msg::Page(PageMsg::ApplyMargins));
    assert_eq!(persists(&cmd), 1);
    assert_eq!(
        model.selected_page().unwrap().margins,
        Margins {
            left: 12,
            top: 40,
            right: 40,
            bottom: 64
        }
    );
    assert_eq!(model.panels.margin_draft, None);
}

#[test]
fn test_discard_margins_reverts_draft() {
    let mut model = test_model(1);
    margin(&mut model, MarginSide::Top, "99");
    send(&mut model, Msg::Page(PageMsg::DiscardMargins));

    assert_eq!(send(&mut model, Msg::Page(PageMsg::ApplyMargins)), None);
    assert_eq!(model.selected_page().unwrap().margins, Margins::uniform(40));
}

#[test]
fn test_margin_input_clamps_and_falls_back() {
    let mut model = test_model(1);
    margin(&mut model, MarginSide::Left, "-20");
    margin(&mut model, MarginSide::Right, "abc");
    margin(&mut model, MarginSide::Top, "10.6");
    send(&mut model, Msg::Page(PageMsg::ApplyMargins));

    let margins = model.selected_page().unwrap().margins;
    assert_eq!(margins.left, 0);
    assert_eq!(margins.right, 40);
    assert_eq!(margins.top, 11);
}

#[test]
fn test_apply_unchanged_margins_writes_nothing() {
    let mut model = test_model(1);
    margin(&mut model, MarginSide::Left, "40");
    assert_eq!(send(&mut model, Msg::Page(PageMsg::ApplyMargins)), None);
    assert_eq!(model.ui.pending_writes, 0);
}

#[test]
fn test_switching_page_discards_margin_draft() {
    let mut model = test_model(2);
    margin(&mut model, MarginSide::Left, "5");
    send(&mut model, Msg::Selection(SelectionMsg::SelectPage(page_id(2))));

    assert_eq!(model.panels.margin_draft, None);
    assert_eq!(send(&mut model, Msg::Page(PageMsg::ApplyMargins)), None);
    assert_eq!(model.specimen.pages[0].margins, Margins::uniform(40));
}

// ========================================================================
// Grid
// ========================================================================

#[test]
fn test_grid_inputs_commit_immediately() {
    let mut model = test_model(1);

    let cmd = send(&mut model, Msg::Page(PageMsg::GridColumnsInput("3".into())));
    assert_eq!(persists(&cmd), 1);
    send(&mut model, Msg::Page(PageMsg::GridGapInput("8".into())));
    send(&mut model, Msg::Page(PageMsg::SetShowGrid(false)));

    assert_eq!(
        model.selected_page().unwrap().grid,
        Grid {
            columns: 3,
            rows: 2,
            gap: 8,
            show_grid: false
        }
    );
}

#[test]
fn test_grid_counts_clamp_to_one() {
    let mut model = test_model(1);
    send(&mut model, Msg::Page(PageMsg::GridRowsInput("0".into())));
    assert_eq!(model.selected_page().unwrap().grid.rows, 1);

    // Garbage keeps the committed value and writes nothing
    let cmd = send(&mut model, Msg::Page(PageMsg::GridColumnsInput("many".into())));
    assert_eq!(cmd, None);
    assert_eq!(model.selected_page().unwrap().grid.columns, 2);
}

// ========================================================================
// Background
// ========================================================================

#[test]
fn test_background_kinds() {
    let mut model = test_model(1);
    send(
        &mut model,
        Msg::Page(PageMsg::Background(BackgroundEdit::SetGradientTo(
            "#336699".into(),
        ))),
    );
    send(
        &mut model,
        Msg::Page(PageMsg::Background(BackgroundEdit::SetKind(
            BackgroundKind::Gradient,
        ))),
    );

    let background = &model.selected_page().unwrap().background;
    assert_eq!(
        background.fill(),
        Fill::Gradient(&Gradient {
            from: "#ffffff".into(),
            to: "#336699".into()
        })
    );
    // The color payload survives switching kinds
    assert_eq!(background.color.as_deref(), Some("#ffffff"));
}

#[test]
fn test_upload_background_image_emits_upload_command() {
    let mut model = test_model(1);
    let cmd = send(
        &mut model,
        Msg::Page(PageMsg::UploadBackgroundImage("paper.png".into())),
    );

    assert!(model.ui.is_uploading);
    match cmd {
        Some(Cmd::UploadAsset {
            target,
            folder,
            owner_id,
            ..
        }) => {
            assert_eq!(target, AssetTarget::Page(page_id(1)));
            assert_eq!(folder, "specimens");
            assert_eq!(owner_id, "spec-1");
        }
        other => panic!("expected upload, got {other:?}"),
    }
}

// ========================================================================
// Templates
// ========================================================================

#[test]
fn test_apply_template_replaces_only_layout_fields() {
    let mut model = test_model(3);
    send(&mut model, Msg::Selection(SelectionMsg::SelectPage(page_id(2))));
    margin(&mut model, MarginSide::Left, "7");
    send(&mut model, Msg::Page(PageMsg::ApplyMargins));
    let others = (
        model.specimen.pages[0].clone(),
        model.specimen.pages[2].clone(),
    );

    let cmd = send(&mut model, Msg::Page(PageMsg::ApplyTemplate("hero".into())));
    assert_eq!(persists(&cmd), 1);

    let page = &model.specimen.pages[1];
    assert_eq!(page.id, page_id(2));
    assert_eq!(page.name, "Page 2");
    assert_eq!(page.margins.left, 7);
    assert_eq!(page.grid.columns, 1);
    assert_eq!(page.grid.rows, 2);
    assert_eq!(page.cells.len(), 2);
    assert_eq!(page.cells[0].content, "<p>Page 2</p>");
    assert_eq!(page.cells[0].text_align, TextAlign::Center);

    assert_eq!(model.specimen.pages[0], others.0);
    assert_eq!(model.specimen.pages[2], others.1);
}

#[test]
fn test_apply_template_closes_open_cell() {
    let mut model = test_model(1);
    open_cell(&mut model, cell(1, 0), "Hamburgefonstiv");

    send(&mut model, Msg::Page(PageMsg::ApplyTemplate("two-column".into())));

    assert_eq!(model.selection.state(), SelectionState::Idle);
    assert_eq!(model.selected_page().unwrap().grid.columns, 2);
}

#[test]
fn test_unknown_template_is_reported() {
    let mut model = test_model(1);
    let before = model.specimen.clone();

    let cmd = send(&mut model, Msg::Page(PageMsg::ApplyTemplate("nope".into())));

    assert_eq!(cmd, None);
    assert_eq!(model.specimen, before);
    assert!(model.ui.status_message.contains("nope"));
    assert_eq!(model.ui.last_error.as_deref(), Some("Unknown template: nope"));
}

#[test]
fn test_placeholder_page_ignores_page_edits() {
    let mut model = test_model(1);
    model.specimen.pages.clear();
    model.selection.select_page(PageId::placeholder());

    assert_eq!(send(&mut model, Msg::Page(PageMsg::SetShowGrid(false))), None);
    assert_eq!(
        send(&mut model, Msg::Page(PageMsg::ApplyTemplate("hero".into()))),
        None
    );
    assert!(model.specimen.pages.is_empty());
}
