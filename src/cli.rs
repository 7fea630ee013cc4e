//! Command-line argument parsing for the studio
//!
//! Editing subcommands are translated into the same messages the settings
//! panels send, so the CLI exercises exactly the panel code paths.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::messages::{CellMsg, Msg, PageMsg, PagesMsg, SelectionMsg, SpecimenMsg};
use crate::model::{
    BackgroundEdit, BackgroundKind, CellRef, FontId, MarginSide, Orientation, PageId, SpecimenFormat,
    SpecimenId, TextAlign, VerticalAlign,
};

/// Edit multi-page type specimens
#[derive(Parser, Debug)]
#[command(name = "specimen-studio", version, about = "Edit multi-page type specimens")]
pub struct CliArgs {
    /// Directory holding specimen documents (overrides config)
    #[arg(long, global = true, value_name = "DIR")]
    pub store: Option<PathBuf>,

    /// Directory uploaded images are copied into (overrides config)
    #[arg(long, global = true, value_name = "DIR")]
    pub assets: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Create a new specimen with one page
    New {
        id: String,
        #[arg(long)]
        name: String,
        #[arg(long)]
        typeface: String,
        #[arg(long, value_enum)]
        format: Option<FormatArg>,
        #[arg(long, value_enum)]
        orientation: Option<OrientationArg>,
        /// Template for the first page
        #[arg(long)]
        template: Option<String>,
    },
    /// Print a specimen as JSON
    Show { id: String },
    /// List stored specimens
    List,
    /// List available page templates
    Templates,
    /// Replace a page's grid, background and cells with a template
    ApplyTemplate {
        id: String,
        page: String,
        template: String,
    },
    /// Append an empty page
    AddPage { id: String },
    /// Delete a page (the last page cannot be deleted)
    DeletePage { id: String, page: String },
    /// Move the page at FROM to index TO
    MovePage { id: String, from: usize, to: usize },
    /// Rename a page
    RenamePage {
        id: String,
        page: String,
        name: String,
    },
    /// Set page margins; omitted sides keep their value
    SetMargins {
        id: String,
        page: String,
        #[arg(long)]
        left: Option<String>,
        #[arg(long)]
        top: Option<String>,
        #[arg(long)]
        right: Option<String>,
        #[arg(long)]
        bottom: Option<String>,
    },
    /// Set the page grid
    SetGrid {
        id: String,
        page: String,
        #[arg(long)]
        columns: Option<String>,
        #[arg(long)]
        rows: Option<String>,
        #[arg(long)]
        gap: Option<String>,
        #[arg(long)]
        show_grid: Option<bool>,
    },
    /// Set a page background to a color or an uploaded image
    SetBackground {
        id: String,
        page: String,
        #[arg(long, conflicts_with = "image")]
        color: Option<String>,
        #[arg(long)]
        image: Option<PathBuf>,
    },
    /// Set cell defaults (no text selection, so formatting lands on the cell)
    SetCell {
        id: String,
        page: String,
        index: usize,
        #[arg(long)]
        padding: Option<String>,
        #[arg(long)]
        text_color: Option<String>,
        #[arg(long)]
        font: Option<String>,
        #[arg(long)]
        font_size: Option<String>,
        #[arg(long)]
        line_height: Option<String>,
        #[arg(long, value_enum)]
        align: Option<AlignArg>,
        #[arg(long, value_enum)]
        valign: Option<VAlignArg>,
        #[arg(long)]
        background: Option<String>,
    },
    /// Set the paper format
    SetFormat {
        id: String,
        #[arg(value_enum)]
        format: FormatArg,
    },
    /// Set the page orientation
    SetOrientation {
        id: String,
        #[arg(value_enum)]
        orientation: OrientationArg,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatArg {
    A4,
    Letter,
}

impl From<FormatArg> for SpecimenFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::A4 => SpecimenFormat::A4,
            FormatArg::Letter => SpecimenFormat::Letter,
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrientationArg {
    Portrait,
    Landscape,
}

impl From<OrientationArg> for Orientation {
    fn from(arg: OrientationArg) -> Self {
        match arg {
            OrientationArg::Portrait => Orientation::Portrait,
            OrientationArg::Landscape => Orientation::Landscape,
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlignArg {
    Left,
    Center,
    Right,
    Justify,
}

impl From<AlignArg> for TextAlign {
    fn from(arg: AlignArg) -> Self {
        match arg {
            AlignArg::Left => TextAlign::Left,
            AlignArg::Center => TextAlign::Center,
            AlignArg::Right => TextAlign::Right,
            AlignArg::Justify => TextAlign::Justify,
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum VAlignArg {
    Top,
    Middle,
    Bottom,
}

impl From<VAlignArg> for VerticalAlign {
    fn from(arg: VAlignArg) -> Self {
        match arg {
            VAlignArg::Top => VerticalAlign::Top,
            VAlignArg::Middle => VerticalAlign::Middle,
            VAlignArg::Bottom => VerticalAlign::Bottom,
        }
    }
}

/// An editing subcommand resolved to its specimen and message script
#[derive(Debug, Clone, PartialEq)]
pub struct EditScript {
    pub specimen_id: SpecimenId,
    pub messages: Vec<Msg>,
}

impl Command {
    /// Messages an editing subcommand dispatches, in order.
    ///
    /// Returns `None` for subcommands that don't edit an open specimen.
    pub fn edit_script(&self) -> Option<EditScript> {
        let (id, messages) = match self {
            Command::New { .. } | Command::Show { .. } | Command::List | Command::Templates => {
                return None
            }

            Command::ApplyTemplate { id, page, template } => (
                id,
                vec![
                    select_page(page),
                    Msg::Page(PageMsg::ApplyTemplate(template.clone())),
                ],
            ),

            Command::AddPage { id } => (id, vec![Msg::Pages(PagesMsg::AddPage)]),

            Command::DeletePage { id, page } => (
                id,
                vec![
                    Msg::Pages(PagesMsg::RequestDelete(PageId::new(page.as_str()))),
                    Msg::Pages(PagesMsg::ConfirmDelete),
                ],
            ),

            Command::MovePage { id, from, to } => (
                id,
                vec![Msg::Pages(PagesMsg::MovePage {
                    from: *from,
                    to: *to,
                })],
            ),

            Command::RenamePage { id, page, name } => (
                id,
                vec![
                    Msg::Pages(PagesMsg::BeginRename(PageId::new(page.as_str()))),
                    Msg::Pages(PagesMsg::RenameInput(name.clone())),
                    Msg::Pages(PagesMsg::CommitRename),
                ],
            ),

            Command::SetMargins {
                id,
                page,
                left,
                top,
                right,
                bottom,
            } => {
                let mut messages = vec![select_page(page)];
                for (side, value) in MarginSide::ALL.into_iter().zip([left, top, right, bottom]) {
                    if let Some(value) = value {
                        messages.push(Msg::Page(PageMsg::MarginInput {
                            side,
                            value: value.clone(),
                        }));
                    }
                }
                messages.push(Msg::Page(PageMsg::ApplyMargins));
                (id, messages)
            }

            Command::SetGrid {
                id,
                page,
                columns,
                rows,
                gap,
                show_grid,
            } => {
                let mut messages = vec![select_page(page)];
                messages.extend(
                    columns
                        .clone()
                        .map(|v| Msg::Page(PageMsg::GridColumnsInput(v))),
                );
                messages.extend(rows.clone().map(|v| Msg::Page(PageMsg::GridRowsInput(v))));
                messages.extend(gap.clone().map(|v| Msg::Page(PageMsg::GridGapInput(v))));
                messages.extend(show_grid.map(|v| Msg::Page(PageMsg::SetShowGrid(v))));
                (id, messages)
            }

            Command::SetBackground {
                id,
                page,
                color,
                image,
            } => {
                let mut messages = vec![select_page(page)];
                if let Some(color) = color {
                    messages.push(Msg::Page(PageMsg::Background(BackgroundEdit::SetColor(
                        color.clone(),
                    ))));
                    messages.push(Msg::Page(PageMsg::Background(BackgroundEdit::SetKind(
                        BackgroundKind::Color,
                    ))));
                }
                if let Some(image) = image {
                    messages.push(Msg::Page(PageMsg::UploadBackgroundImage(image.clone())));
                }
                (id, messages)
            }

            Command::SetCell {
                id,
                page,
                index,
                padding,
                text_color,
                font,
                font_size,
                line_height,
                align,
                valign,
                background,
            } => {
                let cell = CellRef::new(PageId::new(page.as_str()), *index);
                let mut messages = vec![Msg::Selection(SelectionMsg::SelectCell(cell))];
                if let Some(padding) = padding {
                    messages.push(Msg::Cell(CellMsg::PaddingInput(padding.clone())));
                    messages.push(Msg::Cell(CellMsg::ApplyPadding));
                }
                messages.extend(text_color.clone().map(|v| Msg::Cell(CellMsg::TextColor(v))));
                messages.extend(
                    font.as_deref()
                        .map(|v| Msg::Cell(CellMsg::Font(FontId::new(v)))),
                );
                messages.extend(font_size.clone().map(|v| Msg::Cell(CellMsg::FontSizeInput(v))));
                messages.extend(
                    line_height
                        .clone()
                        .map(|v| Msg::Cell(CellMsg::LineHeightInput(v))),
                );
                messages.extend(align.map(|v| Msg::Cell(CellMsg::TextAlign(v.into()))));
                messages.extend(valign.map(|v| Msg::Cell(CellMsg::VerticalAlign(v.into()))));
                if let Some(color) = background {
                    messages.push(Msg::Cell(CellMsg::Background(BackgroundEdit::SetColor(
                        color.clone(),
                    ))));
                }
                messages.push(Msg::Selection(SelectionMsg::CloseCell));
                (id, messages)
            }

            Command::SetFormat { id, format } => (
                id,
                vec![Msg::Specimen(SpecimenMsg::SetFormat((*format).into()))],
            ),

            Command::SetOrientation { id, orientation } => (
                id,
                vec![Msg::Specimen(SpecimenMsg::SetOrientation(
                    (*orientation).into(),
                ))],
            ),
        };

        Some(EditScript {
            specimen_id: SpecimenId::new(id.as_str()),
            messages,
        })
    }
}

fn select_page(page: &str) -> Msg {
    Msg::Selection(SelectionMsg::SelectPage(PageId::new(page)))
}
