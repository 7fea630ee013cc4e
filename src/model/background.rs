//! Page and cell backgrounds
//!
//! A background is a tagged variant over color, gradient and image. All three
//! payloads are kept on the value; only the one matching `kind` is
//! authoritative, so flipping the kind back and forth never loses what the user
//! entered earlier.

use serde::{Deserialize, Serialize};

/// Which payload of a [`Background`] is active
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackgroundKind {
    #[default]
    Color,
    Gradient,
    Image,
}

/// Two-stop linear gradient
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Gradient {
    pub from: String,
    pub to: String,
}

impl Default for Gradient {
    fn default() -> Self {
        Self {
            from: "#ffffff".to_string(),
            to: "#000000".to_string(),
        }
    }
}

/// Background of a page or cell
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Background {
    #[serde(rename = "type")]
    pub kind: BackgroundKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gradient: Option<Gradient>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// Borrowed view of the authoritative payload
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fill<'a> {
    Color(&'a str),
    Gradient(&'a Gradient),
    Image(&'a str),
    /// The active kind has no payload yet (transparent)
    Empty,
}

/// A single edit from a background control
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackgroundEdit {
    SetKind(BackgroundKind),
    SetColor(String),
    SetGradientFrom(String),
    SetGradientTo(String),
    SetImage(Option<String>),
}

impl Background {
    /// Solid color background
    pub fn solid(color: impl Into<String>) -> Self {
        Self {
            kind: BackgroundKind::Color,
            color: Some(color.into()),
            ..Self::default()
        }
    }

    /// Default for new pages: plain white
    pub fn page_default() -> Self {
        Self::solid("#ffffff")
    }

    /// Default for new cells: transparent, the page shows through
    pub fn cell_default() -> Self {
        Self::default()
    }

    /// The payload that currently applies
    pub fn fill(&self) -> Fill<'_> {
        match self.kind {
            BackgroundKind::Color => self.color.as_deref().map_or(Fill::Empty, Fill::Color),
            BackgroundKind::Gradient => self.gradient.as_ref().map_or(Fill::Empty, Fill::Gradient),
            BackgroundKind::Image => self.image.as_deref().map_or(Fill::Empty, Fill::Image),
        }
    }

    /// Apply a control edit. Edits to a payload don't switch the kind, except
    /// setting an image, which is only ever done to show that image.
    pub fn apply(&mut self, edit: &BackgroundEdit) {
        match edit {
            BackgroundEdit::SetKind(kind) => self.kind = *kind,
            BackgroundEdit::SetColor(color) => self.color = Some(color.clone()),
            BackgroundEdit::SetGradientFrom(from) => {
                self.gradient.get_or_insert_with(Gradient::default).from = from.clone();
            }
            BackgroundEdit::SetGradientTo(to) => {
                self.gradient.get_or_insert_with(Gradient::default).to = to.clone();
            }
            BackgroundEdit::SetImage(image) => {
                self.image = image.clone();
                if image.is_some() {
                    self.kind = BackgroundKind::Image;
                }
            }
        }
    }

    /// Return a copy with `edit` applied
    pub fn with_edit(&self, edit: &BackgroundEdit) -> Self {
        let mut next = self.clone();
        next.apply(edit);
        next
    }
}
