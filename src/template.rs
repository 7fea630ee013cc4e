//! Page templates
//!
//! A template is a named grid/background/cells blueprint. Templates are looked up in:
//! 1. User config: `~/.config/specimen-studio/templates/{id}.yaml`
//! 2. Builtin templates embedded in the binary
//!
//! Applying a template replaces exactly `grid`, `background` and `cells` on one
//! page; margins, name and id are left alone.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::model::background::Background;
use crate::model::cell::SpecimenPageCell;
use crate::model::ids::PageId;
use crate::model::mutation::set_page_field;
use crate::model::page::{Grid, PageFields, SpecimenPage};

pub const BLANK_YAML: &str = include_str!("../templates/blank.yaml");
pub const HERO_YAML: &str = include_str!("../templates/hero.yaml");
pub const TWO_COLUMN_YAML: &str = include_str!("../templates/two-column.yaml");
pub const WATERFALL_YAML: &str = include_str!("../templates/waterfall.yaml");
pub const GLYPH_GRID_YAML: &str = include_str!("../templates/glyph-grid.yaml");

/// Placeholder in template cell content replaced by the page name
pub const PAGE_NAME_PLACEHOLDER: &str = "{page}";

/// A template compiled into the binary
#[derive(Debug, Clone, Copy)]
pub struct BuiltinTemplate {
    pub id: &'static str,
    pub yaml: &'static str,
}

pub static BUILTIN_TEMPLATES: &[BuiltinTemplate] = &[
    BuiltinTemplate {
        id: "blank",
        yaml: BLANK_YAML,
    },
    BuiltinTemplate {
        id: "hero",
        yaml: HERO_YAML,
    },
    BuiltinTemplate {
        id: "two-column",
        yaml: TWO_COLUMN_YAML,
    },
    BuiltinTemplate {
        id: "waterfall",
        yaml: WATERFALL_YAML,
    },
    BuiltinTemplate {
        id: "glyph-grid",
        yaml: GLYPH_GRID_YAML,
    },
];

/// Immutable page blueprint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Template {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub grid: Grid,
    #[serde(default = "Background::page_default")]
    pub background: Background,
    #[serde(default)]
    pub cells: Vec<SpecimenPageCell>,
}

impl Template {
    pub fn from_yaml(yaml: &str) -> Result<Self, String> {
        serde_yaml::from_str(yaml).map_err(|e| format!("YAML parse error: {}", e))
    }

    pub fn from_builtin(id: &str) -> Result<Self, String> {
        let entry = BUILTIN_TEMPLATES
            .iter()
            .find(|t| t.id == id)
            .ok_or_else(|| format!("Unknown builtin template: {}", id))?;
        Template::from_yaml(entry.yaml)
    }

    pub fn from_file(path: &Path) -> Result<Self, String> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read template file: {}", e))?;
        Template::from_yaml(&content)
    }
}

/// All builtin templates, in registry order
pub fn builtin_templates() -> Vec<Template> {
    BUILTIN_TEMPLATES
        .iter()
        .filter_map(|entry| match Template::from_yaml(entry.yaml) {
            Ok(template) => Some(template),
            Err(e) => {
                tracing::warn!("Builtin template '{}' failed to parse: {}", entry.id, e);
                None
            }
        })
        .collect()
}

/// Builtins plus any `*.yaml` templates in the user templates directory.
/// User templates with a builtin id replace the builtin.
pub fn load_all_templates() -> Vec<Template> {
    let mut templates = builtin_templates();

    let Some(user_dir) = crate::config_paths::templates_dir() else {
        return templates;
    };
    let Ok(entries) = std::fs::read_dir(&user_dir) else {
        return templates;
    };

    let mut paths: Vec<_> = entries
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| {
            path.extension()
                .is_some_and(|ext| ext == "yaml" || ext == "yml")
        })
        .collect();
    paths.sort();

    for path in paths {
        match Template::from_file(&path) {
            Ok(template) => {
                if let Some(existing) = templates.iter_mut().find(|t| t.id == template.id) {
                    *existing = template;
                } else {
                    templates.push(template);
                }
            }
            Err(e) => tracing::warn!("Skipping template {}: {}", path.display(), e),
        }
    }
    templates
}

/// Map a template to concrete page fields.
///
/// Pure and deterministic; malformed values are normalized with the same
/// clamping rules as user input.
pub fn template_to_page_fields(template: &Template, page_id: &PageId, page_name: &str) -> PageFields {
    tracing::debug!(template = %template.id, page = %page_id, "expanding template");
    let cells = template
        .cells
        .iter()
        .map(|cell| {
            let mut cell = cell.clone().normalized();
            cell.content = cell.content.replace(PAGE_NAME_PLACEHOLDER, page_name);
            cell
        })
        .collect();

    PageFields {
        grid: template.grid.normalized(),
        background: template.background.clone(),
        cells,
    }
}

/// Apply `template` to one page, returning the new pages array
pub fn apply_template(
    pages: &[SpecimenPage],
    page_id: &PageId,
    template: &Template,
) -> Option<Vec<SpecimenPage>> {
    let page = pages.iter().find(|p| &p.id == page_id)?;
    let fields = template_to_page_fields(template, page_id, &page.name);
    set_page_field(pages, page_id, fields.into())
}
