//! Specimen Studio - Elm-style editor core for multi-page type specimens
//!
//! This crate provides the document model, the selection coordinator that
//! keeps text selections alive across panel focus changes, the page/cell
//! mutation primitives, templates, and the runtime that executes commands
//! against a specimen store and asset storage.

pub mod assets;
pub mod cli;
pub mod commands;
pub mod config;
pub mod config_paths;
pub mod fonts;
pub mod messages;
pub mod model;
pub mod runtime;
pub mod store;
pub mod surface;
pub mod template;
pub mod tracing;
pub mod update;
pub mod util;

// Re-export commonly used types
pub use commands::Cmd;
pub use config::StudioConfig;
pub use messages::Msg;
pub use model::StudioModel;
pub use runtime::Studio;
pub use template::Template;
