//! Runtime module - drives `update` and executes its commands
//!
//! - `app` - the [`Studio`] loop that owns the model and its collaborators

pub mod app;

pub use app::Studio;
