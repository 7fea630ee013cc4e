//! Utility modules

pub mod numeric;
pub mod path;
