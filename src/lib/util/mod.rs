//! Utility module.

pub mod fs;
