//! Module defining the data model of a render.

mod config;
pub mod constants;
mod types;

pub use self::config::RenderConfig;
pub use self::types::{Color, Position, Side};
