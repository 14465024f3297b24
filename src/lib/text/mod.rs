//! Module responsible for fitting & rendering caption text.

mod block;
mod fit;
mod measure;
mod raster;

pub use self::block::{draw_outlined, outline_range, TextBlock};
pub use self::fit::{fit, split, FitResult};
pub use self::measure::{HeuristicMeasurer, TextMeasurer, TextPainter};
