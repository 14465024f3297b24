//! Module defining the model types.

mod color;
mod position;
mod side;

pub use self::color::Color;
pub use self::position::Position;
pub use self::side::Side;
