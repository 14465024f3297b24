//!
//! memegen  -- Two-line image macros
//!
//! Captions a background image with top & bottom text in the classic meme style:
//! white letters with a black outline, broken into lines and sized to fit.
//!

#[macro_use] extern crate lazy_static;
#[macro_use] extern crate log;
#[macro_use] extern crate maplit;

#[cfg(test)] #[macro_use] extern crate spectral;


mod caption;
mod model;
mod resources;
mod text;
mod util;


pub use caption::*;
pub use model::*;
pub use resources::*;
pub use text::*;
