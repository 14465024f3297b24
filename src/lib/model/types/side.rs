//! Module implementing the `Side` enum.

use std::fmt;


/// Which of the two captions of an image macro we're dealing with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    Top,
    Bottom,
}

impl fmt::Display for Side {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Side::Top => write!(fmt, "top"),
            Side::Bottom => write!(fmt, "bottom"),
        }
    }
}
