mod curve;
mod interpolation;
mod misc;

pub mod prelude {
    pub use crate::curve::*;
    pub use crate::interpolation::*;
    pub use crate::misc::*;
}
