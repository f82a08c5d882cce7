pub mod floating_point;

pub use floating_point::*;
