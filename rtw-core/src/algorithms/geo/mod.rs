//! Geographic computations on a sphere.

mod distance;
pub use self::distance::*;
