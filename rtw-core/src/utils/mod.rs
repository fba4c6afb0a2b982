//! A collection of various utility helpers.

mod environment;
pub use self::environment::*;

mod error;
pub use self::error::*;

mod parallel;
pub use self::parallel::*;

mod timing;
pub use self::timing::Timer;

mod types;
pub use self::types::*;
