//! CLI command implementations

mod batch;
mod convert;
mod progress;

pub use batch::batch;
pub use convert::convert;
pub use progress::progress;
