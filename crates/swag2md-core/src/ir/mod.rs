pub mod operations;
pub mod schemas;

pub use operations::*;
pub use schemas::*;
