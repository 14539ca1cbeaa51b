pub mod error;
pub mod geometry;
pub mod math;
pub mod operations;
pub mod plan;
pub mod tessellation;

pub use error::{FloorplanError, Result};
