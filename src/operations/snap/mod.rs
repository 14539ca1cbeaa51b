mod angle;
mod point;

pub use angle::{AngleMagnetism, MagnetismParams};
pub use point::PointMagnetism;
