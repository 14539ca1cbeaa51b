mod wall_outline;

pub use wall_outline::WallOutline;

pub(crate) use wall_outline::outline_points;
