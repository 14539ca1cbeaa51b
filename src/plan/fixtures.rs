use super::{Plan, Wall, WallId};
use crate::math::Point2;

/// Installs a test subscriber honouring `RUST_LOG`.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// A plan of two rooms side by side.
///
/// Four joined outer walls (the last one cut at 45 degrees), an unjoined
/// fifth wall closing the west side, a wall dividing the plan at `x = 500`
/// and a short wall at `y = 400` on its west half.
#[allow(clippy::unwrap_used)]
pub fn two_room_plan() -> (Plan, Vec<WallId>) {
    let mut plan = Plan::new();
    let mut wall = |x0: f64, y0: f64, x1: f64, y1: f64, thickness: f64| {
        plan.add_wall(Wall::new(Point2::new(x0, y0), Point2::new(x1, y1), thickness).unwrap())
    };
    let ids = vec![
        wall(0.0, 0.0, 1000.0, 0.0, 20.0),
        wall(1000.0, 0.0, 1000.0, 800.0, 20.0),
        wall(1000.0, 800.0, 800.0, 1000.0, 20.0),
        wall(800.0, 1000.0, 0.0, 1000.0, 20.0),
        wall(0.0, 1000.0, 0.0, 0.0, 20.0),
        wall(500.0, 0.0, 500.0, 1000.0, 10.0),
        wall(0.0, 400.0, 500.0, 400.0, 10.0),
    ];
    for i in 0..4 {
        plan.join_walls(ids[i], ids[(i + 1) % 4]).unwrap();
    }
    (plan, ids)
}
