mod split_walls;

pub use split_walls::{SplitWallsAroundRoom, WallSegment, WallSplit};
