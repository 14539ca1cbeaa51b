use crate::geometry::Polygon;

slotmap::new_key_type! {
    /// Unique identifier for a room in the plan.
    pub struct RoomId;
}

/// A room: a floor polygon plus its display flags.
#[derive(Debug, Clone, PartialEq)]
pub struct Room {
    pub polygon: Polygon,
    pub name: Option<String>,
    pub area_visible: bool,
    pub floor_visible: bool,
    pub ceiling_visible: bool,
}

impl Room {
    /// Creates an unnamed room with every surface visible.
    #[must_use]
    pub fn new(polygon: Polygon) -> Self {
        Self {
            polygon,
            name: None,
            area_visible: true,
            floor_visible: true,
            ceiling_visible: true,
        }
    }

    /// Sets the room name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Floor area of the room.
    #[must_use]
    pub fn area(&self) -> f64 {
        self.polygon.area()
    }
}
