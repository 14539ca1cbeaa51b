mod detect_room;

pub use detect_room::DetectRoom;
