pub mod creation;
pub mod detection;
pub mod modification;
pub mod offset;
pub mod query;
pub mod region;
pub mod snap;
