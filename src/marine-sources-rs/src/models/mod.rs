mod ais;
mod world_port_index;

pub use ais::AisRecord;
pub use world_port_index::WorldPortIndexRecord;
