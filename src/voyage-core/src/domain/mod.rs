mod date_range;
mod geo;
mod ingest_stats;
mod observation;
mod port;
mod port_visit;
mod vessel_position;
mod voyage;

pub use date_range::*;
pub use geo::*;
pub use ingest_stats::*;
pub use observation::*;
pub use port::*;
pub use port_visit::*;
pub use vessel_position::*;
pub use voyage::*;
