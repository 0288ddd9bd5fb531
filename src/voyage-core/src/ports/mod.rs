mod inbound;

pub use inbound::*;
