use crate::{DateRange, Mmsi, Port, PortRef};
use chrono::{DateTime, Utc};

/// One contiguous stay of a vessel at a port, from its first to its last stationary position
/// within the port radius.
#[derive(Debug, Clone, PartialEq)]
pub struct PortVisit {
    pub mmsi: Mmsi,
    pub port: PortRef,
    pub period: DateRange,
    pub ping_count: usize,
}

impl PortVisit {
    pub fn entry(&self) -> DateTime<Utc> {
        self.period.start()
    }

    pub fn exit(&self) -> DateTime<Utc> {
        self.period.end()
    }

    pub fn duration_hours(&self) -> f64 {
        self.period.duration_hours()
    }
}

/// A vessel that stayed at a port for at least the minimum time in port.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PortCall {
    pub mmsi: Mmsi,
    pub port: PortRef,
}

/// Number of unique vessels that made a port call at `port`.
#[derive(Debug, Clone, PartialEq)]
pub struct PortCallCount {
    pub port: Port,
    pub call_count: u32,
}
