use crate::{DateRange, Mmsi, PortId, PortRef};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct VoyageId(u64);

impl VoyageId {
    pub fn new(value: u64) -> VoyageId {
        VoyageId(value)
    }

    pub fn into_inner(self) -> u64 {
        self.0
    }
}

impl Display for VoyageId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// The sea leg between two consecutive port visits of the same vessel.
///
/// `period` runs from the exit of the departure visit to the entry of the arrival visit.
#[derive(Debug, Clone, PartialEq)]
pub struct Voyage {
    pub id: VoyageId,
    pub mmsi: Mmsi,
    pub departure_port: PortRef,
    pub arrival_port: PortRef,
    pub period: DateRange,
    pub ping_count: usize,
    /// Hours above (positive) or below (negative) the median duration of the route.
    pub delay_hours: Option<f64>,
}

impl Voyage {
    pub fn departure_time(&self) -> DateTime<Utc> {
        self.period.start()
    }

    pub fn arrival_time(&self) -> DateTime<Utc> {
        self.period.end()
    }

    pub fn duration_hours(&self) -> f64 {
        self.period.duration_hours()
    }

    pub fn route(&self) -> (PortId, PortId) {
        (self.departure_port.id, self.arrival_port.id)
    }
}
