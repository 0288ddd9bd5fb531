use crate::{Mmsi, PortMatch, PortRef, VesselPosition, VoyageId};
use chrono::{DateTime, Utc};

/// A vessel position joined with port reference data.
///
/// The ingestion stage fills in `nearest_port`. The remaining labels are set during voyage
/// assembly: `current_port` while the vessel is inside a port visit, `origin_port` and
/// `destination_port` while it is at sea, and `voyage_id`/`delay_hours` for positions that
/// belong to an assembled voyage.
#[derive(Debug, Clone, PartialEq)]
pub struct JoinedObservation {
    pub position: VesselPosition,
    pub nearest_port: Option<PortMatch>,
    pub current_port: Option<PortRef>,
    pub origin_port: Option<PortRef>,
    pub destination_port: Option<PortRef>,
    pub voyage_id: Option<VoyageId>,
    pub delay_hours: Option<f64>,
}

impl JoinedObservation {
    pub fn new(position: VesselPosition, nearest_port: Option<PortMatch>) -> JoinedObservation {
        JoinedObservation {
            position,
            nearest_port,
            current_port: None,
            origin_port: None,
            destination_port: None,
            voyage_id: None,
            delay_hours: None,
        }
    }

    pub fn mmsi(&self) -> Mmsi {
        self.position.mmsi
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.position.timestamp
    }

    pub fn is_at_port(&self) -> bool {
        self.current_port.is_some()
    }
}
