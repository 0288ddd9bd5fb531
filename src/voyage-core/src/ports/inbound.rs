use crate::*;

/// Destination of an assembled dataset.
pub trait DatasetInboundPort {
    fn add_observations(&mut self, observations: &[JoinedObservation]) -> CoreResult<()>;
    fn add_port_visits(&mut self, visits: &[PortVisit]) -> CoreResult<()>;
    fn add_voyages(&mut self, voyages: &[Voyage]) -> CoreResult<()>;
    fn add_port_calls(&mut self, calls: &[PortCall]) -> CoreResult<()>;
    fn add_port_call_counts(&mut self, counts: &[PortCallCount]) -> CoreResult<()>;
}
