use crate::*;

/// Keeps everything written to it in memory.
#[derive(Debug, Default)]
pub struct MemoryDataset {
    pub observations: Vec<JoinedObservation>,
    pub port_visits: Vec<PortVisit>,
    pub voyages: Vec<Voyage>,
    pub port_calls: Vec<PortCall>,
    pub port_call_counts: Vec<PortCallCount>,
}

impl DatasetInboundPort for MemoryDataset {
    fn add_observations(&mut self, observations: &[JoinedObservation]) -> CoreResult<()> {
        self.observations.extend_from_slice(observations);
        Ok(())
    }

    fn add_port_visits(&mut self, visits: &[PortVisit]) -> CoreResult<()> {
        self.port_visits.extend_from_slice(visits);
        Ok(())
    }

    fn add_voyages(&mut self, voyages: &[Voyage]) -> CoreResult<()> {
        self.voyages.extend_from_slice(voyages);
        Ok(())
    }

    fn add_port_calls(&mut self, calls: &[PortCall]) -> CoreResult<()> {
        self.port_calls.extend_from_slice(calls);
        Ok(())
    }

    fn add_port_call_counts(&mut self, counts: &[PortCallCount]) -> CoreResult<()> {
        self.port_call_counts.extend_from_slice(counts);
        Ok(())
    }
}
