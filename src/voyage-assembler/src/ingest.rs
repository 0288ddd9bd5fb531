use crate::error::{Error, Result, error::SourceSnafu};
use marine_sources_rs::{AisRecord, WorldPortIndexRecord};
use snafu::IntoError;
use tracing::debug;
use voyage_core::{IngestStats, JoinedObservation, Port, PortIndex, VesselPosition};

/// Lazily joins AIS records with their nearest port.
///
/// Malformed rows and rows with missing or out-of-range coordinates are skipped and counted in
/// [IngestStats]. Only failures of the underlying reader are yielded as errors.
pub struct JoinIter<'a, I> {
    records: I,
    ports: &'a PortIndex,
    stats: IngestStats,
}

pub fn join_positions<I>(records: I, ports: &PortIndex) -> JoinIter<'_, I::IntoIter>
where
    I: IntoIterator<Item = marine_sources_rs::Result<AisRecord>>,
{
    JoinIter {
        records: records.into_iter(),
        ports,
        stats: IngestStats::default(),
    }
}

impl<I> JoinIter<'_, I> {
    /// Accounting of the rows consumed so far.
    pub fn stats(&self) -> IngestStats {
        self.stats
    }
}

impl<I> Iterator for JoinIter<'_, I>
where
    I: Iterator<Item = marine_sources_rs::Result<AisRecord>>,
{
    type Item = Result<JoinedObservation>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let record = match self.records.next()? {
                Ok(r) => r,
                Err(e) if e.is_malformed_row() => {
                    self.stats.read += 1;
                    self.stats.skipped_malformed += 1;
                    debug!("skipping malformed ais row: {e:?}");
                    continue;
                }
                Err(e) => return Some(Err(SourceSnafu.into_error(e))),
            };

            self.stats.read += 1;

            match VesselPosition::try_from(record) {
                Ok(position) => {
                    self.stats.joined += 1;
                    let nearest_port = self.ports.nearest(position.latitude, position.longitude);
                    return Some(Ok(JoinedObservation::new(position, nearest_port)));
                }
                Err(e) => {
                    self.stats.skipped_invalid_coordinates += 1;
                    debug!("skipping ais row: {e}");
                }
            }
        }
    }
}

/// Builds a [PortIndex] from World Port Index records, skipping and counting malformed rows
/// and ports without valid coordinates. `joined` in the returned stats is the number of ports
/// in the index.
pub fn load_port_index<I>(records: I) -> Result<(PortIndex, IngestStats)>
where
    I: IntoIterator<Item = marine_sources_rs::Result<WorldPortIndexRecord>>,
{
    let mut stats = IngestStats::default();
    let mut ports = Vec::new();

    for record in records {
        let record = match record {
            Ok(r) => r,
            Err(e) if e.is_malformed_row() => {
                stats.read += 1;
                stats.skipped_malformed += 1;
                debug!("skipping malformed port row: {e:?}");
                continue;
            }
            Err(e) => return Err::<_, Error>(SourceSnafu.into_error(e)),
        };

        stats.read += 1;

        let name = record.name.clone();
        match Port::try_from(record) {
            Ok(port) => {
                stats.joined += 1;
                ports.push(port);
            }
            Err(e) => {
                stats.skipped_invalid_coordinates += 1;
                debug!("skipping port '{name}': {e}");
            }
        }
    }

    Ok((PortIndex::new(ports), stats))
}
