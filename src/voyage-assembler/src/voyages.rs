use crate::{Result, error::error::InvalidDateRangeSnafu};
use snafu::ResultExt;
use std::collections::{BTreeMap, HashMap};
use tracing::debug;
use voyage_core::{DateRange, JoinedObservation, Mmsi, PortVisit, Voyage, VoyageId};

/// Builds a voyage between every pair of consecutive port visits of a vessel and stamps the
/// voyage id onto the observations made at sea in between.
///
/// Vessels are processed in ascending mmsi order and ids are assigned from zero across all
/// vessels. Pairs where the next visit starts before the previous one ends produce no voyage.
pub fn build_voyages(
    observations: &mut [JoinedObservation],
    visits: &[PortVisit],
) -> Result<Vec<Voyage>> {
    let mut pings: HashMap<Mmsi, Vec<usize>> = HashMap::new();
    for (i, o) in observations.iter().enumerate() {
        pings.entry(o.mmsi()).or_default().push(i);
    }
    for indices in pings.values_mut() {
        indices.sort_by_key(|i| observations[*i].timestamp());
    }

    let mut vessel_visits: BTreeMap<Mmsi, Vec<&PortVisit>> = BTreeMap::new();
    for v in visits {
        vessel_visits.entry(v.mmsi).or_default().push(v);
    }

    let mut voyages = Vec::new();
    let mut next_id = 0;

    for (mmsi, mut visits) in vessel_visits {
        visits.sort_by_key(|v| v.entry());
        let pings = pings.get(&mmsi).map(Vec::as_slice).unwrap_or_default();

        for pair in visits.windows(2) {
            let (departure, arrival) = (pair[0], pair[1]);
            if arrival.entry() <= departure.exit() {
                debug!(
                    "skipping overlapping visits of {mmsi} at {} and {}",
                    departure.port.name, arrival.port.name
                );
                continue;
            }

            let period =
                DateRange::new(departure.exit(), arrival.entry()).context(InvalidDateRangeSnafu)?;
            let start = pings.partition_point(|i| observations[*i].timestamp() <= period.start());
            let end = pings.partition_point(|i| observations[*i].timestamp() < period.end());

            let id = VoyageId::new(next_id);
            next_id += 1;

            let at_sea = &pings[start..end];
            for i in at_sea {
                observations[*i].voyage_id = Some(id);
            }

            voyages.push(Voyage {
                id,
                mmsi,
                departure_port: departure.port.clone(),
                arrival_port: arrival.port.clone(),
                period,
                ping_count: at_sea.len(),
                delay_hours: None,
            });
        }
    }

    Ok(voyages)
}
