use std::collections::HashMap;
use voyage_core::{JoinedObservation, Mmsi, PortVisit};

struct VesselVisits<'a> {
    by_entry: Vec<&'a PortVisit>,
    by_exit: Vec<&'a PortVisit>,
}

/// Labels every observation with the port it is in, or with the port it last departed and the
/// port it arrives at next.
///
/// Voyage ids and delays are cleared. The result is ordered by vessel, then timestamp.
pub fn label_pings(
    mut observations: Vec<JoinedObservation>,
    visits: &[PortVisit],
) -> Vec<JoinedObservation> {
    observations.sort_by_key(|o| (o.mmsi(), o.timestamp()));

    let mut vessels: HashMap<Mmsi, VesselVisits<'_>> = HashMap::new();
    for v in visits {
        let vessel = vessels.entry(v.mmsi).or_insert_with(|| VesselVisits {
            by_entry: Vec::new(),
            by_exit: Vec::new(),
        });
        vessel.by_entry.push(v);
        vessel.by_exit.push(v);
    }
    for v in vessels.values_mut() {
        v.by_entry.sort_by_key(|v| v.entry());
        v.by_exit.sort_by_key(|v| v.exit());
    }

    for o in observations.iter_mut() {
        o.current_port = None;
        o.origin_port = None;
        o.destination_port = None;
        o.voyage_id = None;
        o.delay_hours = None;

        let Some(vessel) = vessels.get(&o.mmsi()) else {
            continue;
        };
        let ts = o.timestamp();

        if let Some(current) = vessel.by_entry.iter().find(|v| v.period.contains(ts)) {
            o.current_port = Some(current.port.clone());
            continue;
        }

        let departed = vessel.by_exit.partition_point(|v| v.exit() <= ts);
        o.origin_port = departed
            .checked_sub(1)
            .map(|i| vessel.by_exit[i].port.clone());

        let next = vessel.by_entry.partition_point(|v| v.entry() < ts);
        o.destination_port = vessel.by_entry.get(next).map(|v| v.port.clone());
    }

    observations
}
