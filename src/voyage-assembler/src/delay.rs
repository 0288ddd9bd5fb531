use itertools::Itertools;
use std::collections::HashMap;
use voyage_core::{JoinedObservation, PortId, Voyage};

/// Labels voyages with their deviation from the median duration of their route, and copies the
/// label onto the observations of each voyage.
///
/// Routes with fewer than `min_route_samples` voyages have no baseline and stay unlabelled.
pub fn assign_delays(
    voyages: &mut [Voyage],
    observations: &mut [JoinedObservation],
    min_route_samples: usize,
) {
    let baselines: HashMap<(PortId, PortId), f64> = voyages
        .iter()
        .into_group_map_by(|v| v.route())
        .into_iter()
        .filter(|(_, route)| route.len() >= min_route_samples)
        .filter_map(|(key, route)| {
            median(route.iter().map(|v| v.duration_hours()).collect()).map(|m| (key, m))
        })
        .collect();

    let mut delays = HashMap::new();
    for v in voyages.iter_mut() {
        v.delay_hours = baselines.get(&v.route()).map(|b| v.duration_hours() - b);
        if let Some(delay) = v.delay_hours {
            delays.insert(v.id, delay);
        }
    }

    for o in observations.iter_mut() {
        o.delay_hours = o.voyage_id.and_then(|id| delays.get(&id).copied());
    }
}

pub fn median(mut values: Vec<f64>) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    values.sort_by(f64::total_cmp);

    let mid = values.len() / 2;
    if values.len() % 2 == 0 {
        Some((values[mid - 1] + values[mid]) / 2.0)
    } else {
        Some(values[mid])
    }
}
