use crate::{MatcherConfig, Result, error::error::InvalidDateRangeSnafu};
use itertools::Itertools;
use snafu::ResultExt;
use std::collections::{HashMap, HashSet};
use tracing::{debug, instrument};
use voyage_core::{
    DateRange, JoinedObservation, PortCall, PortCallCount, PortId, PortIndex, PortRef, PortVisit,
};

/// Detects port stays from stationary positions close to a port.
#[derive(Debug, Clone, Default)]
pub struct PortMatcher {
    config: MatcherConfig,
}

impl PortMatcher {
    pub fn new(config: MatcherConfig) -> PortMatcher {
        PortMatcher { config }
    }

    pub fn config(&self) -> &MatcherConfig {
        &self.config
    }

    /// Observations that count as being in port, paired with that port.
    ///
    /// Positions without a reported speed are never candidates.
    pub fn find_candidates<'a>(
        &self,
        observations: &'a [JoinedObservation],
    ) -> impl Iterator<Item = (&'a JoinedObservation, &'a PortRef)> {
        let max_speed = self.config.max_speed_knots;
        let radius = self.config.radius_meters();

        observations.iter().filter_map(move |o| {
            let stationary = o.position.speed.is_some_and(|s| s <= max_speed);
            match &o.nearest_port {
                Some(m) if stationary && m.distance_meters <= radius => Some((o, &m.port)),
                _ => None,
            }
        })
    }

    /// Groups candidates per vessel and port into visits, splitting whenever two consecutive
    /// positions are more than the gap threshold apart.
    ///
    /// The result is ordered by vessel, then entry time.
    #[instrument(skip_all)]
    pub fn find_port_visits(&self, observations: &[JoinedObservation]) -> Result<Vec<PortVisit>> {
        let mut candidates: Vec<_> = self.find_candidates(observations).collect();
        candidates.sort_by_key(|(o, p)| (o.mmsi(), p.id, o.timestamp()));

        let gap = self.config.gap_threshold;
        let mut visits = Vec::new();

        for vessel_at_port in candidates.chunk_by(|a, b| a.0.mmsi() == b.0.mmsi() && a.1 == b.1) {
            for stay in vessel_at_port.chunk_by(|a, b| b.0.timestamp() - a.0.timestamp() <= gap) {
                let (first, port) = stay[0];
                let (last, _) = stay[stay.len() - 1];

                visits.push(PortVisit {
                    mmsi: first.mmsi(),
                    port: port.clone(),
                    period: DateRange::new(first.timestamp(), last.timestamp())
                        .context(InvalidDateRangeSnafu)?,
                    ping_count: stay.len(),
                });
            }
        }

        visits.sort_by(|a, b| {
            (a.mmsi, a.entry(), a.port.id).cmp(&(b.mmsi, b.entry(), b.port.id))
        });

        debug!(
            "found {} port visits from {} candidate positions",
            visits.len(),
            candidates.len()
        );

        Ok(visits)
    }

    /// Unique vessel and port pairs over visits lasting at least the minimum time in port, in
    /// order of first occurrence.
    pub fn port_calls(&self, visits: &[PortVisit]) -> Vec<PortCall> {
        visits
            .iter()
            .filter(|v| v.period.duration() >= self.config.min_time_in_port)
            .map(|v| PortCall {
                mmsi: v.mmsi,
                port: v.port.clone(),
            })
            .unique()
            .collect()
    }

    /// Convenience for [Self::find_port_visits] followed by [Self::port_calls].
    pub fn match_port_calls(&self, observations: &[JoinedObservation]) -> Result<Vec<PortCall>> {
        let visits = self.find_port_visits(observations)?;
        Ok(self.port_calls(&visits))
    }
}

/// The number of unique vessels calling at each port of the index, zero for ports without
/// calls. Follows the order of the index.
pub fn port_call_counts(ports: &PortIndex, calls: &[PortCall]) -> Vec<PortCallCount> {
    let mut vessels: HashMap<PortId, HashSet<_>> = HashMap::new();
    for call in calls {
        vessels.entry(call.port.id).or_default().insert(call.mmsi);
    }

    ports
        .ports()
        .iter()
        .map(|port| PortCallCount {
            port: port.clone(),
            call_count: vessels.get(&port.id).map_or(0, |v| v.len() as u32),
        })
        .collect()
}
