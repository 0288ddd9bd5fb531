#![deny(warnings)]
#![deny(rust_2018_idioms)]

use chrono::Duration;
use tracing::{info, instrument};
use voyage_core::{
    JoinedObservation, METERS_PER_NAUTICAL_MILE, PortCall, PortCallCount, PortIndex, PortVisit,
    Voyage,
};

mod delay;
#[allow(hidden_glob_reexports)]
mod error;
mod ingest;
mod ping_labels;
mod port_matcher;
mod voyages;

pub use delay::*;
pub use error::*;
pub use ingest::*;
pub use ping_labels::*;
pub use port_matcher::*;
pub use voyages::*;

/// Parameters for port matching and voyage assembly.
#[derive(Debug, Clone, PartialEq)]
pub struct MatcherConfig {
    /// Maximum distance to a port's coordinate for a position to count as in port.
    pub port_radius_nm: f64,
    /// Positions faster than this are considered under way.
    pub max_speed_knots: f64,
    /// Two stationary positions further apart than this belong to different visits.
    pub gap_threshold: Duration,
    pub min_time_in_port: Duration,
    /// Routes with fewer voyages than this get no delay label.
    pub min_route_samples: usize,
}

impl Default for MatcherConfig {
    fn default() -> Self {
        Self {
            port_radius_nm: 10.0,
            max_speed_knots: 1.5,
            gap_threshold: Duration::hours(24),
            min_time_in_port: Duration::hours(1),
            min_route_samples: 2,
        }
    }
}

impl MatcherConfig {
    pub fn radius_meters(&self) -> f64 {
        self.port_radius_nm * METERS_PER_NAUTICAL_MILE
    }
}

/// Everything derived from a set of joined observations.
#[derive(Debug, Clone, Default)]
pub struct AssembledDataset {
    pub observations: Vec<JoinedObservation>,
    pub port_visits: Vec<PortVisit>,
    pub voyages: Vec<Voyage>,
    pub port_calls: Vec<PortCall>,
    pub port_call_counts: Vec<PortCallCount>,
}

/// Turns joined observations into port visits, labelled voyages and port call counts.
#[derive(Debug, Clone, Default)]
pub struct VoyageAssembler {
    matcher: PortMatcher,
}

impl VoyageAssembler {
    pub fn new(config: MatcherConfig) -> VoyageAssembler {
        VoyageAssembler {
            matcher: PortMatcher::new(config),
        }
    }

    pub fn config(&self) -> &MatcherConfig {
        self.matcher.config()
    }

    #[instrument(skip_all, fields(app.observations = observations.len(), app.ports = ports.len()))]
    pub fn assemble(
        &self,
        observations: Vec<JoinedObservation>,
        ports: &PortIndex,
    ) -> Result<AssembledDataset> {
        let port_visits = self.matcher.find_port_visits(&observations)?;
        let port_calls = self.matcher.port_calls(&port_visits);
        let port_call_counts = port_call_counts(ports, &port_calls);

        let mut observations = label_pings(observations, &port_visits);
        let mut voyages = build_voyages(&mut observations, &port_visits)?;
        assign_delays(
            &mut voyages,
            &mut observations,
            self.config().min_route_samples,
        );

        info!(
            "assembled {} port visits, {} voyages and {} port calls",
            port_visits.len(),
            voyages.len(),
            port_calls.len()
        );

        Ok(AssembledDataset {
            observations,
            port_visits,
            voyages,
            port_calls,
            port_call_counts,
        })
    }
}
