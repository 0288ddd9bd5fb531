use crate::{CoordinateValidationError, haversine_meters, validate_coordinate};
use marine_sources_rs::WorldPortIndexRecord;
use serde::Serialize;
use std::fmt::Display;

/// World Port Index number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct PortId(u32);

impl PortId {
    pub fn new(value: u32) -> PortId {
        PortId(value)
    }

    pub fn into_inner(self) -> u32 {
        self.0
    }
}

impl Display for PortId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Port {
    pub id: PortId,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub country: Option<String>,
}

/// Identifies a port within derived records without carrying its coordinates.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PortRef {
    pub id: PortId,
    pub name: String,
}

/// The port closest to a position together with the great-circle distance to it.
#[derive(Debug, Clone, PartialEq)]
pub struct PortMatch {
    pub port: PortRef,
    pub distance_meters: f64,
}

impl Port {
    pub fn port_ref(&self) -> PortRef {
        PortRef {
            id: self.id,
            name: self.name.clone(),
        }
    }
}

impl TryFrom<WorldPortIndexRecord> for Port {
    type Error = CoordinateValidationError;

    fn try_from(value: WorldPortIndexRecord) -> Result<Self, Self::Error> {
        let WorldPortIndexRecord {
            country,
            latitude,
            longitude,
            name,
            port_number,
        } = value;

        let (latitude, longitude) = validate_coordinate(latitude, longitude)?;

        Ok(Port {
            id: PortId(port_number),
            name,
            latitude,
            longitude,
            country,
        })
    }
}

#[derive(Copy, Clone, Debug)]
struct PortLocation {
    latitude: f64,
    longitude: f64,
}

impl vpsearch::MetricSpace for PortLocation {
    type UserData = ();
    type Distance = f64;

    fn distance(&self, other: &Self, _: &Self::UserData) -> Self::Distance {
        haversine_meters(
            self.latitude,
            self.longitude,
            other.latitude,
            other.longitude,
        )
    }
}

/// Static port reference data with nearest-port lookup.
pub struct PortIndex {
    ports: Vec<Port>,
    // `None` when there are no ports, the tree cannot be built from an empty set.
    tree: Option<vpsearch::Tree<PortLocation>>,
}

impl PortIndex {
    pub fn new(ports: Vec<Port>) -> PortIndex {
        let tree = if ports.is_empty() {
            None
        } else {
            let locations: Vec<PortLocation> = ports
                .iter()
                .map(|p| PortLocation {
                    latitude: p.latitude,
                    longitude: p.longitude,
                })
                .collect();
            Some(vpsearch::Tree::new(&locations))
        };

        PortIndex { ports, tree }
    }

    pub fn ports(&self) -> &[Port] {
        &self.ports
    }

    pub fn len(&self) -> usize {
        self.ports.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ports.is_empty()
    }

    /// Returns the port with the smallest great-circle distance to the given coordinate, or
    /// `None` if the index holds no ports.
    pub fn nearest(&self, latitude: f64, longitude: f64) -> Option<PortMatch> {
        let tree = self.tree.as_ref()?;
        let (index, distance) = tree.find_nearest(&PortLocation {
            latitude,
            longitude,
        });

        self.ports.get(index).map(|p| PortMatch {
            port: p.port_ref(),
            distance_meters: distance,
        })
    }
}

impl std::fmt::Debug for PortIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PortIndex")
            .field("ports", &self.ports.len())
            .finish()
    }
}
