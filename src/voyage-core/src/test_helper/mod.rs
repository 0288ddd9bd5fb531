use crate::*;
use chrono::{DateTime, Duration, TimeZone, Utc};
use marine_sources_rs::{AisRecord, WorldPortIndexRecord};

mod dataset;

pub use dataset::*;

pub const NEW_YORK_ID: u32 = 8590;
pub const LOS_ANGELES_ID: u32 = 15730;

/// 2025-01-01T00:00:00Z shifted by `hours`.
pub fn ts(hours: i64) -> DateTime<Utc> {
    base_time() + Duration::hours(hours)
}

pub fn base_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap()
}

pub fn port(id: u32, name: &str, latitude: f64, longitude: f64) -> Port {
    Port::try_from(WorldPortIndexRecord::test_default(
        id, name, latitude, longitude,
    ))
    .unwrap()
}

pub fn new_york() -> Port {
    port(NEW_YORK_ID, "NewYorkPort", 40.7, -74.0)
}

pub fn los_angeles() -> Port {
    port(LOS_ANGELES_ID, "LosAngelesPort", 33.7, -118.2)
}

pub fn two_port_index() -> PortIndex {
    PortIndex::new(vec![new_york(), los_angeles()])
}

/// Hourly AIS records at a fixed position starting at `start`.
pub fn hourly_records(
    mmsi: i32,
    latitude: f64,
    longitude: f64,
    speed: f64,
    start: DateTime<Utc>,
    n_hours: i64,
) -> Vec<AisRecord> {
    (0..n_hours)
        .map(|i| {
            AisRecord::test_default(
                mmsi,
                start + Duration::hours(i),
                latitude,
                longitude,
                speed,
            )
        })
        .collect()
}

pub fn position(
    mmsi: i32,
    timestamp: DateTime<Utc>,
    latitude: f64,
    longitude: f64,
    speed: f64,
) -> VesselPosition {
    VesselPosition::try_from(AisRecord::test_default(
        mmsi, timestamp, latitude, longitude, speed,
    ))
    .unwrap()
}

/// A position joined against `ports` the same way the ingestion stage does it.
pub fn observation(
    ports: &PortIndex,
    mmsi: i32,
    timestamp: DateTime<Utc>,
    latitude: f64,
    longitude: f64,
    speed: f64,
) -> JoinedObservation {
    JoinedObservation::new(
        position(mmsi, timestamp, latitude, longitude, speed),
        ports.nearest(latitude, longitude),
    )
}

/// Observations without any port pairing at the given hour offsets.
pub fn sea_observations(mmsi: i32, hours: &[i64]) -> Vec<JoinedObservation> {
    hours
        .iter()
        .map(|h| JoinedObservation::new(position(mmsi, ts(*h), 35.0, -100.0, 10.0), None))
        .collect()
}

pub fn visit(mmsi: i32, port: &Port, entry: DateTime<Utc>, exit: DateTime<Utc>) -> PortVisit {
    PortVisit {
        mmsi: Mmsi::new(mmsi),
        port: port.port_ref(),
        period: DateRange::new(entry, exit).unwrap(),
        ping_count: 2,
    }
}
