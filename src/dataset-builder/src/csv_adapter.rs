use crate::error::{
    Result,
    error::{CsvSnafu, IoSnafu},
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use snafu::ResultExt;
use std::{
    fs::OpenOptions,
    path::{Path, PathBuf},
};
use tracing::debug;
use voyage_core::{
    CoreResult, DatasetInboundPort, JoinedObservation, Mmsi, PortCall, PortCallCount, PortId,
    PortRef, PortVisit, Voyage, VoyageId,
};

pub const OBSERVATIONS_FILE: &str = "observations.csv";
pub const PORT_VISITS_FILE: &str = "port_visits.csv";
pub const VOYAGES_FILE: &str = "voyages.csv";
pub const PORT_CALLS_FILE: &str = "port_calls.csv";
pub const PORT_CALL_COUNTS_FILE: &str = "port_call_counts.csv";

const OUTPUT_FILES: [&str; 5] = [
    OBSERVATIONS_FILE,
    PORT_VISITS_FILE,
    VOYAGES_FILE,
    PORT_CALLS_FILE,
    PORT_CALL_COUNTS_FILE,
];

/// Writes the dataset as csv files into a directory.
///
/// Rows are appended, the header is written once when a file is created, also when there are no
/// rows.
#[derive(Debug, Clone)]
pub struct CsvAdapter {
    output_dir: PathBuf,
}

/// A flat output row with its column names in serialization order.
trait CsvRow: Serialize {
    const COLUMNS: &'static [&'static str];
}

#[derive(Serialize)]
struct ObservationRow<'a> {
    mmsi: Mmsi,
    timestamp: DateTime<Utc>,
    latitude: f64,
    longitude: f64,
    speed: Option<f64>,
    course_over_ground: Option<f64>,
    heading: Option<f64>,
    vessel_name: Option<&'a str>,
    call_sign: Option<&'a str>,
    nearest_port_id: Option<PortId>,
    nearest_port_name: Option<&'a str>,
    nearest_port_distance_meters: Option<f64>,
    current_port_id: Option<PortId>,
    current_port_name: Option<&'a str>,
    origin_port_id: Option<PortId>,
    origin_port_name: Option<&'a str>,
    destination_port_id: Option<PortId>,
    destination_port_name: Option<&'a str>,
    voyage_id: Option<VoyageId>,
    delay_hours: Option<f64>,
}

#[derive(Serialize)]
struct PortVisitRow<'a> {
    mmsi: Mmsi,
    port_id: PortId,
    port_name: &'a str,
    entry_time: DateTime<Utc>,
    exit_time: DateTime<Utc>,
    duration_hours: f64,
    ping_count: usize,
}

#[derive(Serialize)]
struct VoyageRow<'a> {
    voyage_id: VoyageId,
    mmsi: Mmsi,
    departure_port_id: PortId,
    departure_port_name: &'a str,
    departure_time: DateTime<Utc>,
    arrival_port_id: PortId,
    arrival_port_name: &'a str,
    arrival_time: DateTime<Utc>,
    duration_hours: f64,
    ping_count: usize,
    delay_hours: Option<f64>,
}

#[derive(Serialize)]
struct PortCallRow<'a> {
    mmsi: Mmsi,
    port_id: PortId,
    port_name: &'a str,
}

#[derive(Serialize)]
struct PortCallCountRow<'a> {
    port_id: PortId,
    port_name: &'a str,
    country: Option<&'a str>,
    latitude: f64,
    longitude: f64,
    call_count: u32,
}

impl CsvRow for ObservationRow<'_> {
    const COLUMNS: &'static [&'static str] = &[
        "mmsi",
        "timestamp",
        "latitude",
        "longitude",
        "speed",
        "course_over_ground",
        "heading",
        "vessel_name",
        "call_sign",
        "nearest_port_id",
        "nearest_port_name",
        "nearest_port_distance_meters",
        "current_port_id",
        "current_port_name",
        "origin_port_id",
        "origin_port_name",
        "destination_port_id",
        "destination_port_name",
        "voyage_id",
        "delay_hours",
    ];
}

impl CsvRow for PortVisitRow<'_> {
    const COLUMNS: &'static [&'static str] = &[
        "mmsi",
        "port_id",
        "port_name",
        "entry_time",
        "exit_time",
        "duration_hours",
        "ping_count",
    ];
}

impl CsvRow for VoyageRow<'_> {
    const COLUMNS: &'static [&'static str] = &[
        "voyage_id",
        "mmsi",
        "departure_port_id",
        "departure_port_name",
        "departure_time",
        "arrival_port_id",
        "arrival_port_name",
        "arrival_time",
        "duration_hours",
        "ping_count",
        "delay_hours",
    ];
}

impl CsvRow for PortCallRow<'_> {
    const COLUMNS: &'static [&'static str] = &[
        "mmsi",
        "port_id",
        "port_name",
    ];
}

impl CsvRow for PortCallCountRow<'_> {
    const COLUMNS: &'static [&'static str] = &[
        "port_id",
        "port_name",
        "country",
        "latitude",
        "longitude",
        "call_count",
    ];
}

fn port_id(port: Option<&PortRef>) -> Option<PortId> {
    port.map(|p| p.id)
}

fn port_name(port: Option<&PortRef>) -> Option<&str> {
    port.map(|p| p.name.as_str())
}

impl<'a> From<&'a JoinedObservation> for ObservationRow<'a> {
    fn from(o: &'a JoinedObservation) -> Self {
        let nearest = o.nearest_port.as_ref();
        Self {
            mmsi: o.position.mmsi,
            timestamp: o.position.timestamp,
            latitude: o.position.latitude,
            longitude: o.position.longitude,
            speed: o.position.speed,
            course_over_ground: o.position.course_over_ground,
            heading: o.position.heading,
            vessel_name: o.position.vessel_name.as_deref(),
            call_sign: o.position.call_sign.as_deref(),
            nearest_port_id: port_id(nearest.map(|m| &m.port)),
            nearest_port_name: port_name(nearest.map(|m| &m.port)),
            nearest_port_distance_meters: nearest.map(|m| m.distance_meters),
            current_port_id: port_id(o.current_port.as_ref()),
            current_port_name: port_name(o.current_port.as_ref()),
            origin_port_id: port_id(o.origin_port.as_ref()),
            origin_port_name: port_name(o.origin_port.as_ref()),
            destination_port_id: port_id(o.destination_port.as_ref()),
            destination_port_name: port_name(o.destination_port.as_ref()),
            voyage_id: o.voyage_id,
            delay_hours: o.delay_hours,
        }
    }
}

impl<'a> From<&'a PortVisit> for PortVisitRow<'a> {
    fn from(v: &'a PortVisit) -> Self {
        Self {
            mmsi: v.mmsi,
            port_id: v.port.id,
            port_name: &v.port.name,
            entry_time: v.entry(),
            exit_time: v.exit(),
            duration_hours: v.duration_hours(),
            ping_count: v.ping_count,
        }
    }
}

impl<'a> From<&'a Voyage> for VoyageRow<'a> {
    fn from(v: &'a Voyage) -> Self {
        Self {
            voyage_id: v.id,
            mmsi: v.mmsi,
            departure_port_id: v.departure_port.id,
            departure_port_name: &v.departure_port.name,
            departure_time: v.departure_time(),
            arrival_port_id: v.arrival_port.id,
            arrival_port_name: &v.arrival_port.name,
            arrival_time: v.arrival_time(),
            duration_hours: v.duration_hours(),
            ping_count: v.ping_count,
            delay_hours: v.delay_hours,
        }
    }
}

impl<'a> From<&'a PortCall> for PortCallRow<'a> {
    fn from(c: &'a PortCall) -> Self {
        Self {
            mmsi: c.mmsi,
            port_id: c.port.id,
            port_name: &c.port.name,
        }
    }
}

impl<'a> From<&'a PortCallCount> for PortCallCountRow<'a> {
    fn from(c: &'a PortCallCount) -> Self {
        Self {
            port_id: c.port.id,
            port_name: &c.port.name,
            country: c.port.country.as_deref(),
            latitude: c.port.latitude,
            longitude: c.port.longitude,
            call_count: c.call_count,
        }
    }
}

impl CsvAdapter {
    /// Creates `output_dir` if needed and removes output files of earlier runs.
    pub fn new(output_dir: &Path) -> Result<CsvAdapter> {
        std::fs::create_dir_all(output_dir).context(IoSnafu)?;

        for name in OUTPUT_FILES {
            let path = output_dir.join(name);
            if path.exists() {
                std::fs::remove_file(&path).context(IoSnafu)?;
            }
        }

        Ok(CsvAdapter {
            output_dir: output_dir.to_path_buf(),
        })
    }

    fn append<T: CsvRow>(&self, file_name: &str, rows: impl Iterator<Item = T>) -> Result<()> {
        let path = self.output_dir.join(file_name);
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .context(IoSnafu)?;
        let is_empty = file.metadata().context(IoSnafu)?.len() == 0;

        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(file);

        if is_empty {
            writer.write_record(T::COLUMNS).context(CsvSnafu)?;
        }

        let mut num_rows = 0;
        for row in rows {
            writer.serialize(row).context(CsvSnafu)?;
            num_rows += 1;
        }
        writer.flush().context(IoSnafu)?;

        debug!("wrote {num_rows} rows to {}", path.display());
        Ok(())
    }
}

impl DatasetInboundPort for CsvAdapter {
    fn add_observations(&mut self, observations: &[JoinedObservation]) -> CoreResult<()> {
        self.append(
            OBSERVATIONS_FILE,
            observations.iter().map(ObservationRow::from),
        )
        .map_err(|e| e.into_insert("observations"))
    }

    fn add_port_visits(&mut self, visits: &[PortVisit]) -> CoreResult<()> {
        self.append(PORT_VISITS_FILE, visits.iter().map(PortVisitRow::from))
            .map_err(|e| e.into_insert("port_visits"))
    }

    fn add_voyages(&mut self, voyages: &[Voyage]) -> CoreResult<()> {
        self.append(VOYAGES_FILE, voyages.iter().map(VoyageRow::from))
            .map_err(|e| e.into_insert("voyages"))
    }

    fn add_port_calls(&mut self, calls: &[PortCall]) -> CoreResult<()> {
        self.append(PORT_CALLS_FILE, calls.iter().map(PortCallRow::from))
            .map_err(|e| e.into_insert("port_calls"))
    }

    fn add_port_call_counts(&mut self, counts: &[PortCallCount]) -> CoreResult<()> {
        self.append(
            PORT_CALL_COUNTS_FILE,
            counts.iter().map(PortCallCountRow::from),
        )
        .map_err(|e| e.into_insert("port_call_counts"))
    }
}
