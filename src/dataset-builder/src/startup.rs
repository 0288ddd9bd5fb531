use crate::{
    csv_adapter::CsvAdapter,
    error::{
        Result,
        error::{AssemblySnafu, DatasetSnafu, IoSnafu, SourceSnafu},
    },
    settings::Settings,
};
use marine_sources_rs::{AisRecord, DataFile, WorldPortIndexRecord};
use snafu::ResultExt;
use std::path::Path;
use tracing::{info, instrument};
use voyage_assembler::{VoyageAssembler, join_positions, load_port_index};
use voyage_core::{DatasetInboundPort, IngestStats, JoinedObservation, PortIndex};

pub struct App {
    settings: Settings,
    assembler: VoyageAssembler,
}

/// Outcome of a single run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunSummary {
    pub ais_stats: IngestStats,
    pub port_stats: IngestStats,
    pub num_port_visits: usize,
    pub num_voyages: usize,
    pub num_port_calls: usize,
}

impl App {
    pub fn build(settings: Settings) -> Result<App> {
        let assembler = VoyageAssembler::new(settings.matcher.matcher_config()?);
        Ok(App {
            settings,
            assembler,
        })
    }

    /// Runs the pipeline once and writes the dataset to the configured output directory.
    pub fn run(&self) -> Result<RunSummary> {
        let mut adapter = CsvAdapter::new(&self.settings.output_dir)?;
        self.run_with(&mut adapter)
    }

    #[instrument(skip_all)]
    pub fn run_with<T: DatasetInboundPort>(&self, dataset: &mut T) -> Result<RunSummary> {
        std::fs::create_dir_all(&self.settings.work_dir).context(IoSnafu)?;

        let (ports, port_stats) = self.load_ports()?;
        let (observations, ais_stats) = self.load_observations(&ports)?;

        let assembled = self
            .assembler
            .assemble(observations, &ports)
            .context(AssemblySnafu)?;

        dataset
            .add_observations(&assembled.observations)
            .context(DatasetSnafu)?;
        dataset
            .add_port_visits(&assembled.port_visits)
            .context(DatasetSnafu)?;
        dataset
            .add_voyages(&assembled.voyages)
            .context(DatasetSnafu)?;
        dataset
            .add_port_calls(&assembled.port_calls)
            .context(DatasetSnafu)?;
        dataset
            .add_port_call_counts(&assembled.port_call_counts)
            .context(DatasetSnafu)?;

        info!(
            "joined {} of {} ais rows, skipped {} malformed and {} with invalid coordinates",
            ais_stats.joined,
            ais_stats.read,
            ais_stats.skipped_malformed,
            ais_stats.skipped_invalid_coordinates
        );

        Ok(RunSummary {
            ais_stats,
            port_stats,
            num_port_visits: assembled.port_visits.len(),
            num_voyages: assembled.voyages.len(),
            num_port_calls: assembled.port_calls.len(),
        })
    }

    fn load_ports(&self) -> Result<(PortIndex, IngestStats)> {
        let records = self
            .open(&self.settings.port_index_file)?
            .into_deserialize::<WorldPortIndexRecord>()
            .context(SourceSnafu)?;
        let (ports, stats) = load_port_index(records).context(AssemblySnafu)?;

        info!(
            "loaded {} ports, skipped {}",
            ports.len(),
            stats.skipped()
        );

        Ok((ports, stats))
    }

    fn load_observations(&self, ports: &PortIndex) -> Result<(Vec<JoinedObservation>, IngestStats)> {
        let mut observations = Vec::new();
        let mut stats = IngestStats::default();

        for path in &self.settings.ais_files {
            let records = self
                .open(path)?
                .into_deserialize::<AisRecord>()
                .context(SourceSnafu)?;

            let mut joined = join_positions(records, ports);
            for observation in joined.by_ref() {
                observations.push(observation.context(AssemblySnafu)?);
            }

            let file_stats = joined.stats();
            info!(
                "read {} rows from {}, skipped {}",
                file_stats.read,
                path.display(),
                file_stats.skipped()
            );
            stats += file_stats;
        }

        Ok((observations, stats))
    }

    fn open(&self, path: &Path) -> Result<DataFile> {
        DataFile::open(path, &self.settings.work_dir).context(SourceSnafu)
    }
}
