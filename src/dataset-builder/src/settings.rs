use crate::error::{
    Result,
    error::{ConfigSnafu, InvalidDurationSnafu, TracingSnafu},
};
use config::{Config, File};
use serde::Deserialize;
use snafu::ResultExt;
use std::{
    path::{Path, PathBuf},
    time::Duration,
};
use strum::{AsRefStr, EnumString};
use tracing_subscriber::EnvFilter;
use voyage_assembler::MatcherConfig;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, AsRefStr, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Environment {
    #[default]
    Local,
    Test,
    Production,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, AsRefStr)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub environment: Environment,
    #[serde(default)]
    pub log_level: LogLevel,
    /// AIS extracts, csv or zipped csv.
    pub ais_files: Vec<PathBuf>,
    pub port_index_file: PathBuf,
    /// Archives are extracted here.
    pub work_dir: PathBuf,
    pub output_dir: PathBuf,
    #[serde(default)]
    pub matcher: MatcherSettings,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MatcherSettings {
    pub port_radius_nm: f64,
    pub max_speed_knots: f64,
    #[serde(with = "humantime_serde")]
    pub gap_threshold: Duration,
    #[serde(with = "humantime_serde")]
    pub min_time_in_port: Duration,
    pub min_route_samples: usize,
}

impl Default for MatcherSettings {
    fn default() -> Self {
        Self {
            port_radius_nm: 10.0,
            max_speed_knots: 1.5,
            gap_threshold: Duration::from_secs(24 * 60 * 60),
            min_time_in_port: Duration::from_secs(60 * 60),
            min_route_samples: 2,
        }
    }
}

impl MatcherSettings {
    pub fn matcher_config(&self) -> Result<MatcherConfig> {
        Ok(MatcherConfig {
            port_radius_nm: self.port_radius_nm,
            max_speed_knots: self.max_speed_knots,
            gap_threshold: chrono::Duration::from_std(self.gap_threshold)
                .context(InvalidDurationSnafu)?,
            min_time_in_port: chrono::Duration::from_std(self.min_time_in_port)
                .context(InvalidDurationSnafu)?,
            min_route_samples: self.min_route_samples,
        })
    }
}

impl Settings {
    /// Loads settings from `config/` in the working directory for the environment named by
    /// `APP_ENVIRONMENT`.
    pub fn new() -> Result<Self> {
        let environment: Environment = std::env::var("APP_ENVIRONMENT")
            .ok()
            .and_then(|e| e.parse().ok())
            .unwrap_or_default();

        Self::from_dir(Path::new("config"), environment)
    }

    /// Layers `base`, then `<environment>` from `dir`, then `VOYAGE__*` environment variables.
    pub fn from_dir(dir: &Path, environment: Environment) -> Result<Self> {
        let base = dir.join("base");
        let overrides = dir.join(environment.as_ref());

        Config::builder()
            .add_source(File::with_name(&base.to_string_lossy()).required(true))
            .add_source(File::with_name(&overrides.to_string_lossy()).required(false))
            .add_source(
                config::Environment::with_prefix("VOYAGE")
                    .separator("__")
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("ais_files"),
            )
            .set_override("environment", environment.as_ref())
            .context(ConfigSnafu)?
            .build()
            .context(ConfigSnafu)?
            .try_deserialize()
            .context(ConfigSnafu)
    }

    /// Installs the global tracing subscriber. `RUST_LOG` takes precedence over the configured
    /// log level. Production logs are emitted as json.
    pub fn init_tracer(&self) -> Result<()> {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(self.log_level.as_ref()));
        let builder = tracing_subscriber::fmt().with_env_filter(filter);

        match self.environment {
            Environment::Production => builder.json().try_init(),
            Environment::Local | Environment::Test => builder.try_init(),
        }
        .context(TracingSnafu)
    }
}
