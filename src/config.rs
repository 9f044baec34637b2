use crate::policies::{arm::ArmParams, SolverSettings};

use config::{Config, ConfigError, Environment, File, Source};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

#[derive(Debug, Deserialize)]
pub struct SimulationConfig {
    pub arm_count: Option<usize>,
    pub iterations: u64,
    pub epsilon: f64,
    pub repetitions: u64,
    pub seed: Option<u64>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct ReportConfig {
    pub precision: usize,
    pub episodes: bool,
}

#[derive(Debug, Deserialize)]
pub struct AppConfig {
    pub logging: LoggingConfig,
    pub simulation: SimulationConfig,
    pub report: ReportConfig,
    pub arms: Vec<ArmParams>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::load(File::with_name("config").required(false))
    }

    /// Layers defaults, `file` and `APP_`-prefixed environment variables,
    /// e.g. `APP_SIMULATION__EPSILON=0.2`.
    pub fn load<S>(file: S) -> Result<Self, ConfigError>
    where
        S: Source + Send + Sync + 'static,
    {
        let builder = Config::builder()
            .set_default("logging.level", "info")?
            .set_default("simulation.iterations", 1000)?
            .set_default("simulation.epsilon", 0.1)?
            .set_default("simulation.repetitions", 1000)?
            .set_default("report.precision", 3)?
            .set_default("report.episodes", true)?
            .add_source(file)
            .add_source(
                Environment::with_prefix("APP")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        builder.try_deserialize()
    }

    pub fn solver_settings(&self) -> SolverSettings {
        let mut settings = SolverSettings::new(
            self.arms.clone(),
            self.simulation.iterations,
            self.simulation.epsilon,
        );
        if let Some(arm_count) = self.simulation.arm_count {
            settings.arm_count = arm_count;
        }
        settings
    }
}
