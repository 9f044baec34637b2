use actix::MailboxError;
use config::ConfigError;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum InvalidConfiguration {
    #[error("At least one arm is required")]
    NoArms,
    #[error("Arm count {declared} does not match the {actual} arm definitions")]
    ArmCountMismatch { declared: usize, actual: usize },
    #[error("Iteration budget {iterations} cannot initialize {arms} arms")]
    BudgetTooSmall { iterations: u64, arms: usize },
    #[error("Epsilon {0} is outside [0, 1]")]
    EpsilonOutOfRange(f64),
    #[error("Arm {arm_id} has invalid distribution (mean {mean}, std_dev {std_dev})")]
    InvalidArm {
        arm_id: usize,
        mean: f64,
        std_dev: f64,
    },
}

#[derive(Debug, Error)]
pub enum PolicyError {
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(#[from] InvalidConfiguration),
    #[error("Arm {0} not found")]
    ArmNotFound(usize),
    #[error("Sampling error: {0}")]
    SamplingError(String),
}

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Cannot read config: {0}")]
    Config(#[from] ConfigError),
    #[error("Mailbox error for {actor}: {source}")]
    Mailbox {
        actor: &'static str,
        source: MailboxError,
    },
    #[error(transparent)]
    Policy(#[from] PolicyError),
    #[error("I/O error while writing report: {0}")]
    Io(#[from] std::io::Error),
}
