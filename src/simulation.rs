use crate::actors::accountant::{Accountant, GetTally, RecordEpisode};
use crate::actors::experiment::{Experiment, RunEpisode};
use crate::config::{AppConfig, ReportConfig};
use crate::errors::ServiceError;
use crate::policies::{
    reward::NormalRewardSource, BanditSolver, EpisodeResult, MaybeSeededRng, SolverSettings,
};
use crate::report::{EpisodeReport, Tally};

use actix::prelude::*;
use std::io::Write;
use tracing::info;

/// Drives repeated episodes through the experiment and accountant actors.
/// Must be created inside a running actix `System`.
pub struct Simulation {
    experiment: Addr<Experiment>,
    accountant: Addr<Accountant>,
    repetitions: u64,
    report: ReportConfig,
}

impl Simulation {
    pub fn new(
        settings: SolverSettings,
        seed: Option<u64>,
        repetitions: u64,
        report: ReportConfig,
    ) -> Result<Self, ServiceError> {
        let arm_count = settings.arm_count;
        let solver = BanditSolver::new(settings, NormalRewardSource, MaybeSeededRng::new(seed))?;

        Ok(Self {
            experiment: Experiment::new(solver).start(),
            accountant: Accountant::new(arm_count).start(),
            repetitions,
            report,
        })
    }

    pub fn from_config(config: &AppConfig) -> Result<Self, ServiceError> {
        Self::new(
            config.solver_settings(),
            config.simulation.seed,
            config.simulation.repetitions,
            config.report.clone(),
        )
    }

    async fn send<A, M>(
        address: &Addr<A>,
        actor: &'static str,
        message: M,
    ) -> Result<M::Result, ServiceError>
    where
        M: Message + Send + 'static,
        M::Result: Send + 'static,
        A: Actor<Context = Context<A>> + Handler<M>,
    {
        address
            .send(message)
            .await
            .map_err(|err| ServiceError::Mailbox { actor, source: err })
    }

    /// Runs one episode and records its best arm with the accountant.
    pub async fn run_episode(&self) -> Result<EpisodeResult, ServiceError> {
        let result = Self::send(&self.experiment, "Experiment", RunEpisode).await??;
        Self::send(
            &self.accountant,
            "Accountant",
            RecordEpisode {
                result: result.clone(),
            },
        )
        .await??;

        Ok(result)
    }

    pub async fn tally(&self) -> Result<Tally, ServiceError> {
        Self::send(&self.accountant, "Accountant", GetTally).await
    }

    /// Runs every repetition in sequence, writing the report to `out`.
    pub async fn run<W: Write>(&self, out: &mut W) -> Result<Tally, ServiceError> {
        info!(repetitions = %self.repetitions, "Running simulation");

        for _ in 0..self.repetitions {
            let result = self.run_episode().await?;
            if self.report.episodes {
                writeln!(out, "{}", EpisodeReport::new(&result, self.report.precision))?;
            }
        }

        let tally = self.tally().await?;
        writeln!(out, "\n{}", tally)?;
        info!(episodes = %tally.episodes(), "Finished simulation");

        Ok(tally)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::{InvalidConfiguration, PolicyError};
    use crate::policies::arm::ArmParams;

    const SEED: u64 = 1234;

    fn report(episodes: bool) -> ReportConfig {
        ReportConfig {
            precision: 3,
            episodes,
        }
    }

    fn reference_settings() -> SolverSettings {
        SolverSettings::new(
            vec![
                ArmParams::new(400.0, 50.0),
                ArmParams::new(405.0, 37.0),
                ArmParams::new(409.0, 35.0),
                ArmParams::new(413.0, 5.0),
            ],
            1000,
            0.1,
        )
    }

    #[actix::test]
    async fn run_writes_report() {
        let simulation =
            Simulation::new(reference_settings(), Some(SEED), 5, report(true)).unwrap();
        let mut out = Vec::new();

        let tally = simulation.run(&mut out).await.unwrap();
        assert_eq!(tally.episodes(), 5);

        let output = String::from_utf8(out).unwrap();
        assert_eq!(output.matches("BEST SLOT: ").count(), 5);
        assert_eq!(output.matches(" times\n").count(), 20);
        assert!(output.ends_with(&format!("\n{}\n", tally)));
        assert!(output.contains("\nFINAL SOLUTION\nslot 0 : "));
    }

    #[actix::test]
    async fn run_without_episode_reports() {
        let simulation =
            Simulation::new(reference_settings(), Some(SEED), 3, report(false)).unwrap();
        let mut out = Vec::new();

        let tally = simulation.run(&mut out).await.unwrap();
        let output = String::from_utf8(out).unwrap();
        assert_eq!(output, format!("\n{}\n", tally));
    }

    #[actix::test]
    async fn deterministic_arms_always_win() {
        let settings = SolverSettings::new(
            vec![
                ArmParams::new(1.0, 0.0),
                ArmParams::new(2.0, 0.0),
                ArmParams::new(3.0, 0.0),
            ],
            30,
            0.3,
        );
        let simulation = Simulation::new(settings, Some(SEED), 25, report(false)).unwrap();

        let tally = simulation.run(&mut std::io::sink()).await.unwrap();
        assert_eq!(tally.counts(), &[0, 0, 25]);
    }

    #[actix::test]
    async fn run_episode_records() {
        let simulation = Simulation::new(reference_settings(), None, 1, report(false)).unwrap();

        let result = simulation.run_episode().await.unwrap();
        let tally = simulation.tally().await.unwrap();
        assert_eq!(tally.counts()[result.best_arm], 1);
        assert_eq!(tally.episodes(), 1);
    }

    #[actix::test]
    async fn invalid_settings() {
        let settings = SolverSettings::new(Vec::new(), 10, 0.1);

        assert!(matches!(
            Simulation::new(settings, Some(SEED), 1, report(false)),
            Err(ServiceError::Policy(PolicyError::InvalidConfiguration(
                InvalidConfiguration::NoArms
            )))
        ));
    }

    #[actix::test]
    async fn zero_repetitions() {
        let simulation =
            Simulation::new(reference_settings(), Some(SEED), 0, report(true)).unwrap();
        let mut out = Vec::new();

        let tally = simulation.run(&mut out).await.unwrap();
        assert_eq!(tally.counts(), &[0, 0, 0, 0]);
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "\nFINAL SOLUTION\nslot 0 : 0\nslot 1 : 0\nslot 2 : 0\nslot 3 : 0\n"
        );
    }
}
