use super::arm::{ArmParams, ArmState};
use super::policy::{EpisodeResult, PolicyStats, Step};
use super::reward::RewardSource;
use super::rng::MaybeSeededRng;

use crate::errors::{InvalidConfiguration, PolicyError};

use rand::Rng;
use tracing::debug;
use uuid::Uuid;

#[derive(Clone, Debug)]
pub struct SolverSettings {
    pub arm_count: usize,
    pub arms: Vec<ArmParams>,
    pub iterations: u64,
    pub epsilon: f64,
}

impl SolverSettings {
    pub fn new(arms: Vec<ArmParams>, iterations: u64, epsilon: f64) -> Self {
        Self {
            arm_count: arms.len(),
            arms,
            iterations,
            epsilon,
        }
    }

    pub fn validate(&self) -> Result<(), InvalidConfiguration> {
        if self.arm_count == 0 {
            return Err(InvalidConfiguration::NoArms);
        }
        if self.arms.len() != self.arm_count {
            return Err(InvalidConfiguration::ArmCountMismatch {
                declared: self.arm_count,
                actual: self.arms.len(),
            });
        }
        if self.iterations < self.arm_count as u64 {
            return Err(InvalidConfiguration::BudgetTooSmall {
                iterations: self.iterations,
                arms: self.arm_count,
            });
        }
        // also rejects NaN
        if !(0.0..=1.0).contains(&self.epsilon) {
            return Err(InvalidConfiguration::EpsilonOutOfRange(self.epsilon));
        }
        self.arms
            .iter()
            .enumerate()
            .try_for_each(|(arm_id, arm)| arm.validate(arm_id))
    }
}

/// Per-episode statistics and the arm currently believed to be the best.
#[derive(Clone, Debug, PartialEq)]
pub struct BanditState {
    arms: Vec<ArmState>,
    best_arm: usize,
}

impl BanditState {
    /// Seeds every arm with one reward. Ties keep the earliest arm.
    pub fn initialize<I>(initial_rewards: I) -> Result<Self, PolicyError>
    where
        I: IntoIterator<Item = f64>,
    {
        let arms = initial_rewards
            .into_iter()
            .map(ArmState::new)
            .collect::<Vec<_>>();
        if arms.is_empty() {
            return Err(InvalidConfiguration::NoArms.into());
        }

        let mut state = Self { arms, best_arm: 0 };
        state.rescan();
        Ok(state)
    }

    pub fn best_arm(&self) -> usize {
        self.best_arm
    }

    #[cfg(test)]
    pub fn arm(&self, arm_id: usize) -> Option<&ArmState> {
        self.arms.get(arm_id)
    }

    fn best_estimate(&self) -> f64 {
        self.arms[self.best_arm].estimate()
    }

    /// Folds a reward into a randomly chosen arm. Only a drop of the current
    /// best triggers a re-scan; any other arm is promoted only when it rose
    /// strictly above the best.
    pub fn explore(&mut self, arm_id: usize, reward: f64) -> Result<(), PolicyError> {
        let arm = self
            .arms
            .get_mut(arm_id)
            .ok_or(PolicyError::ArmNotFound(arm_id))?;
        let previous = arm.update(reward);
        let estimate = arm.estimate();

        if arm_id == self.best_arm {
            if previous > estimate {
                self.rescan();
            }
        } else if previous < estimate && estimate > self.best_estimate() {
            self.best_arm = arm_id;
        }

        Ok(())
    }

    pub fn exploit(&mut self, reward: f64) {
        let best = &mut self.arms[self.best_arm];
        let previous = best.update(reward);
        if previous > best.estimate() {
            self.rescan();
        }
    }

    fn rescan(&mut self) {
        for arm_id in 0..self.arms.len() {
            if self.arms[arm_id].estimate() > self.best_estimate() {
                self.best_arm = arm_id;
            }
        }
    }

    pub fn stats(&self) -> PolicyStats {
        PolicyStats {
            arms: self.arms.iter().map(ArmState::stats).collect(),
        }
    }
}

pub struct BanditSolver<S> {
    settings: SolverSettings,
    source: S,
    rng: MaybeSeededRng,
}

impl<S: RewardSource> BanditSolver<S> {
    pub fn new(
        settings: SolverSettings,
        source: S,
        rng: MaybeSeededRng,
    ) -> Result<Self, PolicyError> {
        settings.validate()?;

        Ok(Self {
            settings,
            source,
            rng,
        })
    }

    pub fn settings(&self) -> &SolverSettings {
        &self.settings
    }

    pub fn seed(&self) -> Option<u64> {
        self.rng.seed()
    }

    fn sample(&mut self, arm_id: usize) -> Result<f64, PolicyError> {
        let arm = self
            .settings
            .arms
            .get(arm_id)
            .ok_or(PolicyError::ArmNotFound(arm_id))?;
        self.source.sample(arm, self.rng.get_rng())
    }

    fn next_step(&mut self) -> Step {
        let rng = self.rng.get_rng();
        if rng.random::<f64>() < self.settings.epsilon {
            Step::Explore(rng.random_range(0..self.settings.arm_count))
        } else {
            Step::Exploit
        }
    }

    fn initialize(&mut self) -> Result<BanditState, PolicyError> {
        let initial_rewards = (0..self.settings.arm_count)
            .map(|arm_id| self.sample(arm_id))
            .collect::<Result<Vec<_>, _>>()?;
        let state = BanditState::initialize(initial_rewards)?;
        debug!(best_arm = state.best_arm(), "Initialized arm estimates");

        Ok(state)
    }

    fn apply(&mut self, state: &mut BanditState, step: Step) -> Result<(), PolicyError> {
        match step {
            Step::Explore(arm_id) => {
                let reward = self.sample(arm_id)?;
                state.explore(arm_id, reward)
            }
            Step::Exploit => {
                let reward = self.sample(state.best_arm())?;
                state.exploit(reward);
                Ok(())
            }
        }
    }

    /// Runs one full episode from fresh statistics.
    pub fn run(&mut self) -> Result<EpisodeResult, PolicyError> {
        let mut state = self.initialize()?;

        let mut exploration_steps = 0;
        for _ in (self.settings.arm_count as u64)..self.settings.iterations {
            let step = self.next_step();
            if let Step::Explore(_) = step {
                exploration_steps += 1;
            }
            self.apply(&mut state, step)?;
        }

        let episode_id = Uuid::new_v4();
        debug!(
            id = %episode_id,
            best_arm = state.best_arm(),
            exploration_steps,
            "Finished episode"
        );

        Ok(EpisodeResult {
            episode_id,
            best_arm: state.best_arm(),
            exploration_steps,
            stats: state.stats(),
        })
    }
}
