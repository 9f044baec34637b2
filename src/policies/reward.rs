use super::arm::ArmParams;

use crate::errors::PolicyError;

use rand::Rng;
use rand_distr::{Distribution, Normal};

/// Produces one reward for an arm, drawing entropy from the caller's stream.
pub trait RewardSource {
    fn sample<R: Rng + ?Sized>(&mut self, arm: &ArmParams, rng: &mut R)
        -> Result<f64, PolicyError>;
}

#[derive(Clone, Copy, Debug, Default)]
pub struct NormalRewardSource;

impl RewardSource for NormalRewardSource {
    fn sample<R: Rng + ?Sized>(
        &mut self,
        arm: &ArmParams,
        rng: &mut R,
    ) -> Result<f64, PolicyError> {
        // Normal::new accepts a negative std_dev
        if arm.std_dev < 0.0 {
            return Err(PolicyError::SamplingError(format!(
                "standard deviation {} is negative",
                arm.std_dev
            )));
        }
        let s = Normal::new(arm.mean, arm.std_dev)
            .map_err(|e| PolicyError::SamplingError(e.to_string()))?
            .sample(rng);

        Ok(s)
    }
}

/// Replays a fixed sequence of rewards, ignoring the arm and the stream.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct ScriptedRewards {
    rewards: std::collections::VecDeque<f64>,
}

#[cfg(test)]
impl ScriptedRewards {
    pub fn new(rewards: &[f64]) -> Self {
        Self {
            rewards: rewards.iter().copied().collect(),
        }
    }
}

#[cfg(test)]
impl RewardSource for ScriptedRewards {
    fn sample<R: Rng + ?Sized>(&mut self, _: &ArmParams, _: &mut R) -> Result<f64, PolicyError> {
        self.rewards
            .pop_front()
            .ok_or_else(|| PolicyError::SamplingError("reward script exhausted".to_string()))
    }
}
