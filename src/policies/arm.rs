use crate::errors::InvalidConfiguration;

use serde::{Deserialize, Serialize};

/// Hidden reward distribution of an arm. Only observable through sampling.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ArmParams {
    pub mean: f64,
    pub std_dev: f64,
}

impl ArmParams {
    #[cfg(test)]
    pub fn new(mean: f64, std_dev: f64) -> Self {
        Self { mean, std_dev }
    }

    pub fn validate(&self, arm_id: usize) -> Result<(), InvalidConfiguration> {
        if self.mean.is_finite() && self.std_dev.is_finite() && self.std_dev >= 0.0 {
            Ok(())
        } else {
            Err(InvalidConfiguration::InvalidArm {
                arm_id,
                mean: self.mean,
                std_dev: self.std_dev,
            })
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ArmState {
    estimate: f64,
    plays: u64,
}

impl ArmState {
    pub fn new(initial_reward: f64) -> Self {
        Self {
            estimate: initial_reward,
            plays: 1,
        }
    }

    pub fn estimate(&self) -> f64 {
        self.estimate
    }

    pub fn plays(&self) -> u64 {
        self.plays
    }

    /// Folds one reward into the running mean and returns the previous estimate.
    pub fn update(&mut self, reward: f64) -> f64 {
        let previous = self.estimate;
        self.plays += 1;
        self.estimate += (reward - previous) / (self.plays as f64);
        previous
    }

    pub fn stats(&self) -> ArmStats {
        ArmStats {
            estimate: self.estimate(),
            plays: self.plays(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ArmStats {
    pub estimate: f64,
    pub plays: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn new_arm() {
        let arm = ArmState::new(3.5);
        assert_eq!(arm.estimate(), 3.5);
        assert_eq!(arm.plays(), 1);
    }

    #[test]
    fn update() {
        let mut arm = ArmState::new(10.0);
        let previous = arm.update(50.0);

        assert_eq!(previous, 10.0);
        assert_eq!(arm.estimate(), 30.0);
        assert_eq!(arm.plays(), 2);
    }

    #[test]
    fn running_mean() {
        let rewards = [4.2, -1.0, 17.5, 3.3, 0.0, 8.8, 2.25];
        let mut arm = ArmState::new(rewards[0]);
        rewards[1..].iter().for_each(|&reward| {
            arm.update(reward);
        });

        let mean = rewards.iter().sum::<f64>() / rewards.len() as f64;
        assert!((arm.estimate() - mean).abs() < EPS);
        assert_eq!(arm.plays(), rewards.len() as u64);
    }

    #[test]
    fn validate() {
        assert!(ArmParams::new(400.0, 50.0).validate(0).is_ok());
        assert!(ArmParams::new(-3.0, 0.0).validate(0).is_ok());
        assert_eq!(
            ArmParams::new(1.0, -1.0).validate(2),
            Err(InvalidConfiguration::InvalidArm {
                arm_id: 2,
                mean: 1.0,
                std_dev: -1.0
            })
        );
        assert!(ArmParams::new(f64::NAN, 1.0).validate(0).is_err());
        assert!(ArmParams::new(0.0, f64::INFINITY).validate(0).is_err());
    }
}
