use super::arm::ArmStats;

use serde::Serialize;
use uuid::Uuid;

/// Kind of a learning-phase step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    Explore(usize),
    Exploit,
}

#[derive(Clone, Debug, Serialize)]
pub struct PolicyStats {
    pub arms: Vec<ArmStats>,
}

impl PolicyStats {
    pub fn total_plays(&self) -> u64 {
        self.arms.iter().map(|arm| arm.plays).sum()
    }
}

#[derive(Clone, Debug, Serialize)]
pub struct EpisodeResult {
    pub episode_id: Uuid,
    pub best_arm: usize,
    pub exploration_steps: u64,
    pub stats: PolicyStats,
}
