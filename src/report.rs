use crate::errors::PolicyError;
use crate::policies::EpisodeResult;

use serde::Serialize;
use std::fmt;

/// Per-arm summary of one episode followed by the selected arm.
pub struct EpisodeReport<'a> {
    result: &'a EpisodeResult,
    precision: usize,
}

impl<'a> EpisodeReport<'a> {
    pub fn new(result: &'a EpisodeResult, precision: usize) -> Self {
        Self { result, precision }
    }
}

impl fmt::Display for EpisodeReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (arm_id, arm) in self.result.stats.arms.iter().enumerate() {
            writeln!(
                f,
                "slot {} : {:.*} | played {} times",
                arm_id, self.precision, arm.estimate, arm.plays
            )?;
        }
        write!(f, "BEST SLOT: {}", self.result.best_arm)
    }
}

/// How many episodes selected each arm as best.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Tally {
    counts: Vec<u64>,
}

impl Tally {
    pub fn new(arm_count: usize) -> Self {
        Self {
            counts: vec![0; arm_count],
        }
    }

    pub fn record(&mut self, best_arm: usize) -> Result<(), PolicyError> {
        self.counts
            .get_mut(best_arm)
            .map(|count| *count += 1)
            .ok_or(PolicyError::ArmNotFound(best_arm))
    }

    pub fn counts(&self) -> &[u64] {
        &self.counts
    }

    pub fn episodes(&self) -> u64 {
        self.counts.iter().sum()
    }
}

impl fmt::Display for Tally {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "FINAL SOLUTION")?;
        for (arm_id, count) in self.counts().iter().enumerate() {
            write!(f, "\nslot {} : {}", arm_id, count)?;
        }
        Ok(())
    }
}
