use crate::errors::PolicyError;
use crate::policies::{reward::NormalRewardSource, BanditSolver, EpisodeResult, SolverSettings};

use actix::prelude::*;
use tracing::info;

pub struct Experiment {
    solver: BanditSolver<NormalRewardSource>,
}

impl Experiment {
    pub fn new(solver: BanditSolver<NormalRewardSource>) -> Self {
        Self { solver }
    }
}

impl Actor for Experiment {
    type Context = Context<Self>;

    fn started(&mut self, _: &mut Self::Context) {
        let SolverSettings {
            arm_count,
            iterations,
            epsilon,
            ..
        } = self.solver.settings();
        info!(
            arms = %arm_count,
            iterations = %iterations,
            epsilon = %epsilon,
            seed = ?self.solver.seed(),
            "Starting actor for experiment"
        );
    }
}

// Messages
#[derive(Message)]
#[rtype(result = "Result<EpisodeResult, PolicyError>")]
pub struct RunEpisode;

impl Handler<RunEpisode> for Experiment {
    type Result = Result<EpisodeResult, PolicyError>;

    fn handle(&mut self, _: RunEpisode, _: &mut Self::Context) -> Self::Result {
        self.solver.run()
    }
}
