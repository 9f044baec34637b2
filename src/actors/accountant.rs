use crate::errors::PolicyError;
use crate::policies::EpisodeResult;
use crate::report::Tally;

use actix::prelude::*;
use tracing::{debug, info};

pub struct Accountant {
    tally: Tally,
}

impl Accountant {
    pub fn new(arm_count: usize) -> Self {
        Self {
            tally: Tally::new(arm_count),
        }
    }
}

impl Actor for Accountant {
    type Context = Context<Self>;

    fn started(&mut self, _: &mut Self::Context) {
        info!("Starting accountant");
    }
}

// Messages
#[derive(Message)]
#[rtype(result = "Result<(), PolicyError>")]
pub struct RecordEpisode {
    pub result: EpisodeResult,
}

#[derive(Message)]
#[rtype(result = "Tally")]
pub struct GetTally;

impl Handler<RecordEpisode> for Accountant {
    type Result = Result<(), PolicyError>;

    fn handle(&mut self, msg: RecordEpisode, _: &mut Self::Context) -> Self::Result {
        let serialized = serde_json::to_string(&msg.result).unwrap_or_default();
        debug!(
            plays = %msg.result.stats.total_plays(),
            "Recorded episode:\n{serialized}"
        );
        self.tally.record(msg.result.best_arm)
    }
}

impl Handler<GetTally> for Accountant {
    type Result = MessageResult<GetTally>;

    fn handle(&mut self, _: GetTally, _: &mut Self::Context) -> Self::Result {
        MessageResult(self.tally.clone())
    }
}
