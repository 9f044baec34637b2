pub mod arm;
pub mod epsilon_greedy;
mod policy;
pub mod reward;
mod rng;

pub use epsilon_greedy::{BanditSolver, SolverSettings};
pub use policy::{EpisodeResult, PolicyStats};
pub use rng::MaybeSeededRng;
