use rand::{rngs::SmallRng, SeedableRng};

/// Seeded once and kept for the life of its owner, so every draw advances
/// the same stream instead of re-seeding from the clock.
#[derive(Clone, Debug)]
pub struct MaybeSeededRng {
    seed: Option<u64>,
    rng: SmallRng,
}

impl MaybeSeededRng {
    pub fn new(seed: Option<u64>) -> Self {
        let rng = if let Some(seed) = seed {
            SmallRng::seed_from_u64(seed)
        } else {
            SmallRng::from_os_rng()
        };

        Self { seed, rng }
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    pub fn get_rng(&mut self) -> &mut SmallRng {
        &mut self.rng
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    const SEED: u64 = 1234;

    #[test]
    fn seeded_streams_repeat() {
        let mut a = MaybeSeededRng::new(Some(SEED));
        let mut b = MaybeSeededRng::new(Some(SEED));

        let xs = (0..16)
            .map(|_| a.get_rng().random::<u64>())
            .collect::<Vec<_>>();
        let ys = (0..16)
            .map(|_| b.get_rng().random::<u64>())
            .collect::<Vec<_>>();
        assert_eq!(xs, ys);
        assert_eq!(a.seed(), Some(SEED));
    }

    #[test]
    fn stream_advances() {
        let mut rng = MaybeSeededRng::new(Some(SEED));
        let first = rng.get_rng().random::<u64>();
        let second = rng.get_rng().random::<u64>();
        assert_ne!(first, second);
    }

    #[test]
    fn unseeded() {
        let rng = MaybeSeededRng::new(None);
        assert_eq!(rng.seed(), None);
    }
}
