//! Strategies for thinning the wall candidates considered at a search node.

use quoridor_core::WallPlacement;
use rand::{seq::SliceRandom, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Chooses at most `limit` wall placements from the currently valid candidates.
pub trait WallSampler {
    /// Returns the placements to explore, in the order they should be tried.
    fn sample(&mut self, candidates: Vec<WallPlacement>, limit: usize) -> Vec<WallPlacement>;
}

impl<S> WallSampler for &mut S
where
    S: WallSampler + ?Sized,
{
    fn sample(&mut self, candidates: Vec<WallPlacement>, limit: usize) -> Vec<WallPlacement> {
        (**self).sample(candidates, limit)
    }
}

/// Uniform sampling without replacement driven by a seeded ChaCha stream.
#[derive(Clone, Debug)]
pub struct SeededSampler {
    rng: ChaCha8Rng,
}

impl SeededSampler {
    /// Creates a sampler whose choices are fully determined by `seed`.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl WallSampler for SeededSampler {
    fn sample(&mut self, candidates: Vec<WallPlacement>, limit: usize) -> Vec<WallPlacement> {
        candidates
            .choose_multiple(&mut self.rng, limit)
            .copied()
            .collect()
    }
}

/// Keeps the first `limit` candidates in enumeration order.
#[derive(Clone, Copy, Debug, Default)]
pub struct LeadingSampler;

impl WallSampler for LeadingSampler {
    fn sample(&mut self, mut candidates: Vec<WallPlacement>, limit: usize) -> Vec<WallPlacement> {
        candidates.truncate(limit);
        candidates
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quoridor_core::{Orientation, Position};

    fn candidates() -> Vec<WallPlacement> {
        (0..20)
            .map(|x| WallPlacement::new(Orientation::Horizontal, Position::new(x, 0)))
            .collect()
    }

    #[test]
    fn seeded_sampler_is_reproducible() {
        let first = SeededSampler::new(7).sample(candidates(), 10);
        let second = SeededSampler::new(7).sample(candidates(), 10);
        assert_eq!(first, second);
        assert_eq!(first.len(), 10);
    }

    #[test]
    fn seeded_sampler_never_repeats_a_candidate() {
        let mut picked = SeededSampler::new(99).sample(candidates(), 10);
        picked.sort();
        picked.dedup();
        assert_eq!(picked.len(), 10);
    }

    #[test]
    fn short_lists_are_returned_whole() {
        let few = candidates().into_iter().take(3).collect::<Vec<_>>();
        let mut picked = SeededSampler::new(1).sample(few.clone(), 10);
        picked.sort();
        assert_eq!(picked, few);
    }

    #[test]
    fn leading_sampler_keeps_enumeration_order() {
        let picked = LeadingSampler.sample(candidates(), 2);
        assert_eq!(picked, candidates()[..2].to_vec());
    }
}
