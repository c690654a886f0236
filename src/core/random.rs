use rand::distr::StandardUniform;
use rand::prelude::*;
use crate::core::Direction;

impl Distribution<Direction> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Direction {
        Direction::ALL[rng.random_range(0..Direction::ALL.len())]
    }
}
