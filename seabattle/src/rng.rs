//! Random generation support, enabled by the `rng_gen` feature. Lets
//! adapters sample players, orientations, and board coordinates, e.g. for
//! a randomized placement helper.

use rand::{
    distributions::{
        uniform::{SampleBorrow, SampleUniform, UniformInt, UniformSampler},
        Distribution, Standard,
    },
    Rng,
};

use crate::{board::Coordinate, game::Player, ship::Orientation};

impl Distribution<Player> for Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Player {
        if rng.gen::<bool>() {
            Player::P1
        } else {
            Player::P2
        }
    }
}

impl Distribution<Orientation> for Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Orientation {
        if rng.gen::<bool>() {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        }
    }
}

/// Uniform sampler for [`Coordinate`], sampling `x` and `y` independently.
#[derive(Debug, Copy, Clone)]
pub struct UniformCoordinate {
    x: UniformInt<usize>,
    y: UniformInt<usize>,
}

impl UniformSampler for UniformCoordinate {
    type X = Coordinate;

    fn new<B1, B2>(low: B1, high: B2) -> Self
    where
        B1: SampleBorrow<Self::X> + Sized,
        B2: SampleBorrow<Self::X> + Sized,
    {
        let (low, high) = (low.borrow(), high.borrow());
        Self {
            x: UniformInt::new(low.x, high.x),
            y: UniformInt::new(low.y, high.y),
        }
    }

    fn new_inclusive<B1, B2>(low: B1, high: B2) -> Self
    where
        B1: SampleBorrow<Self::X> + Sized,
        B2: SampleBorrow<Self::X> + Sized,
    {
        let (low, high) = (low.borrow(), high.borrow());
        Self {
            x: UniformInt::new_inclusive(low.x, high.x),
            y: UniformInt::new_inclusive(low.y, high.y),
        }
    }

    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Coordinate {
        Coordinate::new(self.x.sample(rng), self.y.sample(rng))
    }
}

impl SampleUniform for Coordinate {
    type Sampler = UniformCoordinate;
}
