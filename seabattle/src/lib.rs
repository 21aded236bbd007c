//! Game-state engine for two-player, same-screen battleship.
//!
//! Each player privately places a fleet of fixed-shape ships on their own
//! grid, then the players alternate firing at single cells of the
//! opponent's grid until one fleet is fully destroyed.
//!
//! The crate is the engine only: [`board`] holds the grid geometry,
//! [`ship`] the per-vessel cell states, [`fleet`] a player's ships and
//! miss log, and [`game`] the [`Match`][game::Match] phase machine that
//! ties them together. Rendering, input handling, and the mapping from
//! screen positions to grid coordinates all belong to whatever
//! presentation adapter drives the [`Match`]; the engine consumes and
//! exposes abstract cell coordinates only.
//!
//! With the `rng_gen` feature, players, orientations, and coordinates can
//! be sampled with `rand`, which adapters can use to offer randomized
//! placement.

pub mod board;
pub mod errors;
pub mod fleet;
pub mod game;
pub mod ship;

#[cfg(feature = "rng_gen")]
mod rng;

pub use self::{
    board::{Coordinate, Dimensions},
    errors::{CannotPlaceReason, CannotShootReason, PlaceError, ShotError},
    fleet::Fleet,
    game::{Match, Phase, PlacementOutcome, Player, ShotOutcome},
    ship::{AttackOutcome, CellState, Orientation, Ship},
};

#[cfg(feature = "rng_gen")]
pub use self::rng::UniformCoordinate;
