//! Errors surfaced by the engine. All of them are recoverable: the adapter
//! is expected to ignore the offending input and re-render unchanged.

use std::fmt::{self, Debug};

use thiserror::Error;

use crate::board::Coordinate;

/// Reason why a ship could not be placed.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum CannotPlaceReason {
    /// The ship would have zero cells.
    #[error("ship length must be nonzero")]
    ZeroLength,
    /// Part of the ship would fall outside the board.
    #[error("the ship does not fit inside the board at the specified position")]
    OutOfBounds,
    /// One or more of the ship's cells is already occupied by a fleet mate.
    #[error("the specified position was already occupied")]
    Occupied,
    /// Placement was attempted outside the acting player's placing phase.
    #[error("placement is not allowed in the current phase")]
    WrongPhase,
}

/// Error caused when attempting to place a ship in an invalid position.
/// The match is left untouched: placements are rejected whole.
#[derive(Error)]
#[error("could not place ship at {origin}: {reason}")]
pub struct PlaceError {
    /// Reason why placement was rejected.
    #[source]
    reason: CannotPlaceReason,

    /// Origin cell where placement was attempted.
    origin: Coordinate,
}

impl PlaceError {
    /// Construct a placement error from a reason and the attempted origin.
    pub(crate) fn new(reason: CannotPlaceReason, origin: Coordinate) -> Self {
        Self { reason, origin }
    }

    /// Get the reason placement was rejected.
    pub fn reason(&self) -> CannotPlaceReason {
        self.reason
    }

    /// Get the origin cell where placement was attempted.
    pub fn origin(&self) -> Coordinate {
        self.origin
    }
}

impl Debug for PlaceError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

/// Reason why a shot was not resolved.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum CannotShootReason {
    /// The shooter is not the player whose turn it is, or the match is
    /// still in its placement phases.
    #[error("player attempted to shoot out of turn")]
    OutOfTurn,

    /// The match already ended in a victory.
    #[error("the game is already over")]
    GameOver,

    /// The target coordinate is outside the opponent's board.
    #[error("the target coordinate is out of bounds")]
    OutOfBounds,
}

/// Error returned when a shot could not be resolved. The match is left
/// untouched: no turn is consumed and no fleet state changes.
#[derive(Error)]
#[error("could not shoot cell {coord}: {reason}")]
pub struct ShotError {
    /// Reason why the shot was rejected.
    #[source]
    reason: CannotShootReason,

    /// The coordinate of the attempted shot.
    coord: Coordinate,
}

impl ShotError {
    /// Construct a shot error with the given reason for the specified cell.
    pub(crate) fn new(reason: CannotShootReason, coord: Coordinate) -> Self {
        Self { reason, coord }
    }

    /// Get the reason the shot failed.
    pub fn reason(&self) -> CannotShootReason {
        self.reason
    }

    /// Get the coordinate of the attempted shot.
    pub fn coord(&self) -> Coordinate {
        self.coord
    }
}

impl Debug for ShotError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}
