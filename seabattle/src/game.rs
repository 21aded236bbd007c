//! The match state machine: owns both fleets, validates and routes
//! placement and attack actions, and detects victory.
//!
//! Phases advance strictly forward — `Placing(P1)` → `Placing(P2)` →
//! `SetupComplete` → `Turn(P1)` — except for the `Turn(P1)` ⇄ `Turn(P2)`
//! alternation, and `Victory` is terminal. The engine is synchronous and
//! single-threaded: every action fully applies or is fully rejected before
//! it returns, and a `Match` expects exclusive ownership for its lifetime.

use crate::{
    board::{Coordinate, Dimensions},
    errors::{CannotPlaceReason, CannotShootReason, PlaceError, ShotError},
    fleet::Fleet,
    ship::{AttackOutcome, Orientation, Ship},
};

/// Player ID. Either `P1` or `P2`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Player {
    P1,
    P2,
}

impl Player {
    /// Get the opponent of this player.
    pub fn opponent(self) -> Self {
        match self {
            Player::P1 => Player::P2,
            Player::P2 => Player::P1,
        }
    }
}

/// Current phase of a match.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Phase {
    /// The given player is positioning their fleet.
    Placing(Player),
    /// Both fleets are placed. Pass-through: entering this phase conceals
    /// player 2's fleet and immediately chains into `Turn(P1)`, so callers
    /// only ever observe it as a step in the recorded transition sequence.
    SetupComplete,
    /// The given player chooses a cell of the opponent's board to attack.
    Turn(Player),
    /// The given player destroyed the opponent's whole fleet. Terminal.
    Victory(Player),
}

/// Result of a successful placement action.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum PlacementOutcome {
    /// The ship was added to the acting player's fleet.
    Placed,
    /// The fleet already held the maximum number of ships; the action
    /// advanced the match to the next phase instead of adding a ship.
    ///
    /// This mirrors the original game, where the click past the cap is
    /// what hands the screen to the other player. Intentional, not a bug.
    FleetFull,
}

/// Outcome of a successfully resolved shot.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ShotOutcome {
    /// The shot landed on open water and was logged against the opponent.
    Miss,
    /// The shot destroyed (or re-confirmed) a cell of an opponent ship.
    Hit,
    /// The shot destroyed the opponent's last remaining cell; the match is
    /// over and the shooter won.
    Victory,
}

/// A two-player match: the phase machine plus both fleets.
///
/// Both players place ships of the same fixed length and orientation, one
/// per placement action, on boards of identical dimensions. Coordinates are
/// always relative to the addressed player's own board; translating clicks
/// or commands into them is the adapter's job.
#[derive(Debug, Clone)]
pub struct Match {
    /// Current phase. Only mutated through [`Match::advance`].
    phase: Phase,

    /// Player 1's fleet and miss log.
    player1: Fleet,

    /// Player 2's fleet and miss log.
    player2: Fleet,

    /// Dimensions of each player's board.
    dim: Dimensions,

    /// Fleet size cap per player.
    max_ships: usize,

    /// Length of every placed ship.
    ship_length: usize,

    /// Orientation of every placed ship.
    orientation: Orientation,
}

impl Match {
    /// Start a match with the original game's rules: five horizontal
    /// three-cell ships per player.
    pub fn new(dim: Dimensions) -> Self {
        Self::with_rules(dim, 5, 3, Orientation::Horizontal)
    }

    /// Start a match with custom rules. Panics if `max_ships` or
    /// `ship_length` is 0.
    pub fn with_rules(
        dim: Dimensions,
        max_ships: usize,
        ship_length: usize,
        orientation: Orientation,
    ) -> Self {
        assert!(max_ships > 0, "max_ships must be nonzero");
        assert!(ship_length > 0, "ship_length must be nonzero");
        Self {
            phase: Phase::Placing(Player::P1),
            player1: Fleet::new(),
            player2: Fleet::new(),
            dim,
            max_ships,
            ship_length,
            orientation,
        }
    }

    /// Get the current [`Phase`].
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Get the dimensions shared by both boards.
    pub fn dimensions(&self) -> Dimensions {
        self.dim
    }

    /// Get the fleet size cap per player.
    pub fn max_ships(&self) -> usize {
        self.max_ships
    }

    /// Get the length of the ships being placed.
    pub fn ship_length(&self) -> usize {
        self.ship_length
    }

    /// Get the orientation of the ships being placed.
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Read-only view of the given player's fleet, for rendering.
    pub fn fleet_of(&self, player: Player) -> &Fleet {
        match player {
            Player::P1 => &self.player1,
            Player::P2 => &self.player2,
        }
    }

    /// Get the winner of the match. Returns `None` while it is in progress.
    pub fn winner(&self) -> Option<Player> {
        match self.phase {
            Phase::Victory(player) => Some(player),
            _ => None,
        }
    }

    fn fleet_mut(&mut self, player: Player) -> &mut Fleet {
        match player {
            Player::P1 => &mut self.player1,
            Player::P2 => &mut self.player2,
        }
    }

    /// Move to `next` and run its entry actions. Concealment happens here:
    /// a fleet flips to hidden only once its owner is done placing and the
    /// match has moved on, never while the owner is still looking at it.
    fn advance(&mut self, next: Phase) {
        self.phase = next;
        match next {
            Phase::Placing(Player::P2) => self.player1.conceal_all_ships(),
            Phase::SetupComplete => {
                self.player2.conceal_all_ships();
                self.advance(Phase::Turn(Player::P1));
            }
            _ => {}
        }
    }

    /// Place a ship for `player` with its origin at `origin`. Length and
    /// orientation come from the match rules, not from the action.
    ///
    /// Accepted only while the match is in `player`'s placing phase. The
    /// whole placement is validated before anything mutates: every cell
    /// must be in bounds and unoccupied by a fleet mate, or the action is
    /// rejected and the match is unchanged.
    ///
    /// If the fleet is already at the cap, the action advances the phase
    /// instead and reports [`PlacementOutcome::FleetFull`].
    pub fn place_ship(
        &mut self,
        player: Player,
        origin: Coordinate,
    ) -> Result<PlacementOutcome, PlaceError> {
        match self.phase {
            Phase::Placing(placing) if placing == player => {}
            _ => return Err(PlaceError::new(CannotPlaceReason::WrongPhase, origin)),
        }
        if self.fleet_of(player).ships().len() >= self.max_ships {
            match player {
                Player::P1 => self.advance(Phase::Placing(Player::P2)),
                Player::P2 => self.advance(Phase::SetupComplete),
            }
            return Ok(PlacementOutcome::FleetFull);
        }
        let ship = Ship::new(origin, self.ship_length, self.orientation, &self.dim)?;
        if ship.coords().any(|coord| self.fleet_of(player).occupies(coord)) {
            return Err(PlaceError::new(CannotPlaceReason::Occupied, origin));
        }
        self.fleet_mut(player).add_ship(ship);
        Ok(PlacementOutcome::Placed)
    }

    /// Fire at `coord` on the opponent's board as `attacker`.
    ///
    /// Accepted only on the attacker's turn, for in-bounds coordinates.
    /// A miss logs a water shot against the opponent; a hit destroys the
    /// addressed cell (re-hitting a destroyed cell re-confirms the hit).
    /// Either way the turn passes to the opponent, unless the hit brought
    /// the opponent's destroyed-cell count up to their whole fleet, which
    /// ends the match with [`ShotOutcome::Victory`].
    pub fn attack(
        &mut self,
        attacker: Player,
        coord: Coordinate,
    ) -> Result<ShotOutcome, ShotError> {
        match self.phase {
            Phase::Turn(current) if current == attacker => {}
            Phase::Victory(_) => return Err(ShotError::new(CannotShootReason::GameOver, coord)),
            _ => return Err(ShotError::new(CannotShootReason::OutOfTurn, coord)),
        }
        if !self.dim.contains(coord) {
            return Err(ShotError::new(CannotShootReason::OutOfBounds, coord));
        }
        let target = attacker.opponent();
        let outcome = self.fleet_mut(target).resolve_attack(coord);
        let defender = self.fleet_of(target);
        if defender.total_destroyed() >= defender.total_cells() {
            self.advance(Phase::Victory(attacker));
            Ok(ShotOutcome::Victory)
        } else {
            self.advance(Phase::Turn(target));
            Ok(match outcome {
                AttackOutcome::Hit => ShotOutcome::Hit,
                AttackOutcome::Miss => ShotOutcome::Miss,
            })
        }
    }
}
