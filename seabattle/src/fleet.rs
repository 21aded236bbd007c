//! A player's side of the ocean: their ships plus the log of shots that
//! landed on open water.

use crate::{
    board::Coordinate,
    ship::{AttackOutcome, CellState, Ship},
};

/// One player's fleet and the misses recorded against their board.
///
/// Ships are appended during placement and the set is fixed afterwards;
/// only their cell states keep mutating. The fleet does not enforce the
/// fleet-size cap — that is a game rule and lives in
/// [`Match`][crate::game::Match].
#[derive(Debug, Clone, Default)]
pub struct Fleet {
    /// Ships owned by this player, in placement order.
    ships: Vec<Ship>,

    /// Opponent shots that missed every ship, in the order they landed.
    /// Duplicates are allowed; re-shooting the same patch of sea just
    /// records it again.
    water_shots: Vec<Coordinate>,
}

impl Fleet {
    /// Create an empty fleet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a ship to the fleet.
    pub fn add_ship(&mut self, ship: Ship) {
        self.ships.push(ship);
    }

    /// Read-only view of the ships, in placement order.
    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    /// Read-only view of the recorded water shots, oldest first.
    pub fn water_shots(&self) -> &[Coordinate] {
        &self.water_shots
    }

    /// Check whether any ship in the fleet occupies the given coordinate.
    pub fn occupies(&self, coord: Coordinate) -> bool {
        self.ships.iter().any(|ship| ship.occupies(coord))
    }

    /// State of the ship cell at `coord`, or `None` if the coordinate is
    /// open water. At most one ship can occupy a coordinate, so the first
    /// match is the only one.
    pub fn cell_state(&self, coord: Coordinate) -> Option<CellState> {
        self.ships.iter().find_map(|ship| ship.cell_state(coord))
    }

    /// Resolve an opponent shot at `coord` against this fleet.
    ///
    /// If no ship occupies the coordinate the shot is logged as a water
    /// shot and reported as a miss. Otherwise the occupying ship takes the
    /// hit. Placement validation keeps ship cells pairwise disjoint, so at
    /// most one ship can occupy any coordinate.
    pub fn resolve_attack(&mut self, coord: Coordinate) -> AttackOutcome {
        match self.ships.iter_mut().find(|ship| ship.occupies(coord)) {
            Some(ship) => ship.attack(coord),
            None => {
                self.water_shots.push(coord);
                AttackOutcome::Miss
            }
        }
    }

    /// Conceal every ship in the fleet. Called once this player's placement
    /// phase is over.
    pub fn conceal_all_ships(&mut self) {
        for ship in &mut self.ships {
            ship.conceal_all();
        }
    }

    /// Total destroyed cells across the fleet.
    pub fn total_destroyed(&self) -> usize {
        self.ships.iter().map(|ship| ship.destroyed_count()).sum()
    }

    /// Total destructible cells across the fleet: the sum of the lengths of
    /// the ships actually placed. This is the defeat threshold, computed
    /// generically so fleets of mixed-length ships stay correct.
    pub fn total_cells(&self) -> usize {
        self.ships.iter().map(|ship| ship.len()).sum()
    }
}
