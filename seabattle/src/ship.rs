//! The ship model: a straight run of cells with per-cell hit/visibility
//! state, answering geometric and attack queries in grid coordinates.

use crate::{
    board::{Coordinate, Dimensions},
    errors::{CannotPlaceReason, PlaceError},
};

/// State of one cell of a ship.
///
/// Occupation is geometric and never changes after creation; this state only
/// tracks what happened to the cell and whether its owner's view shows it.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum CellState {
    /// Occupied, not hit, concealed from the shared screen. Every ship cell
    /// ends up here once its owner's placement phase is over.
    Hidden,
    /// Occupied and hit. Terminal: a cell never leaves this state.
    Destroyed,
    /// Occupied, not hit, shown on screen. Only used while the owner is
    /// still placing their fleet.
    Visible,
}

/// Axis a ship extends along, starting from its origin cell.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Orientation {
    /// Cells run along increasing `x`.
    Horizontal,
    /// Cells run along increasing `y`.
    Vertical,
}

impl Orientation {
    /// Unit step between consecutive ship cells, as an `(x, y)` delta.
    fn unit(self) -> (usize, usize) {
        match self {
            Orientation::Horizontal => (1, 0),
            Orientation::Vertical => (0, 1),
        }
    }
}

/// Result of attacking a single cell.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AttackOutcome {
    /// The coordinate belongs to the attacked ship. Re-hitting an already
    /// destroyed cell reports `Hit` again.
    Hit,
    /// The coordinate is not occupied by the attacked ship.
    Miss,
}

/// One placed vessel: an origin cell plus a straight run of cell states.
///
/// Index 0 of the cell states is the origin; increasing index walks along
/// the ship's [`Orientation`]. Geometry is fixed at creation, only cell
/// states mutate afterwards.
#[derive(Debug, Clone)]
pub struct Ship {
    /// Grid coordinate of the ship's first cell.
    origin: Coordinate,

    /// Direction the remaining cells extend in.
    orientation: Orientation,

    /// Per-cell state, ordered from the origin outward.
    cells: Vec<CellState>,
}

impl Ship {
    /// Create a ship with every cell [`Visible`][CellState::Visible].
    ///
    /// Fails if `length` is zero or any cell would fall outside `dim`. The
    /// bounds are the caller's: a ship does not remember which board it was
    /// validated against.
    pub fn new(
        origin: Coordinate,
        length: usize,
        orientation: Orientation,
        dim: &Dimensions,
    ) -> Result<Self, PlaceError> {
        if length == 0 {
            return Err(PlaceError::new(CannotPlaceReason::ZeroLength, origin));
        }
        let (dx, dy) = orientation.unit();
        let last = origin
            .x
            .checked_add((length - 1) * dx)
            .zip(origin.y.checked_add((length - 1) * dy))
            .map(|(x, y)| Coordinate::new(x, y));
        match last {
            Some(last) if dim.contains(origin) && dim.contains(last) => Ok(Self {
                origin,
                orientation,
                cells: vec![CellState::Visible; length],
            }),
            _ => Err(PlaceError::new(CannotPlaceReason::OutOfBounds, origin)),
        }
    }

    /// Grid coordinate of the ship's first cell.
    pub fn origin(&self) -> Coordinate {
        self.origin
    }

    /// Direction the ship extends in.
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Number of cells in the ship.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Read-only view of the per-cell states, ordered from the origin.
    pub fn cells(&self) -> &[CellState] {
        &self.cells
    }

    /// Compute the grid coordinate of cell `index`. Pure arithmetic over
    /// the origin and orientation. Panics if `index` is out of range.
    pub fn cell_coordinate(&self, index: usize) -> Coordinate {
        assert!(index < self.cells.len(), "cell index out of range");
        let (dx, dy) = self.orientation.unit();
        Coordinate::new(self.origin.x + index * dx, self.origin.y + index * dy)
    }

    /// Get an iterator over the coordinates of this ship.
    pub fn coords(&self) -> impl '_ + Iterator<Item = Coordinate> {
        (0..self.cells.len()).map(move |index| self.cell_coordinate(index))
    }

    /// Index of the cell at `coord`, if the ship occupies it. Occupation is
    /// purely geometric, regardless of cell state.
    fn cell_index(&self, coord: Coordinate) -> Option<usize> {
        let along = match self.orientation {
            Orientation::Horizontal if coord.y == self.origin.y => {
                coord.x.checked_sub(self.origin.x)
            }
            Orientation::Vertical if coord.x == self.origin.x => {
                coord.y.checked_sub(self.origin.y)
            }
            _ => None,
        };
        along.filter(|&index| index < self.cells.len())
    }

    /// Check whether this ship occupies the given coordinate.
    pub fn occupies(&self, coord: Coordinate) -> bool {
        self.cell_index(coord).is_some()
    }

    /// State of the cell at `coord`, or `None` if the ship does not occupy
    /// it.
    pub fn cell_state(&self, coord: Coordinate) -> Option<CellState> {
        self.cell_index(coord).map(|index| self.cells[index])
    }

    /// Attack the cell at `coord`. If the ship occupies it, the cell becomes
    /// [`Destroyed`][CellState::Destroyed] and the result is a hit; a cell
    /// that was already destroyed stays destroyed and still reports a hit.
    /// A miss leaves the ship untouched.
    pub fn attack(&mut self, coord: Coordinate) -> AttackOutcome {
        match self.cell_index(coord) {
            Some(index) => {
                self.cells[index] = CellState::Destroyed;
                AttackOutcome::Hit
            }
            None => AttackOutcome::Miss,
        }
    }

    /// Conceal the ship: every cell that is not destroyed becomes
    /// [`Hidden`][CellState::Hidden]. Idempotent.
    pub fn conceal_all(&mut self) {
        for cell in &mut self.cells {
            if *cell != CellState::Destroyed {
                *cell = CellState::Hidden;
            }
        }
    }

    /// Count of destroyed cells. Bounded by [`len`][Ship::len] and never
    /// decreases.
    pub fn destroyed_count(&self) -> usize {
        self.cells
            .iter()
            .filter(|&&cell| cell == CellState::Destroyed)
            .count()
    }
}
