//! Match-level behavior: placement validation, the phase machine, attack
//! routing, and victory detection.

use seabattle::{
    CannotPlaceReason, CannotShootReason, CellState, Coordinate, Dimensions, Fleet, Match,
    Orientation, Phase, PlacementOutcome, Player, Ship, ShotOutcome,
};

/// A 3x3 match where each player places a single one-cell ship.
fn micro_match() -> Match {
    Match::with_rules(Dimensions::new(3, 3), 1, 1, Orientation::Horizontal)
}

/// Drive a micro match through setup: player 1 at (0,0), player 2 at (1,1).
fn setup_micro_match() -> Match {
    let mut game = micro_match();
    game.place_ship(Player::P1, Coordinate::new(0, 0)).unwrap();
    game.place_ship(Player::P1, Coordinate::new(2, 2)).unwrap();
    game.place_ship(Player::P2, Coordinate::new(1, 1)).unwrap();
    game.place_ship(Player::P2, Coordinate::new(2, 2)).unwrap();
    assert_eq!(game.phase(), Phase::Turn(Player::P1));
    game
}

#[test]
fn phase_walks_forward_through_setup() {
    let mut game = Match::with_rules(Dimensions::new(5, 5), 2, 1, Orientation::Horizontal);
    assert_eq!(game.phase(), Phase::Placing(Player::P1));

    assert_eq!(
        game.place_ship(Player::P1, Coordinate::new(0, 0)).unwrap(),
        PlacementOutcome::Placed
    );
    assert_eq!(
        game.place_ship(Player::P1, Coordinate::new(1, 1)).unwrap(),
        PlacementOutcome::Placed
    );
    assert_eq!(game.phase(), Phase::Placing(Player::P1));

    // The action past the cap is what advances the phase.
    assert_eq!(
        game.place_ship(Player::P1, Coordinate::new(2, 2)).unwrap(),
        PlacementOutcome::FleetFull
    );
    assert_eq!(game.phase(), Phase::Placing(Player::P2));
    assert_eq!(game.fleet_of(Player::P1).ships().len(), 2);

    game.place_ship(Player::P2, Coordinate::new(0, 0)).unwrap();
    game.place_ship(Player::P2, Coordinate::new(1, 1)).unwrap();
    assert_eq!(
        game.place_ship(Player::P2, Coordinate::new(2, 2)).unwrap(),
        PlacementOutcome::FleetFull
    );
    // Setup completion passes straight through into player 1's turn.
    assert_eq!(game.phase(), Phase::Turn(Player::P1));
    assert_eq!(game.winner(), None);
}

#[test]
fn fleets_conceal_only_once_their_owner_is_done() {
    let mut game = micro_match();
    game.place_ship(Player::P1, Coordinate::new(0, 0)).unwrap();
    // Player 1 still sees their own ship while placing.
    assert_eq!(
        game.fleet_of(Player::P1).ships()[0].cells(),
        &[CellState::Visible]
    );

    game.place_ship(Player::P1, Coordinate::new(1, 1)).unwrap();
    assert_eq!(game.phase(), Phase::Placing(Player::P2));
    assert_eq!(
        game.fleet_of(Player::P1).ships()[0].cells(),
        &[CellState::Hidden]
    );

    game.place_ship(Player::P2, Coordinate::new(1, 1)).unwrap();
    assert_eq!(
        game.fleet_of(Player::P2).ships()[0].cells(),
        &[CellState::Visible]
    );
    game.place_ship(Player::P2, Coordinate::new(0, 0)).unwrap();
    assert_eq!(
        game.fleet_of(Player::P2).ships()[0].cells(),
        &[CellState::Hidden]
    );
}

#[test]
fn overlapping_placement_is_rejected_whole() {
    let mut game = Match::with_rules(Dimensions::new(10, 10), 3, 3, Orientation::Horizontal);
    game.place_ship(Player::P1, Coordinate::new(0, 0)).unwrap();

    // Overlaps the tail cell (2,0) of the first ship.
    let err = game
        .place_ship(Player::P1, Coordinate::new(2, 0))
        .unwrap_err();
    assert_eq!(err.reason(), CannotPlaceReason::Occupied);
    assert_eq!(err.origin(), Coordinate::new(2, 0));
    assert_eq!(game.fleet_of(Player::P1).ships().len(), 1);

    // Next row over is fine.
    game.place_ship(Player::P1, Coordinate::new(2, 1)).unwrap();
    game.place_ship(Player::P1, Coordinate::new(5, 0)).unwrap();

    // Accepted ships occupy pairwise disjoint cell sets.
    let ships = game.fleet_of(Player::P1).ships();
    let mut seen = std::collections::HashSet::new();
    for ship in ships {
        for coord in ship.coords() {
            assert!(seen.insert(coord), "cell {} occupied twice", coord);
        }
    }
    assert_eq!(seen.len(), 9);
}

#[test]
fn placement_out_of_bounds_is_rejected() {
    let mut game = Match::with_rules(Dimensions::new(10, 10), 3, 3, Orientation::Horizontal);
    let err = game
        .place_ship(Player::P1, Coordinate::new(8, 0))
        .unwrap_err();
    assert_eq!(err.reason(), CannotPlaceReason::OutOfBounds);
    assert!(game.fleet_of(Player::P1).ships().is_empty());
    assert_eq!(game.phase(), Phase::Placing(Player::P1));
}

#[test]
fn placement_by_the_wrong_player_is_rejected() {
    let mut game = micro_match();
    let err = game
        .place_ship(Player::P2, Coordinate::new(0, 0))
        .unwrap_err();
    assert_eq!(err.reason(), CannotPlaceReason::WrongPhase);
    assert!(game.fleet_of(Player::P2).ships().is_empty());
}

#[test]
fn vertical_ships_place_and_take_hits() {
    let mut game = Match::with_rules(Dimensions::new(10, 10), 1, 3, Orientation::Vertical);
    // No room below (0,8) for three cells.
    let err = game
        .place_ship(Player::P1, Coordinate::new(0, 8))
        .unwrap_err();
    assert_eq!(err.reason(), CannotPlaceReason::OutOfBounds);

    game.place_ship(Player::P1, Coordinate::new(2, 1)).unwrap();
    game.place_ship(Player::P1, Coordinate::new(0, 0)).unwrap(); // fleet full
    game.place_ship(Player::P2, Coordinate::new(5, 5)).unwrap();
    game.place_ship(Player::P2, Coordinate::new(0, 0)).unwrap(); // fleet full
    assert_eq!(game.phase(), Phase::Turn(Player::P1));

    // Work down player 2's vertical ship at (5,5)..(5,7).
    assert_eq!(
        game.attack(Player::P1, Coordinate::new(5, 5)).unwrap(),
        ShotOutcome::Hit
    );
    game.attack(Player::P2, Coordinate::new(9, 9)).unwrap();
    assert_eq!(
        game.attack(Player::P1, Coordinate::new(5, 6)).unwrap(),
        ShotOutcome::Hit
    );
    game.attack(Player::P2, Coordinate::new(9, 8)).unwrap();
    assert_eq!(
        game.attack(Player::P1, Coordinate::new(5, 7)).unwrap(),
        ShotOutcome::Victory
    );
    assert_eq!(game.winner(), Some(Player::P1));
}

#[test]
fn sinking_the_last_cell_wins_the_match() {
    let mut game = setup_micro_match();
    assert_eq!(
        game.attack(Player::P1, Coordinate::new(1, 1)).unwrap(),
        ShotOutcome::Victory
    );
    assert_eq!(game.phase(), Phase::Victory(Player::P1));
    assert_eq!(game.winner(), Some(Player::P1));
    let defender = game.fleet_of(Player::P2);
    assert_eq!(defender.total_destroyed(), 1);
    assert_eq!(defender.total_destroyed(), defender.total_cells());
}

#[test]
fn a_miss_logs_a_water_shot_and_passes_the_turn() {
    let mut game = setup_micro_match();
    assert_eq!(
        game.attack(Player::P1, Coordinate::new(0, 0)).unwrap(),
        ShotOutcome::Miss
    );
    assert_eq!(
        game.fleet_of(Player::P2).water_shots(),
        &[Coordinate::new(0, 0)]
    );
    assert_eq!(game.phase(), Phase::Turn(Player::P2));
    assert_eq!(game.winner(), None);
}

#[test]
fn repeated_misses_append_duplicate_water_shots() {
    let mut game = setup_micro_match();
    game.attack(Player::P1, Coordinate::new(0, 1)).unwrap();
    game.attack(Player::P2, Coordinate::new(2, 2)).unwrap();
    game.attack(Player::P1, Coordinate::new(0, 1)).unwrap();
    assert_eq!(
        game.fleet_of(Player::P2).water_shots(),
        &[Coordinate::new(0, 1), Coordinate::new(0, 1)]
    );
}

#[test]
fn out_of_bounds_attack_changes_nothing() {
    let mut game = setup_micro_match();
    let err = game
        .attack(Player::P1, Coordinate::new(3, 0))
        .unwrap_err();
    assert_eq!(err.reason(), CannotShootReason::OutOfBounds);
    assert_eq!(err.coord(), Coordinate::new(3, 0));
    // No turn consumed, no shot recorded.
    assert_eq!(game.phase(), Phase::Turn(Player::P1));
    assert!(game.fleet_of(Player::P2).water_shots().is_empty());
    assert_eq!(game.fleet_of(Player::P2).total_destroyed(), 0);
}

#[test]
fn shooting_out_of_turn_is_rejected() {
    let mut game = setup_micro_match();
    let err = game
        .attack(Player::P2, Coordinate::new(0, 0))
        .unwrap_err();
    assert_eq!(err.reason(), CannotShootReason::OutOfTurn);
    assert_eq!(game.phase(), Phase::Turn(Player::P1));
}

#[test]
fn shooting_during_placement_is_rejected() {
    let mut game = micro_match();
    let err = game
        .attack(Player::P1, Coordinate::new(0, 0))
        .unwrap_err();
    assert_eq!(err.reason(), CannotShootReason::OutOfTurn);
    assert_eq!(game.phase(), Phase::Placing(Player::P1));
}

#[test]
fn victory_is_terminal() {
    let mut game = setup_micro_match();
    game.attack(Player::P1, Coordinate::new(1, 1)).unwrap();
    let err = game
        .attack(Player::P2, Coordinate::new(0, 0))
        .unwrap_err();
    assert_eq!(err.reason(), CannotShootReason::GameOver);
    let err = game
        .place_ship(Player::P1, Coordinate::new(0, 1))
        .unwrap_err();
    assert_eq!(err.reason(), CannotPlaceReason::WrongPhase);
    assert_eq!(game.phase(), Phase::Victory(Player::P1));
}

#[test]
fn rehitting_a_destroyed_cell_confirms_the_hit_without_progress() {
    let mut game = Match::with_rules(Dimensions::new(5, 5), 1, 2, Orientation::Horizontal);
    game.place_ship(Player::P1, Coordinate::new(0, 0)).unwrap();
    game.place_ship(Player::P1, Coordinate::new(4, 4)).unwrap();
    game.place_ship(Player::P2, Coordinate::new(0, 0)).unwrap();
    game.place_ship(Player::P2, Coordinate::new(4, 4)).unwrap();

    assert_eq!(
        game.attack(Player::P1, Coordinate::new(0, 0)).unwrap(),
        ShotOutcome::Hit
    );
    game.attack(Player::P2, Coordinate::new(3, 3)).unwrap();

    // Same cell again: still a hit, but no new destruction and no victory.
    assert_eq!(
        game.attack(Player::P1, Coordinate::new(0, 0)).unwrap(),
        ShotOutcome::Hit
    );
    assert_eq!(game.fleet_of(Player::P2).total_destroyed(), 1);
    assert_eq!(game.phase(), Phase::Turn(Player::P2));

    game.attack(Player::P2, Coordinate::new(3, 4)).unwrap();
    assert_eq!(
        game.attack(Player::P1, Coordinate::new(1, 0)).unwrap(),
        ShotOutcome::Victory
    );
}

#[test]
fn victory_threshold_follows_the_ships_actually_placed() {
    // Mixed-length fleet built directly: the defeat threshold must be the
    // sum of placed ship lengths, not a cap-times-length product.
    let dim = Dimensions::new(10, 10);
    let mut fleet = Fleet::new();
    fleet.add_ship(Ship::new(Coordinate::new(0, 0), 2, Orientation::Horizontal, &dim).unwrap());
    fleet.add_ship(Ship::new(Coordinate::new(0, 2), 3, Orientation::Vertical, &dim).unwrap());
    assert_eq!(fleet.total_cells(), 5);

    for coord in [
        Coordinate::new(0, 0),
        Coordinate::new(1, 0),
        Coordinate::new(0, 2),
        Coordinate::new(0, 3),
    ]
    .iter()
    .copied()
    {
        fleet.resolve_attack(coord);
    }
    assert_eq!(fleet.total_destroyed(), 4);
    assert!(fleet.total_destroyed() < fleet.total_cells());
    fleet.resolve_attack(Coordinate::new(0, 4));
    assert_eq!(fleet.total_destroyed(), fleet.total_cells());
    assert!(fleet.water_shots().is_empty());
}

#[test]
fn default_rules_match_the_original_game() {
    let game = Match::new(Dimensions::default());
    assert_eq!(game.max_ships(), 5);
    assert_eq!(game.ship_length(), 3);
    assert_eq!(game.orientation(), Orientation::Horizontal);
    assert_eq!(game.dimensions(), Dimensions::new(20, 20));
    assert_eq!(game.phase(), Phase::Placing(Player::P1));
}
