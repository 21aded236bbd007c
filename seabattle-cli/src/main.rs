//! Same-screen terminal client for the `seabattle` engine.
//!
//! This is the presentation adapter: it turns typed commands into grid
//! coordinates, feeds them to the [`Match`], and re-renders the boards from
//! the engine's read-only views. All game rules live in the engine.

use std::{
    io::{self, BufRead, Write},
    process,
};

use clap::{App, Arg, ArgMatches};
use once_cell::sync::Lazy;
use rand::{distributions::Uniform, Rng};
use regex::Regex;

use seabattle::{
    CellState, Coordinate, Dimensions, Fleet, Match, Orientation, Phase, PlacementOutcome, Player,
    ShotOutcome,
};

/// Matcher for coordinate commands, with or without a leading verb.
static COORD: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:(?:place|put|fire|shoot)\s+)?(?P<x>[0-9]+)(?:\s*,\s*|\s+)(?P<y>[0-9]+)$")
        .unwrap()
});

fn main() -> io::Result<()> {
    let matches = App::new("Seabattle")
        .version("1.0")
        .about("Two players, one screen, two fleets. Last fleet afloat wins.")
        .arg(
            Arg::with_name("width")
                .short("w")
                .long("width")
                .value_name("WIDTH")
                .help("board width in cells (default 20)")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("height")
                .long("height")
                .value_name("HEIGHT")
                .help("board height in cells (default 20)")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("ships")
                .short("s")
                .long("ships")
                .value_name("SHIPS")
                .help("number of ships per fleet (default 5)")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("length")
                .short("l")
                .long("length")
                .value_name("LENGTH")
                .help("length of each ship in cells (default 3)")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("vertical")
                .short("v")
                .long("vertical")
                .help("place ships vertically instead of horizontally"),
        )
        .get_matches();

    let width = arg_usize(&matches, "width", 20);
    let height = arg_usize(&matches, "height", 20);
    let ships = arg_usize(&matches, "ships", 5);
    let length = arg_usize(&matches, "length", 3);
    let orientation = if matches.is_present("vertical") {
        Orientation::Vertical
    } else {
        Orientation::Horizontal
    };

    let dim = match Dimensions::try_new(width, height) {
        Some(dim) => dim,
        None => fail("board width and height must be nonzero"),
    };
    if ships == 0 || length == 0 {
        fail("ships and length must be nonzero");
    }
    let axis = match orientation {
        Orientation::Horizontal => dim.width(),
        Orientation::Vertical => dim.height(),
    };
    if length > axis {
        fail("ships of that length cannot fit on the board");
    }

    let mut game = Match::with_rules(dim, ships, length, orientation);
    let stdin = io::stdin();
    let mut input = InputReader::new(stdin.lock());
    let mut rng = rand::thread_rng();

    println!("Welcome to Seabattle. Type help or ? for commands.");
    loop {
        match game.phase() {
            Phase::Placing(player) => run_placement(&mut game, player, &mut input, &mut rng)?,
            Phase::Turn(player) => run_turn(&mut game, player, &mut input)?,
            Phase::Victory(player) => {
                println!();
                println!("{} wins!", player_name(player));
                break;
            }
            // Setup completion chains straight into player 1's turn inside
            // the engine, so it is never observed here.
            Phase::SetupComplete => unreachable!(),
        }
    }
    Ok(())
}

/// Handle one command while `player` is placing their fleet.
fn run_placement(
    game: &mut Match,
    player: Player,
    input: &mut InputReader<impl BufRead>,
    rng: &mut impl Rng,
) -> io::Result<()> {
    enum Command {
        Place(Coordinate),
        Randomize,
        Done,
        Help,
    }

    let placed = game.fleet_of(player).ships().len();
    println!();
    if placed < game.max_ships() {
        println!(
            "{}, place your ships ({} of {} placed).",
            player_name(player),
            placed,
            game.max_ships()
        );
    } else {
        println!(
            "{}, all ships placed. Type done to hand over.",
            player_name(player)
        );
    }
    show_fleet(game.dimensions(), game.fleet_of(player));

    let cmd = input.read_input_lower("> ", |line| match line {
        "?" | "help" => Some(Command::Help),
        "randomize" | "random" | "rand" => Some(Command::Randomize),
        "done" | "start" => Some(Command::Done),
        other => match parse_coordinate(other) {
            Some(coord) => Some(Command::Place(coord)),
            None => {
                println!("Unrecognized command \"{}\". Use '?' for help.", other);
                None
            }
        },
    })?;

    match cmd {
        Command::Place(coord) => match game.place_ship(player, coord) {
            Ok(PlacementOutcome::Placed) => {}
            Ok(PlacementOutcome::FleetFull) => announce_handover(game),
            Err(err) => println!("{}", err),
        },
        Command::Randomize => randomize_placements(game, player, rng),
        Command::Done => {
            if game.fleet_of(player).ships().len() >= game.max_ships() {
                // The action past the cap is what advances the phase.
                match game.place_ship(player, Coordinate::new(0, 0)) {
                    Ok(PlacementOutcome::FleetFull) => announce_handover(game),
                    // Guarded by the length check above.
                    _ => unreachable!(),
                }
            } else {
                println!("You must place all your ships first!");
            }
        }
        Command::Help => {
            println!(
                "Available commands:
    <x>,<y>      place a ship with its origin cell at the given coordinate.
                 Length and direction are fixed by the match rules.
    randomize    place the remaining ships at random.
    done         once all ships are placed, hand the screen to the next player.",
            );
        }
    }
    Ok(())
}

/// Handle one command while it is `player`'s turn to shoot.
fn run_turn(
    game: &mut Match,
    player: Player,
    input: &mut InputReader<impl BufRead>,
) -> io::Result<()> {
    enum Command {
        Fire(Coordinate),
        Help,
    }

    let opponent = player.opponent();
    println!();
    println!(
        "{}'s turn. Fire at {}'s waters.",
        player_name(player),
        player_name(opponent)
    );
    show_fleet(game.dimensions(), game.fleet_of(opponent));

    let cmd = input.read_input_lower("> ", |line| match line {
        "?" | "help" => Some(Command::Help),
        other => match parse_coordinate(other) {
            Some(coord) => Some(Command::Fire(coord)),
            None => {
                println!("Unrecognized command \"{}\". Use '?' for help.", other);
                None
            }
        },
    })?;

    match cmd {
        Command::Fire(coord) => match game.attack(player, coord) {
            Ok(ShotOutcome::Miss) => println!("Splash. Open water at {}.", coord),
            Ok(ShotOutcome::Hit) => println!("Hit at {}!", coord),
            Ok(ShotOutcome::Victory) => println!("Hit at {} — the enemy fleet is gone!", coord),
            Err(err) => println!("{}", err),
        },
        Command::Help => {
            println!(
                "Available commands:
    <x>,<y>      fire at the given cell of the opponent's board.",
            );
        }
    }
    Ok(())
}

/// Fill the acting player's remaining ship slots at random positions.
fn randomize_placements(game: &mut Match, player: Player, rng: &mut impl Rng) {
    let dim = game.dimensions();
    let range = Uniform::new(
        Coordinate::new(0, 0),
        Coordinate::new(dim.width(), dim.height()),
    );
    let mut attempts = 0;
    while game.fleet_of(player).ships().len() < game.max_ships() {
        attempts += 1;
        if attempts > 10_000 {
            println!("Could not fit the remaining ships; place them by hand.");
            return;
        }
        let origin = rng.sample(&range);
        let _ = game.place_ship(player, origin);
    }
}

/// Report where the overflow action landed the match.
fn announce_handover(game: &Match) {
    match game.phase() {
        Phase::Placing(player) => {
            println!("Fleet complete. {}, you're up.", player_name(player))
        }
        Phase::Turn(player) => {
            println!("Both fleets are placed. {}, take the first shot.", player_name(player))
        }
        _ => {}
    }
}

/// Print one player's board. Cells draw purely from engine state: visible
/// ship cells as hull, hidden cells as open sea, destroyed cells as wrecks,
/// and logged water shots over the sea.
fn show_fleet(dim: Dimensions, fleet: &Fleet) {
    print!("   ");
    for x in 0..dim.width() {
        print!("{:^3}", x);
    }
    println!();
    for (y, row) in dim.iter_coordinates().enumerate() {
        print!("{:>2} ", y);
        for coord in row {
            let glyph = match fleet.cell_state(coord) {
                Some(CellState::Visible) => '#',
                Some(CellState::Destroyed) => 'X',
                Some(CellState::Hidden) => '~',
                None if fleet.water_shots().contains(&coord) => 'o',
                None => '~',
            };
            print!("{:^3}", glyph);
        }
        println!();
    }
}

fn player_name(player: Player) -> &'static str {
    match player {
        Player::P1 => "Player 1",
        Player::P2 => "Player 2",
    }
}

/// Parse a coordinate command into a [`Coordinate`].
fn parse_coordinate(line: &str) -> Option<Coordinate> {
    let captures = COORD.captures(line)?;
    let x = captures.name("x").unwrap().as_str().parse().ok()?;
    let y = captures.name("y").unwrap().as_str().parse().ok()?;
    Some(Coordinate::new(x, y))
}

/// Read a numeric argument with a default, exiting on garbage input.
fn arg_usize(matches: &ArgMatches, name: &str, default: usize) -> usize {
    match matches.value_of(name) {
        Some(value) => match value.parse() {
            Ok(parsed) => parsed,
            Err(_) => fail(&format!("{} must be a number, got \"{}\"", name, value)),
        },
        None => default,
    }
}

fn fail(message: &str) -> ! {
    eprintln!("error: {}", message);
    process::exit(2);
}

/// Helper to read input from the players.
struct InputReader<B> {
    read: B,
    buf: String,
}

impl<B: BufRead> InputReader<B> {
    fn new(read: B) -> Self {
        Self {
            read,
            buf: String::new(),
        }
    }

    /// Repeatedly tries to read input until the checker returns `Some`.
    /// Converts to ascii lower before running the checker.
    fn read_input_lower<F, T>(&mut self, prompt: &str, mut checker: F) -> io::Result<T>
    where
        F: FnMut(&str) -> Option<T>,
    {
        loop {
            print!("{} ", prompt);
            io::stdout().flush()?;
            self.buf.clear();
            if self.read.read_line(&mut self.buf)? == 0 {
                println!();
                process::exit(0);
            }
            self.buf.make_ascii_lowercase();
            if let Some(val) = checker(self.buf.trim()) {
                return Ok(val);
            }
        }
    }
}
