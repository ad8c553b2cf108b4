use clap::{Parser, Subcommand};
use color_eyre::eyre::{eyre, Result, WrapErr};
use env_logger::TimestampPrecision;
use layercube::{Color, Cube, Puzzle, PuzzleConfig, SectionTurn, SolverConfig, SCRAMBLE_TURNS};
use log::{info, warn, LevelFilter};
use owo_colors::OwoColorize;
use rand::Rng;

#[derive(Parser)]
#[clap(name = "layercube", version, about = "Scramble and solve a 3x3x3 cube layer by layer")]
struct Cli {
    /// Increase logging verbosity (can be repeated)
    #[clap(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print a random scramble and the cube it produces
    Scramble {
        #[clap(long)]
        seed: Option<u64>,
        #[clap(long, default_value_t = SCRAMBLE_TURNS)]
        turns: usize,
    },
    /// Scramble a cube and solve it
    Solve {
        #[clap(long)]
        seed: Option<u64>,
        /// Scramble in standard notation to use instead of a random one
        #[clap(long)]
        scramble: Option<String>,
        #[clap(long, default_value_t = SolverConfig::default().max_ticks)]
        max_ticks: usize,
        /// Print the cube after every turn
        #[clap(long)]
        show_steps: bool,
    },
    /// Solve many seeded scrambles and report how many ticks they took
    Bench {
        #[clap(long, default_value_t = 100)]
        trials: u64,
        #[clap(long, default_value_t = 0)]
        first_seed: u64,
    },
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(match cli.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        })
        .format_timestamp(Some(TimestampPrecision::Millis))
        .init();

    match cli.command {
        Command::Scramble { seed, turns } => {
            let config = PuzzleConfig {
                scramble_turns: turns,
                ..PuzzleConfig::default()
            };
            let mut puzzle = Puzzle::with_seed(config, seed_or_random(seed));
            let applied = puzzle.randomize();
            println!("{}", display_sections(&applied));
            println!();
            print!("{}", paint(puzzle.cube()));
        }
        Command::Solve {
            seed,
            scramble,
            max_ticks,
            show_steps,
        } => {
            let config = PuzzleConfig {
                solver: SolverConfig {
                    max_ticks,
                    ..SolverConfig::default()
                },
                ..PuzzleConfig::default()
            };
            let mut puzzle = Puzzle::with_seed(config, seed_or_random(seed));
            match scramble {
                Some(scramble) => puzzle
                    .apply_notation(&scramble)
                    .wrap_err("could not read the scramble")?,
                None => {
                    let applied = puzzle.randomize();
                    println!("Scramble: {}", display_sections(&applied));
                }
            }
            print!("{}", paint(puzzle.cube()));
            println!();

            let (ticks, turns) = if show_steps {
                solve_showing_steps(&mut puzzle, max_ticks)?
            } else {
                let solution = puzzle.solve()?;
                (solution.ticks, solution.turns)
            };
            println!(
                "{} in {ticks} ticks with {} turns:",
                "Solved".green(),
                turns.len()
            );
            println!("{}", display_sections(&turns));
        }
        Command::Bench { trials, first_seed } => bench(trials, first_seed),
    }

    Ok(())
}

fn seed_or_random(seed: Option<u64>) -> u64 {
    let seed = seed.unwrap_or_else(|| rand::rng().random());
    info!("using seed {seed}");
    seed
}

fn solve_showing_steps(puzzle: &mut Puzzle, max_ticks: usize) -> Result<(usize, Vec<SectionTurn>)> {
    let mut turns = vec![];
    for tick in 1..=max_ticks {
        let solved = puzzle.solve_step()?;
        if let Some(turn) = puzzle.solver().last_turn() {
            turns.push(turn);
            println!("{}. {}", turns.len(), turn.bold());
            print!("{}", paint(puzzle.cube()));
            println!();
        }
        if solved {
            return Ok((tick, turns));
        }
    }
    Err(eyre!("cube still unsolved after {max_ticks} ticks"))
}

fn bench(trials: u64, first_seed: u64) {
    let mut ticks = vec![];
    let mut failures = 0;
    for seed in first_seed..first_seed + trials {
        let mut puzzle = Puzzle::with_seed(PuzzleConfig::default(), seed);
        puzzle.randomize();
        match puzzle.solve() {
            Ok(solution) => ticks.push(solution.ticks),
            Err(e) => {
                warn!("seed {seed}: {e}");
                failures += 1;
            }
        }
    }

    let solved = ticks.len();
    println!("{solved} of {trials} scrambles solved");
    if failures > 0 {
        println!("{}", format!("{failures} failed").red());
    }
    if let (Some(min), Some(max)) = (ticks.iter().min(), ticks.iter().max()) {
        let mean = ticks.iter().sum::<usize>() as f64 / solved as f64;
        println!("ticks: min {min}, mean {mean:.1}, max {max}");
    }
}

fn display_sections(turns: &[SectionTurn]) -> String {
    turns
        .iter()
        .map(SectionTurn::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

/// The cube's net with every sticker drawn as a colored block.
fn paint(cube: &Cube) -> String {
    cube.to_string()
        .chars()
        .map(|ch| match Color::ALL.into_iter().find(|c| c.letter() == ch) {
            Some(color) => {
                let [r, g, b] = color.rgb();
                "██".truecolor(r, g, b).to_string()
            }
            None if ch == '\n' => ch.to_string(),
            None => ch.to_string().repeat(2),
        })
        .collect()
}
