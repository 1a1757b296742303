//! Piece Supply
//!
//! Console simulator of a falling-block game's next-piece queue and reserve
//! stack. Each turn shows the queue and the reserve, then lets the player
//! pick one transfer from a numbered menu until they quit.

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use rand::{rngs::SmallRng, SeedableRng};
use tracing::info;
use tracing_subscriber::EnvFilter;

use piece_supply::{error::SupplyError, Level, PieceSupply, SupplyConfig};

/// Simulates the next-piece queue and reserve of a falling-block puzzle game.
#[derive(Parser)]
#[command(name = "piece-supply")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Preset capacities and menu.
    #[arg(long, value_enum, default_value_t = LevelArg::Master)]
    level: LevelArg,

    /// Override the preset queue capacity.
    #[arg(long)]
    queue_capacity: Option<usize>,

    /// Override the preset reserve capacity.
    #[arg(long)]
    stack_capacity: Option<usize>,

    /// Override how many pieces the queue starts with.
    #[arg(long)]
    initial_fill: Option<usize>,

    /// Piece kinds, one character each.
    #[arg(long)]
    alphabet: Option<String>,

    /// Seed for reproducible piece kinds.
    #[arg(long)]
    seed: Option<u64>,
}

#[derive(Clone, Copy, ValueEnum)]
enum LevelArg {
    Novice,
    Adventurer,
    Master,
}

impl From<LevelArg> for Level {
    fn from(arg: LevelArg) -> Self {
        match arg {
            LevelArg::Novice => Level::Novice,
            LevelArg::Adventurer => Level::Adventurer,
            LevelArg::Master => Level::Master,
        }
    }
}

impl Cli {
    fn config(&self, level: Level) -> SupplyConfig {
        let mut config = level.config();

        if let Some(queue_capacity) = self.queue_capacity {
            config.queue_capacity = queue_capacity;
        }
        if let Some(stack_capacity) = self.stack_capacity {
            config.stack_capacity = stack_capacity;
        }
        if let Some(initial_fill) = self.initial_fill {
            config.initial_fill = initial_fill;
        }
        if let Some(alphabet) = &self.alphabet {
            config.alphabet = alphabet.chars().collect();
        }

        config
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Action {
    Play,
    Insert,
    Reserve,
    UseReserved,
    SwapFrontTop,
    SwapTriple,
}

impl Action {
    fn for_level(level: Level) -> &'static [Action] {
        match level {
            Level::Novice => &[Action::Play, Action::Insert],
            Level::Adventurer => &[Action::Play, Action::Reserve, Action::UseReserved],
            Level::Master => &[
                Action::Play,
                Action::Reserve,
                Action::UseReserved,
                Action::SwapFrontTop,
                Action::SwapTriple,
            ],
        }
    }

    fn label(self) -> &'static str {
        match self {
            Action::Play => "Play the front piece",
            Action::Insert => "Insert a new piece",
            Action::Reserve => "Move the front piece to the reserve",
            Action::UseReserved => "Use the top reserved piece",
            Action::SwapFrontTop => "Swap the front piece with the top reserved piece",
            Action::SwapTriple => "Swap the first 3 queued pieces with the 3 reserved pieces",
        }
    }

    /// Runs the action and describes what happened.
    fn perform(self, supply: &mut PieceSupply<SmallRng>) -> Result<String, SupplyError> {
        Ok(match self {
            Action::Play => format!("Played {}", supply.play()?),
            Action::Insert => format!("Inserted {}", supply.insert()?),
            Action::Reserve => format!("Moved {} to the reserve", supply.reserve()?),
            Action::UseReserved => format!("Used reserved {}", supply.use_reserved()?),
            Action::SwapFrontTop => {
                supply.swap_front_top()?;
                "Swapped the front piece with the top of the reserve".to_string()
            }
            Action::SwapTriple => {
                supply.swap_triple()?;
                "Swapped the first 3 queued pieces with the 3 reserved pieces".to_string()
            }
        })
    }
}

#[derive(Debug, PartialEq, Eq)]
enum Selection {
    Quit,
    Action(Action),
}

fn parse_selection(line: &str, actions: &[Action]) -> Option<Selection> {
    let choice: usize = line.trim().parse().ok()?;
    if choice == 0 {
        return Some(Selection::Quit);
    }

    actions.get(choice - 1).copied().map(Selection::Action)
}

fn print_menu(out: &mut impl Write, actions: &[Action]) -> io::Result<()> {
    writeln!(out, "\nOptions:")?;
    for (i, action) in actions.iter().enumerate() {
        writeln!(out, "{} - {}", i + 1, action.label())?;
    }
    writeln!(out, "0 - Quit")?;
    write!(out, "Choice: ")?;
    out.flush()
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let level = Level::from(cli.level);
    let config = cli.config(level);

    let rng = match cli.seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_entropy(),
    };
    let mut supply =
        PieceSupply::new(config, rng).context("invalid piece supply configuration")?;
    let actions = Action::for_level(level);

    info!(%level, seed = ?cli.seed, "starting simulation");

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut out = io::stdout().lock();

    writeln!(out, "===== Piece Supply: {level} level =====")?;

    loop {
        writeln!(out, "\n=== CURRENT STATE ===\n{}", supply.snapshot())?;
        print_menu(&mut out, actions)?;

        let Some(line) = lines.next() else {
            break;
        };
        let line = line.context("failed to read menu selection")?;

        match parse_selection(&line, actions) {
            Some(Selection::Quit) => break,
            Some(Selection::Action(action)) => match action.perform(&mut supply) {
                Ok(outcome) => writeln!(out, "\n{outcome}")?,
                Err(err) => writeln!(out, "\n[ERROR] {err}")?,
            },
            None => writeln!(out, "\nInvalid option. Try again.")?,
        }
    }

    writeln!(out, "\nEnding the {level} simulation. GG!")?;
    info!(drawn = supply.next_id(), "simulation finished");

    Ok(())
}

#[cfg(test)]
mod tests {
    use piece_supply::Level;

    use crate::{parse_selection, Action, Selection};

    #[test]
    fn parses_menu_numbers() {
        let actions = Action::for_level(Level::Master);

        assert_eq!(parse_selection("0", actions), Some(Selection::Quit));
        assert_eq!(
            parse_selection(" 1\n", actions),
            Some(Selection::Action(Action::Play))
        );
        assert_eq!(
            parse_selection("5", actions),
            Some(Selection::Action(Action::SwapTriple))
        );
        assert_eq!(parse_selection("6", actions), None);
        assert_eq!(parse_selection("two", actions), None);
        assert_eq!(parse_selection("-1", actions), None);
    }

    #[test]
    fn novice_menu_offers_insert() {
        let actions = Action::for_level(Level::Novice);

        assert_eq!(
            parse_selection("2", actions),
            Some(Selection::Action(Action::Insert))
        );
        assert_eq!(parse_selection("3", actions), None);
    }
}
