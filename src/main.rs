//! Terminal front end: a human plays seat A against a CPU on seat B.
//!
//! Commands are read line by line from stdin:
//! `a`/`left` and `d`/`right` move the cursor, `w`/`up` or an empty line
//! confirms, `q` quits.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use hex_territory::display;
use hex_territory::strategy::{play_turn, RandomStrategy, RolloutConfig, RolloutStrategy, Strategy};
use hex_territory::{Action, Game, GameConfig, PlayerId};

const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Seat {
    A,
    B,
}

impl From<Seat> for PlayerId {
    fn from(seat: Seat) -> Self {
        match seat {
            Seat::A => PlayerId::A,
            Seat::B => PlayerId::B,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum CpuKind {
    /// Seat B is played from the keyboard too.
    Human,
    Random,
    Rollout,
}

#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// JSON game configuration.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Seat that moves first (overrides the configuration).
    #[arg(long, value_enum)]
    first: Option<Seat>,
    /// Who controls seat B.
    #[arg(long, value_enum, default_value_t = CpuKind::Rollout)]
    cpu: CpuKind,
    #[arg(long)]
    seed: Option<u64>,
    /// Playouts per CPU decision (rollout only).
    #[arg(long)]
    iterations: Option<u32>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Command {
    Play(Action),
    Quit,
}

fn parse_command(line: &str) -> Option<Command> {
    match line.trim().to_ascii_lowercase().as_str() {
        "a" | "left" => Some(Command::Play(Action::CursorLeft)),
        "d" | "right" => Some(Command::Play(Action::CursorRight)),
        "" | "w" | "up" => Some(Command::Play(Action::Confirm)),
        "q" | "quit" => Some(Command::Quit),
        _ => None,
    }
}

fn load_config(cli: &Cli) -> Result<GameConfig, Box<dyn std::error::Error>> {
    let mut config = match &cli.config {
        Some(path) => serde_json::from_str(&std::fs::read_to_string(path)?)?,
        None => GameConfig::default(),
    };
    if let Some(first) = cli.first {
        config = config.with_first_player(first.into());
    }
    Ok(config)
}

fn build_cpu(cli: &Cli) -> Option<Box<dyn Strategy>> {
    let seed = cli.seed.unwrap_or(42);
    match cli.cpu {
        CpuKind::Human => None,
        CpuKind::Random => Some(Box::new(RandomStrategy::new(seed))),
        CpuKind::Rollout => {
            let mut config = RolloutConfig::default().with_seed(seed);
            if let Some(iterations) = cli.iterations {
                config = config.with_iterations(iterations);
            }
            Some(Box::new(RolloutStrategy::new(config)))
        }
    }
}

fn draw(out: &mut impl Write, game: &Game) -> io::Result<()> {
    write!(out, "{CLEAR_SCREEN}")?;
    writeln!(out, "{}", display::render(&game.snapshot()))?;
    out.flush()
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();
    let mut game = Game::new(load_config(&cli)?)?;
    let mut cpu = build_cpu(&cli);
    let cpu_seat = PlayerId::B;

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    let mut lines = stdin.lock().lines();

    info!(cpu = ?cli.cpu, first = %game.current_player(), "game started");
    draw(&mut out, &game)?;

    while !game.is_game_over() {
        if let Some(strategy) = cpu.as_mut().filter(|_| game.current_player() == cpu_seat) {
            play_turn(strategy.as_mut(), &mut game)?;
            draw(&mut out, &game)?;
            continue;
        }

        let Some(line) = lines.next() else {
            break;
        };
        match parse_command(&line?) {
            Some(Command::Play(action)) => {
                if let Err(e) = game.apply(action) {
                    warn!(error = %e, "action rejected");
                }
                draw(&mut out, &game)?;
            }
            Some(Command::Quit) => break,
            None => {}
        }
    }

    if let Some(result) = game.result() {
        info!(?result, "game finished");
    }
    Ok(())
}
