use std::io::{self, BufRead, Write};

use anyhow::Result;
use clap::Parser;
use memory_maze_core::{CellCount, Coord, GameConfig, MazeGame, MoveOutcome};

use intent::Intent;

mod intent;
mod render;

#[derive(Parser, Debug)]
#[command(version, about = "Two-player memory maze on a hidden grid", long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// Force a seed instead of random, resets derive their seeds from it
    #[arg(short, long)]
    seed: Option<u64>,

    /// Side of the square board
    #[arg(long, default_value_t = GameConfig::CLASSIC.size)]
    size: Coord,

    #[arg(long, default_value_t = GameConfig::CLASSIC.traps)]
    traps: CellCount,

    #[arg(long, default_value_t = GameConfig::CLASSIC.bonuses)]
    bonuses: CellCount,

    /// Trap hits before a player is eliminated
    #[arg(long, default_value_t = GameConfig::CLASSIC.elimination_threshold)]
    elimination_threshold: u8,

    /// Memory tokens each player starts with
    #[arg(long, default_value_t = GameConfig::CLASSIC.starting_tokens)]
    tokens: CellCount,

    /// Plain steps between automatic checkpoints
    #[arg(long, default_value_t = GameConfig::CLASSIC.checkpoint_interval)]
    checkpoint_interval: CellCount,

    /// Print each snapshot as a JSON line instead of a text grid
    #[arg(long)]
    json: bool,
}

impl Args {
    fn game_config(&self) -> Result<GameConfig> {
        Ok(GameConfig::new(self.size, self.traps, self.bonuses)?
            .with_elimination_threshold(self.elimination_threshold)?
            .with_starting_tokens(self.tokens)?
            .with_checkpoint_interval(self.checkpoint_interval)?)
    }
}

/// Seeds for new boards: random by default, a fixed sequence when pinned.
#[derive(Debug)]
struct Seeds {
    pinned: Option<u64>,
}

impl Seeds {
    fn next(&mut self) -> u64 {
        match &mut self.pinned {
            Some(seed) => {
                let current = *seed;
                *seed = current.wrapping_add(0x9E37_79B9_7F4A_7C15);
                current
            }
            None => rand::random(),
        }
    }
}

/// What the host loop should do after an intent.
#[derive(Debug, PartialEq)]
enum Step {
    Redraw,
    Announce(String),
    GameOver,
    Quit,
}

fn apply_intent(game: &mut MazeGame, intent: Intent, seeds: &mut Seeds) -> Step {
    if game.is_finished() && !matches!(intent, Intent::Reset | Intent::Quit) {
        return Step::GameOver;
    }

    match intent {
        Intent::Move(direction) => {
            let name = game.acting_player().name.clone();
            match game.move_player(direction) {
                MoveOutcome::Eliminated => Step::Announce(format!("{name} is eliminated!")),
                outcome => {
                    log::debug!("{} -> {:?}", name, outcome);
                    Step::Redraw
                }
            }
        }
        Intent::UseToken => {
            game.use_token();
            Step::Redraw
        }
        Intent::Reset => {
            *game = game.reset(seeds.next());
            Step::Redraw
        }
        Intent::Quit => Step::Quit,
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .init();

    let config = args.game_config()?;
    let mut seeds = Seeds { pinned: args.seed };
    let seed = seeds.next();
    log::debug!("seed: {}", seed);
    let mut game = MazeGame::generate(config, seed)?;

    let mut out = io::stdout().lock();
    render::print(&mut out, &game.snapshot(), args.json)?;

    for line in io::stdin().lock().lines() {
        let line = line?;
        let intent = match line.parse::<Intent>() {
            Ok(intent) => intent,
            Err(err) => {
                writeln!(out, "{err}")?;
                continue;
            }
        };

        match apply_intent(&mut game, intent, &mut seeds) {
            Step::Quit => break,
            Step::GameOver => {
                writeln!(out, "The game is over, press r to replay or q to quit.")?;
                continue;
            }
            Step::Announce(message) => writeln!(out, "{message}")?,
            Step::Redraw => {}
        }
        render::print(&mut out, &game.snapshot(), args.json)?;
    }

    log::debug!("Bye");
    Ok(())
}
