//! # Delver Main Entry Point
//!
//! Sets up logging and configuration, then runs a line-oriented game loop on
//! stdin/stdout.

use clap::Parser;
use delver::{
    parse_command, DelverResult, ExitReason, GameConfig, GameState, InputHandler, PlayerInput,
    SaveFile, StatusPanel, TextDisplay, TurnOutcome,
};
use log::{error, info, warn};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

/// Command line arguments for Delver.
#[derive(Parser, Debug)]
#[command(name = "delver")]
#[command(about = "A turn-based roguelike dungeon crawler")]
#[command(version)]
struct Args {
    /// Random seed for a new game
    #[arg(short, long)]
    seed: Option<u64>,

    /// JSON configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Save file location (overrides the configuration)
    #[arg(long)]
    save: Option<PathBuf>,

    /// Continue the saved game instead of starting a new one
    #[arg(long = "continue")]
    continue_game: bool,

    /// Emit ANSI colours
    #[arg(long)]
    color: bool,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() -> DelverResult<()> {
    let args = Args::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&args.log_level))
        .init();
    info!("Starting Delver v{}", delver::VERSION);

    let mut config = match &args.config {
        Some(path) => GameConfig::load_from_file(path)?,
        None => GameConfig::default(),
    };
    if let Some(save) = &args.save {
        config.save_path = save.clone();
    }
    let save_file = SaveFile::new(config.save_path.clone());

    let mut game = start_game(&args, &config, &save_file)?;
    let result = run_game(&mut game, &args);

    let reason = match &result {
        Ok(reason) => *reason,
        Err(err) => {
            error!("Game loop failed: {err}");
            ExitReason::Abnormal
        }
    };
    save_file.finish(&game, reason)?;
    result.map(|_| ())
}

fn start_game(args: &Args, config: &GameConfig, save_file: &SaveFile) -> DelverResult<GameState> {
    if args.continue_game {
        if save_file.exists() {
            return save_file.load();
        }
        warn!("No save at {}; starting a new game", save_file.path().display());
    }
    let seed = args.seed.unwrap_or_else(rand::random);
    GameState::new(config, seed)
}

/// Runs until the player quits or input ends.
fn run_game(game: &mut GameState, args: &Args) -> DelverResult<ExitReason> {
    let mut display = TextDisplay::new(80, 43).with_color(args.color);
    let panel = StatusPanel::default();
    let handler = InputHandler::new();
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    print!("{}", display.render_game(game));
    stdout.flush()?;

    for line in stdin.lock().lines() {
        let line = line?;
        let Some(input) = parse_command(&line) else {
            println!("Unknown command. Type ? for help.");
            continue;
        };

        match input {
            PlayerInput::Quit => {
                return Ok(if game.is_game_over() {
                    ExitReason::QuitWithoutSaving
                } else {
                    ExitReason::UserQuit
                });
            }
            PlayerInput::Help => print_lines(panel.help_lines()),
            PlayerInput::ShowInventory => print_lines(panel.inventory_lines(game)),
            PlayerInput::Character => print_lines(panel.character_lines(game)),
            PlayerInput::Look(pos) => print_lines(panel.look_lines(game, pos)),
            PlayerInput::ViewHistory => {
                print_lines(game.message_log.iter().map(|m| m.full_text()));
            }
            PlayerInput::LevelUp(choice) => match game.choose_level_up(choice) {
                Ok(()) => print!("{}", display.render_game(game)),
                Err(err) => println!("{err}"),
            },
            _ => match handler.input_to_action(input, game) {
                Ok(Some(action)) => {
                    let outcome = game.handle_player_action(action)?;
                    if outcome == TurnOutcome::GameOver {
                        info!("Player died after {} turns", game.turn_number);
                    }
                    print!("{}", display.render_game(game));
                }
                Ok(None) => {}
                Err(err) => println!("{err}"),
            },
        }
        stdout.flush()?;
    }

    Ok(if game.is_game_over() {
        ExitReason::QuitWithoutSaving
    } else {
        ExitReason::UserQuit
    })
}

fn print_lines<S: AsRef<str>>(lines: impl IntoIterator<Item = S>) {
    for line in lines {
        println!("{}", line.as_ref());
    }
}
