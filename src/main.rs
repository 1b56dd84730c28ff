//! Word Scramble entry point
//!
//! A line-based terminal driver: reads commands and answers from stdin,
//! feeds wall-clock ticks to the engine, and prints the events it emits.

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::thread;
use std::time::Instant;

use clap::Parser;
use rand::Rng;

use word_scramble::sim::{
    GameEvent, GamePhase, PlayerInput, RoundEngine, SharedWordBank, WordBank, WordSupply, apply,
    lock_bank,
};
use word_scramble::{Difficulty, GameError, GameResult, Settings};

#[derive(Parser, Debug)]
#[command(name = "word-scramble", version, about = "Unscramble words against the clock")]
struct Cli {
    /// Word tier: easy, medium or hard
    #[arg(long)]
    difficulty: Option<Difficulty>,
    /// Play without the clock or speed bonus
    #[arg(long)]
    no_timer: bool,
    /// No bell on correct answers
    #[arg(long)]
    mute: bool,
    /// Seed for a reproducible game
    #[arg(long)]
    seed: Option<u64>,
    /// JSON word list ({"easy": [...], "medium": [...], "hard": [...]})
    #[arg(long)]
    words: Option<PathBuf>,
    /// JSON settings file
    #[arg(long)]
    config: Option<PathBuf>,
}

const HELP: &str = "\
Type the unscrambled word and press Enter.
  ?              reveal a letter; type the rest after it
  :new           start a new game
  :end           end the game
  :easy | :medium | :hard   difficulty for the next game
  :timer on|off  toggle the clock for the next game
  :quit          leave";

enum Command {
    Input(PlayerInput),
    Help,
    Quit,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> GameResult<()> {
    let settings = resolve_settings(&cli)?;
    let seed = settings.seed.unwrap_or_else(|| rand::rng().random());
    log::info!("Word Scramble starting with seed {seed}");

    let bank = WordBank::new().into_shared();
    if let Some(path) = settings.word_list.clone() {
        spawn_word_loader(bank.clone(), path);
    }

    let mut engine = RoundEngine::from_settings(bank, &settings, seed);
    let mut game_started = Instant::now();

    println!("{HELP}\n");
    dispatch(&mut engine, &PlayerInput::StartGame, settings.sound_enabled);
    print_status(&engine);

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        engine.on_tick(game_started.elapsed().as_secs());

        match parse_line(&line) {
            Command::Quit => break,
            Command::Help => println!("{HELP}"),
            Command::Input(input) => {
                if input == PlayerInput::StartGame {
                    game_started = Instant::now();
                }
                dispatch(&mut engine, &input, settings.sound_enabled);
            }
        }
        print_status(&engine);
    }

    if engine.phase() == GamePhase::InRound {
        dispatch(&mut engine, &PlayerInput::EndGame, settings.sound_enabled);
    }
    Ok(())
}

/// Settings file first, then command-line overrides
fn resolve_settings(cli: &Cli) -> GameResult<Settings> {
    let mut settings = match &cli.config {
        Some(path) => Settings::load_from(path)?,
        None => Settings::default(),
    };
    if let Some(difficulty) = cli.difficulty {
        settings.difficulty = difficulty;
    }
    if cli.no_timer {
        settings.timer_enabled = false;
    }
    if cli.mute {
        settings.sound_enabled = false;
    }
    if cli.seed.is_some() {
        settings.seed = cli.seed;
    }
    if cli.words.is_some() {
        settings.word_list = cli.words.clone();
    }
    Ok(settings)
}

/// Merge a word file into the bank without holding up the game
fn spawn_word_loader(bank: SharedWordBank, path: PathBuf) {
    thread::spawn(move || match load_words(&path) {
        Ok(supply) => {
            let added = lock_bank(&bank).merge(&supply);
            log::info!("Background load added {added} words");
        }
        Err(err) => log::warn!(
            "Could not load words from {}: {err}; using built-in lists",
            path.display()
        ),
    });
}

fn load_words(path: &Path) -> GameResult<WordSupply> {
    let supply = WordSupply::load(path)?;
    if supply.is_empty() {
        return Err(GameError::Config(format!("{} has no words", path.display())));
    }
    Ok(supply)
}

fn parse_line(line: &str) -> Command {
    let line = line.trim();
    let input = match line {
        "?" | ":hint" => PlayerInput::RequestHint,
        ":new" => PlayerInput::StartGame,
        ":end" => PlayerInput::EndGame,
        ":help" => return Command::Help,
        ":quit" | ":q" => return Command::Quit,
        ":timer on" => PlayerInput::SetTimerEnabled(true),
        ":timer off" => PlayerInput::SetTimerEnabled(false),
        _ => match line.strip_prefix(':').and_then(Difficulty::parse) {
            Some(difficulty) => PlayerInput::SetDifficulty(difficulty),
            None => PlayerInput::Enter(line.to_string()),
        },
    };
    Command::Input(input)
}

fn dispatch(engine: &mut RoundEngine, input: &PlayerInput, sound: bool) {
    match apply(engine, input) {
        // Reported through events
        Ok(()) | Err(GameError::MalformedAnswer | GameError::WordSupplyExhausted(_)) => {}
        Err(err) => println!("{err}"),
    }
    for event in engine.take_events() {
        render(&event, sound);
    }
    if let PlayerInput::SetDifficulty(difficulty) = input {
        println!("Difficulty set to {difficulty} (next game)");
    }
}

fn render(event: &GameEvent, sound: bool) {
    match event {
        GameEvent::RoundStarted {
            scrambled,
            difficulty,
        } => println!("\n[{difficulty}]  {scrambled}"),
        GameEvent::LoadFailed { .. } => {
            println!("Error loading word. Supply a word list and try :new")
        }
        GameEvent::AnswerAccepted { points, .. } => {
            let bell = if sound { "\x07" } else { "" };
            println!("Correct! +{points} points{bell}");
        }
        GameEvent::AnswerRejected { streak_reset: true } => println!("Incorrect! Try again."),
        GameEvent::AnswerRejected {
            streak_reset: false,
        } => println!("Please enter an answer!"),
        GameEvent::HintRevealed { masked } => println!("Hint: {masked}"),
        GameEvent::GameEnded(summary) => {
            println!("\nGame over!");
            println!("  Final score:  {}", summary.final_score);
            println!("  Words solved: {}", summary.words_solved);
            println!("  Best streak:  {}", summary.best_streak);
            println!("  Time played:  {}", summary.time_played());
            println!("Type :new to play again or :quit to leave.");
        }
    }
}

fn print_status(engine: &RoundEngine) {
    if engine.phase() != GamePhase::InRound {
        return;
    }
    let score = engine.score();
    print!(
        "score {}  streak {}  time {}  > {}",
        score.score,
        score.streak,
        engine.timer().display(),
        engine.answer()
    );
    // Prompt only; a failed flush just delays it
    let _ = io::stdout().flush();
}
