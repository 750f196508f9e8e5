use anyhow::{Context, Result};
use chess_mentor::ai::{Difficulty, AI_PLAYER};
use chess_mentor::config::{settings_path, MentorSettings};
use chess_mentor::rules::{check_game_status, Board, INITIAL_PLACEMENT};
use chess_mentor::strategy::{all_tips, random_tip, tips_by_difficulty, tips_by_phase, Phase};
use chess_mentor::{get_suggestion, GameSession, Player};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Log filter used when RUST_LOG is not set
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    /// Settings file (defaults to the user config directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Print machine-readable JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Self-play: white follows hints, black is the automated opponent
    Play {
        /// Opponent strength (overrides settings)
        #[arg(short, long, value_enum)]
        difficulty: Option<Difficulty>,

        /// Stop after this many plies (overrides settings)
        #[arg(long)]
        max_plies: Option<usize>,
    },

    /// Suggest a move for white
    Hint {
        /// Board placement, rows from black's back rank down, e.g. "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR"
        #[arg(short, long, default_value = INITIAL_PLACEMENT)]
        board: String,
    },

    /// Sample the strategy tip catalog
    Tips {
        #[arg(long, value_enum, conflicts_with = "difficulty")]
        phase: Option<Phase>,

        #[arg(long, value_enum)]
        difficulty: Option<Difficulty>,

        /// Number of tips (overrides settings)
        #[arg(short, long)]
        count: Option<usize>,

        /// List the whole catalog
        #[arg(long, conflicts_with_all = ["phase", "difficulty"])]
        all: bool,
    },

    /// Update and save the settings file
    Configure {
        #[arg(long, value_enum)]
        difficulty: Option<Difficulty>,

        #[arg(long)]
        show_tips: Option<bool>,

        #[arg(long)]
        tip_count: Option<usize>,

        #[arg(long)]
        max_plies: Option<usize>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&cli.log_level))
        .context("invalid log filter")?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let settings = MentorSettings::load_or_default(cli.config.as_deref());

    match cli.command {
        Command::Play {
            difficulty,
            max_plies,
        } => play(
            difficulty.unwrap_or(settings.difficulty),
            max_plies.unwrap_or(settings.max_plies),
            settings.show_tips,
            cli.json,
        ),
        Command::Hint { board } => hint(&board, cli.json),
        Command::Tips {
            phase,
            difficulty,
            count,
            all,
        } => tips(phase, difficulty, all, count.unwrap_or(settings.tip_count), cli.json),
        Command::Configure {
            difficulty,
            show_tips,
            tip_count,
            max_plies,
        } => {
            let mut settings = settings;
            if let Some(difficulty) = difficulty {
                settings.difficulty = difficulty;
            }
            if let Some(show_tips) = show_tips {
                settings.show_tips = show_tips;
            }
            if let Some(tip_count) = tip_count {
                settings.tip_count = tip_count;
            }
            if let Some(max_plies) = max_plies {
                settings.max_plies = max_plies;
            }

            let path = cli.config.unwrap_or_else(settings_path);
            settings
                .save_to(&path)
                .with_context(|| format!("failed to save settings to {}", path.display()))?;
            println!("Saved settings to {}", path.display());
            Ok(())
        }
    }
}

fn play(difficulty: Difficulty, max_plies: usize, show_tips: bool, json: bool) -> Result<()> {
    let mut session = GameSession::new(difficulty);
    info!("[GAME] Self-play at {} for up to {} plies", difficulty, max_plies);

    while !session.is_over() && session.history().len() < max_plies {
        if session.turn() == AI_PLAYER {
            let result = session.play_ai_turn().context("automated move failed")?;
            if !json {
                println!("   ... {}  {}", result.mv, session.last_explanation().unwrap_or(""));
                if let (true, Some(tip)) = (show_tips, result.strategy) {
                    println!("       Tip: {}", tip);
                }
            }
        } else {
            let suggestion = session.hint();
            session
                .play_move(suggestion.mv)
                .with_context(|| format!("hint {} was rejected", suggestion.mv))?;
            if !json {
                println!(
                    "{:>3}. {}  {}",
                    session.history().len().div_ceil(2),
                    suggestion.mv,
                    suggestion.explanation
                );
            }
        }
    }

    if json {
        let summary = serde_json::json!({
            "difficulty": difficulty,
            "status": session.status(),
            "to_move": session.turn(),
            "board": session.board().to_placement(),
            "moves": session.history().numbered(),
        });
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!();
        println!("{}", session.board());
        println!("{} ({} to move)", session.status().message(), session.turn());
    }
    Ok(())
}

fn hint(placement: &str, json: bool) -> Result<()> {
    let board: Board = placement
        .parse()
        .with_context(|| format!("could not parse board {:?}", placement))?;
    let status = check_game_status(&board, Player::White);
    let suggestion = get_suggestion(&board);

    if json {
        let output = serde_json::json!({
            "status": status,
            "suggestion": suggestion,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!("{}", board);
    if status.is_terminal() {
        println!("{}", status.message());
        return Ok(());
    }
    println!("Suggested move: {}", suggestion.mv);
    println!("{}", suggestion.explanation);
    if let Some(tip) = suggestion.strategy_applied {
        println!("Strategy: {}", tip);
    }
    Ok(())
}

fn tips(
    phase: Option<Phase>,
    difficulty: Option<Difficulty>,
    all: bool,
    count: usize,
    json: bool,
) -> Result<()> {
    let selected = match (phase, difficulty) {
        _ if all => all_tips().to_vec(),
        (Some(phase), _) => tips_by_phase(phase, count),
        (None, Some(difficulty)) => tips_by_difficulty(difficulty, count),
        (None, None) => vec![random_tip()],
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&selected)?);
        return Ok(());
    }

    for tip in selected {
        println!("[{} / {}] {}", tip.phase, tip.difficulty, tip.name);
        println!("    {}", tip.description);
    }
    Ok(())
}
