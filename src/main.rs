use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use usher_assist::{AssistEngine, EngineConfig, UserProfile, config, loader};

/// Usher - support assistant for event platforms
#[derive(Parser)]
#[command(name = "usher", version, about)]
struct Cli {
    /// Path to the corpus bundle (JSON)
    #[arg(short, long, env = "USHER_CORPUS")]
    corpus: Option<PathBuf>,

    /// Path to an engine config file (TOML); defaults to
    /// ~/.config/usher/config.toml when present
    #[arg(long, env = "USHER_CONFIG")]
    config: Option<PathBuf>,

    /// Path to a user profile (JSON) for personal questions
    #[arg(short, long, env = "USHER_PROFILE")]
    profile: Option<PathBuf>,

    /// Seed the greeting RNG for reproducible sessions
    #[arg(long)]
    seed: Option<u64>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Ask a single question and print the answer
    Ask {
        /// The question
        query: String,

        /// Emit the full answer value as JSON
        #[arg(long)]
        json: bool,
    },
    /// Interactive chat session
    Chat,
    /// List the sections and ids the corpus contains
    Topics,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => "info,usher_assist=info",
        1 => "info,usher_assist=debug",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .init();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("fatal: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let corpus_path = cli
        .corpus
        .or_else(default_corpus_path)
        .ok_or_else(|| anyhow::anyhow!("no corpus path; pass --corpus or set USHER_CORPUS"))?;

    let config = match &cli.config {
        Some(path) => EngineConfig::load(path)?,
        None => EngineConfig::load_default(),
    };
    config::validate(&config)?;

    let corpus = loader::load_bundle(&corpus_path)?.into_corpus()?;

    let profile = cli
        .profile
        .as_deref()
        .map(loader::load_profile)
        .transpose()?;

    let engine = match cli.seed {
        Some(seed) => AssistEngine::with_seed(corpus, config, seed),
        None => AssistEngine::with_config(corpus, config),
    };

    match cli.command {
        Command::Ask { query, json } => ask(&engine, &query, profile.as_ref(), json),
        Command::Chat => chat(&engine, profile.as_ref()).await,
        Command::Topics => {
            topics(&engine);
            Ok(())
        }
    }
}

fn ask(
    engine: &AssistEngine,
    query: &str,
    profile: Option<&UserProfile>,
    json: bool,
) -> anyhow::Result<()> {
    let answer = engine.answer(query, profile);
    if json {
        println!("{}", serde_json::to_string_pretty(&answer)?);
    } else {
        println!("{}", answer.text);
        if !answer.sources.is_empty() {
            println!("\nSources: {}", answer.sources.join(", "));
        }
    }
    Ok(())
}

async fn chat(engine: &AssistEngine, profile: Option<&UserProfile>) -> anyhow::Result<()> {
    println!("Usher is ready. Type your question, or \"exit\" to leave.\n");

    loop {
        let line: String = dialoguer::Input::new().with_prompt("you").interact_text()?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        if trimmed.eq_ignore_ascii_case("exit") || trimmed.eq_ignore_ascii_case("quit") {
            println!("Bye!");
            return Ok(());
        }

        let answer = engine.answer_after_delay(trimmed, profile).await;
        println!("\nusher › {}\n", answer.text);
        if !answer.sources.is_empty() {
            println!("        (sources: {})\n", answer.sources.join(", "));
        }
    }
}

fn topics(engine: &AssistEngine) {
    let corpus = engine.corpus();
    println!("{} documents in corpus:\n", corpus.len());
    for document in corpus.documents() {
        println!("  {:<12} {}", document.id, document.section);
    }
}

fn default_corpus_path() -> Option<PathBuf> {
    directories::BaseDirs::new().map(|d| d.config_dir().join("usher").join("corpus.json"))
}
