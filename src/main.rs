mod api;
mod server;

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::api::ApiScoreRequest;
use viral_stories::config::ScoringConfig;
use viral_stories::story::{export_csv, Story, StoryStats};
use viral_stories::{format_percent, generate_hooks, ViralScorer};

#[derive(Parser)]
#[command(name = "viral-stories", about = "Viral story scorer and hook generator")]
struct Cli {
    /// Scoring config (TOML). Defaults to $VIRAL_CONFIG_PATH or config/viral.toml.
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    Score(ScoreArgs),
    Hooks(HooksArgs),
    Stats(StatsArgs),
    InitConfig(InitConfigArgs),
    Serve(ServeArgs),
}

#[derive(Args, Debug, Clone, Default)]
struct ScoreArgs {
    #[arg(long)]
    text: Option<String>,
    #[arg(long)]
    tone: Option<String>,
    /// Number of hooks to suggest (defaults to the configured count).
    #[arg(long)]
    hooks: Option<usize>,
    #[arg(long)]
    json: bool,
    /// Print the per-signal score contributions.
    #[arg(long)]
    details: bool,
}

#[derive(Args, Debug, Clone)]
struct HooksArgs {
    #[arg(long)]
    text: Option<String>,
    #[arg(long)]
    count: Option<usize>,
}

#[derive(Args, Debug, Clone)]
struct StatsArgs {
    /// JSON array of stories.
    #[arg(long)]
    input: PathBuf,
    #[arg(long)]
    csv: bool,
}

#[derive(Args, Debug, Clone)]
struct InitConfigArgs {
    #[arg(long, default_value = "config/viral.toml")]
    path: PathBuf,
    #[arg(long)]
    force: bool,
}

#[derive(Args, Debug, Clone)]
pub struct ServeArgs {
    #[arg(long, default_value = "127.0.0.1")]
    host: String,
    #[arg(long, default_value_t = 8787)]
    port: u16,
}

#[tokio::main]
async fn main() {
    load_dotenv();
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    if let Err(err) = run().await {
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Command::Score(ScoreArgs::default()));

    if let Command::InitConfig(args) = &command {
        return init_config(args);
    }

    let (config, path) = ScoringConfig::load(cli.config)?;
    if let Some(path) = path.filter(|path| path.exists()) {
        tracing::debug!(path = %path.display(), "using scoring config");
    }

    match command {
        Command::Score(args) => run_score(args, &config),
        Command::Hooks(args) => run_hooks(args, &config),
        Command::Stats(args) => run_stats(args),
        Command::Serve(args) => server::serve(args, config).await,
        Command::InitConfig(_) => Ok(()),
    }
}

fn run_score(args: ScoreArgs, config: &ScoringConfig) -> Result<()> {
    let text = read_text(args.text)?;
    let request = ApiScoreRequest {
        text: Some(text),
        tone: args.tone,
        hook_count: args.hooks,
    };
    let job = request
        .into_job(&config.hooks)
        .map_err(|err| anyhow::anyhow!(err))?;
    for warning in &job.warnings {
        tracing::warn!("{}", warning);
    }

    let scorer = ViralScorer::from_config(config);
    let breakdown = scorer.breakdown(&job.text, job.tone);
    let response = job.run(&scorer);

    if args.json {
        let payload =
            serde_json::to_string_pretty(&response).context("failed to serialize analysis")?;
        println!("{}", payload);
        return Ok(());
    }

    let analysis = &response.analysis;
    println!("Viral score: {} ({})", analysis.score, response.tier);
    println!(
        "Estimated reach: {}",
        format_percent(analysis.estimated_reach_percentage)
    );

    if args.details {
        println!("\nContributions:");
        println!("  length: {}", breakdown.length);
        println!("  viral keywords: {}", breakdown.viral_keywords);
        println!("  tone keywords: {}", breakdown.tone_keywords);
        println!("  questions/exclamations: {}", breakdown.punctuation);
        println!("  line breaks: {}", breakdown.line_breaks);
    }

    print_section("Strengths", &analysis.strengths);
    print_section("Weaknesses", &analysis.weaknesses);
    print_section("Recommendations", &analysis.recommendations);
    print_section("Hooks", &response.hooks);

    Ok(())
}

fn run_hooks(args: HooksArgs, config: &ScoringConfig) -> Result<()> {
    let text = read_text(args.text)?;
    let count = args.count.unwrap_or(config.hooks.default_count);
    for hook in generate_hooks(&text, count) {
        println!("{}", hook);
    }
    Ok(())
}

fn run_stats(args: StatsArgs) -> Result<()> {
    let data = std::fs::read_to_string(&args.input)
        .with_context(|| format!("failed to read {}", args.input.display()))?;
    let stories: Vec<Story> = serde_json::from_str(&data)
        .with_context(|| format!("failed to parse stories in {}", args.input.display()))?;

    if args.csv {
        print!("{}", export_csv(&stories));
        return Ok(());
    }

    let stats = StoryStats::from_stories(&stories);
    println!("Total stories: {}", stats.total_stories);
    println!("Published: {}", stats.published_stories);
    println!("Average viral score: {}", stats.average_viral_score);
    match stats.best_performing_story {
        Some(story) => println!("Best performer: {} ({})", story.title, story.viral_score),
        None => println!("Best performer: none"),
    }
    Ok(())
}

fn init_config(args: &InitConfigArgs) -> Result<()> {
    if args.path.exists() && !args.force {
        bail!(
            "{} already exists; pass --force to overwrite",
            args.path.display()
        );
    }
    ScoringConfig::default().write(&args.path)?;
    println!("Wrote default config to {}", args.path.display());
    Ok(())
}

fn print_section(title: &str, items: &[String]) {
    if items.is_empty() {
        return;
    }
    println!("\n{}:", title);
    for item in items {
        println!("- {}", item);
    }
}

fn read_text(arg: Option<String>) -> Result<String> {
    if let Some(text) = arg {
        if !text.trim().is_empty() {
            return Ok(text);
        }
    }

    let mut buffer = String::new();
    io::stdin()
        .read_to_string(&mut buffer)
        .context("failed reading stdin")?;
    if buffer.trim().is_empty() {
        bail!("missing story text: pass --text or pipe stdin");
    }
    Ok(buffer)
}

fn load_dotenv() {
    let _ = dotenvy::dotenv();
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    let manifest_path = Path::new(manifest_dir).join(".env");
    let _ = dotenvy::from_path(manifest_path);
}
