use anyhow::{Context, Result};
use chamba_match::assistant::Sender;
use chamba_match::filter::{CriteriaField, ListingBoard, ListingFields};
use chamba_match::models::{Coordinate, Job, ListingKind, Service};
use chamba_match::sources::{JsonFileSource, RestListingSource};
use chamba_match::{AppConfig, Assistant};
use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::PathBuf;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "chamba-match", about = "Filter marketplace listings and talk to the support assistant")]
struct Cli {
    /// JSON config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Fetch a listing collection once and print the filtered result as JSON
    Filter(FilterArgs),
    /// Chat with the assistant over stdin (/close, /open, /quit)
    Chat,
}

#[derive(Clone, Copy, ValueEnum)]
enum KindArg {
    Jobs,
    Services,
}

impl From<KindArg> for ListingKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Jobs => ListingKind::Jobs,
            KindArg::Services => ListingKind::Services,
        }
    }
}

#[derive(Args)]
struct FilterArgs {
    #[arg(long, value_enum)]
    kind: KindArg,
    /// Read listings from a saved JSON array instead of the API
    #[arg(long, conflicts_with = "api")]
    file: Option<PathBuf>,
    /// API base URL (overrides config)
    #[arg(long)]
    api: Option<String>,
    /// Job title or service type contains
    #[arg(long)]
    title: Option<String>,
    #[arg(long)]
    company: Option<String>,
    /// Salary or cost range, e.g. 51-100
    #[arg(long)]
    range: Option<String>,
    /// available | unavailable
    #[arg(long)]
    status: Option<String>,
    /// LAT,LNG to search around
    #[arg(long, value_parser = parse_coordinate, allow_hyphen_values = true)]
    near: Option<Coordinate>,
    /// Reject malformed ranges instead of returning no results
    #[arg(long)]
    strict: bool,
    /// Write the result here instead of stdout
    #[arg(long)]
    output: Option<PathBuf>,
}

fn parse_coordinate(raw: &str) -> Result<Coordinate, String> {
    let (lat, lng) = raw
        .split_once(',')
        .ok_or_else(|| format!("expected LAT,LNG, got '{raw}'"))?;
    let lat: f64 = lat.trim().parse().map_err(|e| format!("bad latitude: {e}"))?;
    let lng: f64 = lng.trim().parse().map_err(|e| format!("bad longitude: {e}"))?;
    Ok(Coordinate::new(lat, lng))
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => AppConfig::from_file(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => AppConfig::default(),
    }
    .with_env_overrides();

    match cli.command {
        Command::Filter(args) => match args.kind {
            KindArg::Jobs => run_filter::<Job>(&args, &config).await,
            KindArg::Services => run_filter::<Service>(&args, &config).await,
        },
        Command::Chat => run_chat(&config).await,
    }
}

async fn run_filter<T>(args: &FilterArgs, config: &AppConfig) -> Result<()>
where
    T: ListingFields + Clone + Serialize + DeserializeOwned + Send + Sync + 'static,
{
    let kind = ListingKind::from(args.kind);

    let board = match &args.file {
        Some(path) => ListingBoard::load(&JsonFileSource::<T>::new(path)).await,
        None => {
            let base = args.api.as_deref().unwrap_or(&config.api_base_url);
            let source = RestListingSource::<T>::new(base, kind).context("Failed to create HTTP client")?;
            ListingBoard::load(&source).await
        }
    };
    let mut board = board.with_default_centre(config.default_location);

    let text_fields = [
        (CriteriaField::Title, &args.title),
        (CriteriaField::Category, &args.company),
        (CriteriaField::Range, &args.range),
        (CriteriaField::Status, &args.status),
    ];
    for (field, value) in text_fields {
        if let Some(value) = value {
            board.update(field, value.as_str());
        }
    }
    if let Some(near) = args.near {
        board.select_location(near.into());
    }

    if args.strict {
        board.criteria().validate().context("Invalid filter criteria")?;
    } else if let Err(e) = board.criteria().validate() {
        warn!("{} (no listing can match)", e);
    }

    info!("✅ {} of {} {} match", board.results().len(), board.listings().len(), kind);

    let json = serde_json::to_string_pretty(board.results())?;
    match &args.output {
        Some(path) => {
            tokio::fs::write(path, json).await?;
            info!("💾 Saved filtered {} to {}", kind, path.display());
        }
        None => println!("{json}"),
    }

    Ok(())
}

async fn run_chat(config: &AppConfig) -> Result<()> {
    let mut assistant = Assistant::from_config(config);
    assistant.open();
    print_new_messages(&assistant, 0);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let seen = assistant.transcript().len();
        match line.trim() {
            "/quit" => break,
            "/close" => {
                assistant.close();
                println!("(chat closed)");
            }
            "/open" => {
                assistant.open();
                print_new_messages(&assistant, seen);
            }
            text => match assistant.submit_user_message(text) {
                Ok(_) => print_new_messages(&assistant, seen),
                Err(e) => println!("({e}; type /open)"),
            },
        }
    }

    Ok(())
}

fn print_new_messages(assistant: &Assistant, from: usize) {
    for message in assistant.transcript().iter().skip(from) {
        if message.sender == Sender::Bot {
            println!("{}: {}", assistant.bot_name(), message.text);
        }
    }
}
