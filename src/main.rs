#![forbid(unsafe_code)]

mod config;
mod constants;
mod content;
mod gui;
mod view;

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, Level as TraceLevel, Subscriber};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::fmt::{self, MakeWriter};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{reload, Registry};

use config::Settings;
use content::Content;

/// Single-page developer portfolio rendered as a native window
#[derive(Debug, Parser)]
#[command(name = "folio-view", version, about)]
struct Args {
    /// Content dataset (JSON) to render instead of the built-in one
    #[arg(long, value_name = "FILE")]
    content: Option<PathBuf>,

    /// Settings file to use instead of the one in the config directory
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Print the effective content dataset as JSON and exit
    #[arg(long)]
    print_content: bool,

    /// Load and validate settings and content, then exit
    #[arg(long)]
    check: bool,
}

fn parse_log_level(level: &str) -> TraceLevel {
    match level.to_lowercase().as_str() {
        "trace" => TraceLevel::TRACE,
        "debug" => TraceLevel::DEBUG,
        "warn" => TraceLevel::WARN,
        "error" => TraceLevel::ERROR,
        _ => TraceLevel::INFO,
    }
}

/// Handle for changing the log level once the subscriber is installed
type LevelHandle = reload::Handle<LevelFilter, Registry>;

fn build_subscriber<W>(level: TraceLevel, make_writer: W) -> (impl Subscriber + Send + Sync + 'static, LevelHandle)
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let (filter, handle) = reload::Layer::new(LevelFilter::from_level(level));
    let subscriber = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(make_writer));
    (subscriber, handle)
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Logging goes up before anything else so settings loading is visible.
    // LOG_LEVEL wins over the configured level.
    let env_level = std::env::var("LOG_LEVEL").ok().map(|level| parse_log_level(&level));
    let (subscriber, level_handle) = build_subscriber(env_level.unwrap_or(TraceLevel::INFO), std::io::stdout);
    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to install tracing subscriber")?;

    let settings = match &args.config {
        Some(path) => Settings::load_from(path)?,
        None => Settings::load()?,
    };

    if env_level.is_none() {
        let level = parse_log_level(&settings.log_level);
        level_handle
            .reload(LevelFilter::from_level(level))
            .context("Failed to apply configured log level")?;
    }

    let content_path = args.content.as_deref().or(settings.content_path.as_deref());
    let content = Content::load_or_builtin(content_path)?;

    if args.print_content {
        let json = serde_json::to_string_pretty(&content)
            .context("Failed to serialize content dataset")?;
        println!("{json}");
        return Ok(());
    }

    if args.check {
        println!(
            "ok: {} projects, {} articles, {} skill categories",
            content.projects.len(),
            content.articles.len(),
            content.skills.len()
        );
        return Ok(());
    }

    info!(
        profile = %content.profile.name,
        projects = content.projects.len(),
        articles = content.articles.len(),
        "Starting page"
    );

    // Contact submissions run here; the window owns the main thread
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(1)
        .thread_name("folio-submit")
        .enable_time()
        .build()
        .context("Failed to start async runtime")?;

    gui::run_gui(Arc::new(content), &settings, runtime.handle().clone())
}
