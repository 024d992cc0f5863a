use anyhow::Context;
use clap::Parser;
use nexora::headless::{OutputFormat, Printer};
use nexora_core::{config::Config, ArticleStore, DisplayMode, ViewController};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "nexora", about = "Nexora — browse tech & AI articles in the terminal")]
struct Cli {
    /// Write debug logs to /tmp/nexora-debug.log (tail -f to inspect).
    #[arg(long)]
    debug: bool,

    /// Initial display mode, overriding the config and the terminal hint.
    #[arg(long, value_name = "light|dark")]
    mode: Option<DisplayMode>,

    /// Load articles from this TOML file instead of the built-in set.
    #[arg(long, value_name = "PATH")]
    articles: Option<PathBuf>,

    /// Print the (filtered) article list and exit.
    #[arg(long, conflicts_with = "show")]
    list: bool,

    /// Search text: the initial query in the TUI, the filter with --list.
    #[arg(long, default_value = "")]
    query: String,

    /// Print one article by id and exit.
    #[arg(long, value_name = "ID")]
    show: Option<String>,

    /// Output format for --list and --show.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.debug {
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open("/tmp/nexora-debug.log")?;
        tracing_subscriber::fmt()
            .with_writer(std::sync::Mutex::new(file))
            .with_ansi(false)
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
            )
            .init();
        tracing::info!("nexora debug log started — tail -f /tmp/nexora-debug.log");
    }

    let config = Config::load().unwrap_or_else(|err| {
        tracing::warn!(error = %err, "config failed to load, using defaults");
        Config::defaults()
    });

    let store = match cli.articles.as_ref().or(config.content.articles.as_ref()) {
        Some(path) => ArticleStore::load(path)
            .with_context(|| format!("loading articles from {}", path.display()))?,
        None => ArticleStore::builtin(),
    };
    tracing::debug!(articles = store.len(), "article store ready");

    let printer = Printer {
        date_format: &config.ui.date_format,
        format: cli.format,
    };
    let mut stdout = std::io::stdout().lock();
    if let Some(id) = cli.show.as_deref() {
        return printer.show(store, id, &mut stdout);
    }
    if cli.list {
        return printer.list(store, &cli.query, &mut stdout);
    }
    drop(stdout);

    let colorfgbg = std::env::var("COLORFGBG").ok();
    let mode = cli
        .mode
        .unwrap_or_else(|| config.ui.mode.resolve(colorfgbg.as_deref()));

    let mut controller = ViewController::new(store);
    controller.set_query(cli.query);
    nexora_tui::run(controller, mode, &config)
}
