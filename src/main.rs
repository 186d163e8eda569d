use std::num::NonZeroUsize;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use folio::gallery::{Delay, GalleryController, NoDelay, ThreadSleep};
use folio::logging::{self, LogTarget};
use folio::model::{GalleryConfig, RepositoryRecord};
use folio::remote::{OsRandomPicker, RemoteClient};
use folio::sink::{CardSink, HtmlSink, MemorySink, TextSink};

#[derive(Parser)]
#[command(name = "folio")]
#[command(about = "Portfolio gallery of an account's repositories", long_about = None)]
struct Cli {
    /// Gallery config file (JSON)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Account whose repositories are listed
    #[arg(long, global = true)]
    account: Option<String>,

    /// API base URL (defaults to https://api.github.com)
    #[arg(long, global = true)]
    api_url: Option<String>,

    /// Cards per page
    #[arg(long, global = true)]
    page_size: Option<NonZeroUsize>,

    /// Log filter, e.g. `debug` or `folio=info`
    #[arg(long, global = true)]
    log: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List fetched repositories
    List {
        /// Emit JSON
        #[arg(long)]
        json: bool,
    },

    /// List language filter options
    Languages {
        /// Emit JSON
        #[arg(long)]
        json: bool,
    },

    /// Print gallery cards to the terminal, paced like the gallery
    Show {
        /// Only show these languages (repeatable)
        #[arg(long = "language", short = 'l')]
        languages: Vec<String>,
        /// Number of pages to reveal
        #[arg(long, default_value = "1")]
        pages: NonZeroUsize,
        /// Override the delay between cards
        #[arg(long)]
        delay_ms: Option<u64>,
    },

    /// Write a static HTML gallery
    Render {
        #[arg(long)]
        out: PathBuf,
        /// Only show these languages (repeatable)
        #[arg(long = "language", short = 'l')]
        languages: Vec<String>,
        /// Number of pages to include
        #[arg(long, default_value = "1")]
        pages: NonZeroUsize,
        /// Page heading
        #[arg(long)]
        title: Option<String>,
    },

    /// Browse the gallery interactively
    Tui,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{:#}", err);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let target = match cli.command {
        Commands::Tui => LogTarget::Discard,
        _ => LogTarget::Stderr,
    };
    logging::init(cli.log.as_deref(), target);

    let cfg = load_config(&cli)?;
    let client = RemoteClient::new(cfg.clone())?;
    let projects = client.fetch_repositories(&mut OsRandomPicker);

    match cli.command {
        Commands::List { json } => {
            if json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&projects).context("serialize projects")?
                );
                return Ok(());
            }
            for p in &projects {
                println!(
                    "{}  {}  {}  {}",
                    p.id,
                    p.display_title,
                    p.language.as_deref().unwrap_or("-"),
                    p.html_url
                );
            }
        }

        Commands::Languages { json } => {
            let controller = GalleryController::new(projects, &cfg);
            let tags = controller.languages();
            if json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&tags).context("serialize languages")?
                );
                return Ok(());
            }
            for s in controller.selectors() {
                println!("{}  {}", s.id, s.tag);
            }
        }

        Commands::Show {
            languages,
            pages,
            delay_ms,
        } => {
            let mut cfg = cfg;
            if let Some(ms) = delay_ms {
                cfg.reveal_delay_ms = ms;
            }
            let mut sink = TextSink::new(std::io::stdout().lock());
            reveal(projects, &cfg, &languages, pages, &mut sink, &mut ThreadSleep);
            let more = sink.show_more_visible();
            sink.finish().context("write cards")?;
            if more {
                println!("(more projects available; use --pages to show more)");
            }
        }

        Commands::Render {
            out,
            languages,
            pages,
            title,
        } => {
            let mut sink = HtmlSink::new();
            reveal(projects, &cfg, &languages, pages, &mut sink, &mut NoDelay);
            let heading = title.unwrap_or_else(|| format!("{}'s projects", cfg.account));
            let active: Vec<&str> = languages.iter().map(String::as_str).collect();
            std::fs::write(&out, sink.render_document(&heading, &active))
                .with_context(|| format!("write {}", out.display()))?;
            println!("wrote {} cards to {}", sink.len(), out.display());
        }

        Commands::Tui => {
            folio::tui::run_with_options(folio::tui::TuiRunOptions {
                config: cfg,
                projects,
            })?;
        }
    }

    Ok(())
}

fn load_config(cli: &Cli) -> Result<GalleryConfig> {
    let mut cfg = match &cli.config {
        Some(path) => GalleryConfig::load(path)?,
        None => GalleryConfig::default(),
    };
    if let Some(account) = &cli.account {
        cfg.account = account.clone();
    }
    if let Some(url) = &cli.api_url {
        cfg.api_base_url = url.clone();
    }
    if let Some(n) = cli.page_size {
        cfg.page_size = n;
    }
    cfg.validate()?;
    Ok(cfg)
}

/// Applies `languages` off-screen, then renders `pages` pages into `sink`.
fn reveal(
    projects: Vec<RepositoryRecord>,
    cfg: &GalleryConfig,
    languages: &[String],
    pages: NonZeroUsize,
    sink: &mut dyn CardSink,
    delay: &mut dyn Delay,
) {
    let mut controller = GalleryController::new(projects, cfg);
    let mut scratch = MemorySink::new();
    for lang in languages {
        controller.toggle(lang, true, &mut scratch, &mut NoDelay);
    }
    controller.load(sink, delay);
    for _ in 1..pages.get() {
        if !controller.show_more(sink, delay) {
            break;
        }
    }
}
