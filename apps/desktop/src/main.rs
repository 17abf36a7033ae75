use std::{
    io::{self, Write},
    path::PathBuf,
};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use client_core::{
    load_catalog, load_settings_from, settings::DEFAULT_SETTINGS_FILE, CatalogViewController,
    HttpCatalogSource, TextRenderer,
};
use shared::domain::CategorySelection;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "catalog", about = "Browse a remote product catalog")]
struct Args {
    /// Catalog endpoint, overriding settings and environment.
    #[arg(long)]
    endpoint: Option<String>,
    #[arg(long, default_value = DEFAULT_SETTINGS_FILE)]
    config: PathBuf,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render one page of the filtered catalog.
    Show {
        #[arg(long, default_value = "")]
        search: String,
        /// Category label, or "any".
        #[arg(long)]
        category: Option<String>,
        #[arg(long, default_value_t = 1)]
        page: usize,
    },
    /// List the categories present in the catalog.
    Categories,
    /// Interactive session reading commands from stdin.
    Browse,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum BrowseCommand {
    Search(String),
    Category(CategorySelection),
    Next,
    Prev,
    Categories,
    Help,
    Quit,
}

const BROWSE_HELP: &str = "commands: search <text> | category <label|any> | next | prev | categories | help | quit";

fn parse_category(raw: &str) -> CategorySelection {
    let raw = raw.trim();
    if raw.eq_ignore_ascii_case("any") {
        CategorySelection::Any
    } else {
        CategorySelection::from_label(raw)
    }
}

fn parse_browse_command(line: &str) -> Result<Option<BrowseCommand>, String> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }
    let (verb, rest) = line.split_once(' ').unwrap_or((line, ""));
    let command = match verb.to_ascii_lowercase().as_str() {
        "search" | "s" => BrowseCommand::Search(rest.trim().to_string()),
        "category" | "c" => BrowseCommand::Category(parse_category(rest)),
        "next" | "n" => BrowseCommand::Next,
        "prev" | "p" => BrowseCommand::Prev,
        "categories" => BrowseCommand::Categories,
        "help" | "?" => BrowseCommand::Help,
        "quit" | "exit" | "q" => BrowseCommand::Quit,
        other => return Err(format!("unknown command '{other}'")),
    };
    Ok(Some(command))
}

fn render(controller: &CatalogViewController) -> Result<()> {
    let stdout = io::stdout();
    controller
        .render(&mut TextRenderer::new(stdout.lock()))
        .context("failed to write catalog page")
}

fn print_categories(controller: &CatalogViewController) {
    for category in controller.categories() {
        println!("{category}");
    }
}

async fn browse(controller: &mut CatalogViewController) -> Result<()> {
    println!("{BROWSE_HELP}");
    render(controller)?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        print!("> ");
        io::stdout().flush()?;
        let Some(line) = lines.next_line().await? else {
            break;
        };

        let command = match parse_browse_command(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(err) => {
                println!("{err}; {BROWSE_HELP}");
                continue;
            }
        };
        tracing::debug!(?command, "browse command");

        match command {
            BrowseCommand::Search(text) => controller.set_search_text(text),
            BrowseCommand::Category(category) => controller.set_category(category),
            BrowseCommand::Next => {
                if !controller.next_page() {
                    println!("already on the last page");
                    continue;
                }
            }
            BrowseCommand::Prev => {
                if !controller.prev_page() {
                    println!("already on the first page");
                    continue;
                }
            }
            BrowseCommand::Categories => {
                print_categories(controller);
                continue;
            }
            BrowseCommand::Help => {
                println!("{BROWSE_HELP}");
                continue;
            }
            BrowseCommand::Quit => break,
        }
        render(controller)?;
    }

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();
    let args = Args::parse();

    let mut settings = load_settings_from(&args.config, |name| std::env::var(name).ok())
        .with_context(|| format!("failed to load settings from {}", args.config.display()))?;
    if let Some(endpoint) = args.endpoint {
        settings.endpoint = endpoint;
        settings.endpoint_url()?;
    }

    let source = HttpCatalogSource::new(&settings)?;
    let mut controller = CatalogViewController::new(settings.page_size);
    let loaded = load_catalog(&source, &mut controller).await;
    if let Err(err) = &loaded {
        eprintln!("catalog unavailable: {err}");
    }

    let command = args.command.unwrap_or(Command::Show {
        search: String::new(),
        category: None,
        page: 1,
    });
    match command {
        Command::Show {
            search,
            category,
            page,
        } => {
            if let Some(category) = category {
                controller.set_category(parse_category(&category));
            }
            controller.set_search_text(search);
            for _ in 1..page {
                if !controller.next_page() {
                    break;
                }
            }
            render(&controller)?;
            loaded?;
        }
        Command::Categories => {
            loaded?;
            print_categories(&controller);
        }
        Command::Browse => browse(&mut controller).await?,
    }

    Ok(())
}
