//! Todo List CLI
//!
//! Terminal client for a to-do backing store:
//! - Interactive single-page view (default)
//! - One-shot list / add / toggle
//! - Default config generation

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tokio::io::{AsyncBufReadExt, BufReader};

use todolist::config::{generate_default_config, Config};
use todolist::container::{Intent, ListContainer, SubmitOutcome};
use todolist::model::{DraftField, Item};
use todolist::store::HttpStore;
use todolist::view::render_page;

#[derive(Parser)]
#[command(name = "todolist")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Terminal to-do list backed by a REST store")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Backing store URL (overrides config)
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Config file (default: ~/.config/todolist/config.toml, ./todolist.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Interactive page: edit the form, submit, toggle items
    Ui,

    /// Print the current list
    List,

    /// Create an item
    Add {
        /// Item title
        #[arg(short, long)]
        title: String,
        /// Item description
        #[arg(short, long)]
        description: String,
    },

    /// Flip the completion state of an item by id
    Toggle {
        /// Item id as assigned by the store
        id: String,
    },

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = Config::resolve(cli.config.as_deref())?;
    if let Some(url) = cli.base_url {
        config.client.base_url = url;
    }

    todolist::logging::init(&config.logging, "warn");

    let store = HttpStore::new(&config.client)?;
    let mut container = ListContainer::with_config(store, &config.client);

    match cli.command.unwrap_or(Commands::Ui) {
        Commands::Ui => run_page(&mut container).await?,

        Commands::List => {
            if !container.load().await {
                unreachable_store(&config.client.base_url);
            }

            if container.items().is_empty() {
                println!("Nothing to do.");
            } else {
                println!("{:<38} {:<5} {:<24} {}", "ID", "Done", "Title", "Description");
                println!("{}", "-".repeat(90));
                for item in container.items() {
                    println!(
                        "{:<38} {:<5} {:<24} {}",
                        item.id,
                        if item.completed { "yes" } else { "no" },
                        item.title,
                        item.description
                    );
                }
            }
        }

        Commands::Add { title, description } => {
            container.input_change(DraftField::Title, title);
            container.input_change(DraftField::Description, description);

            match container.submit().await {
                SubmitOutcome::Created => {
                    println!("{}", add_report(container.items(), container.is_synced()));
                }
                SubmitOutcome::Invalid | SubmitOutcome::Failed => {
                    eprintln!("{}", container.error());
                    std::process::exit(1);
                }
            }
        }

        Commands::Toggle { id } => {
            if container.toggle(&id).await {
                println!(
                    "{}",
                    toggle_report(container.items(), container.is_synced(), &id)
                );
            } else {
                eprintln!("Failed to update todo {}", id);
                std::process::exit(1);
            }
        }

        Commands::Config { output } => {
            let content = generate_default_config();
            if let Some(path) = output {
                std::fs::write(&path, &content)?;
                println!("Config written to {:?}", path);
            } else {
                print!("{}", content);
            }
        }
    }

    Ok(())
}

fn unreachable_store(base_url: &str) -> ! {
    eprintln!("Cannot read the list from {}", base_url);
    eprintln!();
    eprintln!("Make sure the backing store is running:");
    eprintln!("  cargo run --bin todolist-server");
    std::process::exit(1);
}

/// Outcome line for an accepted create
fn add_report(items: &[Item], synced: bool) -> String {
    if synced {
        format!("Added. {} item(s) in the list.", items.len())
    } else {
        "Added. The updated list could not be read.".to_string()
    }
}

/// Outcome line for an accepted toggle. The state is only reported when it
/// comes from a fresh snapshot.
fn toggle_report(items: &[Item], synced: bool, id: &str) -> String {
    if !synced {
        return format!("Toggled {}. The updated list could not be read.", id);
    }
    match items.iter().find(|i| i.id == id) {
        Some(item) => {
            let state = if item.completed { "done" } else { "not done" };
            format!("{} is now {}", item.title, state)
        }
        None => format!("Toggled {}", id),
    }
}

/// A line typed into the interactive page
#[derive(Debug, PartialEq, Eq)]
enum PageCommand {
    Intent(Intent),
    /// Toggle the n-th rendered item (1-based)
    ToggleNth(usize),
    Help,
    Quit,
    Unknown(String),
}

fn parse_command(line: &str) -> PageCommand {
    let line = line.trim();
    let (word, rest) = line.split_once(' ').unwrap_or((line, ""));

    match word.to_lowercase().as_str() {
        "title" | "description" | "desc" => match word.parse::<DraftField>() {
            Ok(field) => PageCommand::Intent(Intent::Input(field, rest.trim().to_string())),
            Err(e) => PageCommand::Unknown(e),
        },
        "submit" | "add" => PageCommand::Intent(Intent::Submit),
        "reload" | "r" => PageCommand::Intent(Intent::Reload),
        "toggle" | "t" => match rest.trim().parse::<usize>() {
            Ok(n) if n > 0 => PageCommand::ToggleNth(n),
            _ => PageCommand::Unknown(format!("Not an item number: {:?}", rest.trim())),
        },
        "help" | "?" => PageCommand::Help,
        "quit" | "exit" | "q" => PageCommand::Quit,
        "" => PageCommand::Unknown(String::new()),
        other => PageCommand::Unknown(format!("Unknown command: {}", other)),
    }
}

const HELP: &str = "\
Commands:
  title <text>        set the draft title
  description <text>  set the draft description
  submit              add the draft to the list
  toggle <n>          flip item number n
  reload              fetch the list again
  help                show this help
  quit                leave";

async fn run_page(
    container: &mut ListContainer<HttpStore>,
) -> Result<(), Box<dyn std::error::Error>> {
    container.mount().await;
    println!("{}", render_page(container));
    println!("Type 'help' for commands.");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        match parse_command(&line) {
            PageCommand::Intent(intent) => container.dispatch(intent).await,
            PageCommand::ToggleNth(n) => {
                let intent = container.render().get(n - 1).map(|view| view.toggle());
                match intent {
                    Some(intent) => container.dispatch(intent).await,
                    None => {
                        println!("No item number {}", n);
                        continue;
                    }
                }
            }
            PageCommand::Help => {
                println!("{}", HELP);
                continue;
            }
            PageCommand::Quit => break,
            PageCommand::Unknown(message) => {
                if !message.is_empty() {
                    println!("{}", message);
                }
                continue;
            }
        }

        println!("{}", render_page(container));
    }

    Ok(())
}
