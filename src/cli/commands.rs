//! Tracker command handlers

use anyhow::{Context, Result};
use clap::Subcommand;
use std::path::PathBuf;

use super::render::{empty_message, progress_label, render_items};
use crate::config::{Config, ConfigLoader};
use crate::models::{ItemId, Kind, ProgressUpdate, Theme};
use crate::session::{Session, samples};
use crate::storage::{JsonFileStore, keys};
use crate::store::{AddOutcome, DragEnd, KindFilter};

/// Commands operating on the active user's list
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Log in as a user (created on first use)
    Login {
        /// User name, case-insensitive
        user: String,
    },
    /// Log out the active user
    Logout,
    /// Show the active user
    Whoami,
    /// List users with a saved list
    Users,
    /// Start tracking a series or book
    Add {
        /// Title (words are joined with spaces)
        #[arg(required = true, num_args = 1..)]
        name: Vec<String>,
        /// Kind of item (defaults to the configured defaultKind)
        #[arg(long, short)]
        kind: Option<Kind>,
    },
    /// Stop tracking an item
    Remove {
        /// Item id
        id: ItemId,
    },
    /// Step progress up or down
    Bump {
        /// Item id
        id: ItemId,
        /// Amount to add, negative to go back
        #[arg(default_value_t = 1, allow_negative_numbers = true)]
        delta: i64,
    },
    /// Set progress to an exact value
    Set {
        /// Item id
        id: ItemId,
        /// New progress (negative values become 0)
        #[arg(allow_negative_numbers = true)]
        value: i64,
    },
    /// Move an item onto another item's position
    Move {
        /// Item to move
        source: ItemId,
        /// Item whose position it takes
        target: ItemId,
        /// Kind filter active in the view (reordering requires "all")
        #[arg(long, default_value = "all")]
        kind: KindFilter,
        /// Search text active in the view (reordering requires none)
        #[arg(long)]
        search: Option<String>,
    },
    /// Show tracked items
    List {
        /// Only show one kind
        #[arg(long, short, default_value = "all")]
        kind: KindFilter,
        /// Case-insensitive name search
        #[arg(long, short)]
        search: Option<String>,
    },
    /// Show, set or toggle the theme
    Theme {
        /// "light", "dark" or "toggle"
        value: Option<String>,
    },
}

/// Run a tracker command against the configured store
pub fn handle_command(cmd: Command, store_path: Option<PathBuf>) -> Result<()> {
    let config = ConfigLoader::load().unwrap_or_else(|e| {
        tracing::warn!("Failed to load configuration, using defaults: {:#}", e);
        ConfigLoader::load_defaults()
    });
    let store_path = store_path.unwrap_or_else(|| ConfigLoader::store_path(&config));
    tracing::debug!("Using store {}", store_path.display());

    let store = JsonFileStore::open(&store_path)
        .with_context(|| format!("Failed to open store {}", store_path.display()))?;
    let mut session = Session::open(store, &config).context("Failed to restore session")?;

    run(&mut session, &config, cmd)
}

fn run(session: &mut Session<JsonFileStore>, config: &Config, cmd: Command) -> Result<()> {
    match cmd {
        Command::Login { user } => {
            let user = session.login(&user)?.to_string();
            println!("Logged in as {} ({} items)", user, session.items().len());
        }
        Command::Logout => {
            session.logout()?;
            println!("Logged out");
        }
        Command::Whoami => match session.active_user() {
            Some(user) => println!("{}", user),
            None => {
                let demo: Vec<&str> = samples::reserved_users().collect();
                println!("Not logged in (demo users: {})", demo.join(", "));
            }
        },
        Command::Users => {
            let users: Vec<&str> = session
                .store()
                .keys()
                .filter_map(keys::user_from_items_key)
                .collect();
            for user in users {
                let marker = if session.active_user() == Some(user) { "*" } else { " " };
                println!("{} {}", marker, user);
            }
        }
        Command::Add { name, kind } => {
            let name = name.join(" ");
            let kind = kind.unwrap_or(config.default_kind);
            let outcome = session.add(&name, kind)?;
            let item = session
                .items()
                .get(outcome.id())
                .context("Item missing after add")?;
            match outcome {
                AddOutcome::Added(id) => println!("Added {} '{}' as #{}", item.kind, item.name, id),
                AddOutcome::Duplicate(id) => println!(
                    "Already tracking '{}' as #{} ({})",
                    item.name,
                    id,
                    progress_label(item)
                ),
            }
            print_view(session);
        }
        Command::Remove { id } => {
            if session.remove(id)? {
                println!("Removed #{}", id);
            } else {
                println!("No item #{}", id);
            }
        }
        Command::Bump { id, delta } => {
            report_progress(session, id, ProgressUpdate::Delta(delta))?;
        }
        Command::Set { id, value } => {
            report_progress(session, id, ProgressUpdate::Set(value))?;
        }
        Command::Move {
            source,
            target,
            kind,
            search,
        } => {
            session.set_filter(kind);
            session.set_query(search.unwrap_or_default());
            if session.drag_end(DragEnd::new(source, Some(target)))? {
                println!("Moved #{}", source);
            } else {
                println!("Nothing to move");
            }
        }
        Command::List { kind, search } => {
            if !session.is_logged_in() {
                anyhow::bail!(crate::TrackerError::NotLoggedIn);
            }
            session.set_filter(kind);
            session.set_query(search.unwrap_or_default());
            print_view(session);
        }
        Command::Theme { value } => {
            match value.as_deref() {
                None => {}
                Some("toggle") => {
                    session.toggle_theme()?;
                }
                Some(other) => {
                    let theme: Theme = other.parse().map_err(anyhow::Error::msg)?;
                    session.set_theme(theme)?;
                }
            }
            println!("{}", session.theme());
        }
    }

    Ok(())
}

fn report_progress(
    session: &mut Session<JsonFileStore>,
    id: ItemId,
    update: ProgressUpdate,
) -> Result<()> {
    match session.adjust_progress(id, update)? {
        Some(_) => {
            let item = session.items().get(id).context("Item missing after update")?;
            println!("{}: {}", item.name, progress_label(item));
        }
        None => println!("No item #{}", id),
    }
    Ok(())
}

fn print_view(session: &Session<JsonFileStore>) {
    let visible = session.visible();
    if visible.is_empty() {
        println!("{}", empty_message(!session.view().query.is_empty()));
    } else {
        println!("{}", render_items(&visible, session.view().highlighted));
    }
}
