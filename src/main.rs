use anyhow::Context;
use clap::Parser;
use folio::application::{init::init, Catalog, ConfigService};
use folio::cli::{
    confirm, format_category_counts, format_entry_detail, format_entry_list, Cli, Commands,
};
use folio::domain::{Category, CategoryFilter, EntryFields, EntryId};
use folio::error::FolioError;
use folio::infrastructure::FileSystemRepository;
use std::io::IsTerminal;
use std::str::FromStr;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() {
    if let Err(e) = init_logging() {
        eprintln!("Warning: {:#}", e);
    }

    let cli = Cli::parse();

    let result = run(cli);

    match result {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

/// Diagnostics go to stderr; FOLIO_LOG takes an EnvFilter directive (default: warn)
fn init_logging() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_env("FOLIO_LOG")
        .or_else(|_| EnvFilter::try_new("warn"))
        .context("invalid log filter")?;

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(std::io::stderr().is_terminal())
                .with_target(false)
                .without_time(),
        )
        .try_init()
        .context("failed to install log subscriber")?;

    Ok(())
}

fn open_catalog() -> Result<Catalog, FolioError> {
    let repo = FileSystemRepository::discover()?;
    Catalog::open(repo)
}

fn run(cli: Cli) -> Result<(), FolioError> {
    match cli.command {
        Commands::Init { path } => {
            let config = init(&path)?;
            println!("Initialized folio catalog at {}", path.display());
            println!("Storage key: {}", config.storage_key);
            Ok(())
        }
        Commands::List { category } => {
            let filter = CategoryFilter::from_str(&category)?;
            let catalog = open_catalog()?;
            let entries = catalog.store.list(&filter);
            print!("{}", format_entry_list(&entries, &filter));
            if entries.is_empty() {
                println!();
            }
            Ok(())
        }
        Commands::Show { id } => {
            let catalog = open_catalog()?;
            let id = EntryId::new(id);
            let entry = catalog
                .store
                .get(&id)
                .ok_or_else(|| FolioError::EntryNotFound(id.to_string()))?;
            print!("{}", format_entry_detail(entry));
            Ok(())
        }
        Commands::Add {
            title,
            url,
            description,
            image_url,
            category,
        } => {
            let mut catalog = open_catalog()?;
            let category = match category {
                Some(label) => Category::from_str(&label)?,
                None => catalog.config.default_category,
            };

            let entry = catalog.store.create(EntryFields {
                title,
                description,
                url,
                image_url,
                category,
            })?;

            println!("Added {} ({})", entry.title, entry.id);
            Ok(())
        }
        Commands::Edit { id, changes } => {
            let mut catalog = open_catalog()?;
            let id = EntryId::new(id);
            let current = catalog
                .store
                .get(&id)
                .ok_or_else(|| FolioError::EntryNotFound(id.to_string()))?
                .fields();

            if changes.is_empty() {
                println!("Nothing to change for {}", id);
                return Ok(());
            }

            let entry = catalog.store.update(&id, changes.apply(current)?)?;
            println!("Updated {} ({})", entry.title, entry.id);
            Ok(())
        }
        Commands::Remove { id, yes } => {
            let mut catalog = open_catalog()?;
            let id = EntryId::new(id);

            if catalog.store.get(&id).is_none() {
                println!("No website with id '{}'; nothing removed", id);
                return Ok(());
            }

            if !yes {
                let confirmed = confirm(
                    "Are you sure you want to delete this website?",
                    &mut std::io::stdin().lock(),
                    &mut std::io::stdout(),
                )?;
                if !confirmed {
                    println!("Cancelled");
                    return Ok(());
                }
            }

            if let Some(removed) = catalog.store.delete(&id)? {
                println!("Removed {} ({})", removed.title, removed.id);
            }
            Ok(())
        }
        Commands::Categories => {
            let catalog = open_catalog()?;
            print!("{}", format_category_counts(&catalog.store.category_counts()));
            Ok(())
        }
        Commands::Config { key, value, list } => {
            let repo = FileSystemRepository::discover()?;
            let service = ConfigService::new(repo);

            if list {
                let config = service.list()?;
                println!("storage_key = {}", config.storage_key);
                println!("default_category = {}", config.default_category);
                println!("created = {}", config.created.to_rfc3339());
                Ok(())
            } else if let Some(k) = key {
                if let Some(v) = value {
                    service.set(&k, &v)?;
                    println!("Set {} = {}", k, v);
                    Ok(())
                } else {
                    let val = service.get(&k)?;
                    println!("{}", val);
                    Ok(())
                }
            } else {
                println!("Usage: folio config [--list | <key> [<value>]]");
                println!("Valid keys: storage_key, default_category, created");
                Ok(())
            }
        }
    }
}
