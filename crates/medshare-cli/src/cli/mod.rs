pub mod args;

use std::io::{self, IsTerminal, Write};

use medshare_core::catalog::Catalog;
use medshare_core::config::Config;
use medshare_core::matcher::{self, SearchOutcome};

use self::args::{Cli, Command};
use crate::tui;

pub fn run(cli: Cli) -> color_eyre::Result<()> {
    let config = Config::load()?;

    match cli.command {
        None => cmd_pick(&config, false)?,
        Some(Command::Pick { multi }) => cmd_pick(&config, multi)?,
        Some(Command::Search { query, json }) => cmd_search(&config, &query, json)?,
        Some(Command::List { filter, plain }) => cmd_list(&config, filter.as_deref(), plain)?,
        Some(Command::Add { name }) => cmd_add(&config, &name)?,
        Some(Command::Remove { name }) => cmd_remove(&config, &name)?,
        Some(Command::Reset) => cmd_reset(&config)?,
    }

    Ok(())
}

fn cmd_pick(config: &Config, multi: bool) -> color_eyre::Result<()> {
    if !io::stderr().is_terminal() {
        color_eyre::eyre::bail!("the interactive picker needs a terminal; use `medshare search`");
    }

    let catalog = Catalog::load(config)?;
    if catalog.is_empty() {
        eprintln!("Catalog is empty. Add medicines with `medshare add <name>`.");
        return Ok(());
    }

    let chosen = if multi {
        tui::run_multi_picker(&catalog, config)?
    } else {
        tui::run_picker(&catalog, config)?.into_iter().collect()
    };

    let mut stdout = io::stdout().lock();
    for name in chosen {
        writeln!(stdout, "{name}")?;
    }
    Ok(())
}

fn cmd_search(config: &Config, query: &str, json: bool) -> color_eyre::Result<()> {
    let catalog = Catalog::load(config)?;
    let outcome = matcher::search(query, catalog.names());
    tracing::debug!(query, ?outcome, "search");

    if json {
        println!("{}", render_json(&outcome)?);
        return Ok(());
    }

    if let Some(text) = render_outcome(&outcome, &config.placeholder) {
        print!("{text}");
    }
    Ok(())
}

/// Plain-text rendering of a search outcome. `None` when there is nothing to show.
fn render_outcome(outcome: &SearchOutcome, placeholder: &str) -> Option<String> {
    match outcome {
        SearchOutcome::Cleared => None,
        SearchOutcome::NoMatches => Some(format!("{placeholder}\n")),
        SearchOutcome::Matches(matches) => Some(
            matches
                .iter()
                .map(|m| format!("{:>3}  {}\n", m.score, m.name))
                .collect(),
        ),
    }
}

/// JSON array of `{index, name, score}` objects; `[]` when nothing matched.
fn render_json(outcome: &SearchOutcome) -> serde_json::Result<String> {
    serde_json::to_string_pretty(outcome.matches())
}

fn cmd_list(config: &Config, filter: Option<&str>, plain: bool) -> color_eyre::Result<()> {
    let catalog = Catalog::load(config)?;
    let names: Vec<&str> = match filter {
        Some(query) => catalog.filter(query),
        None => catalog.names().iter().map(String::as_str).collect(),
    };

    if plain {
        for name in &names {
            println!("{name}");
        }
        return Ok(());
    }

    if names.is_empty() {
        eprintln!("{}", config.placeholder);
        return Ok(());
    }

    let width = names.len().to_string().len();
    for (i, name) in names.iter().enumerate() {
        println!("{:>width$}  {name}", i + 1);
    }
    eprintln!("{} of {} medicines", names.len(), catalog.len());
    Ok(())
}

fn cmd_add(config: &Config, name: &str) -> color_eyre::Result<()> {
    let mut catalog = Catalog::load(config)?;
    let added = catalog.add(name)?.to_string();
    catalog.save(config)?;
    eprintln!("Added medicine: {added}");
    Ok(())
}

fn cmd_remove(config: &Config, name: &str) -> color_eyre::Result<()> {
    let mut catalog = Catalog::load(config)?;
    let removed = catalog.remove(name)?;
    catalog.save(config)?;
    eprintln!("Removed medicine: {removed}");
    Ok(())
}

fn cmd_reset(config: &Config) -> color_eyre::Result<()> {
    let catalog = Catalog::builtin();
    catalog.save(config)?;
    eprintln!("Restored built-in catalog ({} medicines)", catalog.len());
    Ok(())
}
