use std::fs::File;
use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use recurro::data;
use recurro::recurrence;

/// Lists the recurrence rules of a ledger document export.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Describe every rule, in canonical order.
    Rules {
        /// CSV export of the recurrence rule table.
        rules: PathBuf,
        /// Skip rules equal to the one listed before them.
        #[arg(short, long)]
        unique: bool,
        /// Append primary keys to listed rules.
        #[arg(short, long)]
        verbose: bool,
    },
    /// Describe the repeat and fill rules of each spending plan event as CSV.
    Plan {
        /// CSV export of the recurrence rule table.
        rules: PathBuf,
        /// CSV export of the spending plan events.
        events: PathBuf,
    },
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    match cli.command {
        Command::Rules { rules, unique, verbose } => {
            let rules = data::load_rules(&rules)?;
            data::list_rules(rules, unique, verbose, io::stdout().lock())?;
        },
        Command::Plan { rules, events } => {
            let rules = recurrence::index_by_key(data::load_rules(&rules)?);
            let events = File::open(&events).with_context(|| format!("failed to open {}", events.display()))?;
            data::export_plan(events, &rules, io::stdout().lock())?;
        },
    }

    Ok(())
}
