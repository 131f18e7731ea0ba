use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "medshare", about = "Search the MedShare medicine catalog", version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum Command {
    /// Interactive search dropdown
    Pick {
        /// Select several medicines (TAB toggles)
        #[arg(long)]
        multi: bool,
    },

    /// Rank catalog entries against a query
    Search {
        /// Search text
        query: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List catalog entries
    List {
        /// Only show names containing this text
        #[arg(long)]
        filter: Option<String>,
        /// Names only, one per line
        #[arg(long)]
        plain: bool,
    },

    /// Add a medicine to the catalog
    Add {
        /// Medicine name
        name: String,
    },

    /// Remove a medicine from the catalog
    Remove {
        /// Medicine name (case-insensitive)
        name: String,
    },

    /// Restore the built-in catalog
    Reset,
}
