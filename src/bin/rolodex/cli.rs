use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// CLI для rolodex (встраиваемая книга контактов)
#[derive(Parser, Debug)]
#[command(name = "rolodex", version, about = "rolodex address book CLI")]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Cmd,
}

#[derive(Subcommand, Debug)]
pub enum Cmd {
    /// Initialize an empty address book snapshot
    Init {
        /// Snapshot path (default: ROLO_BOOK_PATH or ./address_book.json)
        #[arg(long)]
        path: Option<PathBuf>,
    },
    /// Interactive menu (create / search / list / close)
    Menu {
        #[arg(long)]
        path: Option<PathBuf>,
        /// Message locale: en | fr (default: ROLO_LOCALE or en)
        #[arg(long)]
        locale: Option<String>,
    },
    /// Add a contact non-interactively (validated, then persisted)
    Add {
        #[arg(long)]
        path: Option<PathBuf>,
        /// Free-text full name; split into first/middle/last
        #[arg(long)]
        full_name: String,
        #[arg(long)]
        phone: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        street: Option<String>,
        #[arg(long)]
        city: Option<String>,
        #[arg(long)]
        state: Option<String>,
        #[arg(long)]
        zip: Option<String>,
        #[arg(long)]
        country: Option<String>,
    },
    /// List all contacts (unordered). --json prints a JSON array.
    List {
        #[arg(long)]
        path: Option<PathBuf>,
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Search by full name (case-insensitive)
    SearchName {
        #[arg(long)]
        path: Option<PathBuf>,
        #[arg(long)]
        name: String,
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Search by exact phone number
    SearchPhone {
        #[arg(long)]
        path: Option<PathBuf>,
        #[arg(long)]
        phone: String,
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Print book summary and process metrics
    ///
    /// Пример:
    ///   rolodex status --path ./address_book.json
    ///   rolodex status --path ./address_book.json --json
    Status {
        #[arg(long)]
        path: Option<PathBuf>,
        /// JSON output (single object)
        #[arg(long, default_value_t = false)]
        json: bool,
    },
}
