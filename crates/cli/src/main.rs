//! CarShop CLI - database and operator tools.
//!
//! # Usage
//!
//! ```bash
//! # Create the schema and seed the default cars
//! carshop-cli db init
//!
//! # Inspect the store
//! carshop-cli cars list
//! carshop-cli orders list --json
//! carshop-cli messages list
//!
//! # Create an admin user (password is prompted)
//! carshop-cli admin create -u alice
//!
//! # Work on another database file
//! carshop-cli --database /tmp/shop.db cars list
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use carshop_storefront::config::DEFAULT_DATABASE_PATH;

mod commands;

#[derive(Parser)]
#[command(name = "carshop-cli")]
#[command(author, version, about = "CarShop operator tools")]
struct Cli {
    /// `SQLite` database file
    #[arg(long, global = true, default_value = DEFAULT_DATABASE_PATH)]
    database: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Database management
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
    /// Car inventory
    Cars {
        #[command(subcommand)]
        action: ListAction,
    },
    /// Recorded orders
    Orders {
        #[command(subcommand)]
        action: ListAction,
    },
    /// Contact messages
    Messages {
        #[command(subcommand)]
        action: ListAction,
    },
    /// Manage admin users
    Admin {
        #[command(subcommand)]
        action: AdminAction,
    },
}

#[derive(Subcommand)]
enum DbAction {
    /// Create tables and seed the default cars if missing
    Init,
}

#[derive(Subcommand)]
enum ListAction {
    /// Print every row
    List {
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

#[derive(Subcommand)]
enum AdminAction {
    /// Create a new admin user
    Create {
        /// Login name
        #[arg(short, long)]
        username: String,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "carshop_cli=info,carshop_storefront=info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let path = cli.database;
    match cli.command {
        Commands::Db {
            action: DbAction::Init,
        } => commands::db::init(&path).await?,
        Commands::Cars {
            action: ListAction::List { json },
        } => commands::list::cars(&path, json).await?,
        Commands::Orders {
            action: ListAction::List { json },
        } => commands::list::orders(&path, json).await?,
        Commands::Messages {
            action: ListAction::List { json },
        } => commands::list::messages(&path, json).await?,
        Commands::Admin { action } => match action {
            AdminAction::Create { username } => {
                commands::admin::create_user(&path, &username).await?;
            }
        },
    }
    Ok(())
}
