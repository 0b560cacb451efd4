//! shopcart - build a shopping cart from the command line and print it.
//!
//! Commands:
//! - `shopcart catalog` - List the item templates
//! - `shopcart receipt` - Build a cart and print (or save) its receipt
//! - `shopcart summary` - Build a cart and print its totals

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::debug;

use cart_cli::commands::{self, CatalogArgs, ReceiptArgs, SummaryArgs};
use cart_cli::config::CliConfig;
use cart_cli::error::CliError;

/// shopcart - Shopping cart receipts in text, CSV, JSON or YAML
#[derive(Parser)]
#[command(name = "shopcart")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output for summaries and errors
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the item templates
    Catalog(CatalogArgs),

    /// Build a cart and print its receipt
    Receipt(ReceiptArgs),

    /// Build a cart and print its totals
    Summary(SummaryArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = CliConfig::from_env();
    cart_cli::init_tracing(cli.verbose, config.log_filter.as_deref());
    debug!(?config, "Configuration loaded");

    let result: Result<(), CliError> = match cli.command {
        Commands::Catalog(args) => commands::catalog::run(args),
        Commands::Receipt(args) => commands::receipt::run(args, &config),
        Commands::Summary(args) => commands::summary::run(args, cli.json),
    };

    if let Err(e) = result {
        if cli.json {
            eprintln!("{}", e.to_json());
            std::process::exit(1);
        }
        return Err(e.into());
    }

    Ok(())
}
