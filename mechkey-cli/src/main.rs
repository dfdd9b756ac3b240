// Lint configuration for this crate
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! `MechKey` CLI - browse the storefront, manage a cart, and run admin
//! operations from the command line.
//!
//! # Examples
//!
//! ```bash
//! # List in-stock keyboards, cheapest first
//! mechkey products list --category keyboards --in-stock --sort-by price --sort-order asc
//!
//! # Product details with related products
//! mechkey products show gateron-oil-king --related
//!
//! # Cart
//! mechkey cart add gateron-oil-king --quantity 2
//! mechkey cart show
//!
//! # Admin (demo account)
//! mechkey admin login admin --password admin123
//! mechkey admin products update 12 --data '{"stock_quantity": 40}'
//!
//! # JSON output
//! mechkey categories list --format json --pretty
//! ```

mod commands;
mod context;
mod output;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use commands::{admin, cart, categories, config, products, route};

// ============================================================================
// CLI Definition
// ============================================================================

/// `MechKey` CLI - storefront client for the `MechKey` keyboard parts shop.
#[derive(Parser)]
#[command(name = "mechkey")]
#[command(about = "Storefront client for the MechKey keyboard parts shop")]
#[command(long_about = r"
MechKey browses the storefront catalog, keeps a local cart, and runs
admin product and category operations against the shop backend.

The API base URL comes from the config file, MECHKEY_API_URL
(or VITE_API_URL), or --api-url, in increasing order of precedence.

Examples:
  mechkey products list --category switches
  mechkey products search 'lubed linear'
  mechkey cart add tofu65 --quantity 1
  mechkey route /admin/products
")]
#[command(version)]
#[command(author = "MechKey Contributors")]
pub struct Cli {
    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (text or json).
    #[arg(long, short = 'f', default_value = "text", global = true)]
    pub format: OutputFormat,

    /// Pretty-print JSON output.
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Verbose output (show debug info).
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Disable colored output.
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Quiet mode (no logging, errors only through the exit code).
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Config file to use instead of the default.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// API base URL, overriding config and environment.
    #[arg(long, global = true, value_name = "URL")]
    pub api_url: Option<String>,

    /// Directory for the persisted cart and session.
    #[arg(long, global = true, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,
}

/// CLI commands.
#[derive(Subcommand)]
pub enum Commands {
    /// Browse the product catalog.
    #[command(visible_alias = "p")]
    Products(products::ProductsArgs),

    /// Browse categories and filter facets.
    #[command(visible_alias = "c")]
    Categories(categories::CategoriesArgs),

    /// Manage the local cart.
    Cart(cart::CartArgs),

    /// Admin session and catalog management.
    Admin(admin::AdminArgs),

    /// Show where a storefront path leads for the current session.
    Route(route::RouteArgs),

    /// Manage configuration.
    Config(config::ConfigArgs),
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum OutputFormat {
    /// Human-readable text with colors.
    #[default]
    Text,
    /// JSON output for scripting.
    Json,
}

/// CLI exit codes.
#[repr(i32)]
pub enum ExitCode {
    /// Success.
    Success = 0,
    /// General error.
    Error = 1,
    /// Admin command refused by the navigation guard.
    Redirected = 2,
}

// ============================================================================
// Logging Setup
// ============================================================================

fn setup_logging(verbose: bool, quiet: bool, level: &str) {
    if quiet {
        return; // No logging in quiet mode
    }

    let filter = if verbose {
        EnvFilter::new("mechkey=debug,info")
    } else {
        EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(format!("mechkey={level}")))
            .unwrap_or_else(|_| EnvFilter::new("mechkey=warn"))
    };

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}

// ============================================================================
// Main Entry Point
// ============================================================================

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // A broken config file is reported by the command itself.
    let log_level = context::load_config(&cli)
        .map(|config| config.log_level)
        .unwrap_or_else(|_| "warn".to_string());
    setup_logging(cli.verbose, cli.quiet, &log_level);

    let result = match &cli.command {
        Commands::Products(args) => products::run(args, &cli).await,
        Commands::Categories(args) => categories::run(args, &cli).await,
        Commands::Cart(args) => cart::run(args, &cli).await,
        Commands::Admin(args) => admin::run(args, &cli).await,
        Commands::Route(args) => route::run(args, &cli),
        Commands::Config(args) => config::run(args, &cli),
    };

    if let Err(e) = result {
        let code = if e.is::<admin::GuardRedirect>() {
            ExitCode::Redirected
        } else {
            ExitCode::Error
        };
        if !cli.quiet {
            eprintln!("Error: {e:#}");
        }
        std::process::exit(code as i32);
    }

    std::process::exit(ExitCode::Success as i32);
}
