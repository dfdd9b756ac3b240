//! Admin command - session and catalog management.
//!
//! Catalog commands go through the same navigation guard as the admin
//! pages: without a session they are refused with a redirect to the login
//! route.

use std::fmt;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::{Args, Subcommand};
use mechkey_core::{CategoryInput, Navigation, ProductInput, Route, StockUpdate, resolve};
use mechkey_http::Acknowledgement;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::{info, warn};

use crate::context::AppContext;
use crate::output::{JsonFormatter, SessionOutput, TextFormatter};
use crate::{Cli, OutputFormat};

// ============================================================================
// Arguments
// ============================================================================

/// Arguments for the admin command.
#[derive(Args)]
pub struct AdminArgs {
    #[command(subcommand)]
    pub action: AdminAction,
}

/// Admin subcommands.
#[derive(Subcommand)]
pub enum AdminAction {
    /// Log in as admin.
    Login {
        /// Username.
        username: String,

        /// Password.
        #[arg(long, short)]
        password: String,
    },

    /// Log out.
    Logout,

    /// Show the admin session.
    Status,

    /// Manage the API bearer token.
    Token {
        #[command(subcommand)]
        action: TokenAction,
    },

    /// Manage products.
    Products {
        #[command(subcommand)]
        action: AdminProductsAction,
    },

    /// Manage categories.
    Categories {
        #[command(subcommand)]
        action: AdminCategoriesAction,
    },
}

/// Token subcommands.
#[derive(Subcommand)]
pub enum TokenAction {
    /// Store a bearer token for API requests.
    Set {
        /// The token.
        token: String,
    },

    /// Remove the stored token.
    Clear,
}

/// Admin product subcommands.
#[derive(Subcommand)]
pub enum AdminProductsAction {
    /// Create a product.
    Create(PayloadArgs),

    /// Update a product.
    Update {
        /// Product ID.
        id: u64,

        #[command(flatten)]
        payload: PayloadArgs,
    },

    /// Delete a product.
    Delete {
        /// Product ID.
        id: u64,
    },

    /// Set stock for several products.
    ///
    /// Payload: `[{"id": 1, "stock_quantity": 10}, ...]` or
    /// `{"updates": [...]}`.
    BulkStock(PayloadArgs),
}

/// Admin category subcommands.
#[derive(Subcommand)]
pub enum AdminCategoriesAction {
    /// Create a category.
    Create(PayloadArgs),

    /// Update a category.
    Update {
        /// Category ID.
        id: u64,

        #[command(flatten)]
        payload: PayloadArgs,
    },

    /// Delete a category.
    Delete {
        /// Category ID.
        id: u64,
    },
}

/// JSON payload source.
#[derive(Args)]
pub struct PayloadArgs {
    /// Inline JSON payload.
    #[arg(long, short, conflicts_with = "file")]
    pub data: Option<String>,

    /// Read the JSON payload from a file.
    #[arg(long, value_name = "PATH")]
    pub file: Option<PathBuf>,
}

impl PayloadArgs {
    /// Parses the payload as `T`.
    pub fn parse<T: DeserializeOwned>(&self) -> Result<T> {
        read_payload(self.data.as_deref(), self.file.as_deref())
    }
}

// ============================================================================
// Guard
// ============================================================================

/// Error raised when the navigation guard refuses an admin command.
#[derive(Debug)]
pub struct GuardRedirect {
    /// Where the guard sends the user instead.
    pub target: Route,
}

impl fmt::Display for GuardRedirect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "admin login required (redirected to {}); run `mechkey admin login`",
            self.target
        )
    }
}

impl std::error::Error for GuardRedirect {}

/// Passes the admin catalog route through the guard.
fn require_admin(ctx: &AppContext) -> Result<(), GuardRedirect> {
    match resolve(Route::AdminProducts, &ctx.auth) {
        Navigation::Proceed(_) => Ok(()),
        Navigation::Redirect(target) => {
            warn!(target = %target, "Admin command refused");
            Err(GuardRedirect { target })
        }
    }
}

// ============================================================================
// Commands
// ============================================================================

/// Runs the admin command.
pub async fn run(args: &AdminArgs, cli: &Cli) -> Result<()> {
    let ctx = AppContext::from_cli(cli)?;

    match &args.action {
        AdminAction::Login { username, password } => {
            let outcome = ctx.auth.login(username, password);
            if !outcome.success {
                bail!("{}", outcome.message());
            }
            print_status(&ctx, cli)
        }
        AdminAction::Logout => {
            ctx.auth.logout();
            if cli.format == OutputFormat::Text {
                println!("Logged out");
            } else {
                print_status(&ctx, cli)?;
            }
            Ok(())
        }
        AdminAction::Status => print_status(&ctx, cli),
        AdminAction::Token { action } => {
            match action {
                TokenAction::Set { token } => {
                    ctx.client.set_token(token)?;
                    info!("API token stored");
                }
                TokenAction::Clear => {
                    ctx.client.clear_token()?;
                    info!("API token cleared");
                }
            }
            print_status(&ctx, cli)
        }
        AdminAction::Products { action } => {
            require_admin(&ctx)?;
            run_products(&ctx, action, cli).await
        }
        AdminAction::Categories { action } => {
            require_admin(&ctx)?;
            run_categories(&ctx, action, cli).await
        }
    }
}

async fn run_products(ctx: &AppContext, action: &AdminProductsAction, cli: &Cli) -> Result<()> {
    let api = ctx.client.admin_products();
    let formatter = TextFormatter::new(!cli.no_color);
    let json = JsonFormatter::new(cli.pretty);

    match action {
        AdminProductsAction::Create(payload) => {
            let input: ProductInput = payload.parse()?;
            let product = api.create(&input).await?;
            match cli.format {
                OutputFormat::Text => println!("{}", formatter.format_product_detail(&product)),
                OutputFormat::Json => println!("{}", json.format(&product)?),
            }
        }
        AdminProductsAction::Update { id, payload } => {
            let input: ProductInput = payload.parse()?;
            let product = api.update(*id, &input).await?;
            match cli.format {
                OutputFormat::Text => println!("{}", formatter.format_product_detail(&product)),
                OutputFormat::Json => println!("{}", json.format(&product)?),
            }
        }
        AdminProductsAction::Delete { id } => {
            let ack = api.delete(*id).await?;
            print_ack(&ack, &format!("Product {id} deleted"), cli)?;
        }
        AdminProductsAction::BulkStock(payload) => {
            let updates = payload.parse::<StockUpdates>()?.into_vec();
            if updates.is_empty() {
                bail!("no stock updates in payload");
            }
            let ack = api.bulk_update_stock(&updates).await?;
            print_ack(&ack, &format!("{} products updated", updates.len()), cli)?;
        }
    }
    Ok(())
}

async fn run_categories(
    ctx: &AppContext,
    action: &AdminCategoriesAction,
    cli: &Cli,
) -> Result<()> {
    let api = ctx.client.admin_categories();
    let formatter = TextFormatter::new(!cli.no_color);
    let json = JsonFormatter::new(cli.pretty);

    let category = match action {
        AdminCategoriesAction::Create(payload) => {
            let input: CategoryInput = payload.parse()?;
            api.create(&input).await?
        }
        AdminCategoriesAction::Update { id, payload } => {
            let input: CategoryInput = payload.parse()?;
            api.update(*id, &input).await?
        }
        AdminCategoriesAction::Delete { id } => {
            let ack = api.delete(*id).await?;
            return print_ack(&ack, &format!("Category {id} deleted"), cli);
        }
    };

    match cli.format {
        OutputFormat::Text => println!("{}", formatter.format_category_line(&category)),
        OutputFormat::Json => println!("{}", json.format(&category)?),
    }
    Ok(())
}

// ============================================================================
// Helpers
// ============================================================================

/// Bulk stock payload: a bare list or the request body shape.
#[derive(Deserialize)]
#[serde(untagged)]
enum StockUpdates {
    List(Vec<StockUpdate>),
    Body { updates: Vec<StockUpdate> },
}

impl StockUpdates {
    fn into_vec(self) -> Vec<StockUpdate> {
        match self {
            StockUpdates::List(updates) | StockUpdates::Body { updates } => updates,
        }
    }
}

/// Reads a JSON payload from inline text or a file.
fn read_payload<T: DeserializeOwned>(data: Option<&str>, file: Option<&Path>) -> Result<T> {
    let raw = match (data, file) {
        (Some(data), _) => data.to_string(),
        (None, Some(path)) => std::fs::read_to_string(path)
            .with_context(|| format!("cannot read payload file {}", path.display()))?,
        (None, None) => bail!("a payload is required: pass --data '<json>' or --file <path>"),
    };
    serde_json::from_str(&raw).context("payload is not valid JSON for this command")
}

fn print_status(ctx: &AppContext, cli: &Cli) -> Result<()> {
    let session = ctx.auth.session();
    let has_token = ctx.client.has_token()?;

    match cli.format {
        OutputFormat::Text => {
            let formatter = TextFormatter::new(!cli.no_color);
            println!("{}", formatter.format_session(&session, has_token));
            println!("API:       {}", ctx.config.api.base_url);
        }
        OutputFormat::Json => {
            let output = SessionOutput {
                session: &session,
                has_token,
            };
            println!("{}", JsonFormatter::new(cli.pretty).format(&output)?);
        }
    }
    Ok(())
}

fn print_ack(ack: &Acknowledgement, fallback: &str, cli: &Cli) -> Result<()> {
    match cli.format {
        OutputFormat::Text => {
            let message = ack.message.as_deref().unwrap_or(fallback);
            if ack.success {
                println!("✓ {message}");
            } else {
                println!("✗ {message}");
            }
        }
        OutputFormat::Json => println!("{}", JsonFormatter::new(cli.pretty).format(ack)?),
    }
    Ok(())
}
