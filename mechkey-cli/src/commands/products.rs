//! Products command - browse the catalog.

use anyhow::Result;
use clap::{Args, Subcommand};
use mechkey_core::ProductListing;
use mechkey_http::{ProductFilters, SortOrder};
use tracing::info;

use crate::context::AppContext;
use crate::output::{JsonFormatter, TextFormatter};
use crate::{Cli, OutputFormat};

/// Arguments for the products command.
#[derive(Args)]
pub struct ProductsArgs {
    #[command(subcommand)]
    pub action: ProductsAction,
}

/// Products subcommands.
#[derive(Subcommand)]
pub enum ProductsAction {
    /// List products matching filters.
    #[command(visible_alias = "ls")]
    List(ListArgs),

    /// Show a single product.
    Show {
        /// Product slug.
        slug: String,

        /// Include related products.
        #[arg(long)]
        related: bool,
    },

    /// Search products by text.
    Search {
        /// Search text.
        query: String,
    },
}

/// Filters for `products list`.
#[derive(Args, Default)]
pub struct ListArgs {
    /// Category slug.
    #[arg(long, short)]
    pub category: Option<String>,

    /// Keyboard size (e.g. "65%").
    #[arg(long)]
    pub size: Option<String>,

    /// Switch type.
    #[arg(long)]
    pub switch_type: Option<String>,

    /// Keycap profile.
    #[arg(long)]
    pub profile: Option<String>,

    /// Material.
    #[arg(long)]
    pub material: Option<String>,

    /// Accessory type.
    #[arg(long)]
    pub accessory_type: Option<String>,

    /// Minimum price in IDR.
    #[arg(long)]
    pub min_price: Option<f64>,

    /// Maximum price in IDR.
    #[arg(long)]
    pub max_price: Option<f64>,

    /// Only products in stock.
    #[arg(long)]
    pub in_stock: bool,

    /// Free-text search.
    #[arg(long, short)]
    pub search: Option<String>,

    /// Sort column (default: created_at).
    #[arg(long)]
    pub sort_by: Option<String>,

    /// Sort direction: asc or desc (default: desc).
    #[arg(long)]
    pub sort_order: Option<SortOrder>,

    /// Request a paginated response.
    #[arg(long)]
    pub paginate: bool,

    /// Page size (default: 12).
    #[arg(long)]
    pub per_page: Option<u32>,
}

impl ListArgs {
    /// Converts the flags into API filters.
    pub fn to_filters(&self) -> ProductFilters {
        ProductFilters {
            category: self.category.clone(),
            size: self.size.clone(),
            switch_type: self.switch_type.clone(),
            profile: self.profile.clone(),
            material: self.material.clone(),
            accessory_type: self.accessory_type.clone(),
            min_price: self.min_price,
            max_price: self.max_price,
            in_stock_only: self.in_stock,
            search: self.search.clone(),
            sort_by: self.sort_by.clone(),
            sort_order: self.sort_order,
            paginate: self.paginate,
            per_page: self.per_page,
        }
    }
}

/// Runs the products command.
pub async fn run(args: &ProductsArgs, cli: &Cli) -> Result<()> {
    let ctx = AppContext::from_cli(cli)?;

    match &args.action {
        ProductsAction::List(list) => {
            let filters = list.to_filters();
            info!(category = ?filters.category, "Listing products");
            let listing = ctx.client.products().list(&filters).await?;
            print_listing(&listing, cli)
        }
        ProductsAction::Show { slug, related } => {
            let product = ctx.client.products().get_by_slug(slug, *related).await?;
            match cli.format {
                OutputFormat::Text => {
                    let formatter = TextFormatter::new(!cli.no_color);
                    println!("{}", formatter.format_product_detail(&product));
                }
                OutputFormat::Json => {
                    println!("{}", JsonFormatter::new(cli.pretty).format(&product)?);
                }
            }
            Ok(())
        }
        ProductsAction::Search { query } => {
            let listing = ctx.client.products().search(query).await?;
            print_listing(&listing, cli)
        }
    }
}

fn print_listing(listing: &ProductListing, cli: &Cli) -> Result<()> {
    match cli.format {
        OutputFormat::Text => {
            let formatter = TextFormatter::new(!cli.no_color);
            if listing.is_empty() {
                println!("No products found");
                return Ok(());
            }
            println!("{}", formatter.format_products_header());
            for product in listing.products() {
                println!("{}", formatter.format_product_line(product));
            }
            println!();
            println!("{}", formatter.format_listing_footer(listing));
        }
        OutputFormat::Json => {
            println!("{}", JsonFormatter::new(cli.pretty).format(listing)?);
        }
    }
    Ok(())
}
