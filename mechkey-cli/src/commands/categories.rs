//! Categories command - list categories and filter facets.

use anyhow::Result;
use clap::{Args, Subcommand};

use crate::context::AppContext;
use crate::output::{JsonFormatter, TextFormatter};
use crate::{Cli, OutputFormat};

/// Arguments for the categories command.
#[derive(Args)]
pub struct CategoriesArgs {
    #[command(subcommand)]
    pub action: CategoriesAction,
}

/// Categories subcommands.
#[derive(Subcommand)]
pub enum CategoriesAction {
    /// List all categories.
    #[command(visible_alias = "ls")]
    List,

    /// Show filter facets, optionally for one category.
    Filters {
        /// Category slug.
        #[arg(long, short)]
        category: Option<String>,
    },
}

/// Runs the categories command.
pub async fn run(args: &CategoriesArgs, cli: &Cli) -> Result<()> {
    let ctx = AppContext::from_cli(cli)?;
    let formatter = TextFormatter::new(!cli.no_color);
    let json = JsonFormatter::new(cli.pretty);

    match &args.action {
        CategoriesAction::List => {
            let categories = ctx.client.categories().list().await?;
            match cli.format {
                OutputFormat::Text => {
                    if categories.is_empty() {
                        println!("No categories");
                    }
                    for category in &categories {
                        println!("{}", formatter.format_category_line(category));
                    }
                }
                OutputFormat::Json => println!("{}", json.format(&categories)?),
            }
        }
        CategoriesAction::Filters { category } => {
            let options = ctx
                .client
                .categories()
                .filter_options(category.as_deref())
                .await?;
            match cli.format {
                OutputFormat::Text => println!("{}", formatter.format_filter_options(&options)),
                OutputFormat::Json => println!("{}", json.format(&options)?),
            }
        }
    }

    Ok(())
}
