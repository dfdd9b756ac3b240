//! Cart command - manage the local cart.

use anyhow::Result;
use clap::{Args, Subcommand};
use mechkey_core::CartLineItem;
use mechkey_store::{ActionOutcome, CartStore};
use serde::Serialize;
use tracing::debug;

use crate::context::AppContext;
use crate::output::{CartOutput, JsonFormatter, TextFormatter};
use crate::{Cli, OutputFormat};

/// Arguments for the cart command.
#[derive(Args)]
pub struct CartArgs {
    #[command(subcommand)]
    pub action: CartAction,
}

/// Cart subcommands.
#[derive(Subcommand)]
pub enum CartAction {
    /// Show cart contents and totals.
    Show,

    /// Add a product by slug.
    Add {
        /// Product slug.
        slug: String,

        /// Quantity to add.
        #[arg(long, short, default_value_t = 1)]
        quantity: u32,
    },

    /// Remove a product.
    #[command(visible_alias = "rm")]
    Remove {
        /// Product ID.
        id: u64,
    },

    /// Set the quantity of a product; zero or less removes it.
    Set {
        /// Product ID.
        id: u64,

        /// New quantity.
        #[arg(allow_negative_numbers = true)]
        quantity: i64,
    },

    /// Add one to a product's quantity.
    Inc {
        /// Product ID.
        id: u64,
    },

    /// Take one off a product's quantity.
    Dec {
        /// Product ID.
        id: u64,
    },

    /// Empty the cart.
    Clear,
}

/// JSON output for cart mutations.
#[derive(Serialize)]
struct CartActionOutput<'a> {
    #[serde(flatten)]
    outcome: &'a ActionOutcome,
    cart: CartOutput<'a>,
}

/// Runs the cart command.
pub async fn run(args: &CartArgs, cli: &Cli) -> Result<()> {
    let ctx = AppContext::from_cli(cli)?;
    let cart = &ctx.cart;

    let outcome = match &args.action {
        CartAction::Show => return print_cart(cart, cli),
        CartAction::Add { slug, quantity } => {
            let product = ctx.client.products().get_by_slug(slug, false).await?;
            debug!(product_id = product.id, "Product fetched for cart");
            cart.add_item(&product, *quantity)
        }
        CartAction::Remove { id } => cart.remove_item(*id),
        CartAction::Set { id, quantity } => {
            if cart.is_in_cart(*id) {
                cart.update_quantity(*id, *quantity);
                ActionOutcome::ok(format!("Quantity set to {}", cart.get_item_quantity(*id)))
            } else {
                ActionOutcome::fail("Item not found in cart")
            }
        }
        CartAction::Inc { id } => {
            let outcome = cart.increment_quantity(*id);
            if outcome.success && outcome.message.is_none() {
                ActionOutcome::ok(format!("Quantity is now {}", cart.get_item_quantity(*id)))
            } else {
                outcome
            }
        }
        CartAction::Dec { id } => {
            if cart.is_in_cart(*id) {
                cart.decrement_quantity(*id);
                match cart.get_item_quantity(*id) {
                    0 => ActionOutcome::ok("Item removed from cart"),
                    n => ActionOutcome::ok(format!("Quantity is now {n}")),
                }
            } else {
                ActionOutcome::fail("Item not found in cart")
            }
        }
        CartAction::Clear => {
            cart.clear_cart();
            ActionOutcome::ok("Cart cleared")
        }
    };

    print_outcome(cart, &outcome, cli)
}

fn cart_output<'a>(cart: &CartStore, items: &'a [CartLineItem]) -> CartOutput<'a> {
    CartOutput {
        items,
        item_count: cart.item_count(),
        total_price: cart.total_price(),
        formatted_total: cart.formatted_total(),
    }
}

fn print_cart(cart: &CartStore, cli: &Cli) -> Result<()> {
    let items = cart.items();
    match cli.format {
        OutputFormat::Text => {
            let formatter = TextFormatter::new(!cli.no_color);
            println!(
                "{}",
                formatter.format_cart(&items, cart.item_count(), &cart.formatted_total())
            );
        }
        OutputFormat::Json => {
            let output = cart_output(cart, &items);
            println!("{}", JsonFormatter::new(cli.pretty).format(&output)?);
        }
    }
    Ok(())
}

fn print_outcome(cart: &CartStore, outcome: &ActionOutcome, cli: &Cli) -> Result<()> {
    match cli.format {
        OutputFormat::Text => {
            let formatter = TextFormatter::new(!cli.no_color);
            println!("{}", formatter.format_outcome(outcome, "Done"));
            println!(
                "{} items, total {}",
                cart.item_count(),
                cart.formatted_total()
            );
        }
        OutputFormat::Json => {
            let items = cart.items();
            let output = CartActionOutput {
                outcome,
                cart: cart_output(cart, &items),
            };
            println!("{}", JsonFormatter::new(cli.pretty).format(&output)?);
        }
    }
    Ok(())
}
