//! Route command - resolve a storefront path through the navigation guard.

use std::sync::Arc;

use anyhow::{Context, Result, anyhow};
use clap::Args;
use mechkey_core::{Route, resolve};
use mechkey_http::build_query_string;
use mechkey_store::{AuthStore, FileStorage};
use tracing::debug;

use crate::context::load_config;
use crate::output::{JsonFormatter, NavigationOutput, TextFormatter};
use crate::{Cli, OutputFormat};

/// Arguments for the route command.
#[derive(Args)]
pub struct RouteArgs {
    /// Storefront path, e.g. `/admin/products` or `/products/tofu65`.
    pub path: String,

    /// Query parameter to carry along (repeatable).
    #[arg(long, short, value_name = "KEY=VALUE", value_parser = parse_query_pair)]
    pub query: Vec<(String, String)>,
}

/// Runs the route command.
pub fn run(args: &RouteArgs, cli: &Cli) -> Result<()> {
    let route = Route::parse(&args.path).ok_or_else(|| anyhow!("unknown route: {}", args.path))?;

    let config = load_config(cli)?;
    let data_dir = config.data_dir();
    let storage = FileStorage::open(&data_dir)
        .with_context(|| format!("cannot open data directory {}", data_dir.display()))?;
    let auth = AuthStore::load(Arc::new(storage));

    let requested = requested_path(&route, &args.query);
    let navigation = resolve(route, &auth);
    debug!(requested = %requested, target = %navigation.target(), "Route resolved");

    match cli.format {
        OutputFormat::Text => {
            let formatter = TextFormatter::new(!cli.no_color);
            println!("{}", formatter.format_navigation(&requested, &navigation));
        }
        OutputFormat::Json => {
            let output = NavigationOutput::new(&requested, &navigation);
            println!("{}", JsonFormatter::new(cli.pretty).format(&output)?);
        }
    }

    Ok(())
}

/// Canonical path plus the non-empty query parameters.
fn requested_path(route: &Route, query: &[(String, String)]) -> String {
    let query = build_query_string(query.iter().map(|(k, v)| (k.as_str(), v.as_str())));
    if query.is_empty() {
        route.path()
    } else {
        format!("{}?{query}", route.path())
    }
}

fn parse_query_pair(raw: &str) -> Result<(String, String), String> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=VALUE, got `{raw}`"))?;
    if key.is_empty() {
        return Err(format!("empty key in `{raw}`"));
    }
    Ok((key.to_string(), value.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_query_pair() {
        assert_eq!(
            parse_query_pair("category=switches").unwrap(),
            ("category".to_string(), "switches".to_string())
        );
        assert_eq!(
            parse_query_pair("search=").unwrap(),
            ("search".to_string(), String::new())
        );
        assert!(parse_query_pair("category").is_err());
        assert!(parse_query_pair("=x").is_err());
    }

    #[test]
    fn test_requested_path_drops_empty_values() {
        let query = vec![
            ("category".to_string(), "switches".to_string()),
            ("search".to_string(), String::new()),
            ("in_stock".to_string(), "true".to_string()),
        ];
        assert_eq!(
            requested_path(&Route::Products, &query),
            "/products?category=switches&in_stock=true"
        );
        assert_eq!(requested_path(&Route::Admin, &[]), "/admin");
    }
}
