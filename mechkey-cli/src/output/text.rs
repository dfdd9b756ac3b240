//! Text output formatting with colors.

use mechkey_core::{
    AdminSession, CartLineItem, Category, FilterOptions, Navigation, Product, ProductListing,
    format_idr,
};
use mechkey_store::ActionOutcome;

// ============================================================================
// ANSI Colors
// ============================================================================

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";
const GREEN: &str = "\x1b[32m";
const YELLOW: &str = "\x1b[33m";
const RED: &str = "\x1b[31m";
const CYAN: &str = "\x1b[36m";

/// Width of the name column in tables.
const NAME_WIDTH: usize = 36;

/// Text formatter with optional colors.
pub struct TextFormatter {
    use_colors: bool,
}

impl TextFormatter {
    /// Creates a new text formatter.
    pub fn new(use_colors: bool) -> Self {
        Self { use_colors }
    }

    // ========================================================================
    // Catalog
    // ========================================================================

    /// Formats the product table header.
    pub fn format_products_header(&self) -> String {
        self.bold(&format!(
            "{:>5}  {:<width$}  {:>14}  {}",
            "ID",
            "Name",
            "Price",
            "Stock",
            width = NAME_WIDTH
        ))
    }

    /// Formats one product table row.
    pub fn format_product_line(&self, product: &Product) -> String {
        format!(
            "{:>5}  {:<width$}  {:>14}  {}",
            product.id,
            truncate(&product.name, NAME_WIDTH),
            format_idr(product.price),
            self.stock_label(product),
            width = NAME_WIDTH
        )
    }

    /// Formats the line under a product table.
    pub fn format_listing_footer(&self, listing: &ProductListing) -> String {
        match listing {
            ProductListing::Paginated(page) => {
                let mut footer = format!("{} shown", page.data.len());
                if let Some(total) = page.total {
                    footer.push_str(&format!(" of {total}"));
                }
                if let (Some(current), Some(last)) = (page.current_page, page.last_page) {
                    footer.push_str(&format!(" (page {current}/{last})"));
                }
                self.dim(&footer)
            }
            ProductListing::List(items) => self.dim(&format!("{} products", items.len())),
        }
    }

    /// Formats a product detail view.
    pub fn format_product_detail(&self, product: &Product) -> String {
        let mut lines = vec![
            self.bold(&product.name),
            format!("Price:    {}", self.cyan(&format_idr(product.price))),
            format!("Stock:    {}", self.stock_label(product)),
        ];

        if let Some(category) = &product.category {
            lines.push(format!("Category: {}", category.name));
        }

        let specs = [
            ("Size", &product.size),
            ("Switch", &product.switch_type),
            ("Profile", &product.profile),
            ("Material", &product.material),
            ("Type", &product.accessory_type),
        ];
        for (label, value) in specs {
            if let Some(value) = value.as_deref().filter(|v| !v.is_empty()) {
                lines.push(format!("{:<9} {value}", format!("{label}:")));
            }
        }

        lines.push(self.dim(&format!("/products/{}", product.slug)));

        if let Some(description) = product.description.as_deref().filter(|d| !d.is_empty()) {
            lines.push(String::new());
            lines.push(description.to_string());
        }

        if !product.related_products.is_empty() {
            lines.push(String::new());
            lines.push(self.bold("Related"));
            for related in &product.related_products {
                lines.push(format!(
                    "  {} {}",
                    related.name,
                    self.dim(&format!("({})", format_idr(related.price)))
                ));
            }
        }

        lines.join("\n")
    }

    /// Formats one category row.
    pub fn format_category_line(&self, category: &Category) -> String {
        let count = category
            .products_count
            .map(|n| self.dim(&format!("{n} products")))
            .unwrap_or_default();
        format!("{:>4}  {:<24} {:<24} {count}", category.id, category.name, category.slug)
            .trim_end()
            .to_string()
    }

    /// Formats filter facets.
    pub fn format_filter_options(&self, options: &FilterOptions) -> String {
        if options.is_empty() {
            return self.dim("No filters available");
        }

        let facets = [
            ("Sizes", &options.sizes),
            ("Switch types", &options.switch_types),
            ("Profiles", &options.profiles),
            ("Materials", &options.materials),
            ("Accessory types", &options.accessory_types),
        ];

        let mut lines: Vec<String> = facets
            .iter()
            .filter(|(_, values)| !values.is_empty())
            .map(|(label, values)| format!("{:<16} {}", format!("{label}:"), values.join(", ")))
            .collect();

        if let Some(range) = options.price_range {
            lines.push(format!(
                "{:<16} {} - {}",
                "Price:",
                format_idr(range.min),
                format_idr(range.max)
            ));
        }

        lines.join("\n")
    }

    // ========================================================================
    // Cart
    // ========================================================================

    /// Formats the cart contents with totals.
    pub fn format_cart(&self, items: &[CartLineItem], item_count: u64, total: &str) -> String {
        if items.is_empty() {
            return self.dim("Your cart is empty");
        }

        let mut lines = Vec::with_capacity(items.len() + 2);
        for item in items {
            let ceiling = if item.is_at_ceiling() {
                format!(" {}", self.yellow("(max)"))
            } else {
                String::new()
            };
            lines.push(format!(
                "{:>5}  {:<width$}  {:>3} x {:>12}  {:>14}{ceiling}",
                item.id,
                truncate(&item.name, NAME_WIDTH),
                item.quantity,
                format_idr(item.price),
                format_idr(item.line_total()),
                width = NAME_WIDTH
            ));
        }
        lines.push("─".repeat(NAME_WIDTH + 44));
        lines.push(format!(
            "{} items, total {}",
            item_count,
            self.bold(total)
        ));
        lines.join("\n")
    }

    /// Formats the outcome of a store action.
    pub fn format_outcome(&self, outcome: &ActionOutcome, fallback: &str) -> String {
        let message = outcome.message.as_deref().unwrap_or(fallback);
        if outcome.success {
            format!("{} {message}", self.green("✓"))
        } else {
            format!("{} {message}", self.yellow("✗"))
        }
    }

    // ========================================================================
    // Session & Routing
    // ========================================================================

    /// Formats the admin session.
    pub fn format_session(&self, session: &AdminSession, has_token: bool) -> String {
        let mut lines = Vec::new();
        match (&session.admin_user, session.is_authenticated) {
            (Some(user), true) => {
                lines.push(format!("{} {}", self.green("●"), self.bold("Logged in")));
                lines.push(format!("User:     {} ({})", user.name, user.username));
                lines.push(format!("Email:    {}", user.email));
                if let Some(at) = session.logged_in_at {
                    lines.push(format!("Since:    {}", at.format("%Y-%m-%d %H:%M UTC")));
                }
            }
            (None, true) => lines.push(format!("{} {}", self.green("●"), self.bold("Logged in"))),
            (_, false) => lines.push(format!("{} Not logged in", self.dim("○"))),
        }
        let token = if has_token { "stored" } else { "none" };
        lines.push(format!("API token: {token}"));
        lines.join("\n")
    }

    /// Formats a navigation outcome.
    pub fn format_navigation(&self, requested: &str, navigation: &Navigation) -> String {
        let target = navigation.target();
        let title = target
            .title()
            .map(|t| format!(" {}", self.dim(&format!("({t})"))))
            .unwrap_or_default();
        match navigation {
            Navigation::Proceed(_) => {
                format!("{} {requested} -> {}{title}", self.green("→"), target.name())
            }
            Navigation::Redirect(_) => {
                format!(
                    "{} {requested} redirects to {}{title}",
                    self.yellow("↪"),
                    self.bold(&target.path())
                )
            }
        }
    }

    // ========================================================================
    // Helpers
    // ========================================================================

    fn stock_label(&self, product: &Product) -> String {
        let backend_label = product
            .stock_status
            .as_ref()
            .and_then(|s| s.label.clone().map(|label| (label, s.color.clone())));

        if let Some((label, color)) = backend_label {
            return match color.as_deref() {
                Some("green") => self.green(&label),
                Some("yellow") => self.yellow(&label),
                Some("red") => self.red(&label),
                _ => label,
            };
        }

        match (product.in_stock, product.stock_quantity) {
            (false, _) | (_, Some(0)) => self.red("Out of stock"),
            (true, Some(n)) => self.green(&format!("{n} in stock")),
            (true, None) => self.green("In stock"),
        }
    }

    fn bold(&self, text: &str) -> String {
        self.paint(BOLD, text)
    }

    fn dim(&self, text: &str) -> String {
        self.paint(DIM, text)
    }

    fn green(&self, text: &str) -> String {
        self.paint(GREEN, text)
    }

    fn yellow(&self, text: &str) -> String {
        self.paint(YELLOW, text)
    }

    fn red(&self, text: &str) -> String {
        self.paint(RED, text)
    }

    fn cyan(&self, text: &str) -> String {
        self.paint(CYAN, text)
    }

    fn paint(&self, code: &str, text: &str) -> String {
        if self.use_colors {
            format!("{code}{text}{RESET}")
        } else {
            text.to_string()
        }
    }
}

/// Shortens `text` to `max` characters, ending with an ellipsis.
fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let kept: String = text.chars().take(max.saturating_sub(1)).collect();
    format!("{kept}…")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Tofu65", 10), "Tofu65");
        assert_eq!(truncate("GMK Olivia++ Light Base Kit", 10), "GMK Olivi…");
    }

    #[test]
    fn test_paint_without_colors() {
        let formatter = TextFormatter::new(false);
        assert_eq!(formatter.green("ok"), "ok");
    }

    #[test]
    fn test_paint_with_colors() {
        let formatter = TextFormatter::new(true);
        assert_eq!(formatter.red("no"), "\x1b[31mno\x1b[0m");
    }
}
