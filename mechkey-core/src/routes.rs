//! Client-side route table and the admin navigation guard.
//!
//! | Path                           | Route                      | Guarded |
//! |--------------------------------|----------------------------|---------|
//! | `/`                            | [`Route::Home`]            | no      |
//! | `/products`                    | [`Route::Products`]        | no      |
//! | `/products/{slug}`             | [`Route::ProductDetail`]   | no      |
//! | `/checkout`                    | [`Route::Checkout`]        | no      |
//! | `/order-success/{orderNumber}` | [`Route::OrderSuccess`]    | no      |
//! | `/admin/login`                 | [`Route::AdminLogin`]      | no      |
//! | `/admin`                       | [`Route::Admin`]           | yes     |
//! | `/admin/products`              | [`Route::AdminProducts`]   | yes     |

use std::fmt;

use crate::traits::SessionState;

/// A client-side route.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Route {
    /// Landing page.
    Home,
    /// Product browsing and filtering.
    Products,
    /// A single product.
    ProductDetail {
        /// Product slug.
        slug: String,
    },
    /// Checkout form.
    Checkout,
    /// Order confirmation.
    OrderSuccess {
        /// Order number issued by the backend.
        order_number: String,
    },
    /// Admin login form.
    AdminLogin,
    /// Admin layout root; forwards to [`Route::AdminProducts`].
    Admin,
    /// Product management.
    AdminProducts,
}

impl Route {
    /// Parses a path into a route. Query strings and fragments are ignored.
    ///
    /// Returns `None` for paths outside the route table.
    pub fn parse(path: &str) -> Option<Self> {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        let route = match segments.as_slice() {
            [] => Self::Home,
            ["products"] => Self::Products,
            ["products", slug] => Self::ProductDetail {
                slug: (*slug).to_string(),
            },
            ["checkout"] => Self::Checkout,
            ["order-success", number] => Self::OrderSuccess {
                order_number: (*number).to_string(),
            },
            ["admin", "login"] => Self::AdminLogin,
            ["admin"] => Self::Admin,
            ["admin", "products"] => Self::AdminProducts,
            _ => return None,
        };
        Some(route)
    }

    /// Returns the canonical path for this route.
    pub fn path(&self) -> String {
        match self {
            Self::Home => "/".to_string(),
            Self::Products => "/products".to_string(),
            Self::ProductDetail { slug } => format!("/products/{slug}"),
            Self::Checkout => "/checkout".to_string(),
            Self::OrderSuccess { order_number } => format!("/order-success/{order_number}"),
            Self::AdminLogin => "/admin/login".to_string(),
            Self::Admin => "/admin".to_string(),
            Self::AdminProducts => "/admin/products".to_string(),
        }
    }

    /// Returns the route name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Products => "products",
            Self::ProductDetail { .. } => "product-detail",
            Self::Checkout => "checkout",
            Self::OrderSuccess { .. } => "order-success",
            Self::AdminLogin => "admin-login",
            Self::Admin => "admin",
            Self::AdminProducts => "admin-products",
        }
    }

    /// Returns the page title, for routes that declare one.
    pub fn title(&self) -> Option<&'static str> {
        match self {
            Self::AdminProducts => Some("Products Management"),
            _ => None,
        }
    }

    /// Returns true if the route is only reachable with an admin session.
    pub fn requires_auth(&self) -> bool {
        matches!(self, Self::Admin | Self::AdminProducts)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

/// Outcome of resolving a navigation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation {
    /// Render the requested route.
    Proceed(Route),
    /// Navigate to a different route instead.
    Redirect(Route),
}

impl Navigation {
    /// Returns the route that will actually be shown.
    pub fn target(&self) -> &Route {
        match self {
            Self::Proceed(route) | Self::Redirect(route) => route,
        }
    }

    /// Returns true if navigation was diverted.
    pub fn is_redirect(&self) -> bool {
        matches!(self, Self::Redirect(_))
    }
}

/// Resolves a navigation request against the admin session.
///
/// Guarded routes redirect to `/admin/login` while the session is anonymous.
/// `/admin` itself forwards to `/admin/products` once authenticated.
pub fn resolve<S>(route: Route, session: &S) -> Navigation
where
    S: SessionState + ?Sized,
{
    if route.requires_auth() && !session.is_authenticated() {
        return Navigation::Redirect(Route::AdminLogin);
    }

    match route {
        Route::Admin => Navigation::Redirect(Route::AdminProducts),
        other => Navigation::Proceed(other),
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed(bool);

    impl SessionState for Fixed {
        fn is_authenticated(&self) -> bool {
            self.0
        }
    }

    #[test]
    fn test_parse_all_routes() {
        let cases = [
            ("/", Route::Home),
            ("/products", Route::Products),
            (
                "/products/gmk-olivia",
                Route::ProductDetail {
                    slug: "gmk-olivia".to_string(),
                },
            ),
            ("/checkout", Route::Checkout),
            (
                "/order-success/ORD-20240101-0001",
                Route::OrderSuccess {
                    order_number: "ORD-20240101-0001".to_string(),
                },
            ),
            ("/admin/login", Route::AdminLogin),
            ("/admin", Route::Admin),
            ("/admin/products", Route::AdminProducts),
        ];

        for (path, expected) in cases {
            let parsed = Route::parse(path).unwrap();
            assert_eq!(parsed, expected, "Failed for {path}");
            assert_eq!(parsed.path(), path);
        }
    }

    #[test]
    fn test_parse_ignores_query_and_trailing_slash() {
        assert_eq!(Route::parse("/products?category=switches"), Some(Route::Products));
        assert_eq!(Route::parse("/admin/"), Some(Route::Admin));
        assert_eq!(Route::parse(""), Some(Route::Home));
    }

    #[test]
    fn test_parse_unknown() {
        assert_eq!(Route::parse("/admin/categories"), None);
        assert_eq!(Route::parse("/products/a/b"), None);
    }

    #[test]
    fn test_guard_redirects_anonymous() {
        let nav = resolve(Route::AdminProducts, &Fixed(false));
        assert_eq!(nav, Navigation::Redirect(Route::AdminLogin));

        let nav = resolve(Route::Admin, &Fixed(false));
        assert_eq!(nav.target(), &Route::AdminLogin);
    }

    #[test]
    fn test_guard_allows_authenticated() {
        let nav = resolve(Route::AdminProducts, &Fixed(true));
        assert_eq!(nav, Navigation::Proceed(Route::AdminProducts));
        assert!(!nav.is_redirect());
    }

    #[test]
    fn test_admin_root_forwards_to_products() {
        let nav = resolve(Route::Admin, &Fixed(true));
        assert_eq!(nav, Navigation::Redirect(Route::AdminProducts));
    }

    #[test]
    fn test_public_routes_never_redirect() {
        for route in [Route::Home, Route::Products, Route::Checkout, Route::AdminLogin] {
            assert!(!route.requires_auth());
            assert_eq!(resolve(route.clone(), &Fixed(false)), Navigation::Proceed(route));
        }
    }
}
