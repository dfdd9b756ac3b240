//! Serde tests for payloads as the storefront backend actually sends them.
//!
//! These cover the loose shapes the backend produces (string prices, nulls,
//! missing optional fields) and the persisted cart/session formats.

use serde_json::json;

use crate::{AdminSession, AdminUser, CartLineItem, Category, Product, ProductListing, StockUpdate};

// ============================================================================
// Product Payloads
// ============================================================================

#[test]
fn test_product_full_payload() {
    let payload = json!({
        "id": 12,
        "name": "Keychron Q1",
        "slug": "keychron-q1",
        "description": "Gasket-mount 75% aluminium board",
        "price": "2850000.00",
        "image": "https://cdn.example.com/q1.jpg",
        "category": {"id": 1, "name": "Keyboards", "slug": "keyboards"},
        "stock_quantity": 8,
        "in_stock": true,
        "stock_status": {"status": "in_stock", "label": "In Stock", "color": "green"},
        "size": "75%",
        "switch_type": null,
        "material": "aluminium",
        "created_at": "2024-05-01T10:00:00Z"
    });

    let product: Product = serde_json::from_value(payload).unwrap();
    assert_eq!(product.slug, "keychron-q1");
    assert_eq!(product.category_name(), "Keyboards");
    assert_eq!(product.stock_quantity, Some(8));
    assert_eq!(product.size.as_deref(), Some("75%"));
    assert!(product.switch_type.is_none());
    assert_eq!(
        product.stock_status.unwrap().color.as_deref(),
        Some("green")
    );
}

#[test]
fn test_product_null_stock() {
    let payload = json!({
        "id": 3, "name": "Lube", "slug": "lube", "price": 65000,
        "stock_quantity": null, "in_stock": true
    });
    let product: Product = serde_json::from_value(payload).unwrap();
    assert_eq!(product.stock_ceiling(), None);
}

#[test]
fn test_product_with_related() {
    let payload = json!({
        "id": 1, "name": "A", "slug": "a", "price": 1,
        "related_products": [{"id": 2, "name": "B", "slug": "b", "price": 2}]
    });
    let product: Product = serde_json::from_value(payload).unwrap();
    assert_eq!(product.related_products.len(), 1);
    assert_eq!(product.related_products[0].slug, "b");
}

#[test]
fn test_product_missing_required_field() {
    let payload = json!({"id": 1, "name": "No slug", "price": 1});
    assert!(serde_json::from_value::<Product>(payload).is_err());
}

#[test]
fn test_empty_listing() {
    let listing: ProductListing = serde_json::from_value(json!([])).unwrap();
    assert!(listing.is_empty());
}

#[test]
fn test_category_payload() {
    let payload = json!({"id": 2, "name": "Switches", "slug": "switches", "products_count": 14});
    let category: Category = serde_json::from_value(payload).unwrap();
    assert_eq!(category.products_count, Some(14));
    assert!(category.description.is_none());
}

// ============================================================================
// Persisted Formats
// ============================================================================

#[test]
fn test_cart_line_item_persisted_shape() {
    let item = CartLineItem {
        id: 1,
        name: "Gateron Ink Black".to_string(),
        slug: "gateron-ink-black".to_string(),
        price: 50_000.0,
        image: None,
        category: "Switches".to_string(),
        quantity: 2,
        stock_quantity: Some(10),
        in_stock: true,
    };

    let value = serde_json::to_value(&item).unwrap();
    assert_eq!(value["stock_quantity"], 10);
    assert_eq!(value["in_stock"], true);
    assert_eq!(value["category"], "Switches");

    let back: CartLineItem = serde_json::from_value(value).unwrap();
    assert_eq!(back, item);
}

#[test]
fn test_cart_line_item_legacy_without_optional_fields() {
    let payload = json!({"id": 5, "name": "Stabs", "slug": "stabs", "price": 120000, "quantity": 1});
    let item: CartLineItem = serde_json::from_value(payload).unwrap();
    assert_eq!(item.stock_quantity, None);
    assert_eq!(item.category, "");
}

#[test]
fn test_admin_session_roundtrip() {
    let session = AdminSession::authenticated(AdminUser {
        username: "admin".to_string(),
        name: "Administrator".to_string(),
        email: "admin@mechkey.com".to_string(),
    });

    let json = serde_json::to_string(&session).unwrap();
    let back: AdminSession = serde_json::from_str(&json).unwrap();
    assert_eq!(back, session);
}

#[test]
fn test_stock_update_shape() {
    let update = StockUpdate {
        id: 9,
        stock_quantity: 40,
    };
    assert_eq!(
        serde_json::to_value(update).unwrap(),
        json!({"id": 9, "stock_quantity": 40})
    );
}
