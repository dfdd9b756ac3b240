//! Endpoint paths, parameters, and body shapes for the resource APIs.

mod support;

use std::sync::Arc;

use mechkey_core::{CategoryInput, MemoryStorage, ProductInput, StockUpdate, keys};
use mechkey_http::{ApiClient, ClientSettings, ProductFilters, SortOrder};
use serde_json::json;

use support::{CannedResponse, CannedServer};

fn client_for(server: &CannedServer) -> ApiClient {
    let storage = Arc::new(MemoryStorage::with_entries([(keys::AUTH_TOKEN, "admin-token")]));
    ApiClient::new(&ClientSettings::with_base_url(&server.base_url), storage).unwrap()
}

fn product_json(id: u64, slug: &str) -> serde_json::Value {
    json!({
        "id": id,
        "name": format!("Product {id}"),
        "slug": slug,
        "price": "1250000.00",
        "stock_quantity": 8,
        "in_stock": true,
        "category": {"id": 2, "name": "Keyboards", "slug": "keyboards"}
    })
}

// ============================================================================
// Products
// ============================================================================

#[tokio::test]
async fn test_list_sends_filters() {
    let server = CannedServer::start(vec![CannedResponse::json(
        200,
        json!({
            "data": [product_json(1, "tofu65"), product_json(2, "mode-sonnet")],
            "current_page": 1,
            "last_page": 3,
            "per_page": 2,
            "total": 6
        }),
    )])
    .await;
    let client = client_for(&server);

    let filters = ProductFilters {
        category: Some("keyboards".to_string()),
        size: Some("65%".to_string()),
        in_stock_only: true,
        sort_by: Some("price".to_string()),
        sort_order: Some(SortOrder::Asc),
        paginate: true,
        per_page: Some(2),
        ..ProductFilters::default()
    };
    let listing = client.products().list(&filters).await.unwrap();

    assert_eq!(listing.len(), 2);
    assert_eq!(listing.total(), Some(6));
    assert!((listing.products()[0].price - 1_250_000.0).abs() < f64::EPSILON);

    let request = server.single_request();
    assert_eq!(request.method, "GET");
    assert_eq!(request.path(), "/api/products");
    assert_eq!(request.query_value("category").as_deref(), Some("keyboards"));
    assert_eq!(request.query_value("size").as_deref(), Some("65%"));
    assert_eq!(request.query_value("in_stock_only").as_deref(), Some("1"));
    assert_eq!(request.query_value("sort_by").as_deref(), Some("price"));
    assert_eq!(request.query_value("sort_order").as_deref(), Some("asc"));
    assert_eq!(request.query_value("paginate").as_deref(), Some("1"));
    assert_eq!(request.query_value("per_page").as_deref(), Some("2"));
    assert_eq!(request.query_value("switch_type"), None);
}

#[tokio::test]
async fn test_list_accepts_bare_array() {
    let server = CannedServer::start(vec![CannedResponse::json(
        200,
        json!([product_json(1, "tofu65")]),
    )])
    .await;
    let client = client_for(&server);

    let listing = client.products().list(&ProductFilters::default()).await.unwrap();
    assert_eq!(listing.len(), 1);
    assert_eq!(listing.total(), None);
}

#[tokio::test]
async fn test_get_by_slug_unwraps_data() {
    let server = CannedServer::start(vec![CannedResponse::json(
        200,
        json!({"success": true, "data": product_json(7, "gateron-oil-king")}),
    )])
    .await;
    let client = client_for(&server);

    let product = client
        .products()
        .get_by_slug("gateron-oil-king", true)
        .await
        .unwrap();
    assert_eq!(product.id, 7);
    assert_eq!(product.category_name(), "Keyboards");

    let request = server.single_request();
    assert_eq!(request.path(), "/api/products/gateron-oil-king");
    assert_eq!(request.query_value("include_related").as_deref(), Some("1"));
}

#[tokio::test]
async fn test_get_by_slug_missing() {
    let server = CannedServer::start(vec![CannedResponse::json(
        404,
        json!({"message": "Product not found"}),
    )])
    .await;
    let client = client_for(&server);

    let err = client
        .products()
        .get_by_slug("nope", false)
        .await
        .unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(
        server.single_request().query_value("include_related").as_deref(),
        Some("0")
    );
}

#[tokio::test]
async fn test_search_sends_text() {
    let server = CannedServer::start(vec![CannedResponse::json(200, json!([]))]).await;
    let client = client_for(&server);

    let listing = client.products().search("lubed linear").await.unwrap();
    assert!(listing.is_empty());

    let request = server.single_request();
    assert_eq!(request.path(), "/api/products");
    assert_eq!(request.query_value("search").as_deref(), Some("lubed linear"));
}

// ============================================================================
// Categories
// ============================================================================

#[tokio::test]
async fn test_categories_list_unwraps_data() {
    let server = CannedServer::start(vec![CannedResponse::json(
        200,
        json!({"data": [
            {"id": 1, "name": "Keyboards", "slug": "keyboards", "products_count": 14},
            {"id": 2, "name": "Switches", "slug": "switches"}
        ]}),
    )])
    .await;
    let client = client_for(&server);

    let categories = client.categories().list().await.unwrap();
    assert_eq!(categories.len(), 2);
    assert_eq!(categories[0].products_count, Some(14));
    assert_eq!(server.single_request().path(), "/api/categories");
}

#[tokio::test]
async fn test_filter_options_for_category() {
    let server = CannedServer::start(vec![CannedResponse::json(
        200,
        json!({"data": {
            "sizes": ["60%", "65%"],
            "switch_types": ["Linear"],
            "price_range": {"min": 350000, "max": 4200000}
        }}),
    )])
    .await;
    let client = client_for(&server);

    let options = client
        .categories()
        .filter_options(Some("keyboards"))
        .await
        .unwrap();
    assert_eq!(options.sizes, vec!["60%", "65%"]);
    assert!(options.profiles.is_empty());
    assert!(options.price_range.is_some());

    let request = server.single_request();
    assert_eq!(request.path(), "/api/filter-options");
    assert_eq!(request.query_value("category").as_deref(), Some("keyboards"));
}

#[tokio::test]
async fn test_filter_options_without_category() {
    let server = CannedServer::start(vec![CannedResponse::json(200, json!({"sizes": []}))]).await;
    let client = client_for(&server);

    let options = client.categories().filter_options(None).await.unwrap();
    assert!(options.is_empty());
    assert!(server.single_request().query().is_empty());
}

// ============================================================================
// Admin
// ============================================================================

#[tokio::test]
async fn test_admin_create_product() {
    let server = CannedServer::start(vec![CannedResponse::json(
        201,
        json!({"success": true, "data": product_json(31, "new-board")}),
    )])
    .await;
    let client = client_for(&server);

    let input = ProductInput {
        name: Some("New Board".to_string()),
        price: Some(1_250_000.0),
        category_id: Some(2),
        stock_quantity: Some(8),
        ..ProductInput::default()
    };
    let product = client.admin_products().create(&input).await.unwrap();
    assert_eq!(product.id, 31);

    let request = server.single_request();
    assert_eq!(request.method, "POST");
    assert_eq!(request.path(), "/api/admin/products");
    assert_eq!(request.header("authorization"), Some("Bearer admin-token"));
    let body = request.json_body();
    assert_eq!(body["name"], "New Board");
    assert_eq!(body["category_id"], 2);
    assert!(body.get("slug").is_none());
}

#[tokio::test]
async fn test_admin_update_and_delete_product() {
    let server = CannedServer::start(vec![
        CannedResponse::json(200, json!({"data": product_json(31, "new-board")})),
        CannedResponse::json(200, json!({"success": true, "message": "Product deleted"})),
    ])
    .await;
    let client = client_for(&server);

    let input = ProductInput {
        stock_quantity: Some(0),
        ..ProductInput::default()
    };
    client.admin_products().update(31, &input).await.unwrap();
    let ack = client.admin_products().delete(31).await.unwrap();
    assert!(ack.success);
    assert_eq!(ack.message.as_deref(), Some("Product deleted"));

    let requests = server.requests();
    assert_eq!(requests[0].method, "PUT");
    assert_eq!(requests[0].path(), "/api/admin/products/31");
    assert_eq!(requests[0].json_body(), json!({"stock_quantity": 0}));
    assert_eq!(requests[1].method, "DELETE");
    assert_eq!(requests[1].path(), "/api/admin/products/31");
}

#[tokio::test]
async fn test_admin_bulk_update_stock() {
    let server =
        CannedServer::start(vec![CannedResponse::json(200, json!({"success": true}))]).await;
    let client = client_for(&server);

    let updates = [
        StockUpdate { id: 1, stock_quantity: 10 },
        StockUpdate { id: 4, stock_quantity: 0 },
    ];
    let ack = client
        .admin_products()
        .bulk_update_stock(&updates)
        .await
        .unwrap();
    assert!(ack.success);

    let request = server.single_request();
    assert_eq!(request.path(), "/api/admin/products/bulk-update-stock");
    assert_eq!(
        request.json_body(),
        json!({"updates": [
            {"id": 1, "stock_quantity": 10},
            {"id": 4, "stock_quantity": 0}
        ]})
    );
}

#[tokio::test]
async fn test_admin_category_mutations() {
    let server = CannedServer::start(vec![
        CannedResponse::json(
            201,
            json!({"data": {"id": 9, "name": "Deskmats", "slug": "deskmats"}}),
        ),
        CannedResponse::json(200, json!({"id": 9, "name": "Desk Mats", "slug": "deskmats"})),
        CannedResponse::empty(204),
    ])
    .await;
    let client = client_for(&server);

    let created = client
        .admin_categories()
        .create(&CategoryInput {
            name: Some("Deskmats".to_string()),
            ..CategoryInput::default()
        })
        .await
        .unwrap();
    assert_eq!(created.id, 9);

    let updated = client
        .admin_categories()
        .update(
            9,
            &CategoryInput {
                name: Some("Desk Mats".to_string()),
                ..CategoryInput::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.name, "Desk Mats");

    assert!(client.admin_categories().delete(9).await.unwrap().success);

    let methods: Vec<_> = server
        .requests()
        .iter()
        .map(|r| (r.method.clone(), r.path().to_string()))
        .collect();
    assert_eq!(
        methods,
        vec![
            ("POST".to_string(), "/api/admin/categories".to_string()),
            ("PUT".to_string(), "/api/admin/categories/9".to_string()),
            ("DELETE".to_string(), "/api/admin/categories/9".to_string()),
        ]
    );
}
