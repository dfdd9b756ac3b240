//! Integration tests for the navigation guard against a persisted session.

use mechkey_core::{
    AdminSession, AdminUser, KeyValueStorage, MemoryStorage, Navigation, Route, keys, load_json,
    resolve, save_json,
};

fn admin() -> AdminUser {
    AdminUser {
        username: "admin".to_string(),
        name: "Administrator".to_string(),
        email: "admin@mechkey.com".to_string(),
    }
}

#[test]
fn test_guard_follows_persisted_session() {
    let storage = MemoryStorage::new();

    // Nothing persisted yet: anonymous
    let session: AdminSession = load_json(&storage, keys::ADMIN_AUTH)
        .unwrap()
        .unwrap_or_default();
    let nav = resolve(Route::parse("/admin/products").unwrap(), &session);
    assert_eq!(nav, Navigation::Redirect(Route::AdminLogin));

    // Persist a login and reload
    save_json(&storage, keys::ADMIN_AUTH, &AdminSession::authenticated(admin())).unwrap();
    let session: AdminSession = load_json(&storage, keys::ADMIN_AUTH).unwrap().unwrap();
    let nav = resolve(Route::parse("/admin/products").unwrap(), &session);
    assert_eq!(nav, Navigation::Proceed(Route::AdminProducts));

    // Clear it again
    storage.remove(keys::ADMIN_AUTH).unwrap();
    let session: AdminSession = load_json(&storage, keys::ADMIN_AUTH)
        .unwrap()
        .unwrap_or_default();
    assert!(resolve(Route::Admin, &session).is_redirect());
    assert_eq!(resolve(Route::Admin, &session).target(), &Route::AdminLogin);
}

#[test]
fn test_route_display_matches_path() {
    let route = Route::ProductDetail {
        slug: "gmk-olivia".to_string(),
    };
    assert_eq!(route.to_string(), "/products/gmk-olivia");
    assert_eq!(route.name(), "product-detail");
    assert_eq!(Route::AdminProducts.title(), Some("Products Management"));
}
