//! Integration tests for rhtmx-navigation
//!
//! Covers the public surface end to end:
//! - Route-string algebra (find / replace / remove params)
//! - Href rendering
//! - Navigation adapter (dual descriptors, options, fragment scroll reset)
//! - Link builder and click interpretation
//! - Mock router seeding and call recording
//! - Router provider binding

use std::sync::Arc;

use pretty_assertions::assert_eq;
use rhtmx_navigation::*;
use rstest::rstest;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_test_writer()
        .try_init();
}

// ============================================================================
// Route-String Algebra
// ============================================================================

#[rstest]
#[case("/posts/[id]", Some(query! { "id" => "1" }))]
#[case("/a/[x]/[y]", Some(query! { "x" => "1" }))]
#[case("/shop/[category]/[item]", Some(query! { "category" => "c", "item" => "i", "extra" => "e" }))]
#[case("/docs/[...slug]", Some(query! { "slug" => "a" }))]
#[case("", None)]
fn test_substituted_path_has_no_supplied_tokens(#[case] template: &str, #[case] values: Option<Query>) {
    let path = replace_params(template, values.as_ref());
    let remaining = find_params(&path);

    if let Some(values) = values {
        assert!(remaining.iter().all(|name| !values.contains_key(*name)));
    } else {
        assert_eq!(path, template);
    }
}

#[test]
fn test_partial_substitution() {
    assert_eq!(
        replace_params("/a/[x]/[y]", Some(&query! { "x" => "1" })),
        "/a/1/[y]"
    );
}

#[test]
fn test_remove_params_keeps_extra_keys() {
    assert_eq!(
        remove_params("/a/[id]", &query! { "id" => "5", "sort" => "asc" }),
        query! { "sort" => "asc" }
    );
}

#[test]
fn test_route_to_string_round_trip() {
    assert_eq!(route_to_string("", &Route::new("/settings")), "/settings");

    let route = Route::new("/users/[id]").with_query(query! { "id" => "1", "tab" => "info" });
    assert_eq!(route_to_string("", &route), "/users/1?tab=info");
}

// ============================================================================
// Navigation Adapter
// ============================================================================

#[tokio::test]
async fn test_push_route_dual_descriptors() {
    init_tracing();
    let router = create_mock_router(MockRouterOptions::new("/"));
    let route = Route::new("/users/[id]").with_query(query! { "id" => "1", "tab" => "info" });

    let ok = push_route(&router, &route, RouteOptions { shallow: true }).await;

    assert!(ok);
    assert_eq!(
        router.pushes(),
        vec![(
            Route::new("/users/[id]").with_query(query! { "id" => "1", "tab" => "info" }),
            Route::new("/users/1").with_query(query! { "tab" => "info" }),
            RouteOptions { shallow: true },
        )]
    );
    assert!(router.replaces().is_empty());
}

#[tokio::test]
async fn test_descriptors_serialize_like_router_objects() {
    let router = create_mock_router(MockRouterOptions::new("/"));
    let route = Route::new("/users/[id]").with_query(query! { "id" => "1", "tab" => "info" });

    replace_route(&router, &route, RouteOptions::default()).await;

    let (templated, concrete, options) = router.replaces().remove(0);
    assert_eq!(
        serde_json::to_value(&templated).unwrap(),
        serde_json::json!({ "pathname": "/users/[id]", "query": { "id": "1", "tab": "info" } })
    );
    assert_eq!(
        serde_json::to_string(&concrete).unwrap(),
        r#"{"pathname":"/users/1","query":{"tab":"info"}}"#
    );
    assert_eq!(serde_json::to_value(options).unwrap(), serde_json::json!({ "shallow": false }));
}

#[tokio::test]
async fn test_fragment_navigation_resets_scroll_and_focus() {
    init_tracing();
    let router = create_mock_router(MockRouterOptions::new("/docs"));

    push_route(&router, &Route::new("/docs#getting-started"), RouteOptions::default()).await;

    assert_eq!(router.scroll_resets(), 1);
    assert_eq!(router.focus_resets(), 1);
}

#[tokio::test]
async fn test_concurrent_navigations_each_reach_router() {
    let router = Arc::new(create_mock_router(MockRouterOptions::new("/")));
    let first = Route::new("/a");
    let second = Route::new("/b");

    let (a, b) = futures::join!(
        push_route(&*router, &first, RouteOptions::default()),
        replace_route(&*router, &second, RouteOptions::default()),
    );

    assert!(a && b);
    assert_eq!(router.calls().len(), 2);
}

// ============================================================================
// Links & Clicks
// ============================================================================

#[tokio::test]
async fn test_link_end_to_end() {
    let router = Arc::new(create_mock_router(
        MockRouterOptions::new("/posts/[id]")
            .with_query(query! { "id" => "1" })
            .with_base_path("/blog"),
    ));
    let link = create_link(
        Arc::clone(&router),
        Route::new("/posts/[id]").with_query(query! { "id" => "2", "ref" => "related" }),
        RouteOptions::default(),
    );

    assert!(link.is_active);
    assert_eq!(link.href, "/blog/posts/2?ref=related");

    let mut modified = ClickEvent::primary().with_meta();
    assert!(link.on_click(&mut modified).is_none());
    assert!(!modified.default_prevented());
    assert!(router.calls().is_empty());

    let mut plain = ClickEvent::primary();
    let navigation = link.on_click(&mut plain).expect("plain click navigates");
    assert!(plain.default_prevented());
    assert!(navigation.await);

    let pushes = router.pushes();
    assert_eq!(pushes.len(), 1);
    assert_eq!(pushes[0].1.pathname, "/posts/2");
    assert_eq!(pushes[0].1.query, Some(query! { "ref" => "related" }));
}

#[rstest]
#[case(ClickEvent::primary().with_ctrl())]
#[case(ClickEvent::primary().with_shift())]
#[case(ClickEvent::primary().with_target("_top"))]
#[case(ClickEvent::primary().with_button(MouseButton::Auxiliary))]
fn test_new_context_clicks_do_not_navigate(#[case] mut event: ClickEvent) {
    let router = Arc::new(create_mock_router(MockRouterOptions::new("/")));
    let handler = create_click_handler(Arc::clone(&router), Route::new("/about"), RouteOptions::default());

    assert!(handler.handle(&mut event).is_none());
    assert!(!event.default_prevented());
    assert!(router.calls().is_empty());
}

// ============================================================================
// Mock Router
// ============================================================================

#[test]
fn test_mock_router_seed() {
    let router = create_mock_router(
        MockRouterOptions::new("/admin/requests/[uuid]")
            .with_query(query! { "uuid" => "1", "hash" => "12345" }),
    );

    assert_eq!(router.as_path(), "/admin/requests/1?hash=12345");
    assert_eq!(router.route(), "/admin/requests/[uuid]");
    assert_eq!(router.pathname(), "/admin/requests/[uuid]");
}

#[tokio::test]
async fn test_mock_router_push_is_spyable_and_static() {
    let router = create_mock_router(
        MockRouterOptions::new("/admin/requests/[uuid]")
            .with_query(query! { "uuid" => "1", "hash" => "12345" }),
    );
    let templated = Route::new("/x/[y]").with_param("y", "z");
    let concrete = Route::new("/x/z").with_query(Query::new());

    assert!(router.push(&templated, &concrete, &RouteOptions::shallow()).await);

    assert_eq!(
        router.calls(),
        vec![RecordedNavigation::Push {
            templated,
            concrete,
            options: RouteOptions::shallow(),
        }]
    );
    assert_eq!(router.as_path(), "/admin/requests/1?hash=12345");
    assert_eq!(router.route(), "/admin/requests/[uuid]");
    assert_eq!(router.query(), &query! { "uuid" => "1", "hash" => "12345" });
}

#[test]
fn test_mock_router_events_surface() {
    let router = create_mock_router(MockRouterOptions::new("/"));
    let id = router.events().on(RouterEvent::RouteChangeComplete, |_| {});

    assert_eq!(router.events().listener_count(RouterEvent::RouteChangeComplete), 1);
    assert!(router.events().off(RouterEvent::RouteChangeComplete, id));
    assert_eq!(router.events().listener_count(RouterEvent::RouteChangeComplete), 0);
}

// ============================================================================
// Router Provider
// ============================================================================

#[tokio::test]
async fn test_provider_over_mock_router() {
    let router = Arc::new(create_mock_router(
        MockRouterOptions::new("/users/[id]").with_query(query! { "id" => "9" }),
    ));
    let provider = RouterProvider::bound(router.clone());

    assert_eq!(provider.required_param("id").unwrap(), "9");
    assert!(matches!(
        provider.required_param("tab"),
        Err(NavigationError::MissingParam { ref key, .. }) if key == "tab"
    ));

    let link = provider.link(Route::new("/users/[id]").with_param("id", "10"), None).unwrap();
    assert!(link.is_active);
    assert!(link.push().await);
    assert_eq!(router.pushes()[0].1.pathname, "/users/10");
}

#[test]
fn test_unbound_provider_error() {
    let provider = RouterProvider::new();
    let err = provider.router().err().expect("unbound provider errors");
    assert_eq!(err, NavigationError::RouterNotBound);
}
