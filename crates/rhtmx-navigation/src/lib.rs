//! # RHTMX Navigation
//!
//! Typed navigation on top of a Next.js-style client router.
//!
//! Application code describes a navigation target as a [`Route`]: a path
//! template such as `/posts/[id]` plus a flat query mapping. The router needs
//! two views of every parameterized target:
//!
//! - the **templated** descriptor (`/posts/[id]` + full query) to find the page
//!   in its route table
//! - the **concrete** descriptor (`/posts/42` + leftover query) that ends up in
//!   history and the address bar
//!
//! This crate computes both from a single [`Route`] and hands them to a
//! [`RouterCapability`] in one call.
//!
//! ## Building Blocks
//!
//! - [`find_params`] / [`replace_params`] / [`remove_params`] - route-string algebra
//! - [`route_to_string`] - href rendering with an optional base path
//! - [`push_route`] / [`replace_route`] - the navigation adapter
//! - [`create_link`] - href, active state, triggers and click handling for a link
//! - [`create_mock_router`] - a static, recording router for tests
//! - [`RouterProvider`] - explicit router injection for the UI-binding layer
//!
//! ## Example
//!
//! ```
//! use rhtmx_navigation::{create_mock_router, query, route_to_string, MockRouterOptions, Route, RouterCapability};
//!
//! let router = create_mock_router(
//!     MockRouterOptions::new("/admin/requests/[uuid]")
//!         .with_query(query! { "uuid" => "1", "hash" => "12345" }),
//! );
//! assert_eq!(router.as_path(), "/admin/requests/1?hash=12345");
//!
//! let route = Route::new("/users/[id]").with_query(query! { "id" => "7", "tab" => "info" });
//! assert_eq!(route_to_string("/app", &route), "/app/users/7?tab=info");
//! ```

// ============================================================================
// Module Declarations
// ============================================================================

pub mod binding;
pub mod capability;
pub mod click;
pub mod config;
pub mod error;
pub mod link;
pub mod mock;
pub mod navigation;
pub mod route;

pub use binding::RouterProvider;
pub use capability::{RouterCapability, Viewport};
pub use click::{create_click_handler, ClickEvent, ClickHandler, MouseButton};
pub use config::NavigationConfig;
pub use error::{NavigationError, Result};
pub use link::{create_link, Link};
pub use mock::events::{ListenerId, RouterEvent, RouterEvents};
pub use mock::{create_mock_router, MockRouter, MockRouterOptions, RecordedNavigation};
pub use navigation::{navigate, push_route, replace_route, NavigationMode};
pub use route::format::route_to_string;
pub use route::params::{find_params, remove_params, replace_params};
pub use route::{Query, Route, RouteOptions};

/// Builds a [`Query`] from `key => value` pairs, keeping their order.
///
/// ```
/// use rhtmx_navigation::query;
///
/// let q = query! { "id" => "1", "sort" => "asc" };
/// assert_eq!(q.keys().collect::<Vec<_>>(), vec!["id", "sort"]);
///
/// let empty = query! {};
/// assert!(empty.is_empty());
/// ```
#[macro_export]
macro_rules! query {
    () => {
        $crate::Query::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut query = $crate::Query::new();
        $(
            query.insert(::std::string::String::from($key), ::std::string::String::from($value));
        )+
        query
    }};
}
