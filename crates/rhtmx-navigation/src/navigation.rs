//! Navigation adapter
//!
//! Turns one [`Route`] into the templated + concrete descriptor pair the
//! router expects and forwards it in a single call.

use tracing::{debug, trace};

use crate::capability::RouterCapability;
use crate::route::params::{remove_params, replace_params};
use crate::route::{Query, Route, RouteOptions};

/// Which history operation a navigation uses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationMode {
    /// Add a history entry
    Push,
    /// Overwrite the current history entry
    Replace,
}

impl NavigationMode {
    fn as_str(self) -> &'static str {
        match self {
            NavigationMode::Push => "push",
            NavigationMode::Replace => "replace",
        }
    }
}

/// Navigates to `route` through `router`
///
/// The router receives:
/// - templated: `{ pathname: route.pathname, query: route.query }`
/// - concrete: `{ pathname: <substituted path>, query: <residual query> }`
/// - `options`, untouched
///
/// When the navigation succeeds and the template carries a `#` fragment, the
/// viewport is scrolled to the origin and focus moves to the document root,
/// matching what a browser does for same-page anchors.
///
/// Returns the router's outcome; `false` means the navigation did not
/// complete.
///
/// # Examples
///
/// ```
/// use rhtmx_navigation::{create_mock_router, navigate, MockRouterOptions, NavigationMode, Route, RouteOptions};
///
/// futures::executor::block_on(async {
///     let router = create_mock_router(MockRouterOptions::new("/"));
///     let route = Route::new("/about");
///     assert!(navigate(&router, &route, NavigationMode::Replace, RouteOptions::default()).await);
///     assert_eq!(router.replaces().len(), 1);
/// });
/// ```
pub async fn navigate<R>(router: &R, route: &Route, mode: NavigationMode, options: RouteOptions) -> bool
where
    R: RouterCapability + ?Sized,
{
    let residual = route
        .query
        .as_ref()
        .map(|query| remove_params(&route.pathname, query))
        .unwrap_or_else(Query::new);
    let concrete = Route {
        pathname: replace_params(&route.pathname, route.query.as_ref()),
        query: Some(residual),
    };

    let outcome = match mode {
        NavigationMode::Push => router.push(route, &concrete, &options).await,
        NavigationMode::Replace => router.replace(route, &concrete, &options).await,
    };

    debug!(
        mode = mode.as_str(),
        template = %route.pathname,
        concrete = %concrete.pathname,
        shallow = options.shallow,
        outcome,
        "navigation finished"
    );

    if outcome && route.pathname.contains('#') {
        reset_viewport(router);
    }

    outcome
}

/// Pushes `route` onto the history stack
pub async fn push_route<R>(router: &R, route: &Route, options: RouteOptions) -> bool
where
    R: RouterCapability + ?Sized,
{
    navigate(router, route, NavigationMode::Push, options).await
}

/// Replaces the current history entry with `route`
pub async fn replace_route<R>(router: &R, route: &Route, options: RouteOptions) -> bool
where
    R: RouterCapability + ?Sized,
{
    navigate(router, route, NavigationMode::Replace, options).await
}

fn reset_viewport<R>(router: &R)
where
    R: RouterCapability + ?Sized,
{
    match router.viewport() {
        Some(viewport) => {
            trace!("fragment navigation, resetting scroll and focus");
            viewport.scroll_to_origin();
            viewport.focus_document_root();
        }
        None => trace!("fragment navigation without a viewport, skipping scroll reset"),
    }
}
