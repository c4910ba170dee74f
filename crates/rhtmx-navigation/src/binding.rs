//! UI-binding glue
//!
//! [`RouterProvider`] is the explicit replacement for a global "current
//! router": the UI layer binds one router per rendered tree and every lookup
//! goes through it. Using an unbound provider fails immediately with
//! [`NavigationError::RouterNotBound`].

use std::sync::Arc;

use tracing::warn;

use crate::capability::RouterCapability;
use crate::config::NavigationConfig;
use crate::error::{NavigationError, Result};
use crate::link::{create_link, Link};
use crate::navigation::{push_route, replace_route};
use crate::route::format::route_to_string;
use crate::route::{Route, RouteOptions};

/// Holds the router a UI tree navigates with
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use rhtmx_navigation::{create_mock_router, MockRouterOptions, NavigationError, Route, RouterProvider};
///
/// let provider = RouterProvider::new();
/// assert_eq!(provider.href(&Route::new("/about")), Err(NavigationError::RouterNotBound));
///
/// let provider = RouterProvider::bound(Arc::new(create_mock_router(MockRouterOptions::new("/"))));
/// assert_eq!(provider.href(&Route::new("/about")).unwrap(), "/about");
/// ```
#[derive(Clone, Default)]
pub struct RouterProvider {
    router: Option<Arc<dyn RouterCapability>>,
    defaults: RouteOptions,
}

impl RouterProvider {
    /// Creates a provider with no router bound
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a provider bound to `router`
    pub fn bound(router: Arc<dyn RouterCapability>) -> Self {
        Self {
            router: Some(router),
            defaults: RouteOptions::default(),
        }
    }

    /// Uses the configured default options for calls without explicit options
    pub fn with_config(mut self, config: &NavigationConfig) -> Self {
        self.defaults = config.default_options();
        self
    }

    /// Binds (or rebinds) the router
    pub fn bind(&mut self, router: Arc<dyn RouterCapability>) {
        self.router = Some(router);
    }

    /// Drops the bound router
    pub fn unbind(&mut self) {
        self.router = None;
    }

    /// Whether a router is bound
    pub fn is_bound(&self) -> bool {
        self.router.is_some()
    }

    /// The bound router
    pub fn router(&self) -> Result<Arc<dyn RouterCapability>> {
        self.router.clone().ok_or_else(|| {
            warn!("router requested from an unbound RouterProvider");
            NavigationError::RouterNotBound
        })
    }

    /// The route the router currently shows
    pub fn current_route(&self) -> Result<Route> {
        let router = self.router()?;
        Ok(Route {
            pathname: router.route().to_string(),
            query: Some(router.query().clone()),
        })
    }

    /// A value from the current query, if present
    pub fn param(&self, key: &str) -> Result<Option<String>> {
        let router = self.router()?;
        Ok(router.query().get(key).cloned())
    }

    /// A value from the current query that must be present
    pub fn required_param(&self, key: &str) -> Result<String> {
        let router = self.router()?;
        router.query().get(key).cloned().ok_or_else(|| {
            warn!(key, route = router.route(), "required route parameter is missing");
            NavigationError::MissingParam {
                key: key.to_string(),
                route: router.route().to_string(),
            }
        })
    }

    /// Href for `route` under the bound router's base path
    pub fn href(&self, route: &Route) -> Result<String> {
        let router = self.router()?;
        Ok(route_to_string(router.base_path(), route))
    }

    /// Link view for `route`
    pub fn link(&self, route: Route, options: Option<RouteOptions>) -> Result<Link<dyn RouterCapability>> {
        let router = self.router()?;
        Ok(create_link(router, route, options.unwrap_or(self.defaults)))
    }

    /// Pushes `route` through the bound router
    pub async fn push_route(&self, route: &Route, options: Option<RouteOptions>) -> Result<bool> {
        let router = self.router()?;
        Ok(push_route(&*router, route, options.unwrap_or(self.defaults)).await)
    }

    /// Replaces the current entry with `route` through the bound router
    pub async fn replace_route(&self, route: &Route, options: Option<RouteOptions>) -> Result<bool> {
        let router = self.router()?;
        Ok(replace_route(&*router, route, options.unwrap_or(self.defaults)).await)
    }

    /// Prefetches the template of `route`
    pub async fn prefetch(&self, route: &Route) -> Result<()> {
        let router = self.router()?;
        router.prefetch(&route.pathname).await;
        Ok(())
    }
}

impl std::fmt::Debug for RouterProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RouterProvider")
            .field("bound", &self.is_bound())
            .field("route", &self.router.as_ref().map(|router| router.route().to_string()))
            .field("defaults", &self.defaults)
            .finish()
    }
}
