//! Link builder
//!
//! A [`Link`] is a derived view over a router and a route. It has no state of
//! its own: build a fresh one whenever the route, options or router change.

use std::sync::Arc;

use futures::future::BoxFuture;

use crate::capability::RouterCapability;
use crate::click::{create_click_handler, ClickEvent, ClickHandler};
use crate::navigation::{push_route, replace_route};
use crate::route::format::route_to_string;
use crate::route::{Route, RouteOptions};

/// Everything a rendered anchor needs
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use rhtmx_navigation::{create_link, create_mock_router, query, MockRouterOptions, Route, RouteOptions};
///
/// let router = Arc::new(create_mock_router(MockRouterOptions::new("/posts/[id]")));
/// let link = create_link(
///     router,
///     Route::new("/posts/[id]").with_query(query! { "id" => "7" }),
///     RouteOptions::default(),
/// );
///
/// assert!(link.is_active);
/// assert_eq!(link.href, "/posts/7");
/// ```
#[derive(Debug)]
pub struct Link<R: ?Sized> {
    /// The router's current template equals the link's template
    pub is_active: bool,
    /// Rendered href, including the router's base path
    pub href: String,
    router: Arc<R>,
    route: Route,
    options: RouteOptions,
    on_click: ClickHandler<R>,
}

impl<R> Link<R>
where
    R: RouterCapability + ?Sized + 'static,
{
    /// Route this link points at
    pub fn route(&self) -> &Route {
        &self.route
    }

    /// Pushes the link's route
    pub fn push(&self) -> BoxFuture<'static, bool> {
        let router = Arc::clone(&self.router);
        let route = self.route.clone();
        let options = self.options;
        Box::pin(async move { push_route(&*router, &route, options).await })
    }

    /// Replaces the current entry with the link's route
    pub fn replace(&self) -> BoxFuture<'static, bool> {
        let router = Arc::clone(&self.router);
        let route = self.route.clone();
        let options = self.options;
        Box::pin(async move { replace_route(&*router, &route, options).await })
    }

    /// Click handler bound to the link's route
    pub fn click_handler(&self) -> &ClickHandler<R> {
        &self.on_click
    }

    /// Handles a click on the rendered anchor, see [`ClickHandler::handle`]
    pub fn on_click(&self, event: &mut ClickEvent) -> Option<BoxFuture<'static, bool>> {
        self.on_click.handle(event)
    }
}

/// Builds the link view for `route`
///
/// Activity compares the router's current *template* with the route's
/// template, so `/posts/[id]` is active on every post page and never on
/// `/posts/new`.
pub fn create_link<R>(router: Arc<R>, route: Route, options: RouteOptions) -> Link<R>
where
    R: RouterCapability + ?Sized,
{
    let is_active = router.route() == route.pathname;
    let href = route_to_string(router.base_path(), &route);
    let on_click = create_click_handler(Arc::clone(&router), route.clone(), options);

    Link {
        is_active,
        href,
        router,
        route,
        options,
        on_click,
    }
}
