//! The router surface this crate drives
//!
//! A real client router and [`MockRouter`](crate::MockRouter) are two
//! implementations of [`RouterCapability`], picked when the application (or
//! test) is wired together.

use async_trait::async_trait;

use crate::route::{Query, Route, RouteOptions};

/// Minimal operation set required from the host router
///
/// `push` and `replace` receive the templated descriptor (for route-table
/// lookup) and the concrete descriptor (for history and the address bar) in
/// a single call. Their outcome is `false` when the router cancelled or
/// superseded the transition; that is a normal result, not an error.
#[async_trait]
pub trait RouterCapability: Send + Sync {
    /// Template of the current route, e.g. `/posts/[id]`
    fn route(&self) -> &str;

    /// Browser-visible path of the current route, e.g. `/posts/42?ref=home`
    fn as_path(&self) -> &str;

    /// Parameter/query mapping of the current route
    fn query(&self) -> &Query;

    /// Prefix applied to every rendered href
    fn base_path(&self) -> &str {
        ""
    }

    /// Pushes a new history entry
    async fn push(&self, templated: &Route, concrete: &Route, options: &RouteOptions) -> bool;

    /// Replaces the current history entry
    async fn replace(&self, templated: &Route, concrete: &Route, options: &RouteOptions) -> bool;

    /// Warms the code for a route template
    async fn prefetch(&self, template: &str);

    /// Platform hooks for post-navigation scroll handling, if any
    fn viewport(&self) -> Option<&dyn Viewport> {
        None
    }
}

/// UI platform operations used after fragment navigation
pub trait Viewport: Send + Sync {
    /// Scrolls the viewport back to the origin
    fn scroll_to_origin(&self);

    /// Moves keyboard focus to the document root
    fn focus_document_root(&self);
}
