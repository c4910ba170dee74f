//! Static router for tests
//!
//! [`MockRouter`] implements [`RouterCapability`] without a browser. It is
//! seeded once and never changes: navigations are recorded and resolve to
//! `true`, but `route`, `as_path` and `query` keep their initial values.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use tracing::trace;

use crate::capability::{RouterCapability, Viewport};
use crate::config::NavigationConfig;
use crate::route::format::route_to_string;
use crate::route::{Query, Route, RouteOptions};

pub mod events;

use events::RouterEvents;

/// Seed values for [`create_mock_router`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MockRouterOptions {
    /// Current route template
    pub pathname: String,
    /// Current parameter/query mapping (default: empty)
    pub query: Option<Query>,
    /// Base path reported by the router (default: empty)
    pub base_path: Option<String>,
    /// Explicit `as_path`; computed from `pathname` and `query` when absent
    pub as_path: Option<String>,
}

impl MockRouterOptions {
    /// Options for a router sitting on `pathname`
    pub fn new(pathname: impl Into<String>) -> Self {
        Self {
            pathname: pathname.into(),
            ..Self::default()
        }
    }

    /// Options seeded with the configured base path
    pub fn from_config(pathname: impl Into<String>, config: &NavigationConfig) -> Self {
        Self::new(pathname).with_base_path(config.base_path())
    }

    /// Sets the current query
    pub fn with_query(mut self, query: Query) -> Self {
        self.query = Some(query);
        self
    }

    /// Sets the base path
    pub fn with_base_path(mut self, base_path: impl Into<String>) -> Self {
        self.base_path = Some(base_path.into());
        self
    }

    /// Overrides the computed `as_path`
    pub fn with_as_path(mut self, as_path: impl Into<String>) -> Self {
        self.as_path = Some(as_path.into());
        self
    }
}

/// A navigation call received by a [`MockRouter`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordedNavigation {
    /// `push(templated, concrete, options)`
    Push {
        /// Templated descriptor
        templated: Route,
        /// Concrete descriptor
        concrete: Route,
        /// Options as passed
        options: RouteOptions,
    },
    /// `replace(templated, concrete, options)`
    Replace {
        /// Templated descriptor
        templated: Route,
        /// Concrete descriptor
        concrete: Route,
        /// Options as passed
        options: RouteOptions,
    },
    /// `prefetch(template)`
    Prefetch {
        /// Template that was prefetched
        template: String,
    },
}

/// Counts scroll resets requested by fragment navigation
#[derive(Debug, Default)]
struct RecordingViewport {
    scroll_resets: AtomicUsize,
    focus_resets: AtomicUsize,
}

impl Viewport for RecordingViewport {
    fn scroll_to_origin(&self) {
        self.scroll_resets.fetch_add(1, Ordering::SeqCst);
    }

    fn focus_document_root(&self) {
        self.focus_resets.fetch_add(1, Ordering::SeqCst);
    }
}

/// Side-effect-free router for tests
///
/// # Examples
///
/// ```
/// use rhtmx_navigation::{create_mock_router, query, MockRouterOptions, RouterCapability};
///
/// let router = create_mock_router(
///     MockRouterOptions::new("/admin/requests/[uuid]")
///         .with_query(query! { "uuid" => "1", "hash" => "12345" }),
/// );
///
/// assert_eq!(router.route(), "/admin/requests/[uuid]");
/// assert_eq!(router.as_path(), "/admin/requests/1?hash=12345");
/// assert!(!router.is_fallback());
/// ```
#[derive(Debug)]
pub struct MockRouter {
    route: String,
    as_path: String,
    query: Query,
    base_path: String,
    events: RouterEvents,
    calls: Mutex<Vec<RecordedNavigation>>,
    viewport: RecordingViewport,
}

/// Builds a [`MockRouter`] from seed values
///
/// `as_path` is always formatted with an empty base path, even when
/// `base_path` is set; existing tests depend on that.
pub fn create_mock_router(options: MockRouterOptions) -> MockRouter {
    let MockRouterOptions {
        pathname,
        query,
        base_path,
        as_path,
    } = options;
    let query = query.unwrap_or_default();

    let as_path = as_path.unwrap_or_else(|| {
        let seed = Route {
            pathname: pathname.clone(),
            query: Some(query.clone()),
        };
        route_to_string("", &seed)
    });

    MockRouter {
        route: pathname,
        as_path,
        query,
        base_path: base_path.unwrap_or_default(),
        events: RouterEvents::new(),
        calls: Mutex::new(Vec::new()),
        viewport: RecordingViewport::default(),
    }
}

impl MockRouter {
    /// Current pathname; identical to the route template for the mock
    pub fn pathname(&self) -> &str {
        &self.route
    }

    /// Always `false`
    pub fn is_fallback(&self) -> bool {
        false
    }

    /// No-op
    pub fn back(&self) {}

    /// No-op
    pub fn reload(&self) {}

    /// Accepts a pop-state guard and drops it
    pub fn before_pop_state<F>(&self, _guard: F)
    where
        F: Fn(&Route) -> bool + Send + Sync + 'static,
    {
    }

    /// Event subscription surface
    pub fn events(&self) -> &RouterEvents {
        &self.events
    }

    /// Every navigation call received so far, oldest first
    pub fn calls(&self) -> Vec<RecordedNavigation> {
        self.lock_calls().clone()
    }

    /// `(templated, concrete, options)` of every push
    pub fn pushes(&self) -> Vec<(Route, Route, RouteOptions)> {
        self.lock_calls()
            .iter()
            .filter_map(|call| match call {
                RecordedNavigation::Push {
                    templated,
                    concrete,
                    options,
                } => Some((templated.clone(), concrete.clone(), *options)),
                _ => None,
            })
            .collect()
    }

    /// `(templated, concrete, options)` of every replace
    pub fn replaces(&self) -> Vec<(Route, Route, RouteOptions)> {
        self.lock_calls()
            .iter()
            .filter_map(|call| match call {
                RecordedNavigation::Replace {
                    templated,
                    concrete,
                    options,
                } => Some((templated.clone(), concrete.clone(), *options)),
                _ => None,
            })
            .collect()
    }

    /// Templates passed to `prefetch`
    pub fn prefetches(&self) -> Vec<String> {
        self.lock_calls()
            .iter()
            .filter_map(|call| match call {
                RecordedNavigation::Prefetch { template } => Some(template.clone()),
                _ => None,
            })
            .collect()
    }

    /// Forgets recorded calls
    pub fn clear_calls(&self) {
        self.lock_calls().clear();
    }

    /// Number of scroll resets triggered by fragment navigation
    pub fn scroll_resets(&self) -> usize {
        self.viewport.scroll_resets.load(Ordering::SeqCst)
    }

    /// Number of focus resets triggered by fragment navigation
    pub fn focus_resets(&self) -> usize {
        self.viewport.focus_resets.load(Ordering::SeqCst)
    }

    fn record(&self, call: RecordedNavigation) {
        trace!(?call, "mock router call");
        self.lock_calls().push(call);
    }

    fn lock_calls(&self) -> MutexGuard<'_, Vec<RecordedNavigation>> {
        self.calls.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl RouterCapability for MockRouter {
    fn route(&self) -> &str {
        &self.route
    }

    fn as_path(&self) -> &str {
        &self.as_path
    }

    fn query(&self) -> &Query {
        &self.query
    }

    fn base_path(&self) -> &str {
        &self.base_path
    }

    async fn push(&self, templated: &Route, concrete: &Route, options: &RouteOptions) -> bool {
        self.record(RecordedNavigation::Push {
            templated: templated.clone(),
            concrete: concrete.clone(),
            options: *options,
        });
        true
    }

    async fn replace(&self, templated: &Route, concrete: &Route, options: &RouteOptions) -> bool {
        self.record(RecordedNavigation::Replace {
            templated: templated.clone(),
            concrete: concrete.clone(),
            options: *options,
        });
        true
    }

    async fn prefetch(&self, template: &str) {
        self.record(RecordedNavigation::Prefetch {
            template: template.to_string(),
        });
    }

    fn viewport(&self) -> Option<&dyn Viewport> {
        Some(&self.viewport)
    }
}
