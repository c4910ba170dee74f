//! Route module for typed navigation targets
//!
//! Contains the data model plus the pure route-string algebra:
//! - `params` - parameter extraction, substitution and query partitioning
//! - `format` - href rendering
//!
//! Nothing in here performs I/O or can fail.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

pub mod format;
pub mod params;

/// Flat parameter/query mapping, iterated in insertion order
pub type Query = IndexMap<String, String>;

/// A navigation target: a path template plus its parameter/query mapping
///
/// The mapping is split at use time into the keys consumed by the template
/// (`[id]` tokens) and the residual query string. That split is never stored.
///
/// # Examples
///
/// ```
/// use rhtmx_navigation::{query, Route};
///
/// let route = Route::new("/posts/[id]").with_query(query! { "id" => "42" });
/// assert_eq!(route.pathname, "/posts/[id]");
/// assert_eq!(route.param("id"), Some("42"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Route {
    /// Path template, e.g. `/posts/[id]`
    pub pathname: String,
    /// Parameter values and extra query keys
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query: Option<Query>,
}

impl Route {
    /// Creates a route without a query mapping
    pub fn new(pathname: impl Into<String>) -> Self {
        Self {
            pathname: pathname.into(),
            query: None,
        }
    }

    /// Sets the parameter/query mapping (builder style)
    pub fn with_query(mut self, query: Query) -> Self {
        self.query = Some(query);
        self
    }

    /// Adds or overwrites a single parameter (builder style)
    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query
            .get_or_insert_with(Query::new)
            .insert(key.into(), value.into());
        self
    }

    /// Looks up a value from the mapping
    pub fn param(&self, key: &str) -> Option<&str> {
        self.query.as_ref()?.get(key).map(String::as_str)
    }
}

impl From<&str> for Route {
    fn from(pathname: &str) -> Self {
        Route::new(pathname)
    }
}

impl From<String> for Route {
    fn from(pathname: String) -> Self {
        Route::new(pathname)
    }
}

/// Options passed verbatim to the router's push/replace
///
/// The navigation adapter never inspects them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RouteOptions {
    /// Update the URL without re-running data fetching
    #[serde(default)]
    pub shallow: bool,
}

impl RouteOptions {
    /// Options with `shallow` enabled
    pub fn shallow() -> Self {
        Self { shallow: true }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_param_creates_mapping() {
        let route = Route::new("/users/[id]").with_param("id", "1");
        assert_eq!(route.param("id"), Some("1"));
        assert_eq!(route.param("tab"), None);
    }

    #[test]
    fn test_route_without_query_has_no_params() {
        let route = Route::from("/about");
        assert!(route.query.is_none());
        assert_eq!(route.param("id"), None);
    }

    #[test]
    fn test_default_options_are_not_shallow() {
        assert!(!RouteOptions::default().shallow);
        assert!(RouteOptions::shallow().shallow);
    }
}
