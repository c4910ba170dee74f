//! Href rendering for routes
//!
//! **Pure function**: a route plus a base path always renders to the same
//! string. Query keys and values are percent-encoded (space becomes `%20`),
//! pairs are joined with `&` in mapping order.

use super::params::{remove_params, replace_params};
use super::{Query, Route};

/// Renders a route as an href string (pure function)
///
/// 1. substitutes the template parameters from the route's mapping
/// 2. prefixes `base_path` (pass `""` for none)
/// 3. appends the residual query, if any, after a `?`
///
/// # Examples
///
/// ```
/// use rhtmx_navigation::{query, route_to_string, Route};
///
/// // No parameters, no query: bare pathname
/// assert_eq!(route_to_string("", &Route::new("/about")), "/about");
///
/// // Parameters consumed by the path never reach the query string
/// let route = Route::new("/posts/[id]").with_query(query! { "id" => "42", "ref" => "home page" });
/// assert_eq!(route_to_string("", &route), "/posts/42?ref=home%20page");
///
/// // Base path prefix
/// assert_eq!(route_to_string("/docs", &Route::new("/intro")), "/docs/intro");
/// ```
pub fn route_to_string(base_path: &str, route: &Route) -> String {
    let path = replace_params(&route.pathname, route.query.as_ref());
    let residual = route
        .query
        .as_ref()
        .map(|query| remove_params(&route.pathname, query))
        .unwrap_or_default();

    let mut href = String::with_capacity(base_path.len() + path.len());
    href.push_str(base_path);
    href.push_str(&path);

    if !residual.is_empty() {
        href.push('?');
        href.push_str(&encode_query(&residual));
    }

    href
}

/// Serializes a query as `k=v&k2=v2` with percent-encoding
fn encode_query(query: &Query) -> String {
    query
        .iter()
        .map(|(key, value)| {
            format!(
                "{}={}",
                urlencoding::encode(key),
                urlencoding::encode(value)
            )
        })
        .collect::<Vec<_>>()
        .join("&")
}
