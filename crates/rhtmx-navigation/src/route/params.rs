//! Parameter extraction and substitution for route templates
//!
//! All functions are **pure** and total: any string is a valid template,
//! including the empty string and templates without parameters.
//!
//! Only single bracketed alphanumeric tokens count as parameters. Catch-all
//! (`[...slug]`), optional (`[[...slug]]`) and constrained (`[id:int]`) forms
//! are left alone and stay in the path as literal text.

use once_cell::sync::Lazy;
use regex::Regex;

use super::Query;

/// Matches one `[name]` token where `name` is ASCII alphanumeric
static PARAM_TOKEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[([A-Za-z0-9]+)\]").expect("param token pattern is valid"));

/// Extracts parameter names from a route template (pure function)
///
/// Scans left to right for `[name]` tokens. Each occurrence is reported in
/// order, so a template that repeats a token reports its name twice.
///
/// # Examples
///
/// ```
/// use rhtmx_navigation::find_params;
///
/// assert_eq!(find_params("/shop/[category]/[item]"), vec!["category", "item"]);
/// assert!(find_params("/about").is_empty());
///
/// // Catch-all syntax is not a parameter
/// assert!(find_params("/docs/[...slug]").is_empty());
/// ```
pub fn find_params(template: &str) -> Vec<&str> {
    PARAM_TOKEN
        .captures_iter(template)
        .filter_map(|caps| caps.get(1))
        .map(|name| name.as_str())
        .collect()
}

/// Substitutes parameter values into a route template (pure function)
///
/// - `values == None` returns the template unchanged
/// - tokens without a matching key stay unsubstituted
/// - each found token replaces the first literal `[name]` left in the path
///
/// Values are inserted verbatim; encoding is the router's job.
///
/// # Examples
///
/// ```
/// use rhtmx_navigation::{query, replace_params};
///
/// let values = query! { "x" => "1" };
/// assert_eq!(replace_params("/a/[x]/[y]", Some(&values)), "/a/1/[y]");
/// assert_eq!(replace_params("/a/[x]", None), "/a/[x]");
/// ```
pub fn replace_params(template: &str, values: Option<&Query>) -> String {
    let Some(values) = values else {
        return template.to_string();
    };

    find_params(template)
        .into_iter()
        .filter_map(|name| values.get(name).map(|value| (name, value)))
        .fold(template.to_string(), |path, (name, value)| {
            path.replacen(&format!("[{name}]"), value, 1)
        })
}

/// Drops every key consumed by the template from a query (pure function)
///
/// Remaining keys keep their relative order.
///
/// # Examples
///
/// ```
/// use rhtmx_navigation::{query, remove_params};
///
/// let residual = remove_params("/a/[id]", &query! { "id" => "5", "sort" => "asc" });
/// assert_eq!(residual, query! { "sort" => "asc" });
/// ```
pub fn remove_params(template: &str, query: &Query) -> Query {
    let params = find_params(template);

    query
        .iter()
        .filter(|(key, _)| !params.contains(&key.as_str()))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect()
}
