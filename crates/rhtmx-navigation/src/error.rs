//! Errors raised by the binding layer
//!
//! The route algebra and the navigation adapter never fail: unresolved
//! parameters stay in the path as literal text and a cancelled navigation is
//! reported as `false`. Only integration mistakes end up here.

use thiserror::Error;

/// Errors for operations that need something the caller did not provide
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavigationError {
    /// No [`RouterCapability`](crate::RouterCapability) is bound to the provider
    #[error("no router is bound; wrap the tree in a RouterProvider bound to a router before navigating")]
    RouterNotBound,

    /// A parameter was required but the current route does not carry it
    #[error("missing required parameter `{key}` for route `{route}`")]
    MissingParam {
        /// Name of the requested parameter
        key: String,
        /// Template of the route that was inspected
        route: String,
    },
}

/// Result alias for binding-layer operations
pub type Result<T> = std::result::Result<T, NavigationError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_param_message_names_key_and_route() {
        let err = NavigationError::MissingParam {
            key: "uuid".to_string(),
            route: "/admin/requests/[uuid]".to_string(),
        };
        let message = err.to_string();
        assert!(message.contains("`uuid`"));
        assert!(message.contains("/admin/requests/[uuid]"));
    }

    #[test]
    fn test_router_not_bound_message() {
        assert!(NavigationError::RouterNotBound
            .to_string()
            .contains("no router is bound"));
    }
}
