//! Click interpretation for rendered links
//!
//! Decides synchronously, inside the event handler, whether a click on a link
//! should be left to the browser or turned into a client-side push.

use std::sync::Arc;

use futures::future::BoxFuture;
use tracing::trace;

use crate::capability::RouterCapability;
use crate::navigation::push_route;
use crate::route::{Route, RouteOptions};

/// Pointer button that produced a click
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MouseButton {
    /// Usually the left button
    #[default]
    Primary,
    /// Usually the wheel / middle button
    Auxiliary,
    /// Usually the right button
    Secondary,
}

/// The parts of a pointer event on an anchor that matter for navigation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClickEvent {
    /// `target` attribute of the anchor, if present
    pub target: Option<String>,
    /// Platform meta key (Cmd / Windows)
    pub meta_key: bool,
    /// Control key
    pub ctrl_key: bool,
    /// Shift key
    pub shift_key: bool,
    /// Button that was pressed
    pub button: MouseButton,
    default_prevented: bool,
}

impl ClickEvent {
    /// Unmodified primary-button click on an anchor without a target
    pub fn primary() -> Self {
        Self::default()
    }

    /// Sets the anchor's `target` attribute
    pub fn with_target(mut self, target: impl Into<String>) -> Self {
        self.target = Some(target.into());
        self
    }

    /// Sets the meta key
    pub fn with_meta(mut self) -> Self {
        self.meta_key = true;
        self
    }

    /// Sets the control key
    pub fn with_ctrl(mut self) -> Self {
        self.ctrl_key = true;
        self
    }

    /// Sets the shift key
    pub fn with_shift(mut self) -> Self {
        self.shift_key = true;
        self
    }

    /// Sets the pressed button
    pub fn with_button(mut self, button: MouseButton) -> Self {
        self.button = button;
        self
    }

    /// Stops the browser from following the link
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    /// Whether [`prevent_default`](Self::prevent_default) was called
    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }

    /// Whether the anchor points at another browsing context
    fn targets_other_context(&self) -> bool {
        self.target
            .as_deref()
            .is_some_and(|target| target != "_self")
    }

    /// Whether the user asked for a new tab or window
    fn opens_new_context(&self) -> bool {
        self.meta_key || self.ctrl_key || self.shift_key || self.button == MouseButton::Auxiliary
    }
}

/// Click handler bound to one route and its options
#[derive(Debug)]
pub struct ClickHandler<R: ?Sized> {
    router: Arc<R>,
    route: Route,
    options: RouteOptions,
}

impl<R: ?Sized> Clone for ClickHandler<R> {
    fn clone(&self) -> Self {
        Self {
            router: Arc::clone(&self.router),
            route: self.route.clone(),
            options: self.options,
        }
    }
}

impl<R> ClickHandler<R>
where
    R: RouterCapability + ?Sized + 'static,
{
    /// Interprets a click
    ///
    /// Returns `None` when the browser should handle the click itself (other
    /// target, modifier keys, middle button); the event is left untouched.
    /// Otherwise the default action is prevented and the push navigation is
    /// returned for the UI runtime to drive.
    pub fn handle(&self, event: &mut ClickEvent) -> Option<BoxFuture<'static, bool>> {
        if event.targets_other_context() || event.opens_new_context() {
            trace!(route = %self.route.pathname, "click left to the browser");
            return None;
        }

        event.prevent_default();
        trace!(route = %self.route.pathname, "click intercepted, pushing route");

        let router = Arc::clone(&self.router);
        let route = self.route.clone();
        let options = self.options;
        Some(Box::pin(async move { push_route(&*router, &route, options).await }))
    }
}

/// Builds a click handler that pushes `route` on plain clicks
pub fn create_click_handler<R>(router: Arc<R>, route: Route, options: RouteOptions) -> ClickHandler<R>
where
    R: RouterCapability + ?Sized,
{
    ClickHandler {
        router,
        route,
        options,
    }
}
