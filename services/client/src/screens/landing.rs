//! services/client/src/screens/landing.rs

use crate::screens::state::AppContext;
use project_manager_core::domain::Route;
use project_manager_core::ports::AuthContext;

/// Where the root path leads: the chat when signed in, the login form otherwise.
pub fn landing_route(auth: &dyn AuthContext) -> Route {
    if auth.current_user().is_some() {
        Route::Chat
    } else {
        Route::Login
    }
}

/// Redirects from the root path and returns the chosen route.
pub fn enter(ctx: &AppContext) -> Route {
    let route = landing_route(ctx.auth.as_ref());
    ctx.navigator.navigate(route);
    route
}
