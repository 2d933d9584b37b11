//! Route declarations for `/v1/auth`.

use mercato_core::routing::RouteGroup;

/// Routes mounted at `/v1/auth`.
///
/// ```text
/// POST /logout   -> logout
/// ```
pub fn declare(auth: &mut RouteGroup<'_>) {
    auth.post("/logout", "logout", "logout").bare();
}
