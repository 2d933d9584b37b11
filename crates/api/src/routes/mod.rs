pub mod app;
pub mod auth;
pub mod health;
pub mod team;
pub mod user;

use std::sync::Arc;

use axum::middleware::{from_fn, from_fn_with_state};
use axum::Router;
use indexmap::IndexMap;
use mercato_core::routing::{Middleware, RouteTable, RoutingError};

use crate::handlers::placeholder;
use crate::middleware::auth::require_auth;
use crate::middleware::locale::set_user_locale;
use crate::middleware::team::set_team_context;
use crate::state::AppState;

/// Declare the `/v1` route table.
///
/// Group hierarchy and middleware:
///
/// ```text
/// /v1/auth     logout                                  (none)
/// /v1/app      locations, banks, couriers              auth
/// /v1/user     me, teams, agent                        auth, setUserLocale
/// /v1/team     wallet, transactions, members, agents,  auth, setTeamContext
///              assets/{agent-groups,pages,products,warehouses}
/// ```
///
/// Fails if the declarations break a table invariant (duplicate endpoint or
/// name, malformed name, inconsistent middleware on a path).
pub fn route_table() -> Result<RouteTable, RoutingError> {
    RouteTable::declare("/v1", "v1", |v1| {
        v1.group("/auth", "auth", auth::declare);
        v1.group_with("/app", "app", &[Middleware::Auth], app::declare);
        v1.group_with(
            "/user",
            "user",
            &[Middleware::Auth, Middleware::UserLocale],
            user::declare,
        );
        v1.group_with(
            "/team",
            "team",
            &[Middleware::Auth, Middleware::TeamContext],
            team::declare,
        );
    })
}

/// Build the router for every route in `state.routes`.
///
/// Routes sharing a middleware chain are mounted on one sub-router so the
/// chain wraps them as a unit; the chain runs in declaration order.
pub fn api_routes(state: &AppState) -> Router<AppState> {
    let mut groups: IndexMap<&[Middleware], Router<AppState>> = IndexMap::new();

    for route in state.routes.routes() {
        let router = groups.entry(route.middleware.as_slice()).or_default();
        *router = std::mem::take(router)
            .route(&route.path, placeholder::endpoint(Arc::new(route.clone())));
    }

    groups
        .into_iter()
        .fold(Router::new(), |api, (chain, router)| {
            api.merge(apply_middleware(router, chain, state))
        })
}

/// Wrap `router` in `chain`. Layers added last run first, so the chain is
/// applied in reverse. Route layers leave the 404 fallback untouched, so an
/// unknown path never reaches `auth`.
fn apply_middleware(
    router: Router<AppState>,
    chain: &[Middleware],
    state: &AppState,
) -> Router<AppState> {
    chain
        .iter()
        .rev()
        .fold(router, |router, middleware| match middleware {
            Middleware::Auth => {
                router.route_layer(from_fn_with_state(state.clone(), require_auth))
            }
            Middleware::UserLocale => {
                router.route_layer(from_fn_with_state(state.clone(), set_user_locale))
            }
            Middleware::TeamContext => router.route_layer(from_fn(set_team_context)),
        })
}
