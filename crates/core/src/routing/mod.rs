//! Declarative HTTP route table.
//!
//! Routes are declared through nested [`RouteGroup`]s that compose a path
//! prefix, a dotted name prefix and a middleware chain. The resulting
//! [`RouteTable`] is validated once at declaration time and then serves as
//! the single source of truth for the HTTP router, named-route URL
//! generation and route resolution.
//!
//! Naming conventions used throughout the table:
//!
//! - `index`           lightweight, unfiltered listing
//! - `records.list`    paginated, filterable listing
//! - `records.create` / `update` / `destroy`   singular CRUD
//! - `action`          state transition taking `{"action": ...}`
//! - `manage.*`        bulk operations over a set of identifiers
//! - `change`          replace a single foreign-key relationship

mod group;
mod table;

use std::fmt;

pub use group::{RouteEntry, RouteGroup};
pub use table::{ResolveError, Resolution, RouteTable};

/// HTTP verbs used by the route table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl HttpMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Middleware a route group runs before its handlers, in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Middleware {
    /// Resolve the current user or reject the request.
    Auth,
    /// Resolve the locale the response should use.
    UserLocale,
    /// Resolve the team from the `X-Team-Id` header or reject the request.
    TeamContext,
}

impl Middleware {
    pub fn name(self) -> &'static str {
        match self {
            Self::Auth => "auth",
            Self::UserLocale => "setUserLocale",
            Self::TeamContext => "setTeamContext",
        }
    }
}

impl fmt::Display for Middleware {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The request contract a route accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Contract {
    /// No body and no query parameters.
    None,
    /// `?page=&per_page=` pagination.
    Paginated,
    /// Any JSON object body.
    Object,
    /// `{"action": "archive" | "restore"}`.
    Action,
    /// `{"ids": [...]}`, a non-empty list of identifiers.
    Bulk,
    /// Replace a single foreign key, e.g. `{"product_id": "..."}`.
    Change {
        field: &'static str,
        nullable: bool,
    },
}

/// A single declared route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteDef {
    pub method: HttpMethod,
    /// Full path pattern, parameters written as `{name}`.
    pub path: String,
    /// Dotted route name, e.g. `v1.team.assets.pages.records.update`.
    pub name: String,
    pub description: String,
    pub middleware: Vec<Middleware>,
    pub contract: Contract,
}

impl RouteDef {
    /// Names of the `{param}` segments in the path pattern, in order.
    pub fn parameters(&self) -> Vec<&str> {
        self.path.split('/').filter_map(parameter_name).collect()
    }

    pub fn requires(&self, middleware: Middleware) -> bool {
        self.middleware.contains(&middleware)
    }
}

/// Return the parameter name if `segment` is a `{param}` placeholder.
pub(crate) fn parameter_name(segment: &str) -> Option<&str> {
    segment
        .strip_prefix('{')
        .and_then(|s| s.strip_suffix('}'))
        .filter(|s| !s.is_empty())
}

/// Errors raised while declaring or querying the route table.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum RoutingError {
    #[error("Duplicate route: {method} {path} is declared by both '{first}' and '{second}'")]
    DuplicateRoute {
        method: HttpMethod,
        path: String,
        first: String,
        second: String,
    },

    #[error("Duplicate route name: '{0}'")]
    DuplicateName(String),

    #[error("Route name '{0}' does not follow the dotted camelCase convention")]
    InvalidName(String),

    #[error("Path {path} is declared with different middleware chains")]
    InconsistentMiddleware { path: String },

    #[error("Path {path} declares parameter '{param}' more than once")]
    DuplicateParameter { path: String, param: String },

    #[error("Unknown route name: '{0}'")]
    UnknownRoute(String),

    #[error("Route '{route}' requires parameter '{param}'")]
    MissingParameter { route: String, param: String },
}

/// Join two path fragments with exactly one `/` between segments.
///
/// A fragment of `/` (or empty) contributes nothing, and the result never ends
/// with `/` unless it is the root itself.
pub fn join_path(prefix: &str, path: &str) -> String {
    let segments: Vec<&str> = prefix
        .split('/')
        .chain(path.split('/'))
        .filter(|s| !s.is_empty())
        .collect();
    format!("/{}", segments.join("/"))
}

/// Join two dotted name fragments, skipping empty ones.
pub fn join_name(prefix: &str, name: &str) -> String {
    [prefix, name]
        .iter()
        .map(|s| s.trim_matches('.'))
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(".")
}
