use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

use regex::Regex;

use super::group::RouteGroup;
use super::{parameter_name, HttpMethod, Middleware, RouteDef, RoutingError};

/// Dotted route names: lower-camelCase identifiers separated by `.`.
static ROUTE_NAME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-z][A-Za-z0-9]*(\.[a-z][A-Za-z0-9]*)*$").expect("valid regex")
});

/// `{param}` placeholders inside a path pattern.
static PARAM_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{(\w+)\}").expect("valid regex"));

/// A validated, ordered set of routes.
#[derive(Debug, Clone)]
pub struct RouteTable {
    routes: Vec<RouteDef>,
    by_name: HashMap<String, usize>,
}

/// A request path resolved to its route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution<'t> {
    pub route: &'t RouteDef,
    /// Parameter values in path order.
    pub params: Vec<(String, String)>,
}

/// Why a (method, path) pair did not resolve.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResolveError {
    #[error("No route matches the path")]
    NotFound,

    #[error("Method not allowed; the path accepts {}", format_methods(.allowed))]
    MethodNotAllowed { allowed: Vec<HttpMethod> },
}

fn format_methods(methods: &[HttpMethod]) -> String {
    methods
        .iter()
        .map(|m| m.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

impl RouteTable {
    /// Declare routes under a root group and validate the result.
    pub fn declare(
        prefix: &str,
        name: &str,
        f: impl FnOnce(&mut RouteGroup<'_>),
    ) -> Result<Self, RoutingError> {
        let mut routes = Vec::new();
        let mut root = RouteGroup::root(prefix, name, &mut routes);
        f(&mut root);
        Self::from_routes(routes)
    }

    /// Validate an already-built list of routes.
    ///
    /// Rejects duplicate `(method, path)` pairs, duplicate or malformed names,
    /// repeated parameter names within a pattern, and paths whose routes
    /// disagree on their middleware chain.
    pub fn from_routes(routes: Vec<RouteDef>) -> Result<Self, RoutingError> {
        let mut by_name = HashMap::with_capacity(routes.len());
        let mut by_endpoint: HashMap<(HttpMethod, &str), &str> = HashMap::new();
        let mut chains: HashMap<&str, &[Middleware]> = HashMap::new();

        for (index, route) in routes.iter().enumerate() {
            if !ROUTE_NAME_RE.is_match(&route.name) {
                return Err(RoutingError::InvalidName(route.name.clone()));
            }
            if by_name.insert(route.name.clone(), index).is_some() {
                return Err(RoutingError::DuplicateName(route.name.clone()));
            }

            let endpoint = (route.method, route.path.as_str());
            if let Some(first) = by_endpoint.insert(endpoint, route.name.as_str()) {
                return Err(RoutingError::DuplicateRoute {
                    method: route.method,
                    path: route.path.clone(),
                    first: first.to_string(),
                    second: route.name.clone(),
                });
            }

            let chain = chains
                .entry(route.path.as_str())
                .or_insert(route.middleware.as_slice());
            if *chain != route.middleware.as_slice() {
                return Err(RoutingError::InconsistentMiddleware {
                    path: route.path.clone(),
                });
            }

            let mut seen = HashSet::new();
            for param in route.parameters() {
                if !seen.insert(param) {
                    return Err(RoutingError::DuplicateParameter {
                        path: route.path.clone(),
                        param: param.to_string(),
                    });
                }
            }
        }

        Ok(Self { routes, by_name })
    }

    /// All routes in declaration order.
    pub fn routes(&self) -> &[RouteDef] {
        &self.routes
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    pub fn by_name(&self, name: &str) -> Option<&RouteDef> {
        self.by_name.get(name).map(|&i| &self.routes[i])
    }

    /// Resolve a concrete request path to exactly one route.
    ///
    /// At every segment a static match beats a parameter match, so
    /// `/pages/manage/archive` never resolves to `/pages/{page}/...`. The
    /// most specific pattern wins even if it lacks the requested verb, which
    /// yields [`ResolveError::MethodNotAllowed`].
    ///
    /// Matching is exact, as in the HTTP router: only the bare root may end
    /// in `/`, and empty segments (`//`) never match.
    pub fn resolve(&self, method: HttpMethod, path: &str) -> Result<Resolution<'_>, ResolveError> {
        let segments = request_segments(path).ok_or(ResolveError::NotFound)?;

        let mut best: Option<(Vec<bool>, &str)> = None;
        for route in &self.routes {
            if let Some(rank) = match_rank(&route.path, &segments) {
                let better = match &best {
                    Some((current, _)) => rank > *current,
                    None => true,
                };
                if better {
                    best = Some((rank, route.path.as_str()));
                }
            }
        }

        let Some((_, pattern)) = best else {
            return Err(ResolveError::NotFound);
        };

        let candidates: Vec<&RouteDef> =
            self.routes.iter().filter(|r| r.path == pattern).collect();

        let Some(route) = candidates.iter().copied().find(|r| r.method == method) else {
            let mut allowed: Vec<HttpMethod> = candidates.iter().map(|r| r.method).collect();
            allowed.sort();
            return Err(ResolveError::MethodNotAllowed { allowed });
        };

        let params = pattern
            .split('/')
            .filter(|s| !s.is_empty())
            .zip(&segments)
            .filter_map(|(pat, value)| {
                parameter_name(pat).map(|name| (name.to_string(), (*value).to_string()))
            })
            .collect();

        Ok(Resolution { route, params })
    }

    /// Build a concrete path for the named route.
    ///
    /// Every `{param}` in the pattern must be supplied; extra values are
    /// ignored.
    pub fn url_for(&self, name: &str, params: &[(&str, &str)]) -> Result<String, RoutingError> {
        let route = self
            .by_name(name)
            .ok_or_else(|| RoutingError::UnknownRoute(name.to_string()))?;

        let values: HashMap<&str, &str> = params.iter().copied().collect();

        let mut missing = None;
        let url = PARAM_RE.replace_all(&route.path, |caps: &regex::Captures| {
            let key = &caps[1];
            match values.get(key) {
                Some(value) => (*value).to_string(),
                None => {
                    missing.get_or_insert_with(|| key.to_string());
                    String::new()
                }
            }
        });

        match missing {
            Some(param) => Err(RoutingError::MissingParameter {
                route: route.name.clone(),
                param,
            }),
            None => Ok(url.into_owned()),
        }
    }
}

/// Split a request path into its segments. `None` if the path is not
/// absolute or contains an empty segment.
fn request_segments(path: &str) -> Option<Vec<&str>> {
    let rest = path.strip_prefix('/')?;
    if rest.is_empty() {
        return Some(Vec::new());
    }
    let segments: Vec<&str> = rest.split('/').collect();
    segments.iter().all(|s| !s.is_empty()).then_some(segments)
}

/// Rank how `pattern` matches `segments`: `None` if it does not match,
/// otherwise one flag per segment, `true` for a static match.
///
/// Ranks compare lexicographically, so a static segment earlier in the path
/// outranks any parameter at that position.
fn match_rank(pattern: &str, segments: &[&str]) -> Option<Vec<bool>> {
    let parts: Vec<&str> = pattern.split('/').filter(|s| !s.is_empty()).collect();
    if parts.len() != segments.len() {
        return None;
    }

    parts
        .iter()
        .zip(segments)
        .map(|(part, segment)| match parameter_name(part) {
            Some(_) => Some(false),
            None if part == segment => Some(true),
            None => None,
        })
        .collect()
}
