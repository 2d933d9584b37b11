use super::{join_name, join_path, Contract, HttpMethod, Middleware, RouteDef};

/// Builder scope for declaring routes under a shared path prefix, name prefix
/// and middleware chain.
///
/// ```ignore
/// v1.group("/pages", "pages", |pages| {
///     pages.get("/", "index", "simple list of pages");
///     pages.group("/manage", "manage", |manage| {
///         manage.post("/archive", "archive", "archive multiple pages").bulk();
///     });
/// });
/// ```
pub struct RouteGroup<'a> {
    prefix: String,
    name: String,
    middleware: Vec<Middleware>,
    routes: &'a mut Vec<RouteDef>,
}

impl<'a> RouteGroup<'a> {
    pub(crate) fn root(prefix: &str, name: &str, routes: &'a mut Vec<RouteDef>) -> Self {
        Self {
            prefix: join_path("", prefix),
            name: join_name("", name),
            middleware: Vec::new(),
            routes,
        }
    }

    /// Declare a nested group that inherits this group's middleware.
    pub fn group(&mut self, prefix: &str, name: &str, f: impl FnOnce(&mut RouteGroup<'_>)) {
        self.group_with(prefix, name, &[], f);
    }

    /// Declare a nested group that appends `middleware` to the inherited chain.
    pub fn group_with(
        &mut self,
        prefix: &str,
        name: &str,
        middleware: &[Middleware],
        f: impl FnOnce(&mut RouteGroup<'_>),
    ) {
        let mut chain = self.middleware.clone();
        chain.extend(middleware.iter().copied().filter(|m| !self.middleware.contains(m)));

        let mut child = RouteGroup {
            prefix: join_path(&self.prefix, prefix),
            name: join_name(&self.name, name),
            middleware: chain,
            routes: &mut *self.routes,
        };
        f(&mut child);
    }

    pub fn get(&mut self, path: &str, name: &str, description: &str) -> RouteEntry<'_> {
        self.add(HttpMethod::Get, path, name, description, Contract::None)
    }

    pub fn post(&mut self, path: &str, name: &str, description: &str) -> RouteEntry<'_> {
        self.add(HttpMethod::Post, path, name, description, Contract::Object)
    }

    pub fn put(&mut self, path: &str, name: &str, description: &str) -> RouteEntry<'_> {
        self.add(HttpMethod::Put, path, name, description, Contract::Object)
    }

    pub fn patch(&mut self, path: &str, name: &str, description: &str) -> RouteEntry<'_> {
        self.add(HttpMethod::Patch, path, name, description, Contract::Object)
    }

    pub fn delete(&mut self, path: &str, name: &str, description: &str) -> RouteEntry<'_> {
        self.add(HttpMethod::Delete, path, name, description, Contract::None)
    }

    fn add(
        &mut self,
        method: HttpMethod,
        path: &str,
        name: &str,
        description: &str,
        contract: Contract,
    ) -> RouteEntry<'_> {
        self.routes.push(RouteDef {
            method,
            path: join_path(&self.prefix, path),
            name: join_name(&self.name, name),
            description: description.to_string(),
            middleware: self.middleware.clone(),
            contract,
        });
        let index = self.routes.len() - 1;
        RouteEntry {
            route: &mut self.routes[index],
        }
    }
}

/// Handle to a freshly declared route for overriding its default contract.
///
/// Defaults: `GET` and `DELETE` take no input, `POST`/`PUT`/`PATCH` take a
/// JSON object.
pub struct RouteEntry<'r> {
    route: &'r mut RouteDef,
}

impl RouteEntry<'_> {
    /// Paginated listing (`?page=&per_page=`).
    pub fn paginated(self) -> Self {
        self.contract(Contract::Paginated)
    }

    /// No request body.
    pub fn bare(self) -> Self {
        self.contract(Contract::None)
    }

    /// State transition taking `{"action": ...}`.
    pub fn action(self) -> Self {
        self.contract(Contract::Action)
    }

    /// Bulk operation over `{"ids": [...]}`.
    pub fn bulk(self) -> Self {
        self.contract(Contract::Bulk)
    }

    /// Replace the foreign key `field`.
    pub fn change(self, field: &'static str) -> Self {
        self.contract(Contract::Change {
            field,
            nullable: false,
        })
    }

    /// Add, replace or remove (`null`) the optional foreign key `field`.
    pub fn change_optional(self, field: &'static str) -> Self {
        self.contract(Contract::Change {
            field,
            nullable: true,
        })
    }

    fn contract(self, contract: Contract) -> Self {
        self.route.contract = contract;
        self
    }
}
