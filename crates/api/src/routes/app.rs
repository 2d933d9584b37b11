//! Route declarations for `/v1/app`: global read-only lookups that support
//! the application's operations. Any authenticated user can access them.

use mercato_core::routing::RouteGroup;

/// Routes mounted at `/v1/app`.
///
/// ```text
/// GET /locations                                          -> locations.index
/// GET /locations/{location}                               -> locations.view
/// GET /locations/{location}/postal-codes                  -> locations.postalCodes
/// GET /locations/{location}/postal-codes/{postalCode}     -> locations.postalCodes.view
/// GET /banks                                              -> banks.index
/// GET /banks/{bank}                                       -> banks.view
/// GET /couriers                                           -> couriers.index
/// GET /couriers/{courier}                                 -> couriers.view
/// GET /couriers/{courier}/services                        -> couriers.services
/// GET /couriers/{courier}/services/{service}              -> couriers.services.view
/// ```
pub fn declare(app: &mut RouteGroup<'_>) {
    app.group("/locations", "locations", |locations| {
        locations.get(
            "/",
            "index",
            "simple list of active locations, searchable by keywords",
        );
        locations.get("/{location}", "view", "view location");
        locations.get(
            "/{location}/postal-codes",
            "postalCodes",
            "simple list of active postal codes",
        );
        locations.get(
            "/{location}/postal-codes/{postalCode}",
            "postalCodes.view",
            "view postal code",
        );
    });

    app.group("/banks", "banks", |banks| {
        banks.get("/", "index", "simple list of active banks");
        banks.get("/{bank}", "view", "view bank");
    });

    app.group("/couriers", "couriers", |couriers| {
        couriers.get("/", "index", "simple list of active couriers");
        couriers.get("/{courier}", "view", "view courier");
        couriers.get(
            "/{courier}/services",
            "services",
            "simple list of active courier services",
        );
        couriers.get(
            "/{courier}/services/{service}",
            "services.view",
            "view courier service",
        );
    });
}
