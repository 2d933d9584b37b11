use mercato_core::routing::RouteGroup;

/// Routes mounted at `/v1/team/assets/warehouses`.
///
/// ```text
/// GET              /                                              -> index
/// GET|POST         /records                                       -> records.list|create
/// GET|PUT|DELETE   /records/{warehouse}                           -> records.view|update|destroy
/// PATCH            /records/{warehouse}/action                    -> records.action
/// GET              /records/{warehouse}/products                  -> records.products.list
/// GET|POST         /records/{warehouse}/products/records          -> records.products.records.list|attach
/// DELETE           /records/{warehouse}/products/records/{product} -> records.products.records.detach
/// POST             /manage/archive                                -> manage.archive
/// POST             /manage/restore                                -> manage.restore
/// DELETE           /manage/destroy                                -> manage.destroy
/// ```
pub fn declare(warehouses: &mut RouteGroup<'_>) {
    warehouses.get("/", "index", "simple list of warehouses");
    warehouses.group("/records", "records", |records| {
        records
            .get("/", "list", "paginated full list of warehouses")
            .paginated();
        records.post("/", "create", "create new warehouse");
        records.get("/{warehouse}", "view", "view warehouse");
        records.put("/{warehouse}", "update", "update warehouse");
        records
            .patch(
                "/{warehouse}/action",
                "action",
                "do some available action such as archive or restore, e.g.: { \"action\": \"archive\" }",
            )
            .action();
        records.delete("/{warehouse}", "destroy", "destroy warehouse");

        // Products stocked in the warehouse (many-to-many, optional).
        records.group("{warehouse}/products", "products", |products| {
            products.get("/", "list", "simple list of products attached to warehouse");
            products.group("/records", "records", |records| {
                records
                    .get(
                        "/",
                        "list",
                        "paginated full list of products attached to warehouse",
                    )
                    .paginated();
                records
                    .post(
                        "/",
                        "attach",
                        "attach single or multiple products to warehouse",
                    )
                    .bulk();
                records.delete(
                    "/{product}",
                    "detach",
                    "detach single product from warehouse",
                );
            });
        });
    });

    warehouses.group("/manage", "manage", |manage| {
        manage.post("/archive", "archive", "archive multiple warehouses").bulk();
        manage.post("/restore", "restore", "restore multiple warehouses").bulk();
        manage.delete("/destroy", "destroy", "destroy multiple warehouses").bulk();
    });
}
