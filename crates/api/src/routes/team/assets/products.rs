use mercato_core::routing::RouteGroup;

/// Routes mounted at `/v1/team/assets/products`.
///
/// ```text
/// GET              /                                              -> index
/// GET|POST         /records                                       -> records.list|create
/// GET|PUT|DELETE   /records/{product}                             -> records.view|update|destroy
/// PATCH            /records/{product}/action                      -> records.action
/// GET              /records/{product}/variants                    -> records.variants.index
/// GET              /records/{product}/variants/records            -> records.variants.records.list
/// PUT|DELETE       /records/{product}/variants/records/{variant}  -> records.variants.records.update|destroy
/// POST|PUT|DELETE  /records/{product}/variants/manage/*           -> records.variants.manage.create|update|destroy
/// GET              /records/{product}/pages                       -> records.pages.list
/// GET              /records/{product}/pages/records               -> records.pages.records.list
/// DELETE           /records/{product}/pages/records/{page}        -> records.pages.records.detach
/// POST|DELETE      /records/{product}/pages/manage/*              -> records.pages.manage.attach|detach
/// GET              /records/{product}/warehouses                  -> records.warehouses.list
/// GET              /records/{product}/warehouses/records          -> records.warehouses.records.list
/// DELETE           /records/{product}/warehouses/records/{warehouse} -> records.warehouses.records.detach
/// POST|DELETE      /records/{product}/warehouses/manage/*         -> records.warehouses.manage.attach|detach
/// POST             /manage/archive                                -> manage.archive
/// POST             /manage/restore                                -> manage.restore
/// DELETE           /manage/destroy                                -> manage.destroy
/// ```
pub fn declare(products: &mut RouteGroup<'_>) {
    products.get("/", "index", "simple list of products");
    products.group("/records", "records", |records| {
        records
            .get("/", "list", "paginated full list of products")
            .paginated();
        records.post("/", "create", "create new product");
        records.get("/{product}", "view", "view product");
        records.put("/{product}", "update", "update product");
        records
            .patch(
                "/{product}/action",
                "action",
                "do some available action such as archive or restore, e.g.: { \"action\": \"archive\" }",
            )
            .action();
        records.delete("/{product}", "destroy", "destroy team product");

        // Variants (one-to-many, optional).
        records.group("{product}/variants", "variants", |variants| {
            variants.get("/", "index", "simple list of variants of the product");
            variants.group("/records", "records", |records| {
                records
                    .get("/", "list", "paginated full list of variants of the product")
                    .paginated();
                records.put("/{variant}", "update", "update single variant of the product");
                records.delete("/{variant}", "destroy", "destroy single variant of the product");
            });
            variants.group("/manage", "manage", |manage| {
                manage.post("/create", "create", "create multiple variants of the product");
                manage.put("/update", "update", "update multiple variants of the product");
                manage
                    .delete("/destroy", "destroy", "destroy multiple variants of the product")
                    .bulk();
            });
        });

        // Pages selling the product (one-to-many, optional).
        records.group("{product}/pages", "pages", |pages| {
            pages.get("/", "list", "simple list of pages attached to product");
            pages.group("/records", "records", |records| {
                records
                    .get("/", "list", "paginated full list of pages attached to product")
                    .paginated();
                records.delete("/{page}", "detach", "detach single page from product");
            });
            pages.group("/manage", "manage", |manage| {
                manage
                    .post("/attach", "attach", "attach multiple pages to product")
                    .bulk();
                manage
                    .delete("/detach", "detach", "detach multiple pages from product")
                    .bulk();
            });
        });

        // Warehouses stocking the product (many-to-many).
        records.group("{product}/warehouses", "warehouses", |warehouses| {
            warehouses.get("/", "list", "simple list of warehouses attached to product");
            warehouses.group("/records", "records", |records| {
                records
                    .get(
                        "/",
                        "list",
                        "paginated full list of warehouses attached to product",
                    )
                    .paginated();
                records.delete(
                    "/{warehouse}",
                    "detach",
                    "detach single warehouse from product",
                );
            });
            warehouses.group("/manage", "manage", |manage| {
                manage
                    .post("/attach", "attach", "attach multiple warehouses to product")
                    .bulk();
                manage
                    .delete("/detach", "detach", "detach multiple warehouses from product")
                    .bulk();
            });
        });
    });

    products.group("/manage", "manage", |manage| {
        manage.post("/archive", "archive", "archive multiple products").bulk();
        manage.post("/restore", "restore", "restore multiple products").bulk();
        manage.delete("/destroy", "destroy", "destroy multiple products").bulk();
    });
}
