use mercato_core::routing::RouteGroup;

/// Routes mounted at `/v1/team/assets/pages`.
///
/// ```text
/// GET              /                                    -> index
/// GET|POST         /records                             -> records.list|create
/// GET|PUT|DELETE   /records/{page}                      -> records.view|update|destroy
/// PATCH            /records/{page}/action               -> records.action
/// GET|PUT          /records/{page}/setting              -> records.setting.view|update
/// GET              /records/{page}/product              -> records.product.view
/// PATCH            /records/{page}/product/change       -> records.product.change
/// GET              /records/{page}/agent-group          -> records.agentGroup.view
/// PATCH            /records/{page}/agent-group/change   -> records.agentGroup.change
/// POST             /manage/archive                      -> manage.archive
/// POST             /manage/restore                      -> manage.restore
/// DELETE           /manage/destroy                      -> manage.destroy
/// ```
pub fn declare(pages: &mut RouteGroup<'_>) {
    pages.get("/", "index", "simple list of pages");
    pages.group("/records", "records", |records| {
        records
            .get("/", "list", "paginated full list of pages")
            .paginated();
        records.post("/", "create", "create new page");
        records.get("/{page}", "view", "view page");
        records.put("/{page}", "update", "update page");
        records
            .patch(
                "/{page}/action",
                "action",
                "do some available action such as archive or restore, e.g.: { \"action\": \"archive\" }",
            )
            .action();
        records.delete("/{page}", "destroy", "destroy page");

        // Setting (one-to-one).
        records.group("{page}/setting", "setting", |setting| {
            setting.get("/", "view", "view the page setting");
            setting.put("/", "update", "update the page setting");
        });

        // Product (many-to-one).
        records.group("{page}/product", "product", |product| {
            product.get("/", "view", "view product attached to page");
            product
                .patch(
                    "/change",
                    "change",
                    "change the product attached to page, e.g.: { \"product_id\": \"TPD123qweasd\" }",
                )
                .change("product_id");
        });

        // Agent group (many-to-one, optional).
        records.group("{page}/agent-group", "agentGroup", |group| {
            group.get("/", "view", "view agent group attached to page");
            group
                .patch(
                    "/change",
                    "change",
                    "add, replace, or remove the agent group from page, e.g.: { \"agent_group_id\": \"AGG123qweasd\" }",
                )
                .change_optional("agent_group_id");
        });
    });

    pages.group("/manage", "manage", |manage| {
        manage.post("/archive", "archive", "archive multiple pages").bulk();
        manage.post("/restore", "restore", "restore multiple pages").bulk();
        manage.delete("/destroy", "destroy", "destroy multiple pages").bulk();
    });
}
