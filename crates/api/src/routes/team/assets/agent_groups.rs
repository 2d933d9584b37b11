use mercato_core::routing::RouteGroup;

/// Routes mounted at `/v1/team/assets/agent-groups`.
///
/// ```text
/// GET              /                                               -> index
/// GET|POST         /records                                        -> records.list|create
/// GET|PUT|DELETE   /records/{agentGroup}                           -> records.view|update|destroy
/// GET              /records/{agentGroup}/agents                    -> records.agents.index
/// GET              /records/{agentGroup}/agents/records            -> records.agents.records.list
/// GET|PUT|DELETE   /records/{agentGroup}/agents/records/{agent}    -> records.agents.records.view|update|detach
/// POST             /records/{agentGroup}/agents/manage/attach      -> records.agents.manage.attach
/// PUT              /records/{agentGroup}/agents/manage/update      -> records.agents.manage.update
/// DELETE           /records/{agentGroup}/agents/manage/detach      -> records.agents.manage.detach
/// GET              /records/{agentGroup}/pages                     -> records.pages.index
/// POST             /records/{agentGroup}/pages/manage/attach       -> records.pages.manage.attach
/// DELETE           /records/{agentGroup}/pages/manage/detach       -> records.pages.manage.detach
/// DELETE           /manage/destroy                                 -> manage.destroy
/// ```
pub fn declare(groups: &mut RouteGroup<'_>) {
    groups.get("/", "index", "simple list of agent groups");
    groups.group("/records", "records", |records| {
        records
            .get("/", "list", "paginated full list of agent groups")
            .paginated();
        records.post("/", "create", "create a new agent group");
        records.get("/{agentGroup}", "view", "view agent group");
        records.put("/{agentGroup}", "update", "update agent group");
        records.delete("/{agentGroup}", "destroy", "remove agent group");

        // Agents in the group (many-to-many, with pivot values).
        records.group("/{agentGroup}/agents", "agents", |agents| {
            agents.get("/", "index", "simple list of agents in agent group");
            agents.group("/records", "records", |records| {
                records
                    .get("/", "list", "paginated full list of agents in agent group")
                    .paginated();
                records.get(
                    "/{agent}",
                    "view",
                    "view single agent with pivot values in agent group",
                );
                records.put(
                    "/{agent}",
                    "update",
                    "update single agent pivot values in agent group",
                );
                records.delete("/{agent}", "detach", "detach single agent from agent group");
            });
            agents.group("/manage", "manage", |manage| {
                manage
                    .post("/attach", "attach", "attach multiple agents to agent group")
                    .bulk();
                manage.put(
                    "/update",
                    "update",
                    "update agents attachements in agent group (sync) and the pivot values",
                );
                manage
                    .delete("/detach", "detach", "detach multiple agents from agent group")
                    .bulk();
            });
        });

        // Pages handled by the group (one-to-many).
        records.group("/{agentGroup}/pages", "pages", |pages| {
            pages.get("/", "index", "simple list of pages in agent group");
            pages.group("/manage", "manage", |manage| {
                manage
                    .post("/attach", "attach", "attach multiple pages to agent group")
                    .bulk();
                manage
                    .delete("/detach", "detach", "detach multiple pages from agent group")
                    .bulk();
            });
        });
    });
    groups.group("/manage", "manage", |manage| {
        manage
            .delete("/destroy", "destroy", "destroy (cancel) multiple agent groups")
            .bulk();
    });
}
