//! Agents working for the team and agent invitations.

use mercato_core::routing::RouteGroup;

/// Routes mounted at `/v1/team/agents`.
///
/// ```text
/// GET              /                                        -> index
/// GET              /records                                 -> records.list
/// GET|DELETE       /records/{agent}                         -> records.view|detach
/// GET              /records/{agent}/groups                  -> records.groups.index
/// GET              /invitations                             -> invitations.index
/// GET|POST         /invitations/records                     -> invitations.records.list|send
/// GET|PUT|DELETE   /invitations/records/{invitation}        -> invitations.records.view|update|destroy
/// POST             /invitations/records/{invitation}/resend -> invitations.records.resend
/// DELETE           /invitations/manage/destroy              -> invitations.manage.destroy (bulk)
/// ```
pub fn declare(agents: &mut RouteGroup<'_>) {
    agents.get("/", "index", "simple list of agents");
    agents.group("/records", "records", |records| {
        records
            .get("/", "list", "paginated full list of agents")
            .paginated();
        records.get(
            "/{agent}",
            "view",
            "view agent and its configuration related to team",
        );
        records.delete("/{agent}", "detach", "detach single agent from team");

        // Agent groups the agent belongs to (many-to-many).
        records.group("/{agent}/groups", "groups", |groups| {
            groups.get("/", "index", "simple list of agent groups attached to agent");
        });
    });

    agents.group("/invitations", "invitations", |invitations| {
        invitations.get("/", "index", "simple list of agent invitations");
        invitations.group("/records", "records", |records| {
            records
                .get("/", "list", "paginated full list of agent invitations")
                .paginated();
            records.post("/", "send", "create (and send) agent invitation");
            records.get("/{invitation}", "view", "view agent invitation");
            records
                .post("/{invitation}/resend", "resend", "resend agent invitation")
                .bare();
            records.put("/{invitation}", "update", "update agent invitation");
            records.delete(
                "/{invitation}",
                "destroy",
                "destroy (cancel) single agent invitation",
            );
        });
        invitations.group("/manage", "manage", |manage| {
            manage
                .delete(
                    "/destroy",
                    "destroy",
                    "destroy (cancel) multiple agent invitations",
                )
                .bulk();
        });
    });
}
