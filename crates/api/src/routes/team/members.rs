//! Team members and member invitations.

use mercato_core::routing::RouteGroup;

/// Routes mounted at `/v1/team/members`.
///
/// ```text
/// GET                /                                        -> index
/// GET                /records                                 -> records.list
/// GET|PUT|DELETE     /records/{member}                        -> records.view|update|detach
/// DELETE             /manage/detach                           -> manage.detach (bulk)
/// GET                /invitations                             -> invitations.index
/// GET|POST           /invitations/records                     -> invitations.records.list|create
/// GET|PUT|DELETE     /invitations/records/{invitation}        -> invitations.records.view|update|destroy
/// POST               /invitations/records/{invitation}/resend -> invitations.records.resend
/// DELETE             /invitations/manage/destroy              -> invitations.manage.destroy (bulk)
/// ```
pub fn declare(members: &mut RouteGroup<'_>) {
    members.get("/", "index", "simple list of members");
    members.group("/records", "records", |records| {
        records
            .get("/", "list", "paginated full list of members")
            .paginated();
        records.get(
            "/{member}",
            "view",
            "view member and its configuration related to team",
        );
        records.put(
            "/{member}",
            "update",
            "update member configuration related to team",
        );
        records.delete("/{member}", "detach", "detach single member from team");
    });
    members.group("/manage", "manage", |manage| {
        manage
            .delete("/detach", "detach", "detach multiple members from team")
            .bulk();
    });

    members.group("/invitations", "invitations", |invitations| {
        invitations.get("/", "index", "simple list of member invitations");
        invitations.group("/records", "records", |records| {
            records
                .get("/", "list", "paginated full list of member invitations")
                .paginated();
            records.post("/", "create", "create (and send) member invitation");
            records.get("/{invitation}", "view", "view member invitation");
            records.put("/{invitation}", "update", "update member invitation");
            records.delete(
                "/{invitation}",
                "destroy",
                "destroy (cancel) single member invitation",
            );
            records
                .post("/{invitation}/resend", "resend", "resend member invitation")
                .bare();
        });
        invitations.group("/manage", "manage", |manage| {
            manage
                .delete(
                    "/destroy",
                    "destroy",
                    "destroy (cancel) multiple member invitations",
                )
                .bulk();
        });
    });
}
