//! Route declarations for `/v1/user`: the authenticated user's own profile,
//! teams and agent profile.

use mercato_core::routing::RouteGroup;

/// Routes mounted at `/v1/user`.
///
/// ```text
/// GET|PUT   /me                              -> me.view, me.update
/// GET       /teams                           -> teams.index
/// GET|POST  /teams/records                   -> teams.records.list, teams.records.create
/// POST      /teams/records/check-subdomain   -> teams.records.checkSubdomain
/// POST|GET|PUT /agent                        -> agent.create, agent.view, agent.update
/// GET       /agent/teams                     -> agent.teams.index
/// GET       /agent/teams/records             -> agent.teams.records.list
/// ```
pub fn declare(user: &mut RouteGroup<'_>) {
    user.group("/me", "me", |me| {
        me.get("/", "view", "current user details");
        me.put("/", "update", "update user details");
    });

    // Teams the user owns or is a member of (many-to-many, optional).
    user.group("/teams", "teams", |teams| {
        teams.get("/", "index", "simple list of teams with few details");
        teams.group("/records", "records", |records| {
            records
                .get(
                    "/",
                    "list",
                    "paginated full list of teams associated to the user, either as owner or member",
                )
                .paginated();
            records.post("/", "create", "create team");
            records.post(
                "/check-subdomain",
                "checkSubdomain",
                "check subdomain availability",
            );
        });
    });

    // Agent profile (one-to-one, optional).
    user.group("/agent", "agent", |agent| {
        agent.post(
            "/",
            "create",
            "create an agent profile, forbidden if user already has an agent profile. \
             once the agent profile is created, it cannot be deleted.",
        );
        agent.get("/", "view", "view the agent profile");
        agent.put("/", "update", "update the agent profile");

        // Teams the agent works for (many-to-many).
        agent.group("/teams", "teams", |teams| {
            teams.get("/", "index", "simple list of teams attached to agent");
            teams.group("/records", "records", |records| {
                records
                    .get(
                        "/",
                        "list",
                        "paginated full list of teams attached to the user as agent",
                    )
                    .paginated();
            });
        });
    });
}
