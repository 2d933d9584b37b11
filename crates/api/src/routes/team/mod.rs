//! Route declarations for `/v1/team`.
//!
//! Every route here runs in a team context: the team is taken from the
//! `X-Team-Id` request header.

pub mod agents;
pub mod assets;
pub mod members;
pub mod transactions;
pub mod wallet;

use mercato_core::routing::RouteGroup;

/// Routes mounted at `/v1/team`.
pub fn declare(team: &mut RouteGroup<'_>) {
    team.group("/wallet", "wallet", wallet::declare);
    team.group("/transactions", "transactions", transactions::declare);
    team.group("/members", "members", members::declare);
    team.group("/agents", "agents", agents::declare);
    team.group("/assets", "assets", assets::declare);
}
