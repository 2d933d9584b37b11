//! Team assets: agent groups, pages, products and warehouses.
//!
//! Each asset follows the same layout:
//!
//! ```text
//! /                         index (lightweight list)
//! /records                  records.list (paginated), records.create
//! /records/{id}             records.view, records.update, records.destroy
//! /records/{id}/action      records.action ({"action": "archive" | "restore"})
//! /records/{id}/<relation>  relationship sub-resources
//! /manage/*                 bulk operations over {"ids": [...]}
//! ```

pub mod agent_groups;
pub mod pages;
pub mod products;
pub mod warehouses;

use mercato_core::routing::RouteGroup;

/// Routes mounted at `/v1/team/assets`.
pub fn declare(assets: &mut RouteGroup<'_>) {
    assets.group("/agent-groups", "agentGroups", agent_groups::declare);
    assets.group("/pages", "pages", pages::declare);
    assets.group("/products", "products", products::declare);
    assets.group("/warehouses", "warehouses", warehouses::declare);
}
