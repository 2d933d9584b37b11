//! Team transactions tied to orders: shipping payments, cash on delivery, etc.

use mercato_core::routing::RouteGroup;

/// Routes mounted at `/v1/team/transactions`.
pub fn declare(transactions: &mut RouteGroup<'_>) {
    transactions.get("/", "index", "simple list of team transactions");
    transactions.group("/records", "records", |records| {
        records
            .get("/", "list", "paginated full list of team transactions")
            .paginated();
        records.get("/{transaction}", "view", "view team transaction");
    });
}
