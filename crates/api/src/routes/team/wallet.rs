//! Team wallet balance, deposits and withdrawals.

use mercato_core::routing::RouteGroup;

/// Routes mounted at `/v1/team/wallet`.
///
/// ```text
/// GET  /                               -> view
/// GET  /balance                        -> balance
/// GET  /transactions                   -> transactions
/// GET  /transactions/{transaction}     -> transactions.view
/// POST /deposit                        -> deposit
/// POST /withdraw                       -> withdraw
/// ```
pub fn declare(wallet: &mut RouteGroup<'_>) {
    wallet.get(
        "/",
        "view",
        "view team wallet balance details (balance, pending balance, pending deposit count & amount, \
         and pending withdrawal count & amount)",
    );
    wallet.get("/balance", "balance", "view team wallet balance");
    wallet
        .get(
            "/transactions",
            "transactions",
            "list team wallet deposits and withdrawals",
        )
        .paginated();
    wallet.get(
        "/transactions/{transaction}",
        "transactions.view",
        "view team wallet deposit or withdrawal",
    );
    wallet.post("/deposit", "deposit", "deposit to team wallet");
    wallet.post("/withdraw", "withdraw", "withdraw from team wallet");
}
