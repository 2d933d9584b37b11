//! Team context resolution from the `X-Team-Id` header.

use std::sync::LazyLock;

use axum::extract::{FromRequestParts, Request};
use axum::http::request::Parts;
use axum::middleware::Next;
use axum::response::Response;
use mercato_core::error::CoreError;
use mercato_core::types::RecordId;
use regex::Regex;

use crate::error::AppError;

/// Header carrying the team every `/team` request is scoped to.
pub const TEAM_HEADER: &str = "x-team-id";

/// Accepted team identifier shape.
static TEAM_ID_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_-]{1,64}$").expect("valid regex"));

/// The team the current request operates on.
///
/// Membership of the authenticated user in this team is checked by the
/// business layer, not here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamContext {
    pub team_id: RecordId,
}

impl<S> FromRequestParts<S> for TeamContext
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        if let Some(team) = parts.extensions.get::<TeamContext>() {
            return Ok(team.clone());
        }

        let raw = parts.headers.get(TEAM_HEADER).ok_or_else(|| {
            tracing::debug!("Rejected team request without X-Team-Id");
            AppError::BadRequest("Missing X-Team-Id header".into())
        })?;

        let team_id = raw
            .to_str()
            .ok()
            .map(str::trim)
            .filter(|id| TEAM_ID_RE.is_match(id))
            .ok_or_else(|| {
                AppError::Core(CoreError::Validation(
                    "X-Team-Id must be 1-64 characters of letters, digits, '-' or '_'".into(),
                ))
            })?;

        Ok(TeamContext {
            team_id: team_id.to_string(),
        })
    }
}

/// `setTeamContext` middleware: reject requests without a usable `X-Team-Id`.
pub async fn set_team_context(team: TeamContext, mut request: Request, next: Next) -> Response {
    tracing::debug!(team_id = %team.team_id, "Resolved team context");
    request.extensions_mut().insert(team);
    next.run(request).await
}
