use std::convert::Infallible;

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use mercato_core::types::RecordId;
use serde::Serialize;

use super::auth::AuthUser;
use super::locale::UserLocale;
use super::team::TeamContext;

/// Everything the route's middleware chain resolved for this request.
///
/// Never rejects: fields are `None` when the route does not run the
/// corresponding middleware.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RequestContext {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<RecordId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team_id: Option<RecordId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
}

impl RequestContext {
    pub fn is_empty(&self) -> bool {
        self.user_id.is_none() && self.team_id.is_none() && self.locale.is_none()
    }
}

impl<S> FromRequestParts<S> for RequestContext
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(RequestContext {
            user_id: parts
                .extensions
                .get::<AuthUser>()
                .map(|u| u.user_id.clone()),
            team_id: parts
                .extensions
                .get::<TeamContext>()
                .map(|t| t.team_id.clone()),
            locale: parts.extensions.get::<UserLocale>().map(|l| l.0.clone()),
        })
    }
}
