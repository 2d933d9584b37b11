//! Middleware for the route groups' `auth`, `setUserLocale` and
//! `setTeamContext` contracts.
//!
//! Each module provides an extractor plus a `from_fn` middleware that runs it
//! and stores the result in the request extensions:
//!
//! - [`auth::AuthUser`] / [`auth::require_auth`] -- JWT Bearer authentication.
//! - [`locale::UserLocale`] / [`locale::set_user_locale`] -- locale negotiation.
//! - [`team::TeamContext`] / [`team::set_team_context`] -- `X-Team-Id` team scope.
//! - [`context::RequestContext`] -- whatever the above resolved, for handlers.

pub mod auth;
pub mod context;
pub mod locale;
pub mod team;
