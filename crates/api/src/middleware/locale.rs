//! Locale negotiation for user-scoped routes.

use axum::extract::{Request, State};
use axum::http::header::{ACCEPT_LANGUAGE, CONTENT_LANGUAGE};
use axum::http::HeaderValue;
use axum::middleware::Next;
use axum::response::Response;

use crate::state::AppState;

/// Locale resolved for the current request (lower-case primary subtag).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserLocale(pub String);

/// `setUserLocale` middleware: resolve the locale from `Accept-Language`,
/// expose it to handlers, and echo it in `Content-Language`.
pub async fn set_user_locale(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Response {
    let requested = request
        .headers()
        .get(ACCEPT_LANGUAGE)
        .and_then(|v| v.to_str().ok());
    let locale = negotiate_locale(
        requested,
        &state.config.supported_locales,
        &state.config.default_locale,
    );

    request.extensions_mut().insert(UserLocale(locale.clone()));
    let mut response = next.run(request).await;

    if let Ok(value) = HeaderValue::from_str(&locale) {
        response.headers_mut().insert(CONTENT_LANGUAGE, value);
    }
    response
}

/// Pick the best supported locale for an `Accept-Language` header value.
///
/// Entries are ranked by their `q` weight (default `1`, ties keep header
/// order) and matched on their primary subtag, so `id-ID` selects `id`.
/// Entries with `q=0`, weights outside `0..=1` (including `inf` and `NaN`),
/// wildcards and unsupported tags are skipped; when nothing matches the
/// default wins.
pub fn negotiate_locale(header: Option<&str>, supported: &[String], default: &str) -> String {
    let Some(header) = header else {
        return default.to_string();
    };

    let mut ranked: Vec<(f32, String)> = header
        .split(',')
        .filter_map(|entry| {
            let mut parts = entry.split(';');
            let tag = parts.next()?.trim();
            let weight = parts
                .find_map(|p| p.trim().strip_prefix("q="))
                .map_or(Some(1.0), |q| q.trim().parse::<f32>().ok())?;
            let primary = tag.split('-').next()?.to_ascii_lowercase();
            let usable = weight > 0.0 && weight <= 1.0;
            (usable && !primary.is_empty() && primary != "*").then_some((weight, primary))
        })
        .collect();

    // Stable sort keeps header order among equal weights.
    ranked.sort_by(|a, b| b.0.total_cmp(&a.0));

    ranked
        .into_iter()
        .map(|(_, tag)| tag)
        .find(|tag| supported.contains(tag))
        .unwrap_or_else(|| default.to_string())
}
