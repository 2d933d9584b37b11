//! Placeholder handlers serving every declared route.
//!
//! Each route gets one handler chosen by its [`Contract`]. The handler checks
//! the contract's input shape and answers with the route's name and
//! description; the real controllers replace these one resource at a time.

use std::sync::Arc;

use axum::extract::Path;
use axum::routing::{on, MethodFilter, MethodRouter};
use axum::Json;
use indexmap::IndexMap;
use mercato_core::requests::{parse_change, ActionRequest, BulkIdsRequest, PageRequest};
use mercato_core::routing::{Contract, HttpMethod, RouteDef};
use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::AppResult;
use crate::extract::{JsonBody, Pagination, ValidatedJson};
use crate::middleware::context::RequestContext;
use crate::response::DataResponse;
use crate::state::AppState;

/// Path parameters in path order.
pub type PathParams = IndexMap<String, String>;

/// Body of every placeholder response, wrapped in `{ "data": ... }`.
#[derive(Debug, Serialize)]
pub struct Placeholder {
    /// Dotted route name.
    pub route: String,
    pub description: String,
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub params: PathParams,
    #[serde(skip_serializing_if = "RequestContext::is_empty")]
    pub context: RequestContext,
    /// The accepted input, after contract checks.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pagination: Option<PageRequest>,
}

pub type PlaceholderResponse = AppResult<Json<DataResponse<Placeholder>>>;

/// Build the method router serving `route`.
pub fn endpoint(route: Arc<RouteDef>) -> MethodRouter<AppState> {
    let filter = method_filter(route.method);
    let contract = route.contract;

    match contract {
        Contract::None => on(
            filter,
            move |ctx: RequestContext, Path(params): Path<PathParams>| {
                describe(route, ctx, params)
            },
        ),
        Contract::Paginated => on(
            filter,
            move |ctx: RequestContext,
                  Path(params): Path<PathParams>,
                  Pagination(page): Pagination| {
                describe_page(route, ctx, params, page)
            },
        ),
        Contract::Object => on(
            filter,
            move |ctx: RequestContext,
                  Path(params): Path<PathParams>,
                  JsonBody(body): JsonBody<Map<String, Value>>| {
                describe_object(route, ctx, params, body)
            },
        ),
        Contract::Action => on(
            filter,
            move |ctx: RequestContext,
                  Path(params): Path<PathParams>,
                  JsonBody(body): JsonBody<ActionRequest>| {
                describe_action(route, ctx, params, body)
            },
        ),
        Contract::Bulk => on(
            filter,
            move |ctx: RequestContext,
                  Path(params): Path<PathParams>,
                  ValidatedJson(body): ValidatedJson<BulkIdsRequest>| {
                describe_bulk(route, ctx, params, body)
            },
        ),
        Contract::Change { field, nullable } => on(
            filter,
            move |ctx: RequestContext,
                  Path(params): Path<PathParams>,
                  JsonBody(body): JsonBody<Map<String, Value>>| {
                describe_change(route, ctx, params, body, field, nullable)
            },
        ),
    }
}

fn method_filter(method: HttpMethod) -> MethodFilter {
    match method {
        HttpMethod::Get => MethodFilter::GET,
        HttpMethod::Post => MethodFilter::POST,
        HttpMethod::Put => MethodFilter::PUT,
        HttpMethod::Patch => MethodFilter::PATCH,
        HttpMethod::Delete => MethodFilter::DELETE,
    }
}

fn respond(
    route: &RouteDef,
    context: RequestContext,
    params: PathParams,
    input: Option<Value>,
    pagination: Option<PageRequest>,
) -> Json<DataResponse<Placeholder>> {
    tracing::debug!(route = %route.name, method = %route.method, "Placeholder handler");
    Json(DataResponse {
        data: Placeholder {
            route: route.name.clone(),
            description: route.description.clone(),
            params,
            context,
            input,
            pagination,
        },
    })
}

async fn describe(
    route: Arc<RouteDef>,
    ctx: RequestContext,
    params: PathParams,
) -> PlaceholderResponse {
    Ok(respond(&route, ctx, params, None, None))
}

async fn describe_page(
    route: Arc<RouteDef>,
    ctx: RequestContext,
    params: PathParams,
    page: PageRequest,
) -> PlaceholderResponse {
    Ok(respond(&route, ctx, params, None, Some(page)))
}

async fn describe_object(
    route: Arc<RouteDef>,
    ctx: RequestContext,
    params: PathParams,
    body: Map<String, Value>,
) -> PlaceholderResponse {
    Ok(respond(&route, ctx, params, Some(Value::Object(body)), None))
}

async fn describe_action(
    route: Arc<RouteDef>,
    ctx: RequestContext,
    params: PathParams,
    body: ActionRequest,
) -> PlaceholderResponse {
    let input = serde_json::json!({ "action": body.action });
    Ok(respond(&route, ctx, params, Some(input), None))
}

async fn describe_bulk(
    route: Arc<RouteDef>,
    ctx: RequestContext,
    params: PathParams,
    body: BulkIdsRequest,
) -> PlaceholderResponse {
    let body = body.normalized()?;
    let input = serde_json::json!({ "ids": body.ids });
    Ok(respond(&route, ctx, params, Some(input), None))
}

async fn describe_change(
    route: Arc<RouteDef>,
    ctx: RequestContext,
    params: PathParams,
    body: Map<String, Value>,
    field: &'static str,
    nullable: bool,
) -> PlaceholderResponse {
    let target = parse_change(field, nullable, &body)?;
    let mut input = Map::new();
    input.insert(field.to_string(), target.map_or(Value::Null, Value::String));
    Ok(respond(&route, ctx, params, Some(Value::Object(input)), None))
}
