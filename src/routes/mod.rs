//! axum adapter
//!
//! Translates between axum requests/responses and the transport-independent
//! [`HttpRequest`]/[`HttpResponse`] the controllers speak.

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{DefaultBodyLimit, Request, State},
    http::{HeaderMap, StatusCode},
    middleware::{self, Next},
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Extension, Router,
};
use serde_json::{json, Map, Value};
use sqlx::PgPool;
use tower::ServiceBuilder;
use tower_http::{limit::RequestBodyLimitLayer, trace::TraceLayer};

use crate::controllers::Controller;
use crate::error::HttpError;
use crate::factories::Controllers;
use crate::http::{bad_request, HttpRequest, HttpResponse};
use crate::infra::DatabaseManager;

/// Account id stored in request extensions by a passing auth middleware
#[derive(Debug, Clone)]
pub struct AuthenticatedAccount(pub String);

impl IntoResponse for HttpResponse {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        match self.body_json() {
            Some(body) => (status, Json(body)).into_response(),
            None => status.into_response(),
        }
    }
}

fn request_headers(headers: &HeaderMap) -> HttpRequest {
    headers
        .iter()
        .filter_map(|(name, value)| Some((name.as_str(), value.to_str().ok()?)))
        .fold(HttpRequest::default(), |request, (name, value)| {
            request.with_header(name, value)
        })
}

/// Empty bodies are read as `{}`
fn parse_body(body: &[u8]) -> Option<Value> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Some(Value::Object(Map::new()));
    }
    serde_json::from_slice(body).ok()
}

/// Runs the controller held in state over the request
pub async fn adapt_route(
    State(controller): State<Arc<dyn Controller>>,
    account: Option<Extension<AuthenticatedAccount>>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let Some(body) = parse_body(&body) else {
        tracing::debug!("Rejecting request with unparsable JSON body");
        return bad_request(HttpError::invalid_param("body")).into_response();
    };

    let mut request = request_headers(&headers);
    request.body = body;
    request.account_id = account.map(|Extension(AuthenticatedAccount(id))| id);

    controller.handle(request).await.into_response()
}

/// Runs the auth middleware; only a 200 lets the request through
pub async fn adapt_middleware(
    State(middleware): State<Arc<dyn Controller>>,
    mut request: Request,
    next: Next,
) -> Response {
    let response = middleware.handle(request_headers(request.headers())).await;

    if response.status_code() != 200 {
        return response.into_response();
    }

    if let Some(account_id) = response
        .data()
        .and_then(|data| data.get("accountId"))
        .and_then(Value::as_str)
    {
        request
            .extensions_mut()
            .insert(AuthenticatedAccount(account_id.to_string()));
    }

    next.run(request).await
}

async fn health(State(pool): State<Option<PgPool>>) -> impl IntoResponse {
    let now = chrono::Utc::now();

    let Some(pool) = pool else {
        return (
            StatusCode::OK,
            Json(json!({ "status": "ok", "timestamp": now })),
        );
    };

    match DatabaseManager::health_check(&pool).await {
        Ok(_) => (
            StatusCode::OK,
            Json(json!({ "status": "ok", "timestamp": now, "database": "ok" })),
        ),
        Err(e) => (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({
                "status": "degraded",
                "timestamp": now,
                "database_error": e.to_string()
            })),
        ),
    }
}

/// Full application router
///
/// `pool` is only used by `/health`; pass `None` when the controllers are
/// not database-backed.
pub fn app(
    controllers: Controllers,
    pool: Option<PgPool>,
    max_request_size_bytes: usize,
) -> Router {
    let admin = Router::new()
        .route("/api/surveys", post(adapt_route).with_state(controllers.add_survey))
        .route_layer(middleware::from_fn_with_state(
            controllers.admin_auth,
            adapt_middleware,
        ));

    Router::new()
        .route("/api/signup", post(adapt_route).with_state(controllers.signup))
        .route("/api/login", post(adapt_route).with_state(controllers.login))
        .merge(admin)
        .merge(Router::new().route("/health", get(health)).with_state(pool))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(DefaultBodyLimit::disable())
                .layer(RequestBodyLimitLayer::new(max_request_size_bytes)),
        )
}
