//! Route configuration.

use axum::{
    http::StatusCode,
    middleware,
    response::{IntoResponse, Response},
    Router,
};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use common::AppError;
use domain::API_NAMESPACE;

use crate::handlers::{demo_routes, post_routes, user_routes};
use crate::middleware::identify;
use crate::openapi::ApiDoc;
use crate::state::AppState;

/// Create the main router with all routes.
pub fn create_router(state: AppState) -> Router {
    let api = Router::new()
        .merge(demo_routes())
        .merge(post_routes())
        .merge(user_routes());

    Router::new()
        // Swagger UI
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        // Demo namespace; gated routes carry their own permission layer
        .nest(API_NAMESPACE, api)
        .fallback(no_route)
        .layer(middleware::map_response(method_miss_as_no_route))
        // Caller resolution runs before routing so every handler sees it
        .layer(middleware::from_fn_with_state(state.clone(), identify))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Fallback for unknown paths.
async fn no_route() -> AppError {
    AppError::NoRoute
}

/// Known path, unregistered method: answered like an unknown path.
async fn method_miss_as_no_route(response: Response) -> Response {
    if response.status() == StatusCode::METHOD_NOT_ALLOWED {
        return AppError::NoRoute.into_response();
    }
    response
}
