//! Caller-centric handlers.

use axum::{extract::State, middleware, response::Json, routing::get, Router};
use serde::Serialize;
use utoipa::ToSchema;

use common::{AppError, AppResult};
use domain::{Capability, UserId, MANAGE_OPTIONS_MESSAGE};

use crate::handlers::demo_handler::MessageResponse;
use crate::middleware::{require_permission, Caller, Permission};
use crate::state::AppState;

/// Current caller summary
#[derive(Debug, Serialize, ToSchema)]
pub struct MeResponse {
    #[schema(example = 1)]
    pub id: UserId,
    /// Display name
    #[schema(example = "admin")]
    pub name: String,
}

/// Create user routes
pub fn user_routes() -> Router<AppState> {
    Router::new().route("/me", get(get_me)).route(
        "/check_permission",
        get(check_permission).route_layer(middleware::from_fn_with_state(
            Permission::Capability(Capability::ManageOptions),
            require_permission,
        )),
    )
}

/// Get the current caller
#[utoipa::path(
    get,
    path = "/rest-demo/v1/me",
    tag = "Users",
    security((), ("bearer_auth" = [])),
    responses(
        (status = 200, description = "Caller id and display name", body = MeResponse),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn get_me(State(state): State<AppState>, caller: Caller) -> AppResult<Json<MeResponse>> {
    let id = caller.id().ok_or(AppError::Unauthorized)?;
    let name = state.identity.display_name(id).await?;

    Ok(Json(MeResponse { id, name }))
}

/// Confirm the caller can manage options
#[utoipa::path(
    get,
    path = "/rest-demo/v1/check_permission",
    tag = "Users",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Caller holds manage_options", body = MessageResponse),
        (status = 401, description = "Not authenticated"),
        (status = 403, description = "Caller lacks manage_options")
    )
)]
pub async fn check_permission() -> Json<MessageResponse> {
    Json(MessageResponse::new(MANAGE_OPTIONS_MESSAGE))
}
