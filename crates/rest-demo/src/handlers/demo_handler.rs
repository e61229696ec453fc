//! Echo and greeting handlers. None of these touch a collaborator.

use std::collections::BTreeMap;

use axum::{
    extract::Query,
    http::Method,
    response::Json,
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use common::{AppError, AppResult};
use domain::{GREETING_PREFIX, HELLO_MESSAGE};

use crate::extractors::{BodyParams, PathParams, RoutePattern};
use crate::state::AppState;

/// Single-message response body
#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    #[schema(example = "Hello World")]
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Invoice line lookup, echoed back as captured
#[derive(Debug, Serialize, ToSchema)]
pub struct InvoiceItemResponse {
    #[schema(example = "7")]
    pub invoice_id: String,
    #[schema(example = "3")]
    pub item_id: String,
}

/// Person fields accepted (and returned) by the person route
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct PersonRequest {
    #[schema(example = "Jane Doe")]
    pub name: Option<String>,
    #[schema(example = "jane@example.com")]
    pub email: Option<String>,
}

/// Create demo routes
pub fn demo_routes() -> Router<AppState> {
    Router::new()
        .route("/hello", get(say_hello))
        .route("/qs", get(query_string))
        .route("/invoice/:id/item/:item_id", get(invoice_item))
        .route("/greet/:name", get(greet))
        .route("/person", post(process_person))
        .route("/contact", get(process_contact).post(submit_contact))
}

/// Fixed greeting
#[utoipa::path(
    get,
    path = "/rest-demo/v1/hello",
    tag = "Demo",
    responses(
        (status = 200, description = "Greeting", body = MessageResponse)
    )
)]
pub async fn say_hello() -> Json<MessageResponse> {
    Json(MessageResponse::new(HELLO_MESSAGE))
}

/// Echo every query parameter
#[utoipa::path(
    get,
    path = "/rest-demo/v1/qs",
    tag = "Demo",
    responses(
        (status = 200, description = "Query parameters as a flat object")
    )
)]
pub async fn query_string(
    Query(params): Query<BTreeMap<String, String>>,
) -> Json<BTreeMap<String, String>> {
    Json(params)
}

/// Echo invoice and item ids
#[utoipa::path(
    get,
    path = "/rest-demo/v1/invoice/{id}/item/{item_id}",
    tag = "Demo",
    params(
        ("id" = String, Path, description = "Invoice id (digits)"),
        ("item_id" = String, Path, description = "Item id (digits)")
    ),
    responses(
        (status = 200, description = "Captured ids", body = InvoiceItemResponse),
        (status = 404, description = "Ids are not numeric")
    )
)]
pub async fn invoice_item(
    PathParams((id, item_id)): PathParams<(String, String)>,
) -> AppResult<Json<InvoiceItemResponse>> {
    RoutePattern::Digits.require(&id)?;
    RoutePattern::Digits.require(&item_id)?;

    Ok(Json(InvoiceItemResponse {
        invoice_id: id,
        item_id,
    }))
}

/// Personal greeting
#[utoipa::path(
    get,
    path = "/rest-demo/v1/greet/{name}",
    tag = "Demo",
    params(
        ("name" = String, Path, description = "Name to greet (letters, digits, dashes)")
    ),
    responses(
        (status = 200, description = "Greeting", body = MessageResponse),
        (status = 404, description = "Name does not match the route pattern")
    )
)]
pub async fn greet(PathParams(name): PathParams<String>) -> AppResult<Json<MessageResponse>> {
    let name = RoutePattern::Slug.require(&name)?;
    Ok(Json(MessageResponse::new(format!("{}{}", GREETING_PREFIX, name))))
}

/// Echo person fields
#[utoipa::path(
    post,
    path = "/rest-demo/v1/person",
    tag = "Demo",
    request_body = PersonRequest,
    responses(
        (status = 200, description = "Fields as received", body = PersonRequest),
        (status = 400, description = "Body could not be decoded")
    )
)]
pub async fn process_person(BodyParams(person): BodyParams<PersonRequest>) -> Json<PersonRequest> {
    Json(person)
}

/// Contact form placeholder
#[utoipa::path(
    get,
    path = "/rest-demo/v1/contact",
    tag = "Demo",
    responses(
        (status = 501, description = "Contact handling is not implemented")
    )
)]
pub async fn process_contact() -> AppError {
    contact_not_implemented(Method::GET)
}

/// Contact form submission placeholder
#[utoipa::path(
    post,
    path = "/rest-demo/v1/contact",
    tag = "Demo",
    responses(
        (status = 501, description = "Contact handling is not implemented")
    )
)]
pub async fn submit_contact() -> AppError {
    contact_not_implemented(Method::POST)
}

fn contact_not_implemented(method: Method) -> AppError {
    tracing::debug!(%method, "Contact route called");
    AppError::not_implemented(format!("Contact handling for {} is not implemented", method))
}
