//! OpenAPI documentation.

use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};

use crate::handlers::demo_handler::{InvoiceItemResponse, MessageResponse, PersonRequest};
use crate::handlers::post_handler::{CreatePostRequest, CreatedPostResponse};
use crate::handlers::user_handler::MeResponse;
use domain::{Post, PostStatus, PostType};

/// API documentation struct.
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::demo_handler::say_hello,
        crate::handlers::demo_handler::query_string,
        crate::handlers::demo_handler::invoice_item,
        crate::handlers::demo_handler::greet,
        crate::handlers::demo_handler::process_person,
        crate::handlers::demo_handler::process_contact,
        crate::handlers::demo_handler::submit_contact,
        crate::handlers::post_handler::list_posts,
        crate::handlers::post_handler::get_post,
        crate::handlers::post_handler::create_post,
        crate::handlers::post_handler::my_posts,
        crate::handlers::user_handler::get_me,
        crate::handlers::user_handler::check_permission,
    ),
    components(
        schemas(
            MessageResponse,
            InvoiceItemResponse,
            PersonRequest,
            CreatePostRequest,
            CreatedPostResponse,
            MeResponse,
            Post,
            PostStatus,
            PostType,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Demo", description = "Echo and greeting endpoints"),
        (name = "Posts", description = "Content item endpoints"),
        (name = "Users", description = "Caller identity endpoints"),
    )
)]
pub struct ApiDoc;

/// Security scheme modifier.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}
