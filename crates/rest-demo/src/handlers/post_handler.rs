//! Post handlers.

use axum::{
    extract::State,
    middleware,
    response::Json,
    routing::get,
    Router,
};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use utoipa::ToSchema;

use common::{AppError, AppResult, OptionExt};
use domain::{
    Capability, NewPost, Post, PostId, PostQuery, POST_CREATED_MESSAGE, POST_NOT_CREATED_MESSAGE,
    POST_NOT_FOUND_MESSAGE,
};

use crate::extractors::{BodyParams, PathParams, RoutePattern};
use crate::middleware::{require_permission, Caller, Permission};
use crate::state::AppState;

/// Post creation request. Missing fields become empty strings.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct CreatePostRequest {
    #[schema(example = "My first post")]
    pub title: Option<String>,
    #[schema(example = "Written over the REST API.")]
    pub content: Option<String>,
}

/// Confirmation for a stored post
#[derive(Debug, Serialize, ToSchema)]
pub struct CreatedPostResponse {
    #[schema(example = "Post Created")]
    pub message: String,
    #[schema(example = 5)]
    pub id: PostId,
}

/// Create post routes
pub fn post_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/posts",
            get(list_posts).merge(
                axum::routing::post(create_post).route_layer(middleware::from_fn_with_state(
                    Permission::Capability(Capability::PublishPosts),
                    require_permission,
                )),
            ),
        )
        .route("/posts/:id", get(get_post))
        .route(
            "/my_posts",
            get(my_posts).route_layer(middleware::from_fn_with_state(
                Permission::Authenticated,
                require_permission,
            )),
        )
}

/// List published posts of every author
#[utoipa::path(
    get,
    path = "/rest-demo/v1/posts",
    tag = "Posts",
    responses(
        (status = 200, description = "Published posts, newest first", body = Vec<Post>)
    )
)]
pub async fn list_posts(State(state): State<AppState>) -> AppResult<Json<Vec<Post>>> {
    let posts = state.content.query(PostQuery::published()).await?;
    Ok(Json(posts))
}

/// Get a post by id
#[utoipa::path(
    get,
    path = "/rest-demo/v1/posts/{id}",
    tag = "Posts",
    params(
        ("id" = String, Path, description = "Post id (digits)")
    ),
    responses(
        (status = 200, description = "The post", body = Post),
        (status = 404, description = "Post not found")
    )
)]
pub async fn get_post(
    State(state): State<AppState>,
    PathParams(id): PathParams<String>,
) -> AppResult<Json<Post>> {
    let id = RoutePattern::Digits.require(&id)?;

    // Digit strings too large for an id cannot name a stored post.
    let Ok(id) = id.parse::<PostId>() else {
        return Err(AppError::not_found(POST_NOT_FOUND_MESSAGE));
    };

    let post = state
        .content
        .get(id)
        .await?
        .ok_or_not_found(POST_NOT_FOUND_MESSAGE)?;

    Ok(Json(post))
}

/// Create a published post authored by the caller
#[utoipa::path(
    post,
    path = "/rest-demo/v1/posts",
    tag = "Posts",
    security(("bearer_auth" = [])),
    request_body = CreatePostRequest,
    responses(
        (status = 200, description = "Post stored", body = CreatedPostResponse),
        (status = 401, description = "Not authenticated"),
        (status = 403, description = "Caller cannot publish posts"),
        (status = 500, description = "Post Not Created")
    )
)]
pub async fn create_post(
    State(state): State<AppState>,
    caller: Caller,
    BodyParams(payload): BodyParams<CreatePostRequest>,
) -> AppResult<Json<CreatedPostResponse>> {
    let author = caller.id().ok_or(AppError::LoginRequired)?;

    let post = NewPost::published(
        payload.title.unwrap_or_default(),
        payload.content.unwrap_or_default(),
        author,
    );

    let id = state.content.create(post).await.map_err(|e| {
        warn!(error = %e, author, "Content store did not create post");
        AppError::write_failed(POST_NOT_CREATED_MESSAGE)
    })?;

    info!(id, author, "Post created");

    Ok(Json(CreatedPostResponse {
        message: POST_CREATED_MESSAGE.to_string(),
        id,
    }))
}

/// List published posts authored by the caller
#[utoipa::path(
    get,
    path = "/rest-demo/v1/my_posts",
    tag = "Posts",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Caller's published posts, newest first", body = Vec<Post>),
        (status = 401, description = "Not authenticated")
    )
)]
pub async fn my_posts(
    State(state): State<AppState>,
    caller: Caller,
) -> AppResult<Json<Vec<Post>>> {
    let author = caller.id().ok_or(AppError::LoginRequired)?;
    let posts = state
        .content
        .query(PostQuery::published().by_author(author))
        .await?;

    Ok(Json(posts))
}
