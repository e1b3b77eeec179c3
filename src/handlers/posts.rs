use axum::{
    extract::{Path, State},
    Extension, Json,
};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::auth::ownership::ensure_owner;
use crate::error::ApiError;
use crate::middleware::AuthUser;
use crate::models::{Comment, Like, Post};
use crate::store::AppState;

#[derive(Debug, Deserialize)]
pub struct PostInput {
    #[serde(default)]
    pub text: String,
}

/// POST /api/post - create a post carrying the author's name and avatar.
pub async fn create_post(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
    Json(input): Json<PostInput>,
) -> Result<Json<Post>, ApiError> {
    if input.text.trim().is_empty() {
        return Err(ApiError::validation(vec!["Text is required"]));
    }

    let user = state
        .store
        .user_by_id(auth_user.id)
        .await?
        .ok_or_else(|| ApiError::not_found("User not found"))?;

    let post = Post::new(auth_user.id, input.text, user.name, user.avatar);
    state.store.save_post(post.clone()).await?;

    Ok(Json(post))
}

/// GET /api/post - all posts, newest first.
pub async fn list_posts(State(state): State<AppState>) -> Result<Json<Vec<Post>>, ApiError> {
    Ok(Json(state.store.list_posts().await?))
}

/// GET /api/post/:post_id
pub async fn get_post(
    State(state): State<AppState>,
    Path(post_id): Path<String>,
) -> Result<Json<Post>, ApiError> {
    let post_id = super::parse_id(&post_id, "Post not found")?;

    let post = state
        .store
        .post_by_id(post_id)
        .await?
        .ok_or_else(|| ApiError::not_found("Post not found"))?;

    Ok(Json(post))
}

/// DELETE /api/post/:post_id - existence first, then ownership, so a
/// foreign post is never reported as missing and a missing one never
/// reveals an owner.
pub async fn delete_post(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
    Path(post_id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let post_id = super::parse_id(&post_id, "Post not found")?;

    let post = state
        .store
        .post_by_id(post_id)
        .await?
        .ok_or_else(|| ApiError::not_found("Post not found"))?;

    ensure_owner(post.user, auth_user.id)?;

    state.store.delete_post(post.id).await?;

    Ok(Json(json!({ "msg": "Post Removed" })))
}

/// PUT /api/post/like/:post_id - any authenticated user may like any post,
/// once. Responds with the updated likes list.
pub async fn like_post(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
    Path(post_id): Path<String>,
) -> Result<Json<Vec<Like>>, ApiError> {
    let post_id = super::parse_id(&post_id, "Post not found")?;

    let mut post = state
        .store
        .post_by_id(post_id)
        .await?
        .ok_or_else(|| ApiError::not_found("Post not found"))?;

    post.like(auth_user.id)?;
    state.store.save_post(post.clone()).await?;

    Ok(Json(post.likes))
}

/// PUT /api/post/unlike/:post_id
pub async fn unlike_post(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
    Path(post_id): Path<String>,
) -> Result<Json<Vec<Like>>, ApiError> {
    let post_id = super::parse_id(&post_id, "Post not found")?;

    let mut post = state
        .store
        .post_by_id(post_id)
        .await?
        .ok_or_else(|| ApiError::not_found("Post not found"))?;

    post.unlike(auth_user.id)?;
    state.store.save_post(post.clone()).await?;

    Ok(Json(post.likes))
}

/// POST /api/post/comment/:post_id - add a comment, newest first. Responds
/// with the updated comments list.
pub async fn add_comment(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
    Path(post_id): Path<String>,
    Json(input): Json<PostInput>,
) -> Result<Json<Vec<Comment>>, ApiError> {
    if input.text.trim().is_empty() {
        return Err(ApiError::validation(vec!["Text is required"]));
    }

    let user = state
        .store
        .user_by_id(auth_user.id)
        .await?
        .ok_or_else(|| ApiError::not_found("User not found"))?;

    let post_id = super::parse_id(&post_id, "Post not found")?;
    let mut post = state
        .store
        .post_by_id(post_id)
        .await?
        .ok_or_else(|| ApiError::not_found("Post not found"))?;

    post.comments
        .insert(0, Comment::new(auth_user.id, input.text, user.name, user.avatar));
    state.store.save_post(post.clone()).await?;

    Ok(Json(post.comments))
}

/// DELETE /api/post/comment/:post_id/:comment_id - remove the addressed
/// comment. Post existence, comment existence, then comment ownership, in
/// that order.
pub async fn delete_comment(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
    Path((post_id, comment_id)): Path<(String, String)>,
) -> Result<Json<Vec<Comment>>, ApiError> {
    let post_id = super::parse_id(&post_id, "Post not found")?;

    let mut post = state
        .store
        .post_by_id(post_id)
        .await?
        .ok_or_else(|| ApiError::not_found("Post not found"))?;

    let comment_id = super::parse_id(&comment_id, "Comment does not exist")?;
    let index = post
        .comments
        .iter()
        .position(|c| c.id == comment_id)
        .ok_or_else(|| ApiError::not_found("Comment does not exist"))?;

    ensure_owner(post.comments[index].user, auth_user.id)?;

    post.comments.remove(index);
    state.store.save_post(post.clone()).await?;

    Ok(Json(post.comments))
}
