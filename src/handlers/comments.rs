//! Comment submission handler (POST only).

use super::html;
use crate::db::BlogRepo;
use crate::error::{AppError, Result};
use crate::forms::{CommentForm, FieldErrors};
use crate::render;
use actix_web::{web, HttpResponse};
use uuid::Uuid;

/// Catch-all for non-POST verbs on the comment route.
pub async fn method_not_allowed() -> Result<HttpResponse> {
    Err(AppError::MethodNotAllowed)
}

/// `POST /{post_id}/comment/` — validate, persist (inactive), confirm.
pub async fn submit_comment(
    repo: web::Data<dyn BlogRepo>,
    path: web::Path<String>,
    form: web::Form<CommentForm>,
) -> Result<HttpResponse> {
    let post_id: Uuid = path.parse().map_err(|_| AppError::NotFound)?;
    let post = repo
        .find_published_by_id(post_id)
        .await?
        .ok_or(AppError::NotFound)?;

    let (form, errors) = form.into_inner().validated();
    if let Some(errors) = errors {
        return Ok(html(render::post_comment(&post, None, &form, &errors)));
    }

    let payload = form
        .clone()
        .into_new_comment()
        .ok_or_else(|| AppError::Internal("validated comment form missing fields".into()))?;
    let comment = repo.insert_comment(post.id, &payload).await?;

    tracing::info!(post_id = %post.id, comment_id = %comment.id, "comment submitted, pending moderation");

    Ok(html(render::post_comment(
        &post,
        Some(&comment),
        &form,
        &FieldErrors::new(),
    )))
}
