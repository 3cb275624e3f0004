//! Share handler: recommend a post by email.

use super::html;
use crate::config::SiteConfig;
use crate::db::BlogRepo;
use crate::error::{AppError, Result};
use crate::forms::{EmailPostForm, FieldErrors};
use crate::mailer::Mailer;
use crate::models::Post;
use crate::render;
use crate::services::ShareService;
use actix_web::{web, HttpResponse};
use uuid::Uuid;

async fn lookup_post(repo: &dyn BlogRepo, raw_id: &str) -> Result<Post> {
    let post_id: Uuid = raw_id.parse().map_err(|_| AppError::NotFound)?;
    repo.find_published_by_id(post_id)
        .await?
        .ok_or(AppError::NotFound)
}

/// `GET /{post_id}/share/` — empty form, sent=false.
pub async fn share_form(
    repo: web::Data<dyn BlogRepo>,
    path: web::Path<String>,
) -> Result<HttpResponse> {
    let post = lookup_post(repo.get_ref(), &path).await?;
    Ok(html(render::post_share(
        &post,
        &EmailPostForm::default(),
        &FieldErrors::new(),
        false,
    )))
}

/// `POST /{post_id}/share/` — validate, send one email on success.
///
/// Transport failures degrade to sent=false on an otherwise successful
/// response; validation failures re-render the form with field errors.
pub async fn share_submit(
    repo: web::Data<dyn BlogRepo>,
    mailer: web::Data<dyn Mailer>,
    site: web::Data<SiteConfig>,
    path: web::Path<String>,
    form: web::Form<EmailPostForm>,
) -> Result<HttpResponse> {
    let post = lookup_post(repo.get_ref(), &path).await?;

    let (form, errors) = form.into_inner().validated();
    if let Some(errors) = errors {
        return Ok(html(render::post_share(&post, &form, &errors, false)));
    }

    let service = ShareService::new(mailer.into_inner(), site.base_url.clone());
    let sent = service.share(&post, &form).await;

    Ok(html(render::post_share(&post, &form, &FieldErrors::new(), sent)))
}
