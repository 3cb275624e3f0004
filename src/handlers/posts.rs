//! Listing and detail handlers.

use super::html;
use crate::config::SiteConfig;
use crate::db::BlogRepo;
use crate::error::{AppError, Result};
use crate::pagination::Paginator;
use crate::render;
use actix_web::{web, HttpResponse};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    /// Raw page value; any malformed input is silently normalized.
    pub page: Option<String>,
}

/// `GET /` — published posts, paginated.
pub async fn post_list(
    repo: web::Data<dyn BlogRepo>,
    site: web::Data<SiteConfig>,
    query: web::Query<ListQuery>,
) -> Result<HttpResponse> {
    let posts = repo.list_published().await?;

    let paginator = Paginator::new(site.posts_per_page);
    let number = paginator.resolve(query.page.as_deref(), posts.len());
    let page = paginator.page(posts.len(), number);

    Ok(html(render::post_list(&posts[page.start..page.end], &page)))
}

/// `GET /{year}/{month}/{day}/{slug}/` — one published post with its
/// active comments and an empty comment form.
pub async fn post_detail(
    repo: web::Data<dyn BlogRepo>,
    path: web::Path<(String, String, String, String)>,
) -> Result<HttpResponse> {
    let (year, month, day, slug) = path.into_inner();

    // Non-numeric date segments are a routing miss, not a bad request.
    let year: i32 = year.parse().map_err(|_| AppError::NotFound)?;
    let month: u32 = month.parse().map_err(|_| AppError::NotFound)?;
    let day: u32 = day.parse().map_err(|_| AppError::NotFound)?;

    let post = repo
        .find_published_by_date_slug(year, month, day, &slug)
        .await?
        .ok_or(AppError::NotFound)?;

    let comments = repo.list_active_comments(post.id).await?;

    Ok(html(render::post_detail(&post, &comments)))
}
