//! Persistence collaborator.
//!
//! Handlers talk to [`BlogRepo`]; [`PgBlogRepo`] is the PostgreSQL
//! implementation. Everything served through this trait satisfies the
//! published-post precondition (status = 'published', publish <= now).

pub mod comment_repo;
pub mod post_repo;

use crate::error::Result;
use crate::models::{Comment, NewComment, Post};
use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

#[async_trait]
pub trait BlogRepo: Send + Sync {
    /// Published posts, newest first.
    async fn list_published(&self) -> Result<Vec<Post>>;

    /// Published post matching (year, month, day, slug) exactly, if any.
    async fn find_published_by_date_slug(
        &self,
        year: i32,
        month: u32,
        day: u32,
        slug: &str,
    ) -> Result<Option<Post>>;

    /// Published post by id, if any.
    async fn find_published_by_id(&self, post_id: Uuid) -> Result<Option<Post>>;

    /// Active comments for a post, in stored order.
    async fn list_active_comments(&self, post_id: Uuid) -> Result<Vec<Comment>>;

    /// Persist a new comment (inactive until moderated) and return it.
    async fn insert_comment(&self, post_id: Uuid, comment: &NewComment) -> Result<Comment>;
}

/// PostgreSQL-backed repository.
#[derive(Clone)]
pub struct PgBlogRepo {
    pool: PgPool,
}

impl PgBlogRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BlogRepo for PgBlogRepo {
    async fn list_published(&self) -> Result<Vec<Post>> {
        Ok(post_repo::list_published(&self.pool).await?)
    }

    async fn find_published_by_date_slug(
        &self,
        year: i32,
        month: u32,
        day: u32,
        slug: &str,
    ) -> Result<Option<Post>> {
        Ok(post_repo::find_published_by_date_slug(&self.pool, year, month, day, slug).await?)
    }

    async fn find_published_by_id(&self, post_id: Uuid) -> Result<Option<Post>> {
        Ok(post_repo::find_published_by_id(&self.pool, post_id).await?)
    }

    async fn list_active_comments(&self, post_id: Uuid) -> Result<Vec<Comment>> {
        Ok(comment_repo::list_active_by_post(&self.pool, post_id).await?)
    }

    async fn insert_comment(&self, post_id: Uuid, comment: &NewComment) -> Result<Comment> {
        Ok(comment_repo::insert(&self.pool, post_id, comment).await?)
    }
}
