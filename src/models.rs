//! Data models: posts and their comments.

use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Post lifecycle states, stored as text.
pub mod status {
    pub const DRAFT: &str = "draft";
    pub const PUBLISHED: &str = "published";
}

/// A blog post. Created and edited outside this service; read-only here.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Post {
    pub id: Uuid,
    pub title: String,
    pub slug: String,
    pub body: String,
    /// Publication timestamp; posts with a future `publish` are not served.
    pub publish: DateTime<Utc>,
    pub status: String,
    pub author_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Post {
    pub fn is_published(&self) -> bool {
        self.status == status::PUBLISHED
    }

    /// Canonical site-relative path: `/{year}/{month:02}/{day:02}/{slug}/`.
    pub fn path(&self) -> String {
        let date = self.publish.date_naive();
        format!(
            "/{}/{:02}/{:02}/{}/",
            date.year(),
            date.month(),
            date.day(),
            self.slug
        )
    }
}

/// A reader comment on a post.
///
/// Inserted with `active = false`; an external moderation process flips the
/// flag. Only active comments are shown on the detail page.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Comment {
    pub id: Uuid,
    pub post_id: Uuid,
    pub name: String,
    pub email: String,
    pub body: String,
    pub active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Validated payload for a comment insert.
#[derive(Debug, Clone)]
pub struct NewComment {
    pub name: String,
    pub email: String,
    pub body: String,
}
