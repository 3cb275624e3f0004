//! Test fixtures: in-memory repository and recording mailer.
//!
//! Stand-ins for the two external collaborators (persistence, SMTP) so
//! handler tests run without infrastructure.

use async_trait::async_trait;
use blog_service::db::BlogRepo;
use blog_service::error::{AppError, Result};
use blog_service::mailer::Mailer;
use blog_service::models::{status, Comment, NewComment, Post};
use chrono::{DateTime, Datelike, Utc};
use std::sync::{Arc, Mutex};
use uuid::Uuid;

/// In-memory `BlogRepo` seeded with fixed posts and comments.
pub struct MemBlogRepo {
    posts: Vec<Post>,
    comments: Mutex<Vec<Comment>>,
}

impl MemBlogRepo {
    pub fn new(posts: Vec<Post>) -> Arc<Self> {
        Arc::new(Self {
            posts,
            comments: Mutex::new(Vec::new()),
        })
    }

    pub fn with_comments(posts: Vec<Post>, comments: Vec<Comment>) -> Arc<Self> {
        Arc::new(Self {
            posts,
            comments: Mutex::new(comments),
        })
    }

    /// Snapshot of every stored comment, active or not.
    pub fn all_comments(&self) -> Vec<Comment> {
        self.comments.lock().unwrap().clone()
    }
}

#[async_trait]
impl BlogRepo for MemBlogRepo {
    async fn list_published(&self) -> Result<Vec<Post>> {
        let now = Utc::now();
        let mut posts: Vec<Post> = self
            .posts
            .iter()
            .filter(|p| p.status == status::PUBLISHED && p.publish <= now)
            .cloned()
            .collect();
        posts.sort_by(|a, b| b.publish.cmp(&a.publish));
        Ok(posts)
    }

    async fn find_published_by_date_slug(
        &self,
        year: i32,
        month: u32,
        day: u32,
        slug: &str,
    ) -> Result<Option<Post>> {
        let published = self.list_published().await?;
        Ok(published.into_iter().find(|p| {
            let date = p.publish.date_naive();
            p.slug == slug && date.year() == year && date.month() == month && date.day() == day
        }))
    }

    async fn find_published_by_id(&self, post_id: Uuid) -> Result<Option<Post>> {
        let published = self.list_published().await?;
        Ok(published.into_iter().find(|p| p.id == post_id))
    }

    async fn list_active_comments(&self, post_id: Uuid) -> Result<Vec<Comment>> {
        let mut comments: Vec<Comment> = self
            .comments
            .lock()
            .unwrap()
            .iter()
            .filter(|c| c.post_id == post_id && c.active)
            .cloned()
            .collect();
        comments.sort_by_key(|c| c.created_at);
        Ok(comments)
    }

    async fn insert_comment(&self, post_id: Uuid, comment: &NewComment) -> Result<Comment> {
        let now = Utc::now();
        let comment = Comment {
            id: Uuid::new_v4(),
            post_id,
            name: comment.name.clone(),
            email: comment.email.clone(),
            body: comment.body.clone(),
            active: false,
            created_at: now,
            updated_at: now,
        };
        self.comments.lock().unwrap().push(comment.clone());
        Ok(comment)
    }
}

/// Mailer that records sends instead of delivering, optionally failing.
pub struct RecordingMailer {
    sent: Mutex<Vec<(String, String, String)>>,
    fail: bool,
}

impl RecordingMailer {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            sent: Mutex::new(Vec::new()),
            fail: false,
        })
    }

    pub fn failing() -> Arc<Self> {
        Arc::new(Self {
            sent: Mutex::new(Vec::new()),
            fail: true,
        })
    }

    /// (to, subject, body) tuples in send order.
    pub fn sent(&self) -> Vec<(String, String, String)> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl Mailer for RecordingMailer {
    async fn send(&self, to: &str, subject: &str, body: &str) -> Result<()> {
        if self.fail {
            return Err(AppError::Mail("connection refused".into()));
        }
        self.sent
            .lock()
            .unwrap()
            .push((to.into(), subject.into(), body.into()));
        Ok(())
    }
}

/// Published post fixture.
pub fn published_post(title: &str, slug: &str, publish: DateTime<Utc>) -> Post {
    Post {
        id: Uuid::new_v4(),
        title: title.into(),
        slug: slug.into(),
        body: format!("Body of {title}."),
        publish,
        status: status::PUBLISHED.into(),
        author_id: Uuid::new_v4(),
        created_at: publish,
        updated_at: publish,
    }
}

/// Comment fixture with an explicit moderation state.
pub fn comment_on(post: &Post, name: &str, body: &str, active: bool) -> Comment {
    let now = Utc::now();
    Comment {
        id: Uuid::new_v4(),
        post_id: post.id,
        name: name.into(),
        email: format!("{}@x.com", name.to_lowercase()),
        body: body.into(),
        active,
        created_at: now,
        updated_at: now,
    }
}
