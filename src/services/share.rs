//! Share-a-post-by-email service.
//!
//! Composes the recommendation email for a validated share form and
//! attempts exactly one send. Transport failures are logged and reported
//! as `sent = false`; they never become HTTP errors.

use crate::forms::EmailPostForm;
use crate::mailer::Mailer;
use crate::models::Post;
use std::sync::Arc;
use tracing::warn;

pub struct ShareService {
    mailer: Arc<dyn Mailer>,
    base_url: String,
}

/// Subject and body of one share email.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareEmail {
    pub to: String,
    pub subject: String,
    pub body: String,
}

impl ShareService {
    pub fn new(mailer: Arc<dyn Mailer>, base_url: impl Into<String>) -> Self {
        Self {
            mailer,
            base_url: base_url.into(),
        }
    }

    /// Absolute URL of a post, built from the configured site base URL.
    pub fn post_url(&self, post: &Post) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), post.path())
    }

    /// Compose the message for a form that already passed validation.
    ///
    /// Returns `None` if required fields are missing (the handler validates
    /// first, so this only guards against misuse).
    pub fn compose(&self, post: &Post, form: &EmailPostForm) -> Option<ShareEmail> {
        let name = form.name.as_deref()?;
        let to = form.to.as_deref()?;
        let post_url = self.post_url(post);

        Some(ShareEmail {
            to: to.to_string(),
            subject: format!("{} recommends reading {}", name, post.title),
            body: format!(
                "Read '{}' at the link {}\n\nComment from {}: {}",
                post.title,
                post_url,
                name,
                form.comments.as_deref().unwrap_or(""),
            ),
        })
    }

    /// Send the share email. Returns whether the message went out.
    pub async fn share(&self, post: &Post, form: &EmailPostForm) -> bool {
        let Some(email) = self.compose(post, form) else {
            return false;
        };

        match self.mailer.send(&email.to, &email.subject, &email.body).await {
            Ok(()) => true,
            Err(err) => {
                warn!(post_id = %post.id, "share email delivery failed: {err}");
                false
            }
        }
    }
}
