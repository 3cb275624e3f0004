use crate::models::{Comment, NewComment};
use sqlx::PgPool;
use uuid::Uuid;

/// Active (moderation-approved) comments for a post, in stored order
/// (created_at ascending).
pub async fn list_active_by_post(
    pool: &PgPool,
    post_id: Uuid,
) -> Result<Vec<Comment>, sqlx::Error> {
    let comments = sqlx::query_as::<_, Comment>(
        r#"
        SELECT id, post_id, name, email, body, active, created_at, updated_at
        FROM comments
        WHERE post_id = $1 AND active = TRUE
        ORDER BY created_at ASC
        "#,
    )
    .bind(post_id)
    .fetch_all(pool)
    .await?;

    Ok(comments)
}

/// Insert a new comment bound to a post.
///
/// `active` takes its schema default (FALSE); the comment stays hidden
/// until an external moderation process approves it.
pub async fn insert(
    pool: &PgPool,
    post_id: Uuid,
    comment: &NewComment,
) -> Result<Comment, sqlx::Error> {
    let comment = sqlx::query_as::<_, Comment>(
        r#"
        INSERT INTO comments (post_id, name, email, body)
        VALUES ($1, $2, $3, $4)
        RETURNING id, post_id, name, email, body, active, created_at, updated_at
        "#,
    )
    .bind(post_id)
    .bind(&comment.name)
    .bind(&comment.email)
    .bind(&comment.body)
    .fetch_one(pool)
    .await?;

    Ok(comment)
}
