use crate::models::Post;
use sqlx::PgPool;
use uuid::Uuid;

/// All published posts (status = 'published', publish not in the future),
/// ordered by publish timestamp descending.
pub async fn list_published(pool: &PgPool) -> Result<Vec<Post>, sqlx::Error> {
    let posts = sqlx::query_as::<_, Post>(
        r#"
        SELECT id, title, slug, body, publish, status, author_id, created_at, updated_at
        FROM posts
        WHERE status = 'published' AND publish <= NOW()
        ORDER BY publish DESC
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(posts)
}

/// Published post matching the (year, month, day, slug) composite key.
///
/// Zero-or-one by construction: the schema has a unique index on
/// (slug, publish date).
pub async fn find_published_by_date_slug(
    pool: &PgPool,
    year: i32,
    month: u32,
    day: u32,
    slug: &str,
) -> Result<Option<Post>, sqlx::Error> {
    let post = sqlx::query_as::<_, Post>(
        r#"
        SELECT id, title, slug, body, publish, status, author_id, created_at, updated_at
        FROM posts
        WHERE status = 'published' AND publish <= NOW()
          AND slug = $4
          AND EXTRACT(YEAR FROM publish AT TIME ZONE 'UTC')::int = $1
          AND EXTRACT(MONTH FROM publish AT TIME ZONE 'UTC')::int = $2
          AND EXTRACT(DAY FROM publish AT TIME ZONE 'UTC')::int = $3
        "#,
    )
    .bind(year)
    .bind(month as i32)
    .bind(day as i32)
    .bind(slug)
    .fetch_optional(pool)
    .await?;

    Ok(post)
}

/// Published post by primary key.
pub async fn find_published_by_id(
    pool: &PgPool,
    post_id: Uuid,
) -> Result<Option<Post>, sqlx::Error> {
    let post = sqlx::query_as::<_, Post>(
        r#"
        SELECT id, title, slug, body, publish, status, author_id, created_at, updated_at
        FROM posts
        WHERE id = $1 AND status = 'published' AND publish <= NOW()
        "#,
    )
    .bind(post_id)
    .fetch_optional(pool)
    .await?;

    Ok(post)
}
