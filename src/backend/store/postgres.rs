/**
 * PostgreSQL Store
 *
 * `sqlx` implementation of the store traits. Queries are checked at runtime
 * (`query_as` with `FromRow`), so building the crate does not need a live
 * database. The schema lives in `migrations/` and is applied by
 * [`PgStore::migrate`].
 *
 * # Joins
 *
 * Every read joins `users` so that responses carry usernames rather than
 * user IDs.
 */

use async_trait::async_trait;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use uuid::Uuid;

use super::{CommentStore, FollowStore, GroupStore, PostStore, StoreResult, UserStore};
use crate::backend::auth::users::{NewUser, User};
use crate::backend::follow::FollowEdge;
use crate::shared::{Comment, Follow, Group, NewGroup, Post, PostDraft, Window};

const USER_COLUMNS: &str = "id, username, email, password_hash, created_at, updated_at";

const POST_SELECT: &str = r#"
    SELECT p.id, u.username AS author, p.author_id, p.text, p.pub_date, p.image,
           p.group_id AS "group"
    FROM posts p
    JOIN users u ON u.id = p.author_id
"#;

const COMMENT_SELECT: &str = r#"
    SELECT c.id, u.username AS author, c.author_id, c.text, c.created, c.post_id AS post
    FROM comments c
    JOIN users u ON u.id = c.author_id
"#;

const FOLLOW_SELECT: &str = r#"
    SELECT f.id, u.username AS "user", f.user_id, t.username AS following, f.following_id,
           f.created_at
    FROM follows f
    JOIN users u ON u.id = f.user_id
    JOIN users t ON t.id = f.following_id
"#;

/// Store backed by a PostgreSQL connection pool
#[derive(Debug, Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    /// Wrap an existing pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a connection pool for `database_url`
    pub async fn connect(database_url: &str) -> StoreResult<Self> {
        tracing::info!("Connecting to database...");
        let pool = PgPoolOptions::new()
            .max_connections(10)
            .connect(database_url)
            .await?;
        tracing::info!("Database connection pool created successfully");
        Ok(Self::new(pool))
    }

    /// Apply pending migrations from `migrations/`
    pub async fn migrate(&self) -> StoreResult<()> {
        tracing::info!("Running database migrations...");
        sqlx::migrate!().run(&self.pool).await?;
        tracing::info!("Database migrations completed successfully");
        Ok(())
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl UserStore for PgStore {
    async fn create_user(&self, new_user: NewUser) -> StoreResult<User> {
        let query = format!(
            "INSERT INTO users (id, username, email, password_hash) VALUES ($1, $2, $3, $4) RETURNING {}",
            USER_COLUMNS
        );
        let user = sqlx::query_as::<_, User>(&query)
            .bind(Uuid::new_v4())
            .bind(&new_user.username)
            .bind(&new_user.email)
            .bind(&new_user.password_hash)
            .fetch_one(&self.pool)
            .await?;
        Ok(user)
    }

    async fn user_by_id(&self, id: Uuid) -> StoreResult<Option<User>> {
        let query = format!("SELECT {} FROM users WHERE id = $1", USER_COLUMNS);
        let user = sqlx::query_as::<_, User>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(user)
    }

    async fn user_by_username(&self, username: &str) -> StoreResult<Option<User>> {
        let query = format!("SELECT {} FROM users WHERE username = $1", USER_COLUMNS);
        let user = sqlx::query_as::<_, User>(&query)
            .bind(username)
            .fetch_optional(&self.pool)
            .await?;
        Ok(user)
    }
}

#[async_trait]
impl GroupStore for PgStore {
    async fn create_group(&self, group: NewGroup) -> StoreResult<Group> {
        let group = sqlx::query_as::<_, Group>(
            r#"
            INSERT INTO groups (title, slug, description)
            VALUES ($1, $2, $3)
            RETURNING id, title, slug, description
            "#,
        )
        .bind(&group.title)
        .bind(&group.slug)
        .bind(&group.description)
        .fetch_one(&self.pool)
        .await?;
        Ok(group)
    }

    async fn list_groups(&self) -> StoreResult<Vec<Group>> {
        let groups = sqlx::query_as::<_, Group>(
            "SELECT id, title, slug, description FROM groups ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(groups)
    }

    async fn group_by_id(&self, id: i64) -> StoreResult<Option<Group>> {
        let group = sqlx::query_as::<_, Group>(
            "SELECT id, title, slug, description FROM groups WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(group)
    }
}

#[async_trait]
impl PostStore for PgStore {
    async fn count_posts(&self) -> StoreResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM posts")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    async fn list_posts(&self, window: Option<Window>) -> StoreResult<Vec<Post>> {
        let posts = match window {
            Some(Window { limit, offset }) => {
                let query = format!("{} ORDER BY p.id LIMIT $1 OFFSET $2", POST_SELECT);
                sqlx::query_as::<_, Post>(&query)
                    .bind(limit)
                    .bind(offset)
                    .fetch_all(&self.pool)
                    .await?
            }
            None => {
                let query = format!("{} ORDER BY p.id", POST_SELECT);
                sqlx::query_as::<_, Post>(&query)
                    .fetch_all(&self.pool)
                    .await?
            }
        };
        Ok(posts)
    }

    async fn post_by_id(&self, id: i64) -> StoreResult<Option<Post>> {
        let query = format!("{} WHERE p.id = $1", POST_SELECT);
        let post = sqlx::query_as::<_, Post>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(post)
    }

    async fn create_post(&self, author_id: Uuid, draft: PostDraft) -> StoreResult<Post> {
        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO posts (text, author_id, image, group_id)
            VALUES ($1, $2, $3, $4)
            RETURNING id
            "#,
        )
        .bind(&draft.text)
        .bind(author_id)
        .bind(&draft.image)
        .bind(draft.group)
        .fetch_one(&self.pool)
        .await?;

        let query = format!("{} WHERE p.id = $1", POST_SELECT);
        let post = sqlx::query_as::<_, Post>(&query)
            .bind(id)
            .fetch_one(&self.pool)
            .await?;
        Ok(post)
    }

    async fn update_post(&self, id: i64, draft: PostDraft) -> StoreResult<Option<Post>> {
        let updated = sqlx::query(
            "UPDATE posts SET text = $1, image = $2, group_id = $3 WHERE id = $4",
        )
        .bind(&draft.text)
        .bind(&draft.image)
        .bind(draft.group)
        .bind(id)
        .execute(&self.pool)
        .await?;

        if updated.rows_affected() == 0 {
            return Ok(None);
        }
        self.post_by_id(id).await
    }

    async fn delete_post(&self, id: i64) -> StoreResult<bool> {
        // comments go with the post through ON DELETE CASCADE
        let deleted = sqlx::query("DELETE FROM posts WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(deleted.rows_affected() > 0)
    }
}

#[async_trait]
impl CommentStore for PgStore {
    async fn list_comments(&self, post_id: i64) -> StoreResult<Vec<Comment>> {
        let query = format!("{} WHERE c.post_id = $1 ORDER BY c.id", COMMENT_SELECT);
        let comments = sqlx::query_as::<_, Comment>(&query)
            .bind(post_id)
            .fetch_all(&self.pool)
            .await?;
        Ok(comments)
    }

    async fn comment_by_id(&self, post_id: i64, id: i64) -> StoreResult<Option<Comment>> {
        let query = format!("{} WHERE c.post_id = $1 AND c.id = $2", COMMENT_SELECT);
        let comment = sqlx::query_as::<_, Comment>(&query)
            .bind(post_id)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(comment)
    }

    async fn create_comment(
        &self,
        post_id: i64,
        author_id: Uuid,
        text: String,
    ) -> StoreResult<Comment> {
        let id: i64 = sqlx::query_scalar(
            "INSERT INTO comments (author_id, post_id, text) VALUES ($1, $2, $3) RETURNING id",
        )
        .bind(author_id)
        .bind(post_id)
        .bind(&text)
        .fetch_one(&self.pool)
        .await?;

        let query = format!("{} WHERE c.id = $1", COMMENT_SELECT);
        let comment = sqlx::query_as::<_, Comment>(&query)
            .bind(id)
            .fetch_one(&self.pool)
            .await?;
        Ok(comment)
    }

    async fn update_comment(
        &self,
        post_id: i64,
        id: i64,
        text: String,
    ) -> StoreResult<Option<Comment>> {
        let updated = sqlx::query("UPDATE comments SET text = $1 WHERE post_id = $2 AND id = $3")
            .bind(&text)
            .bind(post_id)
            .bind(id)
            .execute(&self.pool)
            .await?;

        if updated.rows_affected() == 0 {
            return Ok(None);
        }
        self.comment_by_id(post_id, id).await
    }

    async fn delete_comment(&self, post_id: i64, id: i64) -> StoreResult<bool> {
        let deleted = sqlx::query("DELETE FROM comments WHERE post_id = $1 AND id = $2")
            .bind(post_id)
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(deleted.rows_affected() > 0)
    }
}

#[async_trait]
impl FollowStore for PgStore {
    async fn follow_exists(&self, actor: Uuid, target: Uuid) -> StoreResult<bool> {
        let exists: bool = sqlx::query_scalar(
            "SELECT EXISTS (SELECT 1 FROM follows WHERE user_id = $1 AND following_id = $2)",
        )
        .bind(actor)
        .bind(target)
        .fetch_one(&self.pool)
        .await?;
        Ok(exists)
    }

    async fn insert_follow(&self, edge: &FollowEdge) -> StoreResult<Follow> {
        let id: i64 = sqlx::query_scalar(
            "INSERT INTO follows (user_id, following_id) VALUES ($1, $2) RETURNING id",
        )
        .bind(edge.actor().id)
        .bind(edge.target().id)
        .fetch_one(&self.pool)
        .await?;

        let query = format!("{} WHERE f.id = $1", FOLLOW_SELECT);
        let follow = sqlx::query_as::<_, Follow>(&query)
            .bind(id)
            .fetch_one(&self.pool)
            .await?;
        Ok(follow)
    }

    async fn list_follows(&self, actor: Uuid, terms: &[&str]) -> StoreResult<Vec<Follow>> {
        // ILIKE ALL over an empty array matches every row
        let patterns: Vec<String> = terms
            .iter()
            .map(|term| format!("%{}%", escape_like(term)))
            .collect();
        let query = format!(
            "{} WHERE f.user_id = $1 AND t.username ILIKE ALL($2) ORDER BY f.id",
            FOLLOW_SELECT
        );
        let follows = sqlx::query_as::<_, Follow>(&query)
            .bind(actor)
            .bind(patterns)
            .fetch_all(&self.pool)
            .await?;
        Ok(follows)
    }
}

/// Escape `%`, `_` and `\` so user input matches literally inside `ILIKE`
fn escape_like(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());
    for c in term.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
