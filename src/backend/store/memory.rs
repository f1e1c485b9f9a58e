//! In-memory store
//!
//! Keeps all tables in plain vectors behind one `tokio::sync::RwLock`.
//! Every write takes the write lock for its whole check-and-insert, so the
//! unique and check constraints hold under concurrent requests the same way
//! the PostgreSQL constraints do.

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::{
    CommentStore, FollowStore, GroupStore, PostStore, StoreError, StoreResult, UserStore,
    FOLLOWS_NO_SELF_FOLLOW, FOLLOWS_UNIQUE_PAIR, GROUPS_SLUG_KEY, USERS_USERNAME_KEY,
};
use crate::backend::auth::users::{NewUser, User};
use crate::backend::follow::FollowEdge;
use crate::shared::{Comment, Follow, Group, NewGroup, Post, PostDraft, Window};

#[derive(Debug, Clone)]
struct PostRow {
    id: i64,
    author_id: Uuid,
    text: String,
    pub_date: chrono::DateTime<Utc>,
    image: Option<String>,
    group: Option<i64>,
}

#[derive(Debug, Clone)]
struct CommentRow {
    id: i64,
    author_id: Uuid,
    post_id: i64,
    text: String,
    created: chrono::DateTime<Utc>,
}

#[derive(Debug, Clone)]
struct FollowRow {
    id: i64,
    user_id: Uuid,
    following_id: Uuid,
    created_at: chrono::DateTime<Utc>,
}

#[derive(Debug, Default)]
struct Tables {
    users: Vec<User>,
    groups: Vec<Group>,
    posts: Vec<PostRow>,
    comments: Vec<CommentRow>,
    follows: Vec<FollowRow>,
    next_group_id: i64,
    next_post_id: i64,
    next_comment_id: i64,
    next_follow_id: i64,
}

impl Tables {
    fn username(&self, id: Uuid) -> String {
        self.users
            .iter()
            .find(|user| user.id == id)
            .map(|user| user.username.clone())
            .unwrap_or_default()
    }

    fn has_user(&self, id: Uuid) -> bool {
        self.users.iter().any(|user| user.id == id)
    }

    fn post(&self, row: &PostRow) -> Post {
        Post {
            id: row.id,
            author: self.username(row.author_id),
            author_id: row.author_id,
            text: row.text.clone(),
            pub_date: row.pub_date,
            image: row.image.clone(),
            group: row.group,
        }
    }

    fn comment(&self, row: &CommentRow) -> Comment {
        Comment {
            id: row.id,
            author: self.username(row.author_id),
            author_id: row.author_id,
            text: row.text.clone(),
            created: row.created,
            post: row.post_id,
        }
    }

    fn follow(&self, row: &FollowRow) -> Follow {
        Follow {
            id: row.id,
            user: self.username(row.user_id),
            user_id: row.user_id,
            following: self.username(row.following_id),
            following_id: row.following_id,
            created_at: row.created_at,
        }
    }

    fn check_group(&self, group: Option<i64>) -> StoreResult<()> {
        match group {
            Some(id) if !self.groups.iter().any(|g| g.id == id) => {
                Err(StoreError::ForeignKeyViolation {
                    constraint: "posts_group_id_fkey".to_string(),
                })
            }
            _ => Ok(()),
        }
    }

    fn next_id(counter: &mut i64) -> i64 {
        *counter += 1;
        *counter
    }
}

/// Store keeping everything in process memory
#[derive(Debug, Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserStore for MemoryStore {
    async fn create_user(&self, new_user: NewUser) -> StoreResult<User> {
        let mut tables = self.tables.write().await;
        if tables.users.iter().any(|u| u.username == new_user.username) {
            return Err(StoreError::UniqueViolation {
                constraint: USERS_USERNAME_KEY.to_string(),
            });
        }

        let now = Utc::now();
        let user = User {
            id: Uuid::new_v4(),
            username: new_user.username,
            email: new_user.email,
            password_hash: new_user.password_hash,
            created_at: now,
            updated_at: now,
        };
        tables.users.push(user.clone());
        Ok(user)
    }

    async fn user_by_id(&self, id: Uuid) -> StoreResult<Option<User>> {
        let tables = self.tables.read().await;
        Ok(tables.users.iter().find(|u| u.id == id).cloned())
    }

    async fn user_by_username(&self, username: &str) -> StoreResult<Option<User>> {
        let tables = self.tables.read().await;
        Ok(tables.users.iter().find(|u| u.username == username).cloned())
    }
}

#[async_trait]
impl GroupStore for MemoryStore {
    async fn create_group(&self, group: NewGroup) -> StoreResult<Group> {
        let mut tables = self.tables.write().await;
        if tables.groups.iter().any(|g| g.slug == group.slug) {
            return Err(StoreError::UniqueViolation {
                constraint: GROUPS_SLUG_KEY.to_string(),
            });
        }

        let group = Group {
            id: Tables::next_id(&mut tables.next_group_id),
            title: group.title,
            slug: group.slug,
            description: group.description,
        };
        tables.groups.push(group.clone());
        Ok(group)
    }

    async fn list_groups(&self) -> StoreResult<Vec<Group>> {
        Ok(self.tables.read().await.groups.clone())
    }

    async fn group_by_id(&self, id: i64) -> StoreResult<Option<Group>> {
        let tables = self.tables.read().await;
        Ok(tables.groups.iter().find(|g| g.id == id).cloned())
    }
}

#[async_trait]
impl PostStore for MemoryStore {
    async fn count_posts(&self) -> StoreResult<i64> {
        Ok(self.tables.read().await.posts.len() as i64)
    }

    async fn list_posts(&self, window: Option<Window>) -> StoreResult<Vec<Post>> {
        let tables = self.tables.read().await;
        let (skip, take) = match window {
            Some(Window { limit, offset }) => (offset as usize, limit as usize),
            None => (0, usize::MAX),
        };
        Ok(tables
            .posts
            .iter()
            .skip(skip)
            .take(take)
            .map(|row| tables.post(row))
            .collect())
    }

    async fn post_by_id(&self, id: i64) -> StoreResult<Option<Post>> {
        let tables = self.tables.read().await;
        Ok(tables
            .posts
            .iter()
            .find(|row| row.id == id)
            .map(|row| tables.post(row)))
    }

    async fn create_post(&self, author_id: Uuid, draft: PostDraft) -> StoreResult<Post> {
        let mut tables = self.tables.write().await;
        if !tables.has_user(author_id) {
            return Err(StoreError::ForeignKeyViolation {
                constraint: "posts_author_id_fkey".to_string(),
            });
        }
        tables.check_group(draft.group)?;

        let row = PostRow {
            id: Tables::next_id(&mut tables.next_post_id),
            author_id,
            text: draft.text,
            pub_date: Utc::now(),
            image: draft.image,
            group: draft.group,
        };
        let post = tables.post(&row);
        tables.posts.push(row);
        Ok(post)
    }

    async fn update_post(&self, id: i64, draft: PostDraft) -> StoreResult<Option<Post>> {
        let mut tables = self.tables.write().await;
        tables.check_group(draft.group)?;

        let Some(row) = tables.posts.iter_mut().find(|row| row.id == id) else {
            return Ok(None);
        };
        row.text = draft.text;
        row.image = draft.image;
        row.group = draft.group;
        let row = row.clone();
        Ok(Some(tables.post(&row)))
    }

    async fn delete_post(&self, id: i64) -> StoreResult<bool> {
        let mut tables = self.tables.write().await;
        let before = tables.posts.len();
        tables.posts.retain(|row| row.id != id);
        let deleted = tables.posts.len() != before;
        if deleted {
            tables.comments.retain(|row| row.post_id != id);
        }
        Ok(deleted)
    }
}

#[async_trait]
impl CommentStore for MemoryStore {
    async fn list_comments(&self, post_id: i64) -> StoreResult<Vec<Comment>> {
        let tables = self.tables.read().await;
        Ok(tables
            .comments
            .iter()
            .filter(|row| row.post_id == post_id)
            .map(|row| tables.comment(row))
            .collect())
    }

    async fn comment_by_id(&self, post_id: i64, id: i64) -> StoreResult<Option<Comment>> {
        let tables = self.tables.read().await;
        Ok(tables
            .comments
            .iter()
            .find(|row| row.post_id == post_id && row.id == id)
            .map(|row| tables.comment(row)))
    }

    async fn create_comment(
        &self,
        post_id: i64,
        author_id: Uuid,
        text: String,
    ) -> StoreResult<Comment> {
        let mut tables = self.tables.write().await;
        if !tables.posts.iter().any(|row| row.id == post_id) {
            return Err(StoreError::ForeignKeyViolation {
                constraint: "comments_post_id_fkey".to_string(),
            });
        }
        if !tables.has_user(author_id) {
            return Err(StoreError::ForeignKeyViolation {
                constraint: "comments_author_id_fkey".to_string(),
            });
        }

        let row = CommentRow {
            id: Tables::next_id(&mut tables.next_comment_id),
            author_id,
            post_id,
            text,
            created: Utc::now(),
        };
        let comment = tables.comment(&row);
        tables.comments.push(row);
        Ok(comment)
    }

    async fn update_comment(
        &self,
        post_id: i64,
        id: i64,
        text: String,
    ) -> StoreResult<Option<Comment>> {
        let mut tables = self.tables.write().await;
        let Some(row) = tables
            .comments
            .iter_mut()
            .find(|row| row.post_id == post_id && row.id == id)
        else {
            return Ok(None);
        };
        row.text = text;
        let row = row.clone();
        Ok(Some(tables.comment(&row)))
    }

    async fn delete_comment(&self, post_id: i64, id: i64) -> StoreResult<bool> {
        let mut tables = self.tables.write().await;
        let before = tables.comments.len();
        tables
            .comments
            .retain(|row| !(row.post_id == post_id && row.id == id));
        Ok(tables.comments.len() != before)
    }
}

#[async_trait]
impl FollowStore for MemoryStore {
    async fn follow_exists(&self, actor: Uuid, target: Uuid) -> StoreResult<bool> {
        let tables = self.tables.read().await;
        Ok(tables
            .follows
            .iter()
            .any(|row| row.user_id == actor && row.following_id == target))
    }

    async fn insert_follow(&self, edge: &FollowEdge) -> StoreResult<Follow> {
        let mut tables = self.tables.write().await;
        let (actor, target) = (edge.actor().id, edge.target().id);

        if actor == target {
            return Err(StoreError::CheckViolation {
                constraint: FOLLOWS_NO_SELF_FOLLOW.to_string(),
            });
        }
        if tables
            .follows
            .iter()
            .any(|row| row.user_id == actor && row.following_id == target)
        {
            return Err(StoreError::UniqueViolation {
                constraint: FOLLOWS_UNIQUE_PAIR.to_string(),
            });
        }
        if !tables.has_user(actor) || !tables.has_user(target) {
            return Err(StoreError::ForeignKeyViolation {
                constraint: "follows_user_id_fkey".to_string(),
            });
        }

        let row = FollowRow {
            id: Tables::next_id(&mut tables.next_follow_id),
            user_id: actor,
            following_id: target,
            created_at: Utc::now(),
        };
        let follow = tables.follow(&row);
        tables.follows.push(row);
        Ok(follow)
    }

    async fn list_follows(&self, actor: Uuid, terms: &[&str]) -> StoreResult<Vec<Follow>> {
        let tables = self.tables.read().await;
        let needles: Vec<String> = terms.iter().map(|term| term.to_lowercase()).collect();
        Ok(tables
            .follows
            .iter()
            .filter(|row| row.user_id == actor)
            .map(|row| tables.follow(row))
            .filter(|follow| {
                let following = follow.following.to_lowercase();
                needles.iter().all(|needle| following.contains(needle.as_str()))
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::follow::{FollowGuard, UserRef};

    async fn user(store: &MemoryStore, username: &str) -> User {
        store
            .create_user(NewUser {
                username: username.to_string(),
                email: None,
                password_hash: "x".to_string(),
            })
            .await
            .unwrap()
    }

    fn draft(text: &str) -> PostDraft {
        PostDraft {
            text: text.to_string(),
            image: None,
            group: None,
        }
    }

    #[tokio::test]
    async fn test_duplicate_username_is_unique_violation() {
        let store = MemoryStore::new();
        user(&store, "alice").await;
        let err = store
            .create_user(NewUser {
                username: "alice".to_string(),
                email: None,
                password_hash: "y".to_string(),
            })
            .await
            .unwrap_err();
        assert!(err.is_unique_violation_of(USERS_USERNAME_KEY));
    }

    #[tokio::test]
    async fn test_list_posts_window() {
        let store = MemoryStore::new();
        let alice = user(&store, "alice").await;
        for i in 0..5 {
            store.create_post(alice.id, draft(&format!("post {}", i))).await.unwrap();
        }

        let page = store
            .list_posts(Some(Window { limit: 2, offset: 3 }))
            .await
            .unwrap();
        let texts: Vec<_> = page.iter().map(|p| p.text.as_str()).collect();
        assert_eq!(texts, vec!["post 3", "post 4"]);
        assert_eq!(store.count_posts().await.unwrap(), 5);
        assert_eq!(page[0].author, "alice");
    }

    #[tokio::test]
    async fn test_post_with_unknown_group_is_rejected() {
        let store = MemoryStore::new();
        let alice = user(&store, "alice").await;
        let mut d = draft("hi");
        d.group = Some(42);
        let err = store.create_post(alice.id, d).await.unwrap_err();
        assert!(matches!(err, StoreError::ForeignKeyViolation { .. }));
    }

    #[tokio::test]
    async fn test_delete_post_cascades_to_comments() {
        let store = MemoryStore::new();
        let alice = user(&store, "alice").await;
        let post = store.create_post(alice.id, draft("hi")).await.unwrap();
        store.create_comment(post.id, alice.id, "c".to_string()).await.unwrap();

        assert!(store.delete_post(post.id).await.unwrap());
        assert!(store.list_comments(post.id).await.unwrap().is_empty());
        assert!(!store.delete_post(post.id).await.unwrap());
    }

    #[tokio::test]
    async fn test_comment_scoped_to_post() {
        let store = MemoryStore::new();
        let alice = user(&store, "alice").await;
        let first = store.create_post(alice.id, draft("one")).await.unwrap();
        let second = store.create_post(alice.id, draft("two")).await.unwrap();
        let comment = store
            .create_comment(first.id, alice.id, "on first".to_string())
            .await
            .unwrap();

        assert!(store.comment_by_id(second.id, comment.id).await.unwrap().is_none());
        assert!(store.comment_by_id(first.id, comment.id).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_insert_follow_enforces_unique_pair() {
        let store = MemoryStore::new();
        let alice = user(&store, "alice").await;
        user(&store, "bob").await;

        let edge = FollowGuard::new(&store)
            .propose_follow(&UserRef::from(&alice), "bob")
            .await
            .unwrap();
        store.insert_follow(&edge).await.unwrap();

        // A second insert of the same validated edge models the check-then-write race.
        let err = store.insert_follow(&edge).await.unwrap_err();
        assert!(err.is_unique_violation_of(FOLLOWS_UNIQUE_PAIR));
    }

    #[tokio::test]
    async fn test_list_follows_search_is_case_insensitive() {
        let store = MemoryStore::new();
        let alice = user(&store, "alice").await;
        user(&store, "Bobby").await;
        user(&store, "carol").await;

        let guard = FollowGuard::new(&store);
        let actor: UserRef = alice.clone().into();
        for handle in ["Bobby", "carol"] {
            let edge = guard.propose_follow(&actor, handle).await.unwrap();
            store.insert_follow(&edge).await.unwrap();
        }

        let found = store.list_follows(alice.id, &["bob"]).await.unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].following, "Bobby");
        assert_eq!(store.list_follows(alice.id, &[]).await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_list_follows_requires_every_term() {
        let store = MemoryStore::new();
        let alice = user(&store, "alice").await;
        let actor: UserRef = alice.clone().into();
        for handle in ["bobcat", "bobby", "tomcat"] {
            user(&store, handle).await;
            let edge = FollowGuard::new(&store).propose_follow(&actor, handle).await.unwrap();
            store.insert_follow(&edge).await.unwrap();
        }

        let found = store.list_follows(alice.id, &["BOB", "cat"]).await.unwrap();
        let handles: Vec<_> = found.iter().map(|f| f.following.as_str()).collect();
        assert_eq!(handles, vec!["bobcat"]);
    }
}
