/**
 * API Routes
 *
 * The `/api/v1/` surface. Every path ends with a slash.
 *
 * - `POST /api/v1/auth/signup/`, `GET /api/v1/auth/me/`
 * - `POST /api/v1/jwt/create/`, `/refresh/`, `/verify/`
 * - `/api/v1/posts/` and `/api/v1/posts/{id}/`
 * - `/api/v1/posts/{post_id}/comments/` and `.../comments/{id}/`
 * - `GET /api/v1/groups/` and `/api/v1/groups/{id}/`
 * - `GET`/`POST /api/v1/follow/`
 */

use axum::{
    routing::{get, post},
    Router,
};

use crate::backend::auth::{get_me, obtain_token, refresh_token, signup, verify_token};
use crate::backend::comments::{
    create_comment, delete_comment, get_comment, list_comments, partial_update_comment,
    update_comment,
};
use crate::backend::follow::{create_follow, list_follows};
use crate::backend::groups::{get_group, list_groups};
use crate::backend::posts::{
    create_post, delete_post, get_post, list_posts, partial_update_post, update_post,
};
use crate::backend::server::state::AppState;

pub fn configure_api_routes(router: Router<AppState>) -> Router<AppState> {
    router
        // Accounts and tokens
        .route("/api/v1/auth/signup/", post(signup))
        .route("/api/v1/auth/me/", get(get_me))
        .route("/api/v1/jwt/create/", post(obtain_token))
        .route("/api/v1/jwt/refresh/", post(refresh_token))
        .route("/api/v1/jwt/verify/", post(verify_token))
        // Posts
        .route("/api/v1/posts/", get(list_posts).post(create_post))
        .route(
            "/api/v1/posts/{id}/",
            get(get_post)
                .put(update_post)
                .patch(partial_update_post)
                .delete(delete_post),
        )
        // Comments
        .route(
            "/api/v1/posts/{post_id}/comments/",
            get(list_comments).post(create_comment),
        )
        .route(
            "/api/v1/posts/{post_id}/comments/{id}/",
            get(get_comment)
                .put(update_comment)
                .patch(partial_update_comment)
                .delete(delete_comment),
        )
        // Groups
        .route("/api/v1/groups/", get(list_groups))
        .route("/api/v1/groups/{id}/", get(get_group))
        // Follows
        .route("/api/v1/follow/", get(list_follows).post(create_follow))
}
