//! HTTP-level integration tests for post, comment, and reply CRUD,
//! ownership enforcement, and the mypage written aggregation.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete_auth, get, get_auth, post_json_auth, put_json_auth, Session};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn create_post(pool: &PgPool, session: &Session, title: &str) -> i64 {
    let app = common::build_test_app(pool.clone());
    let response = post_json_auth(
        app,
        "/api/v1/posts",
        serde_json::json!({ "title": title, "content": "some content" }),
        session,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    json["data"]["id"].as_i64().expect("post id must be numeric")
}

async fn create_comment(pool: &PgPool, session: &Session, post_id: i64) -> i64 {
    let app = common::build_test_app(pool.clone());
    let response = post_json_auth(
        app,
        &format!("/api/v1/posts/{post_id}/comments"),
        serde_json::json!({ "content": "a comment" }),
        session,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    json["data"]["id"].as_i64().expect("comment id must be numeric")
}

async fn create_reply(pool: &PgPool, session: &Session, comment_id: i64) -> i64 {
    let app = common::build_test_app(pool.clone());
    let response = post_json_auth(
        app,
        &format!("/api/v1/comments/{comment_id}/replies"),
        serde_json::json!({ "content": "a reply" }),
        session,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    json["data"]["id"].as_i64().expect("reply id must be numeric")
}

// ---------------------------------------------------------------------------
// Posts
// ---------------------------------------------------------------------------

/// Creating a post returns the author-joined view in the envelope.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_post(pool: PgPool) {
    let session = common::signup_and_login(&pool, "momo").await;

    let app = common::build_test_app(pool);
    let response = post_json_auth(
        app,
        "/api/v1/posts",
        serde_json::json!({
            "title": "Hello",
            "content": "First post",
            "image_url": "https://cdn.example.com/cat.png",
        }),
        &session,
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["data"]["title"], "Hello");
    assert_eq!(json["data"]["author"], "momo");
    assert_eq!(json["data"]["likes_num"], 0);
    assert_eq!(json["data"]["image_url"], "https://cdn.example.com/cat.png");
}

/// Creating a post requires a session.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_post_requires_auth(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = common::post_json(
        app,
        "/api/v1/posts",
        serde_json::json!({ "title": "Hello", "content": "body" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

/// An empty title is rejected with 400 before anything is written.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_post_empty_title(pool: PgPool) {
    let session = common::signup_and_login(&pool, "momo").await;

    let app = common::build_test_app(pool.clone());
    let response = post_json_auth(
        app,
        "/api/v1/posts",
        serde_json::json!({ "title": "", "content": "body" }),
        &session,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/posts").await;
    let json = body_json(response).await;
    assert!(json["data"].as_array().unwrap().is_empty());
}

/// The post list is public and ordered most recently modified first.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_list_posts_public_and_ordered(pool: PgPool) {
    let session = common::signup_and_login(&pool, "momo").await;
    create_post(&pool, &session, "first").await;
    let second_id = create_post(&pool, &session, "second").await;

    let app = common::build_test_app(pool.clone());
    let response = get(app, "/api/v1/posts").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let posts = json["data"].as_array().unwrap();
    assert_eq!(posts.len(), 2);
    assert_eq!(posts[0]["title"], "second");

    // Updating the first post bumps it to the top.
    let first_id = posts[1]["id"].as_i64().unwrap();
    let app = common::build_test_app(pool.clone());
    let response = put_json_auth(
        app,
        &format!("/api/v1/posts/{first_id}"),
        serde_json::json!({ "title": "first, edited", "content": "new body" }),
        &session,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/posts").await;
    let json = body_json(response).await;
    let posts = json["data"].as_array().unwrap();
    assert_eq!(posts[0]["title"], "first, edited");
    assert_eq!(posts[1]["id"].as_i64().unwrap(), second_id);
}

/// A post detail carries its comment thread, oldest first.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_get_post_with_comments(pool: PgPool) {
    let session = common::signup_and_login(&pool, "momo").await;
    let post_id = create_post(&pool, &session, "threaded").await;
    create_comment(&pool, &session, post_id).await;
    create_comment(&pool, &session, post_id).await;

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/api/v1/posts/{post_id}")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"]["title"], "threaded");
    assert_eq!(json["data"]["comments"].as_array().unwrap().len(), 2);
    assert_eq!(json["data"]["comments"][0]["author"], "momo");
}

/// Fetching a missing post reports NOT_FOUND.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_get_missing_post(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/posts/999999").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["error"]["code"], "NOT_FOUND");
}

/// Only the author may update a post.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_update_post_requires_ownership(pool: PgPool) {
    let author = common::signup_and_login(&pool, "author").await;
    let intruder = common::signup_and_login(&pool, "intruder").await;
    let post_id = create_post(&pool, &author, "mine").await;

    let app = common::build_test_app(pool.clone());
    let response = put_json_auth(
        app,
        &format!("/api/v1/posts/{post_id}"),
        serde_json::json!({ "title": "hijacked", "content": "gotcha" }),
        &intruder,
    )
    .await;

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    let json = body_json(response).await;
    assert_eq!(json["error"]["code"], "BAD_REQUEST");

    // The post is untouched.
    let app = common::build_test_app(pool);
    let response = get(app, &format!("/api/v1/posts/{post_id}")).await;
    let json = body_json(response).await;
    assert_eq!(json["data"]["title"], "mine");
}

/// Deleting a post cascades to its comments.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_delete_post_cascades(pool: PgPool) {
    let session = common::signup_and_login(&pool, "momo").await;
    let post_id = create_post(&pool, &session, "doomed").await;
    let comment_id = create_comment(&pool, &session, post_id).await;

    let app = common::build_test_app(pool.clone());
    let response = delete_auth(app, &format!("/api/v1/posts/{post_id}"), &session).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"], "deleted");

    let app = common::build_test_app(pool.clone());
    let response = get(app, &format!("/api/v1/posts/{post_id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    // The comment went with it.
    let app = common::build_test_app(pool);
    let response = put_json_auth(
        app,
        &format!("/api/v1/comments/{comment_id}"),
        serde_json::json!({ "content": "still here?" }),
        &session,
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

/// Only the author may delete a post.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_delete_post_requires_ownership(pool: PgPool) {
    let author = common::signup_and_login(&pool, "author").await;
    let intruder = common::signup_and_login(&pool, "intruder").await;
    let post_id = create_post(&pool, &author, "mine").await;

    let app = common::build_test_app(pool);
    let response = delete_auth(app, &format!("/api/v1/posts/{post_id}"), &intruder).await;

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

// ---------------------------------------------------------------------------
// Comments and replies
// ---------------------------------------------------------------------------

/// Commenting on a missing post reports NOT_FOUND.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_comment_on_missing_post(pool: PgPool) {
    let session = common::signup_and_login(&pool, "momo").await;

    let app = common::build_test_app(pool);
    let response = post_json_auth(
        app,
        "/api/v1/posts/999999/comments",
        serde_json::json!({ "content": "into the void" }),
        &session,
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

/// A comment's author can edit it; others cannot.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_update_comment_ownership(pool: PgPool) {
    let author = common::signup_and_login(&pool, "author").await;
    let intruder = common::signup_and_login(&pool, "intruder").await;
    let post_id = create_post(&pool, &author, "post").await;
    let comment_id = create_comment(&pool, &author, post_id).await;

    let app = common::build_test_app(pool.clone());
    let response = put_json_auth(
        app,
        &format!("/api/v1/comments/{comment_id}"),
        serde_json::json!({ "content": "edited" }),
        &intruder,
    )
    .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let app = common::build_test_app(pool);
    let response = put_json_auth(
        app,
        &format!("/api/v1/comments/{comment_id}"),
        serde_json::json!({ "content": "edited" }),
        &author,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["content"], "edited");
}

/// Replies nest under comments and list oldest first, publicly.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_reply_crud(pool: PgPool) {
    let session = common::signup_and_login(&pool, "momo").await;
    let post_id = create_post(&pool, &session, "post").await;
    let comment_id = create_comment(&pool, &session, post_id).await;
    let reply_id = create_reply(&pool, &session, comment_id).await;
    create_reply(&pool, &session, comment_id).await;

    let app = common::build_test_app(pool.clone());
    let response = get(app, &format!("/api/v1/comments/{comment_id}/replies")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let replies = json["data"].as_array().unwrap();
    assert_eq!(replies.len(), 2);
    assert_eq!(replies[0]["id"].as_i64().unwrap(), reply_id);

    let app = common::build_test_app(pool.clone());
    let response = delete_auth(app, &format!("/api/v1/replies/{reply_id}"), &session).await;
    assert_eq!(response.status(), StatusCode::OK);

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/api/v1/comments/{comment_id}/replies")).await;
    let json = body_json(response).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 1);
}

/// Replying under a missing comment reports NOT_FOUND.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_reply_on_missing_comment(pool: PgPool) {
    let session = common::signup_and_login(&pool, "momo").await;

    let app = common::build_test_app(pool);
    let response = post_json_auth(
        app,
        "/api/v1/comments/999999/replies",
        serde_json::json!({ "content": "into the void" }),
        &session,
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Mypage written aggregation
// ---------------------------------------------------------------------------

/// mypage/written returns only the caller's own content, split by kind.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_mypage_written_aggregation(pool: PgPool) {
    let momo = common::signup_and_login(&pool, "momo").await;
    let other = common::signup_and_login(&pool, "other").await;

    let post_id = create_post(&pool, &momo, "momo's post").await;
    let comment_id = create_comment(&pool, &other, post_id).await;
    create_reply(&pool, &momo, comment_id).await;

    let app = common::build_test_app(pool);
    let response = get_auth(app, "/api/v1/members/mypage/written", &momo).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"]["posts"].as_array().unwrap().len(), 1);
    assert_eq!(json["data"]["posts"][0]["title"], "momo's post");
    assert!(
        json["data"]["comments"].as_array().unwrap().is_empty(),
        "another member's comment must not appear"
    );
    assert_eq!(json["data"]["replies"].as_array().unwrap().len(), 1);
}
