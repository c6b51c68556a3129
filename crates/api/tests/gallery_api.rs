//! HTTP-level integration tests for the video and photo galleries.

mod common;

use axum::http::StatusCode;
use common::{body_bytes, body_json, delete, get, patch_empty, post_empty, post_json, put_json, Part};
use serde_json::json;
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Videos
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn youtube_video_gets_derived_thumbnail(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/gallery/videos",
        json!({
            "title": "Annadaan at Hyderabad schools",
            "video_url": "https://www.youtube.com/watch?v=dQw4w9WgXcQ",
            "category": "events"
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let data = body_json(response).await["data"].clone();
    assert_eq!(
        data["thumbnail_url"],
        "https://img.youtube.com/vi/dQw4w9WgXcQ/hqdefault.jpg"
    );
    assert_eq!(data["views"], 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn relative_video_url_is_rejected(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/gallery/videos",
        json!({"title": "Bad", "video_url": "/videos/local.mp4"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn malformed_video_url_is_rejected(pool: PgPool) {
    for url in ["https://not a url", "https://?x"] {
        let app = common::build_test_app(pool.clone());
        let response = post_json(
            app,
            "/api/v1/gallery/videos",
            json!({"title": "Bad", "video_url": url}),
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{url}");
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn youtube_subdomain_with_port_gets_thumbnail(pool: PgPool) {
    let video = common::create(
        &pool,
        "/api/v1/gallery/videos",
        json!({
            "title": "Kirtan evening",
            "video_url": "https://music.youtube.com:443/watch?v=dQw4w9WgXcQ"
        }),
    )
    .await;
    assert_eq!(
        video["thumbnail_url"],
        "https://img.youtube.com/vi/dQw4w9WgXcQ/hqdefault.jpg"
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn video_views_toggle_and_update(pool: PgPool) {
    let video = common::create(
        &pool,
        "/api/v1/gallery/videos",
        json!({"title": "Festival", "video_url": "https://vimeo.com/12345"}),
    )
    .await;
    let id = video["id"].as_i64().unwrap();
    assert!(video["thumbnail_url"].is_null());

    for _ in 0..2 {
        let app = common::build_test_app(pool.clone());
        post_empty(app, &format!("/api/v1/gallery/videos/{id}/view")).await;
    }

    let app = common::build_test_app(pool.clone());
    let json = body_json(get(app, &format!("/api/v1/gallery/videos/{id}")).await).await;
    assert_eq!(json["data"]["views"], 2);

    let app = common::build_test_app(pool.clone());
    let response = put_json(
        app,
        &format!("/api/v1/gallery/videos/{id}"),
        json!({"video_url": "https://youtu.be/abcdefghijk"}),
    )
    .await;
    assert_eq!(
        body_json(response).await["data"]["thumbnail_url"],
        "https://img.youtube.com/vi/abcdefghijk/hqdefault.jpg"
    );

    let app = common::build_test_app(pool.clone());
    patch_empty(app, &format!("/api/v1/gallery/videos/{id}/toggle-active")).await;
    let app = common::build_test_app(pool.clone());
    let json = body_json(get(app, "/api/v1/gallery/videos?active_only=true").await).await;
    assert_eq!(json["total"], 0);

    let app = common::build_test_app(pool);
    let response = delete(app, &format!("/api/v1/gallery/videos/{id}")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
}

// ---------------------------------------------------------------------------
// Photos
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn photo_upload_stores_and_serves_file(pool: PgPool) {
    let config = common::test_config();
    let png = common::png_bytes(4, 3);

    let app = common::build_test_app_with_config(pool.clone(), config.clone());
    let response = common::post_multipart(
        app,
        "/api/v1/gallery/photos",
        &[
            Part::Text("title", "Classroom"),
            Part::Text("category", "schools"),
            Part::Text("display_order", "2"),
            Part::File {
                name: "file",
                filename: "classroom.png",
                content_type: "image/png",
                data: &png,
            },
        ],
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let data = body_json(response).await["data"].clone();
    assert_eq!(data["title"], "Classroom");
    assert_eq!(data["width"], 4);
    assert_eq!(data["height"], 3);
    assert_eq!(data["display_order"], 2);
    assert_eq!(data["original_filename"], "classroom.png");
    assert_eq!(data["file_size_bytes"], png.len() as i64);

    let file_path = data["file_path"].as_str().unwrap().to_string();
    assert!(file_path.starts_with("images/"));
    assert!(file_path.ends_with(".png"));
    assert!(common::upload_path(&config, &file_path).exists());

    let app = common::build_test_app_with_config(pool, config);
    let response = get(app, &format!("/uploads/{file_path}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_bytes(response).await, png);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn photo_upload_rejects_bad_files(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = common::post_multipart(
        app,
        "/api/v1/gallery/photos",
        &[
            Part::Text("title", "Not an image"),
            Part::File {
                name: "file",
                filename: "fake.png",
                content_type: "image/png",
                data: b"definitely not a png",
            },
        ],
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let app = common::build_test_app(pool.clone());
    let response = common::post_multipart(
        app,
        "/api/v1/gallery/photos",
        &[
            Part::Text("title", "Script"),
            Part::File {
                name: "file",
                filename: "run.exe",
                content_type: "application/octet-stream",
                data: b"MZ",
            },
        ],
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let app = common::build_test_app(pool);
    let response = common::post_multipart(
        app,
        "/api/v1/gallery/photos",
        &[Part::Text("title", "No file")],
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn photo_delete_removes_file(pool: PgPool) {
    let config = common::test_config();
    let png = common::png_bytes(2, 2);

    let app = common::build_test_app_with_config(pool.clone(), config.clone());
    let response = common::post_multipart(
        app,
        "/api/v1/gallery/photos",
        &[
            Part::Text("title", "Temporary"),
            Part::File {
                name: "file",
                filename: "temp.png",
                content_type: "image/png",
                data: &png,
            },
        ],
    )
    .await;
    let data = body_json(response).await["data"].clone();
    let id = data["id"].as_i64().unwrap();
    let stored = common::upload_path(&config, data["file_path"].as_str().unwrap());
    assert!(stored.exists());

    let app = common::build_test_app_with_config(pool.clone(), config.clone());
    let response = put_json(
        app,
        &format!("/api/v1/gallery/photos/{id}"),
        json!({"description": "Updated caption"}),
    )
    .await;
    assert_eq!(body_json(response).await["data"]["description"], "Updated caption");

    let app = common::build_test_app_with_config(pool.clone(), config.clone());
    let response = delete(app, &format!("/api/v1/gallery/photos/{id}")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert!(!stored.exists());

    let app = common::build_test_app_with_config(pool, config);
    let response = get(app, &format!("/api/v1/gallery/photos/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
