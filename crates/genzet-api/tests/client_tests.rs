use std::collections::HashMap;
use std::time::Duration;

use axum::extract::{Path, Query};
use axum::http::{HeaderMap, StatusCode};
use axum::routing::{delete, get, post};
use axum::{Json, Router};
use serde_json::{json, Value};

use genzet_api::HttpBlogApi;
use genzet_core::traits::BlogApi;
use genzet_core::types::{ArticleQuery, CategoryPayload, Role, SortDirection, SortField};
use genzet_core::Error;

const TOKEN: &str = "tok-admin";

fn article_json(id: &str, title: &str) -> Value {
    json!({
        "id": id, "userId": "u1", "categoryId": "c1", "title": title, "content": "<p>x</p>",
        "imageUrl": null, "createdAt": "2024-01-01T00:00:00.000Z", "updatedAt": "2024-01-01T00:00:00.000Z",
        "category": {"id": "c1", "userId": "u1", "name": "Tech", "createdAt": "", "updatedAt": ""},
        "user": {"id": "u1", "username": "alice"}
    })
}

fn authorized(headers: &HeaderMap) -> bool {
    headers.get("authorization").and_then(|v| v.to_str().ok()) == Some("Bearer tok-admin")
}

async fn login(Json(body): Json<Value>) -> (StatusCode, Json<Value>) {
    if body["username"] == "admin" && body["password"] == "secret" {
        (StatusCode::OK, Json(json!({"token": TOKEN, "role": "Admin"})))
    } else {
        (StatusCode::UNAUTHORIZED, Json(json!({"message": "Invalid credentials"})))
    }
}

async fn profile(headers: HeaderMap) -> (StatusCode, Json<Value>) {
    if authorized(&headers) {
        (StatusCode::OK, Json(json!({"id": "u1", "username": "admin", "role": "Admin", "createdAt": "", "updatedAt": ""})))
    } else {
        (StatusCode::UNAUTHORIZED, Json(json!({"error": "Unauthorized"})))
    }
}

async fn list_articles(Query(params): Query<HashMap<String, String>>) -> Json<Value> {
    let echo = ["page", "limit", "title", "categoryId", "sortBy", "sortOrder"]
        .iter()
        .map(|k| format!("{}={}", k, params.get(*k).cloned().unwrap_or_default()))
        .collect::<Vec<_>>()
        .join("&");
    let page: usize = params.get("page").and_then(|p| p.parse().ok()).unwrap_or(1);
    Json(json!({"data": [article_json("a1", &echo)], "total": 19, "page": page, "limit": 9}))
}

async fn get_article(Path(id): Path<String>) -> (StatusCode, Json<Value>) {
    if id == "missing" {
        (StatusCode::NOT_FOUND, Json(json!({"message": "Article not found"})))
    } else {
        (StatusCode::OK, Json(article_json(&id, "Detail")))
    }
}

async fn delete_article(headers: HeaderMap, Path(_id): Path<String>) -> StatusCode {
    if authorized(&headers) { StatusCode::OK } else { StatusCode::UNAUTHORIZED }
}

async fn list_categories(Query(params): Query<HashMap<String, String>>) -> Json<Value> {
    let limit: usize = params.get("limit").and_then(|l| l.parse().ok()).unwrap_or(10);
    Json(json!({"data": [{"id": "c1", "userId": "u1", "name": "Tech", "createdAt": "", "updatedAt": ""}],
                "totalData": limit, "currentPage": 1, "totalPages": 1}))
}

async fn get_category(Path(id): Path<String>) -> (StatusCode, Json<Value>) {
    if id == "c1" {
        (StatusCode::OK, Json(json!({"id": "c1", "userId": "u1", "name": "Tech", "createdAt": "", "updatedAt": ""})))
    } else {
        (StatusCode::NOT_FOUND, Json(json!({"message": "Category not found"})))
    }
}

async fn create_category(headers: HeaderMap, Json(body): Json<Value>) -> (StatusCode, Json<Value>) {
    if !authorized(&headers) {
        return (StatusCode::UNAUTHORIZED, Json(json!({})));
    }
    if body["name"] == "Dup" {
        (StatusCode::CONFLICT, Json(json!({"message": "Category already exists"})))
    } else {
        (StatusCode::CREATED, Json(json!({"id": "c9", "name": body["name"]})))
    }
}

async fn spawn() -> HttpBlogApi {
    let app = Router::new()
        .route("/api/auth/login", post(login))
        .route("/api/auth/profile", get(profile))
        .route("/api/articles", get(list_articles))
        .route("/api/articles/{id}", get(get_article).delete(delete_article))
        .route("/api/categories", get(list_categories).post(create_category))
        .route("/api/categories/{id}", get(get_category).delete(|| async { StatusCode::OK }));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move { axum::serve(listener, app).await.unwrap() });
    HttpBlogApi::new(&format!("http://{}/api/", addr), Duration::from_secs(5)).unwrap()
}

#[tokio::test]
async fn login_and_profile_round_trip() {
    let api = spawn().await;
    let login = api.login("admin", "secret").await.expect("login");
    assert_eq!(login.role, Role::Admin);

    let profile = api.profile(&login.token).await.expect("profile");
    assert_eq!(profile.username, "admin");
    assert_eq!(profile.role, Role::Admin);
}

#[tokio::test]
async fn bad_credentials_map_to_unauthenticated() {
    let api = spawn().await;
    assert!(matches!(api.login("admin", "nope").await, Err(Error::Unauthenticated)));
    assert!(matches!(api.profile("stale").await, Err(Error::Unauthenticated)));
}

#[tokio::test]
async fn article_query_reaches_the_server() {
    let api = spawn().await;
    let query = ArticleQuery {
        page: Some(2),
        limit: Some(9),
        title: Some(" rust ".into()),
        category_id: Some("c1".into()),
        sort_by: Some(SortField::Title),
        sort_order: Some(SortDirection::Asc),
    };
    let list = api.list_articles(&query).await.expect("list");
    assert_eq!(list.total, 19);
    assert_eq!(list.page, 2);
    assert_eq!(list.data[0].title, "page=2&limit=9&title=rust&categoryId=c1&sortBy=title&sortOrder=asc");
}

#[tokio::test]
async fn missing_article_is_not_found() {
    let api = spawn().await;
    match api.get_article("missing").await {
        Err(Error::NotFound(msg)) => assert_eq!(msg, "Article not found"),
        other => panic!("expected NotFound, got {:?}", other.map(|a| a.id)),
    }
    assert_eq!(api.get_article("a7").await.expect("article").id, "a7");
}

#[tokio::test]
async fn mutations_send_bearer_token() {
    let api = spawn().await;
    api.delete_article(TOKEN, "a1").await.expect("delete");
    assert!(matches!(api.delete_article("wrong", "a1").await, Err(Error::Unauthenticated)));

    let created = api.create_category(TOKEN, &CategoryPayload { name: "Travel".into() }).await;
    assert!(created.is_ok());
    match api.create_category(TOKEN, &CategoryPayload { name: "Dup".into() }).await {
        Err(e) => assert_eq!(e.status(), Some(409)),
        Ok(()) => panic!("duplicate name accepted"),
    }
    api.delete_category(TOKEN, "c1").await.expect("delete category");
}

#[tokio::test]
async fn single_category_is_fetched_by_id() {
    let api = spawn().await;
    assert_eq!(api.get_category("c1").await.expect("category").name, "Tech");
    assert!(matches!(api.get_category("c404").await, Err(Error::NotFound(_))));
}

#[tokio::test]
async fn categories_limit_is_forwarded() {
    let api = spawn().await;
    assert_eq!(api.list_categories(Some(1000)).await.expect("list").total_data, 1000);
    assert_eq!(api.list_categories(None).await.expect("list").total_data, 10);
}

#[tokio::test]
async fn unreachable_server_is_a_transport_error() {
    let api = HttpBlogApi::new("http://127.0.0.1:9/api", Duration::from_millis(500)).unwrap();
    assert!(matches!(api.list_categories(None).await, Err(Error::Transport(_))));
}
