use axum::body::Body;
use axum::http::{Request, Response};
use library_catalog::api::handlers::AppState;
use library_catalog::api::router::create_router;
use library_catalog::application::catalog::sample_catalog;
use serde::de::DeserializeOwned;
use std::sync::Arc;

/// サンプルカタログを載せたルーターを作成
#[allow(dead_code)]
pub fn sample_app() -> axum::Router {
    create_router(Arc::new(AppState::new(sample_catalog())))
}

/// JSONボディ付きPOSTリクエストを作成
#[allow(dead_code)]
pub fn post_json(uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_string(&body).unwrap()))
        .unwrap()
}

/// GETリクエストを作成
#[allow(dead_code)]
pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

/// レスポンスボディをJSONとして読み取る
#[allow(dead_code)]
pub async fn read_json<T: DeserializeOwned>(response: Response<Body>) -> T {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}

/// レスポンスボディをテキストとして読み取る
#[allow(dead_code)]
pub async fn read_text(response: Response<Body>) -> String {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(body.to_vec()).unwrap()
}
