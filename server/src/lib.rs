pub mod config;
pub mod proxy;
pub mod server_state;

use std::{net::SocketAddr, path::Path, sync::Arc, time::Instant};

use axum::{
    body::Body,
    extract::ConnectInfo,
    http::Request,
    middleware::{from_fn, Next},
    response::Response,
    routing::any,
    Router,
};
use server_state::ServerState;
use tower_http::services::{ServeDir, ServeFile};

/// `/api/*` goes to the backend. Everything else is the frontend bundle, with
/// `index.html` for any path the router handles client-side.
pub fn router(state: Arc<ServerState>, dist: &Path) -> Router {
    let frontend = ServeDir::new(dist).fallback(ServeFile::new(dist.join("index.html")));

    Router::new()
        .route("/api/{*path}", any(proxy::forward))
        .with_state(state)
        .fallback_service(frontend)
        .layer(from_fn(log_request))
}

async fn log_request(req: Request<Body>, next: Next) -> Response {
    let method = req.method().clone();
    let path = req.uri().path().to_owned();
    let visitor = req.extensions().get::<ConnectInfo<SocketAddr>>().map(|info| info.0.ip());
    let started = Instant::now();

    let response = next.run(req).await;

    // A page load also fetches JS, WASM and CSS; only pages and API calls are worth a line.
    let asset = path.ends_with(".js") || path.ends_with(".wasm") || path.ends_with(".css");
    if !asset {
        match visitor {
            Some(ip) => tracing::info!("{ip} {method} {path} {} in {:?}", response.status(), started.elapsed()),
            None => tracing::info!("{method} {path} {} in {:?}", response.status(), started.elapsed()),
        }
    }

    response
}

#[cfg(test)]
mod tests {
    use axum::{
        body::to_bytes,
        http::{header, StatusCode},
        routing::{get, post},
    };
    use tower::ServiceExt;

    use super::*;

    fn dist() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("index.html"), "<html>rideshare</html>").unwrap();
        std::fs::write(dir.path().join("app.js"), "console.log(1)").unwrap();
        dir
    }

    async fn body_text(response: Response) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    /// A stand-in backend on an ephemeral port.
    async fn backend() -> String {
        let app = Router::new()
            .route("/api/rides/search", get(|req: Request<Body>| async move { req.uri().query().unwrap_or_default().to_owned() }))
            .route(
                "/api/users/profile",
                get(|req: Request<Body>| async move {
                    match req.headers().get(header::AUTHORIZATION) {
                        Some(_) => (StatusCode::OK, [(header::CONTENT_TYPE, "application/json")], r#"{"id":1}"#),
                        None => (StatusCode::UNAUTHORIZED, [(header::CONTENT_TYPE, "text/plain")], ""),
                    }
                }),
            )
            .route("/api/auth/login", post(|body: String| async move { (StatusCode::BAD_REQUEST, body) }));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move { axum::serve(listener, app).await.unwrap() });
        format!("http://{addr}")
    }

    fn get_request(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn client_routes_fall_back_to_index() {
        let dir = dist();
        let app = router(Arc::new(ServerState::new("http://127.0.0.1:1")), dir.path());

        let response = app.clone().oneshot(get_request("/my-rides")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_text(response).await, "<html>rideshare</html>");

        let response = app.oneshot(get_request("/app.js")).await.unwrap();
        assert_eq!(body_text(response).await, "console.log(1)");
    }

    #[tokio::test]
    async fn api_is_forwarded_with_query_and_auth() {
        let dir = dist();
        let app = router(Arc::new(ServerState::new(&backend().await)), dir.path());

        let response = app
            .clone()
            .oneshot(get_request("/api/rides/search?origin=NYC&date=2024-06-01T00%3A00%3A00"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_text(response).await, "origin=NYC&date=2024-06-01T00%3A00%3A00");

        let response = app.clone().oneshot(get_request("/api/users/profile")).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

        let request = Request::builder()
            .uri("/api/users/profile")
            .header(header::AUTHORIZATION, "Bearer abc")
            .body(Body::empty())
            .unwrap();
        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.headers()[header::CONTENT_TYPE], "application/json");
        assert_eq!(body_text(response).await, r#"{"id":1}"#);
    }

    #[tokio::test]
    async fn error_status_and_body_pass_through() {
        let dir = dist();
        let app = router(Arc::new(ServerState::new(&backend().await)), dir.path());

        let request = Request::builder()
            .method("POST")
            .uri("/api/auth/login")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from("Invalid credentials"))
            .unwrap();
        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_text(response).await, "Invalid credentials");
    }

    #[tokio::test]
    async fn unreachable_backend_is_bad_gateway() {
        let closed = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let backend = format!("http://{}", closed.local_addr().unwrap());
        drop(closed);

        let dir = dist();
        let app = router(Arc::new(ServerState::new(&backend)), dir.path());
        let response = app.oneshot(get_request("/api/rides")).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    }
}
