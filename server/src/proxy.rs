use std::sync::Arc;

use anyhow::Context;
use axum::{
    body::Body,
    extract::State,
    http::{header, Request, StatusCode},
    response::{IntoResponse, Response},
};

use crate::server_state::ServerState;

const MAX_BODY_BYTES: usize = 2 * 1024 * 1024;

/// Forwards `/api/*` to the backend and hands its answer back untouched.
pub async fn forward(State(state): State<Arc<ServerState>>, req: Request<Body>) -> Response {
    match try_forward(&state, req).await {
        Ok(response) => response,
        Err(err) => {
            tracing::error!("Proxy to {} failed: {err:?}", state.backend);
            (StatusCode::BAD_GATEWAY, "Backend unreachable").into_response()
        }
    }
}

async fn try_forward(state: &ServerState, req: Request<Body>) -> anyhow::Result<Response> {
    let (parts, body) = req.into_parts();
    let path = parts.uri.path_and_query().map_or("/", |p| p.as_str());
    let url = format!("{}{path}", state.backend);

    let body = axum::body::to_bytes(body, MAX_BODY_BYTES)
        .await
        .context("reading request body")?;

    let mut upstream = state.client.request(parts.method.clone(), &url);
    for name in [header::AUTHORIZATION, header::CONTENT_TYPE, header::ACCEPT] {
        if let Some(value) = parts.headers.get(&name) {
            upstream = upstream.header(name, value.clone());
        }
    }

    let answer = upstream.body(body).send().await.with_context(|| format!("{} {url}", parts.method))?;
    let status = answer.status();
    let content_type = answer.headers().get(header::CONTENT_TYPE).cloned();
    let bytes = answer.bytes().await.context("reading backend body")?;

    tracing::debug!("{} {path} -> {status}", parts.method);

    let mut response = (status, bytes).into_response();
    match content_type {
        Some(value) => response.headers_mut().insert(header::CONTENT_TYPE, value),
        None => response.headers_mut().remove(header::CONTENT_TYPE),
    };
    Ok(response)
}
