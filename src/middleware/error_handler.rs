use axum::{
    body::{Body, to_bytes},
    http::{Request, header},
    middleware::Next,
    response::Response,
};
use tracing::{debug, error};

/// 错误响应体最多读取的字节数
const MAX_LOGGED_BODY: usize = 4096;

/// 记录所有 5xx 响应的内容，4xx 只在 debug 级别记录状态
pub async fn log_errors(req: Request<Body>, next: Next) -> Response {
    let method = req.method().clone();
    let uri = req.uri().clone();

    let response = next.run(req).await;
    let status = response.status();

    if status.is_client_error() {
        debug!(%method, %uri, %status, "Client error");
        return response;
    }

    if !status.is_server_error() {
        return response;
    }

    let (mut parts, body) = response.into_parts();
    let bytes = match to_bytes(body, MAX_LOGGED_BODY).await {
        Ok(b) => b,
        Err(e) => {
            error!(%method, %uri, %status, "Failed to read error response body: {}", e);
            parts.headers.remove(header::CONTENT_LENGTH);
            return Response::from_parts(parts, Body::empty());
        }
    };

    error!(
        %method, %uri, %status,
        body = %String::from_utf8_lossy(&bytes),
        "Server error occurred"
    );

    // 重置body以便重新构建响应
    parts.headers.remove(header::CONTENT_LENGTH);
    Response::from_parts(parts, Body::from(bytes))
}
