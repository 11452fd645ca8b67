use axum::{extract::Request, middleware::Next, response::Response};

/// Log every request on the way in and on the way out.
pub async fn log_requests(req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let path = req.uri().path().to_owned();
    tracing::info!(%method, %path, "request received");

    let response = next.run(req).await;

    tracing::info!(%method, %path, status = %response.status(), "request completed");
    response
}
