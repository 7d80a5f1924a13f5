use axum::{
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::Response,
};

use crate::config::Config;

/// Bearer-key gate for the /admin sub-router. The key comes from
/// configuration, never from the client-visible app.
pub async fn admin_auth(
    State(config): State<Config>,
    req: Request,
    next: Next,
) -> Result<Response, StatusCode> {
    let auth_header = req
        .headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok());

    match auth_header {
        Some(auth)
            if auth == format!("Bearer {}", config.admin_api_key)
                || auth == config.admin_api_key =>
        {
            Ok(next.run(req).await)
        }
        _ => Err(StatusCode::UNAUTHORIZED),
    }
}
