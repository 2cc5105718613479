pub mod categories;
pub mod dashboard;
pub mod health;
pub mod transactions;
pub mod users;
pub mod validation;

use axum::{
    http::{header, HeaderName, HeaderValue},
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use std::any::Any;
use tower_http::{
    catch_panic::CatchPanicLayer, set_header::SetResponseHeaderLayer, trace::TraceLayer,
};

use crate::error::AppError;
use crate::AppState;

pub use categories::list_categories;
pub use dashboard::get_dashboard;
pub use health::health_check;
pub use transactions::{create_transaction, list_transactions};
pub use users::{current_user, login_user, register_user};

/// Hardening headers added to every response that does not already set them
const SECURITY_HEADERS: [(HeaderName, &str); 8] = [
    (header::X_CONTENT_TYPE_OPTIONS, "nosniff"),
    (header::X_FRAME_OPTIONS, "SAMEORIGIN"),
    (header::REFERRER_POLICY, "no-referrer"),
    (header::X_DNS_PREFETCH_CONTROL, "off"),
    (header::X_XSS_PROTECTION, "0"),
    (
        header::STRICT_TRANSPORT_SECURITY,
        "max-age=15552000; includeSubDomains",
    ),
    (
        header::CONTENT_SECURITY_POLICY,
        "default-src 'none'; frame-ancestors 'none'",
    ),
    (
        HeaderName::from_static("cross-origin-resource-policy"),
        "same-origin",
    ),
];

/// Build the application router
///
/// Everything except health, register and login requires a bearer token.
pub fn router(state: AppState) -> Router {
    let log_requests = state.config.log_requests;

    let router = Router::new()
        .route("/health", get(health_check))
        .route("/users/register", post(register_user))
        .route("/users/login", post(login_user))
        .route("/users/me", get(current_user))
        .route("/categories", get(list_categories))
        .route("/transactions", get(list_transactions).post(create_transaction))
        .route("/dashboard", get(get_dashboard))
        .with_state(state);

    let router = harden(router);

    if log_requests {
        router.layer(TraceLayer::new_for_http())
    } else {
        router
    }
}

/// Wrap a router with the last-resort panic handler and security headers
pub fn harden(router: Router) -> Router {
    let mut router = router.layer(CatchPanicLayer::custom(panic_response));

    for (name, value) in SECURITY_HEADERS {
        router = router.layer(SetResponseHeaderLayer::if_not_present(
            name,
            HeaderValue::from_static(value),
        ));
    }

    router
}

/// Log an uncaught panic and answer with the generic 500 body
fn panic_response(panic: Box<dyn Any + Send + 'static>) -> Response {
    let message = if let Some(s) = panic.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic payload".to_string()
    };

    tracing::error!("Handler panicked: {}", message);

    AppError::Internal.into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, http::Request, http::StatusCode};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    async fn explode() -> &'static str {
        panic!("boom")
    }

    #[tokio::test]
    async fn test_panicking_handler_returns_generic_error() {
        let app = harden(Router::new().route("/explode", get(explode)));

        let response = app
            .oneshot(Request::builder().uri("/explode").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            response.headers().get(header::X_CONTENT_TYPE_OPTIONS).unwrap(),
            "nosniff"
        );

        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body, serde_json::json!({ "error": "Internal server error" }));
    }

    #[tokio::test]
    async fn test_security_headers_do_not_override_handler_headers() {
        async fn framed() -> impl IntoResponse {
            ([(header::X_FRAME_OPTIONS, "DENY")], "ok")
        }
        let app = harden(Router::new().route("/framed", get(framed)));

        let response = app
            .oneshot(Request::builder().uri("/framed").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers().get(header::X_FRAME_OPTIONS).unwrap(), "DENY");
        assert_eq!(response.headers().get(header::REFERRER_POLICY).unwrap(), "no-referrer");
    }
}
