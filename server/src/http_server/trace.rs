use std::time::Duration;

use axum::extract::MatchedPath;
use tower_http::trace::{MakeSpan, OnResponse};
use tracing::{field::Empty, Level};

/// One `post_list.request` span per request. Routes are `/` or `/posts`;
/// anything the router falls through on is tagged `fallback`.
#[derive(Debug, Clone, Copy)]
pub(crate) struct RequestTracer;

impl<Body> MakeSpan<Body> for RequestTracer {
    fn make_span(&mut self, request: &http::Request<Body>) -> tracing::Span {
        let route = request
            .extensions()
            .get::<MatchedPath>()
            .map_or("fallback", MatchedPath::as_str);
        let span_name = format!("{} {route}", request.method());

        tracing::span!(
            Level::INFO,
            "post_list.request",
            otel.name = span_name,
            http.method = %request.method(),
            http.route = %route,
            url.path = %request.uri().path(),
            status = Empty,
        )
    }
}

impl<Body> OnResponse<Body> for RequestTracer {
    fn on_response(self, response: &http::Response<Body>, latency: Duration, span: &tracing::Span) {
        let status = response.status();
        span.record("status", status.as_u16());

        let latency_ms = u64::try_from(latency.as_millis()).unwrap_or(u64::MAX);
        if status.is_server_error() {
            tracing::error!(status = status.as_u16(), latency_ms, "post list request failed");
        } else {
            tracing::info!(status = status.as_u16(), latency_ms, "post list served");
        }
    }
}

#[cfg(test)]
mod test {
    use axum::http::StatusCode;
    use color_eyre::eyre::eyre;
    use posts::{PostRecord, StaticPosts};

    use crate::http_server::test_helpers::{create_test_app, get, SharedBuffer};

    fn log_to(buffer: &SharedBuffer) -> tracing::subscriber::DefaultGuard {
        let writer = buffer.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .with_max_level(tracing::Level::TRACE)
            .finish();

        tracing::subscriber::set_default(subscriber)
    }

    #[tokio::test]
    async fn served_lists_record_route_and_status() {
        let logs = SharedBuffer::default();
        let _guard = log_to(&logs);

        let app = create_test_app(StaticPosts(vec![PostRecord::new(1, "a")]));
        let response = get(app, "/posts").await;
        assert_eq!(response.status(), StatusCode::OK);

        let logs = logs.contents();
        assert!(logs.contains("post_list.request"));
        assert!(logs.contains("http.route=/posts"));
        assert!(logs.contains("http.method=GET"));
        assert!(logs.contains("post list served"));
        assert!(logs.contains("status=200"));
    }

    #[tokio::test]
    async fn failing_sources_log_an_error() {
        let logs = SharedBuffer::default();
        let _guard = log_to(&logs);

        let app = create_test_app(|| -> crate::Result<Vec<PostRecord>> { Err(eyre!("backend down")) });
        let response = get(app, "/").await;
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let logs = logs.contents();
        assert!(logs.contains("http.route=/"));
        assert!(logs.contains("ERROR"));
        assert!(logs.contains("post list request failed"));
        assert!(logs.contains("status=500"));
    }

    #[tokio::test]
    async fn unmatched_paths_are_tagged_fallback() {
        let logs = SharedBuffer::default();
        let _guard = log_to(&logs);

        let app = create_test_app(StaticPosts::default());
        let response = get(app, "/missing").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let logs = logs.contents();
        assert!(logs.contains("http.route=fallback"));
        assert!(logs.contains("url.path=/missing"));
        assert!(logs.contains("status=404"));
    }
}
