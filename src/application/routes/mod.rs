pub mod images;

use askama::Template;
use axum::http::{HeaderValue, Request, StatusCode};
use axum::response::{Html, IntoResponse};
use axum::routing::get;
use tower::ServiceBuilder;
use tower_http::compression::CompressionLayer;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::{DefaultOnResponse, MakeSpan, TraceLayer};
use tracing::{Level, Span, error};

use crate::application::state::AppState;
use crate::presentation::web::templates::render_template;

/// 64 KB request body limit; every route is a GET with query parameters.
const BODY_LIMIT_BYTES: usize = 64 * 1024;

pub fn app_router(state: AppState) -> axum::Router {
    axum::Router::new()
        .route("/", get(images::root_redirect))
        .route("/image", get(images::image_download))
        .route("/image-preview", get(images::image_preview))
        .route("/health", get(health))
        .layer(
            ServiceBuilder::new()
                .layer(
                    TraceLayer::new_for_http()
                        .make_span_with(ImagistMakeSpan)
                        .on_response(DefaultOnResponse::new().level(Level::INFO)),
                )
                .layer(RequestBodyLimitLayer::new(BODY_LIMIT_BYTES))
                .layer(SetResponseHeaderLayer::overriding(
                    axum::http::header::X_CONTENT_TYPE_OPTIONS,
                    HeaderValue::from_static("nosniff"),
                ))
                .layer(SetResponseHeaderLayer::overriding(
                    axum::http::header::X_FRAME_OPTIONS,
                    HeaderValue::from_static("DENY"),
                ))
                .layer(SetResponseHeaderLayer::overriding(
                    axum::http::header::REFERRER_POLICY,
                    HeaderValue::from_static("strict-origin-when-cross-origin"),
                ))
                .layer(SetResponseHeaderLayer::overriding(
                    axum::http::header::CONTENT_SECURITY_POLICY,
                    HeaderValue::from_static(
                        "default-src 'self'; \
                         style-src 'unsafe-inline'; \
                         img-src data:; \
                         frame-ancestors 'none'",
                    ),
                ))
                .layer(CompressionLayer::new().gzip(true)),
        )
        .with_state(state)
}

#[derive(Clone)]
struct ImagistMakeSpan;

impl<B> MakeSpan<B> for ImagistMakeSpan {
    fn make_span(&mut self, request: &Request<B>) -> Span {
        tracing::info_span!(
            "request",
            method = %request.method(),
            uri = %request.uri(),
            version = ?request.version(),
        )
    }
}

pub(crate) fn render_html<T: Template>(template: T) -> Result<Html<String>, StatusCode> {
    render_template(template).map(Html).map_err(|err| {
        error!(error = %err, "failed to render template");
        StatusCode::INTERNAL_SERVER_ERROR
    })
}

async fn health() -> impl IntoResponse {
    ([("content-type", "application/json")], r#"{"status":"ok"}"#)
}
