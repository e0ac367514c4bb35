use axum::extract::{Query, State};
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use futures::future::join_all;
use serde::Deserialize;
use tracing::warn;

use crate::application::errors::AppError;
use crate::application::routes::render_html;
use crate::application::state::AppState;
use crate::domain::prompts::{DEFAULT_PROMPT, download_filename, prompt_variants};
use crate::presentation::web::templates::PreviewTemplate;
use crate::presentation::web::views::ImageTileView;

#[derive(Debug, Default, Deserialize)]
pub(crate) struct PromptQuery {
    prompt: Option<String>,
}

impl PromptQuery {
    /// The submitted prompt, with whitespace-only values treated as absent.
    fn prompt(&self) -> Option<&str> {
        self.prompt
            .as_deref()
            .map(str::trim)
            .filter(|prompt| !prompt.is_empty())
    }
}

/// `GET /` — send browsers to the preview page.
///
/// A plain 302 with no query string carried over. axum's `Redirect` helpers
/// emit 303/307/308, so the response is assembled by hand.
pub(crate) async fn root_redirect() -> Response {
    (StatusCode::FOUND, [(header::LOCATION, "/image-preview")]).into_response()
}

/// `GET /image` — generate a single image and return it as an attachment.
#[tracing::instrument(skip(state))]
pub(crate) async fn image_download(
    State(state): State<AppState>,
    Query(query): Query<PromptQuery>,
) -> Result<Response, AppError> {
    let prompt = query.prompt().unwrap_or(DEFAULT_PROMPT);

    let generated = state.generator.generate(prompt).await?;
    let bytes = BASE64.decode(generated.image_b64.as_bytes())?;

    let disposition = format!("attachment; filename=\"{}\"", download_filename(prompt));

    Ok((
        [
            (header::CONTENT_TYPE, "image/png".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        bytes,
    )
        .into_response())
}

/// `GET /image-preview` — render the page with three styled variants of the
/// prompt, or an empty shell when no prompt was submitted.
#[tracing::instrument(skip(state))]
pub(crate) async fn image_preview(
    State(state): State<AppState>,
    Query(query): Query<PromptQuery>,
) -> Result<Response, StatusCode> {
    let prompt = query.prompt().unwrap_or_default();

    let tiles = if prompt.is_empty() {
        Vec::new()
    } else {
        generate_tiles(&state, prompt).await
    };

    let template = PreviewTemplate {
        prompt: prompt.to_string(),
        tiles,
    };

    render_html(template).map(IntoResponse::into_response)
}

/// Fire one generation call per style variant, then join all of them, so the
/// page waits for the slowest variant rather than the sum of all three.
/// A failed variant becomes an error tile; the others are unaffected.
async fn generate_tiles(state: &AppState, prompt: &str) -> Vec<ImageTileView> {
    let variants = prompt_variants(prompt);

    let futures: Vec<_> = variants
        .iter()
        .map(|variant| state.generator.generate(variant))
        .collect();

    let results = join_all(futures).await;

    results
        .into_iter()
        .zip(&variants)
        .enumerate()
        .map(|(index, (result, variant))| {
            if let Err(err) = &result {
                warn!(variant = %variant, error = %err, "image generation failed for variant");
            }
            ImageTileView::from_result(index + 1, result)
        })
        .collect()
}
