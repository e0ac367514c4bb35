use crate::domain::generator::{GenerateError, GeneratedImage};

/// One slot on the preview page: a generated image, or its failure notice.
pub struct ImageTileView {
    /// 1-based display position.
    pub index: usize,
    /// Base64 payload for the data URL; `None` renders the failure notice.
    pub image_b64: Option<String>,
    /// Suggested name for the per-tile download link.
    pub filename: String,
}

impl ImageTileView {
    pub fn from_result(index: usize, result: Result<GeneratedImage, GenerateError>) -> Self {
        Self {
            index,
            image_b64: result.ok().map(|generated| generated.image_b64),
            filename: format!("image{index}.png"),
        }
    }
}
