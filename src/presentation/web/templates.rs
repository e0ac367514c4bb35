use askama::Template;

use super::views::ImageTileView;

#[derive(Template)]
#[template(path = "pages/preview.html")]
pub struct PreviewTemplate {
    /// The submitted prompt; pre-populates the form input for resubmission.
    pub prompt: String,
    /// Zero tiles for the empty shell, exactly three otherwise.
    pub tiles: Vec<ImageTileView>,
}

pub fn render_template<T: Template>(template: T) -> Result<String, askama::Error> {
    template.render()
}
