/// Prompt used by the download route when the caller does not supply one.
pub const DEFAULT_PROMPT: &str = "a sunset over the ocean in a futuristic city";

/// Style suffixes appended to the base prompt, in display order.
pub const STYLE_SUFFIXES: [&str; 3] = [
    "in digital art style",
    "in cinematic lighting",
    "in abstract futuristic style",
];

/// Build the styled prompt variants for a base prompt, one per suffix,
/// preserving `STYLE_SUFFIXES` order.
pub fn prompt_variants(prompt: &str) -> Vec<String> {
    STYLE_SUFFIXES
        .iter()
        .map(|suffix| format!("{prompt} {suffix}"))
        .collect()
}

const MAX_FILENAME_STEM: usize = 48;

/// Derive a download filename from a prompt.
///
/// Lowercases the prompt, collapses runs of non-alphanumeric characters to a
/// single hyphen, and caps the stem length so the header stays reasonable.
/// Falls back to `image.png` when nothing usable remains.
pub fn download_filename(prompt: &str) -> String {
    let mut stem = String::new();
    for c in prompt.chars() {
        if stem.len() >= MAX_FILENAME_STEM {
            break;
        }
        if c.is_ascii_alphanumeric() {
            stem.push(c.to_ascii_lowercase());
        } else if !stem.is_empty() && !stem.ends_with('-') {
            stem.push('-');
        }
    }
    let stem = stem.trim_end_matches('-');
    if stem.is_empty() {
        "image.png".to_string()
    } else {
        format!("{stem}.png")
    }
}
