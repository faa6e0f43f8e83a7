use serde::{Deserialize, Serialize};

pub const MAX_POSTER_STEM_CHARS: usize = 100;
pub const DEFAULT_POSTER_EXTENSION: &str = ".jpg";
const MISSING_POSTER_URL: &str = "N/A";

/// Returns `true` when the metadata carries no usable poster URL.
pub fn is_missing_poster_url(url: &str) -> bool {
    let url = url.trim();
    url.is_empty() || url == MISSING_POSTER_URL
}

/// Cache file name for a poster: the sanitized title (at most 100 characters)
/// followed by the extension of the URL path, `.jpg` when the path has none.
pub fn poster_file_name(url: &str, title: &str) -> String {
    format!("{}{}", sanitize_title(title), url_extension(url))
}

pub fn sanitize_title(title: &str) -> String {
    title
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.' | '(' | ')' | ' ') {
                c
            } else {
                '_'
            }
        })
        .take(MAX_POSTER_STEM_CHARS)
        .collect()
}

fn url_extension(url: &str) -> String {
    let path = url.split('?').next().unwrap_or_default();
    let base_name = path.rsplit('/').next().unwrap_or_default();
    let stem_start = base_name.len() - base_name.trim_start_matches('.').len();
    match base_name[stem_start..].rfind('.') {
        Some(index) if index > 0 => base_name[stem_start + index..].to_string(),
        _ => DEFAULT_POSTER_EXTENSION.to_string(),
    }
}

/// RGBA pixels of a poster scaled down for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecodedPoster {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_urls_are_detected() {
        assert!(is_missing_poster_url(""));
        assert!(is_missing_poster_url("N/A"));
        assert!(!is_missing_poster_url("https://m.media-amazon.com/images/x.jpg"));
    }

    #[test]
    fn disallowed_characters_become_underscores() {
        assert_eq!(
            sanitize_title("Alien: Résurrection (1997)"),
            "Alien_ R_surrection (1997)"
        );
        assert_eq!(sanitize_title("Mr. & Mrs. Smith"), "Mr. _ Mrs. Smith");
    }

    #[test]
    fn long_titles_truncate_to_one_hundred_before_extension() {
        let title = "x".repeat(250);
        let name = poster_file_name("https://img.example/poster.png", &title);
        assert_eq!(name, format!("{}.png", "x".repeat(100)));
    }

    #[test]
    fn extension_ignores_query_and_defaults_to_jpg() {
        assert_eq!(
            poster_file_name("https://img.example/a/b.jpeg?w=300&x=y.gif", "Up"),
            "Up.jpeg"
        );
        assert_eq!(poster_file_name("https://img.example/poster", "Up"), "Up.jpg");
        assert_eq!(poster_file_name("https://img.example/.hidden", "Up"), "Up.jpg");
    }
}
