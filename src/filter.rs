use regex::Regex;

/// Decides which candidate links from a page are worth downloading.
///
/// Two rules: anchor targets must end in a known image suffix, and resolved
/// absolute links must be plain `http(s)` (drops `data:`, `mailto:` and
/// friends). The suffix match is a literal, case-sensitive tail match, not a
/// MIME lookup.
#[derive(Debug)]
pub struct LinkFilter {
    image_suffix: Regex,
}

impl Default for LinkFilter {
    fn default() -> Self {
        Self {
            image_suffix: Regex::new(r"(?:jpg|jpeg|png|gif|webp)$")
                .expect("static suffix pattern should be valid"),
        }
    }
}

impl LinkFilter {
    /// True when an anchor's `href` points at an image file.
    pub fn is_image_target(&self, href: &str) -> bool {
        self.image_suffix.is_match(href)
    }

    /// True when a resolved absolute URL is fetchable over plain HTTP(S).
    pub fn is_fetchable(&self, absolute: &str) -> bool {
        absolute.starts_with("http")
    }
}
