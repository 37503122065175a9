use url::Url;

use crate::error::HarvestError;

/// Canonicalizes a page URL so it can serve as a base for resolving relative
/// links and as the source of a fallback directory name.
///
/// Three transforms, nothing else: default the scheme to `http://` when the
/// input has none, drop the query string entirely, and trim a single trailing
/// slash. No percent-decoding, no IDN handling.
pub fn normalize(raw: &str) -> Result<String, HarvestError> {
    let raw = raw.trim();
    let with_scheme = if has_scheme(raw) {
        raw.to_string()
    } else {
        format!("http://{raw}")
    };

    let mut url =
        Url::parse(&with_scheme).map_err(|_| HarvestError::InvalidUrl(raw.to_string()))?;
    url.set_query(None);

    let mut out = url.to_string();
    if out.ends_with('/') {
        out.pop();
    }
    Ok(out)
}

/// A URL has a scheme when `://` appears before the first path slash.
/// `example.com/a://b` is scheme-less.
fn has_scheme(raw: &str) -> bool {
    match (raw.find("://"), raw.find('/')) {
        (Some(scheme), Some(slash)) => scheme < slash,
        (Some(_), None) => true,
        (None, _) => false,
    }
}

/// Final path segment of a normalized URL, used as the fallback output
/// directory name.
pub fn page_title(normalized: &str) -> &str {
    normalized.rsplit('/').next().unwrap_or_default()
}

/// Local filename for a download job: the URL basename, with characters that
/// do not belong in filenames replaced, falling back to a name derived from
/// the job's position when the basename is empty.
pub fn file_name_for(url: &str, index: usize) -> String {
    let basename = url.rsplit('/').next().unwrap_or_default();
    let cleaned: String = basename.replace(['?', '&', '=', '#', '%', ':'], "_");
    if cleaned.is_empty() {
        format!("image-{index}")
    } else {
        cleaned
    }
}
