/// Picks the highest-resolution candidate out of a `srcset` attribute value.
///
/// Each comma-separated descriptor is a link followed by a size token, either
/// `<int>w` (width) or `<int>x` (pixel density). The strictly largest size
/// wins; a later candidate with an equal size does not replace the current
/// best. Any descriptor that cannot be parsed fails resolution for the whole
/// attribute, so the caller can fall back to the next-priority attribute.
pub fn best_candidate(value: &str) -> Option<String> {
    let mut best_link: Option<String> = None;
    let mut best_size: u64 = 0;

    for descriptor in value.split(',') {
        let descriptor = descriptor.trim();
        let mut parts = descriptor.split_whitespace();
        let (Some(link), Some(size_token)) = (parts.next(), parts.next()) else {
            ::log::warn!("malformed srcset descriptor: {descriptor:?}");
            return None;
        };

        let Some(size) = parse_size(size_token) else {
            ::log::warn!("failed to parse srcset size token: {size_token:?}");
            return None;
        };

        if size > best_size {
            best_size = size;
            best_link = Some(link.to_string());
        }
    }

    best_link
}

/// Numeric prefix of a `300w` / `2x` style size token.
fn parse_size(token: &str) -> Option<u64> {
    let digits = token
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(token.len());
    token[..digits].parse().ok()
}
