pub mod srcset;

#[cfg(test)]
mod tests;

use std::collections::HashSet;
use std::str::FromStr;

use scraper::{ElementRef, Html, Selector};
use url::Url;

use crate::error::HarvestError;
use crate::filter::LinkFilter;

/// Tag types the extractor knows how to scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagKind {
    /// `<a>` elements that wrap an image and link to a full-resolution file.
    Anchor,
    /// `<img>` elements themselves.
    Img,
}

impl FromStr for TagKind {
    type Err = HarvestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "a" => Ok(TagKind::Anchor),
            "img" => Ok(TagKind::Img),
            other => Err(HarvestError::UnknownTag(other.to_string())),
        }
    }
}

impl TagKind {
    /// Parses a list of tag names. An empty input falls back to the default
    /// of scanning both anchors and images.
    pub fn parse_list<S: AsRef<str>>(names: &[S]) -> Result<Vec<TagKind>, HarvestError> {
        let mut kinds = Vec::new();
        for name in names {
            let kind = name.as_ref().trim().parse()?;
            if !kinds.contains(&kind) {
                kinds.push(kind);
            }
        }
        if kinds.is_empty() {
            kinds = vec![TagKind::Anchor, TagKind::Img];
        }
        Ok(kinds)
    }
}

/// Structural filters applied while walking the page.
#[derive(Debug, Clone)]
pub struct ExtractOptions {
    /// CSS class of the element to narrow the search to.
    pub class: Option<String>,

    /// HTML id of the element to narrow the search to, applied after the
    /// class narrowing.
    pub id: Option<String>,

    /// Which tag types to scan.
    pub tags: Vec<TagKind>,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            class: None,
            id: None,
            tags: vec![TagKind::Anchor, TagKind::Img],
        }
    }
}

/// Extracts image links from an HTML document.
///
/// Candidates come from anchors that wrap an image and point at an image file
/// themselves, and from `img` elements via `data-srcset` / `srcset` / `src`
/// in that order of priority. Every candidate is resolved against `base`
/// before being admitted. The result is ordered by first appearance in the
/// document with duplicates dropped, so callers can pair filenames by
/// position reproducibly.
pub fn extract_links(html: &str, base: &Url, options: &ExtractOptions) -> Vec<String> {
    let doc = Html::parse_document(html);
    let root = narrow_root(&doc, options);

    let filter = LinkFilter::default();
    let mut seen = HashSet::new();
    let mut links = Vec::new();

    let img_selector = Selector::parse("img").unwrap();

    // Anchors wrapping an image sometimes link the full-resolution file that
    // the nested thumbnail only previews; the anchor target wins there.
    if options.tags.contains(&TagKind::Anchor) {
        let anchor_selector = Selector::parse("a[href]").unwrap();
        for anchor in root.select(&anchor_selector) {
            let Some(href) = anchor.value().attr("href") else {
                continue;
            };
            if anchor.select(&img_selector).next().is_some() && filter.is_image_target(href) {
                admit(base, href, &filter, &mut seen, &mut links);
            }
        }
    }

    if options.tags.contains(&TagKind::Img) {
        for img in root.select(&img_selector) {
            let element = img.value();
            let link = element
                .attr("data-srcset")
                .and_then(srcset::best_candidate)
                .or_else(|| element.attr("srcset").and_then(srcset::best_candidate))
                .or_else(|| {
                    element
                        .attr("src")
                        .filter(|src| !src.is_empty())
                        .map(str::to_string)
                });
            if let Some(link) = link {
                admit(base, &link, &filter, &mut seen, &mut links);
            }
        }
    }

    ::log::debug!("extraction complete, found {} image links", links.len());
    links
}

/// Narrows the search root by class, then by id. Both filters are advisory:
/// a selector that matches nothing leaves the current root in place.
fn narrow_root<'a>(doc: &'a Html, options: &ExtractOptions) -> ElementRef<'a> {
    let mut root = doc.root_element();

    if let Some(class) = &options.class {
        match Selector::parse(&format!(".{class}")) {
            Ok(selector) => match root.select(&selector).next() {
                Some(element) => root = element,
                None => ::log::debug!("class {class:?} did not match any elements, ignoring"),
            },
            Err(_) => ::log::warn!("class {class:?} is not a valid selector, ignoring"),
        }
    }

    if let Some(id) = &options.id {
        match Selector::parse(&format!("#{id}")) {
            Ok(selector) => match root.select(&selector).next() {
                Some(element) => root = element,
                None => ::log::debug!("id {id:?} did not match any elements, ignoring"),
            },
            Err(_) => ::log::warn!("id {id:?} is not a valid selector, ignoring"),
        }
    }

    root
}

/// Resolves a candidate against the page URL and appends it if it survives
/// validation and has not been seen before.
fn admit(
    base: &Url,
    candidate: &str,
    filter: &LinkFilter,
    seen: &mut HashSet<String>,
    links: &mut Vec<String>,
) {
    match base.join(candidate) {
        Ok(resolved) => {
            let resolved = resolved.to_string();
            if !filter.is_fetchable(&resolved) {
                ::log::debug!("discarding non-http link: {resolved}");
                return;
            }
            if seen.insert(resolved.clone()) {
                links.push(resolved);
            }
        }
        Err(err) => ::log::warn!("cannot resolve link {candidate:?}: {err}"),
    }
}
