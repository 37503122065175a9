use url::Url;

use crate::extract::{ExtractOptions, TagKind, extract_links};
use crate::error::HarvestError;

fn base() -> Url {
    Url::parse("http://example.com/gallery").unwrap()
}

#[test]
fn test_anchor_target_preferred_over_nested_thumbnail() {
    let html = r#"
        <html><body>
            <a href="/full/photo.png"><img src="/thumbs/photo-small.png"></a>
        </body></html>
    "#;
    let links = extract_links(html, &base(), &ExtractOptions::default());
    assert_eq!(links[0], "http://example.com/full/photo.png");
}

#[test]
fn test_anchor_without_nested_image_ignored() {
    let html = r#"<a href="/full/photo.png">bare text link</a>"#;
    let options = ExtractOptions {
        tags: vec![TagKind::Anchor],
        ..ExtractOptions::default()
    };
    let links = extract_links(html, &base(), &options);
    assert!(links.is_empty());
}

#[test]
fn test_anchor_to_non_image_ignored() {
    let html = r#"<a href="/page.html"><img src="/thumbs/a.png"></a>"#;
    let options = ExtractOptions {
        tags: vec![TagKind::Anchor],
        ..ExtractOptions::default()
    };
    let links = extract_links(html, &base(), &options);
    assert!(links.is_empty());
}

#[test]
fn test_img_attribute_priority() {
    // data-srcset outranks srcset outranks src.
    let html = r#"
        <img data-srcset="/a1.jpg 100w, /a2.jpg 400w" srcset="/b.jpg 800w" src="/c.jpg">
        <img srcset="/d1.jpg 1x, /d2.jpg 2x" src="/e.jpg">
        <img src="/f.jpg">
    "#;
    let options = ExtractOptions {
        tags: vec![TagKind::Img],
        ..ExtractOptions::default()
    };
    let links = extract_links(html, &base(), &options);
    assert_eq!(
        links,
        vec![
            "http://example.com/a2.jpg",
            "http://example.com/d2.jpg",
            "http://example.com/f.jpg",
        ]
    );
}

#[test]
fn test_malformed_srcset_falls_through_to_src() {
    let html = r#"<img srcset="/a.jpg broken" src="/fallback.jpg">"#;
    let options = ExtractOptions {
        tags: vec![TagKind::Img],
        ..ExtractOptions::default()
    };
    let links = extract_links(html, &base(), &options);
    assert_eq!(links, vec!["http://example.com/fallback.jpg"]);
}

#[test]
fn test_duplicate_links_collapse_preserving_order() {
    let html = r#"
        <img src="http://x/a.png">
        <img src="http://x/b.png">
        <img src="http://x/a.png">
    "#;
    let links = extract_links(html, &base(), &ExtractOptions::default());
    assert_eq!(links, vec!["http://x/a.png", "http://x/b.png"]);
}

#[test]
fn test_data_uri_filtered_out() {
    let html = r#"
        <img src="data:image/png;base64,iVBORw0KGgo=">
        <img src="http://example.com/real.png">
    "#;
    let links = extract_links(html, &base(), &ExtractOptions::default());
    assert_eq!(links, vec!["http://example.com/real.png"]);
}

#[test]
fn test_relative_links_resolve_against_base() {
    let html = r#"<img src="images/pic.gif">"#;
    let links = extract_links(html, &base(), &ExtractOptions::default());
    assert_eq!(links, vec!["http://example.com/images/pic.gif"]);
}

#[test]
fn test_class_filter_narrows_search() {
    let html = r#"
        <div class="sidebar"><img src="/skip.png"></div>
        <div class="content"><img src="/keep.png"></div>
    "#;
    let options = ExtractOptions {
        class: Some("content".to_string()),
        ..ExtractOptions::default()
    };
    let links = extract_links(html, &base(), &options);
    assert_eq!(links, vec!["http://example.com/keep.png"]);
}

#[test]
fn test_id_filter_applies_within_class_match() {
    let html = r#"
        <div class="content">
            <div id="main"><img src="/inner.png"></div>
            <img src="/outer.png">
        </div>
    "#;
    let options = ExtractOptions {
        class: Some("content".to_string()),
        id: Some("main".to_string()),
        ..ExtractOptions::default()
    };
    let links = extract_links(html, &base(), &options);
    assert_eq!(links, vec!["http://example.com/inner.png"]);
}

#[test]
fn test_missing_container_falls_back_to_whole_document() {
    let html = r#"<img src="/still-found.png">"#;
    let options = ExtractOptions {
        class: Some("no-such-class".to_string()),
        id: Some("no-such-id".to_string()),
        ..ExtractOptions::default()
    };
    let links = extract_links(html, &base(), &options);
    assert_eq!(links, vec!["http://example.com/still-found.png"]);
}

#[test]
fn test_malformed_markup_tolerated() {
    let html = r#"<div><img src="/ok.png"<p>unclosed"#;
    let links = extract_links(html, &base(), &ExtractOptions::default());
    assert_eq!(links, vec!["http://example.com/ok.png"]);
}

#[test]
fn test_tag_kind_parse_list() {
    let kinds = TagKind::parse_list(&["a", "img"]).unwrap();
    assert_eq!(kinds, vec![TagKind::Anchor, TagKind::Img]);

    let kinds = TagKind::parse_list::<&str>(&[]).unwrap();
    assert_eq!(kinds, vec![TagKind::Anchor, TagKind::Img]);

    assert!(matches!(
        TagKind::parse_list(&["video"]),
        Err(HarvestError::UnknownTag(_))
    ));
}
