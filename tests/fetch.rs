// tests/fetch.rs
//
// URL normalization + link localization, and the fetch stage with a
// fixture renderer standing in for Chromium.

use std::cell::RefCell;

use async_trait::async_trait;
use url::Url;

use rtings_extract::core::RawDocument;
use rtings_extract::fetch::{self, localize_links, normalize_url, FetchError, Renderer};

#[test]
fn disabled_param_is_replaced() {
    let u = normalize_url("https://x/y?disabled=tests:1:,2:3:").unwrap();
    assert_eq!(u.as_str(), "https://x/y?disabled=tests:0:,0:1:");
}

#[test]
fn url_without_disabled_is_untouched() {
    let u = normalize_url("https://www.rtings.com/headphones/reviews/sony/wh-1000xm5?uxtv=1").unwrap();
    assert_eq!(u.as_str(), "https://www.rtings.com/headphones/reviews/sony/wh-1000xm5?uxtv=1");
}

#[test]
fn garbage_url_is_fetch_error() {
    assert!(matches!(normalize_url("not a url"), Err(FetchError::InvalidUrl(_))));
}

#[test]
fn absolute_src_becomes_local() {
    let html = r#"<img src="https://cdn.example.com/img/a.png" alt="a">"#;
    assert_eq!(localize_links(html), r#"<img src="img/a.png" alt="a">"#);
}

#[test]
fn relative_and_non_http_left_alone() {
    let html = concat!(
        r#"<img src="img/b.png">"#,
        r#"<script src="//cdn.example.com/x.js"></script>"#,
        r#"<img src="data:image/png;base64,AAAA">"#,
        r#"<a href="https://example.com/page">link</a>"#,
    );
    assert_eq!(localize_links(html), html);
}

#[test]
fn covers_resource_elements_and_quotes() {
    let html = concat!(
        r#"<link rel="stylesheet" href="https://s.example.com/css/site.css?v=9">"#,
        r#"<SCRIPT SRC='http://s.example.com/js/app.js'></SCRIPT>"#,
        r#"<object data="https://s.example.com/media/chart.svg"></object>"#,
        r#"<video><source src="https://v.example.com/v/clip.mp4"></video>"#,
    );
    let out = localize_links(html);
    assert!(out.contains(r#"href="css/site.css""#));
    assert!(out.contains("SRC='js/app.js'"));
    assert!(out.contains(r#"data="media/chart.svg""#));
    assert!(out.contains(r#"src="v/clip.mp4""#));
}

#[test]
fn inline_style_urls() {
    let html = r#"<div class="hero" style="background: url('https://img.example.com/bg/hero.jpg') no-repeat"></div>"#;
    assert_eq!(
        localize_links(html),
        r#"<div class="hero" style="background: url('bg/hero.jpg') no-repeat"></div>"#
    );
}

#[test]
fn entity_quoted_inline_style_url() {
    // Chromium's serializer escapes the quotes inside style values.
    let html = r#"<div style="background-image: url(&quot;https://img.example.com/bg/hero.jpg&quot;);"></div>"#;
    let out = localize_links(html);
    assert!(!out.contains("https://img.example.com"), "{out}");
    assert_eq!(out, r#"<div style="background-image: url(&quot;bg/hero.jpg&quot;);"></div>"#);
}

#[test]
fn gt_inside_quoted_attribute_does_not_end_tag() {
    let html = r#"<img alt="a > b" src="https://cdn.example.com/img/a.png">"#;
    assert_eq!(localize_links(html), r#"<img alt="a > b" src="img/a.png">"#);
}

#[test]
fn tempfile_goes_to_requested_dir() {
    let mut dir = std::env::temp_dir();
    dir.push("rtings_fetch_tempdir");
    let _ = std::fs::remove_dir_all(&dir);

    let fixture = Fixture { html: "<p>x</p>", seen: RefCell::new(None) };
    let tmp = fetch::fetch_to_tempfile(&fixture, "https://x/y", Some(&dir)).unwrap();
    assert!(tmp.path().starts_with(&dir));
    drop(tmp);
    assert_eq!(std::fs::read_dir(&dir).unwrap().count(), 0);
}

#[test]
fn data_dash_attributes_are_not_touched() {
    let html = r#"<img data-src="https://cdn.example.com/lazy.png" src="img/ph.png">"#;
    assert_eq!(localize_links(html), html);
}

/// Returns canned markup and remembers which URL it was asked for.
struct Fixture {
    html: &'static str,
    seen: RefCell<Option<String>>,
}

#[async_trait(?Send)]
impl Renderer for Fixture {
    async fn render(&self, url: &Url) -> Result<RawDocument, FetchError> {
        *self.seen.borrow_mut() = Some(url.to_string());
        Ok(RawDocument::from(self.html))
    }
}

#[test]
fn fetch_stage_normalizes_then_localizes() {
    let fixture = Fixture {
        html: r#"<img src="https://cdn.example.com/i/p.png"><table></table>"#,
        seen: RefCell::new(None),
    };
    let rt = tokio::runtime::Builder::new_current_thread().enable_all().build().unwrap();
    let doc = rt
        .block_on(fetch::fetch_document(&fixture, "https://x/y?disabled=tests:1:"))
        .unwrap();

    assert_eq!(fixture.seen.borrow().as_deref(), Some("https://x/y?disabled=tests:0:,0:1:"));
    assert_eq!(doc.as_str(), r#"<img src="i/p.png"><table></table>"#);
}

#[test]
fn tempfile_is_removed_on_drop() {
    let fixture = Fixture { html: "<p>hi</p>", seen: RefCell::new(None) };
    let tmp = fetch::fetch_to_tempfile(&fixture, "https://x/y", None).unwrap();
    let path = tmp.path().to_path_buf();
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "<p>hi</p>");
    drop(tmp);
    assert!(!path.exists());
}
