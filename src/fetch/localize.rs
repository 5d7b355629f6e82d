// src/fetch/localize.rs
//
// Point absolute resource URLs in captured markup at local relative paths,
// the way "Save page as… complete" does. Textual, best-effort: nothing is
// downloaded or checked.

use std::sync::OnceLock;

use regex::{Captures, Regex};
use url::Url;

const INDEX_FILE: &str = "index.html";

/// Any opening tag. Quoted attribute values may contain `>`.
fn tag_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r#"<[a-zA-Z](?:[^>"']|"[^"]*"|'[^']*')*>"#).expect("tag regex is valid")
    })
}

/// Elements whose link attributes point at resources.
fn resource_tag_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)^<(?:link|script|img|iframe|source|video|audio|embed|object)\b")
            .expect("resource tag regex is valid")
    })
}

fn attr_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r#"(?i)(\s)(href|src|data)(\s*=\s*)(?:"(https?://[^"]*)"|'(https?://[^']*)')"#)
            .expect("attr regex is valid")
    })
}

fn style_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r#"(?i)(\sstyle\s*=\s*)(?:"([^"]*)"|'([^']*)')"#).expect("style regex is valid")
    })
}

/// `url(...)` inside a style value. Serialized DOM escapes the inner
/// quotes, so `&quot;` / `&#39;` count as quotes too.
fn css_url_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(
            r#"(?i)url\(\s*(&quot;|&#39;|["']?)(https?://(?:[^"')\s&]|&amp;)+)(&quot;|&#39;|["']?)\s*\)"#,
        )
        .expect("css url regex is valid")
    })
}

/// `https://cdn.example.com/img/a.png?v=2` → `img/a.png`.
/// None for anything that isn't an absolute http(s) URL.
pub fn local_path(raw: &str) -> Option<String> {
    let url = Url::parse(raw).ok()?;
    if !matches!(url.scheme(), "http" | "https") {
        return None;
    }
    let path = url.path().trim_start_matches('/');
    Some(if path.is_empty() { s!(INDEX_FILE) } else { s!(path) })
}

/// Rewritten markup plus how many references changed.
pub fn localize_links_counted(html: &str) -> (String, usize) {
    let mut rewritten = 0usize;

    let out = tag_re().replace_all(html, |tag: &Captures| {
        let mut t = s!(&tag[0]);

        if resource_tag_re().is_match(&t) {
            t = attr_re()
                .replace_all(&t, |c: &Captures| {
                    let (value, quote) = match (c.get(4), c.get(5)) {
                        (Some(m), _) => (m.as_str(), '"'),
                        (None, Some(m)) => (m.as_str(), '\''),
                        (None, None) => return s!(&c[0]),
                    };
                    match local_path(value) {
                        Some(local) => {
                            rewritten += 1;
                            format!("{}{}{}{quote}{local}{quote}", &c[1], &c[2], &c[3])
                        }
                        None => s!(&c[0]),
                    }
                })
                .into_owned();
        }

        style_re()
            .replace_all(&t, |c: &Captures| {
                let (body, quote) = match (c.get(2), c.get(3)) {
                    (Some(m), _) => (m.as_str(), '"'),
                    (None, Some(m)) => (m.as_str(), '\''),
                    (None, None) => return s!(&c[0]),
                };
                let body = css_url_re().replace_all(body, |u: &Captures| match local_path(&u[2]) {
                    Some(local) => {
                        rewritten += 1;
                        format!("url({}{local}{})", &u[1], &u[3])
                    }
                    None => s!(&u[0]),
                });
                format!("{}{quote}{body}{quote}", &c[1])
            })
            .into_owned()
    });

    (out.into_owned(), rewritten)
}

pub fn localize_links(html: &str) -> String {
    localize_links_counted(html).0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn host_root_maps_to_index() {
        assert_eq!(local_path("https://example.com/").as_deref(), Some("index.html"));
        assert_eq!(local_path("https://example.com").as_deref(), Some("index.html"));
    }

    #[test]
    fn query_and_fragment_are_dropped() {
        assert_eq!(
            local_path("http://cdn.example.com/js/app.js?v=3#x").as_deref(),
            Some("js/app.js")
        );
    }

    #[test]
    fn entity_quoted_style_url() {
        let (out, n) = localize_links_counted(
            r#"<span style="background: url(&quot;https://a.example.com/x/y.png?w=1&amp;h=2&quot;)"></span>"#,
        );
        assert_eq!(n, 1);
        assert_eq!(out, r#"<span style="background: url(&quot;x/y.png&quot;)"></span>"#);
    }

    #[test]
    fn non_http_is_not_local() {
        assert_eq!(local_path("data:image/png;base64,AAAA"), None);
        assert_eq!(local_path("img/a.png"), None);
    }
}
