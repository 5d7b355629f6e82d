// src/fetch/mod.rs
//
// Fetch stage: URL → normalized URL → rendered DOM → localized markup.
// Async on the inside; `fetch_to_tempfile` is the blocking entry point the
// pipeline uses.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use async_trait::async_trait;
use chromiumoxide::error::CdpError;
use tempfile::NamedTempFile;
use thiserror::Error;
use url::Url;

use crate::config::consts::{TEMP_PREFIX, TEMP_SUFFIX};
use crate::core::RawDocument;

pub mod browser;
pub mod localize;
pub mod normalize;

pub use browser::ChromeRenderer;
pub use localize::{local_path, localize_links};
pub use normalize::normalize_url;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error("unsupported URL scheme '{0}' (expected http or https)")]
    UnsupportedScheme(String),
    #[error("could not launch browser: {0}")]
    Launch(String),
    #[error("browser error: {0}")]
    Browser(#[from] CdpError),
    #[error("temporary file: {0}")]
    Io(#[from] io::Error),
}

/// Turns a URL into the page's serialized DOM. Tests swap in a fixture.
#[async_trait(?Send)]
pub trait Renderer {
    async fn render(&self, url: &Url) -> Result<RawDocument, FetchError>;
}

pub async fn fetch_document(renderer: &dyn Renderer, url: &str) -> Result<RawDocument, FetchError> {
    let url = normalize_url(url)?;
    logf!("Fetch: normalized → {}", url);

    let rendered = renderer.render(&url).await?;
    let (html, rewritten) = localize::localize_links_counted(rendered.as_str());
    logd!("Fetch: {} bytes, {} links localized", html.len(), rewritten);

    Ok(RawDocument::from(html))
}

/// `dir` None means the system temp dir.
pub fn write_tempfile(doc: &RawDocument, dir: Option<&Path>) -> Result<NamedTempFile, FetchError> {
    let mut builder = tempfile::Builder::new();
    builder.prefix(TEMP_PREFIX).suffix(TEMP_SUFFIX);
    let mut tmp = match dir {
        Some(d) => {
            fs::create_dir_all(d)?;
            builder.tempfile_in(d)?
        }
        None => builder.tempfile()?,
    };
    tmp.write_all(doc.as_str().as_bytes())?;
    tmp.flush()?;
    Ok(tmp)
}

/// Blocking: render on a current-thread runtime and park the result in a
/// temp file. The file is removed when the handle drops.
pub fn fetch_to_tempfile(
    renderer: &dyn Renderer,
    url: &str,
    dir: Option<&Path>,
) -> Result<NamedTempFile, FetchError> {
    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    let doc = rt.block_on(fetch_document(renderer, url))?;
    write_tempfile(&doc, dir)
}
