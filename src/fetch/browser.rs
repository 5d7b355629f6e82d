// src/fetch/browser.rs
//
// Chromium via chromiumoxide. One browser per render; it is closed before
// render() returns, whether capture worked or not.

use std::time::{Duration, Instant};

use async_trait::async_trait;
use chromiumoxide::browser::{Browser, BrowserConfig};
use futures::StreamExt;
use url::Url;

use super::{FetchError, Renderer};
use crate::config::options::FetchOptions;
use crate::core::RawDocument;

pub struct ChromeRenderer {
    opts: FetchOptions,
}

impl ChromeRenderer {
    pub fn new(opts: FetchOptions) -> Self {
        Self { opts }
    }

    fn config(&self) -> Result<BrowserConfig, FetchError> {
        let mut builder = BrowserConfig::builder();
        if !self.opts.headless {
            builder = builder.with_head();
        }
        if let Some(path) = &self.opts.chrome_path {
            builder = builder.chrome_executable(path);
        }
        builder.build().map_err(FetchError::Launch)
    }

    /// Load the page, then poll the serialized DOM until it stops changing
    /// for `settle_ms`. The chart table is filled in by client-side script
    /// after load, so the first snapshot is usually incomplete.
    async fn capture(&self, browser: &Browser, url: &Url) -> Result<String, FetchError> {
        let page = browser.new_page(url.as_str()).await?;
        page.wait_for_navigation().await?;

        let settle = Duration::from_millis(self.opts.settle_ms);
        let poll = Duration::from_millis(self.opts.poll_ms.max(1));
        let deadline = Instant::now() + Duration::from_millis(self.opts.max_settle_ms);

        let mut last = page.content().await?;
        let mut stable_since = Instant::now();

        loop {
            let now = Instant::now();
            if now.duration_since(stable_since) >= settle {
                logd!("Render: settled at {} bytes", last.len());
                break;
            }
            if now >= deadline {
                logw!("Render: DOM still changing after {} ms, using last snapshot", self.opts.max_settle_ms);
                break;
            }
            tokio::time::sleep(poll).await;

            let html = page.content().await?;
            if html != last {
                last = html;
                stable_since = Instant::now();
            }
        }
        Ok(last)
    }
}

#[async_trait(?Send)]
impl Renderer for ChromeRenderer {
    async fn render(&self, url: &Url) -> Result<RawDocument, FetchError> {
        let config = self.config()?;
        let (mut browser, mut handler) = Browser::launch(config)
            .await
            .map_err(|e| FetchError::Launch(e.to_string()))?;

        // CDP event pump; ends when the connection closes.
        let pump = tokio::spawn(async move {
            while let Some(event) = handler.next().await {
                if event.is_err() {
                    break;
                }
            }
        });

        logf!("Render: {}", url);
        let captured = self.capture(&browser, url).await;

        if let Err(e) = browser.close().await {
            logw!("Render: close failed: {}", e);
        }
        if let Err(e) = browser.wait().await {
            logw!("Render: browser process did not exit cleanly: {}", e);
        }
        if let Err(e) = pump.await {
            logw!("Render: event handler task failed: {}", e);
        }

        Ok(RawDocument::from(captured?))
    }
}
