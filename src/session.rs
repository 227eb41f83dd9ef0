//! Per-test browser session provisioning.
//!
//! Each scenario owns one Chrome instance for its whole duration. The session
//! launches with a fresh user data directory so favorites state starts empty
//! and stays scoped to the test; dropping the session kills the browser
//! process, which is how teardown runs unconditionally even when a test
//! panics mid-scenario.

use anyhow::{Context, Result};
use chromiumoxide::browser::{Browser, BrowserConfig};
use chromiumoxide::Page;
use futures::StreamExt;
use std::path::PathBuf;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::debug;

/// Check if browser tests should be skipped (when Chrome isn't available).
pub fn should_skip() -> bool {
    std::env::var("SKIP_BROWSER_TESTS").is_ok()
}

/// Find a Chrome binary: `CHROME` env var first, then Chrome for Testing as
/// installed by Puppeteer. Falls back to chromiumoxide's own auto-detection
/// when neither is present.
fn find_chrome() -> Option<PathBuf> {
    if let Ok(path) = std::env::var("CHROME") {
        let path = PathBuf::from(path);
        if path.exists() {
            return Some(path);
        }
    }

    let home = std::env::var("HOME").ok()?;
    let cache = PathBuf::from(home).join(".cache/puppeteer/chrome");
    let mut versions: Vec<_> = std::fs::read_dir(&cache)
        .ok()?
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| p.is_dir())
        .collect();
    versions.sort();

    for dir in versions.into_iter().rev() {
        for candidate in [
            "chrome-linux64/chrome",
            "chrome-mac-arm64/Google Chrome for Testing.app/Contents/MacOS/Google Chrome for Testing",
            "chrome-mac-x64/Google Chrome for Testing.app/Contents/MacOS/Google Chrome for Testing",
        ] {
            let path = dir.join(candidate);
            if path.exists() {
                return Some(path);
            }
        }
    }
    None
}

/// One browser instance, exclusively owned by one test.
pub struct Session {
    browser: Browser,
    _handler: JoinHandle<()>,
}

impl Session {
    /// Launch a headed Chrome with a scratch profile and start draining its
    /// CDP event stream.
    pub async fn launch() -> Result<Self> {
        static SESSION_ID: AtomicU64 = AtomicU64::new(0);

        // Headed, matching the original suite; the shop occasionally serves
        // different markup to headless user agents.
        let mut builder = BrowserConfig::builder().with_head();

        if let Some(chrome) = find_chrome() {
            debug!(path = %chrome.display(), "using detected Chrome binary");
            builder = builder.chrome_executable(chrome);
        }

        // Unique profile per session so favorites state is cookie-scoped to
        // this test and runs start from an empty favorites list.
        let id = SESSION_ID.fetch_add(1, Ordering::SeqCst);
        let user_data_dir = std::env::temp_dir().join(format!(
            "favorites-suite-{}-{}",
            std::process::id(),
            id
        ));
        if user_data_dir.exists() {
            let _ = std::fs::remove_dir_all(&user_data_dir);
        }
        builder = builder.user_data_dir(user_data_dir);

        let config = builder
            .build()
            .map_err(|e| anyhow::anyhow!("failed to build browser config: {e}"))?;

        let (browser, mut handler) = Browser::launch(config)
            .await
            .context("failed to launch browser")?;

        let handle = tokio::spawn(async move {
            while let Some(event) = handler.next().await {
                if let Err(e) = event {
                    debug!("browser handler closed: {e:?}");
                    break;
                }
            }
        });

        // Give the browser a moment to finish starting up.
        tokio::time::sleep(Duration::from_millis(500)).await;

        Ok(Self {
            browser,
            _handler: handle,
        })
    }

    /// Launch a session, or return `None` (skipping the test) when no Chrome
    /// binary is installed on this machine.
    pub async fn require() -> Option<Self> {
        match Self::launch().await {
            Ok(session) => Some(session),
            Err(e) => {
                let missing_chrome = e
                    .chain()
                    .any(|cause| cause.to_string().contains("Could not auto detect"));
                if missing_chrome {
                    eprintln!("Skipping: Chrome not installed ({e})");
                    None
                } else {
                    panic!("unexpected browser error: {e:?}");
                }
            }
        }
    }

    /// Open a blank page in this session.
    pub async fn page(&self) -> Result<Page> {
        self.browser
            .new_page("about:blank")
            .await
            .context("failed to open a page")
    }
}
