//! The product detail page.

use anyhow::{Context, Result};
use chromiumoxide::Page;
use tracing::debug;

use crate::product::ProductSnapshot;
use crate::selectors;
use crate::wait;

/// A loaded product detail page with its snapshot already captured.
pub struct DetailPage<'a> {
    page: &'a Page,
    snapshot: ProductSnapshot,
}

impl<'a> DetailPage<'a> {
    /// Navigate to a product URL and read its title and price off the
    /// detail-page selectors.
    pub async fn open(page: &'a Page, url: &str) -> Result<DetailPage<'a>> {
        debug!(%url, "opening product detail page");
        page.goto(url)
            .await
            .with_context(|| format!("failed to load {url}"))?;

        let probe_js = format!("!!document.querySelector('{}')", selectors::DETAIL.title);
        let probe = probe_js.as_str();
        wait::until(
            &format!("`{}` to appear on {url}", selectors::DETAIL.title),
            wait::PAGE_TIMEOUT,
            wait::POLL_INTERVAL,
            move || async move {
                let present: bool = page.evaluate(probe).await?.into_value()?;
                anyhow::Ok(present)
            },
        )
        .await?;

        let title = page
            .find_element(selectors::DETAIL.title)
            .await
            .with_context(|| format!("no element matching `{}`", selectors::DETAIL.title))?
            .inner_text()
            .await?
            .unwrap_or_default();
        let price = page
            .find_element(selectors::DETAIL.price)
            .await
            .with_context(|| format!("no element matching `{}`", selectors::DETAIL.price))?
            .inner_text()
            .await?
            .unwrap_or_default();

        Ok(DetailPage {
            page,
            snapshot: ProductSnapshot::new(title, &price),
        })
    }

    /// The (title, cleaned price) pair read at load time.
    pub fn snapshot(&self) -> &ProductSnapshot {
        &self.snapshot
    }

    /// Toggle the page-level favorite icon and wait for the click to
    /// register.
    pub async fn toggle_favorite(&self) -> Result<()> {
        let icon = self
            .page
            .find_element(selectors::DETAIL.fav_icon)
            .await
            .with_context(|| format!("no element matching `{}`", selectors::DETAIL.fav_icon))?;
        super::toggle_and_settle(&icon).await
    }
}
