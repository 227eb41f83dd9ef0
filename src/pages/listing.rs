//! Any page that lists product containers: catalog, home page, and the
//! favorites scan all share the same read path, differing only in selectors.

use anyhow::{Context, Result};
use chromiumoxide::Page;
use serde::Deserialize;
use tracing::debug;

use crate::error::SuiteError;
use crate::product::ProductSnapshot;
use crate::selectors::{self, ListingSelectors};
use crate::site::Site;
use crate::wait;

/// Raw text read off one item container, before normalization.
#[derive(Debug, Deserialize)]
struct RawRow {
    title: String,
    price: String,
    href: Option<String>,
}

/// A listing page with at least the item/title/price/favorite markup.
pub struct ListingPage<'a> {
    page: &'a Page,
    selectors: &'static ListingSelectors,
}

impl<'a> ListingPage<'a> {
    /// Navigate to the catalog listing and wait for its rows to render.
    pub async fn open_catalog(page: &'a Page, site: &Site) -> Result<ListingPage<'a>> {
        Self::open(page, site.catalog_url(), &selectors::CATALOG).await
    }

    /// Navigate to the home page and wait for its product cards to render.
    pub async fn open_home(page: &'a Page, site: &Site) -> Result<ListingPage<'a>> {
        Self::open(page, site.home_url(), &selectors::HOME).await
    }

    /// Wrap an already-loaded page. Used for the favorites scan, where an
    /// empty listing is legal and nothing is waited for.
    pub(crate) fn attach(page: &'a Page, selectors: &'static ListingSelectors) -> ListingPage<'a> {
        ListingPage { page, selectors }
    }

    async fn open(
        page: &'a Page,
        url: String,
        selectors: &'static ListingSelectors,
    ) -> Result<ListingPage<'a>> {
        debug!(%url, "opening listing page");
        page.goto(url.as_str())
            .await
            .with_context(|| format!("failed to load {url}"))?;

        // Listing pages are expected to render at least one item container.
        let probe_js = format!("!!document.querySelector('{}')", selectors.item);
        let probe = probe_js.as_str();
        wait::until(
            &format!("`{}` to appear on {url}", selectors.item),
            wait::PAGE_TIMEOUT,
            wait::POLL_INTERVAL,
            move || async move {
                let present: bool = page.evaluate(probe).await?.into_value()?;
                anyhow::Ok(present)
            },
        )
        .await?;

        Ok(ListingPage { page, selectors })
    }

    fn rows_js(&self) -> String {
        format!(
            r#"Array.from(document.querySelectorAll('{item}')).map(el => {{
                const title = el.querySelector('{title}');
                const price = el.querySelector('{price}');
                return {{
                    title: title ? title.textContent : '',
                    price: price ? price.textContent : '',
                    href: title ? title.getAttribute('href') : null,
                }};
            }})"#,
            item = self.selectors.item,
            title = self.selectors.title,
            price = self.selectors.price,
        )
    }

    async fn rows(&self) -> Result<Vec<RawRow>> {
        let rows: Vec<RawRow> = self
            .page
            .evaluate(self.rows_js())
            .await
            .with_context(|| format!("failed to scan `{}` containers", self.selectors.item))?
            .into_value()
            .context("listing scan returned an unexpected shape")?;
        debug!(count = rows.len(), item = self.selectors.item, "scanned listing");
        Ok(rows)
    }

    /// All product snapshots on the page, in DOM order.
    pub async fn snapshots(&self) -> Result<Vec<ProductSnapshot>> {
        Ok(self
            .rows()
            .await?
            .into_iter()
            .map(|row| ProductSnapshot::new(row.title, &row.price))
            .collect())
    }

    /// Snapshot of the first item container.
    pub async fn first(&self) -> Result<ProductSnapshot> {
        self.snapshots()
            .await?
            .into_iter()
            .next()
            .with_context(|| format!("no element matching `{}`", self.selectors.item))
    }

    /// First item container with a non-empty trimmed title, with its DOM
    /// position. Home-page carousels render placeholder cards, so "first
    /// card" and "first usable card" differ there.
    pub async fn first_titled(&self) -> Result<(usize, ProductSnapshot)> {
        for (index, row) in self.rows().await?.into_iter().enumerate() {
            if !row.title.trim().is_empty() {
                return Ok((index, ProductSnapshot::new(row.title, &row.price)));
            }
        }
        Err(SuiteError::NoTitledProduct.into())
    }

    /// Detail-page URL of the nth item container's title anchor.
    pub async fn detail_url(&self, index: usize, site: &Site) -> Result<String> {
        let row = self
            .rows()
            .await?
            .into_iter()
            .nth(index)
            .with_context(|| format!("no element matching `{}` at position {index}", self.selectors.item))?;
        let href = row
            .href
            .with_context(|| format!("item at position {index} has no `{}` link", self.selectors.title))?;
        Ok(site.absolute(&href))
    }

    /// Toggle the favorite icon of the nth item container and wait for the
    /// click to register.
    pub async fn toggle_favorite(&self, index: usize) -> Result<()> {
        let selector = format!("{} {}", self.selectors.item, self.selectors.fav_icon);
        let icons = self
            .page
            .find_elements(selector.as_str())
            .await
            .with_context(|| format!("no elements matching `{selector}`"))?;
        let icon = icons
            .get(index)
            .with_context(|| format!("no favorite icon at position {index} (`{selector}`)"))?;
        super::toggle_and_settle(icon).await
    }
}
