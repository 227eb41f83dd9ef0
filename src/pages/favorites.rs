//! The favorites listing.

use anyhow::{Context, Result};
use chromiumoxide::Page;
use tracing::debug;

use crate::product::ProductSnapshot;
use crate::selectors;
use crate::site::Site;
use crate::wait;

use super::ListingPage;

/// The favorites page. Unlike catalog and home, an empty listing here is a
/// legal state, so opening it does not wait for item containers.
pub struct FavoritesPage<'a> {
    page: &'a Page,
}

impl<'a> FavoritesPage<'a> {
    pub async fn open(page: &'a Page, site: &Site) -> Result<FavoritesPage<'a>> {
        let url = site.favorites_url();
        debug!(%url, "opening favorites page");
        page.goto(url.as_str())
            .await
            .with_context(|| format!("failed to load {url}"))?;
        page.wait_for_navigation()
            .await
            .context("favorites page did not finish loading")?;
        Ok(FavoritesPage { page })
    }

    /// Linear scan of the listing for a snapshot match. False on an empty
    /// listing regardless of the query.
    pub async fn contains(&self, product: &ProductSnapshot) -> Result<bool> {
        let listing = ListingPage::attach(self.page, &selectors::FAVORITES);
        let found = listing
            .snapshots()
            .await?
            .iter()
            .any(|candidate| candidate.matches(product));
        Ok(found)
    }

    /// Toggle the first card's favorite icon (i.e. remove it from favorites)
    /// and wait for the listing to change. Removal drops the card from the
    /// DOM, so the settled condition is the card count, not the icon class.
    pub async fn toggle_first(&self) -> Result<()> {
        let card = selectors::FAVORITES_CARD;
        let icon_selector = format!("{} {}", card.item, card.fav_icon);
        let icon = self
            .page
            .find_element(icon_selector.as_str())
            .await
            .with_context(|| format!("no element matching `{icon_selector}`"))?;

        let count_js = format!("document.querySelectorAll('{}').length", card.item);
        let before: u64 = self
            .page
            .evaluate(count_js.as_str())
            .await?
            .into_value()
            .context("favorites card count returned an unexpected shape")?;

        icon.click().await.context("favorite icon click failed")?;

        let page = self.page;
        let count_probe = count_js.as_str();
        wait::until(
            "favorites listing to update",
            wait::TOGGLE_TIMEOUT,
            wait::POLL_INTERVAL,
            move || async move {
                let now: u64 = page.evaluate(count_probe).await?.into_value()?;
                anyhow::Ok(now != before)
            },
        )
        .await
    }
}
