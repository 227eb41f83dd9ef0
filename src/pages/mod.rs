//! Page abstractions over the shop's markup contract.

mod detail;
mod favorites;
mod listing;

pub use detail::DetailPage;
pub use favorites::FavoritesPage;
pub use listing::ListingPage;

use anyhow::{Context, Result};
use chromiumoxide::Element;

use crate::wait;

/// Click a favorite icon and wait until the click is reflected in the icon's
/// class attribute. The toggle is stateless: the same click adds and removes,
/// so callers track the expected transition themselves.
pub(crate) async fn toggle_and_settle(icon: &Element) -> Result<()> {
    let before = icon.attribute("class").await?.unwrap_or_default();
    icon.click().await.context("favorite icon click failed")?;

    let before = before.as_str();
    wait::until(
        "favorite icon state to change",
        wait::TOGGLE_TIMEOUT,
        wait::POLL_INTERVAL,
        move || async move {
            let class = icon.attribute("class").await?.unwrap_or_default();
            anyhow::Ok(class != before)
        },
    )
    .await
}
