//! End-to-end browser tests for the abc07.ru favorites workflow.
//!
//! This crate drives a real Chrome instance (via chromiumoxide) against the
//! live shop and verifies that adding or removing a product to favorites is
//! reflected on the favorites listing, from every entry point that exposes a
//! favorite toggle: the catalog listing, the product detail page, the home
//! page, and the favorites page itself.
//!
//! The library is the toolkit — page abstractions over the shop's CSS
//! contract ([`selectors`]), a per-test browser session ([`session`]), and a
//! poll-until-condition primitive ([`wait`]). The scenarios themselves live
//! in `tests/favorites.rs`.
//!
//! # Example
//!
//! ```no_run
//! use favorites_suite::pages::{FavoritesPage, ListingPage};
//! use favorites_suite::{Session, Site};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let session = Session::launch().await?;
//! let page = session.page().await?;
//! let site = Site::from_env();
//!
//! let catalog = ListingPage::open_catalog(&page, &site).await?;
//! let product = catalog.first().await?;
//! catalog.toggle_favorite(0).await?;
//!
//! let favorites = FavoritesPage::open(&page, &site).await?;
//! assert!(favorites.contains(&product).await?);
//! # Ok(())
//! # }
//! ```
//!
//! # Known limitation
//!
//! Favorites state on the live site persists per browser profile. Every
//! [`Session`] starts from a fresh scratch profile so a run begins with an
//! empty favorites list, but nothing resets server-side state if the site
//! keeps any — repeated runs against a shared profile are not idempotent.

pub mod error;
pub mod pages;
pub mod product;
pub mod selectors;
pub mod session;
pub mod site;
pub mod wait;

pub use error::SuiteError;
pub use product::ProductSnapshot;
pub use session::Session;
pub use site::Site;

/// Skip the current test when browser tests are disabled via
/// `SKIP_BROWSER_TESTS`.
#[macro_export]
macro_rules! skip_if_no_chrome {
    () => {
        if $crate::session::should_skip() {
            eprintln!("Skipping test: SKIP_BROWSER_TESTS is set");
            return;
        }
    };
}
