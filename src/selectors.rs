//! The CSS contract with the abc07.ru markup.
//!
//! One selector set per page type, so a markup change on the site is a
//! one-place edit here. No fallback exists: if the shop changes these class
//! names, every scenario fails at element lookup.

/// Selectors for a page that lists item containers.
#[derive(Debug, Clone, Copy)]
pub struct ListingSelectors {
    /// The item container, matched in DOM order.
    pub item: &'static str,
    /// Title anchor inside a container. Also carries the detail-page href.
    pub title: &'static str,
    /// Price element inside a container.
    pub price: &'static str,
    /// Favorite-toggle affordance inside a container.
    pub fav_icon: &'static str,
}

/// Selectors for the product detail page (page-level, not per-container).
#[derive(Debug, Clone, Copy)]
pub struct DetailSelectors {
    pub title: &'static str,
    pub price: &'static str,
    pub fav_icon: &'static str,
}

/// Catalog listing rows.
pub const CATALOG: ListingSelectors = ListingSelectors {
    item: ".product-row .js-item",
    title: ".product-item_title a",
    price: ".product-item_price",
    fav_icon: ".product-item_fav",
};

/// Home-page product cards. Same inner markup as catalog rows, different
/// container.
pub const HOME: ListingSelectors = ListingSelectors {
    item: ".product-item.js-item",
    title: ".product-item_title a",
    price: ".product-item_price",
    fav_icon: ".product-item_fav",
};

/// Favorites listing as scanned by the membership check.
pub const FAVORITES: ListingSelectors = CATALOG;

/// Favorites listing as rendered for removal clicks. The favorites page
/// exposes a plainer card container than the catalog rows.
pub const FAVORITES_CARD: ListingSelectors = ListingSelectors {
    item: ".product-item",
    title: ".product-item_title a",
    price: ".product-item_price",
    fav_icon: ".product-item_fav",
};

/// Product detail page.
pub const DETAIL: DetailSelectors = DetailSelectors {
    title: ".product-card_title",
    price: ".product-card_price",
    fav_icon: ".product-card_fav",
};
