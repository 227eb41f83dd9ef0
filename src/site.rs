//! URLs of the shop under test.

/// The live shop the suite runs against.
pub const DEFAULT_BASE_URL: &str = "https://abc07.ru";

const CATALOG_PATH: &str = "/catalog/kraski_i_lak/";
const FAVORITES_PATH: &str = "/favorite/";

/// Base URL plus the fixed page paths the scenarios visit.
#[derive(Debug, Clone)]
pub struct Site {
    base_url: String,
}

impl Site {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url }
    }

    /// Default live site, overridable via `FAVORITES_BASE_URL` (useful for
    /// pointing the suite at a staging copy of the shop).
    pub fn from_env() -> Self {
        match std::env::var("FAVORITES_BASE_URL") {
            Ok(url) if !url.trim().is_empty() => Self::new(url),
            _ => Self::new(DEFAULT_BASE_URL),
        }
    }

    pub fn home_url(&self) -> String {
        format!("{}/", self.base_url)
    }

    pub fn catalog_url(&self) -> String {
        format!("{}{}", self.base_url, CATALOG_PATH)
    }

    pub fn favorites_url(&self) -> String {
        format!("{}{}", self.base_url, FAVORITES_PATH)
    }

    /// Resolve an href read from the page. The shop renders relative links on
    /// listing anchors.
    pub fn absolute(&self, href: &str) -> String {
        if href.starts_with("http://") || href.starts_with("https://") {
            href.to_string()
        } else if href.starts_with('/') {
            format!("{}{}", self.base_url, href)
        } else {
            format!("{}/{}", self.base_url, href)
        }
    }
}

impl Default for Site {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_trailing_slash() {
        let site = Site::new("https://abc07.ru/");
        assert_eq!(site.catalog_url(), "https://abc07.ru/catalog/kraski_i_lak/");
        assert_eq!(site.favorites_url(), "https://abc07.ru/favorite/");
    }

    #[test]
    fn absolutizes_relative_hrefs() {
        let site = Site::default();
        assert_eq!(
            site.absolute("/catalog/kraski_i_lak/gruntovka/"),
            "https://abc07.ru/catalog/kraski_i_lak/gruntovka/"
        );
        assert_eq!(
            site.absolute("https://abc07.ru/catalog/x/"),
            "https://abc07.ru/catalog/x/"
        );
    }
}
