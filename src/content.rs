use rust_embed::Embed;
use serde::{Deserialize, Serialize};

#[derive(Embed)]
#[folder = "assets/catalog/"]
struct CatalogAssets;

pub const ASSISTANT_LABEL: &str = "AI";

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct HeroSlide {
    pub title: String,
    pub description: String,
    pub category: String,
    pub rating: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AppEntry {
    pub name: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ContentItem {
    pub title: String,
    pub category: String,
}

/// Static browsing content for the home screen. The assistant slot on the
/// nav bar is NOT part of `nav_tabs`; regions add it as an explicit extra
/// item so tab count changes can't shift its index.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Catalog {
    pub nav_tabs: Vec<String>,
    pub hero_slides: Vec<HeroSlide>,
    pub apps: Vec<AppEntry>,
    pub recommended_title: String,
    pub recommended: Vec<ContentItem>,
}

impl Catalog {
    /// Load the bundled catalog, falling back to the built-in default if
    /// the asset is missing or fails to parse.
    pub fn load() -> Self {
        CatalogAssets::get("content.json")
            .and_then(|file| serde_json::from_slice(file.data.as_ref()).ok())
            .unwrap_or_default()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self {
            nav_tabs: vec![
                "Home".to_string(),
                "Library".to_string(),
                "Apps".to_string(),
                "Settings".to_string(),
            ],
            hero_slides: vec![
                HeroSlide {
                    title: "The Last of Us".to_string(),
                    description: "A gripping post-apocalyptic drama series".to_string(),
                    category: "Series".to_string(),
                    rating: "9.0".to_string(),
                },
                HeroSlide {
                    title: "Featured Movie".to_string(),
                    description: "Discover amazing content with AI assistance".to_string(),
                    category: "Movie".to_string(),
                    rating: "8.5".to_string(),
                },
                HeroSlide {
                    title: "Popular Shows".to_string(),
                    description: "Trending content you might enjoy".to_string(),
                    category: "Collection".to_string(),
                    rating: "8.8".to_string(),
                },
            ],
            apps: vec![
                AppEntry { name: "Stream+".to_string() },
                AppEntry { name: "CineBox".to_string() },
                AppEntry { name: "Musica".to_string() },
                AppEntry { name: "Arcade".to_string() },
                AppEntry { name: "Photos".to_string() },
                AppEntry { name: "Sports".to_string() },
                AppEntry { name: "News".to_string() },
                AppEntry { name: "Kids".to_string() },
            ],
            recommended_title: "Recommended Movies".to_string(),
            recommended: vec![
                ContentItem {
                    title: "Midnight Run".to_string(),
                    category: "Action".to_string(),
                },
                ContentItem {
                    title: "Paper Moon".to_string(),
                    category: "Drama".to_string(),
                },
                ContentItem {
                    title: "The Long Haul".to_string(),
                    category: "Documentary".to_string(),
                },
                ContentItem {
                    title: "Second Act".to_string(),
                    category: "Comedy".to_string(),
                },
                ContentItem {
                    title: "Northern Lights".to_string(),
                    category: "Romance".to_string(),
                },
                ContentItem {
                    title: "Deep Water".to_string(),
                    category: "Thriller".to_string(),
                },
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_returns_nonempty_catalog() {
        let catalog = Catalog::load();
        assert!(!catalog.nav_tabs.is_empty());
        assert!(!catalog.hero_slides.is_empty());
        assert!(!catalog.apps.is_empty());
        assert!(!catalog.recommended.is_empty());
    }

    #[test]
    fn test_assistant_slot_not_in_nav_tabs() {
        let catalog = Catalog::load();
        assert!(catalog.nav_tabs.iter().all(|t| t != ASSISTANT_LABEL));
    }

    #[test]
    fn test_catalog_json_roundtrip() {
        let catalog = Catalog::default();
        let json = serde_json::to_string(&catalog).unwrap();
        let parsed: Catalog = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.nav_tabs, catalog.nav_tabs);
        assert_eq!(parsed.hero_slides.len(), catalog.hero_slides.len());
    }

    #[test]
    fn test_garbage_asset_falls_back_to_default() {
        let parsed: Option<Catalog> = serde_json::from_str("not json").ok();
        assert!(parsed.is_none());
        // Catalog::load takes the same fallback path.
        let catalog = Catalog::load();
        assert!(!catalog.nav_tabs.is_empty());
    }
}
