//! Cosmetic bird skins
//!
//! Skins are purely visual. Some unlock once the player's best score reaches
//! a threshold; the simulation itself never looks at the selected skin.

use serde::{Deserialize, Serialize};

/// One entry of the skin catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skin {
    /// Name shown in the skin menu
    pub label: String,
    /// Image asset drawn for the bird
    pub asset_key: String,
    /// Best score required to select this skin
    pub unlock_threshold: u32,
}

impl Skin {
    pub fn new(label: &str, asset_key: &str, unlock_threshold: u32) -> Self {
        Self {
            label: label.to_string(),
            asset_key: asset_key.to_string(),
            unlock_threshold,
        }
    }

    pub fn is_unlocked(&self, high_score: u32) -> bool {
        self.unlock_threshold <= high_score
    }
}

/// Ordered list of available skins. Index 0 is the always-available default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkinCatalog {
    skins: Vec<Skin>,
}

impl Default for SkinCatalog {
    fn default() -> Self {
        Self::new(vec![
            Skin::new("Swipey (Yellow)", "bird.png", 0),
            Skin::new("Sparky (Blue)", "bird_3.png", 0),
            Skin::new("Swifter (Green)", "bird_2.png", 0),
            Skin::new("Cool Swipey", "cool_bird.png", 50),
            Skin::new("Goober", "Goober.png", 75),
        ])
    }
}

impl SkinCatalog {
    /// Build a catalog. An empty list gets the default skin so index 0 always
    /// resolves.
    pub fn new(mut skins: Vec<Skin>) -> Self {
        if skins.is_empty() {
            skins.push(Skin::new("Swipey (Yellow)", "bird.png", 0));
        }
        Self { skins }
    }

    pub fn len(&self) -> usize {
        self.skins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.skins.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Skin> {
        self.skins.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Skin> {
        self.skins.iter()
    }

    pub fn is_unlocked(&self, index: usize, high_score: u32) -> bool {
        self.get(index).is_some_and(|skin| skin.is_unlocked(high_score))
    }

    /// Validate a persisted index, falling back to the default skin when it is
    /// missing, out of range, or not unlocked.
    pub fn resolve_saved(&self, saved: Option<u32>, high_score: u32) -> usize {
        match saved {
            Some(index) if self.is_unlocked(index as usize, high_score) => index as usize,
            Some(index) => {
                log::warn!("Saved skin {} unavailable, using default", index);
                0
            }
            None => 0,
        }
    }
}

/// Outcome of confirming a skin in the menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkinChoice {
    Selected(usize),
    Locked { unlock_threshold: u32 },
}

/// Skin menu cursor plus the confirmed selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkinBrowser {
    cursor: usize,
    selected: usize,
}

impl SkinBrowser {
    pub fn new(selected: usize) -> Self {
        Self {
            cursor: selected,
            selected,
        }
    }

    /// Skin currently previewed in the menu
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Skin the bird is drawn with
    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn next(&mut self, catalog: &SkinCatalog) {
        self.cursor = (self.cursor + 1) % catalog.len();
    }

    pub fn prev(&mut self, catalog: &SkinCatalog) {
        self.cursor = (self.cursor + catalog.len() - 1) % catalog.len();
    }

    /// Hint shown under a locked preview
    pub fn unlock_hint(&self, catalog: &SkinCatalog, high_score: u32) -> Option<String> {
        let skin = catalog.get(self.cursor)?;
        (!skin.is_unlocked(high_score))
            .then(|| format!("Unlock at {} points", skin.unlock_threshold))
    }

    /// Select the previewed skin if the player has unlocked it
    pub fn confirm(&mut self, catalog: &SkinCatalog, high_score: u32) -> SkinChoice {
        match catalog.get(self.cursor) {
            Some(skin) if !skin.is_unlocked(high_score) => SkinChoice::Locked {
                unlock_threshold: skin.unlock_threshold,
            },
            Some(_) => {
                self.selected = self.cursor;
                SkinChoice::Selected(self.selected)
            }
            None => {
                self.cursor = self.selected;
                SkinChoice::Selected(self.selected)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_catalog() {
        let catalog = SkinCatalog::default();
        assert_eq!(catalog.len(), 5);
        assert!(catalog.is_unlocked(2, 0));
        assert!(!catalog.is_unlocked(3, 49));
        assert!(catalog.is_unlocked(3, 50));
        assert!(!catalog.is_unlocked(4, 74));
        assert!(!catalog.is_unlocked(99, 1000));
    }

    #[test]
    fn test_empty_catalog_gets_default() {
        let catalog = SkinCatalog::new(Vec::new());
        assert_eq!(catalog.len(), 1);
        assert!(catalog.is_unlocked(0, 0));
    }

    #[test]
    fn test_browse_wraps_both_ways() {
        let catalog = SkinCatalog::default();
        let mut browser = SkinBrowser::new(0);
        browser.prev(&catalog);
        assert_eq!(browser.cursor(), 4);
        browser.next(&catalog);
        assert_eq!(browser.cursor(), 0);
        // Browsing does not change the selection
        browser.next(&catalog);
        assert_eq!(browser.selected(), 0);
    }

    #[test]
    fn test_confirm_locked_skin() {
        let catalog = SkinCatalog::default();
        let mut browser = SkinBrowser::new(0);
        for _ in 0..3 {
            browser.next(&catalog);
        }
        assert_eq!(
            browser.unlock_hint(&catalog, 10).as_deref(),
            Some("Unlock at 50 points")
        );
        assert_eq!(
            browser.confirm(&catalog, 10),
            SkinChoice::Locked {
                unlock_threshold: 50
            }
        );
        assert_eq!(browser.selected(), 0);

        assert_eq!(browser.unlock_hint(&catalog, 50), None);
        assert_eq!(browser.confirm(&catalog, 50), SkinChoice::Selected(3));
        assert_eq!(browser.selected(), 3);
    }

    #[test]
    fn test_resolve_saved() {
        let catalog = SkinCatalog::default();
        assert_eq!(catalog.resolve_saved(None, 0), 0);
        assert_eq!(catalog.resolve_saved(Some(2), 0), 2);
        assert_eq!(catalog.resolve_saved(Some(4), 10), 0);
        assert_eq!(catalog.resolve_saved(Some(4), 80), 4);
        assert_eq!(catalog.resolve_saved(Some(12), 80), 0);
    }
}
