//! Player profile: best score and chosen skin
//!
//! Loaded once at startup and written back whenever either value changes.

use crate::persistence::{HIGH_SCORE_KEY, KeyValueStore, SELECTED_SKIN_KEY};
use crate::skins::{SkinBrowser, SkinCatalog, SkinChoice};

#[derive(Debug, Clone)]
pub struct Profile {
    pub high_score: u32,
    pub catalog: SkinCatalog,
    pub skins: SkinBrowser,
}

impl Profile {
    /// Load from storage; anything missing or invalid falls back to defaults
    pub fn load(store: &impl KeyValueStore, catalog: SkinCatalog) -> Self {
        let high_score = store.get_u32(HIGH_SCORE_KEY).unwrap_or(0);
        let selected = catalog.resolve_saved(store.get_u32(SELECTED_SKIN_KEY), high_score);
        log::info!("Loaded profile: best {}, skin {}", high_score, selected);
        Self {
            high_score,
            catalog,
            skins: SkinBrowser::new(selected),
        }
    }

    /// Record a finished run. Returns true and persists when it beats the best.
    pub fn record_score(&mut self, score: u32, store: &mut impl KeyValueStore) -> bool {
        if score <= self.high_score {
            return false;
        }
        self.high_score = score;
        store.set_u32(HIGH_SCORE_KEY, score);
        log::info!("New high score {} saved", score);
        true
    }

    /// Confirm the skin under the menu cursor, persisting it when unlocked
    pub fn confirm_skin(&mut self, store: &mut impl KeyValueStore) -> SkinChoice {
        let choice = self.skins.confirm(&self.catalog, self.high_score);
        if let SkinChoice::Selected(index) = choice {
            store.set_u32(SELECTED_SKIN_KEY, index as u32);
            log::info!("Skin {} selected", index);
        }
        choice
    }

    /// Asset key of the skin the bird is drawn with
    pub fn selected_asset(&self) -> &str {
        self.catalog
            .get(self.skins.selected())
            .map(|skin| skin.asset_key.as_str())
            .unwrap_or("bird.png")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::MemoryStore;

    #[test]
    fn test_load_defaults_from_empty_store() {
        let profile = Profile::load(&MemoryStore::new(), SkinCatalog::default());
        assert_eq!(profile.high_score, 0);
        assert_eq!(profile.skins.selected(), 0);
        assert_eq!(profile.selected_asset(), "bird.png");
    }

    #[test]
    fn test_load_rejects_locked_saved_skin() {
        let mut store = MemoryStore::new();
        store.set_u32(HIGH_SCORE_KEY, 60);
        store.set_u32(SELECTED_SKIN_KEY, 4);
        let profile = Profile::load(&store, SkinCatalog::default());
        assert_eq!(profile.high_score, 60);
        assert_eq!(profile.skins.selected(), 0);

        store.set_u32(SELECTED_SKIN_KEY, 3);
        let profile = Profile::load(&store, SkinCatalog::default());
        assert_eq!(profile.selected_asset(), "cool_bird.png");
    }

    #[test]
    fn test_record_score_is_monotonic() {
        let mut store = MemoryStore::new();
        let mut profile = Profile::load(&store, SkinCatalog::default());
        assert!(profile.record_score(12, &mut store));
        assert!(!profile.record_score(12, &mut store));
        assert!(!profile.record_score(5, &mut store));
        assert_eq!(profile.high_score, 12);
        assert_eq!(store.get_u32(HIGH_SCORE_KEY), Some(12));
    }

    #[test]
    fn test_confirm_skin_persists_only_unlocked() {
        let mut store = MemoryStore::new();
        let mut profile = Profile::load(&store, SkinCatalog::default());
        profile.skins.prev(&profile.catalog);
        assert_eq!(
            profile.confirm_skin(&mut store),
            SkinChoice::Locked {
                unlock_threshold: 75
            }
        );
        assert_eq!(store.get_u32(SELECTED_SKIN_KEY), None);

        profile.skins.prev(&profile.catalog);
        profile.skins.prev(&profile.catalog);
        assert_eq!(profile.confirm_skin(&mut store), SkinChoice::Selected(2));
        assert_eq!(store.get_u32(SELECTED_SKIN_KEY), Some(2));
    }
}
