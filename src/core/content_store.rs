//! The content store: single source of truth for the site's three record
//! collections, mirrored to a durable key-value store.
//!
//! Every public operation is infallible to the caller. Storage failures
//! degrade to the built-in defaults on read and to skipped persistence on
//! write, and are reported through `tracing`.

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::domain::{defaults, ExperienceItem, ItemId, PortfolioDraft, PortfolioItem, SkillCategory};
use crate::storage::{
    KeyValueStore, StorageError, CONTENT_KEYS, EXPERIENCE_KEY, PORTFOLIO_KEY, SKILLS_KEY,
};

/// Current snapshot format version
pub const SNAPSHOT_VERSION: u32 = 1;

/// All three collections at a point in time (export/import document)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentSnapshot {
    /// Snapshot format version
    pub version: u32,

    /// When the snapshot was taken
    pub exported_at: DateTime<Utc>,

    pub portfolio_items: Vec<PortfolioItem>,

    pub skill_categories: Vec<SkillCategory>,

    pub experience_items: Vec<ExperienceItem>,
}

/// Where a collection came from during the last load
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadSource {
    /// Decoded from the durable store
    Stored,

    /// Key was absent; built-in defaults used
    Defaults,

    /// Key was present but unreadable or corrupt; built-in defaults used
    Recovered,
}

/// Per-collection outcome of [`ContentStore::load`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadReport {
    pub portfolio: LoadSource,
    pub skills: LoadSource,
    pub experience: LoadSource,
}

/// Content store over an injected durable backend
pub struct ContentStore<S: KeyValueStore> {
    storage: S,
    portfolio_items: Vec<PortfolioItem>,
    skill_categories: Vec<SkillCategory>,
    experience_items: Vec<ExperienceItem>,

    /// Set once the initial load has run; saves are suppressed before that
    loaded: bool,
}

impl<S: KeyValueStore> ContentStore<S> {
    /// Create an unloaded store with empty collections
    pub fn new(storage: S) -> Self {
        Self {
            storage,
            portfolio_items: Vec::new(),
            skill_categories: Vec::new(),
            experience_items: Vec::new(),
            loaded: false,
        }
    }

    /// Create a store and load its collections from `storage`
    pub async fn open(storage: S) -> Self {
        let mut store = Self::new(storage);
        store.load().await;
        store
    }

    /// The durable backend
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Whether the initial load has completed
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn portfolio_items(&self) -> &[PortfolioItem] {
        &self.portfolio_items
    }

    pub fn skill_categories(&self) -> &[SkillCategory] {
        &self.skill_categories
    }

    pub fn experience_items(&self) -> &[ExperienceItem] {
        &self.experience_items
    }

    /// Find a portfolio item by id
    pub fn portfolio_item(&self, id: &ItemId) -> Option<&PortfolioItem> {
        self.portfolio_items.iter().find(|p| &p.id == id)
    }

    /// Load all three collections from the durable store.
    ///
    /// Each key falls back to its own defaults independently.
    pub async fn load(&mut self) -> LoadReport {
        let (portfolio_items, portfolio) =
            self.read_collection(PORTFOLIO_KEY, defaults::portfolio_items).await;
        let (skill_categories, skills) =
            self.read_collection(SKILLS_KEY, defaults::skill_categories).await;
        let (experience_items, experience) =
            self.read_collection(EXPERIENCE_KEY, defaults::experience_items).await;

        self.portfolio_items = dedupe_by_id(PORTFOLIO_KEY, portfolio_items, |p| &p.id);
        self.skill_categories = dedupe_by_id(SKILLS_KEY, skill_categories, |c| &c.id);
        self.experience_items = dedupe_by_id(EXPERIENCE_KEY, experience_items, |e| &e.id);
        self.loaded = true;

        tracing::debug!(
            backend = self.storage.name(),
            portfolio = self.portfolio_items.len(),
            skills = self.skill_categories.len(),
            experience = self.experience_items.len(),
            "Loaded content"
        );

        LoadReport {
            portfolio,
            skills,
            experience,
        }
    }

    async fn read_collection<T, F>(&self, key: &str, fallback: F) -> (Vec<T>, LoadSource)
    where
        T: DeserializeOwned,
        F: FnOnce() -> Vec<T>,
    {
        let raw = match self.storage.get(key).await {
            Ok(Some(raw)) => raw,
            Ok(None) => return (fallback(), LoadSource::Defaults),
            Err(e) => {
                tracing::warn!("Failed to read {} from {} storage: {}", key, self.storage.name(), e);
                return (fallback(), LoadSource::Recovered);
            }
        };

        match serde_json::from_str(&raw) {
            Ok(items) => (items, LoadSource::Stored),
            Err(e) => {
                tracing::warn!("Stored {} is corrupt, using defaults: {}", key, e);
                (fallback(), LoadSource::Recovered)
            }
        }
    }

    /// Write all three collections to the durable store.
    ///
    /// Failures are logged and skipped; a failed key does not stop the others.
    pub async fn save(&self) {
        if let Err(e) = self.write_collection(PORTFOLIO_KEY, &self.portfolio_items).await {
            tracing::error!("Failed to save {}: {}", PORTFOLIO_KEY, e);
        }
        if let Err(e) = self.write_collection(SKILLS_KEY, &self.skill_categories).await {
            tracing::error!("Failed to save {}: {}", SKILLS_KEY, e);
        }
        if let Err(e) = self.write_collection(EXPERIENCE_KEY, &self.experience_items).await {
            tracing::error!("Failed to save {}: {}", EXPERIENCE_KEY, e);
        }
    }

    async fn write_collection<T: Serialize>(&self, key: &str, items: &[T]) -> Result<(), StorageError> {
        let json = serde_json::to_string(items)?;
        self.storage.set(key, &json).await
    }

    /// Persist after a mutation, unless the initial load has not run yet
    async fn persist(&self) {
        if self.loaded {
            self.save().await;
        } else {
            tracing::debug!("Skipping save before initial load");
        }
    }

    /// Append a new portfolio item and return its id
    pub async fn add_portfolio_item(&mut self, draft: PortfolioDraft) -> ItemId {
        let mut id = ItemId::generate();
        while self.portfolio_item(&id).is_some() {
            id = ItemId::generate();
        }

        tracing::info!("Adding portfolio item {}", id);
        self.portfolio_items
            .push(PortfolioItem::from_draft(id.clone(), draft));
        self.persist().await;

        id
    }

    /// Replace the fields of an existing portfolio item, keeping its id.
    ///
    /// Returns `false` (and changes nothing) when no item has that id.
    pub async fn update_portfolio_item(&mut self, id: &ItemId, draft: PortfolioDraft) -> bool {
        let mut updated = false;
        for existing in self.portfolio_items.iter_mut().filter(|p| &p.id == id) {
            *existing = PortfolioItem::from_draft(id.clone(), draft.clone());
            updated = true;
        }

        if !updated {
            tracing::debug!("No portfolio item {} to update", id);
            return false;
        }

        tracing::info!("Updated portfolio item {}", id);
        self.persist().await;

        true
    }

    /// Remove every portfolio item with `id`. Returns `false` when there was none.
    pub async fn delete_portfolio_item(&mut self, id: &ItemId) -> bool {
        let before = self.portfolio_items.len();
        self.portfolio_items.retain(|p| &p.id != id);

        if self.portfolio_items.len() == before {
            tracing::debug!("No portfolio item {} to delete", id);
            return false;
        }

        tracing::info!("Deleted portfolio item {}", id);
        self.persist().await;

        true
    }

    /// Replace the whole skill category collection. Repeated ids keep their first entry.
    pub async fn replace_skill_categories(&mut self, categories: Vec<SkillCategory>) {
        self.skill_categories = dedupe_by_id(SKILLS_KEY, categories, |c| &c.id);
        self.persist().await;
    }

    /// Replace the whole experience collection. Repeated ids keep their first entry.
    pub async fn replace_experience_items(&mut self, items: Vec<ExperienceItem>) {
        self.experience_items = dedupe_by_id(EXPERIENCE_KEY, items, |e| &e.id);
        self.persist().await;
    }

    /// Restore the built-in content and clear the durable keys
    pub async fn reset_to_default(&mut self) {
        self.portfolio_items = defaults::portfolio_items();
        self.skill_categories = defaults::skill_categories();
        self.experience_items = defaults::experience_items();

        for key in CONTENT_KEYS {
            if let Err(e) = self.storage.remove(key).await {
                tracing::error!("Failed to clear {}: {}", key, e);
            }
        }
        // Durable keys are gone, so later saves cannot clobber anything
        self.loaded = true;

        tracing::info!("Content reset to defaults");
    }

    /// Capture the current collections
    pub fn snapshot(&self) -> ContentSnapshot {
        ContentSnapshot {
            version: SNAPSHOT_VERSION,
            exported_at: Utc::now(),
            portfolio_items: self.portfolio_items.clone(),
            skill_categories: self.skill_categories.clone(),
            experience_items: self.experience_items.clone(),
        }
    }

    /// Replace all three collections with a snapshot's contents.
    ///
    /// Repeated ids within a collection keep their first entry.
    pub async fn restore(&mut self, snapshot: ContentSnapshot) {
        if snapshot.version != SNAPSHOT_VERSION {
            tracing::warn!(
                "Importing snapshot version {} (expected {})",
                snapshot.version,
                SNAPSHOT_VERSION
            );
        }

        self.portfolio_items = dedupe_by_id(PORTFOLIO_KEY, snapshot.portfolio_items, |p| &p.id);
        self.skill_categories = dedupe_by_id(SKILLS_KEY, snapshot.skill_categories, |c| &c.id);
        self.experience_items = dedupe_by_id(EXPERIENCE_KEY, snapshot.experience_items, |e| &e.id);
        self.persist().await;
    }
}

/// Drop records whose id already appeared earlier in the collection
fn dedupe_by_id<T>(key: &str, items: Vec<T>, id: impl Fn(&T) -> &ItemId) -> Vec<T> {
    let mut seen = HashSet::with_capacity(items.len());
    let before = items.len();

    let unique: Vec<T> = items
        .into_iter()
        .filter(|item| seen.insert(id(item).clone()))
        .collect();

    if unique.len() != before {
        tracing::warn!("Dropped {} records with repeated ids from {}", before - unique.len(), key);
    }
    unique
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;

    use super::*;
    use crate::domain::LocalizedText;
    use crate::storage::MemoryStore;

    fn draft(title: &str) -> PortfolioDraft {
        PortfolioDraft::new(
            LocalizedText::uniform(title),
            LocalizedText::uniform("d"),
            "/i.png",
        )
    }

    /// Backend whose writes always fail
    #[derive(Default)]
    struct ReadOnlyStore {
        inner: MemoryStore,
        failed_writes: AtomicUsize,
    }

    #[async_trait]
    impl KeyValueStore for ReadOnlyStore {
        fn name(&self) -> &str {
            "read-only"
        }

        async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
            self.inner.get(key).await
        }

        async fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
            self.failed_writes.fetch_add(1, Ordering::SeqCst);
            Err(StorageError::Unavailable("quota exceeded".to_string()))
        }

        async fn remove(&self, _key: &str) -> Result<(), StorageError> {
            Err(StorageError::Unavailable("quota exceeded".to_string()))
        }
    }

    #[tokio::test]
    async fn test_load_empty_storage_uses_defaults() {
        let mut store = ContentStore::new(MemoryStore::new());
        let report = store.load().await;

        assert_eq!(store.portfolio_items().len(), 6);
        assert_eq!(store.skill_categories().len(), 7);
        assert_eq!(store.experience_items().len(), 3);
        assert_eq!(report.portfolio, LoadSource::Defaults);
        assert!(store.is_loaded());
    }

    #[tokio::test]
    async fn test_corrupt_key_only_resets_that_collection() {
        let storage = MemoryStore::new();
        storage.set(PORTFOLIO_KEY, "[]").await.unwrap();
        storage.set(SKILLS_KEY, "{not json").await.unwrap();

        let mut store = ContentStore::new(storage);
        let report = store.load().await;

        assert!(store.portfolio_items().is_empty());
        assert_eq!(report.portfolio, LoadSource::Stored);
        assert_eq!(store.skill_categories().len(), 7);
        assert_eq!(report.skills, LoadSource::Recovered);
        assert_eq!(report.experience, LoadSource::Defaults);
    }

    #[tokio::test]
    async fn test_wrong_shape_is_recovered() {
        let storage = MemoryStore::with_entry(EXPERIENCE_KEY, r#"[{"id":"1","period":"2020"}]"#);
        let mut store = ContentStore::new(storage);
        let report = store.load().await;

        assert_eq!(report.experience, LoadSource::Recovered);
        assert_eq!(store.experience_items().len(), 3);
    }

    #[tokio::test]
    async fn test_mutation_before_load_does_not_save() {
        let mut store = ContentStore::new(MemoryStore::new());
        store.add_portfolio_item(draft("early")).await;

        assert!(store.storage().is_empty().await);
    }

    #[tokio::test]
    async fn test_mutation_after_load_saves_all_keys() {
        let mut store = ContentStore::open(MemoryStore::new()).await;
        store.add_portfolio_item(draft("X")).await;

        for key in CONTENT_KEYS {
            assert!(store.storage().contains(key).await, "{key} should be saved");
        }
    }

    #[tokio::test]
    async fn test_add_appends_with_fresh_id() {
        let mut store = ContentStore::open(MemoryStore::new()).await;
        let id = store.add_portfolio_item(draft("X")).await;

        assert_eq!(store.portfolio_items().len(), 7);
        assert_eq!(store.portfolio_items().last().unwrap().id, id);
        assert_eq!(
            store.portfolio_items().iter().filter(|p| p.id == id).count(),
            1
        );
    }

    #[tokio::test]
    async fn test_update_keeps_id_and_position() {
        let mut store = ContentStore::open(MemoryStore::new()).await;
        let id = ItemId::new("3");

        assert!(store.update_portfolio_item(&id, draft("Changed")).await);

        let item = &store.portfolio_items()[2];
        assert_eq!(item.id, id);
        assert_eq!(item.title.en, "Changed");
        assert!(item.link.is_none());
    }

    #[tokio::test]
    async fn test_update_unknown_id_is_noop() {
        let mut store = ContentStore::open(MemoryStore::new()).await;
        let before = store.portfolio_items().to_vec();

        assert!(!store.update_portfolio_item(&ItemId::new("nope"), draft("Y")).await);
        assert_eq!(store.portfolio_items(), before.as_slice());
    }

    #[tokio::test]
    async fn test_delete_twice() {
        let mut store = ContentStore::open(MemoryStore::new()).await;
        let id = ItemId::new("2");

        assert!(store.delete_portfolio_item(&id).await);
        let after_first = store.portfolio_items().to_vec();
        assert!(!store.delete_portfolio_item(&id).await);

        assert_eq!(store.portfolio_items(), after_first.as_slice());
        assert_eq!(after_first.len(), 5);
    }

    #[tokio::test]
    async fn test_replace_collections() {
        let mut store = ContentStore::open(MemoryStore::new()).await;

        store.replace_skill_categories(Vec::new()).await;
        store
            .replace_experience_items(vec![ExperienceItem {
                id: ItemId::new("x"),
                title: LocalizedText::uniform("Studio"),
                period: "2024".to_string(),
            }])
            .await;

        assert!(store.skill_categories().is_empty());
        assert_eq!(store.experience_items().len(), 1);
        assert_eq!(
            store.storage().get(SKILLS_KEY).await.unwrap().as_deref(),
            Some("[]")
        );
    }

    #[tokio::test]
    async fn test_reset_clears_keys() {
        let mut store = ContentStore::open(MemoryStore::new()).await;
        store.delete_portfolio_item(&ItemId::new("1")).await;
        assert!(store.storage().contains(PORTFOLIO_KEY).await);

        store.reset_to_default().await;

        assert_eq!(store.portfolio_items(), defaults::portfolio_items().as_slice());
        assert!(store.storage().is_empty().await);
    }

    #[tokio::test]
    async fn test_write_failures_are_swallowed() {
        let mut store = ContentStore::open(ReadOnlyStore::default()).await;

        let id = store.add_portfolio_item(draft("X")).await;
        store.reset_to_default().await;

        assert!(store.portfolio_item(&id).is_none());
        assert_eq!(store.storage().failed_writes.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_snapshot_restore() {
        let mut source = ContentStore::open(MemoryStore::new()).await;
        source.add_portfolio_item(draft("Exported")).await;
        let snapshot = source.snapshot();

        let mut target = ContentStore::open(MemoryStore::new()).await;
        target.restore(snapshot.clone()).await;

        assert_eq!(target.portfolio_items(), snapshot.portfolio_items.as_slice());
        assert_eq!(snapshot.version, SNAPSHOT_VERSION);
        assert!(target.storage().contains(PORTFOLIO_KEY).await);
    }

    #[tokio::test]
    async fn test_restore_drops_repeated_ids() {
        let mut store = ContentStore::open(MemoryStore::new()).await;
        let mut snapshot = store.snapshot();
        let mut copy = snapshot.portfolio_items[0].clone();
        copy.title = LocalizedText::uniform("Copy");
        snapshot.portfolio_items.push(copy);

        store.restore(snapshot).await;
        let id = ItemId::new("1");
        assert_eq!(store.portfolio_items().iter().filter(|p| p.id == id).count(), 1);
        assert_ne!(store.portfolio_item(&id).unwrap().title.en, "Copy");

        assert!(store.delete_portfolio_item(&id).await);
        assert!(store.portfolio_item(&id).is_none());
        assert!(!store.delete_portfolio_item(&id).await);
    }

    #[tokio::test]
    async fn test_load_drops_repeated_ids() {
        let json = r#"[
            {"id":"a","title":{"en":"One","de":"Eins"},"period":"2020"},
            {"id":"a","title":{"en":"Two","de":"Zwei"},"period":"2021"}
        ]"#;
        let mut store = ContentStore::new(MemoryStore::with_entry(EXPERIENCE_KEY, json));
        let report = store.load().await;

        assert_eq!(report.experience, LoadSource::Stored);
        assert_eq!(store.experience_items().len(), 1);
        assert_eq!(store.experience_items()[0].period, "2020");
    }

    #[tokio::test]
    async fn test_reset_is_idempotent() {
        let mut store = ContentStore::open(MemoryStore::new()).await;
        store.add_portfolio_item(draft("X")).await;
        store.replace_skill_categories(Vec::new()).await;
        store.replace_experience_items(Vec::new()).await;

        store.reset_to_default().await;
        let once = store.snapshot();
        store.reset_to_default().await;
        let twice = store.snapshot();

        assert_eq!(once.portfolio_items, defaults::portfolio_items());
        assert_eq!(once.skill_categories, defaults::skill_categories());
        assert_eq!(once.experience_items, defaults::experience_items());
        assert_eq!(twice.portfolio_items, once.portfolio_items);
        assert_eq!(twice.skill_categories, once.skill_categories);
        assert_eq!(twice.experience_items, once.experience_items);
        assert!(store.storage().is_empty().await);
    }

    #[tokio::test]
    async fn test_reset_before_load_enables_saving() {
        let mut store = ContentStore::new(MemoryStore::new());
        store.reset_to_default().await;
        assert!(store.is_loaded());

        store.add_portfolio_item(draft("After reset")).await;
        assert_eq!(store.storage().len().await, 3);
    }

    #[tokio::test]
    async fn test_ids_stay_distinct_through_edits() {
        let mut store = ContentStore::open(MemoryStore::new()).await;

        let a = store.add_portfolio_item(draft("A")).await;
        let b = store.add_portfolio_item(draft("B")).await;
        store.delete_portfolio_item(&ItemId::new("3")).await;
        store.update_portfolio_item(&a, draft("A2")).await;
        store.delete_portfolio_item(&a).await;
        let c = store.add_portfolio_item(draft("A")).await;
        store.update_portfolio_item(&b, draft("B2")).await;
        let d = store.add_portfolio_item(draft("D")).await;

        assert_ne!(c, a);
        let ids: HashSet<&ItemId> = store.portfolio_items().iter().map(|p| &p.id).collect();
        assert_eq!(ids.len(), store.portfolio_items().len());
        assert!(ids.contains(&b) && ids.contains(&c) && ids.contains(&d));
        assert_eq!(store.portfolio_items().len(), 8);
    }

    #[test]
    fn test_blocking_caller() {
        let store = tokio_test::block_on(ContentStore::open(MemoryStore::new()));
        assert_eq!(store.portfolio_items().len(), 6);
    }
}
