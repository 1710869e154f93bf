//! Content Store Integration Tests
//!
//! Tests for durable persistence across store instances, reset and
//! snapshot export/import on the file backend.

use showcase::core::{ContentSnapshot, ContentStore, LoadSource, SNAPSHOT_VERSION};
use showcase::domain::{ExperienceItem, ItemId, LocalizedText, PortfolioDraft};
use showcase::storage::{FileStore, KeyValueStore, CONTENT_KEYS, PORTFOLIO_KEY};
use tempfile::TempDir;

fn draft(title: &str) -> PortfolioDraft {
    PortfolioDraft::new(
        LocalizedText::new(title, format!("{} (de)", title)),
        LocalizedText::new("Description", "Beschreibung"),
        "/images/new.png",
    )
}

#[tokio::test]
async fn test_first_run_to_reset_scenario() {
    let temp = TempDir::new().unwrap();
    let mut store = ContentStore::open(FileStore::new(temp.path())).await;

    // First run: built-in content, nothing written yet
    assert_eq!(store.portfolio_items().len(), 6);
    assert_eq!(store.skill_categories().len(), 7);
    assert_eq!(store.experience_items().len(), 3);
    assert!(store.storage().get(PORTFOLIO_KEY).await.unwrap().is_none());

    // Add
    let id = store.add_portfolio_item(draft("Poster")).await;
    assert_eq!(store.portfolio_items().len(), 7);
    assert!(ItemId::new("1") != id);

    // Delete a built-in item
    assert!(store.delete_portfolio_item(&ItemId::new("2")).await);
    assert_eq!(store.portfolio_items().len(), 6);
    assert!(store.portfolio_item(&ItemId::new("2")).is_none());

    // Reset
    store.reset_to_default().await;
    assert_eq!(store.portfolio_items().len(), 6);
    assert!(store.portfolio_item(&ItemId::new("2")).is_some());
    assert!(store.portfolio_item(&id).is_none());
    for key in CONTENT_KEYS {
        assert!(store.storage().get(key).await.unwrap().is_none());
    }
}

#[tokio::test]
async fn test_content_survives_reopen() {
    let temp = TempDir::new().unwrap();

    let id = {
        let mut store = ContentStore::open(FileStore::new(temp.path())).await;
        let id = store.add_portfolio_item(draft("Album cover")).await;
        store
            .update_portfolio_item(&ItemId::new("1"), draft("Renamed").with_link("https://example.com"))
            .await;
        id
    };

    let mut reopened = ContentStore::new(FileStore::new(temp.path()));
    let report = reopened.load().await;

    assert_eq!(report.portfolio, LoadSource::Stored);
    assert_eq!(report.skills, LoadSource::Stored);
    assert_eq!(report.experience, LoadSource::Stored);

    let added = reopened.portfolio_item(&id).unwrap();
    assert_eq!(added.title.de, "Album cover (de)");

    let first = &reopened.portfolio_items()[0];
    assert_eq!(first.id, ItemId::new("1"));
    assert_eq!(first.title.en, "Renamed");
    assert_eq!(first.link.as_deref(), Some("https://example.com"));
}

#[tokio::test]
async fn test_stored_json_uses_camel_case_fields() {
    let temp = TempDir::new().unwrap();
    let mut store = ContentStore::open(FileStore::new(temp.path())).await;
    store
        .add_portfolio_item(draft("Clip").with_video_url("https://example.com/clip.mp4"))
        .await;

    let raw = std::fs::read_to_string(temp.path().join("alfred-portfolio-items.json")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    let items = value.as_array().unwrap();

    assert_eq!(items.len(), 7);
    assert_eq!(items[6]["videoUrl"], "https://example.com/clip.mp4");
    assert_eq!(items[6]["title"]["de"], "Clip (de)");
    assert!(items[6].get("link").is_none());
}

#[tokio::test]
async fn test_corrupt_file_recovers_only_that_key() {
    let temp = TempDir::new().unwrap();
    {
        let mut store = ContentStore::open(FileStore::new(temp.path())).await;
        store.replace_experience_items(Vec::new()).await;
    }
    std::fs::write(temp.path().join("alfred-portfolio-items.json"), "{broken").unwrap();

    let mut store = ContentStore::new(FileStore::new(temp.path()));
    let report = store.load().await;

    assert_eq!(report.portfolio, LoadSource::Recovered);
    assert_eq!(store.portfolio_items().len(), 6);
    assert_eq!(report.experience, LoadSource::Stored);
    assert!(store.experience_items().is_empty());
}

#[tokio::test]
async fn test_snapshot_export_import_between_sites() {
    let source_dir = TempDir::new().unwrap();
    let target_dir = TempDir::new().unwrap();

    let mut source = ContentStore::open(FileStore::new(source_dir.path())).await;
    source.add_portfolio_item(draft("Exported")).await;
    source
        .replace_experience_items(vec![ExperienceItem {
            id: ItemId::new("x"),
            title: LocalizedText::new("Studio work", "Studioarbeit"),
            period: "2025".to_string(),
        }])
        .await;

    let json = serde_json::to_string_pretty(&source.snapshot()).unwrap();
    let snapshot: ContentSnapshot = serde_json::from_str(&json).unwrap();
    assert_eq!(snapshot.version, SNAPSHOT_VERSION);

    let mut target = ContentStore::open(FileStore::new(target_dir.path())).await;
    target.restore(snapshot).await;

    let reopened = ContentStore::open(FileStore::new(target_dir.path())).await;
    assert_eq!(reopened.portfolio_items(), source.portfolio_items());
    assert_eq!(reopened.skill_categories(), source.skill_categories());
    assert_eq!(reopened.experience_items().len(), 1);
    assert_eq!(reopened.experience_items()[0].title.de, "Studioarbeit");
}
