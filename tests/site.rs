//! Site Presentation Integration Tests
//!
//! Tests for locale switching across UI strings and stored content, and
//! for the admin gate in front of content edits.

use showcase::admin::AdminGate;
use showcase::core::ContentStore;
use showcase::domain::{ItemId, Locale};
use showcase::i18n::{self, Translator};
use showcase::storage::MemoryStore;

#[tokio::test]
async fn test_locale_switch_covers_ui_and_content() {
    let store = ContentStore::open(MemoryStore::new()).await;
    let mut t = Translator::default();

    let experience_en = t.t("experience.title");
    let first_en = store.experience_items()[0].title.get(t.locale()).to_string();

    t.set_locale(Locale::De);
    assert_eq!(experience_en, "Experience");
    assert_eq!(t.t("experience.title"), "Erfahrung");
    assert_ne!(store.experience_items()[0].title.get(t.locale()), first_en);
}

#[test]
fn test_every_locale_translates_every_key() {
    for locale in Locale::ALL {
        let t = Translator::new(locale);
        for key in i18n::keys(Locale::En) {
            assert!(t.has(key), "{key} missing for {locale}");
            assert_ne!(t.t(key), key);
        }
    }
}

#[test]
fn test_unknown_key_is_shown_verbatim() {
    let t = Translator::new(Locale::En);
    assert_eq!(t.t("nav.blog"), "nav.blog");
}

#[tokio::test]
async fn test_admin_gate_guards_edits() {
    let mut gate = AdminGate::new("letmein");
    let mut store = ContentStore::open(MemoryStore::new()).await;

    assert!(!gate.login("admin123"));
    assert!(!gate.is_authenticated());

    assert!(gate.login("letmein"));
    if gate.is_authenticated() {
        assert!(store.delete_portfolio_item(&ItemId::new("6")).await);
    }
    gate.logout();

    assert!(!gate.is_authenticated());
    assert_eq!(store.portfolio_items().len(), 5);
}
